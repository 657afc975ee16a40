//! Module containing the ZX BASIC tokenizer
//!
//! Tokenizing works one source line at a time with a left to right scan that recognizes
//! strings, numbers, comments, and keywords.  There is no parser, so anything that
//! is not recognized passes through as text, and the result always has the shape the
//! ROM expects even when the program itself would not run.

use std::str::FromStr;
use std::sync::Arc;
use regex::Regex;
use log::{warn,debug,trace};
use super::token_maps::{TokenTable,REM_TOK};
use super::number::{self,HIDDEN_NUMBER_MARKER,HIDDEN_NUMBER_LEN};
use super::settings::Settings;
use super::{Line,ProgramImage};
use crate::fs::plus3dos;
use crate::DYNERR;

/// the Spectrum character set puts the copyright sign at 0x7F
const COPYRIGHT: u8 = 0x7f;
const COPYRIGHT_UTF8: &[u8] = "\u{a9}".as_bytes();

/// Copy text into the line, only the copyright sign is translated
fn push_text(body: &mut Vec<u8>,txt: &[u8]) {
	let mut i = 0;
	while i < txt.len() {
		if txt[i..].starts_with(COPYRIGHT_UTF8) {
			body.push(COPYRIGHT);
			i += COPYRIGHT_UTF8.len();
		} else {
			body.push(txt[i]);
			i += 1;
		}
	}
}

/// End of the numeric literal starting at `beg`, the whole run of digits and points.
/// Also returns the end of the part that gives the value, which has at most one point.
fn number_end(src: &[u8],beg: usize) -> (usize,usize) {
	let mut end = beg;
	let mut val_end = None;
	let mut point = false;
	while end < src.len() && (src[end].is_ascii_digit() || src[end]==b'.') {
		if src[end]==b'.' {
			if point && val_end.is_none() {
				val_end = Some(end);
			}
			point = true;
		}
		end += 1;
	}
	(end,val_end.unwrap_or(end))
}

/// A `;` opens a comment if only spaces separate it from the start of the statement
fn starts_comment(src: &[u8],pos: usize) -> bool {
	let mut i = pos;
	while i > 0 && src[i-1]==b' ' {
		i -= 1;
	}
	i==0 || src[i-1]==b':'
}

fn wrap_line_number(num: u32) -> u16 {
	if num > u16::MAX as u32 {
		warn!("line number {} overflows, it will wrap",num);
	}
	(num & 0xffff) as u16
}

/// Handles tokenization of ZX Spectrum BASIC
pub struct Tokenizer
{
	table: Arc<TokenTable>,
	line_num_patt: Regex,
	autostart_patt: Regex,
	first_line: u32,
	line_step: u32,
	autostart_directive: bool
}

impl Tokenizer
{
	/// Create a new `Tokenizer` structure with its own token table
	pub fn new() -> Self
	{
		Self::with_table(Arc::new(TokenTable::new()))
	}
	/// Create a new `Tokenizer` that shares an existing token table
	pub fn with_table(table: Arc<TokenTable>) -> Self
	{
		Self {
			table,
			line_num_patt: Regex::new(r"^([0-9]+)\s+(.*)$").expect("unreachable"),
			autostart_patt: Regex::new(r"(?i)^#autostart\s+([+-]?[0-9]+)").expect("unreachable"),
			first_line: 10,
			line_step: 10,
			autostart_directive: true
		}
	}
	pub fn set_config(&mut self,settings: &Settings) {
		self.first_line = settings.tokenizer.first_line as u32;
		self.line_step = settings.tokenizer.line_step as u32;
		self.autostart_directive = settings.detokenizer.autostart_directive;
	}
	/// Longest keyword at `pos`, returns the token and the length of the matched text.
	/// Keywords starting with a letter must not be preceded by a letter or followed by a letter or digit,
	/// so `OPEN #4` stays as text while `OPEN # 4` is tokenized.
	fn match_keyword(&self,src: &[u8],pos: usize) -> Option<(u8,usize)> {
		for (keyword,code) in self.table.all_keywords_by_descending_length() {
			let k = keyword.as_bytes();
			if pos + k.len() > src.len() {
				continue;
			}
			if !src[pos..pos+k.len()].eq_ignore_ascii_case(k) {
				continue;
			}
			if k[0].is_ascii_alphabetic() {
				let prev_ok = pos==0 || !src[pos-1].is_ascii_alphabetic();
				let next_ok = pos+k.len() >= src.len() || !src[pos+k.len()].is_ascii_alphanumeric();
				if !prev_ok || !next_ok {
					continue;
				}
			}
			return Some((*code,k.len()));
		}
		None
	}
	/// Tokenize the text of a line following its line number, the terminator is not included
	fn tokenize_text(&self,text: &str) -> Vec<u8> {
		let src = text.as_bytes();
		let mut ans = Vec::new();
		let mut i = 0;
		while i < src.len() {
			let c = src[i];
			// strings go in as is, an unterminated string runs to the end of the line
			if c==b'"' {
				let end = match src[i+1..].iter().position(|b| *b==b'"') {
					Some(rel) => i + rel + 2,
					None => src.len()
				};
				push_text(&mut ans,&src[i..end]);
				i = end;
				continue;
			}
			// numbers are followed by the hidden binary form
			if c.is_ascii_digit() || (c==b'.' && i+1 < src.len() && src[i+1].is_ascii_digit()) {
				let (end,val_end) = number_end(src,i);
				let literal = &text[i..end];
				if let Ok(val) = f64::from_str(&text[i..val_end]) {
					ans.extend_from_slice(literal.as_bytes());
					ans.push(HIDDEN_NUMBER_MARKER);
					ans.extend_from_slice(&number::pack(val));
					i = end;
					continue;
				}
				debug!("literal {} is not a number",literal);
			}
			if c==b';' && starts_comment(src,i) {
				push_text(&mut ans,&src[i..]);
				break;
			}
			if let Some((tok,len)) = self.match_keyword(src,i) {
				ans.push(tok);
				i += len;
				if tok==REM_TOK {
					push_text(&mut ans,&src[i..]);
					break;
				}
				while i < src.len() && src[i]==b' ' {
					i += 1;
				}
				continue;
			}
			if src[i..].starts_with(COPYRIGHT_UTF8) {
				ans.push(COPYRIGHT);
				i += COPYRIGHT_UTF8.len();
				continue;
			}
			ans.push(c);
			i += 1;
		}
		ans
	}
	/// Tokenize one trimmed source line that is not empty and not a directive.
	/// `default_num` is used if the line has no number of its own.
	/// Returns the line and the default number for the next line.
	pub fn tokenize_line(&self,line: &str,default_num: u32) -> (Line,u32) {
		let numbered = match self.line_num_patt.captures(line) {
			Some(caps) => {
				let text = caps.get(2).map_or("",|m| m.as_str());
				match u16::from_str(&caps[1]) {
					Ok(num) => Some((num,text)),
					Err(_) => {
						warn!("line number {} is out of range, using {}",&caps[1],default_num);
						None
					}
				}
			},
			None => None
		};
		let (num,next,text) = match numbered {
			Some((num,text)) => (num,(num as u32).saturating_add(self.line_step),text),
			None => (wrap_line_number(default_num),default_num.saturating_add(self.line_step),line)
		};
		trace!("tokenizing line {}",num);
		(Line::new(num,&self.tokenize_text(text)),next)
	}
	/// Update the autostart line if this is an autostart directive, other directives are ignored
	fn process_directive(&self,line: &str,autostart: &mut Option<u16>) {
		let caps = match self.autostart_patt.captures(line) {
			Some(caps) => caps,
			None => {
				debug!("ignoring directive {}",line);
				return;
			}
		};
		match i64::from_str(&caps[1]) {
			Ok(val) if val >= 0 && val < plus3dos::NO_AUTOSTART as i64 => {
				*autostart = Some(val as u16);
			},
			Ok(val) => {
				warn!("autostart line {} is out of range, program will not autostart",val);
				*autostart = None;
			},
			Err(_) => {
				warn!("autostart line {} could not be read",&caps[1]);
			}
		}
	}
	/// Tokenize a program contained in a UTF8 string into its lines.
	/// Also returns the autostart line, if any.
	pub fn tokenize_program(&self,program: &str) -> (ProgramImage,Option<u16>) {
		let mut image = ProgramImage::new();
		let mut autostart = None;
		let mut next_num = self.first_line;
		for raw in program.lines() {
			let line = raw.trim_matches(|c: char| c==' ' || c=='\t' || c=='\r' || c=='\n');
			if line.len()==0 {
				continue;
			}
			if line.starts_with('#') {
				self.process_directive(line,&mut autostart);
				continue;
			}
			let (tokenized,next) = self.tokenize_line(line,next_num);
			image.lines.push(tokenized);
			next_num = next;
		}
		(image,autostart)
	}
	/// Tokenize a program contained in a UTF8 string, result is the line records and the autostart line
	pub fn tokenize(&self,program: &str) -> (Vec<u8>,Option<u16>) {
		let (image,autostart) = self.tokenize_program(program);
		(image.to_bytes(),autostart)
	}
	/// Tokenize a program and wrap it with the +3DOS header
	pub fn tokenize_file(&self,program: &str) -> Result<Vec<u8>,DYNERR> {
		let (mut body,autostart) = self.tokenize(program);
		let mut ans = plus3dos::build_header(body.len() as u32,autostart)?;
		ans.append(&mut body);
		Ok(ans)
	}
	/// Detokenize one line, the result includes the line number and a newline
	pub fn detokenize_line(&self,line: &Line) -> String {
		let payload = line.payload();
		let mut code = line.number.to_string() + " ";
		let mut i = 0;
		while i < payload.len() {
			let b = payload[i];
			if b==HIDDEN_NUMBER_MARKER {
				// digits were already printed
				i += 1 + HIDDEN_NUMBER_LEN;
				continue;
			}
			if let Some(tok) = self.table.lookup_by_code(b) {
				code += tok;
				if i + 1 < payload.len() {
					let next = payload[i+1];
					if next < 128 && next!=HIDDEN_NUMBER_MARKER && (next.is_ascii_alphanumeric() || next==b'"' || next==b'.') {
						code += " ";
					}
				}
			} else if b >= 32 && b <= 126 {
				code.push(b as char);
			} else if b==COPYRIGHT {
				code.push('\u{a9}');
			} else {
				trace!("dropping byte {:02X} in line {}",b,line.number);
			}
			i += 1;
		}
		code + "\n"
	}
	/// Detokenize from byte array into a UTF8 string.
	/// If there is a +3DOS header the autostart line is given as a directive.
	pub fn detokenize(&self,img: &[u8]) -> String {
		let mut code = String::new();
		let mut offset = 0;
		if let Some(header) = plus3dos::read_header(img) {
			if let Some(line) = header.autostart() {
				if self.autostart_directive {
					code += &format!("#autostart {}\n",line);
				}
			}
			offset = plus3dos::HEADER_LEN;
		}
		let program = ProgramImage::from_bytes(img,offset);
		for line in &program.lines {
			code += &self.detokenize_line(line);
		}
		code
	}
}
