//! # ZX Spectrum BASIC
//!
//! Tokenization and detokenization of ZX Spectrum BASIC, including the keywords added
//! by the ZX Spectrum Next.  A tokenized program is a sequence of line records,
//!
//! `[line number, BE u16][body length, LE u16][body]`
//!
//! where the body ends with `0x0D`.  Keywords are single bytes from 0x87 upward, and every
//! numeric literal is followed by a hidden binary copy of its value, see `number`.
//! On disk the records are preceded by the +3DOS header, see `crate::fs::plus3dos`.
//!
//! The conversions here never fail on malformed input.  Unknown bytes are dropped and a
//! truncated program yields the lines that were complete.

pub mod token_maps;
pub mod number;
pub mod tokenizer;
pub mod settings;
#[cfg(test)]
mod detokenize_test;

use log::{warn,debug};
use crate::DYNERR;

/// terminates every line body
pub const EOL: u8 = 0x0d;

/// A program line as stored in the tokenized file.
/// The body always ends with the `EOL` byte.
#[derive(Clone,Debug,PartialEq)]
pub struct Line {
    pub number: u16,
    pub body: Vec<u8>
}

impl Line {
    /// Create a line from its tokenized payload, the terminator is appended.
    pub fn new(number: u16,payload: &[u8]) -> Self {
        let mut body = payload.to_vec();
        body.push(EOL);
        Self {
            number,
            body
        }
    }
    /// The body without its terminator
    pub fn payload(&self) -> &[u8] {
        self.body.split_last().map_or(&[][..],|(_,payload)| payload)
    }
    pub fn to_bytes(&self) -> Vec<u8> {
        if self.body.len() > u16::MAX as usize {
            warn!("line {} is too long, the length field will be wrong",self.number);
        }
        let mut ans = u16::to_be_bytes(self.number).to_vec();
        ans.append(&mut u16::to_le_bytes(self.body.len() as u16).to_vec());
        ans.append(&mut self.body.clone());
        ans
    }
}

/// Ordered lines of a program, without the file header
#[derive(Clone,Debug,PartialEq)]
pub struct ProgramImage {
    pub lines: Vec<Line>,
    /// the data ended in the middle of a line record
    pub truncated: bool
}

impl ProgramImage {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            truncated: false
        }
    }
    /// Split the data starting at `offset` into lines.
    /// Stops quietly at the first record that runs past the end of the data, the lines
    /// before it are kept and `truncated` is set.  A missing terminator on the very last
    /// line is tolerated.
    pub fn from_bytes(dat: &[u8],offset: usize) -> Self {
        let mut ans = Self::new();
        let mut addr = offset;
        while addr < dat.len() {
            if addr + 4 > dat.len() {
                warn!("{} stray bytes at end of program",dat.len()-addr);
                ans.truncated = true;
                break;
            }
            let number = u16::from_be_bytes([dat[addr],dat[addr+1]]);
            let len = u16::from_le_bytes([dat[addr+2],dat[addr+3]]) as usize;
            addr += 4;
            let payload_len = len.saturating_sub(1);
            if addr + payload_len > dat.len() {
                warn!("line {} runs past the end of the data, program is truncated",number);
                ans.truncated = true;
                break;
            }
            ans.lines.push(Line::new(number,&dat[addr..addr+payload_len]));
            addr += len;
        }
        debug!("found {} lines",ans.lines.len());
        ans
    }
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut ans = Vec::new();
        for line in &self.lines {
            ans.append(&mut line.to_bytes());
        }
        ans
    }
}

/// Detokenize a program, with or without its +3DOS header, using default settings.
pub fn decode(dat: &[u8]) -> String {
    tokenizer::Tokenizer::new().detokenize(dat)
}

/// Tokenize a listing using default settings.
/// Returns the line records and the autostart line requested by a `#autostart` directive.
pub fn encode(program: &str) -> (Vec<u8>,Option<u16>) {
    tokenizer::Tokenizer::new().tokenize(program)
}

/// Tokenize a listing into a complete +3DOS file, header included.
pub fn encode_with_header(program: &str) -> Result<Vec<u8>,DYNERR> {
    tokenizer::Tokenizer::new().tokenize_file(program)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_record() {
        let line = Line::new(0x0102,&[0xf5,0x31]);
        assert_eq!(line.to_bytes(),vec![0x01,0x02,0x03,0x00,0xf5,0x31,0x0d]);
        assert_eq!(line.payload(),&[0xf5,0x31]);
    }
    #[test]
    fn empty_body() {
        let line = Line { number: 10, body: vec![] };
        assert!(line.payload().is_empty());
    }
    #[test]
    fn segmentation() {
        let dat = hex::decode("000A0200000D00140300F5310D").expect("hex error");
        let img = ProgramImage::from_bytes(&dat,0);
        assert!(!img.truncated);
        assert_eq!(img.lines.len(),2);
        assert_eq!(img.lines[0],Line::new(10,&[0]));
        assert_eq!(img.lines[1],Line::new(20,&[0xf5,0x31]));
        assert_eq!(img.to_bytes(),dat);
    }
    #[test]
    fn truncated_record() {
        // second line claims 16 bytes but only 3 follow
        let dat = hex::decode("000A0200000D00141000F5310D").expect("hex error");
        let img = ProgramImage::from_bytes(&dat,0);
        assert!(img.truncated);
        assert_eq!(img.lines.len(),1);
        // record header cut short
        let img = ProgramImage::from_bytes(&dat[0..8],0);
        assert!(img.truncated);
        assert_eq!(img.lines.len(),1);
    }
    #[test]
    fn missing_final_terminator() {
        let dat = hex::decode("000A03004231").expect("hex error");
        let img = ProgramImage::from_bytes(&dat,0);
        assert!(!img.truncated);
        assert_eq!(img.lines,vec![Line::new(10,&[0x42,0x31])]);
    }
}
