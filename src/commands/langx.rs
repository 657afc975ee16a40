//! ## Language Transformations

use super::{get_input,put_output,get_settings,CommandError};
use crate::fs::plus3dos;
use crate::lang::zxbasic::tokenizer::Tokenizer;
use crate::STDRESULT;

pub fn tokenize(cmd: &clap::ArgMatches) -> STDRESULT {
    let dat = get_input(cmd,"tokenize")?;
    let program = match String::from_utf8(dat) {
        Ok(s) => s,
        Err(e) => {
            log::error!("the file to tokenize could not be interpreted as a string");
            return Err(Box::new(e));
        }
    };
    let mut tokenizer = Tokenizer::new();
    tokenizer.set_config(&get_settings(cmd)?);
    let object = match cmd.get_flag("headerless") {
        true => {
            let (object,autostart) = tokenizer.tokenize(&program);
            if autostart.is_some() {
                log::warn!("autostart line is lost without a header");
            }
            object
        },
        false => {
            let (mut body,autostart) = tokenizer.tokenize(&program);
            if body.len() > u16::MAX as usize {
                log::error!("program is {} bytes, too long for a +3DOS program file",body.len());
                return Err(Box::new(CommandError::OutOfRange));
            }
            let mut object = plus3dos::build_header(body.len() as u32,autostart)?;
            object.append(&mut body);
            object
        }
    };
    if cmd.get_one::<String>("output").is_none() && (atty::is(atty::Stream::Stdout) || cmd.get_flag("console")) {
        crate::display_block(0,&object);
        return Ok(());
    }
    put_output(cmd,&object)
}

pub fn detokenize(cmd: &clap::ArgMatches) -> STDRESULT {
    let tok = get_input(cmd,"detokenize")?;
    let mut tokenizer = Tokenizer::new();
    tokenizer.set_config(&get_settings(cmd)?);
    let program = tokenizer.detokenize(&tok);
    put_output(cmd,program.as_bytes())
}
