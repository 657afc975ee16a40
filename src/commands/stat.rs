use super::get_input;
use crate::fs::{self,plus3dos};
use crate::lang::zxbasic::ProgramImage;
use crate::STDRESULT;

/// Print the header and a summary of the program as JSON
pub fn stat(cmd: &clap::ArgMatches) -> STDRESULT {
    let dat = get_input(cmd,"stat")?;
    let header = match plus3dos::read_header(&dat) {
        Some(header) => header,
        None => {
            log::error!("stat requires a +3DOS header");
            return Err(Box::new(fs::Error::NoHeader));
        }
    };
    let program = ProgramImage::from_bytes(&dat,plus3dos::HEADER_LEN);
    let mut obj = json::object! {
        header: header.to_json_value(),
        program: {
            lines: program.lines.len(),
            bytes: dat.len() - plus3dos::HEADER_LEN,
            truncated: program.truncated
        }
    };
    if header.file_size as usize != dat.len() {
        log::warn!("header gives file size {}, actual size is {}",header.file_size,dat.len());
        obj["program"]["size_mismatch"] = json::JsonValue::from(true);
    }
    let s = match cmd.get_one::<u16>("indent") {
        Some(spaces) => json::stringify_pretty(obj,*spaces),
        None => json::stringify(obj)
    };
    println!("{}",s);
    Ok(())
}
