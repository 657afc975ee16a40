//! # `zxkit` main library
//!
//! This library converts ZX Spectrum BASIC programs between the tokenized form found
//! in +3DOS files and a plain text listing.  The token set includes the ZX Spectrum Next
//! extensions.
//!
//! ## Architecture
//!
//! * `fs::plus3dos` builds and reads the 128 byte +3DOS header that wraps a program file
//! * `lang::zxbasic` handles (de)tokenization of the program lines that follow the header
//!
//! The top level conversions are `lang::zxbasic::encode` and `lang::zxbasic::decode`.
//! None of the conversions perform I/O, the caller hands over a buffer and receives one back.
//! Malformed input is never fatal, the codec does its best and logs what it had to skip.
//!
//! ## Command Line
//!
//! The `zxkit` executable wraps the library with a pipeline friendly CLI,
//! the subcommands are in the `commands` module.

pub mod fs;
pub mod lang;
pub mod commands;

pub type DYNERR = Box<dyn std::error::Error>;
pub type STDRESULT = Result<(),Box<dyn std::error::Error>>;

/// Display binary to stdout in columns of hex and ascii.
/// Token bytes and other bytes outside printable ascii are shown as `.`.
pub fn display_block(start_addr: usize,block: &[u8]) {
    let mut slice_start = 0;
    loop {
        let row_label = start_addr + slice_start;
        let mut slice_end = slice_start + 16;
        if slice_end > block.len() {
            slice_end = block.len();
        }
        let slice = &block[slice_start..slice_end];
        let txt: Vec<u8> = slice.iter().map(|c| match *c {
            x if x<32 => '.' as u8,
            x if x<127 => x,
            _ => '.' as u8
        }).collect();
        print!("{:04X} : ",row_label);
        for byte in slice {
            print!("{:02X} ",byte);
        }
        for _blank in slice_end..slice_start+16 {
            print!("   ");
        }
        println!("| {}",String::from_utf8_lossy(&txt));
        slice_start += 16;
        if slice_end==block.len() {
            break;
        }
    }
}
