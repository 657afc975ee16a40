//! # CLI Subcommands
//!
//! Contains modules that run the subcommands.

pub mod langx;
pub mod stat;
pub mod completions;

use std::io::{Read,Write};
use clap::parser::ValueSource;
use log::{error,info};
use crate::lang::zxbasic::settings::{self,Settings};
use crate::{DYNERR,STDRESULT};

#[derive(thiserror::Error,Debug)]
pub enum CommandError {
    #[error("Item type is not supported")]
    UnsupportedItemType,
    #[error("Command could not be interpreted")]
    InvalidCommand,
    #[error("One of the parameters was out of range")]
    OutOfRange,
    #[error("File not found")]
    FileNotFound
}

/// Get the bytes to work on from the `file` argument if present, otherwise from stdin.
/// The `verb` is the subcommand name, used in messages.
pub fn get_input(cmd: &clap::ArgMatches,verb: &str) -> Result<Vec<u8>,DYNERR> {
    let mut dat: Vec<u8> = Vec::new();
    if let Some(path) = cmd.get_one::<String>("file") {
        dat = match std::fs::read(path) {
            Ok(dat) => dat,
            Err(e) if e.kind()==std::io::ErrorKind::NotFound => {
                error!("{} could not find {}",verb,path);
                return Err(Box::new(CommandError::FileNotFound));
            },
            Err(e) => return Err(Box::new(e))
        };
        info!("read {} bytes from {}",dat.len(),path);
    } else {
        if atty::is(atty::Stream::Stdin) {
            error!("line entry is not supported for `{}`, please pipe something in",verb);
            return Err(Box::new(CommandError::InvalidCommand));
        }
        std::io::stdin().read_to_end(&mut dat)?;
    }
    if dat.len()==0 {
        error!("{} did not receive any data from previous node",verb);
        return Err(Box::new(CommandError::InvalidCommand));
    }
    Ok(dat)
}

/// Write to the `output` path if present, otherwise to stdout
pub fn put_output(cmd: &clap::ArgMatches,dat: &[u8]) -> STDRESULT {
    match cmd.get_one::<String>("output") {
        Some(path) => {
            std::fs::write(path,dat)?;
            info!("wrote {} bytes to {}",dat.len(),path);
        },
        None => std::io::stdout().write_all(dat)?
    }
    Ok(())
}

/// Settings with anything from `--config` applied
pub fn get_settings(cmd: &clap::ArgMatches) -> Result<Settings,DYNERR> {
    match (cmd.value_source("config"),cmd.get_one::<String>("config")) {
        (Some(ValueSource::CommandLine),Some(json)) => settings::parse(json),
        _ => Ok(Settings::new())
    }
}
