//! # File System Module
//!
//! File system modules handle the metadata that a disk operating system wraps around a file.
//! At present the only one is +3DOS, which prefixes every file with a 128 byte header
//! carrying the size, the type, and for BASIC programs the autostart line.
//!
//! The file types that +3DOS can record in its header are enumerated here by `FileType`.

pub mod plus3dos;

use num_derive::FromPrimitive;

/// Enumerates file system errors.  The `Display` trait will print equivalent long message.
#[derive(thiserror::Error,Debug)]
pub enum Error {
    #[error("file has no recognizable header")]
    NoHeader,
    #[error("file header format is wrong")]
    HeaderFormat
}

/// Type byte found at offset 15 of a +3DOS header.
/// These are the same codes the tape system puts in its headers.
#[derive(FromPrimitive,PartialEq,Eq,Clone,Copy,Debug)]
pub enum FileType {
    Program = 0,
    NumberArray = 1,
    CharacterArray = 2,
    Code = 3
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Program => write!(f,"program"),
            Self::NumberArray => write!(f,"number array"),
            Self::CharacterArray => write!(f,"character array"),
            Self::Code => write!(f,"code")
        }
    }
}
