//! # Language Module
//!
//! Language specific operations such as tokenization are in the submodules.
//! At present there is one, `zxbasic`, for the ZX Spectrum BASIC dialect including the
//! Next extensions.  This module holds what the dialects would share, the error type and
//! helpers for reading settings out of JSON.

pub mod zxbasic;

use thiserror::Error;

#[derive(Error,Debug)]
pub enum Error {
    #[error("Configuration could not be parsed")]
    BadConfig
}

/// If `key` is a boolean in `obj`, copy it into `curr`, otherwise leave `curr` alone
pub fn update_json_bool(obj: &serde_json::Value, key: &str, curr: &mut bool) {
    if let Some(x) = obj.get(key) {
        if let Some(val) = x.as_bool() {
            *curr = val;
        }
    }
}

/// If `key` is an integer in `obj`, copy it into `curr`, otherwise leave `curr` alone
pub fn update_json_i64(obj: &serde_json::Value, key: &str, curr: &mut i64) {
    if let Some(x) = obj.get(key) {
        if let Some(val) = x.as_i64() {
            *curr = val;
        }
    }
}
