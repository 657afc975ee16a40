//! Parse the settings string passed in with `--config`.
//!
//! Only specific keys are checked, anything else in the JSON is ignored.
//! The defaults reproduce the behavior of the legacy conversion tools.

use log::error;
use crate::DYNERR;
use crate::lang::{update_json_bool,update_json_i64};

#[derive(Clone)]
pub struct Tokenizer {
    /// line number given to the first unnumbered line
    pub first_line: i64,
    /// increment applied after each line to get the next default number
    pub line_step: i64
}
#[derive(Clone)]
pub struct Detokenizer {
    /// print `#autostart` when the header has an autostart line
    pub autostart_directive: bool
}
#[derive(Clone)]
pub struct Settings {
    pub tokenizer: Tokenizer,
    pub detokenizer: Detokenizer
}

impl Settings {
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer {
                first_line: 10,
                line_step: 10
            },
            detokenizer: Detokenizer {
                autostart_directive: true
            }
        }
    }
}

pub fn parse(json: &str) -> Result<Settings,DYNERR> {
    let mut ans = Settings::new();
    let root = match serde_json::from_str::<serde_json::Value>(json) {
        Ok(root) => root,
        Err(e) => {
            error!("settings are not valid JSON: {}",e);
            return Err(Box::new(crate::lang::Error::BadConfig));
        }
    };
    if let Some(obj) = root.as_object() {
        for (key,val) in obj {
            match key.as_str() {
                "tokenizer" => {
                    update_json_i64(val,"firstLine",&mut ans.tokenizer.first_line);
                    update_json_i64(val,"lineStep",&mut ans.tokenizer.line_step);
                },
                "detokenizer" => {
                    update_json_bool(val,"autostartDirective",&mut ans.detokenizer.autostart_directive);
                },
                _ => {}
            }
        }
    }
    for (name,val) in [("firstLine",ans.tokenizer.first_line),("lineStep",ans.tokenizer.line_step)] {
        if val < 0 || val > u16::MAX as i64 {
            error!("{} must be in the range 0..65535, got {}",name,val);
            return Err(Box::new(crate::lang::Error::BadConfig));
        }
    }
    Ok(ans)
}
