//! # Command Line Interface
//!
//! The subcommands are in the `commands` module, `cli.rs` builds the parser.

use env_logger;
use log::error;
use zxkit::commands;
use zxkit::commands::CommandError;

mod cli;

fn main() -> Result<(),Box<dyn std::error::Error>>
{
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let main_cmd = cli::build_cli();
    let matches = main_cmd.clone().get_matches();

    // Language transformations

    if let Some(cmd) = matches.subcommand_matches("tokenize") {
        return commands::langx::tokenize(cmd);
    }
    if let Some(cmd) = matches.subcommand_matches("detokenize") {
        return commands::langx::detokenize(cmd);
    }

    // File information

    if let Some(cmd) = matches.subcommand_matches("stat") {
        return commands::stat::stat(cmd);
    }

    if let Some(cmd) = matches.subcommand_matches("completions") {
        return commands::completions::generate(main_cmd,cmd);
    }

    error!("No subcommand was found, try `zxkit --help`");
    return Err(Box::new(CommandError::InvalidCommand));
}
