use clap::{value_parser, crate_version, Arg, ArgAction, Command, ValueHint};

const IN_HELP: &str = "if the input is piped, omit `--file` option";
const CONFIG_LONG_HELP: &str = "JSON string with settings, for example
'{\"tokenizer\":{\"firstLine\":100,\"lineStep\":10},\"detokenizer\":{\"autostartDirective\":false}}'
missing keys keep their defaults";

fn file_arg(help: &'static str) -> Arg {
    Arg::new("file").short('f').long("file").value_name("PATH").help(help)
        .value_hint(ValueHint::FilePath)
        .required(false)
}

fn output_arg() -> Arg {
    Arg::new("output").short('o').long("output").value_name("PATH").help("output path, omit to use stdout")
        .value_hint(ValueHint::FilePath)
        .required(false)
}

fn config_arg() -> Arg {
    Arg::new("config").long("config").value_name("JSON").help("settings as a JSON string")
        .long_help(CONFIG_LONG_HELP)
        .required(false)
}

fn console_arg() -> Arg {
    Arg::new("console").long("console").help("format for console unconditionally")
        .required(false)
        .action(ArgAction::SetTrue)
        .long_help("even if the output context is a file or pipe, format it for the console")
}

fn indent_arg() -> Arg {
    Arg::new("indent").long("indent").help("JSON indentation, omit to minify")
        .value_name("SPACES")
        .value_parser(value_parser!(u16).range(0..16))
        .required(false)
}

pub fn build_cli() -> Command {
    let long_help = "zxkit is always invoked with exactly one of several subcommands.
The subcommands are generally designed to function as nodes in a pipeline.
Set RUST_LOG environment variable to control logging level.
  levels: trace,debug,info,warn,error

Examples:
---------
tokenize to file:      `zxkit tokenize -f prog.txt -o PROG.BAS`
tokenize from pipe:    `cat prog.txt | zxkit tok > PROG.BAS`
detokenize to stdout:  `zxkit detokenize -f PROG.BAS`
inspect header:        `zxkit stat -f PROG.BAS --indent 2`";

    let mut main_cmd = Command::new("zxkit")
        .about("Converts ZX Spectrum BASIC programs between +3DOS files and text.")
        .after_long_help(long_help)
        .version(crate_version!());
    main_cmd = main_cmd.subcommand(
        Command::new("tokenize")
            .arg(file_arg("path to the program listing"))
            .arg(output_arg())
            .arg(
                Arg::new("headerless").long("headerless").help("omit the +3DOS header")
                    .action(ArgAction::SetTrue),
            )
            .arg(console_arg())
            .arg(config_arg())
            .visible_alias("tok")
            .about("read listing, tokenize, write +3DOS program file")
            .after_help(IN_HELP),
    );
    main_cmd = main_cmd.subcommand(
        Command::new("detokenize")
            .arg(file_arg("path to the program file, with or without header"))
            .arg(output_arg())
            .arg(config_arg())
            .visible_alias("dtok")
            .about("read program file, detokenize, write listing")
            .after_help(IN_HELP),
    );
    main_cmd = main_cmd.subcommand(
        Command::new("stat")
            .arg(file_arg("path to the program file"))
            .arg(indent_arg())
            .about("write header and program summary as a JSON string to stdout")
            .after_help(IN_HELP),
    );
    main_cmd = main_cmd.subcommand(
        Command::new("completions")
            .arg(
                Arg::new("shell").short('s').long("shell").help("shell target").value_name("NAME")
                    .required(true)
                    .value_parser(["bash","elv","fish","ps1","zsh"])
            )
            .about("write completions script to stdout for the specified shell")
    );
    return main_cmd;
}
