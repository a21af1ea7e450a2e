use std::{
    env,
    fs::read_to_string,
    io::{self, IsTerminal},
    process::ExitCode,
};

use toy::{
    driver::Driver,
    lexer::lexer::{stdin_lexer, Lexer},
};

const USAGE: &str = "usage: toy [--ast] [FILE]";

struct Options {
    dump_ast: bool,
    file: Option<String>,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut options = Options {
        dump_ast: false,
        file: None,
    };

    for arg in args {
        match arg.as_str() {
            "--ast" => options.dump_ast = true,
            "-h" | "--help" => return Err(String::new()),
            flag if flag.starts_with('-') => return Err(format!("unknown option `{}`", flag)),
            _ if options.file.is_some() => return Err(String::from("only one input file is accepted")),
            _ => options.file = Some(arg),
        }
    }

    Ok(options)
}

fn main() -> ExitCode {
    let options = match parse_args(env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            if !message.is_empty() {
                eprintln!("Error {}", message);
            }
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    let result = match &options.file {
        Some(file_path) => {
            let file_name = file_path.rsplit('/').next().unwrap_or(file_path).to_string();
            let file_contents = match read_to_string(file_path) {
                Ok(contents) => contents,
                Err(error) => {
                    eprintln!("Error failed to read {}: {}", file_path, error);
                    return ExitCode::FAILURE;
                }
            };

            Driver::new(Box::new(io::stdout()), Box::new(io::stderr()))
                .with_ast_dump(options.dump_ast)
                .run(Lexer::new(file_contents.chars(), Some(file_name)))
        }
        None => Driver::new(Box::new(io::stdout()), Box::new(io::stderr()))
            .with_prompt(io::stdin().is_terminal())
            .with_ast_dump(options.dump_ast)
            .run(stdin_lexer()),
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error {}", error);
            ExitCode::FAILURE
        }
    }
}
