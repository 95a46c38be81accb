use std::{
    io,
    process::ExitCode,
};

use lexiskip::{
    checker::report_files,
    cli::CheckArgs,
    config::Config,
    Error,
};

fn run() -> Result<(), Error> {
    let args = CheckArgs::parse(std::env::args().skip(1))?;
    let config = Config::new(args.max_height)?;

    report_files(io::stdout().lock(), &args.dictionary, &args.text, &config)?;
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        | Ok(()) => ExitCode::SUCCESS,
        | Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("usage: lexiskip <dictionary> <text> <max_height>");
            ExitCode::FAILURE
        },
    }
}
