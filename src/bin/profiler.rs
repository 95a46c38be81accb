use std::{
    io,
    process::ExitCode,
};

use lexiskip::{
    cli::ProfileArgs,
    profiler::report_profile,
    Error,
};

fn run() -> Result<(), Error> {
    let args = ProfileArgs::parse(std::env::args().skip(1))?;
    report_profile(
        io::stdout().lock(),
        &args.dictionary,
        &args.text,
        &args.max_heights,
    )?;
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        | Ok(()) => ExitCode::SUCCESS,
        | Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("usage: profiler <dictionary> <text> <max_height>...");
            ExitCode::FAILURE
        },
    }
}
