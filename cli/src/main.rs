use blog_cli::Cli;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    match blog_cli::run(Cli::parse()) {
        | Ok(()) => ExitCode::SUCCESS,
        | Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
