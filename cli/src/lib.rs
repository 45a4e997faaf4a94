//! The `blog` harness: lex BLOG files and print tokens or diagnostics.

mod cli;
pub use cli::*;
pub mod conf;
pub use conf::Conf;
pub mod err;
pub use err::*;
pub mod render;
pub mod repl;

use blog_lexer::tokenize;
use blog_utils::span::FileInfo;
use colored::Colorize;
use std::{
    io::Read,
    path::{Path, PathBuf},
};

/// Read a source file; `-` means standard input.
pub fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    std::fs::read_to_string(path)
        .map_err(|source| CliError::ReadError { path: path.to_path_buf(), source })
}

pub fn run(cli: Cli) -> Result<()> {
    let conf = Conf::load(cli.config.as_deref())?;
    if !conf.color {
        colored::control::set_override(false);
    }
    match cli.command {
        | Commands::Lex { files, no_trivia } => {
            let show_trivia = conf.show_trivia && !no_trivia;
            for file in &files {
                let source = read_source(file)?;
                if files.len() > 1 {
                    println!("==> {} <==", file.display());
                }
                let stream = tokenize(&source);
                let info = FileInfo::new(&source, Some(file.clone()));
                print!("{}", render::render_tokens(&stream, &info, show_trivia));
            }
            Ok(())
        }
        | Commands::Check { files } => check_files(&files),
        | Commands::Repl {} => repl::launch(&conf),
    }
}

fn check_files(files: &[PathBuf]) -> Result<()> {
    let mut count = 0;
    let mut failed = 0;
    for file in files {
        let source = read_source(file)?;
        let stream = tokenize(&source);
        let info = FileInfo::new(&source, Some(file.clone()));
        let diags = render::diagnostics(&stream, &info);
        log::info!("{}: {} tokens, {} errors", file.display(), stream.len(), diags.len());
        if !diags.is_empty() {
            failed += 1;
            count += diags.len();
        }
        for diag in diags {
            eprintln!("{}", diag.red());
        }
    }
    if count > 0 { Err(CliError::LexErrors { count, files: failed }) } else { Ok(()) }
}
