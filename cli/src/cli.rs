use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ./blog.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the tokens of BLOG files
    Lex {
        /// Files to lex; `-` reads standard input
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
        /// Hide whitespace and comments
        #[arg(long, default_value_t = false)]
        no_trivia: bool,
    },
    /// Report unrecognized characters in BLOG files
    Check {
        /// Files to check; `-` reads standard input
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },
    /// Lex lines typed at a prompt
    Repl {},
}
