//! parlc - PArL front-end driver binary.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use parlc_drv::{Config, EmitType, Session};
use tracing_subscriber::EnvFilter;

/// Lex, parse, and analyze a PArL source file.
#[derive(Parser, Debug)]
#[command(name = "parlc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "PArL front-end: lexer, parser, semantic analyzer", long_about = None)]
struct Cli {
    /// PArL source file
    input: PathBuf,

    /// Stage to stop after and print
    #[arg(long, value_enum, default_value_t = EmitArg::Check)]
    emit: EmitArg,

    /// Log pipeline progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum EmitArg {
    /// Print the token stream
    Tokens,
    /// Print the parsed AST
    Ast,
    /// Run the full front-end
    Check,
}

impl From<EmitArg> for EmitType {
    fn from(arg: EmitArg) -> Self {
        match arg {
            EmitArg::Tokens => EmitType::Tokens,
            EmitArg::Ast => EmitType::Ast,
            EmitArg::Check => EmitType::Check,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let session = Session::new(Config {
        input: cli.input,
        emit: cli.emit.into(),
        verbose: cli.verbose,
    });

    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}
