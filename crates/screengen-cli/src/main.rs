//! screengen compiler CLI.
//!
//! Reads a layout DSL document (a file or stdin) and writes the generated
//! Compose or SwiftUI source file (a file or stdout).

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};

use screengen_codegen::{compile_document, CodegenError, Target};
use screengen_core::Document;

/// Input path that stands for stdin.
const STDIN_PATH: &str = "-";

#[derive(Parser, Debug)]
#[command(name = "screengen", version)]
#[command(about = "Compile a layout DSL document to Compose or SwiftUI source")]
struct Cli {
    /// Input JSON document (reads stdin when absent or `-`)
    input: Option<PathBuf>,

    /// Target UI framework
    #[arg(short, long, value_enum, default_value_t = TargetArg::Compose)]
    target: TargetArg,

    /// Output file (writes stdout when absent)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TargetArg {
    /// Kotlin Jetpack Compose
    Compose,
    /// SwiftUI
    Swiftui,
}

impl From<TargetArg> for Target {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::Compose => Target::Compose,
            TargetArg::Swiftui => Target::SwiftUI,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the verbosity flag.
fn init_logger(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn run(cli: &Cli) -> Result<(), CodegenError> {
    let target = Target::from(cli.target);
    let source = read_input(cli.input.as_deref())?;

    let document = Document::from_json(&source)?;
    log::info!("compiling {} for {target}", input_label(cli.input.as_deref()));

    let code = compile_document(&document, target)?;
    write_output(cli.output.as_deref(), &code)?;
    Ok(())
}

fn is_stdin(path: Option<&Path>) -> bool {
    path.map_or(true, |path| path == Path::new(STDIN_PATH))
}

fn input_label(path: Option<&Path>) -> String {
    match path {
        Some(path) if !is_stdin(Some(path)) => path.display().to_string(),
        _ => "<stdin>".to_string(),
    }
}

fn read_input(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) if !is_stdin(Some(path)) => fs::read_to_string(path),
        _ => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn write_output(path: Option<&Path>, code: &str) -> io::Result<()> {
    match path {
        Some(path) => {
            let mut file = fs::File::create(path)?;
            write_code(&mut file, code)?;
            log::debug!("wrote {}", path.display());
            Ok(())
        }
        None => write_code(&mut io::stdout().lock(), code),
    }
}

/// Generated code followed by a single newline.
fn write_code<W: Write>(out: &mut W, code: &str) -> io::Result<()> {
    writeln!(out, "{code}")?;
    out.flush()
}
