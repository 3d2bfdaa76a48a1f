use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use walkdir::WalkDir;

use jfront::ast::AstPrinter;
use jfront::parser::{Diagnostic, TokenKind};

#[derive(Parser)]
#[command(name = "jfront", version, about = "Resilient front-end for Java-like snippets")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Tokenize a snippet file and print the token stream
    Lex {
        /// Input file
        input: PathBuf,
        /// Print line:column next to each token
        #[arg(long)]
        locations: bool,
    },
    /// Parse a snippet file and print the tree
    Parse {
        /// Input file
        input: PathBuf,
        /// Print the full indented tree instead of a summary
        #[arg(long)]
        detailed: bool,
    },
    /// Parse every .java file under a directory and report diagnostics
    Scan {
        /// Root directory
        dir: PathBuf,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    match cli.command {
        Command::Lex { input, locations } => lex(&input, locations),
        Command::Parse { input, detailed } => parse(&input, detailed),
        Command::Scan { dir } => scan(&dir),
    }
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn report(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("{} [{}]", diagnostic, diagnostic.recovery);
    }
}

fn lex(input: &Path, locations: bool) -> Result<ExitCode> {
    let source = read_source(input)?;
    let (tokens, diagnostics) = jfront::tokenize(&source);

    for token in &tokens {
        let kind = token.token_type().kind();
        let lexeme = match kind {
            TokenKind::StringLiteral => format!("{:?}", token.lexeme()),
            _ => token.lexeme().to_string(),
        };
        if locations {
            println!("{:>8}  {:<16} {}", token.location().to_string(), kind.to_string(), lexeme);
        } else {
            println!("{:<16} {}", kind.to_string(), lexeme);
        }
    }

    report(&diagnostics);
    Ok(exit_code(&diagnostics))
}

fn parse(input: &Path, detailed: bool) -> Result<ExitCode> {
    let source = read_source(input)?;
    let (file, diagnostics) = jfront::parse(&source);

    if detailed {
        print!("{}", AstPrinter::new().print(&file));
    } else {
        if let Some(ref package) = file.package {
            println!("package {}", package.name);
        }
        println!("{} import(s)", file.imports.len());
        for declaration in &file.declarations {
            println!("{}", declaration);
        }
    }

    report(&diagnostics);
    Ok(exit_code(&diagnostics))
}

fn scan(dir: &Path) -> Result<ExitCode> {
    let mut files = 0usize;
    let mut errors = 0usize;
    let mut warnings = 0usize;

    for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.extension().map(|e| e == "java").unwrap_or(false) {
            continue;
        }
        files += 1;
        let source = read_source(path)?;
        let (file, diagnostics) = jfront::parse(&source);

        let file_errors = diagnostics.iter().filter(|d| d.is_error()).count();
        let file_warnings = diagnostics.len() - file_errors;
        errors += file_errors;
        warnings += file_warnings;

        println!(
            "{}: {} declaration(s), {} error(s), {} warning(s)",
            path.display(),
            file.declarations.len(),
            file_errors,
            file_warnings
        );
        for diagnostic in &diagnostics {
            println!("  {} [{}]", diagnostic, diagnostic.recovery);
        }
    }

    println!("scanned {} file(s): {} error(s), {} warning(s)", files, errors, warnings);
    Ok(if errors > 0 { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

fn exit_code(diagnostics: &[Diagnostic]) -> ExitCode {
    if diagnostics.iter().any(|d| d.is_error()) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
