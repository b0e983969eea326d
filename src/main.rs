mod logging;

use clap::{Args, Parser, Subcommand};
use iban_country_codes::{
    is_known_country_code, is_sepa_country, length_for_country_code, normalize_country_code,
    write_registry_csv, write_registry_csv_file,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "iban-countries")]
#[command(about = "IBAN length and SEPA membership per country", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the expected IBAN length for a country
    Length(CodeArgs),
    /// Print whether a country is part of SEPA
    Sepa(CodeArgs),
    /// Print whether a country code is registered
    Known(CodeArgs),
    /// Export the registry as CSV
    List(ListArgs),
}

#[derive(Args)]
struct CodeArgs {
    code: String,
    /// Pass the code to the registry as given, without trimming or uppercasing
    #[arg(long, default_value_t = false)]
    strict: bool,
}

#[derive(Args)]
struct ListArgs {
    #[arg(long, default_value_t = false)]
    sepa_only: bool,
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    if let Err(err) = logging::init_logging("iban-countries") {
        eprintln!("warning: logging disabled: {err}");
    }
    let cli = Cli::parse();
    match cli.command {
        Command::Length(args) => run_length(args),
        Command::Sepa(args) => run_sepa(args),
        Command::Known(args) => run_known(args),
        Command::List(args) => run_list(args),
    }
}

fn resolve_code(args: &CodeArgs) -> Option<String> {
    if args.strict {
        return Some(args.code.clone());
    }
    let normalized = normalize_country_code(&args.code);
    if normalized.is_none() {
        log::warn!("'{}' is not a two-letter country code", args.code);
    }
    normalized
}

fn run_length(args: CodeArgs) -> Result<(), String> {
    let code = resolve_code(&args);
    match code.as_deref().and_then(length_for_country_code) {
        Some(length) => {
            println!("{length}");
            Ok(())
        }
        None => Err(format!("unknown country code: {}", args.code)),
    }
}

fn run_sepa(args: CodeArgs) -> Result<(), String> {
    let code = resolve_code(&args);
    let sepa = code.as_deref().is_some_and(is_sepa_country);
    log::debug!("sepa lookup for {:?} -> {}", code, sepa);
    println!("{sepa}");
    Ok(())
}

fn run_known(args: CodeArgs) -> Result<(), String> {
    let code = resolve_code(&args);
    println!("{}", is_known_country_code(code.as_deref()));
    Ok(())
}

fn run_list(args: ListArgs) -> Result<(), String> {
    match args.output {
        Some(path) => {
            let rows = write_registry_csv_file(&path, args.sepa_only)?;
            log::info!("wrote {} countries to {}", rows, path.display());
        }
        None => {
            let stdout = std::io::stdout();
            write_registry_csv(stdout.lock(), args.sepa_only)?;
        }
    }
    Ok(())
}
