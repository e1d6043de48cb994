//! Command-line entry point for the weekly pay calculator.
//!
//! Usage: `payday <worked-hours-file>`. The rate table is read from
//! `rates.txt` in the current directory unless the `PAYDAY_RATES`
//! environment variable names another file.
//!
//! Exit codes: `0` on success, `1` for a wrong argument count or an
//! unreadable file, `2` for a malformed worked-hours line, `3` for a bad
//! day code or period/rate token, `4` for a worked day with no configured
//! rates.

use std::env;
use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use payday::company::Company;
use payday::error::EngineResult;
use payday::input::{FileInputReader, FileRateProvider, RateProvider};
use payday::output::TextOutputFormatter;

const DEFAULT_RATES_FILE: &str = "rates.txt";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("You need to specify one input file");
        return ExitCode::from(1);
    }

    match run(&args[1]) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run(hours_path: &str) -> EngineResult<()> {
    let rates_path =
        env::var("PAYDAY_RATES").unwrap_or_else(|_| DEFAULT_RATES_FILE.to_string());
    debug!(%hours_path, %rates_path, "starting payroll run");

    let mut company = Company::new("ACME");
    company.set_rates(FileRateProvider::new(rates_path).rates()?);

    let reader = FileInputReader::new(hours_path);
    company.print_payments(&reader, &TextOutputFormatter)
}
