//! End-to-end tests for the weekly pay calculator.
//!
//! This suite drives the whole pipeline the binary uses: rate file ->
//! rate table, worked-hours file -> worked weeks, payment computation,
//! and text rendering, plus the fatal input paths and their exit codes.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

use rust_decimal::Decimal;
use std::str::FromStr;

use payday::company::Company;
use payday::error::EngineError;
use payday::input::{
    FileInputReader, FileRateProvider, InputProcessor, RateProvider, format_week_line,
    parse_worked_weeks,
};
use payday::output::{OutputFormatter, TextOutputFormatter};

// =============================================================================
// Test Helpers
// =============================================================================

/// A full weekly rate table: weekdays pay 25/15/20 across the three
/// bands, weekends 30/20/25.
const RATES: &str = "\
MO,00:00-09:00,25
MO,09:00-18:00,15
MO,18:00-00:00,20
TU,00:00-09:00,25
TU,09:00-18:00,15
TU,18:00-00:00,20
WE,00:00-09:00,25
WE,09:00-18:00,15
WE,18:00-00:00,20
TH,00:00-09:00,25
TH,09:00-18:00,15
TH,18:00-00:00,20
FR,00:00-09:00,25
FR,09:00-18:00,15
FR,18:00-00:00,20
SA,00:00-09:00,30
SA,09:00-18:00,20
SA,18:00-00:00,25
SU,00:00-09:00,30
SU,09:00-18:00,20
SU,18:00-00:00,25
";

const HOURS: &str = "\
RENE=MO10:00-12:00,TU10:00-12:00,TH01:00-03:00,SA14:00-18:00,SU20:00-21:00
ASTRID=MO10:00-12:00,TH12:00-14:00,SU20:00-21:00
";

static NEXT_FILE_ID: AtomicU32 = AtomicU32::new(0);

fn write_temp_file(name: &str, contents: &str) -> PathBuf {
    let id = NEXT_FILE_ID.fetch_add(1, Ordering::Relaxed);
    let path = std::env::temp_dir().join(format!(
        "payday_test_{}_{}_{}",
        std::process::id(),
        id,
        name
    ));
    fs::write(&path, contents).unwrap();
    path
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn company_with_rates(rates_text: &str) -> Company {
    let rates_path = write_temp_file("rates.txt", rates_text);
    let provider = FileRateProvider::new(&rates_path);
    let mut company = Company::new("ACME");
    company.set_rates(provider.rates().unwrap());
    company
}

// =============================================================================
// End-to-end runs
// =============================================================================

#[test]
fn test_reference_run_produces_expected_payments() {
    let company = company_with_rates(RATES);
    let hours_path = write_temp_file("hours.txt", HOURS);
    let reader = FileInputReader::new(&hours_path);

    let payments = company.payments(&reader).unwrap();

    // RENE: 2h@15 + 2h@15 + 2h@25 + 4h@20 + 1h@25 = 215
    // ASTRID: 2h@15 + 2h@15 + 1h@25 = 85
    assert_eq!(payments.len(), 2);
    assert_eq!(payments[0].name, "RENE");
    assert_eq!(payments[0].payment, dec("215"));
    assert_eq!(payments[1].name, "ASTRID");
    assert_eq!(payments[1].payment, dec("85"));
}

#[test]
fn test_reference_run_renders_expected_lines() {
    let company = company_with_rates(RATES);
    let hours_path = write_temp_file("hours.txt", HOURS);
    let reader = FileInputReader::new(&hours_path);

    let lines: Vec<String> = company
        .payments(&reader)
        .unwrap()
        .iter()
        .map(|e| TextOutputFormatter.format_payment(e))
        .collect();

    assert_eq!(
        lines,
        vec![
            "The amount to pay RENE is 215",
            "The amount to pay ASTRID is 85",
        ]
    );
}

#[test]
fn test_work_running_to_midnight_end_to_end() {
    let company = company_with_rates(RATES);
    let hours_path = write_temp_file("hours.txt", "NOX=FR18:00-00:00,SA22:00-00:00\n");
    let reader = FileInputReader::new(&hours_path);

    let payments = company.payments(&reader).unwrap();

    // 6h in the Friday evening band at 20, 2h in the Saturday evening
    // band at 25.
    assert_eq!(payments[0].payment, dec("170"));
}

#[test]
fn test_fractional_hours_and_rates_stay_exact() {
    let company = company_with_rates("TU,00:00-09:00,5.5\nTU,09:00-18:00,10.2\n");
    let hours_path = write_temp_file("hours.txt", "ESTEBAN=TU08:30-09:30\n");
    let reader = FileInputReader::new(&hours_path);

    let payments = company.payments(&reader).unwrap();

    // Half an hour in each band: 0.5*5.5 + 0.5*10.2 = 7.85, exactly.
    assert_eq!(payments[0].payment, dec("7.85"));
}

// =============================================================================
// Fatal paths and exit codes
// =============================================================================

#[test]
fn test_line_without_equals_maps_to_exit_code_2() {
    let hours_path = write_temp_file("hours.txt", "RENE MO10:00-12:00\n");
    let reader = FileInputReader::new(&hours_path);

    let error = reader.worked_weeks().unwrap_err();
    assert!(matches!(error, EngineError::MalformedLineFormat { .. }));
    assert_eq!(error.exit_code(), 2);
}

#[test]
fn test_unknown_day_code_maps_to_exit_code_3() {
    let hours_path = write_temp_file("hours.txt", "RENE=XX10:00-12:00\n");
    let reader = FileInputReader::new(&hours_path);

    let error = reader.worked_weeks().unwrap_err();
    assert!(matches!(error, EngineError::InvalidDayCode { .. }));
    assert_eq!(error.exit_code(), 3);
}

#[test]
fn test_malformed_period_maps_to_exit_code_3() {
    let hours_path = write_temp_file("hours.txt", "RENE=MO10:0x-12:00\n");
    let reader = FileInputReader::new(&hours_path);

    let error = reader.worked_weeks().unwrap_err();
    assert!(matches!(error, EngineError::MalformedPeriod { .. }));
    assert_eq!(error.exit_code(), 3);
}

#[test]
fn test_worked_day_absent_from_rate_table_is_no_rates_for_day() {
    // Monday rates only; Sunday work must fail loudly, not pay zero.
    let company = company_with_rates("MO,00:00-09:00,25\n");
    let hours_path = write_temp_file("hours.txt", "RENE=SU20:00-21:00\n");
    let reader = FileInputReader::new(&hours_path);

    let error = company.payments(&reader).unwrap_err();
    assert!(matches!(error, EngineError::NoRatesForDay { .. }));
    assert_eq!(error.exit_code(), 4);
}

#[test]
fn test_failed_run_yields_no_partial_payments() {
    let company = company_with_rates(RATES);
    // First line is fine, second is malformed; the run must fail as a
    // whole before anything is handed to the output sink.
    let hours_path = write_temp_file(
        "hours.txt",
        "RENE=MO10:00-12:00\nASTRID MO10:00-12:00\n",
    );
    let reader = FileInputReader::new(&hours_path);

    assert!(company.payments(&reader).is_err());
}

// =============================================================================
// Round trips
// =============================================================================

#[test]
fn test_parsed_weeks_serialize_back_to_input_lines() {
    for line in HOURS.lines() {
        let weeks = parse_worked_weeks(line).unwrap();
        assert_eq!(format_week_line(&weeks[0]), line);
    }
}
