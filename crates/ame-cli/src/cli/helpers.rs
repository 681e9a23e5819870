use super::{CliError, GlobalOptions};
use ame_core::domain::{NuclideRecord, ParsedConstituent};
use ame_core::table::{TableSchema, TableStore};
use anyhow::Context;
use serde::Serialize;
use std::fs;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";

pub(super) fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub(super) fn load_table(options: &GlobalOptions) -> Result<TableStore, CliError> {
    let schema = match &options.schema {
        Some(path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("failed to read table schema '{}'", path.display()))?;
            TableSchema::from_json(&source)?
        }
        None => TableSchema::default(),
    };
    debug!(table = %options.table.display(), "loading mass table");
    Ok(TableStore::load(&options.table, &schema)?)
}

/// Prints `value` as JSON or the text produced by `render`.
pub(super) fn emit<T, F>(options: &GlobalOptions, value: &T, render: F) -> Result<i32, CliError>
where
    T: Serialize + ?Sized,
    F: FnOnce() -> String,
{
    if options.json {
        let json = serde_json::to_string_pretty(value).context("failed to encode JSON output")?;
        println!("{json}");
    } else {
        println!("{}", render());
    }
    Ok(0)
}

pub(super) fn render_constituents(constituents: &[ParsedConstituent]) -> String {
    constituents
        .iter()
        .map(|constituent| {
            format!(
                "{} x {}{} (Z={})",
                constituent.multiplicity,
                constituent.mass_number,
                constituent.symbol,
                constituent.proton_number
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub(super) fn render_records(records: &[&NuclideRecord]) -> String {
    let header = format!(
        "{:>4} {:>4} {:>4} {:<10} {:>18} {:>12} {:>14} {:>10}",
        "N", "Z", "A", "EL", "mass/micro-u", "unc", "ME/keV", "unc"
    );
    let mut lines = vec![header];
    lines.extend(records.iter().map(|record| {
        format!(
            "{:>4} {:>4} {:>4} {:<10} {:>18.6} {:>12.6} {:>14} {:>10}{}",
            record.neutron_number,
            record.proton_number,
            record.mass_number,
            record.symbol,
            record.mass,
            record.mass_uncertainty,
            optional_kev(record.mass_excess),
            optional_kev(record.mass_excess_uncertainty),
            if record.estimated { "  #" } else { "" }
        )
    }));
    lines.join("\n")
}

fn optional_kev(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |value| format!("{value:.3}"))
}
