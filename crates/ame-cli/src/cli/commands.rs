use super::helpers::{emit, load_table, render_constituents, render_records};
use super::{CliError, GlobalOptions};
use ame_core::domain::{CombinedExpression, ParsedConstituent};
use ame_core::expr::{expression_tokens, parse_tokens};
use ame_core::mass::MassCalculator;
use serde::Serialize;

pub(super) enum Listing {
    Isotopes(u32),
    Isotones(i64),
    Element(String),
}

#[derive(Serialize)]
struct ParseReport {
    expression: String,
    tokens: Vec<String>,
    constituents: Vec<ParsedConstituent>,
    combined: CombinedExpression,
}

#[derive(Serialize)]
struct ExcessReport<'a> {
    expression: &'a str,
    mass_excess: f64,
    mass_excess_uncertainty: f64,
}

#[derive(Serialize)]
struct IonReport<'a> {
    expression: &'a str,
    charge: i32,
    mass: f64,
    mass_uncertainty: f64,
}

pub(super) fn run_parse_command(
    options: &GlobalOptions,
    expression: &str,
) -> Result<i32, CliError> {
    let tokens = expression_tokens(expression)?;
    let constituents = parse_tokens(expression, &tokens)?;
    let report = ParseReport {
        expression: expression.to_string(),
        tokens: tokens.iter().map(ToString::to_string).collect(),
        combined: CombinedExpression::from_constituents(&constituents),
        constituents,
    };

    emit(options, &report, || {
        format!(
            "{}\n{}\ncombined: {} m={} A={} Z={}",
            report.tokens.join(" "),
            render_constituents(&report.constituents),
            report.combined.symbol,
            report.combined.multiplicity,
            report.combined.mass_number,
            report.combined.proton_number
        )
    })
}

pub(super) fn run_mass_command(options: &GlobalOptions, expression: &str) -> Result<i32, CliError> {
    let table = load_table(options)?;
    let molecule = MassCalculator::new(&table).molecule_mass(expression)?;

    emit(options, &molecule, || {
        format!(
            "{}: mass = {:.6} +/- {:.6} micro-u  A = {}  Z = {}  N = {}",
            expression,
            molecule.mass,
            molecule.mass_uncertainty,
            molecule.mass_number,
            molecule.proton_number,
            molecule.neutron_number
        )
    })
}

pub(super) fn run_excess_command(
    options: &GlobalOptions,
    expression: &str,
) -> Result<i32, CliError> {
    let table = load_table(options)?;
    let (mass_excess, mass_excess_uncertainty) =
        MassCalculator::new(&table).mass_excess(expression)?;
    let report = ExcessReport {
        expression,
        mass_excess,
        mass_excess_uncertainty,
    };

    emit(options, &report, || {
        format!(
            "{}: mass excess = {:.3} +/- {:.3} keV",
            expression, mass_excess, mass_excess_uncertainty
        )
    })
}

pub(super) fn run_ion_command(
    options: &GlobalOptions,
    expression: &str,
    charge: i32,
) -> Result<i32, CliError> {
    let table = load_table(options)?;
    let (mass, mass_uncertainty) = MassCalculator::new(&table).ion_mass(expression, charge)?;
    let report = IonReport {
        expression,
        charge,
        mass,
        mass_uncertainty,
    };

    emit(options, &report, || {
        format!(
            "{} (q={}): ion mass = {:.6} +/- {:.6} micro-u",
            expression, charge, mass, mass_uncertainty
        )
    })
}

pub(super) fn run_isomer_command(
    options: &GlobalOptions,
    expression: &str,
    energy: f64,
) -> Result<i32, CliError> {
    let table = load_table(options)?;
    let isomer = MassCalculator::new(&table).isomer_record(expression, energy)?;

    emit(options, &isomer, || render_records(&[&isomer]))
}

pub(super) fn run_isobars_command(
    options: &GlobalOptions,
    mass_number: u32,
) -> Result<i32, CliError> {
    let table = load_table(options)?;
    let isobars = MassCalculator::new(&table).isobars(mass_number);

    emit(options, &isobars, || {
        if isobars.is_empty() {
            return format!("No rows found for A = {mass_number}.");
        }
        isobars
            .iter()
            .map(|entry| {
                format!(
                    "{:<4} {:>18.6} {:>12.6}",
                    entry.symbol, entry.mass, entry.mass_uncertainty
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    })
}

pub(super) fn run_listing_command(
    options: &GlobalOptions,
    listing: Listing,
) -> Result<i32, CliError> {
    let table = load_table(options)?;
    let (rows, description) = match &listing {
        Listing::Isotopes(z) => (table.by_proton_number(*z), format!("Z = {z}")),
        Listing::Isotones(n) => (table.by_neutron_number(*n), format!("N = {n}")),
        Listing::Element(symbol) => (table.by_symbol(symbol), format!("EL = {symbol}")),
    };

    emit(options, &rows, || {
        if rows.is_empty() {
            format!("No rows found for {description}.")
        } else {
            render_records(&rows)
        }
    })
}
