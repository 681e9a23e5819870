//! Mass arithmetic over a loaded table: molecule masses, mass excess, ion
//! and isomer masses, isobar listings.

mod model;

pub use model::{
    IsobarEntry, MoleculeMass, ion_mass, mass_excess, mass_from_excess, rescale_mass_excess,
};

use crate::domain::{AmeError, AmeResult, DEFAULT_CHARGE, NuclideRecord, ParsedConstituent};
use crate::expr::{combine_expression, parse_expression};
use crate::table::TableStore;
use tracing::debug;

/// Suffix marking a metastable state on a synthesized symbol.
pub const ISOMER_MARKER: &str = "^m";

const MASS_NUMBER_OVERFLOW: &str = "combined mass number does not fit in u32";

#[derive(Debug, Clone, Copy)]
pub struct MassCalculator<'a> {
    table: &'a TableStore,
}

impl<'a> MassCalculator<'a> {
    pub fn new(table: &'a TableStore) -> Self {
        Self { table }
    }

    /// Sums the constituent masses of an expression.
    ///
    /// Masses and mass numbers are weighted by multiplicity and
    /// uncertainties add in quadrature as `sqrt(sum(m * u^2))`. The proton
    /// number is the plain sum over constituents.
    pub fn molecule_mass(&self, expression: &str) -> AmeResult<MoleculeMass> {
        let constituents = parse_expression(expression)?;
        let mass_number = weighted_mass_number(expression, &constituents)?;

        let mut mass = 0.0;
        let mut variance = 0.0;
        let mut proton_number = 0;
        for constituent in &constituents {
            let record = self.lookup(&constituent.symbol, constituent.mass_number)?;
            let multiplicity = f64::from(constituent.multiplicity);
            mass += multiplicity * record.mass;
            variance += multiplicity * record.mass_uncertainty.powi(2);
            proton_number += constituent.proton_number;
        }

        let molecule = MoleculeMass {
            symbol: constituents
                .iter()
                .map(|constituent| constituent.symbol.as_str())
                .collect(),
            mass,
            mass_uncertainty: variance.sqrt(),
            mass_number,
            proton_number,
            neutron_number: i64::from(mass_number) - i64::from(proton_number),
            charge: DEFAULT_CHARGE,
        };
        debug!(expression, mass = molecule.mass, "combined expression mass");
        Ok(molecule)
    }

    pub fn atomic_mass(&self, expression: &str) -> AmeResult<f64> {
        self.molecule_mass(expression).map(|molecule| molecule.mass)
    }

    pub fn mass_excess(&self, expression: &str) -> AmeResult<(f64, f64)> {
        self.molecule_mass(expression)
            .map(|molecule| molecule.mass_excess())
    }

    pub fn ion_mass(&self, expression: &str, charge: i32) -> AmeResult<(f64, f64)> {
        let molecule = self.molecule_mass(expression)?;
        Ok(ion_mass(molecule.mass, molecule.mass_uncertainty, charge))
    }

    /// Row for the metastable state `excitation_kev` above the ground state
    /// of `expression`. Uncertainties are not propagated and are set to zero.
    pub fn isomer_record(&self, expression: &str, excitation_kev: f64) -> AmeResult<NuclideRecord> {
        let combined = combine_expression(expression)?;
        let ground = self.lookup(&combined.symbol, combined.mass_number)?;

        let ground_excess = ground.mass_excess.unwrap_or_else(|| {
            mass_excess(ground.mass, ground.mass_uncertainty, combined.mass_number).0
        });
        let excess = ground_excess + excitation_kev;

        Ok(NuclideRecord {
            neutron_number: i64::from(combined.mass_number) - i64::from(combined.proton_number),
            proton_number: combined.proton_number,
            mass_number: combined.mass_number,
            symbol: format!("{}{}", combined.symbol, ISOMER_MARKER),
            mass: mass_from_excess(excess, combined.mass_number),
            mass_uncertainty: 0.0,
            mass_excess: Some(excess),
            mass_excess_uncertainty: Some(0.0),
            charge: DEFAULT_CHARGE,
            estimated: ground.estimated,
        })
    }

    fn lookup(&self, symbol: &str, mass_number: u32) -> AmeResult<&'a NuclideRecord> {
        self.table
            .find_record(symbol, mass_number)
            .ok_or_else(|| AmeError::lookup_miss(symbol, mass_number))
    }

    pub fn isobars(&self, mass_number: u32) -> Vec<IsobarEntry> {
        let isobars: Vec<IsobarEntry> = self
            .table
            .by_mass_number(mass_number)
            .into_iter()
            .map(IsobarEntry::from)
            .collect();
        if isobars.is_empty() {
            debug!(mass_number, "no isobars in table");
        }
        isobars
    }
}

/// Sum of `multiplicity * mass_number` over the constituents.
fn weighted_mass_number(expression: &str, constituents: &[ParsedConstituent]) -> AmeResult<u32> {
    let mut total: u32 = 0;
    for constituent in constituents {
        total = constituent
            .multiplicity
            .checked_mul(constituent.mass_number)
            .and_then(|weighted| total.checked_add(weighted))
            .ok_or_else(|| AmeError::malformed_expression(expression, MASS_NUMBER_OVERFLOW))?;
    }
    Ok(total)
}

impl TableStore {
    /// Appends the combined row for `expression`, labelled with the
    /// expression text. Returns the new row index.
    pub fn add_molecule(&mut self, expression: &str) -> AmeResult<usize> {
        let molecule = MassCalculator::new(self).molecule_mass(expression)?;
        Ok(self.append(molecule.into_record(expression)))
    }

    pub fn add_isomer(&mut self, expression: &str, excitation_kev: f64) -> AmeResult<usize> {
        let record = MassCalculator::new(self).isomer_record(expression, excitation_kev)?;
        Ok(self.append(record))
    }
}
