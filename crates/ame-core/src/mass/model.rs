use crate::common::constants::{
    ELECTRON_MASS_MICRO_U, ELECTRON_MASS_UNCERTAINTY_MICRO_U, MASS_EXCESS_SCALE_KEV, MICRO_U_PER_U,
    U_PER_MICRO_U,
};
use crate::domain::{DEFAULT_CHARGE, NuclideRecord};
use serde::Serialize;

/// Combined mass of a nuclide or molecule expression, in micro-u.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoleculeMass {
    pub symbol: String,
    pub mass: f64,
    pub mass_uncertainty: f64,
    pub mass_number: u32,
    pub proton_number: u32,
    pub neutron_number: i64,
    pub charge: i32,
}

impl MoleculeMass {
    pub fn mass_excess(&self) -> (f64, f64) {
        mass_excess(self.mass, self.mass_uncertainty, self.mass_number)
    }

    /// Row for the store, labelled with the expression it was built from.
    pub fn into_record(self, label: impl Into<String>) -> NuclideRecord {
        let (excess, excess_uncertainty) = self.mass_excess();
        NuclideRecord {
            neutron_number: self.neutron_number,
            proton_number: self.proton_number,
            mass_number: self.mass_number,
            symbol: label.into(),
            mass: self.mass,
            mass_uncertainty: self.mass_uncertainty,
            mass_excess: Some(excess),
            mass_excess_uncertainty: Some(excess_uncertainty),
            charge: DEFAULT_CHARGE,
            estimated: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IsobarEntry {
    pub symbol: String,
    pub mass: f64,
    pub mass_uncertainty: f64,
}

impl From<&NuclideRecord> for IsobarEntry {
    fn from(record: &NuclideRecord) -> Self {
        Self {
            symbol: record.symbol.clone(),
            mass: record.mass,
            mass_uncertainty: record.mass_uncertainty,
        }
    }
}

/// Mass excess and its uncertainty in keV for a mass in micro-u.
pub fn mass_excess(mass: f64, mass_uncertainty: f64, mass_number: u32) -> (f64, f64) {
    let excess = (mass * U_PER_MICRO_U - f64::from(mass_number)) * MASS_EXCESS_SCALE_KEV;
    let excess_uncertainty = mass_uncertainty * U_PER_MICRO_U * MASS_EXCESS_SCALE_KEV;
    (excess, excess_uncertainty)
}

/// Inverse of [`mass_excess`]: mass in micro-u for a mass excess in keV.
pub fn mass_from_excess(mass_excess_kev: f64, mass_number: u32) -> f64 {
    (mass_excess_kev / MASS_EXCESS_SCALE_KEV + f64::from(mass_number)) * MICRO_U_PER_U
}

/// Mass of the ion with `charge` electrons removed.
pub fn ion_mass(atomic_mass: f64, atomic_mass_uncertainty: f64, charge: i32) -> (f64, f64) {
    let charge = f64::from(charge);
    let mass = atomic_mass - charge * ELECTRON_MASS_MICRO_U;
    let uncertainty = atomic_mass_uncertainty.hypot(charge * ELECTRON_MASS_UNCERTAINTY_MICRO_U);
    (mass, uncertainty)
}

/// Recomputes mass excesses against an effective mass number, rounded to
/// 1 eV.
pub fn rescale_mass_excess(records: &mut [NuclideRecord], effective_mass_number: u32) {
    for record in records {
        let (excess, uncertainty) =
            mass_excess(record.mass, record.mass_uncertainty, effective_mass_number);
        record.mass_excess = Some(round_kev(excess));
        record.mass_excess_uncertainty = Some(round_kev(uncertainty));
    }
}

fn round_kev(value: f64) -> f64 {
    (value * 1.0e3).round_ties_even() / 1.0e3
}
