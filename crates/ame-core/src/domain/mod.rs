pub mod errors;

pub use errors::{AmeError, AmeErrorCategory, AmeErrorKind, AmeResult, ParserResult};

use serde::Serialize;

/// Charge assigned to every loaded and synthesized row.
pub const DEFAULT_CHARGE: i32 = 1;

/// One row of the mass table.
///
/// Masses are kept in micro-u, mass excesses in keV. Rows loaded from the
/// AME file always carry a mass excess; synthesized rows carry the derived
/// value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NuclideRecord {
    pub neutron_number: i64,
    pub proton_number: u32,
    pub mass_number: u32,
    pub symbol: String,
    pub mass: f64,
    pub mass_uncertainty: f64,
    pub mass_excess: Option<f64>,
    pub mass_excess_uncertainty: Option<f64>,
    pub charge: i32,
    /// Set when the source row marks a kept value with `#` (systematics,
    /// not measurement).
    pub estimated: bool,
}

impl NuclideRecord {
    pub fn label(&self) -> String {
        format!("{}{}", self.mass_number, self.symbol)
    }
}

/// One `(multiplicity, mass number, symbol)` triple from an expression.
///
/// A mass number of zero means the expression did not give one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedConstituent {
    pub multiplicity: u32,
    pub mass_number: u32,
    pub symbol: String,
    pub proton_number: u32,
}

/// Scalar view of a parsed expression.
///
/// `mass_number` is the plain sum over constituents, not weighted by
/// multiplicity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombinedExpression {
    pub symbol: String,
    pub multiplicity: u32,
    pub mass_number: u32,
    pub proton_number: u32,
}

impl CombinedExpression {
    pub fn from_constituents(constituents: &[ParsedConstituent]) -> Self {
        Self {
            symbol: constituents
                .iter()
                .map(|constituent| constituent.symbol.as_str())
                .collect(),
            multiplicity: constituents.iter().map(|c| c.multiplicity).sum(),
            mass_number: constituents.iter().map(|c| c.mass_number).sum(),
            proton_number: constituents.iter().map(|c| c.proton_number).sum(),
        }
    }
}
