//! In-memory mass table.
//!
//! Rows keep file order. Secondary indices by symbol, A, Z and N are built
//! on load and kept current by [`TableStore::append`].

mod parser;
pub mod schema;

pub use schema::{DEFAULT_TABLE_FILE, TableConfig, TableSchema};

use crate::domain::{AmeError, NuclideRecord, ParserResult};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default)]
pub struct TableStore {
    records: Vec<NuclideRecord>,
    by_symbol: HashMap<String, Vec<usize>>,
    by_mass_number: HashMap<u32, Vec<usize>>,
    by_proton_number: HashMap<u32, Vec<usize>>,
    by_neutron_number: HashMap<i64, Vec<usize>>,
}

impl TableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = NuclideRecord>) -> Self {
        let mut store = Self::new();
        for record in records {
            store.append(record);
        }
        store
    }

    pub fn load_config(config: &TableConfig) -> ParserResult<Self> {
        Self::load(&config.table_path, &config.schema)
    }

    pub fn load(path: &Path, schema: &TableSchema) -> ParserResult<Self> {
        let source = fs::read_to_string(path).map_err(|source| {
            AmeError::io(
                "IO.TABLE_READ",
                format!("failed to read mass table '{}': {source}", path.display()),
            )
        })?;
        let store = Self::parse(&source, schema)?;
        info!(
            path = %path.display(),
            rows = store.len(),
            "loaded mass table"
        );
        Ok(store)
    }

    pub fn parse(source: &str, schema: &TableSchema) -> ParserResult<Self> {
        let records = parser::parse_table_source(source, schema)?;
        if records.is_empty() {
            warn!(
                skip_rows = schema.skip_rows,
                "mass table has no rows after the header"
            );
        }
        Ok(Self::from_records(records))
    }

    /// Adds a row at the end. Existing rows with the same symbol and mass
    /// number are left in place, so lookups keep returning the first one.
    pub fn append(&mut self, record: NuclideRecord) -> usize {
        let index = self.records.len();
        self.by_symbol
            .entry(record.symbol.clone())
            .or_default()
            .push(index);
        self.by_mass_number
            .entry(record.mass_number)
            .or_default()
            .push(index);
        self.by_proton_number
            .entry(record.proton_number)
            .or_default()
            .push(index);
        self.by_neutron_number
            .entry(record.neutron_number)
            .or_default()
            .push(index);
        self.records.push(record);
        index
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&NuclideRecord> {
        self.records.get(index)
    }

    pub fn records(&self) -> impl Iterator<Item = &NuclideRecord> {
        self.records.iter()
    }

    /// Index of the first row with this symbol and mass number.
    pub fn find(&self, symbol: &str, mass_number: u32) -> Option<usize> {
        let found = self.by_symbol.get(symbol).and_then(|indices| {
            indices
                .iter()
                .copied()
                .find(|index| self.records[*index].mass_number == mass_number)
        });
        debug!(symbol, mass_number, ?found, "table lookup");
        found
    }

    pub fn find_record(&self, symbol: &str, mass_number: u32) -> Option<&NuclideRecord> {
        self.find(symbol, mass_number)
            .map(|index| &self.records[index])
    }

    /// Isobars: rows sharing mass number `a`.
    pub fn by_mass_number(&self, a: u32) -> Vec<&NuclideRecord> {
        self.collect(self.by_mass_number.get(&a))
    }

    /// Isotopes: rows sharing proton number `z`.
    pub fn by_proton_number(&self, z: u32) -> Vec<&NuclideRecord> {
        self.collect(self.by_proton_number.get(&z))
    }

    /// Isotones: rows sharing neutron number `n`.
    pub fn by_neutron_number(&self, n: i64) -> Vec<&NuclideRecord> {
        self.collect(self.by_neutron_number.get(&n))
    }

    pub fn by_symbol(&self, symbol: &str) -> Vec<&NuclideRecord> {
        self.collect(self.by_symbol.get(symbol))
    }

    fn collect(&self, indices: Option<&Vec<usize>>) -> Vec<&NuclideRecord> {
        indices
            .map(|indices| indices.iter().map(|index| &self.records[*index]).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::{TableSchema, TableStore};
    use crate::domain::{AmeErrorKind, NuclideRecord};

    fn record(n: i64, z: u32, symbol: &str, mass: f64) -> NuclideRecord {
        NuclideRecord {
            neutron_number: n,
            proton_number: z,
            mass_number: n as u32 + z,
            symbol: symbol.to_string(),
            mass,
            mass_uncertainty: 0.5,
            mass_excess: None,
            mass_excess_uncertainty: None,
            charge: 1,
            estimated: false,
        }
    }

    fn sample_store() -> TableStore {
        TableStore::from_records([
            record(0, 1, "H", 1_007_825.031898),
            record(1, 1, "H", 2_014_101.777844),
            record(1, 2, "He", 3_016_029.32197),
            record(2, 1, "H", 3_016_049.28132),
        ])
    }

    #[test]
    fn find_returns_first_match_and_none_on_miss() {
        let mut store = sample_store();
        assert_eq!(store.find("H", 2), Some(1));
        assert_eq!(store.find("H", 4), None);
        assert_eq!(store.find("Li", 2), None);

        let duplicate = store.append(record(1, 1, "H", 2_014_000.0));
        assert_eq!(duplicate, 4);
        assert_eq!(store.find("H", 2), Some(1));
    }

    #[test]
    fn filters_keep_table_order() {
        let store = sample_store();

        let isobars: Vec<_> = store.by_mass_number(3).iter().map(|r| r.label()).collect();
        assert_eq!(isobars, vec!["3He", "3H"]);

        let isotopes: Vec<_> = store
            .by_proton_number(1)
            .iter()
            .map(|r| r.mass_number)
            .collect();
        assert_eq!(isotopes, vec![1, 2, 3]);

        let isotones: Vec<_> = store
            .by_neutron_number(1)
            .iter()
            .map(|r| r.label())
            .collect();
        assert_eq!(isotones, vec!["2H", "3He"]);

        assert_eq!(store.by_symbol("He").len(), 1);
        assert!(store.by_mass_number(250).is_empty());
        assert!(store.by_symbol("Xx").is_empty());
    }

    #[test]
    fn appended_rows_are_returned_verbatim() {
        let mut store = sample_store();
        let mut molecule = record(8, 10, "2H1:1O16", 18_010_564.7);
        molecule.mass_excess = Some(-1_000.0);
        let index = store.append(molecule.clone());

        assert_eq!(store.get(index), Some(&molecule));
        assert_eq!(store.find_record("2H1:1O16", 18), Some(&molecule));
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn load_reports_missing_file_as_io_error() {
        let temp = tempfile::TempDir::new().expect("tempdir should be created");
        let error = TableStore::load(&temp.path().join("absent.txt"), &TableSchema::ame2020())
            .expect_err("missing file should fail");
        assert_eq!(error.kind(), AmeErrorKind::Io);
        assert_eq!(error.placeholder(), "IO.TABLE_READ");
    }
}
