use super::schema::TableSchema;
use crate::common::constants::MICRO_U_PER_U;
use crate::domain::{AmeError, DEFAULT_CHARGE, NuclideRecord, ParserResult};

/// Marker AME puts in place of the decimal point for estimated values.
const ESTIMATED_MARKER: char = '#';

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub(crate) enum FieldError {
    #[error("field is empty")]
    Empty,
    #[error("'{0}' is not an integer")]
    NotInteger(String),
    #[error("'{0}' is not a number")]
    NotNumber(String),
}

#[derive(Debug, Clone, Copy)]
struct ColumnIndices {
    neutron_number: usize,
    proton_number: usize,
    mass_number: usize,
    symbol: usize,
    mass_excess: usize,
    mass_excess_uncertainty: usize,
    mass_integer: usize,
    mass_fraction: usize,
    mass_uncertainty: usize,
}

impl ColumnIndices {
    fn resolve(schema: &TableSchema) -> ParserResult<Self> {
        let [
            neutron_number,
            proton_number,
            mass_number,
            symbol,
            mass_excess,
            mass_excess_uncertainty,
            mass_integer,
            mass_fraction,
            mass_uncertainty,
        ] = schema.required_column_indices()?;

        Ok(Self {
            neutron_number,
            proton_number,
            mass_number,
            symbol,
            mass_excess,
            mass_excess_uncertainty,
            mass_integer,
            mass_fraction,
            mass_uncertainty,
        })
    }
}

/// A numeric field with its estimated flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Measured {
    pub(crate) value: f64,
    pub(crate) estimated: bool,
}

pub(crate) fn parse_table_source(
    source: &str,
    schema: &TableSchema,
) -> ParserResult<Vec<NuclideRecord>> {
    let columns = ColumnIndices::resolve(schema)?;
    let spans = schema.column_spans();

    source
        .lines()
        .enumerate()
        .skip(schema.skip_rows)
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            let fields = split_fixed_width(line, &spans);
            parse_record(&fields, &columns).map_err(|(column, source)| {
                AmeError::schema_mismatch(
                    "INPUT.TABLE_FIELD",
                    format!(
                        "line {}: column '{}' does not match the table layout: {}",
                        index + 1,
                        schema.column_names[column],
                        source
                    ),
                )
            })
        })
        .collect()
}

/// Slices one line into trimmed fields. Short lines yield empty trailing
/// fields.
pub(crate) fn split_fixed_width(line: &str, spans: &[(usize, usize)]) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    spans
        .iter()
        .map(|&(start, end)| {
            let end = end.min(chars.len());
            let start = start.min(end);
            chars[start..end]
                .iter()
                .collect::<String>()
                .trim()
                .to_string()
        })
        .collect()
}

fn parse_record(
    fields: &[String],
    columns: &ColumnIndices,
) -> Result<NuclideRecord, (usize, FieldError)> {
    let field = |column: usize| fields[column].as_str();
    let tagged = |column: usize| move |error: FieldError| (column, error);

    let neutron_number =
        parse_integer(field(columns.neutron_number)).map_err(tagged(columns.neutron_number))?;
    let proton_number =
        parse_integer(field(columns.proton_number)).map_err(tagged(columns.proton_number))?;
    let mass_number =
        parse_integer(field(columns.mass_number)).map_err(tagged(columns.mass_number))?;

    let symbol = field(columns.symbol);
    if symbol.is_empty() {
        return Err((columns.symbol, FieldError::Empty));
    }

    let mass_excess =
        parse_optional_measured(field(columns.mass_excess)).map_err(tagged(columns.mass_excess))?;
    let mass_excess_uncertainty = parse_optional_measured(field(columns.mass_excess_uncertainty))
        .map_err(tagged(columns.mass_excess_uncertainty))?;
    let mass_integer =
        parse_integer(field(columns.mass_integer)).map_err(tagged(columns.mass_integer))?;
    let mass_fraction =
        parse_measured(field(columns.mass_fraction)).map_err(tagged(columns.mass_fraction))?;
    let mass_uncertainty = parse_measured(field(columns.mass_uncertainty))
        .map_err(tagged(columns.mass_uncertainty))?;

    let estimated = [mass_excess, mass_excess_uncertainty]
        .into_iter()
        .flatten()
        .chain([mass_fraction, mass_uncertainty])
        .any(|measured| measured.estimated);

    Ok(NuclideRecord {
        neutron_number: i64::from(neutron_number),
        proton_number,
        mass_number,
        symbol: symbol.to_string(),
        mass: f64::from(mass_integer) * MICRO_U_PER_U + mass_fraction.value,
        mass_uncertainty: mass_uncertainty.value,
        mass_excess: mass_excess.map(|measured| measured.value),
        mass_excess_uncertainty: mass_excess_uncertainty.map(|measured| measured.value),
        charge: DEFAULT_CHARGE,
        estimated,
    })
}

fn parse_integer(field: &str) -> Result<u32, FieldError> {
    if field.is_empty() {
        return Err(FieldError::Empty);
    }
    field
        .parse::<u32>()
        .map_err(|_| FieldError::NotInteger(field.to_string()))
}

pub(crate) fn parse_measured(field: &str) -> Result<Measured, FieldError> {
    parse_optional_measured(field)?.ok_or(FieldError::Empty)
}

pub(crate) fn parse_optional_measured(field: &str) -> Result<Option<Measured>, FieldError> {
    if field.is_empty() {
        return Ok(None);
    }

    let estimated = field.contains(ESTIMATED_MARKER);
    let normalized = if field.contains('.') {
        field.replace(ESTIMATED_MARKER, "")
    } else {
        field.replace(ESTIMATED_MARKER, ".")
    };

    normalized
        .parse::<f64>()
        .map(|value| Some(Measured { value, estimated }))
        .map_err(|_| FieldError::NotNumber(field.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{FieldError, parse_measured, parse_optional_measured, split_fixed_width};

    #[test]
    fn fixed_width_split_trims_and_pads_short_lines() {
        let spans = [(0, 2), (2, 5), (5, 9)];
        assert_eq!(split_fixed_width(" 1 Ca ", &spans), vec!["1", "Ca", ""]);
        assert_eq!(split_fixed_width("", &spans), vec!["", "", ""]);
    }

    #[test]
    fn estimated_marker_stands_for_the_decimal_point() {
        let measured = parse_measured("3040#5").expect("estimated value parses");
        assert!(measured.estimated);
        assert!((measured.value - 3040.5).abs() < 1.0e-12);

        let measured = parse_measured("500#").expect("estimated integer parses");
        assert!(measured.estimated);
        assert_eq!(measured.value, 500.0);

        let measured = parse_measured("008664.91590").expect("plain value parses");
        assert!(!measured.estimated);
        assert!((measured.value - 8664.9159).abs() < 1.0e-9);
    }

    #[test]
    fn empty_and_garbage_fields_are_reported() {
        assert_eq!(parse_optional_measured(""), Ok(None));
        assert_eq!(parse_measured(""), Err(FieldError::Empty));
        assert_eq!(
            parse_measured("abc"),
            Err(FieldError::NotNumber("abc".to_string()))
        );
    }
}
