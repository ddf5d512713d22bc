//! CSV Feature Parser
//!
//! Turns uploaded CSV text into a [`FeatureVector`].
//!
//! Only the first data row is used. A leading header row is detected with
//! a simple heuristic: the first line is a header iff at least one of its
//! fields does not parse as a number. A header whose fields are all numeric
//! is therefore read as data; the upload format gives no way to tell the
//! two apart.

use crate::logic::error::FormatError;
use super::vector::{FeatureVector, FEATURE_COUNT};

/// Parse raw CSV text into a feature vector.
pub fn parse(raw_text: &str) -> Result<FeatureVector, FormatError> {
    if raw_text.trim().is_empty() {
        return Err(FormatError::Empty);
    }

    let mut lines = split_lines(raw_text);
    let first = lines.next().ok_or(FormatError::Empty)?;
    let first_fields: Vec<&str> = first.split(',').collect();

    let row = if first_fields.iter().all(|f| parse_field(f).is_some()) {
        first_fields
    } else {
        log::debug!("First CSV line treated as header ({} fields)", first_fields.len());
        let second = lines.next().ok_or(FormatError::MissingDataRow)?;
        second.split(',').collect()
    };

    parse_row(&row)
}

/// Parse the first 1024 fields of an already split row.
pub fn parse_row(fields: &[&str]) -> Result<FeatureVector, FormatError> {
    if fields.len() < FEATURE_COUNT {
        return Err(FormatError::TooFewColumns { got: fields.len() });
    }

    let values = fields[..FEATURE_COUNT]
        .iter()
        .enumerate()
        .map(|(column, field)| {
            parse_field(field).ok_or_else(|| FormatError::NonNumeric {
                column,
                token: field.to_string(),
            })
        })
        .collect::<Result<Vec<f64>, FormatError>>()?;

    FeatureVector::try_from_vec(values)
        .map_err(|row| FormatError::TooFewColumns { got: row.len() })
}

/// Non-blank lines, split on `\n`, `\r\n` or a bare `\r`.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\n', '\r']).filter(|line| !line.trim().is_empty())
}

fn parse_field(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
