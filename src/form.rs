use std::{collections::HashMap, error::Error, fmt, num::ParseFloatError};

use model::{FEATURE_NAMES, InputRecord, NUM_FEATURES};

/// Reasons a submitted form can't be turned into an `InputRecord`.
#[derive(Debug)]
pub enum FormErr {
    MissingField(&'static str),
    InvalidNumber {
        field: &'static str,
        value: String,
        source: ParseFloatError,
    },
}

impl fmt::Display for FormErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormErr::MissingField(field) => write!(f, "missing field: {field}"),
            FormErr::InvalidNumber {
                field,
                value,
                source,
            } => write!(f, "could not convert {field}={value:?} to float: {source}"),
        }
    }
}

impl Error for FormErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FormErr::InvalidNumber { source, .. } => Some(source),
            FormErr::MissingField(_) => None,
        }
    }
}

/// Parses the ten sensor readings out of a submitted form.
///
/// Fields are read in `FEATURE_NAMES` order and the first missing or non numeric one is
/// reported. Unknown fields are ignored.
pub fn parse_record(fields: &HashMap<String, String>) -> Result<InputRecord, FormErr> {
    let mut values = [0.; NUM_FEATURES];

    for (value, field) in values.iter_mut().zip(FEATURE_NAMES) {
        let raw = fields.get(field).ok_or(FormErr::MissingField(field))?;
        *value = raw
            .trim()
            .parse()
            .map_err(|source| FormErr::InvalidNumber {
                field,
                value: raw.clone(),
                source,
            })?;
    }

    Ok(InputRecord::from_values(values))
}
