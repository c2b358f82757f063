use crate::error::{ContactError, ContactResult};
use std::path::Path;

const FIELDS_PER_ROW: usize = 3;

/// One raw row from a contacts file. Empty fields are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRow {
    /// 1-based line number in the source text
    pub line: usize,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
}

/// Parse `first,last,phone` rows.
///
/// Blank lines and lines starting with `#` are skipped. Fields are trimmed
/// and an empty field is treated as absent. Quoting is not supported.
///
/// # Errors
///
/// Returns `ContactError::Csv` for a line that does not hold exactly three
/// fields.
pub fn parse_contacts_csv(input: &str) -> ContactResult<Vec<ContactRow>> {
    let mut rows = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = raw.split(',').map(str::trim).collect();
        if fields.len() != FIELDS_PER_ROW {
            return Err(ContactError::Csv {
                line,
                reason: format!(
                    "expected {} fields, found {}",
                    FIELDS_PER_ROW,
                    fields.len()
                ),
            });
        }

        let field = |i: usize| Some(fields[i]).filter(|f| !f.is_empty()).map(str::to_string);
        rows.push(ContactRow {
            line,
            first_name: field(0),
            last_name: field(1),
            phone_number: field(2),
        });
    }

    tracing::debug!(rows = rows.len(), "Parsed contacts CSV");
    Ok(rows)
}

/// Read and parse a contacts file.
pub fn load_contacts_file(path: impl AsRef<Path>) -> ContactResult<Vec<ContactRow>> {
    let path = path.as_ref();
    let input = std::fs::read_to_string(path).map_err(|source| ContactError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_contacts_csv(&input)
}
