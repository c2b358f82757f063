use super::csv::ContactRow;
use crate::domain::ValidationError;
use crate::error::{ContactError, ContactResult};
use crate::services::ContactManager;
use std::str::FromStr;

/// How an import reacts to an invalid row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportMode {
    /// Stop at the first invalid row. Rows before it stay imported.
    Strict,
    /// Skip invalid rows and keep going.
    #[default]
    Lenient,
}

impl FromStr for ImportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            other => Err(format!("expected 'strict' or 'lenient', got: {}", other)),
        }
    }
}

/// A row the manager refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    pub line: usize,
    pub error: ValidationError,
}

/// Outcome of an import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Number of contacts added
    pub added: usize,
    /// Rows skipped in lenient mode
    pub rejected: Vec<RejectedRow>,
}

/// Add every row to the manager.
///
/// # Errors
///
/// In strict mode, returns the validation error of the first invalid row.
/// Lenient mode never fails; rejected rows are listed in the report.
pub fn import_contacts(
    manager: &ContactManager,
    rows: &[ContactRow],
    mode: ImportMode,
) -> ContactResult<ImportReport> {
    let mut report = ImportReport::default();

    for row in rows {
        let result = manager.add_contact(
            row.first_name.as_deref(),
            row.last_name.as_deref(),
            row.phone_number.as_deref(),
        );

        match result {
            Ok(_) => report.added += 1,
            Err(ContactError::Validation(error)) => match mode {
                ImportMode::Strict => {
                    tracing::error!(line = row.line, %error, "Import aborted");
                    return Err(error.into());
                }
                ImportMode::Lenient => {
                    tracing::warn!(line = row.line, %error, "Skipping row");
                    report.rejected.push(RejectedRow {
                        line: row.line,
                        error,
                    });
                }
            },
            Err(other) => return Err(other),
        }
    }

    tracing::info!(
        added = report.added,
        rejected = report.rejected.len(),
        "Import finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::parse_contacts_csv;

    const MIXED: &str = "Diego,Castro,3131234567\nDiego,,3131234567\nAna,Ruiz,3101234567\n";

    #[test]
    fn test_import_mode_from_str() {
        assert_eq!("strict".parse::<ImportMode>(), Ok(ImportMode::Strict));
        assert_eq!(" Lenient ".parse::<ImportMode>(), Ok(ImportMode::Lenient));
        assert!("loose".parse::<ImportMode>().is_err());
        assert_eq!(ImportMode::default(), ImportMode::Lenient);
    }

    #[test]
    fn test_lenient_import_skips_invalid_rows() {
        let manager = ContactManager::new();
        let rows = parse_contacts_csv(MIXED).unwrap();

        let report = import_contacts(&manager, &rows, ImportMode::Lenient).unwrap();

        assert_eq!(report.added, 2);
        assert_eq!(
            report.rejected,
            vec![RejectedRow {
                line: 2,
                error: ValidationError::LastNameBlank
            }]
        );
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn test_strict_import_stops_at_first_invalid_row() {
        let manager = ContactManager::new();
        let rows = parse_contacts_csv(MIXED).unwrap();

        let err = import_contacts(&manager, &rows, ImportMode::Strict).unwrap_err();

        assert_eq!(err.as_validation(), Some(ValidationError::LastNameBlank));
        assert_eq!(manager.len(), 1);
    }
}
