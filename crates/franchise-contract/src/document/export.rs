use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use super::render::{render, ContractDocument};
use crate::contract::{ContractRecord, FormSession, RecordError};

const ARTIFACT_PREFIX: &str = "Contrato_Franquia_";
const ARTIFACT_EXTENSION: &str = "txt";
const UNNAMED_FRANCHISEE: &str = "Novo";

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("export target {0} is not available")]
    Unavailable(String),
    #[error("failed to write export artifact: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Shown to the user verbatim.
    #[error("O CPF informado é inválido. Por favor, corrija antes de baixar o documento.")]
    InvalidNationalId,
    #[error("contract record is inconsistent: {0}")]
    Integrity(#[from] RecordError),
    #[error(transparent)]
    Target(#[from] SinkError),
}

/// Destination for exported agreements.
pub trait ArtifactSink: Send + Sync {
    /// Persist `document` under `filename`, returning where it ended up.
    fn store(&self, filename: &str, document: &ContractDocument) -> Result<String, SinkError>;
}

/// Writes the plain-text agreement into an existing directory.
///
/// The text is staged in a hidden sibling file and renamed into place, so a failed
/// write never leaves a truncated artifact under the final name.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ArtifactSink for DirectorySink {
    fn store(&self, filename: &str, document: &ContractDocument) -> Result<String, SinkError> {
        if !self.root.is_dir() {
            return Err(SinkError::Unavailable(self.root.display().to_string()));
        }

        let path = self.root.join(filename);
        let staging = self.root.join(format!(".{filename}.partial"));
        let written =
            fs::write(&staging, document.to_text()).and_then(|()| fs::rename(&staging, &path));
        if let Err(err) = written {
            let _ = fs::remove_file(&staging);
            return Err(err.into());
        }
        Ok(path.display().to_string())
    }
}

/// Agreement that passed every export precondition.
#[derive(Debug, Clone, Serialize)]
pub struct PreparedExport {
    pub filename: String,
    pub document: ContractDocument,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportArtifact {
    pub filename: String,
    pub location: String,
    pub page_count: usize,
}

/// `Contrato_Franquia_{name}.txt`, or `Contrato_Franquia_Novo.txt` when the name is blank.
///
/// Path separators and control characters in the name are replaced with `_`.
pub fn artifact_filename(name: &str) -> String {
    let name = name.trim();
    let stem: String = if name.is_empty() {
        UNNAMED_FRANCHISEE.to_string()
    } else {
        name.chars()
            .map(|c| {
                if c.is_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.') {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    };
    format!("{ARTIFACT_PREFIX}{stem}.{ARTIFACT_EXTENSION}")
}

/// Check export preconditions and render the agreement.
pub fn prepare(record: &ContractRecord) -> Result<PreparedExport, ExportError> {
    record.check_integrity()?;
    record.check_amounts()?;
    if record.national_id_blocks_export() {
        return Err(ExportError::InvalidNationalId);
    }

    Ok(PreparedExport {
        filename: artifact_filename(&record.name),
        document: render(record),
    })
}

/// Drives the export action of a form session.
pub struct ContractExporter<S> {
    sink: S,
}

impl<S: ArtifactSink> ContractExporter<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Check the session's record and mark the export as in progress.
    ///
    /// An invalid CPF flags the field and moves the form back to the personal section.
    /// On success the returned session has the exporting flag set until [`Self::finish`].
    pub fn begin(&self, session: &FormSession) -> (FormSession, Result<PreparedExport, ExportError>) {
        match prepare(session.record()) {
            Ok(prepared) => (session.with_exporting(true), Ok(prepared)),
            Err(ExportError::InvalidNationalId) => {
                warn!("export blocked by invalid national id");
                (session.export_blocked(), Err(ExportError::InvalidNationalId))
            }
            Err(err) => {
                warn!(error = %err, "export refused");
                (session.with_exporting(false), Err(err))
            }
        }
    }

    /// Hand a prepared agreement to the sink and clear the exporting flag.
    pub fn finish(
        &self,
        session: &FormSession,
        prepared: PreparedExport,
    ) -> (FormSession, Result<ExportArtifact, ExportError>) {
        let outcome = self
            .sink
            .store(&prepared.filename, &prepared.document)
            .map(|location| ExportArtifact {
                filename: prepared.filename.clone(),
                location,
                page_count: prepared.document.page_count(),
            })
            .map_err(ExportError::from);

        match &outcome {
            Ok(artifact) => info!(
                filename = %artifact.filename,
                location = %artifact.location,
                pages = artifact.page_count,
                "contract exported"
            ),
            Err(err) => warn!(filename = %prepared.filename, error = %err, "contract export failed"),
        }

        (session.with_exporting(false), outcome)
    }

    /// Run [`Self::begin`] and [`Self::finish`] back to back.
    pub fn export(&self, session: &FormSession) -> (FormSession, Result<ExportArtifact, ExportError>) {
        match self.begin(session) {
            (in_progress, Ok(prepared)) => self.finish(&in_progress, prepared),
            (settled, Err(err)) => (settled, Err(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{FormEvent, MoneyField, Nationality, Section};
    use chrono::NaiveDate;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        stored: Mutex<Vec<String>>,
    }

    impl ArtifactSink for RecordingSink {
        fn store(&self, filename: &str, _document: &ContractDocument) -> Result<String, SinkError> {
            self.stored
                .lock()
                .expect("sink mutex poisoned")
                .push(filename.to_string());
            Ok(format!("memory://{filename}"))
        }
    }

    struct OfflineSink;

    impl ArtifactSink for OfflineSink {
        fn store(&self, _filename: &str, _document: &ContractDocument) -> Result<String, SinkError> {
            Err(SinkError::Unavailable("offline".to_string()))
        }
    }

    fn sample_session() -> FormSession {
        FormSession::new(ContractRecord::sample(
            NaiveDate::from_ymd_opt(2025, 10, 18).expect("valid date"),
        ))
    }

    #[test]
    fn filename_falls_back_for_blank_names() {
        assert_eq!(artifact_filename(""), "Contrato_Franquia_Novo.txt");
        assert_eq!(artifact_filename("   "), "Contrato_Franquia_Novo.txt");
        assert_eq!(
            artifact_filename("Ana Souza"),
            "Contrato_Franquia_Ana Souza.txt"
        );
        assert_eq!(
            artifact_filename("../etc/passwd"),
            "Contrato_Franquia_.._etc_passwd.txt"
        );
    }

    #[test]
    fn valid_session_is_stored() {
        let exporter = ContractExporter::new(RecordingSink::default());
        let (session, outcome) = exporter.export(&sample_session());

        let artifact = outcome.expect("export succeeds");
        assert_eq!(artifact.filename, "Contrato_Franquia_AQUI VAI O NOME COMPLETO.txt");
        assert_eq!(artifact.page_count, 18);
        assert!(!session.exporting());
        assert_eq!(
            exporter.sink().stored.lock().expect("sink mutex").as_slice(),
            [artifact.filename.clone()]
        );
    }

    #[test]
    fn invalid_national_id_blocks_and_returns_to_personal_section() {
        let session = sample_session()
            .apply(FormEvent::SelectSection {
                section: Section::Signatures,
            })
            .and_then(|session| {
                session.apply(FormEvent::SetNationalId {
                    value: "111.111.111-1".to_string(),
                })
            })
            .expect("events apply");
        assert!(!session.national_id_error());

        let exporter = ContractExporter::new(RecordingSink::default());
        let (blocked, outcome) = exporter.export(&session);

        assert!(matches!(outcome, Err(ExportError::InvalidNationalId)));
        assert!(blocked.national_id_error());
        assert_eq!(blocked.section(), Section::Personal);
        assert!(!blocked.exporting());
        assert!(exporter.sink().stored.lock().expect("sink mutex").is_empty());
    }

    #[test]
    fn foreign_franchisee_exports_without_national_id() {
        let session = sample_session()
            .apply(FormEvent::SetNationality {
                nationality: Nationality::Other,
            })
            .and_then(|session| {
                session.apply(FormEvent::SetNationalId {
                    value: String::new(),
                })
            })
            .expect("events apply");

        let exporter = ContractExporter::new(RecordingSink::default());
        let (_, outcome) = exporter.export(&session);
        assert!(outcome.is_ok());
    }

    #[test]
    fn unavailable_target_clears_exporting_flag() {
        let exporter = ContractExporter::new(OfflineSink);
        let (session, outcome) = exporter.export(&sample_session());
        assert!(matches!(
            outcome,
            Err(ExportError::Target(SinkError::Unavailable(_)))
        ));
        assert!(!session.exporting());
        assert!(!session.national_id_error());
    }

    #[test]
    fn session_is_marked_exporting_between_begin_and_finish() {
        let exporter = ContractExporter::new(RecordingSink::default());
        let (in_progress, prepared) = exporter.begin(&sample_session());
        let prepared = prepared.expect("record is exportable");

        assert!(in_progress.exporting());
        assert!(exporter.sink().stored.lock().expect("sink mutex").is_empty());

        let (done, outcome) = exporter.finish(&in_progress, prepared);
        assert!(outcome.is_ok());
        assert!(!done.exporting());
    }

    #[test]
    fn unmasked_amounts_are_refused() {
        let mut record = sample_session().into_record();
        record.kit_value = "56890".to_string();
        record.franchise_fee = "quinze mil".to_string();

        assert!(matches!(
            prepare(&record),
            Err(ExportError::Integrity(RecordError::UnformattedAmount(
                MoneyField::KitValue
            )))
        ));

        let exporter = ContractExporter::new(RecordingSink::default());
        let (session, outcome) = exporter.export(&FormSession::new(record));
        assert!(matches!(outcome, Err(ExportError::Integrity(_))));
        assert!(!session.exporting());
        assert!(exporter.sink().stored.lock().expect("sink mutex").is_empty());
    }

    #[test]
    fn blocked_message_is_user_facing() {
        assert_eq!(
            ExportError::InvalidNationalId.to_string(),
            "O CPF informado é inválido. Por favor, corrija antes de baixar o documento."
        );
    }
}
