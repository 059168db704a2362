use chrono::NaiveDate;
use franchise_contract::contract::ContractRecord;
use franchise_contract::error::AppError;
use franchise_contract::postal::PostalDirectory;
use metrics_exporter_prometheus::PrometheusHandle;
use std::fs;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) postal: Arc<dyn PostalDirectory>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Read a contract record from a JSON file; missing fields take their blank defaults.
pub(crate) fn load_record(path: &Path) -> Result<ContractRecord, AppError> {
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|err| {
        AppError::InvalidInput(format!("{} is not a contract record: {err}", path.display()))
    })
}

/// Create the export directory if needed.
pub(crate) fn ensure_output_dir(path: &Path) -> Result<(), AppError> {
    fs::create_dir_all(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use franchise_contract::contract::Nationality;

    #[test]
    fn parse_date_reports_bad_input() {
        assert_eq!(
            parse_date(" 2025-10-30 "),
            Ok(NaiveDate::from_ymd_opt(2025, 10, 30).expect("valid date"))
        );
        assert!(parse_date("30/10/2025").is_err());
    }

    #[test]
    fn load_record_accepts_partial_json() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("record.json");
        fs::write(&path, r#"{ "name": "Ana", "nationality": "other" }"#).expect("write record");

        let record = load_record(&path).expect("record loads");
        assert_eq!(record.name, "Ana");
        assert_eq!(record.nationality, Nationality::Other);
    }

    #[test]
    fn load_record_rejects_malformed_json() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("record.json");
        fs::write(&path, "{ not json").expect("write record");

        assert!(matches!(load_record(&path), Err(AppError::InvalidInput(_))));
    }
}
