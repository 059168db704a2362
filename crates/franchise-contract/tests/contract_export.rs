use std::fs;

use chrono::NaiveDate;
use franchise_contract::contract::{
    ContractRecord, FormEvent, FormSession, Section, TextField, WitnessField,
};
use franchise_contract::document::{
    render, ArtifactSink, ContractExporter, DirectorySink, ExportError, SinkError,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 18).expect("valid date")
}

fn filled_session() -> FormSession {
    let events = vec![
        FormEvent::SetText {
            field: TextField::Name,
            value: "Maria da Silva".to_string(),
        },
        FormEvent::SetNationalId {
            value: "52998224725".to_string(),
        },
        FormEvent::SetText {
            field: TextField::SignatureCity,
            value: "Curitiba".to_string(),
        },
        FormEvent::AddWitness,
        FormEvent::AddRoyaltyOption,
    ];

    events
        .into_iter()
        .try_fold(FormSession::new(ContractRecord::initial(today())), |session, event| {
            session.apply(event)
        })
        .expect("events apply")
}

#[test]
fn exports_rendered_contract_into_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    let exporter = ContractExporter::new(DirectorySink::new(dir.path()));

    let session = filled_session();
    let (after, outcome) = exporter.export(&session);
    let artifact = outcome.expect("export succeeds");

    assert_eq!(artifact.filename, "Contrato_Franquia_Maria da Silva.txt");
    assert!(!after.exporting());

    let written = fs::read_to_string(dir.path().join(&artifact.filename)).expect("artifact file");
    assert!(written.contains("MARIA DA SILVA, Brasileira"));
    assert!(written.contains("CURITIBA, 18 DE OUTUBRO DE 2025"));
    assert!(written.contains("sistema inovador de 4 possibilidades"));
    assert!(written.contains("4. Nova Opção de Royalties"));
    assert!(written.contains("TESTEMUNHA 3"));
    assert_eq!(
        written.matches("Nova Opção de Royalties").count(),
        4,
        "numbered list, bullet list and both echoes of the selection"
    );
}

#[test]
fn rendered_lists_mirror_the_record() {
    let session = filled_session()
        .apply(FormEvent::RemoveRoyaltyOption {
            id: "1490".to_string(),
        })
        .and_then(|session| {
            session.apply(FormEvent::UpdateWitness {
                id: "2".to_string(),
                field: WitnessField::StateId,
                value: "7654321".to_string(),
            })
        })
        .expect("events apply");

    let document = render(session.record());
    assert!(document.contains("sistema inovador de 3 possibilidades"));
    assert!(!document.contains("1.490,00"));
    assert!(document.contains("RG: 7654321"));
    assert!(document.contains("TESTEMUNHA 3"));
    assert!(!document.contains("TESTEMUNHA 4"));
}

#[test]
fn invalid_national_id_writes_nothing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let exporter = ContractExporter::new(DirectorySink::new(dir.path()));

    let session = filled_session()
        .apply(FormEvent::SelectSection {
            section: Section::Investment,
        })
        .and_then(|session| {
            session.apply(FormEvent::SetNationalId {
                value: "52998224726".to_string(),
            })
        })
        .expect("events apply");

    let (after, outcome) = exporter.export(&session);
    assert!(matches!(outcome, Err(ExportError::InvalidNationalId)));
    assert_eq!(after.section(), Section::Personal);
    assert!(after.national_id_error());
    assert_eq!(
        fs::read_dir(dir.path()).expect("read dir").count(),
        0,
        "no partial artifact"
    );
}

#[test]
fn missing_directory_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("does-not-exist");
    let exporter = ContractExporter::new(DirectorySink::new(&missing));

    let (after, outcome) = exporter.export(&filled_session());
    assert!(matches!(
        outcome,
        Err(ExportError::Target(SinkError::Unavailable(_)))
    ));
    assert!(!after.exporting());
}

#[test]
fn unnamed_franchisee_exports_as_new() {
    let dir = tempfile::tempdir().expect("temp dir");
    let exporter = ContractExporter::new(DirectorySink::new(dir.path()));

    let session = filled_session()
        .apply(FormEvent::SetText {
            field: TextField::Name,
            value: String::new(),
        })
        .expect("event applies");

    let (_, outcome) = exporter.export(&session);
    let artifact = outcome.expect("export succeeds");
    assert_eq!(artifact.filename, "Contrato_Franquia_Novo.txt");
    assert!(dir.path().join("Contrato_Franquia_Novo.txt").is_file());
}

#[test]
fn store_replaces_existing_artifact_without_leftovers() {
    let dir = tempfile::tempdir().expect("temp dir");
    let sink = DirectorySink::new(dir.path());
    let target = dir.path().join("Contrato_Franquia_Novo.txt");
    fs::write(&target, "stale").expect("seed stale artifact");

    let document = render(filled_session().record());
    sink.store("Contrato_Franquia_Novo.txt", &document).expect("store succeeds");

    assert_eq!(
        fs::read_to_string(&target).expect("artifact file"),
        document.to_text()
    );
    assert_eq!(fs::read_dir(dir.path()).expect("read dir").count(), 1);
}

#[test]
fn failed_store_leaves_no_partial_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let sink = DirectorySink::new(dir.path());
    let occupied = dir.path().join("Contrato_Franquia_Novo.txt");
    fs::create_dir(&occupied).expect("occupy name");
    fs::write(occupied.join("keep.txt"), "kept").expect("fill directory");

    let document = render(filled_session().record());
    let err = sink
        .store("Contrato_Franquia_Novo.txt", &document)
        .expect_err("target name is a directory");

    assert!(matches!(err, SinkError::Io(_)));
    let names: Vec<_> = fs::read_dir(dir.path())
        .expect("read dir")
        .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["Contrato_Franquia_Novo.txt"]);
    assert!(occupied.is_dir());
}
