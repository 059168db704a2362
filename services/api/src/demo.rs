use crate::infra::{ensure_output_dir, load_record, parse_date};
use chrono::{Local, NaiveDate};
use clap::Args;
use franchise_contract::config::AppConfig;
use franchise_contract::contract::{
    ContractRecord, FormEvent, FormSession, MoneyField, RecordError, TextField,
};
use franchise_contract::document::{ContractExporter, DirectorySink, ExportArtifact};
use franchise_contract::error::AppError;
use franchise_contract::pipeline::national_id;
use franchise_contract::postal::{refresh_address, ViaCepClient};
use franchise_contract::telemetry;
use std::path::{Path, PathBuf};

const MISTYPED_NATIONAL_ID: &str = "52998224726";
const CORRECTED_NATIONAL_ID: &str = "529.982.247-25";
const KIT_VALUE_KEYSTROKES: &str = "5689000";

#[derive(Args, Debug)]
pub(crate) struct RenderArgs {
    /// Contract record as JSON; missing fields are left blank
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Directory for the exported artifact (defaults to EXPORT_DIR)
    #[arg(long)]
    pub(crate) output_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Directory for the exported artifact (defaults to EXPORT_DIR)
    #[arg(long)]
    pub(crate) output_dir: Option<PathBuf>,
    /// Signature date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// CEP to resolve through the postal directory before exporting
    #[arg(long)]
    pub(crate) postal_code: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct ValidateArgs {
    /// CPF, with or without punctuation
    pub(crate) national_id: String,
}

pub(crate) fn run_render(args: RenderArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let output_dir = args.output_dir.unwrap_or(config.export.output_dir);
    let artifact = render_file(&args.input, &output_dir)?;
    println!(
        "Exported {} ({} pages) to {}",
        artifact.filename, artifact.page_count, artifact.location
    );
    Ok(())
}

pub(crate) fn render_file(input: &Path, output_dir: &Path) -> Result<ExportArtifact, AppError> {
    let record = load_record(input)?;
    ensure_output_dir(output_dir)?;

    let exporter = ContractExporter::new(DirectorySink::new(output_dir));
    let (_, outcome) = exporter.export(&FormSession::new(record));
    Ok(outcome?)
}

pub(crate) fn run_validate(args: ValidateArgs) -> Result<(), AppError> {
    let masked = national_id::mask(&args.national_id);
    let digit_count = national_id::digits_of(&args.national_id).len();

    if digit_count != national_id::NATIONAL_ID_DIGITS {
        return Err(AppError::InvalidInput(format!(
            "expected {} CPF digits, got {digit_count}",
            national_id::NATIONAL_ID_DIGITS
        )));
    }
    if !national_id::is_valid(&args.national_id) {
        return Err(AppError::InvalidInput(format!("{masked} is not a valid CPF")));
    }

    println!("{masked} is a valid CPF");
    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        output_dir,
        today,
        postal_code,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let output_dir = output_dir.unwrap_or_else(|| config.export.output_dir.clone());

    println!("Franchise contract demo ({today})");
    let mut session = scripted_session(today, |session| {
        println!(
            "  CPF {:<14} error={}  kit {}",
            session.record().national_id,
            session.national_id_error(),
            session.record().kit_value
        );
    })?;

    if let Some(code) = postal_code {
        session = session.apply(FormEvent::SetText {
            field: TextField::PostalCode,
            value: code,
        })?;
        let directory = ViaCepClient::new(&config.postal)?;
        session = refresh_address(&session, &directory).await;
        let record = session.record();
        println!(
            "\nAddress after lookup: {}, {}, {} (CEP {})",
            record.street, record.neighborhood, record.city_state, record.postal_code
        );
    }

    println!("\nRoyalty options");
    for option in &session.record().royalty_options {
        let marker = if option.id == session.record().selected_royalty_id {
            "*"
        } else {
            " "
        };
        println!("  {marker} {}", option.title);
    }

    ensure_output_dir(&output_dir)?;
    let exporter = ContractExporter::new(DirectorySink::new(&output_dir));
    let (_, outcome) = exporter.export(&session);
    let artifact = outcome?;
    println!(
        "\nExported {} ({} pages) to {}",
        artifact.filename, artifact.page_count, artifact.location
    );
    Ok(())
}

/// Replay the keystrokes of a user filling the CPF and kit value over the sample record.
///
/// `observe` sees the session after every keystroke.
pub(crate) fn scripted_session(
    today: NaiveDate,
    mut observe: impl FnMut(&FormSession),
) -> Result<FormSession, RecordError> {
    let record = ContractRecord {
        national_id: String::new(),
        kit_value: String::new(),
        ..ContractRecord::sample(today)
    };
    let mut session = FormSession::new(record);

    for digit in MISTYPED_NATIONAL_ID.chars() {
        let value = format!("{}{digit}", session.record().national_id);
        session = session.apply(FormEvent::SetNationalId { value })?;
        observe(&session);
    }

    session = session.apply(FormEvent::SetNationalId {
        value: CORRECTED_NATIONAL_ID.to_string(),
    })?;
    observe(&session);

    for digit in KIT_VALUE_KEYSTROKES.chars() {
        let value = format!("{}{digit}", session.record().kit_value);
        session = session.apply(FormEvent::SetMoney {
            field: MoneyField::KitValue,
            value,
        })?;
        observe(&session);
    }

    Ok(session)
}
