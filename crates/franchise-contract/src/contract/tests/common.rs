use chrono::NaiveDate;

use crate::contract::{ContractRecord, FormEvent, FormSession, TextField};
use crate::postal::{PostalAddress, PostalLookupError};

pub(super) const VALID_CPF: &str = "52998224725";
pub(super) const SECOND_VALID_CPF: &str = "11144477735";

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 18).expect("valid date")
}

pub(super) fn blank_session() -> FormSession {
    FormSession::new(ContractRecord::initial(today()))
}

pub(super) fn sample_session() -> FormSession {
    FormSession::new(ContractRecord::sample(today()))
}

/// Apply a sequence of events, panicking on the first rejected one.
pub(super) fn apply_all(session: FormSession, events: Vec<FormEvent>) -> FormSession {
    events.into_iter().fold(session, |session, event| {
        let description = format!("{event:?}");
        session
            .apply(event)
            .unwrap_or_else(|err| panic!("{description} rejected: {err}"))
    })
}

pub(super) fn set_text(field: TextField, value: &str) -> FormEvent {
    FormEvent::SetText {
        field,
        value: value.to_string(),
    }
}

pub(super) fn set_national_id(value: &str) -> FormEvent {
    FormEvent::SetNationalId {
        value: value.to_string(),
    }
}

pub(super) fn se_address() -> PostalAddress {
    PostalAddress {
        street: "Praça da Sé".to_string(),
        neighborhood: "Sé".to_string(),
        city: "São Paulo".to_string(),
        state: "SP".to_string(),
    }
}

pub(super) fn not_found() -> Result<PostalAddress, PostalLookupError> {
    Err(PostalLookupError::NotFound(
        crate::postal::PostalCode::parse("01001000").expect("valid code"),
    ))
}

pub(super) fn royalty_ids(session: &FormSession) -> Vec<String> {
    session
        .record()
        .royalty_options
        .iter()
        .map(|option| option.id.clone())
        .collect()
}
