use serde::{Deserialize, Serialize};
use tracing::debug;

use super::defaults::{NEW_ROYALTY_DESCRIPTION, NEW_ROYALTY_TITLE};
use super::domain::{
    ContractRecord, MoneyField, Nationality, RecordError, RoyaltyOption, TextField, Witness,
    WitnessField,
};
use crate::pipeline::currency::{self, CurrencyInput};
use crate::pipeline::national_id;
use crate::postal::{PostalAddress, PostalCode, PostalLookupError};

/// Form section the user is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    Personal,
    Investment,
    Royalties,
    Signatures,
}

/// A single user action against the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FormEvent {
    SetText {
        field: TextField,
        value: String,
    },
    /// Raw contents of the CPF input.
    SetNationalId {
        value: String,
    },
    /// Raw contents of a currency input, as typed.
    SetMoney {
        field: MoneyField,
        value: String,
    },
    SetNationality {
        nationality: Nationality,
    },
    AddWitness,
    RemoveWitness {
        id: String,
    },
    UpdateWitness {
        id: String,
        field: WitnessField,
        value: String,
    },
    AddRoyaltyOption,
    EditRoyaltyOption {
        id: String,
        title: String,
        description: String,
    },
    RemoveRoyaltyOption {
        id: String,
    },
    SelectRoyaltyOption {
        id: String,
    },
    SelectSection {
        section: Section,
    },
}

/// Handed out when a postal lookup starts; the result is only merged while it is current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    code: PostalCode,
    revision: u64,
}

impl LookupTicket {
    pub fn code(&self) -> &PostalCode {
        &self.code
    }
}

/// Immutable snapshot of the form: the record plus the UI state derived from it.
///
/// Every transition returns a new session; the previous one is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSession {
    record: ContractRecord,
    section: Section,
    national_id_error: bool,
    exporting: bool,
    pending_lookup: Option<u64>,
    address_revision: u64,
    id_sequence: u64,
}

impl FormSession {
    pub fn new(record: ContractRecord) -> Self {
        let mut session = Self {
            record,
            section: Section::default(),
            national_id_error: false,
            exporting: false,
            pending_lookup: None,
            address_revision: 0,
            id_sequence: 0,
        };
        session.refresh_national_id_error();
        session
    }

    pub fn record(&self) -> &ContractRecord {
        &self.record
    }

    pub fn into_record(self) -> ContractRecord {
        self.record
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn national_id_error(&self) -> bool {
        self.national_id_error
    }

    pub fn exporting(&self) -> bool {
        self.exporting
    }

    pub fn postal_lookup_pending(&self) -> bool {
        self.pending_lookup.is_some()
    }

    /// Apply one event, returning the next session.
    pub fn apply(&self, event: FormEvent) -> Result<Self, RecordError> {
        let mut next = self.clone();
        match event {
            FormEvent::SetText { field, value } => {
                *next.record.text_mut(field) = value;
                if field.is_address() {
                    next.address_revision += 1;
                }
            }
            FormEvent::SetNationalId { value } => {
                next.record.national_id = national_id::mask(&value);
                next.refresh_national_id_error();
            }
            FormEvent::SetMoney { field, value } => {
                *next.record.money_mut(field) = currency::mask(CurrencyInput::Keystrokes(&value));
            }
            FormEvent::SetNationality { nationality } => {
                next.record.nationality = nationality;
                next.refresh_national_id_error();
            }
            FormEvent::AddWitness => {
                let id = next.fresh_id("witness", |record, id| {
                    record.witnesses.iter().any(|witness| witness.id == id)
                });
                next.record.witnesses.push(Witness {
                    id,
                    national_id: String::new(),
                    state_id: String::new(),
                });
            }
            FormEvent::RemoveWitness { id } => {
                let before = next.record.witnesses.len();
                next.record.witnesses.retain(|witness| witness.id != id);
                if next.record.witnesses.len() == before {
                    return Err(RecordError::UnknownWitness(id));
                }
            }
            FormEvent::UpdateWitness { id, field, value } => {
                let witness = next
                    .record
                    .witnesses
                    .iter_mut()
                    .find(|witness| witness.id == id)
                    .ok_or_else(|| RecordError::UnknownWitness(id.clone()))?;
                match field {
                    WitnessField::NationalId => witness.national_id = value,
                    WitnessField::StateId => witness.state_id = value,
                }
            }
            FormEvent::AddRoyaltyOption => {
                let id = next.fresh_id("royalty", |record, id| record.royalty_option(id).is_some());
                next.record.royalty_options.push(RoyaltyOption {
                    id: id.clone(),
                    title: NEW_ROYALTY_TITLE.to_string(),
                    description: NEW_ROYALTY_DESCRIPTION.to_string(),
                });
                next.record.selected_royalty_id = id;
            }
            FormEvent::EditRoyaltyOption {
                id,
                title,
                description,
            } => {
                let option = next
                    .record
                    .royalty_options
                    .iter_mut()
                    .find(|option| option.id == id)
                    .ok_or_else(|| RecordError::UnknownRoyaltyOption(id.clone()))?;
                option.title = title;
                option.description = description;
            }
            FormEvent::RemoveRoyaltyOption { id } => {
                if next.record.royalty_option(&id).is_none() {
                    return Err(RecordError::UnknownRoyaltyOption(id));
                }
                next.record.royalty_options.retain(|option| option.id != id);
                if next.record.selected_royalty_id == id {
                    next.record.selected_royalty_id = next
                        .record
                        .royalty_options
                        .first()
                        .map(|option| option.id.clone())
                        .unwrap_or_default();
                }
            }
            FormEvent::SelectRoyaltyOption { id } => {
                if next.record.royalty_option(&id).is_none() {
                    return Err(RecordError::UnknownRoyaltyOption(id));
                }
                next.record.selected_royalty_id = id;
            }
            FormEvent::SelectSection { section } => {
                next.section = section;
            }
        }

        Ok(next)
    }

    /// Start a lookup for the current postal code, if it has exactly eight digits.
    pub fn begin_postal_lookup(&self) -> Option<(Self, LookupTicket)> {
        let code = PostalCode::parse(&self.record.postal_code)?;
        let ticket = LookupTicket {
            code,
            revision: self.address_revision,
        };
        let mut next = self.clone();
        next.pending_lookup = Some(ticket.revision);
        Some((next, ticket))
    }

    /// Merge a finished lookup.
    ///
    /// Failures leave the address untouched. Results for a ticket issued before the latest
    /// address edit are discarded.
    pub fn complete_postal_lookup(
        &self,
        ticket: &LookupTicket,
        outcome: Result<PostalAddress, PostalLookupError>,
    ) -> Self {
        let mut next = self.clone();
        if next.pending_lookup == Some(ticket.revision) {
            next.pending_lookup = None;
        }

        if ticket.revision != self.address_revision {
            debug!(
                postal_code = ticket.code.as_str(),
                "discarding stale postal lookup result"
            );
            return next;
        }

        if let Ok(address) = outcome {
            next.record.city_state = address.city_state();
            next.record.street = address.street;
            next.record.neighborhood = address.neighborhood;
            next.address_revision += 1;
        }

        next
    }

    pub(crate) fn with_exporting(&self, exporting: bool) -> Self {
        let mut next = self.clone();
        next.exporting = exporting;
        next
    }

    /// Export was refused because of the CPF: flag the field and jump back to it.
    pub(crate) fn export_blocked(&self) -> Self {
        let mut next = self.with_exporting(false);
        next.national_id_error = true;
        next.section = Section::Personal;
        next
    }

    fn refresh_national_id_error(&mut self) {
        let digits = national_id::digits_of(&self.record.national_id);
        self.national_id_error = self.record.requires_national_id()
            && national_id::should_validate(digits.len())
            && !national_id::is_valid(&digits);
    }

    fn fresh_id(&mut self, prefix: &str, taken: impl Fn(&ContractRecord, &str) -> bool) -> String {
        loop {
            self.id_sequence += 1;
            let candidate = format!("{prefix}-{}", self.id_sequence);
            if !taken(&self.record, &candidate) {
                return candidate;
            }
        }
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new(ContractRecord::default())
    }
}
