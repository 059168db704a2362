//! The contract record and the form session that edits it.

mod defaults;
pub mod domain;
mod session;

#[cfg(test)]
mod tests;

pub use defaults::{standard_royalty_options, MARITAL_STATUSES};
pub use domain::{
    ContractRecord, MoneyField, Nationality, RecordError, RoyaltyOption, TextField, Witness,
    WitnessField,
};
pub use session::{FormEvent, FormSession, LookupTicket, Section};
