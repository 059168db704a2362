//! CEP address autofill.

mod viacep;

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::contract::FormSession;

pub use viacep::ViaCepClient;

const POSTAL_CODE_DIGITS: usize = 8;

/// An eight-digit CEP with punctuation removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostalCode(String);

impl PostalCode {
    /// Strip non-digits; `None` unless exactly eight remain.
    pub fn parse(raw: &str) -> Option<Self> {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        (digits.len() == POSTAL_CODE_DIGITS).then_some(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Address fields returned by the directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalAddress {
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
}

impl PostalAddress {
    /// `City/UF`, as written into the contract.
    pub fn city_state(&self) -> String {
        match (self.city.is_empty(), self.state.is_empty()) {
            (false, false) => format!("{}/{}", self.city, self.state),
            (false, true) => self.city.clone(),
            (true, false) => self.state.clone(),
            (true, true) => String::new(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PostalLookupError {
    #[error("postal code {0} not found")]
    NotFound(PostalCode),
    #[error("postal directory unreachable: {0}")]
    Transport(String),
    #[error("unexpected postal directory response: {0}")]
    Decode(String),
}

/// Third-party address directory keyed by CEP.
#[async_trait]
pub trait PostalDirectory: Send + Sync {
    async fn lookup(&self, code: &PostalCode) -> Result<PostalAddress, PostalLookupError>;
}

/// Run the blur-time lookup for `session`'s postal code and merge the result.
///
/// Lookup failures are logged and otherwise swallowed; the address stays as it was.
pub async fn refresh_address<D>(session: &FormSession, directory: &D) -> FormSession
where
    D: PostalDirectory + ?Sized,
{
    let Some((pending, ticket)) = session.begin_postal_lookup() else {
        return session.clone();
    };

    let outcome = directory.lookup(ticket.code()).await;
    match &outcome {
        Ok(_) => info!(postal_code = %ticket.code(), "postal lookup resolved"),
        Err(err) => warn!(postal_code = %ticket.code(), error = %err, "postal lookup failed"),
    }

    pending.complete_postal_lookup(&ticket, outcome)
}
