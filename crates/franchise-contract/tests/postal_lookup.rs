use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use franchise_contract::contract::{ContractRecord, FormEvent, FormSession, TextField};
use franchise_contract::postal::{
    refresh_address, PostalAddress, PostalCode, PostalDirectory, PostalLookupError,
};

#[derive(Default)]
struct FakePostalDirectory {
    addresses: HashMap<String, PostalAddress>,
    requests: Mutex<Vec<String>>,
}

impl FakePostalDirectory {
    fn with(code: &str, address: PostalAddress) -> Self {
        let mut addresses = HashMap::new();
        addresses.insert(code.to_string(), address);
        Self {
            addresses,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("requests mutex").clone()
    }
}

#[async_trait]
impl PostalDirectory for FakePostalDirectory {
    async fn lookup(&self, code: &PostalCode) -> Result<PostalAddress, PostalLookupError> {
        self.requests
            .lock()
            .expect("requests mutex")
            .push(code.to_string());
        self.addresses
            .get(code.as_str())
            .cloned()
            .ok_or_else(|| PostalLookupError::NotFound(code.clone()))
    }
}

struct UnreachableDirectory;

#[async_trait]
impl PostalDirectory for UnreachableDirectory {
    async fn lookup(&self, _code: &PostalCode) -> Result<PostalAddress, PostalLookupError> {
        Err(PostalLookupError::Transport("connection refused".to_string()))
    }
}

fn session_with_postal_code(code: &str) -> FormSession {
    FormSession::new(ContractRecord::initial(
        NaiveDate::from_ymd_opt(2025, 10, 18).expect("valid date"),
    ))
    .apply(FormEvent::SetText {
        field: TextField::PostalCode,
        value: code.to_string(),
    })
    .expect("event applies")
}

fn paulista() -> PostalAddress {
    PostalAddress {
        street: "Avenida Paulista".to_string(),
        neighborhood: "Bela Vista".to_string(),
        city: "São Paulo".to_string(),
        state: "SP".to_string(),
    }
}

#[tokio::test]
async fn refresh_fills_address_from_directory() {
    let directory = FakePostalDirectory::with("01310100", paulista());
    let session = session_with_postal_code("01310-100");

    let refreshed = refresh_address(&session, &directory).await;

    assert_eq!(directory.requests(), ["01310100"]);
    assert_eq!(refreshed.record().street, "Avenida Paulista");
    assert_eq!(refreshed.record().neighborhood, "Bela Vista");
    assert_eq!(refreshed.record().city_state, "São Paulo/SP");
    assert!(!refreshed.postal_lookup_pending());
}

#[tokio::test]
async fn incomplete_code_skips_directory() {
    let directory = FakePostalDirectory::default();
    let session = session_with_postal_code("01310-10");

    let refreshed = refresh_address(&session, &directory).await;

    assert!(directory.requests().is_empty());
    assert_eq!(refreshed, session);
}

#[tokio::test]
async fn unknown_code_keeps_address() {
    let directory = FakePostalDirectory::default();
    let session = session_with_postal_code("99999999");

    let refreshed = refresh_address(&session, &directory).await;

    assert_eq!(directory.requests(), ["99999999"]);
    assert_eq!(refreshed.record(), session.record());
}

#[tokio::test]
async fn transport_failure_keeps_address() {
    let session = session_with_postal_code("01310100");
    let refreshed = refresh_address(&session, &UnreachableDirectory).await;
    assert_eq!(refreshed.record(), session.record());
    assert!(!refreshed.postal_lookup_pending());
}

#[tokio::test]
async fn directory_is_usable_as_trait_object() {
    let directory: Box<dyn PostalDirectory> =
        Box::new(FakePostalDirectory::with("01310100", paulista()));
    let refreshed = refresh_address(&session_with_postal_code("01310100"), directory.as_ref()).await;
    assert_eq!(refreshed.record().city_state, "São Paulo/SP");
}
