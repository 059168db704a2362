use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::{PostalAddress, PostalCode, PostalDirectory, PostalLookupError};
use crate::config::PostalLookupConfig;

/// ViaCEP client: `GET {base}/{cep}/json/`.
#[derive(Debug, Clone)]
pub struct ViaCepClient {
    http: Client,
    base_url: String,
}

impl ViaCepClient {
    pub fn new(config: &PostalLookupConfig) -> Result<Self, PostalLookupError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| PostalLookupError::Transport(err.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url_for(&self, code: &PostalCode) -> String {
        format!("{}/{}/json/", self.base_url, code)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ViaCepResponse {
    logradouro: Option<String>,
    bairro: Option<String>,
    localidade: Option<String>,
    uf: Option<String>,
    #[serde(deserialize_with = "lenient_flag")]
    erro: bool,
}

/// ViaCEP has reported the error flag both as a boolean and as the string "true".
fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Bool(flag) => flag,
        serde_json::Value::String(text) => text.eq_ignore_ascii_case("true"),
        _ => false,
    })
}

impl ViaCepResponse {
    fn into_address(self, code: &PostalCode) -> Result<PostalAddress, PostalLookupError> {
        if self.erro {
            return Err(PostalLookupError::NotFound(code.clone()));
        }

        Ok(PostalAddress {
            street: self.logradouro.unwrap_or_default(),
            neighborhood: self.bairro.unwrap_or_default(),
            city: self.localidade.unwrap_or_default(),
            state: self.uf.unwrap_or_default(),
        })
    }
}

#[async_trait]
impl PostalDirectory for ViaCepClient {
    async fn lookup(&self, code: &PostalCode) -> Result<PostalAddress, PostalLookupError> {
        let response = self
            .http
            .get(self.url_for(code))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|err| PostalLookupError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PostalLookupError::Transport(format!(
                "directory responded with {status}"
            )));
        }

        let body: ViaCepResponse = response
            .json()
            .await
            .map_err(|err| PostalLookupError::Decode(err.to_string()))?;

        body.into_address(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn code() -> PostalCode {
        PostalCode::parse("01001000").expect("valid code")
    }

    #[test]
    fn builds_lookup_url_without_double_slash() {
        let client = ViaCepClient::new(&PostalLookupConfig {
            base_url: "https://viacep.com.br/ws/".to_string(),
            timeout: Duration::from_secs(2),
        })
        .expect("client builds");
        assert_eq!(
            client.url_for(&code()),
            "https://viacep.com.br/ws/01001000/json/"
        );
    }

    #[test]
    fn maps_successful_payload() {
        let body: ViaCepResponse = serde_json::from_str(
            r#"{"cep":"01001-000","logradouro":"Praça da Sé","bairro":"Sé","localidade":"São Paulo","uf":"SP"}"#,
        )
        .expect("payload parses");
        let address = body.into_address(&code()).expect("address");
        assert_eq!(address.street, "Praça da Sé");
        assert_eq!(address.neighborhood, "Sé");
        assert_eq!(address.city_state(), "São Paulo/SP");
    }

    #[test]
    fn error_flag_means_not_found() {
        for payload in [r#"{"erro": true}"#, r#"{"erro": "true"}"#] {
            let body: ViaCepResponse = serde_json::from_str(payload).expect("payload parses");
            assert!(matches!(
                body.into_address(&code()),
                Err(PostalLookupError::NotFound(_))
            ));
        }
    }
}
