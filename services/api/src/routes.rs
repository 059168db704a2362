use crate::infra::AppState;
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Extension;
use axum::Json;
use franchise_contract::contract::ContractRecord;
use franchise_contract::document::{self, Page};
use franchise_contract::error::AppError;
use franchise_contract::pipeline::currency::{self, CurrencyInput};
use franchise_contract::pipeline::{date, national_id};
use franchise_contract::postal::PostalCode;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub(crate) struct ValueRequest {
    #[serde(default)]
    pub(crate) value: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct NationalIdVerdict {
    pub(crate) digits: String,
    pub(crate) complete: bool,
    pub(crate) valid: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct MaskedValue {
    pub(crate) masked: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct FormattedDate {
    pub(crate) short: String,
    pub(crate) long: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct PostalAddressView {
    pub(crate) postal_code: String,
    pub(crate) street: String,
    pub(crate) neighborhood: String,
    pub(crate) city: String,
    pub(crate) state: String,
    pub(crate) city_state: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct RenderedContract {
    pub(crate) filename: String,
    pub(crate) page_count: usize,
    pub(crate) pages: Vec<Page>,
}

pub(crate) fn contract_routes() -> axum::Router {
    axum::Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/national-id/validate", post(validate_national_id))
        .route("/api/v1/mask/national-id", post(mask_national_id))
        .route("/api/v1/mask/currency", post(mask_currency))
        .route("/api/v1/format/date", post(format_date))
        .route("/api/v1/postal/:code", get(postal_lookup))
        .route("/api/v1/contract/render", post(render_contract))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn validate_national_id(
    Json(payload): Json<ValueRequest>,
) -> Json<NationalIdVerdict> {
    let digits = national_id::digits_of(&payload.value);
    Json(NationalIdVerdict {
        complete: national_id::should_validate(digits.len()),
        valid: national_id::is_valid(&digits),
        digits,
    })
}

pub(crate) async fn mask_national_id(Json(payload): Json<ValueRequest>) -> Json<MaskedValue> {
    Json(MaskedValue {
        masked: national_id::mask(&payload.value),
    })
}

pub(crate) async fn mask_currency(Json(payload): Json<ValueRequest>) -> Json<MaskedValue> {
    Json(MaskedValue {
        masked: currency::mask(CurrencyInput::Keystrokes(&payload.value)),
    })
}

pub(crate) async fn format_date(Json(payload): Json<ValueRequest>) -> Json<FormattedDate> {
    Json(FormattedDate {
        short: date::format_short(&payload.value),
        long: date::format_long(&payload.value),
    })
}

pub(crate) async fn postal_lookup(
    Extension(state): Extension<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<PostalAddressView>, AppError> {
    let code = PostalCode::parse(&raw).ok_or_else(|| {
        AppError::InvalidInput(format!("postal code '{raw}' must have 8 digits"))
    })?;

    let address = state.postal.lookup(&code).await?;
    debug!(postal_code = %code, "postal lookup served");

    Ok(Json(PostalAddressView {
        postal_code: code.to_string(),
        city_state: address.city_state(),
        street: address.street,
        neighborhood: address.neighborhood,
        city: address.city,
        state: address.state,
    }))
}

pub(crate) async fn render_contract(
    Json(record): Json<ContractRecord>,
) -> Result<Json<RenderedContract>, AppError> {
    let prepared = document::prepare(&record)?;
    Ok(Json(RenderedContract {
        filename: prepared.filename,
        page_count: prepared.document.page_count(),
        pages: prepared.document.pages,
    }))
}
