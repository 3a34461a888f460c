use std::io::Cursor;
use std::sync::Arc;

use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderValue, Method, StatusCode};
use httpmask_core::{
    ConfigurableObfuscator, ExchangeLogger, HttpRequest, HttpResponse, RedactionSettings,
};
use serde::Deserialize;

const SETTINGS: &str = r#"{
    "masked-headers": ["Authorization"],
    "masked-json-fields": ["card.number", "card.holder", "customer.email"],
    "masked-path-segments": ["/v1/customer/${obfuscate}/payments"]
}"#;

#[derive(Debug, Deserialize)]
struct Payment {
    id: String,
    status: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().pretty().init();

    // Build the obfuscator from declarative settings
    let config = RedactionSettings::from_json_str(SETTINGS)?
        .into_builder()
        .build()?;
    let logger = ExchangeLogger::new("payments", Arc::new(ConfigurableObfuscator::new(config)));

    // A request and the response the transport would hand back
    let request = HttpRequest::builder(
        Method::POST,
        "https://pay.example.com/v1/customer/3232323/payments",
    )
    .header(AUTHORIZATION, HeaderValue::from_static("Bearer 9f8e7d6c5b4a"))
    .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
    .body(r#"{"card":{"number":"4111111111111111","holder":"Alice Martin"},"amount":4200}"#)
    .build();

    let body = r#"{"id":"pay_42","status":"accepted","customer":{"email":"alice@example.com"}}"#;
    let response = HttpResponse::builder(StatusCode::CREATED)
        .reason("Created")
        .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
        .body_reader(Cursor::new(body.as_bytes().to_vec()))
        .request(request)
        .build();

    // Only the masked exchange is logged, the payment is decoded from the original bytes
    let payment: Payment = logger.log_and_decode(response)?;
    tracing::info!(id = %payment.id, status = %payment.status, "payment decoded");

    Ok(())
}
