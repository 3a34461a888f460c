use std::io::{self, Cursor, Read};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use http::{HeaderMap, HeaderValue, Method};
use httpmask_core::{HttpRequest, RedactionConfig};
use rstest::fixture;
use tracing::info;

pub const CUSTOMER_URL: &str =
    "http://wwww.mysecrets.com:900/v1/store/store1/customer/3232323/token/1223daeDEAed/";

pub const CUSTOMER_BODY: &str = r#"{"customer":{"name":"Alice Martin","email":"alice@example.com","address":{"street":"12 Rue des Lilas","city":"Lyon"}},"card":{"number":"4111111111111111","expiry":"12/30"},"amount":4200}"#;

pub fn init_tracing() {
    // should be run once, fail otherwise, we skip that error
    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();

    info!("Tracing initialized");
}

#[fixture]
pub fn config() -> RedactionConfig {
    init_tracing();
    let config = RedactionConfig::builder()
        .with_masked_headers(["Authorization", "X-Api-Key"])
        .with_masked_json_fields([
            "customer.name",
            "customer.address.street",
            "card",
            "amount",
        ])
        .with_masked_path_segments([
            "/v1/store/${value}/customer/${obfuscate}/token/${obfuscate}/",
        ])
        .build();
    match config {
        Ok(config) => config,
        Err(error) => {
            panic!("fail to build the redaction config: {error:?}");
        }
    }
}

#[fixture]
pub fn request() -> HttpRequest {
    let mut headers = HeaderMap::new();
    headers.append("authorization", HeaderValue::from_static("Bearer 1234567890"));
    headers.append("x-api-key", HeaderValue::from_static("key-one"));
    headers.append("x-api-key", HeaderValue::from_static("key-two"));
    headers.append("accept", HeaderValue::from_static("application/json"));

    HttpRequest::builder(Method::POST, CUSTOMER_URL)
        .headers(headers)
        .body(CUSTOMER_BODY)
        .charset("UTF-8")
        .build()
}

/// A single-read body stream counting reads and drops.
#[derive(Debug)]
pub struct OneShotBody {
    inner: Cursor<Vec<u8>>,
    exhausted: bool,
    drops: Arc<AtomicUsize>,
}

impl OneShotBody {
    pub fn new(body: &str) -> (Self, Arc<AtomicUsize>) {
        let drops = Arc::new(AtomicUsize::new(0));
        let body = Self {
            inner: Cursor::new(body.as_bytes().to_vec()),
            exhausted: false,
            drops: Arc::clone(&drops),
        };
        (body, drops)
    }
}

impl Read for OneShotBody {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.exhausted {
            return Err(io::Error::other("stream already consumed"));
        }
        let read = self.inner.read(buf)?;
        if read == 0 {
            self.exhausted = true;
        }
        Ok(read)
    }
}

impl Drop for OneShotBody {
    fn drop(&mut self) {
        self.drops.fetch_add(1, Ordering::SeqCst);
    }
}
