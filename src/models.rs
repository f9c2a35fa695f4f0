use std::collections::BTreeMap;

use actix_web::{
    http::header::{self, HeaderName},
    web::Bytes,
    HttpRequest,
};
use serde::{Deserialize, Serialize};

const CONNECTION_HEADERS: [HeaderName; 2] = [header::HOST, header::TRANSFER_ENCODING];

/// One inbound request as it is written to the request log.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CapturedRequest {
    pub method: String,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    pub url: String,
}

impl CapturedRequest {
    /// Builds a record from the request head and its fully read body.
    /// Only the first value of a repeated header is kept; `Host` and
    /// `Transfer-Encoding` describe the connection and are left out.
    pub fn from_request(request: &HttpRequest, body: &Bytes) -> Self {
        let mut headers = BTreeMap::new();
        for name in request.headers().keys() {
            if CONNECTION_HEADERS.contains(name) {
                continue;
            }
            if let Some(value) = request.headers().get(name) {
                headers.insert(
                    canonical_header_name(name.as_str()),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                );
            }
        }

        let url = request
            .uri()
            .path_and_query()
            .map_or_else(|| request.path().to_owned(), |pq| pq.as_str().to_owned());

        CapturedRequest {
            method: request.method().as_str().to_owned(),
            headers,
            body: String::from_utf8_lossy(body).into_owned(),
            url,
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "\x1b[36mReceived Request:\x1b[0m\n\
             \x1b[32mMethod: {}\x1b[0m\n\
             \x1b[34mURL: {}\x1b[0m\n\
             \x1b[35mHeaders: {:?}\x1b[0m\n\
             \x1b[33mBody: {}\x1b[0m",
            self.method, self.url, self.headers, self.body
        )
    }
}

// content-type -> Content-Type
pub fn canonical_header_name(name: &str) -> String {
    let mut upper = true;
    name.chars()
        .map(|c| {
            let out = if upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            };
            upper = c == '-';
            out
        })
        .collect()
}
