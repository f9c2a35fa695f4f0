mod store;

pub use store::{Store, StoreError, DEFAULT_LOG_FILE};

use crate::models::CapturedRequest;

/// Captured requests in arrival order. Only ever grows.
#[derive(Debug, Default)]
pub struct RequestLog {
    records: Vec<CapturedRequest>,
}

impl RequestLog {
    pub fn new() -> Self {
        RequestLog { records: vec![] }
    }

    pub fn append(&mut self, record: CapturedRequest) -> usize {
        let offset = self.records.len();
        self.records.push(record);

        offset
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// The whole log as indented JSON.
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec_pretty(&self.records)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::BTreeMap;

    fn record(n: usize) -> CapturedRequest {
        CapturedRequest {
            method: "POST".to_string(),
            headers: BTreeMap::new(),
            body: format!("body {}", n),
            url: format!("/{}", n),
        }
    }

    #[test]
    fn append_returns_arrival_offset() {
        let mut log = RequestLog::new();
        assert_eq!(log.len(), 0);

        for i in 0..3 {
            assert_eq!(log.append(record(i)), i);
        }
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn json_is_two_space_indented_array() {
        let mut log = RequestLog::new();
        log.append(CapturedRequest {
            method: "GET".to_string(),
            headers: BTreeMap::from([("Accept".to_string(), "*/*".to_string())]),
            body: String::new(),
            url: "/".to_string(),
        });

        let json = String::from_utf8(log.to_json().unwrap()).unwrap();
        let expected = r#"[
  {
    "method": "GET",
    "headers": {
      "Accept": "*/*"
    },
    "body": "",
    "url": "/"
  }
]"#;
        assert_eq!(json, expected);
    }
}
