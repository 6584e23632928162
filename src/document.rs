use serde_json::{Map, Value};

use crate::SaveError;

/// A schemaless JSON object received from a client.
///
/// A bare `null` body is accepted too and is saved as `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument(Option<Map<String, Value>>);

impl ConfigDocument {
    /// Arrays, scalars and malformed input are rejected.
    pub fn parse(body: &[u8]) -> Result<Self, SaveError> {
        serde_json::from_slice(body)
            .map(Self)
            .map_err(|_| SaveError::InvalidJson)
    }

    /// Two-space indented, keys sorted at every level.
    pub fn to_pretty(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec_pretty(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn rejects_non_objects() {
        let bodies: [&[u8]; 6] = [b"{not json", b"", b"[1,2]", b"\"str\"", b"42", b"true"];

        for body in bodies {
            assert_eq!(ConfigDocument::parse(body), Err(SaveError::InvalidJson));
        }
    }

    #[test]
    fn null_is_kept_as_null() {
        let doc = ConfigDocument::parse(b" null ").unwrap();

        assert_eq!(doc.to_pretty().unwrap(), b"null");
    }

    #[test]
    fn pretty_output_is_indented_and_sorted() {
        let doc = ConfigDocument::parse(br#"{"b":{"c":2},"a":1}"#).unwrap();
        let out = String::from_utf8(doc.to_pretty().unwrap()).unwrap();

        assert_eq!(out, "{\n  \"a\": 1,\n  \"b\": {\n    \"c\": 2\n  }\n}");
    }

    #[test]
    fn formatting_is_stable() {
        let doc = ConfigDocument::parse(br#"{ "z" : [1, {"y":null}],"x":"\u00e9" }"#).unwrap();
        let first = doc.to_pretty().unwrap();
        let second = ConfigDocument::parse(&first).unwrap().to_pretty().unwrap();

        assert_eq!(first, second);

        let value: Value = serde_json::from_slice(&first).unwrap();
        assert_eq!(value, json!({"x": "é", "z": [1, {"y": null}]}));
    }
}
