//! graphql types
//!
//! wire envelope returned by the stats endpoint.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// graphql response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQlResponse<T> {
    /// response data or null if errors
    pub data: Option<T>,
    /// graphql errors array
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl<T> GraphQlResponse<T> {
    /// true if the response contains graphql errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// take the data payload, failing when the server returned none
    pub fn into_data(self) -> Result<T> {
        self.data.ok_or_else(|| Error::GraphQl {
            status: None,
            errors: self.errors,
            body: String::new(),
            message: "graphql response contained no data".to_string(),
        })
    }
}

/// graphql error entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQlError {
    /// error message
    pub message: String,
    /// error locations in the query
    #[serde(default)]
    pub locations: Vec<GraphQlLocation>,
    /// response path
    #[serde(default)]
    pub path: Vec<serde_json::Value>,
    /// optional extensions payload
    #[serde(default)]
    pub extensions: Option<serde_json::Value>,
}

/// graphql error location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQlLocation {
    /// line number (1-based)
    pub line: i64,
    /// column number (1-based)
    pub column: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_errors() {
        let ok: GraphQlResponse<serde_json::Value> =
            serde_json::from_str(r#"{"data": {"standings": []}}"#).unwrap();
        assert!(!ok.has_errors());

        let err: GraphQlResponse<serde_json::Value> = serde_json::from_str(
            r#"{"data": null, "errors": [{"message": "boom", "locations": [{"line": 2, "column": 3}], "path": ["standings", 0]}]}"#,
        )
        .unwrap();
        assert!(err.has_errors());
        assert_eq!(err.errors[0].locations[0].line, 2);
        assert_eq!(err.errors[0].path[1], 0);
        assert_eq!(err.errors[0].to_string(), "boom");
    }

    #[test]
    fn test_into_data_missing() {
        let empty = GraphQlResponse::<serde_json::Value> {
            data: None,
            errors: vec![],
        };
        let err = empty.into_data().unwrap_err();
        assert!(matches!(err, Error::GraphQl { status: None, .. }));

        let full = GraphQlResponse {
            data: Some(7),
            errors: vec![],
        };
        assert_eq!(full.into_data().unwrap(), 7);
    }
}
