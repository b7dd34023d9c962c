//! request builder
//!
//! binds variables to a query template and attaches bearer auth. no i/o.

use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::Serialize;

/// a transport-ready graphql request
#[derive(Debug, Clone)]
pub struct GraphQlRequest {
    query: &'static str,
    variables: serde_json::Map<String, serde_json::Value>,
    headers: HeaderMap,
}

impl GraphQlRequest {
    /// start a request for a query template with no variables
    pub fn new(query: &'static str) -> Self {
        Self {
            query,
            variables: serde_json::Map::new(),
            headers: HeaderMap::new(),
        }
    }

    /// bind variables from a struct that serializes to a json object
    pub fn with_variables<V: Serialize>(mut self, variables: &V) -> Result<Self> {
        match serde_json::to_value(variables)? {
            serde_json::Value::Object(map) => {
                self.variables.extend(map);
                Ok(self)
            }
            serde_json::Value::Null => Ok(self),
            other => Err(Error::Config(format!(
                "graphql variables must serialize to an object, got {other}"
            ))),
        }
    }

    /// set `Authorization: Bearer <token>`
    ///
    /// an empty token leaves the request unauthenticated, for transports
    /// that manage auth themselves.
    pub fn with_bearer_token(mut self, token: &str) -> Result<Self> {
        if token.is_empty() {
            return Ok(self);
        }
        self.headers.insert(AUTHORIZATION, bearer_header(token)?);
        Ok(self)
    }

    /// query template
    pub fn query(&self) -> &str {
        self.query
    }

    /// bound variables
    pub fn variables(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.variables
    }

    /// per-request headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// json body as posted to the endpoint
    pub fn body(&self) -> serde_json::Value {
        serde_json::json!({
            "query": self.query,
            "variables": self.variables,
        })
    }
}

pub(crate) fn bearer_header(token: &str) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|err| Error::Config(format!("invalid bearer token header value: {err}")))?;
    value.set_sensitive(true);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Vars {
        year: i32,
        champ_series: bool,
    }

    #[test]
    fn test_variables_and_auth() {
        let request = GraphQlRequest::new("query { ok }")
            .with_variables(&Vars {
                year: 2023,
                champ_series: true,
            })
            .unwrap()
            .with_bearer_token("secret")
            .unwrap();

        assert_eq!(request.query(), "query { ok }");
        assert_eq!(request.variables()["year"], 2023);
        assert_eq!(request.variables()["champSeries"], true);
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer secret");
        assert!(request.headers()[AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn test_body_shape() {
        let request = GraphQlRequest::new("query { ok }");
        let body = request.body();
        assert_eq!(body["query"], "query { ok }");
        assert_eq!(body["variables"], serde_json::json!({}));
    }

    #[test]
    fn test_empty_token_skips_header() {
        let request = GraphQlRequest::new("query { ok }")
            .with_bearer_token("")
            .unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_invalid_token() {
        let err = GraphQlRequest::new("query { ok }")
            .with_bearer_token("bad\ntoken")
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_non_object_variables() {
        let err = GraphQlRequest::new("query { ok }")
            .with_variables(&[1, 2])
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let request = GraphQlRequest::new("query { ok }")
            .with_variables(&())
            .unwrap();
        assert!(request.variables().is_empty());
    }
}
