//! operation contract
//!
//! ties a query template to the variables it binds and the payload it decodes.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// graphql operation contract for catalog entries
pub trait Operation {
    /// graphql query string
    const QUERY: &'static str;
    /// variables bound into the query
    type Variables: Serialize;
    /// response payload type
    type Response: DeserializeOwned;
}
