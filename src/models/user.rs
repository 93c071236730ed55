use serde::{Deserialize, Serialize};

/// Account payload generated entirely client-side.
///
/// No uniqueness guarantee against data already on the server; collisions
/// surface as create-request failures.
#[derive(Debug, Clone, Serialize)]
pub struct SyntheticUser {
    pub name: String,
    pub username: String,
    pub password: String,
    pub email: String,
}

/// Server-assigned identity returned by a successful create request
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
}
