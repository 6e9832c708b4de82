//! PayHero client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayHeroError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Client error: {0}")]
    Client(String),
}
