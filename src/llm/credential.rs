use crate::{Error, Result};
use reqwest::header::HeaderValue;
use secrecy::{ExposeSecret, SecretString};
use std::fmt;

pub const MISSING_KEY_MESSAGE: &str = "Please enter your API Key to proceed.";
pub const INVALID_KEY_MESSAGE: &str = "The API key contains characters that are not allowed.";

/// Bearer token supplied by the end user for a single submission.
#[derive(Clone)]
pub struct Credential(SecretString);

impl Credential {
    /// Rejects blank keys and keys that cannot travel in an `Authorization`
    /// header (control characters, non-ASCII).
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into().trim().to_string();
        if key.is_empty() {
            return Err(Error::upload(MISSING_KEY_MESSAGE));
        }
        if HeaderValue::from_str(&format!("Bearer {}", key)).is_err() {
            return Err(Error::upload(INVALID_KEY_MESSAGE));
        }
        Ok(Self(SecretString::new(key)))
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0.expose_secret())
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}
