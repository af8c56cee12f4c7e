use std::fmt;

use anyhow::{bail, Error};
use serde::Deserialize;

/// Static API token sent as `Authorization: Token <token>`.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct AccessToken {
    token: String,
}

impl AccessToken {
    pub fn new(token: String) -> Result<Self, Error> {
        let token = token.trim().to_owned();
        if token.is_empty() {
            bail!("the access token is empty");
        }
        Ok(Self { token })
    }

    pub fn as_str(&self) -> &str {
        &self.token
    }

    pub fn header_value(&self) -> String {
        format!("Token {}", self.token)
    }
}

impl TryFrom<String> for AccessToken {
    type Error = Error;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        Self::new(token)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"<hidden>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_is_rejected() {
        assert!(AccessToken::new("  ".to_owned()).is_err());
    }

    #[test]
    fn debug_hides_token() {
        let token = AccessToken::new("s3cret".to_owned()).unwrap();
        let debug = format!("{token:?}");
        assert!(!debug.contains("s3cret"));
        assert_eq!(token.header_value(), "Token s3cret");
    }
}
