use secrecy::{ExposeSecret, SecretString};

/// Value sent as `X-Verify-Token`.
///
/// Construction trims the raw value and yields `None` for empty input, so a
/// blank `VERIFY_TOKEN` never produces the header.
#[derive(Clone, Debug)]
pub struct VerifyToken {
    token: SecretString,
}

impl VerifyToken {
    pub fn from_raw(raw: Option<&str>) -> Option<Self> {
        let trimmed = raw?.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            token: SecretString::from(trimmed.to_string()),
        })
    }

    pub(crate) fn expose(&self) -> &str {
        self.token.expose_secret()
    }
}
