//! Bearer token handling.

/// API token normalized to the canonical `Bearer <token>` header form.
///
/// Normalization happens once at construction: a token that already starts
/// with the literal `Bearer ` prefix (case-sensitive, single space) is
/// stored unchanged, anything else gets the prefix prepended. The stored
/// value is what every outgoing request carries in its `Authorization`
/// header.
#[derive(Clone)]
pub(crate) struct BearerToken(String);

impl BearerToken {
    const PREFIX: &'static str = "Bearer ";

    /// Normalize a raw token, with or without the `Bearer ` prefix.
    pub(crate) fn new(token: &str) -> Self {
        if token.starts_with(Self::PREFIX) {
            Self(token.to_string())
        } else {
            Self(format!("{}{token}", Self::PREFIX))
        }
    }

    /// The effective `Authorization` header value.
    pub(crate) fn header_value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("BearerToken").field(&"[REDACTED]").finish()
    }
}
