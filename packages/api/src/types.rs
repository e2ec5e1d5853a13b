/// Opaque account activation token, exactly as it appeared in the URL.
///
/// No structure is assumed: whatever the route carried is passed through,
/// including the empty string when the route had no token at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ActivationToken(String);

impl ActivationToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Missing route parameter becomes the empty token.
    pub fn from_route(token: Option<String>) -> Self {
        Self(token.unwrap_or_default())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for ActivationToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ActivationToken {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationOutcome {
    Activated,
    Failed,
}

impl ActivationOutcome {
    pub fn is_activated(self) -> bool {
        matches!(self, ActivationOutcome::Activated)
    }
}
