/// Domain reported for participants who gave no email address.
pub const NO_DOMAIN: &str = "no-domain";

/// An email address as typed by the participant.
///
/// Only blank input is rejected; the address is not otherwise validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Blank (or whitespace-only) input means "no email".
    pub fn parse_optional(raw: &str) -> Option<Email> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Email(trimmed.to_string()))
        }
    }

    /// Text after the first `@`. An address without `@` is returned whole.
    pub fn domain(&self) -> &str {
        match self.0.split_once('@') {
            Some((_, domain)) => domain,
            None => &self.0,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Domain of an optional email, falling back to [`NO_DOMAIN`].
pub fn domain_of(email: Option<&Email>) -> &str {
    email.map_or(NO_DOMAIN, Email::domain)
}
