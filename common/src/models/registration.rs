use crate::error::InputError;
use crate::models::email::{Email, domain_of};
use crate::models::mode::Mode;

/// One participant's sign-up.
///
/// Built once during intake and never modified. The domain is resolved at
/// construction so it is always present, and the price is clamped to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    name: String,
    age: u32,
    email: Option<Email>,
    domain: String,
    mode: Mode,
    price: f64,
}

impl Registration {
    pub fn new(name: String, age: u32, email: Option<Email>, mode: Mode, price: f64) -> Self {
        let domain = domain_of(email.as_ref()).to_string();
        Self {
            name,
            age,
            email,
            domain,
            mode,
            // `f64::max` also maps NaN to 0.0
            price: price.max(0.0),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn is_minor(&self) -> bool {
        self.age < 18
    }
}

/// Outcome of reading the name field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameInput {
    Name(String),
    /// The participant typed the `end` sentinel.
    End,
}

pub const END_SENTINEL: &str = "end";

pub fn parse_name(raw: &str) -> Result<NameInput, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::EmptyName);
    }
    if trimmed.eq_ignore_ascii_case(END_SENTINEL) {
        return Ok(NameInput::End);
    }
    Ok(NameInput::Name(trimmed.to_string()))
}

/// Parses a strictly positive age.
pub fn parse_age(raw: &str) -> Result<u32, InputError> {
    let trimmed = raw.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| InputError::InvalidNumber { raw: trimmed.to_string() })?;

    if value <= 0 {
        return Err(InputError::NonPositiveAge(value));
    }

    u32::try_from(value).map_err(|_| InputError::InvalidNumber { raw: trimmed.to_string() })
}
