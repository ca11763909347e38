use std::fmt;
use std::str::FromStr;

use crate::error::InputError;

/// Workshop session a participant signs up for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mode {
    Morning,
    Afternoon,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Morning, Mode::Afternoon];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Morning => "morning",
            Mode::Afternoon => "afternoon",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = InputError;

    /// Accepts the mode name with surrounding whitespace, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == lower)
            .ok_or_else(|| InputError::InvalidMode { raw: s.trim().to_string() })
    }
}
