use thiserror::Error;

/// A rejected piece of user input.
///
/// None of these are fatal: the caller reports them and asks again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("name cannot be empty")]
    EmptyName,

    #[error("could not convert '{raw}' to an integer")]
    InvalidNumber { raw: String },

    #[error("age must be greater than 0 (got {0})")]
    NonPositiveAge(i64),

    #[error("invalid mode '{raw}'")]
    InvalidMode { raw: String },

    #[error("invalid option '{raw}'")]
    InvalidOption { raw: String },
}
