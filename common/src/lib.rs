//! # Shared models for `signup`
//!
//! Everything the other crates agree on lives here:
//! * **[`models`]**: the registration record and the values it is built from.
//! * **[`error`]**: validation failures produced while reading user input.
//! * **[`config`]**: session settings (capacity, base price, output verbosity).

pub mod config;
pub mod error;
pub mod models;
