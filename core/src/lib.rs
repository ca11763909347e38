//! # Registration session logic
//!
//! The session runs in three phases, each in its own module:
//!
//! 1. **[`intake`]**: reads and validates registrations until the [`roster`] is full
//!    or the participant types `end`.
//! 2. **[`stats`]**: summarises the finished roster once.
//! 3. **[`menu`]**: serves queries ([`query`]) until the user exits.
//!
//! All console interaction goes through the [`ports::UserInterface`] trait, so the
//! same [`session::Session`] drives both the terminal binary and scripted tests.

pub mod error;
pub mod intake;
pub mod menu;
pub mod ports;
pub mod pricing;
pub mod query;
pub mod roster;
pub mod session;
pub mod stats;

pub use error::SessionError;
pub use session::Session;

#[cfg(test)]
mod script;
