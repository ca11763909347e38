//! # Console port
//!
//! The session never touches stdin or stdout directly. It asks a
//! [`UserInterface`] for lines and tells it what happened; the adapter decides
//! how that looks. The terminal adapter lives in `signup-cli`.

use std::io;

use signup_common::config::Config;
use signup_common::error::InputError;
use signup_common::models::Registration;

use crate::stats::Report;

/// What the session is asking the user for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Age,
    Email,
    Mode,
    MenuChoice,
    SearchQuery,
}

/// Which query produced a listing.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingKind {
    Search { query: String },
    ByName,
    ByPrice,
    /// Intake order, followed by a count and base price summary.
    Final { base_price: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Listing<'a> {
    pub kind: ListingKind,
    pub entries: Vec<&'a Registration>,
}

pub trait UserInterface {
    /// Reads one line for `field`. `Ok(None)` means the input is exhausted.
    fn read_line(&mut self, field: Field) -> io::Result<Option<String>>;

    fn welcome(&mut self, config: &Config);

    /// A new record starts; `number` is 1-based.
    fn new_record(&mut self, number: usize);

    fn rejected(&mut self, error: &InputError);

    fn registered(&mut self, registration: &Registration);

    fn capacity_reached(&mut self, capacity: usize);

    fn statistics(&mut self, report: &Report<'_>);

    fn menu(&mut self);

    fn listing(&mut self, listing: &Listing<'_>);

    fn domain_counts(&mut self, counts: &[(&str, usize)]);

    fn farewell(&mut self);
}
