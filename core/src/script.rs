//! Scripted [`UserInterface`] for unit tests.

use std::collections::VecDeque;
use std::io;

use signup_common::config::Config;
use signup_common::error::InputError;
use signup_common::models::Registration;

use crate::ports::{Field, Listing, ListingKind, UserInterface};
use crate::stats::Report;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Event {
    Welcome,
    NewRecord(usize),
    Rejected(InputError),
    Registered(String),
    CapacityReached(usize),
    EmptyReport,
    Summary { count: usize },
    Menu,
    Listing { kind: ListingKind, names: Vec<String> },
    DomainCounts(Vec<(String, usize)>),
    Farewell,
}

pub(crate) struct ScriptedUi {
    input: VecDeque<String>,
    pub prompts: Vec<Field>,
    pub events: Vec<Event>,
}

impl ScriptedUi {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.input.len()
    }

    pub fn rejections(&self) -> Vec<InputError> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Rejected(err) => Some(err.clone()),
                _ => None,
            })
            .collect()
    }
}

impl UserInterface for ScriptedUi {
    fn read_line(&mut self, field: Field) -> io::Result<Option<String>> {
        self.prompts.push(field);
        Ok(self.input.pop_front())
    }

    fn welcome(&mut self, _config: &Config) {
        self.events.push(Event::Welcome);
    }

    fn new_record(&mut self, number: usize) {
        self.events.push(Event::NewRecord(number));
    }

    fn rejected(&mut self, error: &InputError) {
        self.events.push(Event::Rejected(error.clone()));
    }

    fn registered(&mut self, registration: &Registration) {
        self.events.push(Event::Registered(registration.name().to_string()));
    }

    fn capacity_reached(&mut self, capacity: usize) {
        self.events.push(Event::CapacityReached(capacity));
    }

    fn statistics(&mut self, report: &Report<'_>) {
        self.events.push(match report {
            Report::Empty => Event::EmptyReport,
            Report::Summary(stats) => Event::Summary { count: stats.count },
        });
    }

    fn menu(&mut self) {
        self.events.push(Event::Menu);
    }

    fn listing(&mut self, listing: &Listing<'_>) {
        self.events.push(Event::Listing {
            kind: listing.kind.clone(),
            names: listing.entries.iter().map(|r| r.name().to_string()).collect(),
        });
    }

    fn domain_counts(&mut self, counts: &[(&str, usize)]) {
        self.events.push(Event::DomainCounts(
            counts.iter().map(|(d, n)| (d.to_string(), *n)).collect(),
        ));
    }

    fn farewell(&mut self) {
        self.events.push(Event::Farewell);
    }
}
