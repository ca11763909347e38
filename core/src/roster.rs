use signup_common::models::Registration;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("roster is full ({capacity} registrations)")]
pub struct RosterFull {
    pub capacity: usize,
}

/// Registrations in intake order, never more than `capacity`.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    capacity: usize,
    entries: Vec<Registration>,
}

impl Roster {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, registration: Registration) -> Result<(), RosterFull> {
        if self.is_full() {
            return Err(RosterFull { capacity: self.capacity });
        }
        self.entries.push(registration);
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Registration] {
        &self.entries
    }
}
