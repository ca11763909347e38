//! Terminal adapter for the session's [`UserInterface`] port.
//!
//! Prompts are written straight to stdout so the cursor stays on the same
//! line; everything else goes through [`print`] or the tracing macros.

use std::io::{self, BufRead, Write};

use colored::*;
use signup_common::config::Config;
use signup_common::error::InputError;
use signup_common::models::{Mode, Registration};
use signup_core::menu::Command;
use signup_core::ports::{Field, Listing, ListingKind, UserInterface};
use signup_core::stats::Report;
use tracing::Level;

use crate::mprint;
use crate::terminal::{colors, format, print};

pub struct TerminalUi<R> {
    input: R,
    quiet: u8,
}

impl<R: BufRead> TerminalUi<R> {
    pub fn new(input: R, quiet: u8) -> Self {
        Self { input, quiet }
    }
}

fn prompt_text(field: Field) -> String {
    match field {
        Field::Name => "Name:".to_string(),
        Field::Age => "Age (whole number):".to_string(),
        Field::Email => "Email (optional, leave blank if none):".to_string(),
        Field::Mode => {
            let modes: Vec<&str> = Mode::ALL.iter().map(Mode::as_str).collect();
            format!("Mode ({}):", modes.join("/"))
        }
        Field::MenuChoice => "Choose an option:".to_string(),
        Field::SearchQuery => "Name to search:".to_string(),
    }
}

/// Drops the line terminator left by `read_line`.
fn strip_newline(mut line: String) -> String {
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    line
}

impl<R: BufRead> UserInterface for TerminalUi<R> {
    fn read_line(&mut self, field: Field) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{} ", prompt_text(field).color(colors::PROMPT))?;
        stdout.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            // keep following output off the prompt line
            writeln!(stdout)?;
            return Ok(None);
        }
        // undecodable bytes become U+FFFD and are validated like typed text
        let line = String::from_utf8_lossy(&buf).into_owned();
        Ok(Some(strip_newline(line)))
    }

    fn welcome(&mut self, config: &Config) {
        print::header("workshop registration", self.quiet);

        let modes: Vec<&str> = Mode::ALL.iter().map(Mode::as_str).collect();
        print::set_key_width(["Workshop", "Capacity", "Base price", "Modes"]);
        print::aligned_line("Workshop", config.title.as_str());
        print::aligned_line("Capacity", format::plural(config.capacity, "seat", "seats"));
        print::aligned_line(
            "Base price",
            format::money(config.base_price).color(colors::PRICE),
        );
        print::aligned_line("Modes", modes.join(", "));
    }

    fn new_record(&mut self, number: usize) {
        mprint!();
        print::print_status(format!(
            "New registration #{} (type '{}' as the name to finish)",
            number.to_string().color(colors::ACCENT),
            "end".bold()
        ));
    }

    fn rejected(&mut self, err: &InputError) {
        match err {
            InputError::InvalidNumber { .. } => print::tagged(Level::ERROR, &format!("Error: {err}")),
            _ => print::tagged(Level::WARN, &format!("Rejected: {err}")),
        }
    }

    fn registered(&mut self, registration: &Registration) {
        print::tagged(
            Level::INFO,
            &format!("Registration added: {}", format::added_line(registration)),
        );
    }

    fn capacity_reached(&mut self, capacity: usize) {
        print::tagged(Level::WARN, &format!("Capacity full ({capacity})."));
    }

    fn statistics(&mut self, report: &Report<'_>) {
        mprint!();
        print::header("statistics", self.quiet);

        let stats = match report {
            Report::Empty => {
                print::set_key_width(["Registrations"]);
                print::aligned_line("Registrations", "0");
                print::no_results("No registrations to compute statistics from.");
                return;
            }
            Report::Summary(stats) => stats,
        };

        print::set_key_width([
            "Registrations",
            "Average price",
            "Highest price",
            "Lowest price",
            "Minors",
        ]);
        print::aligned_line("Registrations", stats.count.to_string());
        print::aligned_line("Average price", format::money(stats.average_price));
        print::aligned_line("Highest price", format::money(stats.max_price));
        print::aligned_line("Lowest price", format::money(stats.min_price));
        print::aligned_line("Minors", stats.minors.to_string());

        mprint!();
        print::print_status("Listing by price (highest first):");
        let lines: Vec<String> = stats.by_price_desc.iter().map(|r| format::price_line(r)).collect();
        print::as_tree_one_level(&lines);
    }

    fn menu(&mut self) {
        mprint!();
        print::header("menu", self.quiet);
        for command in Command::ALL {
            print::tree_head(command.key(), command.label());
        }
    }

    fn listing(&mut self, listing: &Listing<'_>) {
        let lines: Vec<String> = listing
            .entries
            .iter()
            .map(|r| format::registration_line(r))
            .collect();

        match &listing.kind {
            ListingKind::Search { query } => {
                if lines.is_empty() {
                    print::no_results(&format!("No matches for '{query}'."));
                    return;
                }
                print::print_status(format!("Matches for '{}':", query.color(colors::ACCENT)));
                print::as_tree_one_level(&lines);
            }
            ListingKind::ByName => {
                print::print_status("Sorted by name:");
                print::as_tree_one_level(&lines);
            }
            ListingKind::ByPrice => {
                print::print_status("Sorted by price:");
                print::as_tree_one_level(&lines);
            }
            ListingKind::Final { base_price } => {
                mprint!();
                print::header("final listing", self.quiet);
                if lines.is_empty() {
                    print::no_results("No registrations.");
                } else {
                    print::as_tree_one_level(&lines);
                }
                print::fat_separator();
                print::centerln(&format!(
                    "Summary: {} – Base price: {}",
                    format::plural(lines.len(), "registration", "registrations").bold(),
                    format::money(*base_price).color(colors::PRICE)
                ));
            }
        }
    }

    fn domain_counts(&mut self, counts: &[(&str, usize)]) {
        print::print_status("Registrations by domain:");
        if counts.is_empty() {
            print::no_results("No registrations.");
            return;
        }
        print::set_key_width(counts.iter().map(|(domain, _)| *domain));
        for (domain, count) in counts {
            print::aligned_line(domain, count.to_string().color(colors::ACCENT));
        }
    }

    fn farewell(&mut self) {
        mprint!();
        print::tagged(Level::INFO, "Exiting... thanks for using the registration desk!");
        print::end_of_program();
    }
}
