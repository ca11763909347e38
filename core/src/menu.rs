use std::str::FromStr;

use signup_common::config::Config;
use signup_common::error::InputError;
use tracing::debug;

use crate::error::SessionError;
use crate::ports::{Field, Listing, ListingKind, UserInterface};
use crate::query;
use crate::roster::Roster;

/// A menu entry, keyed by the digit the user types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SearchByName,
    CountByDomain,
    SortByName,
    SortByPrice,
    ShowFinal,
    Exit,
}

impl Command {
    /// In the order the menu shows them.
    pub const ALL: [Command; 6] = [
        Command::SearchByName,
        Command::CountByDomain,
        Command::SortByName,
        Command::SortByPrice,
        Command::ShowFinal,
        Command::Exit,
    ];

    pub fn key(&self) -> char {
        match self {
            Command::SearchByName => '1',
            Command::CountByDomain => '2',
            Command::SortByName => '3',
            Command::SortByPrice => '4',
            Command::ShowFinal => '5',
            Command::Exit => '0',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Command::SearchByName => "Search by name",
            Command::CountByDomain => "Count by domain",
            Command::SortByName => "Sort by name",
            Command::SortByPrice => "Sort by price",
            Command::ShowFinal => "Show final listing",
            Command::Exit => "Exit",
        }
    }
}

impl FromStr for Command {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let (Some(key), None) = (chars.next(), chars.next()) else {
            return Err(InputError::InvalidOption { raw: trimmed.to_string() });
        };

        Command::ALL
            .into_iter()
            .find(|cmd| cmd.key() == key)
            .ok_or_else(|| InputError::InvalidOption { raw: trimmed.to_string() })
    }
}

/// Serves menu commands until `Exit` or end of input.
pub fn serve<U>(ui: &mut U, roster: &Roster, config: &Config) -> Result<(), SessionError>
where
    U: UserInterface + ?Sized,
{
    loop {
        ui.menu();

        let Some(raw) = ui.read_line(Field::MenuChoice)? else {
            break;
        };

        let command = match raw.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                ui.rejected(&err);
                continue;
            }
        };

        debug!(?command, "menu command");

        if command == Command::Exit || !execute(ui, command, roster, config)? {
            break;
        }
    }

    ui.farewell();
    Ok(())
}

/// Runs one non-exit command. Returns `false` when the input ran out mid-command.
fn execute<U>(
    ui: &mut U,
    command: Command,
    roster: &Roster,
    config: &Config,
) -> Result<bool, SessionError>
where
    U: UserInterface + ?Sized,
{
    let entries = roster.entries();

    let listing = match command {
        Command::SearchByName => {
            let Some(query) = ui.read_line(Field::SearchQuery)? else {
                return Ok(false);
            };
            Listing {
                entries: query::search_by_name(entries, &query),
                kind: ListingKind::Search { query: query.trim().to_string() },
            }
        }
        Command::CountByDomain => {
            ui.domain_counts(&query::count_by_domain(entries));
            return Ok(true);
        }
        Command::SortByName => Listing {
            kind: ListingKind::ByName,
            entries: query::sorted_by_name(entries),
        },
        Command::SortByPrice => Listing {
            kind: ListingKind::ByPrice,
            entries: query::sorted_by_price(entries),
        },
        Command::ShowFinal => Listing {
            kind: ListingKind::Final { base_price: config.base_price },
            entries: entries.iter().collect(),
        },
        Command::Exit => return Ok(false),
    };

    ui.listing(&listing);
    Ok(true)
}
