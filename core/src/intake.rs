use signup_common::config::Config;
use signup_common::models::{Email, Mode, NameInput, Registration, parse_age, parse_name};
use tracing::debug;

use crate::error::SessionError;
use crate::ports::{Field, UserInterface};
use crate::pricing;
use crate::roster::Roster;

/// Result of reading one record.
#[derive(Debug)]
enum Step {
    Registered(Registration),
    /// The record was thrown away; ask for the same slot again.
    Discarded,
    /// `end` was typed or the input ran out.
    Finished,
}

/// Reads registrations until the roster is full or the user stops.
pub fn collect<U>(ui: &mut U, config: &Config) -> Result<Roster, SessionError>
where
    U: UserInterface + ?Sized,
{
    let mut roster = Roster::new(config.capacity);

    loop {
        if roster.is_full() {
            ui.capacity_reached(roster.capacity());
            break;
        }

        ui.new_record(roster.len() + 1);

        match read_record(ui, config.base_price)? {
            Step::Registered(registration) => {
                debug!(
                    name = registration.name(),
                    price = registration.price(),
                    "registration accepted"
                );
                ui.registered(&registration);
                roster.push(registration)?;
            }
            Step::Discarded => continue,
            Step::Finished => break,
        }
    }

    debug!(count = roster.len(), "intake finished");
    Ok(roster)
}

fn read_record<U>(ui: &mut U, base_price: f64) -> Result<Step, SessionError>
where
    U: UserInterface + ?Sized,
{
    let name = loop {
        let Some(raw) = ui.read_line(Field::Name)? else {
            return Ok(Step::Finished);
        };
        match parse_name(&raw) {
            Ok(NameInput::Name(name)) => break name,
            Ok(NameInput::End) => return Ok(Step::Finished),
            Err(err) => ui.rejected(&err),
        }
    };

    let age = loop {
        let Some(raw) = ui.read_line(Field::Age)? else {
            return Ok(Step::Finished);
        };
        match parse_age(&raw) {
            Ok(age) => break age,
            Err(err) => ui.rejected(&err),
        }
    };

    let Some(raw_email) = ui.read_line(Field::Email)? else {
        return Ok(Step::Finished);
    };
    let email = Email::parse_optional(&raw_email);

    let Some(raw_mode) = ui.read_line(Field::Mode)? else {
        return Ok(Step::Finished);
    };
    let mode = match raw_mode.parse::<Mode>() {
        Ok(mode) => mode,
        Err(err) => {
            ui.rejected(&err);
            return Ok(Step::Discarded);
        }
    };

    let price = pricing::price(base_price, age);
    Ok(Step::Registered(Registration::new(name, age, email, mode, price)))
}
