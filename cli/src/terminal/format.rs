use colored::*;
use signup_common::models::Registration;
use signup_core::pricing::Discount;

use crate::terminal::colors;

pub fn money(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// `name | Age: n | mode | $price | domain: d`
pub fn registration_line(registration: &Registration) -> String {
    let sep: ColoredString = "|".color(colors::SEPARATOR);
    format!(
        "{} {sep} Age: {} {sep} {} {sep} {} {sep} domain: {}",
        registration.name().color(colors::PRIMARY),
        registration.age(),
        registration.mode(),
        money(registration.price()).color(colors::PRICE),
        registration.domain().color(colors::DOMAIN),
    )
}

/// `name <email> – $price (discount)`, shown when a registration is accepted.
pub fn added_line(registration: &Registration) -> String {
    let email = match registration.email() {
        Some(email) => format!(" <{}>", email.as_str()),
        None => String::new(),
    };
    let discount = match Discount::for_age(registration.age()).label() {
        Some(label) => format!(" ({label})"),
        None => String::new(),
    };
    format!(
        "{}{email} – {}{discount}",
        registration.name(),
        money(registration.price())
    )
}

/// `name : $price`, used in the statistics listing.
pub fn price_line(registration: &Registration) -> String {
    format!(
        "{} {} {}",
        registration.name().color(colors::PRIMARY),
        ":".color(colors::SEPARATOR),
        money(registration.price()).color(colors::PRICE),
    )
}

pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}
