#![cfg(test)]
use signup_common::config::Config;
use signup_core::Session;
use signup_core::roster::Roster;

use crate::support::Transcript;

fn run(input: &str, cfg: &Config) -> (Roster, Transcript) {
    let mut ui = Transcript::new(input);
    let roster = Session::new(&mut ui, cfg)
        .run()
        .expect("scripted session never fails on I/O");
    (roster, ui)
}

const THREE_PARTICIPANTS: &str = "\
Marta
30
marta@uni.edu
morning
Leo
10

afternoon
Rosa
70
rosa@mail.com
Afternoon
end
";

/// Full run: three sign-ups, statistics, every menu option, then exit.
#[test]
fn session_full_walkthrough() {
    let input = format!("{THREE_PARTICIPANTS}1\nros\n1\nxyz\n2\n3\n4\n5\n0\n");
    let (roster, ui) = run(&input, &Config::default());

    assert_eq!(roster.len(), 3);
    assert_eq!(
        ui.starting_with("added"),
        [
            "added Marta (30, 100.00, uni.edu)",
            "added Leo (10, 50.00, no-domain)",
            "added Rosa (70, 70.00, mail.com)",
        ]
    );

    assert!(ui.contains("stats: count=3 avg=73.33 max=100.00 min=50.00 minors=1"));
    assert_eq!(
        ui.starting_with("desc"),
        [
            "desc Marta (30, 100.00, uni.edu)",
            "desc Rosa (70, 70.00, mail.com)",
            "desc Leo (10, 50.00, no-domain)",
        ]
    );

    assert_eq!(ui.starting_with("search 'ros'"), ["search 'ros': Rosa (70, 70.00, mail.com)"]);
    assert!(ui.contains("search 'xyz': none"));

    assert_eq!(
        ui.starting_with("domain"),
        ["domain mail.com: 1", "domain no-domain: 1", "domain uni.edu: 1"]
    );

    assert_eq!(
        ui.starting_with("by name"),
        [
            "by name: Leo (10, 50.00, no-domain)",
            "by name: Marta (30, 100.00, uni.edu)",
            "by name: Rosa (70, 70.00, mail.com)",
        ]
    );
    assert_eq!(
        ui.starting_with("by price"),
        [
            "by price: Leo (10, 50.00, no-domain)",
            "by price: Rosa (70, 70.00, mail.com)",
            "by price: Marta (30, 100.00, uni.edu)",
        ]
    );
    assert_eq!(ui.starting_with("final").len(), 3);
    assert!(ui.contains("summary: 3 registrations, base 100.00"));
    assert_eq!(ui.lines.last().map(String::as_str), Some("bye"));
    assert_eq!(ui.unread(), 0);
}

/// More valid input than seats: intake stops at capacity and the
/// leftover lines are read by the menu instead.
#[test]
fn session_stops_at_capacity() {
    let mut input = String::new();
    for i in 0..6 {
        input.push_str(&format!("p{i}\n25\n\nmorning\n"));
    }
    let (roster, ui) = run(&input, &Config::default());

    assert_eq!(roster.len(), 5);
    assert!(ui.contains("capacity full 5"));
    assert_eq!(ui.starting_with("added").len(), 5);
    // "p5" and the rest land on the menu as invalid options
    assert!(ui.contains("rejected: invalid option 'p5'"));
}

#[test]
fn session_with_custom_capacity_and_price() {
    let cfg = Config {
        capacity: 2,
        base_price: 40.0,
        ..Config::default()
    };
    let (roster, ui) = run("Ana\n16\n\nmorning\nBea\n66\n\nmorning\n0\n", &cfg);

    assert_eq!(roster.len(), 2);
    assert!(ui.contains("added Ana (16, 20.00, no-domain)"));
    assert!(ui.contains("added Bea (66, 28.00, no-domain)"));
    assert!(ui.contains("capacity full 2"));
}

#[test]
fn session_negative_base_price_is_free() {
    let cfg = Config {
        base_price: -50.0,
        ..Config::default()
    };
    let (_, ui) = run("Ana\n30\n\nmorning\nend\n0\n", &cfg);
    assert!(ui.contains("added Ana (30, 0.00, no-domain)"));
}

#[test]
fn session_without_registrations() {
    let (roster, ui) = run("END\n5\n0\n", &Config::default());

    assert!(roster.is_empty());
    assert!(ui.contains("stats: no data"));
    assert!(ui.contains("final: none"));
    assert!(ui.contains("summary: 0 registrations, base 100.00"));
}

#[test]
fn session_rejections_are_reported_and_re_prompted() {
    let input = "\n  \nAna\nten\n-1\n21\n\nnight\nAna\n21\n\nmorning\nend\n7\n0\n";
    let (roster, ui) = run(input, &Config::default());

    assert_eq!(roster.len(), 1);
    assert_eq!(
        ui.starting_with("rejected"),
        [
            "rejected: name cannot be empty",
            "rejected: name cannot be empty",
            "rejected: could not convert 'ten' to an integer",
            "rejected: age must be greater than 0 (got -1)",
            "rejected: invalid mode 'night'",
            "rejected: invalid option '7'",
        ]
    );
    assert_eq!(ui.starting_with("record"), ["record #1", "record #1", "record #2"]);
}

#[test]
fn session_closed_input_ends_cleanly() {
    let (roster, ui) = run("Ana\n30\n", &Config::default());

    assert!(roster.is_empty());
    assert!(ui.contains("stats: no data"));
    assert_eq!(ui.lines.last().map(String::as_str), Some("bye"));
}
