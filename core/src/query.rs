use std::collections::BTreeMap;

use signup_common::models::Registration;

/// Registrations whose name contains `query`, ignoring case.
///
/// An empty query matches everyone.
pub fn search_by_name<'a>(registrations: &'a [Registration], query: &str) -> Vec<&'a Registration> {
    let needle = query.trim().to_lowercase();
    registrations
        .iter()
        .filter(|r| r.name().to_lowercase().contains(&needle))
        .collect()
}

/// `(domain, count)` pairs ordered by domain.
pub fn count_by_domain(registrations: &[Registration]) -> Vec<(&str, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for registration in registrations {
        *counts.entry(registration.domain()).or_insert(0) += 1;
    }
    counts.into_iter().collect()
}

pub fn sorted_by_name(registrations: &[Registration]) -> Vec<&Registration> {
    let mut sorted: Vec<&Registration> = registrations.iter().collect();
    sorted.sort_by(|a, b| a.name().cmp(b.name()));
    sorted
}

/// Cheapest first. Ties keep intake order.
pub fn sorted_by_price(registrations: &[Registration]) -> Vec<&Registration> {
    let mut sorted: Vec<&Registration> = registrations.iter().collect();
    sorted.sort_by(|a, b| a.price().total_cmp(&b.price()));
    sorted
}
