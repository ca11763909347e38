use signup_common::models::Registration;

/// Aggregates over a non-empty roster.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics<'a> {
    pub count: usize,
    pub average_price: f64,
    pub max_price: f64,
    pub min_price: f64,
    pub minors: usize,
    /// Highest price first.
    pub by_price_desc: Vec<&'a Registration>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Report<'a> {
    /// Nothing was registered, so there is nothing to aggregate.
    Empty,
    Summary(Statistics<'a>),
}

pub fn compute(registrations: &[Registration]) -> Report<'_> {
    if registrations.is_empty() {
        return Report::Empty;
    }

    let prices = registrations.iter().map(Registration::price);
    let total: f64 = prices.clone().sum();
    let max_price = prices.clone().fold(f64::NEG_INFINITY, f64::max);
    let min_price = prices.fold(f64::INFINITY, f64::min);

    let mut by_price_desc: Vec<&Registration> = registrations.iter().collect();
    by_price_desc.sort_by(|a, b| b.price().total_cmp(&a.price()));

    Report::Summary(Statistics {
        count: registrations.len(),
        average_price: total / registrations.len() as f64,
        max_price,
        min_price,
        minors: registrations.iter().filter(|r| r.is_minor()).count(),
        by_price_desc,
    })
}
