/// Age-based discount applied on top of the base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discount {
    /// Under 18: half price.
    Minor,
    /// 65 and over: 30% off.
    Senior,
    None,
}

impl Discount {
    pub fn for_age(age: u32) -> Self {
        match age {
            0..18 => Discount::Minor,
            65.. => Discount::Senior,
            _ => Discount::None,
        }
    }

    pub fn rate(&self) -> f64 {
        match self {
            Discount::Minor => 0.5,
            Discount::Senior => 0.3,
            Discount::None => 0.0,
        }
    }

    /// Short text for the terminal; `None` when nothing is taken off.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Discount::Minor => Some("minor discount"),
            Discount::Senior => Some("senior discount"),
            Discount::None => None,
        }
    }
}

/// Price for a participant of the given age, never below zero.
pub fn price(base: f64, age: u32) -> f64 {
    let discount = Discount::for_age(age).rate();
    (base * (1.0 - discount)).max(0.0)
}
