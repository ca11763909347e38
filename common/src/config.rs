pub const DEFAULT_TITLE: &str = "Rust Basics";
pub const DEFAULT_CAPACITY: usize = 5;
pub const DEFAULT_BASE_PRICE: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Workshop name shown in the header.
    pub title: String,
    /// Maximum number of registrations accepted during intake.
    pub capacity: usize,
    /// Price before any age discount.
    pub base_price: f64,
    /// Skips the start-up banner.
    pub no_banner: bool,
    /// Above 0, banner and section headers are not printed.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            capacity: DEFAULT_CAPACITY,
            base_price: DEFAULT_BASE_PRICE,
            no_banner: false,
            quiet: 0,
        }
    }
}
