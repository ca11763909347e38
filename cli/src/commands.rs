use clap::{ArgAction, Parser};
use signup_common::config::{Config, DEFAULT_BASE_PRICE, DEFAULT_CAPACITY, DEFAULT_TITLE};

#[derive(Parser, Debug)]
#[command(name = "signup")]
#[command(version, about = "Workshop registration desk for the terminal.")]
pub struct CommandLine {
    /// Workshop name shown in the header
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Maximum number of registrations
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    pub capacity: usize,

    /// Price before age discounts
    #[arg(long, default_value_t = DEFAULT_BASE_PRICE, allow_negative_numbers = true)]
    pub base_price: f64,

    /// Do not print the banner
    #[arg(long)]
    pub no_banner: bool,

    /// Less output (-q hides banner and headers)
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn into_config(self) -> Config {
        Config {
            title: self.title,
            capacity: self.capacity,
            base_price: self.base_price,
            no_banner: self.no_banner,
            quiet: self.quiet,
        }
    }
}
