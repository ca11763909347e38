use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const PRICE: Color = Color::Cyan;
pub const DOMAIN: Color = Color::Magenta;
pub const PROMPT: Color = Color::BrightBlue;
