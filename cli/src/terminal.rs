pub mod banner;
pub mod colors;
pub mod console;
pub mod format;
pub mod logging;
pub mod print;
