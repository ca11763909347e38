pub mod email;
pub mod mode;
pub mod registration;

pub use email::{Email, NO_DOMAIN};
pub use mode::Mode;
pub use registration::{NameInput, Registration, parse_age, parse_name};
