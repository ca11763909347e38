use colored::*;

use crate::terminal::print;

const BANNER: &str = r#"
          _____ _____ _____ _   _ _    _ _____
         / ____|_   _/ ____| \ | | |  | |  __ \
        | (___   | || |  __|  \| | |  | | |__) |
         \___ \  | || | |_ | . ` | |  | |  ___/
         ____) |_| || |__| | |\  | |__| | |
        |_____/|_____\_____|_| \_|\____/|_|
"#;

pub fn print() {
    print::print(&format!("{}", BANNER.bright_green()));
}
