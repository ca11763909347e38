mod commands;
mod terminal;

use std::io;

use commands::CommandLine;
use signup_core::Session;
use terminal::{console::TerminalUi, logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging()?;

    let cfg = commands.into_config();
    print::banner(cfg.no_banner, cfg.quiet);

    let mut ui = TerminalUi::new(io::stdin().lock(), cfg.quiet);
    Session::new(&mut ui, &cfg).run()?;

    Ok(())
}
