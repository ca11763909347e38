use signup_common::config::Config;
use tracing::info_span;

use crate::error::SessionError;
use crate::ports::UserInterface;
use crate::roster::Roster;
use crate::{intake, menu, stats};

/// One run of the tool: intake, statistics, then the query menu.
pub struct Session<'a, U: UserInterface + ?Sized> {
    ui: &'a mut U,
    config: &'a Config,
}

impl<'a, U: UserInterface + ?Sized> Session<'a, U> {
    pub fn new(ui: &'a mut U, config: &'a Config) -> Self {
        Self { ui, config }
    }

    /// Runs to completion and hands back the final roster.
    pub fn run(self) -> Result<Roster, SessionError> {
        let Session { ui, config } = self;

        ui.welcome(config);

        let roster = {
            let _span = info_span!("intake", capacity = config.capacity).entered();
            intake::collect(&mut *ui, config)?
        };

        let report = stats::compute(roster.entries());
        ui.statistics(&report);

        {
            let _span = info_span!("menu").entered();
            menu::serve(&mut *ui, &roster, config)?;
        }

        Ok(roster)
    }
}
