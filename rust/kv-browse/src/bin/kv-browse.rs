use anyhow::{Context, Result};
use clap::Parser;
use kv_browse::{
    BrowseApp, BrowseCli, BrowseState, KvBrowseError, LogConfig, LogTarget, RedbStore,
    init_logging, require_db_path,
};
use ratatui::{
    DefaultTerminal,
    crossterm::event::{self, Event, KeyEventKind},
};

pub fn main() -> Result<()> {
    let cli = BrowseCli::parse();

    init_logging(LogConfig {
        level: &cli.log.log_level,
        target: cli
            .log_file
            .clone()
            .map(LogTarget::File)
            .unwrap_or(LogTarget::Discard),
    })?;

    let path = require_db_path(cli.db.as_deref())?;
    let store = RedbStore::open(path, &cli.table).inspect_err(|error| {
        tracing::error!(%error, "Failed to start");
    })?;

    let browse = Browse {
        state: BrowseState::new(store, cli.mode),
    };

    let terminal = ratatui::init();
    let result = browse.run(terminal).context("Browser stopped unexpectedly");
    ratatui::restore();

    result
}

pub struct Browse {
    state: BrowseState,
}

impl Browse {
    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        terminal.clear().map_err(terminal_error)?;

        loop {
            if self.state.should_exit() {
                break;
            }

            terminal
                .draw(|frame| {
                    frame.render_stateful_widget(&BrowseApp {}, frame.area(), &mut self.state)
                })
                .map_err(terminal_error)?;
            self.handle_events()?;
        }

        Ok(())
    }

    fn handle_events(&mut self) -> Result<()> {
        match event::read().map_err(terminal_error)? {
            // crossterm also emits key release and repeat events on Windows
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.state.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }
}

fn terminal_error(error: std::io::Error) -> KvBrowseError {
    KvBrowseError::Terminal(error.to_string())
}
