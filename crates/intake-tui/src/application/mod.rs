//! Application layer - Core Elm architecture implementation
//!
//! This module implements the Model-Update-View pattern from Elm architecture
//! on top of a synchronous crossterm event loop.

pub mod input;
pub mod state;
pub mod update;
pub mod view;

pub use input::map_key;
pub use state::AppModel;
pub use update::update;
pub use view::render_app;

use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::event::{self, Event, KeyEventKind};
use intake_common::Config;
use tracing::{debug, info, instrument};

use crate::{
    error::{Result, UiError},
    message::AppMsg,
    utils::{supports_color, TerminalManager},
};

/// Main application following Elm architecture
pub struct Application {
    /// Terminal interface
    terminal: TerminalManager,
    /// Application model (state)
    model: AppModel,
    /// How often the clock is refreshed
    tick_interval: Duration,
    /// Whether the UI needs to be rerendered
    needs_render: bool,
}

impl Application {
    /// Create new application instance.
    ///
    /// The configuration is validated before the terminal is touched.
    #[instrument(skip(config))]
    pub fn new(config: &Config) -> Result<Self> {
        info!("Initializing intake capacity TUI");
        config.validate()?;

        let model = AppModel::new(config.defaults, Local::now().naive_local())
            .with_colors(config.ui.use_colors && supports_color());
        let terminal = TerminalManager::new()?;

        Ok(Self {
            terminal,
            model,
            tick_interval: Duration::from_millis(config.ui.tick_interval_ms),
            needs_render: true,
        })
    }

    /// Run the main application loop until the user quits
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        info!("Starting application main loop");
        let mut last_tick = Instant::now();

        loop {
            if self.needs_render {
                self.render()?;
                self.needs_render = false;
            }

            let timeout = self.tick_interval.saturating_sub(last_tick.elapsed());
            if event::poll(timeout).map_err(|source| UiError::Event { source })? {
                match event::read().map_err(|source| UiError::Event { source })? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if let Some(msg) = map_key(&self.model, key) {
                            if self.handle_message(msg) {
                                break;
                            }
                        }
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "Terminal resized");
                        self.needs_render = true;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= self.tick_interval {
                self.handle_message(AppMsg::Tick(Local::now().naive_local()));
                last_tick = Instant::now();
            }
        }

        info!(
            overrides = self.model.overrides.log().len(),
            "Main loop finished, restoring terminal"
        );
        self.terminal.restore()
    }

    /// Apply a message and its follow-up effects. Returns true on quit.
    fn handle_message(&mut self, msg: AppMsg) -> bool {
        if matches!(msg, AppMsg::Quit) {
            update(&mut self.model, msg);
            return true;
        }

        let effects = update(&mut self.model, msg);
        for effect in effects {
            // Effects never produce further effects
            update(&mut self.model, effect);
        }

        self.needs_render = true;
        false
    }

    /// Render the application
    fn render(&mut self) -> Result<()> {
        let model = &self.model;
        self.terminal
            .terminal_mut()
            .draw(|frame| render_app(model, frame))
            .map_err(|source| UiError::Render { source })?;
        Ok(())
    }

    /// Current model, for inspection after the loop ends
    pub fn model(&self) -> &AppModel {
        &self.model
    }
}
