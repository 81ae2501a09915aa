//! TUI runner - manages TUI lifecycle and rendering

use crate::engine::{dispatch, Surface, UiAction, WorkflowEngine};
use crate::errors::Result;
use crate::schemas::Destination;
use crate::store::ThemeStore;
use crate::tui::events::{handle_key, KeyOutcome};
use crate::tui::state::TuiState;
use crossterm::event::KeyEvent;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::DisableMouseCapture,
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// Options for TUI initialization
#[derive(Debug, Clone, Default)]
pub struct TuiOptions {
    /// Page loaded on start
    pub page: Destination,
    /// Start with the render log visible
    pub show_logs: bool,
}

/// Main TUI runner
pub struct TuiRunner<S: ThemeStore> {
    engine: WorkflowEngine<S>,
    state: TuiState,
    options: TuiOptions,
}

impl<S: ThemeStore> TuiRunner<S> {
    pub fn new(engine: WorkflowEngine<S>, options: TuiOptions) -> Self {
        let state = TuiState::new().with_show_logs(options.show_logs);
        Self {
            engine,
            state,
            options,
        }
    }

    pub fn state(&self) -> &TuiState {
        &self.state
    }

    pub fn engine(&self) -> &WorkflowEngine<S> {
        &self.engine
    }

    /// Load the first page
    pub fn start(&mut self) -> Result<()> {
        let commands = self.engine.start(self.options.page)?;
        dispatch(&mut self.state, &commands);
        Ok(())
    }

    /// Feed one action to the engine and apply what comes back.
    ///
    /// Rejected actions surface as an alert; nothing else changes.
    pub fn send(&mut self, action: UiAction) {
        match self.engine.handle(action) {
            Ok(commands) => dispatch(&mut self.state, &commands),
            Err(e) => {
                if !e.is_validation() {
                    tracing::warn!("Action failed: {}", e);
                }
                self.state.alert(&e.to_string());
            }
        }
    }

    /// Handle a key press. Returns true when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let projects = self.engine.config().projects.clone();
        match handle_key(&mut self.state, key, &projects) {
            KeyOutcome::Quit => return true,
            KeyOutcome::Actions(actions) => {
                for action in actions {
                    self.send(action);
                }
            }
            KeyOutcome::Handled => self.send(UiAction::Activity),
            KeyOutcome::Ignored => {}
        }
        false
    }

    /// Fire any timers due at `now` (time since start)
    pub fn tick(&mut self, now: Duration) {
        let commands = self.engine.advance_to(now);
        if !commands.is_empty() {
            dispatch(&mut self.state, &commands);
        }
    }

    /// Run the TUI (blocking call)
    pub async fn run(&mut self) -> Result<()> {
        self.start()?;

        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, DisableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Run TUI loop
        let result = self.run_tui_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    async fn run_tui_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let clock = Instant::now();

        loop {
            let config = self.engine.config();
            let state = &self.state;
            terminal.draw(|f| crate::tui::widgets::render(f, state, config))?;

            // Handle events (with timeout)
            if crossterm::event::poll(Duration::from_millis(100))? {
                match crossterm::event::read()? {
                    crossterm::event::Event::Key(key)
                        if key.kind == crossterm::event::KeyEventKind::Press =>
                    {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                    }
                    crossterm::event::Event::Resize(_, _) => {
                        // Force redraw
                    }
                    _ => {}
                }
            }

            self.tick(clock.elapsed());
        }
    }
}
