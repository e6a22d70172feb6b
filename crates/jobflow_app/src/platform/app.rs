use std::io::{stdout, Stdout};
use std::panic;

use anyhow::{Context, Result};
use crossterm::cursor::Show;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flow_logging::flow_info;
use jobflow_core::{update, AppState, AppViewModel, Msg};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::effects::EffectRunner;
use super::ui;
use super::ui::input::{KeyOutcome, UiState};
use crate::config::AppConfig;

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub fn run_app(config: AppConfig) -> Result<()> {
    let runner = EffectRunner::new(config.fetch.clone()).context("starting fetch engine")?;

    install_panic_hook(restore_terminal);
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    flow_info!("Starting at {}", config.initial_route.path());
    let mut app = App::new(runner);
    let result = app.run(&mut terminal, Msg::Navigate(config.initial_route));

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Runs `restore` before the previously installed hook prints the panic, so
/// the message lands on a usable terminal.
fn install_panic_hook(restore: fn()) {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore();
        previous(info);
    }));
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);
    let _ = stdout().execute(Show);
}

struct App {
    state: AppState,
    ui: UiState,
    view: AppViewModel,
    runner: EffectRunner,
}

impl App {
    fn new(runner: EffectRunner) -> Self {
        let state = AppState::new();
        let view = state.view();
        Self {
            state,
            ui: UiState::default(),
            view,
            runner,
        }
    }

    fn run(&mut self, terminal: &mut Tui, first: Msg) -> Result<()> {
        self.dispatch_msg(first);
        let mut needs_redraw = true;

        loop {
            if needs_redraw {
                terminal.draw(|frame| ui::render::draw(frame, &self.view, &self.ui))?;
                needs_redraw = false;
            }

            let mut inbox = Vec::new();
            if event::poll(ui::constants::INPUT_POLL)? {
                match event::read()? {
                    Event::Key(key) => {
                        match ui::input::handle_key(&mut self.ui, key, &self.view) {
                            KeyOutcome::Quit => break,
                            KeyOutcome::Send(msg) => inbox.push(msg),
                            KeyOutcome::Redraw => needs_redraw = true,
                            KeyOutcome::Ignored => {}
                        }
                    }
                    Event::Resize(..) => needs_redraw = true,
                    _ => {}
                }
            }
            inbox.extend(self.runner.drain());

            for msg in inbox {
                needs_redraw |= self.dispatch_msg(msg);
            }
        }

        flow_info!("Quit requested");
        Ok(())
    }

    /// Runs one message through the reducer and its effects. Returns whether
    /// the screen is stale.
    fn dispatch_msg(&mut self, msg: Msg) -> bool {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.runner.enqueue(effects);

        if was_dirty {
            self.view = self.state.view();
            self.ui.sync(&self.view);
        }
        was_dirty
    }
}
