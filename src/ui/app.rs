use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};

use crate::config::UiConfig;
use crate::error::MoveError;
use crate::game::{GameOutcome, Phase, Sequencer, Step, COLS};

pub struct App {
    sequencer: Sequencer,
    selected_column: usize,
    start_column: usize,
    tick: Duration,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(sequencer: Sequencer, ui: &UiConfig) -> Self {
        App {
            sequencer,
            selected_column: ui.start_column,
            start_column: ui.start_column,
            tick: Duration::from_millis(ui.tick_ms),
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop: one sequencer tick per frame.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let mut last_tick = Instant::now();
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            let timeout = self.tick.saturating_sub(last_tick.elapsed());
            self.handle_events(timeout)?;

            if last_tick.elapsed() >= self.tick {
                self.step();
                last_tick = Instant::now();
            }
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self, timeout: Duration) -> io::Result<()> {
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.sequencer.reset();
                self.selected_column = self.start_column;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Latch the selected column for the next tick
    fn drop_piece(&mut self) {
        match self.sequencer.submit_move(self.selected_column as i32) {
            Ok(()) => self.message = None,
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(MoveError::ComputerTurn { player }) => {
                self.message = Some(format!("Waiting for {player}..."));
            }
            Err(MoveError::NotAccepting { .. }) => {}
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    fn step(&mut self) {
        match self.sequencer.tick() {
            Step::Rejected { column } => {
                self.message = Some(format!("Column {} is full!", column + 1));
            }
            Step::Entered(Phase::Terminal) => {
                self.message = self.sequencer.winner().map(|outcome| match outcome {
                    GameOutcome::Winner(player) => format!("{player} wins!"),
                    GameOutcome::Draw => "It's a draw!".to_string(),
                });
            }
            _ => {}
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.sequencer, self.selected_column, &self.message);
    }
}
