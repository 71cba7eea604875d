//! Turn sequencing: a step-driven state machine that validates, places and
//! scores one move per pass, one phase per [`Sequencer::tick`].

use super::board::{Board, Cell, COLS, ROWS};
use super::detect::{evaluate_draw, evaluate_win};
use super::player::Player;
use crate::ai::Agent;
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Init,
    Idle,
    AwaitingMove,
    Validating,
    Resolving,
    Committing,
    Evaluating,
    AdvancingTurn,
    Terminal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// A resolved placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub player: Player,
}

/// Everything the sequencer tracks besides the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    current_player: Player,
    phase: Phase,
    winner: Option<GameOutcome>,
    locked: bool,
}

impl GameState {
    /// Freshly reset state, waiting for the `Init` tick
    pub fn initial() -> Self {
        GameState {
            current_player: Player::One,
            phase: Phase::Init,
            winner: None,
            locked: false,
        }
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn winner(&self) -> Option<GameOutcome> {
        self.winner
    }

    pub fn locked(&self) -> bool {
        self.locked
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Result of a single [`Sequencer::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Moved into this phase.
    Entered(Phase),
    /// The latched column was full; back in `AwaitingMove`.
    Rejected { column: usize },
    /// `AwaitingMove` with no column latched.
    Waiting,
    /// Terminal; nothing happens until reset.
    Locked,
}

/// Owns the board and game state and is their only writer.
///
/// Human input is latched with [`submit_move`](Self::submit_move) and consumed
/// by later ticks. Sides registered with [`with_computer`](Self::with_computer)
/// have their column chosen by an [`Agent`] during `AwaitingMove`.
pub struct Sequencer {
    board: Board,
    state: GameState,
    latched: Option<usize>,
    resolved: Option<Move>,
    last_move: Option<Move>,
    move_count: usize,
    agents: [Option<Box<dyn Agent>>; 2],
}

impl Sequencer {
    /// Two human players. Starts in `Init`.
    pub fn new() -> Self {
        Sequencer {
            board: Board::new(),
            state: GameState::initial(),
            latched: None,
            resolved: None,
            last_move: None,
            move_count: 0,
            agents: [None, None],
        }
    }

    /// Hand `player`'s turns to `agent`.
    pub fn with_computer(mut self, player: Player, agent: Box<dyn Agent>) -> Self {
        log::info!("{} controlled by {}", player, agent.name());
        self.agents[player.index()] = Some(agent);
        self
    }

    pub fn is_computer(&self, player: Player) -> bool {
        self.agents[player.index()].is_some()
    }

    pub fn agent_name(&self, player: Player) -> Option<&str> {
        self.agents[player.index()].as_deref().map(|agent| agent.name())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_snapshot(&self) -> [[Cell; COLS]; ROWS] {
        self.board.cells()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn current_player(&self) -> Player {
        self.state.current_player
    }

    pub fn winner(&self) -> Option<GameOutcome> {
        self.state.winner
    }

    pub fn is_terminal(&self) -> bool {
        self.state.locked
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Column waiting to be validated, if any.
    pub fn latched(&self) -> Option<usize> {
        self.latched
    }

    /// Latch a column for the side to move.
    ///
    /// Only accepted in `Idle` or `AwaitingMove`. A second submission before
    /// the first is consumed replaces it. Never mutates the board.
    pub fn submit_move(&mut self, column: i32) -> Result<(), MoveError> {
        let col = Board::validate_column(column)?;
        if self.state.locked {
            return Err(MoveError::GameOver);
        }
        match self.state.phase {
            Phase::Idle | Phase::AwaitingMove => {}
            phase => return Err(MoveError::NotAccepting { phase }),
        }
        let player = self.state.current_player;
        if self.is_computer(player) {
            return Err(MoveError::ComputerTurn { player });
        }
        self.latched = Some(col);
        Ok(())
    }

    /// Clear board and state; the next tick runs `Init`. Allowed in any phase.
    pub fn reset(&mut self) {
        self.board.reset();
        self.state = GameState::initial();
        self.latched = None;
        self.resolved = None;
        self.last_move = None;
        self.move_count = 0;
        for agent in self.agents.iter_mut().flatten() {
            agent.reset();
        }
        log::info!("game reset");
    }

    /// Advance exactly one phase.
    pub fn tick(&mut self) -> Step {
        match self.state.phase {
            Phase::Init => {
                self.board.reset();
                self.state = GameState::initial();
                self.latched = None;
                self.resolved = None;
                self.last_move = None;
                self.move_count = 0;
                log::info!("new game, {} to move", self.state.current_player);
                self.enter(Phase::Idle)
            }
            Phase::Idle => self.enter(Phase::AwaitingMove),
            Phase::AwaitingMove => {
                if self.latched.is_none() {
                    let player = self.state.current_player;
                    if let Some(agent) = self.agents[player.index()].as_mut() {
                        let col = agent.select_column(&self.board);
                        assert!(col < COLS, "{} chose column {col}", agent.name());
                        log::debug!("{player} ({}) picks column {col}", agent.name());
                        self.latched = Some(col);
                    }
                }
                match self.latched {
                    Some(_) => self.enter(Phase::Validating),
                    None => Step::Waiting,
                }
            }
            Phase::Validating => {
                let col = self
                    .latched
                    .expect("entered Validating without a latched column");
                if self.board.is_column_full(col) {
                    log::debug!(
                        "column {col} full, {} must choose again",
                        self.state.current_player
                    );
                    self.latched = None;
                    self.state.phase = Phase::AwaitingMove;
                    Step::Rejected { column: col }
                } else {
                    self.enter(Phase::Resolving)
                }
            }
            Phase::Resolving => {
                let col = self
                    .latched
                    .take()
                    .expect("entered Resolving without a latched column");
                let row = self
                    .board
                    .lowest_empty_row(col)
                    .expect("row resolution failed after column validated");
                self.resolved = Some(Move {
                    row,
                    col,
                    player: self.state.current_player,
                });
                self.enter(Phase::Committing)
            }
            Phase::Committing => {
                let mv = self
                    .resolved
                    .take()
                    .expect("entered Committing without a resolved move");
                self.board.commit(mv.row, mv.col, mv.player);
                self.last_move = Some(mv);
                self.move_count += 1;
                self.enter(Phase::Evaluating)
            }
            Phase::Evaluating => {
                let mv = self
                    .last_move
                    .expect("entered Evaluating without a committed move");
                let outcome = if evaluate_win(&self.board, mv.row, mv.col, mv.player) {
                    Some(GameOutcome::Winner(mv.player))
                } else if evaluate_draw(&self.board) {
                    Some(GameOutcome::Draw)
                } else {
                    None
                };
                match outcome {
                    Some(outcome) => {
                        log::info!("game over after {} moves: {outcome:?}", self.move_count);
                        self.state.winner = Some(outcome);
                        self.state.locked = true;
                        self.enter(Phase::Terminal)
                    }
                    None => self.enter(Phase::AdvancingTurn),
                }
            }
            Phase::AdvancingTurn => {
                self.state.current_player = self.state.current_player.other();
                self.enter(Phase::Idle)
            }
            Phase::Terminal => Step::Locked,
        }
    }

    /// Submit `column` and tick until that move is scored, rejected, or ends
    /// the game. Runs a pending `Init` first.
    pub fn play(&mut self, column: i32) -> Result<Option<GameOutcome>, MoveError> {
        while self.state.phase == Phase::Init {
            self.tick();
        }
        self.submit_move(column)?;
        loop {
            match self.tick() {
                Step::Rejected { column } => return Err(MoveError::ColumnFull { column }),
                Step::Entered(Phase::Idle) | Step::Waiting => return Ok(None),
                Step::Entered(Phase::Terminal) | Step::Locked => return Ok(self.state.winner),
                Step::Entered(_) => {}
            }
        }
    }

    /// Tick until a human has to supply a column or the game is over. Drives
    /// computer-controlled turns to completion.
    pub fn run_until_input(&mut self) -> Step {
        loop {
            match self.tick() {
                step @ (Step::Waiting | Step::Locked) => return step,
                _ => {}
            }
        }
    }

    fn enter(&mut self, phase: Phase) -> Step {
        log::trace!("{:?} -> {phase:?}", self.state.phase);
        self.state.phase = phase;
        Step::Entered(phase)
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}
