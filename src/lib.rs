//! # Connect Four Engine
//!
//! A Connect Four game-state engine on a fixed 6x8 board. Moves flow through a
//! step-driven turn sequencer, one phase per tick, with a seeded pseudo-random
//! opponent available for either side. A terminal UI is built on top.
//!
//! ## Modules
//!
//! - [`game`]: Board, players, win/draw detection, turn sequencer
//! - [`ai`]: Agent trait and the opponent move selector
//! - [`ui`]: Terminal UI with an interactive game view
//! - [`config`]: TOML configuration loading and validation
//! - [`logging`]: File and terminal logger setup
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;

use ai::OpponentSelector;
use game::{Player, Sequencer};

/// Build a sequencer with `computer` (if any) played by a selector seeded with
/// `seed`.
pub fn sequencer_for(computer: Option<Player>, seed: u64) -> Sequencer {
    match computer {
        Some(player) => {
            Sequencer::new().with_computer(player, Box::new(OpponentSelector::new(seed)))
        }
        None => Sequencer::new(),
    }
}
