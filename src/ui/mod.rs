//! Terminal UI: an interactive board driven by the turn sequencer's clock.

mod app;
mod game_view;

pub use app::App;
