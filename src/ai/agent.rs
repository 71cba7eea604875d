use crate::game::Board;

/// Source of column choices for a computer-controlled side.
pub trait Agent {
    /// Pick a column for the side to move. Must terminate without blocking;
    /// the sequencer validates the choice like any human input.
    fn select_column(&mut self, board: &Board) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Return to the agent's initial state. Called on every game reset.
    fn reset(&mut self) {}
}
