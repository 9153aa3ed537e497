//! Shared shape of every game session
//!
//! Games mutate through their own operations and expose an owned snapshot
//! through [`Session::state`].

use serde::{Deserialize, Serialize};

/// Lifecycle of a session; Won and Lost are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A single-player game session
pub trait Session {
    /// Owned, detached view of the session
    type State: Clone + PartialEq + std::fmt::Debug;

    /// Snapshot of every field; mutating it never affects the session
    fn state(&self) -> Self::State;

    fn status(&self) -> GameStatus;

    fn is_over(&self) -> bool {
        self.status().is_terminal()
    }
}
