use rg_core::{CoreError, PlayerId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("player {0} not found")]
    UnknownPlayer(PlayerId),

    #[error("player {player} already registered a character named {name:?}")]
    DuplicateCharacter { player: PlayerId, name: String },

    #[error("activity {name:?}: {reason}")]
    InvalidActivity { name: String, reason: String },

    #[error(transparent)]
    Grid(#[from] CoreError),

    #[error("roster parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RosterResult<T> = Result<T, RosterError>;
