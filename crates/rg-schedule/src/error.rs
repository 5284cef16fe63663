use rg_core::ActivityId;
use rg_roster::RosterError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Two entries in the activity configuration share one ID.  The later
    /// entry is skipped; running both would let one character be booked
    /// twice for what the output claims is a single activity.
    #[error("duplicate activity id {0} in configuration")]
    DuplicateActivityId(ActivityId),

    #[error(transparent)]
    Roster(#[from] RosterError),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
