use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("monitor '{name}' is not in the roster")]
    UnknownMonitor { name: String },

    #[error("monitor '{name}' appears in the roster more than once")]
    DuplicateMonitor { name: String },

    #[error("the roster has no monitors")]
    EmptyRoster,
}

pub type RosterResult<T> = Result<T, RosterError>;
