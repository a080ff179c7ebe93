use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// The one error the translator reports. Any structural or
/// operator-level violation of the query grammar collapses to this;
/// there is no partial success and no per-node diagnostic channel.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    #[error("invalid query")]
    InvalidQuery,
}
