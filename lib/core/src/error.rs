use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The scheme catalog could not be read or parsed. Non-fatal: callers
    /// degrade to an empty catalog.
    #[error("Scheme catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// Rejected at the request-validation boundary, before the engine runs.
    #[error("Malformed profile: {0}")]
    MalformedProfile(String),
}
