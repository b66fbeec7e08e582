use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid VIAF identifier {0:?}: expected a non-empty alphanumeric value")]
    InvalidIdentifier(String),
}

pub type Result<T> = std::result::Result<T, Error>;
