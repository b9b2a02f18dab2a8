use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AprioriError {
    #[error("Invalid input: {0}")]
    InvalidInput(&'static str),
}
