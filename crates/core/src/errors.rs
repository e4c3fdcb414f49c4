use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown revenue bracket label: {0:?}")]
    UnknownRevenueBracket(String),
    #[error("unknown board column label: {0:?}")]
    UnknownBoardColumn(String),
}
