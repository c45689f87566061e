use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftFieldError {
    #[error("unknown investor draft field '{0}'")]
    UnknownField(String),
    #[error("invalid gender '{0}'; expected one of Male, Female, Other")]
    InvalidGender(String),
    #[error("invalid rank '{0}'; expected one of BEGINNER, INTERMEDIATE, ADVANCED")]
    InvalidRank(String),
}
