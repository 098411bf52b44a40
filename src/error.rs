use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A clause with no literals can never be satisfied, so it is never accepted as input.
    #[error("empty clause")]
    EmptyClause,
    #[error("exactly-one constraint over an empty group")]
    EmptyGroup,
    #[error("literal '{0}' appears more than once in an exactly-one group")]
    DuplicateLiteral(String),
    #[error("DNF formula with no terms")]
    EmptyDnf,
    #[error("DNF expansion does not fit in memory")]
    DnfTooLarge,
    /// The oracle reported a variable this session never handed out.
    #[error("oracle referenced unknown variable {0}")]
    UnknownVariable(usize),
    /// The oracle could not decide the formula.
    #[error("oracle failed: {0}")]
    Oracle(String),
}
