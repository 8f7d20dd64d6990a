#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("unfinished escape sequence at position {0}")]
    UnfinishedEscapeSequence(usize),
    #[error("invalid escape sequence at position {0}")]
    InvalidEscapeSequence(usize),
}
