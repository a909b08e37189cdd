use thiserror::Error;

/// Errors produced while parsing external input (FEN strings, UCI move
/// tokens). These surface to the caller; nothing recovers from them
/// internally.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid FEN: {0}")]
    Fen(String),

    #[error("invalid UCI move `{0}`")]
    UciMove(String),
}
