use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Color index outside the configured palette")]
    InvalidColor,
    #[error("Board has empty cells")]
    IncompleteBoard,
}

pub type Result<T> = core::result::Result<T, GameError>;
