use thiserror::Error;

use crate::CategoryId;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid coordinates")]
    InvalidCoords,
}

pub type Result<T> = core::result::Result<T, BoardError>;

/// Failure while assembling a board from a [`crate::TriviaSource`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError<E> {
    #[error("failed to fetch the category listing: {0}")]
    Listing(#[source] E),
    #[error("failed to fetch category {id}: {source}")]
    Category {
        id: CategoryId,
        #[source]
        source: E,
    },
}
