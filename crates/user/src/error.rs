use thiserror::Error;

pub type UserResult<T> = Result<T, UserError>;

#[derive(Error, Debug, PartialEq)]
pub enum UserError {
    #[error("Rating must be between {min} and {max}, got {got}")]
    InvalidRating { got: u8, min: u8, max: u8 },

    #[error("Shopping list item not found: {0}")]
    ItemNotFound(u64),
}
