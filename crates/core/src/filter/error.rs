use thiserror::Error;

/// Request-level failures that are reported to clients with a static message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("You must provide a new date")]
    MissingDate,
    #[error("Filter not found")]
    NotFound,
}

/// Maps a [`FilterError`] to an HTTP status code.
///
/// - `MissingDate` -> 400 (Bad Request)
/// - `NotFound` -> 404 (Not Found)
pub fn filter_error_to_status_code(error: &FilterError) -> u16 {
    match error {
        FilterError::MissingDate => 400,
        FilterError::NotFound => 404,
    }
}
