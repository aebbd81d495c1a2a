//! Pure helpers used by the HTTP handlers.

use super::{FilterError, FilterId};

/// Parses a path segment into a [`FilterId`].
///
/// A segment that is not an integer can never match a row, so it is reported
/// as [`FilterError::NotFound`] rather than as a malformed request.
pub fn parse_filter_id(raw: &str) -> Result<FilterId, FilterError> {
    raw.trim().parse().map_err(|_| FilterError::NotFound)
}
