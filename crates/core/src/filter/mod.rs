mod error;
mod operations;
mod requests;
mod seed;
mod types;

pub use error::{filter_error_to_status_code, FilterError};
pub use operations::parse_filter_id;
pub use requests::{
    is_json_content_type, ErrorBody, FilterEnvelope, FilterList, UpdateFilterDateRequest,
};
pub use seed::{format_timestamp, SEED_FILTER_NAMES};
pub use types::{Filter, FilterId};
