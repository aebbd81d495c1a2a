pub mod error;
pub mod filters;

pub use error::AppError;
