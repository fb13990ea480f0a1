pub mod error;
pub mod extract;
pub mod posts;
pub mod profile;
pub mod subreddits;
pub mod subscriptions;

pub use error::{ApiError, ApiResult};
pub use extract::ApiJson;

use crate::validation::parse_path_id;

/// Parse a path id, naming the entity in the error
fn path_id(raw: &str, entity: &str) -> ApiResult<i64> {
    parse_path_id(raw).ok_or_else(|| ApiError::BadRequest(format!("Invalid {} ID", entity)))
}
