//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod user;
pub mod pagination;

pub use validation::{ValidationError, Violations};
pub use user::{User, UserId, UserName, UserPayload, MAX_NAME_LEN, MIN_NAME_LEN};
pub use pagination::{Pagination, PaginationParams, DEFAULT_LIMIT, MAX_LIMIT};
