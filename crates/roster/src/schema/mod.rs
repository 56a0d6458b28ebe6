//! Record schema and field roles.

mod record;
mod role;

pub use record::{EMAIL_PATTERN, PHONE_PATTERN, Record, RecordId, is_valid_email, is_valid_phone};
pub use role::{ClassifiedFields, Role, classify};
