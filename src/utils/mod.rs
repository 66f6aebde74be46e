pub mod logging;
pub mod rand;

mod errors;
pub use errors::{FieldError, SnapshotError, ValidationError};
