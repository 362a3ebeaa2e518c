//! Types downstream clients interact with.
mod errors;
mod user;

pub use errors::{Result, SessionError};
pub use user::UserHandle;
