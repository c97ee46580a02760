//! Session handlers.
//!
//! - `session_store` - Session lifecycle (restore, sign in, sign out)

mod session_store;

pub use session_store::SessionStore;
