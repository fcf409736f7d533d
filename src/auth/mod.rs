//! Session state for the signed-in user.
//!
//! The session is two pieces kept consistent: the bearer-token cookie the
//! request layer reads, and a reactive slot holding the user snapshot the UI
//! subscribes to. `SessionStore` owns both transitions.

pub mod session;

pub use session::{SessionStore, TOKEN_COOKIE, USER_COOKIE};
