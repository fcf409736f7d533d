use tokio::sync::watch;
use tracing::{debug, warn};

use crate::cookies::CookieJar;
use crate::models::User;
use crate::store::Store;

/// Cookie holding the bearer token.
pub const TOKEN_COOKIE: &str = "token";

/// Cookie holding the JSON-serialized user snapshot.
pub const USER_COOKIE: &str = "user";

/// The one reactive slot for the authenticated user, persisted to the
/// cookie jar so a session survives a reload.
///
/// The session is either Anonymous (slot `None`, no token cookie) or
/// Authenticated (slot set, token cookie present). Writers replace the slot
/// wholesale; racing responses resolve last-write-wins.
#[derive(Debug, Clone)]
pub struct SessionStore {
    jar: CookieJar,
    user: Store<Option<User>>,
}

impl SessionStore {
    /// Create a store persisting to `jar`. The slot starts anonymous; call
    /// [`restore`](Self::restore) to pick up a previously saved session.
    pub fn new(jar: CookieJar) -> Self {
        Self {
            jar,
            user: Store::new(None),
        }
    }

    /// Replace the user snapshot in full and persist it to the user cookie.
    pub fn set_user(&self, user: User) {
        self.user.set(Some(user.clone()));
        match serde_json::to_string(&user) {
            Ok(json) => self.jar.set(USER_COOKIE, &json),
            Err(e) => warn!(error = %e, "failed to serialize user snapshot for cookie"),
        }
    }

    /// Rehydrate the slot from the user cookie.
    ///
    /// A missing cookie yields an anonymous slot, never an error. A cookie
    /// that is present but not valid JSON is treated as anonymous and the
    /// cookie is deleted, so the corrupt value cannot resurface on the next
    /// restore.
    pub fn restore(&self) {
        match self.jar.get(USER_COOKIE) {
            None => self.user.set(None),
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    debug!(username = %user.username, "restored session from cookie");
                    self.user.set(Some(user));
                }
                Err(e) => {
                    warn!(error = %e, "user cookie is corrupt, clearing it");
                    self.jar.remove(USER_COOKIE);
                    self.user.set(None);
                }
            },
        }
    }

    /// Log out: drop the token and user cookies and reset the slot.
    pub fn clear(&self) {
        self.jar.remove(TOKEN_COOKIE);
        self.jar.remove(USER_COOKIE);
        self.user.set(None);
    }

    /// Current snapshot, if authenticated.
    pub fn current(&self) -> Option<User> {
        self.user.get()
    }

    /// Observe slot changes. UI bindings hold the receiver.
    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.user.subscribe()
    }

    /// The bearer token, if a token cookie is present.
    pub fn token(&self) -> Option<String> {
        self.jar.get(TOKEN_COOKIE)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}
