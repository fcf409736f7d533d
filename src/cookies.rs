//! Cookie jar and codec.
//!
//! The jar is the only persistence medium this layer has: the bearer token
//! and the serialized user snapshot both live here. Entries are stored as
//! percent-encoded `name=value` pairs so arbitrary JSON text survives the
//! round trip as a single cookie value.
//!
//! The handle is cheap to clone; all clones share the same entries. There is
//! no coordination between concurrent writers beyond the lock - last write
//! wins, the backend stays the source of truth.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Duration, Utc};

/// Cookie lifetime when none is given explicitly.
const DEFAULT_COOKIE_DAYS: i64 = 7;

#[derive(Debug, Clone)]
struct CookieEntry {
    /// Percent-encoded `name=value` pair.
    pair: String,
    expires: DateTime<Utc>,
    path: String,
}

/// Shared, mutable cookie store scoped to one client session.
#[derive(Debug, Clone, Default)]
pub struct CookieJar {
    entries: Arc<RwLock<Vec<CookieEntry>>>,
}

impl CookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `name` with the default 7-day expiry.
    pub fn set(&self, name: &str, value: &str) {
        self.set_for_days(name, value, DEFAULT_COOKIE_DAYS);
    }

    /// Store `value` under `name`, expiring `days` from now. Re-setting an
    /// existing name replaces the value and refreshes the expiry.
    pub fn set_for_days(&self, name: &str, value: &str, days: i64) {
        let now = Utc::now();
        let encoded_name = urlencoding::encode(name).into_owned();
        let entry = CookieEntry {
            pair: format!("{}={}", encoded_name, urlencoding::encode(value)),
            expires: now + Duration::days(days),
            path: "/".to_string(),
        };

        let prefix = format!("{}=", encoded_name);
        let mut entries = self.write();
        entries.retain(|e| e.expires > now);
        match entries.iter_mut().find(|e| e.pair.starts_with(&prefix)) {
            Some(existing) => *existing = entry,
            None => entries.push(entry),
        }
    }

    /// Look up the decoded value stored under `name`.
    ///
    /// Scans entries in insertion order, splitting each pair on the first
    /// `=`. Pairs that fail to split or decode are treated as non-matching,
    /// never as an error. Expired entries are skipped.
    pub fn get(&self, name: &str) -> Option<String> {
        let now = Utc::now();
        let entries = self.read();
        for entry in entries.iter() {
            if entry.expires <= now {
                continue;
            }
            let Some((raw_name, raw_value)) = entry.pair.split_once('=') else {
                continue;
            };
            let Ok(decoded_name) = urlencoding::decode(raw_name) else {
                continue;
            };
            if decoded_name != name {
                continue;
            }
            if let Ok(value) = urlencoding::decode(raw_value) {
                return Some(value.into_owned());
            }
        }
        None
    }

    /// Delete every entry stored under `name`.
    pub fn remove(&self, name: &str) {
        self.write().retain(|entry| {
            let Some((raw_name, _)) = entry.pair.split_once('=') else {
                return true;
            };
            match urlencoding::decode(raw_name) {
                Ok(decoded) => decoded != name,
                Err(_) => true,
            }
        });
    }

    /// Path every entry is scoped to (the whole application).
    pub fn path(&self, name: &str) -> Option<String> {
        let prefix = format!("{}=", urlencoding::encode(name));
        self.read()
            .iter()
            .find(|e| e.pair.starts_with(&prefix))
            .map(|e| e.path.clone())
    }

    #[cfg(test)]
    fn insert_raw(&self, pair: &str, days: i64) {
        self.write().push(CookieEntry {
            pair: pair.to_string(),
            expires: Utc::now() + Duration::days(days),
            path: "/".to_string(),
        });
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<CookieEntry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<CookieEntry>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_plain_value() {
        let jar = CookieJar::new();
        jar.set("token", "abc123");
        assert_eq!(jar.get("token").as_deref(), Some("abc123"));
    }

    #[test]
    fn test_round_trip_reserved_characters() {
        let jar = CookieJar::new();
        for value in ["a=b", "a;b", "a&b", "a=b; c=d&e", "=;&", "{\"id\":\"1\"}"] {
            jar.set("data", value);
            assert_eq!(jar.get("data").as_deref(), Some(value), "value: {value}");
        }
    }

    #[test]
    fn test_round_trip_reserved_characters_in_name() {
        let jar = CookieJar::new();
        jar.set("weird=name;", "v");
        assert_eq!(jar.get("weird=name;").as_deref(), Some("v"));
        assert_eq!(jar.get("weird"), None);
    }

    #[test]
    fn test_empty_jar_yields_none() {
        let jar = CookieJar::new();
        assert_eq!(jar.get("token"), None);
        assert_eq!(jar.get(""), None);
    }

    #[test]
    fn test_missing_name_yields_none() {
        let jar = CookieJar::new();
        jar.set("token", "abc");
        assert_eq!(jar.get("user"), None);
    }

    #[test]
    fn test_reset_replaces_value() {
        let jar = CookieJar::new();
        jar.set("token", "first");
        jar.set("token", "second");
        assert_eq!(jar.get("token").as_deref(), Some("second"));
    }

    #[test]
    fn test_expired_entry_is_skipped() {
        let jar = CookieJar::new();
        jar.set_for_days("token", "stale", -1);
        assert_eq!(jar.get("token"), None);
    }

    #[test]
    fn test_reset_refreshes_expiry() {
        let jar = CookieJar::new();
        jar.set_for_days("token", "stale", -1);
        jar.set("token", "fresh");
        assert_eq!(jar.get("token").as_deref(), Some("fresh"));
    }

    #[test]
    fn test_remove_deletes_entry() {
        let jar = CookieJar::new();
        jar.set("token", "abc");
        jar.set("user", "ash");
        jar.remove("token");
        assert_eq!(jar.get("token"), None);
        assert_eq!(jar.get("user").as_deref(), Some("ash"));
    }

    #[test]
    fn test_malformed_pair_is_non_matching() {
        let jar = CookieJar::new();
        jar.insert_raw("no-equals-sign", 7);
        jar.insert_raw("%FF=value", 7);
        jar.insert_raw("token=%FF", 7);
        assert_eq!(jar.get("no-equals-sign"), None);
        // Name and value that decode to invalid UTF-8 never match.
        assert_eq!(jar.get("token"), None);

        // A well-formed entry after the junk is still found.
        jar.set("token", "good");
        assert_eq!(jar.get("token").as_deref(), Some("good"));
    }

    #[test]
    fn test_entries_are_path_scoped_to_root() {
        let jar = CookieJar::new();
        jar.set("token", "abc");
        assert_eq!(jar.path("token").as_deref(), Some("/"));
    }

    #[test]
    fn test_clones_share_entries() {
        let jar = CookieJar::new();
        let other = jar.clone();
        jar.set("token", "shared");
        assert_eq!(other.get("token").as_deref(), Some("shared"));
    }
}
