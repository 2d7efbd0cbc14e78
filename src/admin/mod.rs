//! Admin gate for the inline post editor.
//!
//! This is a UI convenience switch, not access control: the password is a
//! plain config string and the flag is a plain storage entry, both readable
//! and writable by anyone with the client in hand.

use thiserror::Error;

use crate::config::StoreConfig;
use crate::storage::{KeyValueStore, StorageError};

const FLAG_ON: &str = "true";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Incorrect password")]
    PasswordMismatch,
}

pub struct AdminGate<S> {
    store: S,
    key: String,
    password: String,
    is_admin: bool,
}

impl<S: KeyValueStore> AdminGate<S> {
    /// Reads the persisted flag. An unreadable store starts logged out.
    pub fn new(store: S, config: &StoreConfig) -> Self {
        let is_admin = match store.get(&config.admin_key) {
            Ok(value) => value.as_deref() == Some(FLAG_ON),
            Err(e) => {
                log::warn!("reading admin flag failed, starting logged out: {e}");
                false
            }
        };

        Self {
            store,
            key: config.admin_key.clone(),
            password: config.admin_password.clone(),
            is_admin,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Exact, case-sensitive comparison. On mismatch nothing changes.
    ///
    /// On match the flag is set in memory even if persisting it fails; the
    /// storage error comes back as `Ok(Some(_))`.
    pub fn login(&mut self, password: &str) -> Result<Option<StorageError>, AuthError> {
        if password != self.password {
            log::warn!("admin login rejected");
            return Err(AuthError::PasswordMismatch);
        }

        self.is_admin = true;
        log::info!("admin login");
        Ok(self.write_flag())
    }

    pub fn logout(&mut self) -> Option<StorageError> {
        self.is_admin = false;
        log::info!("admin logout");
        match self.store.remove(&self.key) {
            Ok(()) => None,
            Err(e) => {
                log::warn!("clearing admin flag failed: {e}");
                Some(e)
            }
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn write_flag(&mut self) -> Option<StorageError> {
        match self.store.set(&self.key, FLAG_ON) {
            Ok(()) => None,
            Err(e) => {
                log::warn!("persisting admin flag failed: {e}");
                Some(e)
            }
        }
    }
}
