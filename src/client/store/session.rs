//! Session state: the signed-in identity and bearer credential, mirrored to
//! local storage so a reload keeps the session.

use dioxus::prelude::*;
use dioxus_logger::tracing;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

use crate::client::api::ApiError;
use crate::client::config::{TOKEN_STORAGE_KEY, USER_STORAGE_KEY};
use crate::model::auth::AuthSessionDto;
use crate::model::user::Role;

/// Identity blob persisted under the user storage key.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Clone, Copy)]
pub struct SessionStore {
    user: Signal<Option<SessionUser>>,
    token: Signal<Option<String>>,
}

impl SessionStore {
    /// Restores the session from local storage. The credential and identity
    /// only count together; a stray half is dropped so the stores never
    /// disagree with each other.
    pub fn restore() -> Self {
        let token: Option<String> = LocalStorage::get(TOKEN_STORAGE_KEY).ok();
        let user: Option<SessionUser> = LocalStorage::get(USER_STORAGE_KEY).ok();
        let (user, token) = match (user, token) {
            (Some(user), Some(token)) => (Some(user), Some(token)),
            _ => {
                LocalStorage::delete(TOKEN_STORAGE_KEY);
                LocalStorage::delete(USER_STORAGE_KEY);
                (None, None)
            }
        };
        Self {
            user: Signal::new(user),
            token: Signal::new(token),
        }
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.user.read().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.read().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user
            .read()
            .as_ref()
            .map(|user| user.role == Role::Admin)
            .unwrap_or(false)
    }

    /// Installs a fresh session from a login or registration response.
    pub fn login(&mut self, session: AuthSessionDto) {
        let user = SessionUser {
            name: session.username,
            email: session.email,
            role: session.role,
        };
        if let Err(e) = LocalStorage::set(TOKEN_STORAGE_KEY, &session.token) {
            tracing::warn!("could not persist session token: {e}");
        }
        if let Err(e) = LocalStorage::set(USER_STORAGE_KEY, &user) {
            tracing::warn!("could not persist session user: {e}");
        }
        self.user.set(Some(user));
        self.token.set(Some(session.token));
    }

    /// Drops the session. Peeks first so repeated calls while resources are
    /// still failing do not notify subscribers again.
    pub fn logout(&mut self) {
        LocalStorage::delete(TOKEN_STORAGE_KEY);
        LocalStorage::delete(USER_STORAGE_KEY);
        if self.token.peek().is_some() {
            self.user.set(None);
            self.token.set(None);
        }
    }

    /// Tears the session down when a call failed because the credential was
    /// rejected. Returns whether it did.
    pub fn expire_if_unauthorized(&mut self, error: &ApiError) -> bool {
        if error.is_unauthorized() {
            self.logout();
            true
        } else {
            false
        }
    }
}
