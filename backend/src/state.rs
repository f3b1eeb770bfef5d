// src/state.rs

use std::sync::Arc;

use axum::extract::FromRef;

use crate::{
    config::Config,
    store::{ContentStore, UserStore},
};

#[derive(Clone)]
pub struct AppState {
    /// Read-only after startup.
    pub catalog: Arc<ContentStore>,
    pub users: Arc<UserStore>,
    pub config: Config,
}

impl AppState {
    pub fn new(catalog: ContentStore, config: Config) -> Self {
        Self {
            catalog: Arc::new(catalog),
            users: Arc::new(UserStore::new()),
            config,
        }
    }
}

impl FromRef<AppState> for Arc<ContentStore> {
    fn from_ref(state: &AppState) -> Self {
        state.catalog.clone()
    }
}

impl FromRef<AppState> for Arc<UserStore> {
    fn from_ref(state: &AppState) -> Self {
        state.users.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
