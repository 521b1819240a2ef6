//! # Authentication Handlers
//!
//! Handlers for login, registration and logout.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::RegisterRequest;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::domain::payment::Tone;
use crate::utils::validation;

/// Handle login form submission
///
/// Internal handler function - use [`crate::app::App::handle_login`] instead.
pub(crate) fn handle_login(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    email: String,
    password: String,
) {
    let api_client = {
        let mut state = state.write();
        if state.auth_in_progress {
            return;
        }

        let check = validation::validate_login(&email, &password, state.locale);
        if let Some(error) = check.error {
            state.notify(Tone::Error, error);
            return;
        }

        state.auth_in_progress = true;
        state.api_client.clone()
    };

    let email = email.trim().to_string();
    tokio::spawn(async move {
        let result = api_client.login(email, password).await;
        let _ = event_tx.send(AppEvent::LoginResult(result)).await;
    });
}

/// Handle registration form submission
///
/// Internal handler function - use [`crate::app::App::handle_register`] instead.
pub(crate) fn handle_register(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, request: RegisterRequest) {
    let api_client = {
        let mut state = state.write();
        if state.auth_in_progress {
            return;
        }

        let check = validation::validate_registration(&request, state.locale);
        if let Some(error) = check.error {
            state.notify(Tone::Error, error);
            return;
        }

        state.auth_in_progress = true;
        state.api_client.clone()
    };

    tokio::spawn(async move {
        let result = api_client.register(request).await;
        let _ = event_tx.send(AppEvent::RegisterResult(result)).await;
    });
}

/// Handle logout
///
/// The server call runs first so the token is still attached; local state is
/// cleared when it finishes, whatever the outcome.
pub(crate) fn handle_logout(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = {
        let state = state.read();
        if !state.is_authenticated() {
            return;
        }
        state.api_client.clone()
    };

    tokio::spawn(async move {
        let result = api_client.logout().await;
        let _ = event_tx.send(AppEvent::LogoutCompleted(result)).await;
    });
}
