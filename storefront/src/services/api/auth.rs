//! # Authentication Endpoints
//!
//! Login, registration, logout and the current-user profile.

use reqwest::Method;
use shared::{AuthResponse, LoginRequest, MeResponse, RegisterRequest, User};

use super::client::ApiClient;
use crate::core::error::Result;

/// Login with email and password.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn login(client: &ApiClient, email: String, password: String) -> Result<AuthResponse> {
    tracing::info!("Attempting login");
    let request = LoginRequest { email, password };

    let response: AuthResponse = client
        .send_json(client.request(Method::POST, "/login").json(&request), "login")
        .await?;

    tracing::info!(user_id = response.user.id, role = ?response.user.role, "Login successful");
    Ok(response)
}

/// Register a new customer account.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn register(client: &ApiClient, request: RegisterRequest) -> Result<AuthResponse> {
    let response: AuthResponse = client
        .send_json(client.request(Method::POST, "/register").json(&request), "register")
        .await?;

    tracing::info!(user_id = response.user.id, "Registration successful");
    Ok(response)
}

/// Revoke the current token on the server.
#[tracing::instrument(skip(client))]
pub async fn logout(client: &ApiClient) -> Result<()> {
    client
        .send_empty(client.request(Method::POST, "/logout"), "logout")
        .await
}

/// Profile of the token's owner.
#[tracing::instrument(skip(client))]
pub async fn me(client: &ApiClient) -> Result<User> {
    let response: MeResponse = client.send_json(client.request(Method::GET, "/me"), "me").await?;
    Ok(response.into_user())
}
