//! REST client for the SkillSwap backend
//! Thin typed wrappers around the JSON endpoints; no retries, no caching

use crate::types::{Skill, Swap, SwapStatus, User};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("could not reach the server: {0}")]
    Transport(#[from] reqwest::Error),
    /// The backend answered with `{"error": ...}` and a 4xx/5xx status
    #[error("{message}")]
    Server { status: u16, message: String },
}

/// Error body shape shared by every backend endpoint
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub location: String,
}

#[derive(Serialize)]
pub struct ProfileUpdate {
    pub username: String,
    pub location: String,
    pub bio: String,
    pub skills_offered: Vec<String>,
    pub skills_seeking: Vec<String>,
}

#[derive(Serialize)]
pub struct SwapProposal {
    pub proposer_id: i64,
    pub receiver_id: i64,
    pub offered_skill_id: i64,
    pub requested_skill_id: i64,
    pub message: String,
}

#[derive(Serialize)]
struct SwapResponse {
    status: SwapStatus,
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn users(&self) -> Result<Vec<User>, ApiError> {
        let url = self.url("/users");
        debug!(url = %url, "GET users");
        read_json(self.http.get(&url).send().await?).await
    }

    pub async fn skills(&self) -> Result<Vec<Skill>, ApiError> {
        let url = self.url("/skills");
        debug!(url = %url, "GET skills");
        read_json(self.http.get(&url).send().await?).await
    }

    /// All swaps involving the user, newest first (server-side order)
    pub async fn user_swaps(&self, user_id: i64) -> Result<Vec<Swap>, ApiError> {
        let url = self.url(&format!("/users/{}/swaps", user_id));
        debug!(url = %url, "GET user swaps");
        read_json(self.http.get(&url).send().await?).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<User, ApiError> {
        let url = self.url("/users/register");
        debug!(url = %url, username = %request.username, "POST register");
        read_json(self.http.post(&url).json(request).send().await?).await
    }

    pub async fn update_profile(
        &self,
        user_id: i64,
        update: &ProfileUpdate,
    ) -> Result<User, ApiError> {
        let url = self.url(&format!("/users/{}/profile", user_id));
        debug!(url = %url, "PUT profile");
        read_json(self.http.put(&url).json(update).send().await?).await
    }

    pub async fn propose_swap(&self, proposal: &SwapProposal) -> Result<Swap, ApiError> {
        let url = self.url("/swaps/propose");
        debug!(
            url = %url,
            receiver = proposal.receiver_id,
            offered = proposal.offered_skill_id,
            requested = proposal.requested_skill_id,
            "POST swap proposal"
        );
        read_json(self.http.post(&url).json(proposal).send().await?).await
    }

    pub async fn respond_to_swap(
        &self,
        swap_id: i64,
        status: SwapStatus,
    ) -> Result<Swap, ApiError> {
        let url = self.url(&format!("/swaps/{}/respond", swap_id));
        debug!(url = %url, status = status.label(), "POST swap response");
        let body = SwapResponse { status };
        read_json(self.http.post(&url).json(&body).send().await?).await
    }
}

/// Decode a success body, or surface the backend's `{"error": ...}` message
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("server returned HTTP {}", status.as_u16()),
    };
    Err(ApiError::Server {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let client = ApiClient::new("http://localhost:5000/api/");
        assert_eq!(client.base_url(), "http://localhost:5000/api");
        assert_eq!(client.url("/users"), "http://localhost:5000/api/users");
        assert_eq!(
            client.url(&format!("/swaps/{}/respond", 12)),
            "http://localhost:5000/api/swaps/12/respond"
        );
    }

    #[test]
    fn proposal_serializes_backend_field_names() {
        let proposal = SwapProposal {
            proposer_id: 1,
            receiver_id: 2,
            offered_skill_id: 10,
            requested_skill_id: 20,
            message: "trade?".to_string(),
        };
        let value = serde_json::to_value(&proposal).unwrap();
        assert_eq!(value["proposer_id"], 1);
        assert_eq!(value["offered_skill_id"], 10);
        assert_eq!(value["message"], "trade?");
    }

    #[test]
    fn swap_response_serializes_status_string() {
        let body = SwapResponse {
            status: SwapStatus::Rejected,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"status":"rejected"}"#
        );
    }

    #[test]
    fn server_error_displays_backend_message() {
        let err = ApiError::Server {
            status: 409,
            message: "Username already exists".to_string(),
        };
        assert_eq!(err.to_string(), "Username already exists");
    }
}
