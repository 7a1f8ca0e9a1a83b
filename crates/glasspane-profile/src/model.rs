#![forbid(unsafe_code)]

//! Provider-shaped profile and repository records.
//!
//! Field names follow the hosting provider's JSON payloads so the host's
//! fetch layer can hand responses straight to [`Profile::from_json`] and
//! [`Repository::list_from_json`]. Optional payload fields default rather
//! than fail, so partial responses still decode.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A user profile as delivered by the hosting provider's user endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    pub created_at: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub blog: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
}

impl Profile {
    /// Decode a user payload.
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Offline fixture used when the provider is unreachable or rate-limited.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            login: "glasspane".into(),
            name: Some("Glasspane".into()),
            bio: Some("Floating panels, glass visuals, and small utilities.".into()),
            avatar_url: "https://example.invalid/avatar.png".into(),
            html_url: "https://example.invalid/glasspane".into(),
            public_repos: 3,
            followers: 0,
            following: 0,
            created_at: "2022-03-20T00:00:00Z".into(),
            location: Some("United Kingdom".into()),
            blog: None,
            company: None,
        }
    }
}

/// A repository as delivered by the hosting provider's repo-list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub updated_at: String,
    pub created_at: String,
    #[serde(default)]
    pub size: u64,
}

impl Repository {
    /// Decode a repo-list payload.
    pub fn list_from_json(payload: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Offline fixture used when the provider is unreachable or rate-limited.
    #[must_use]
    pub fn fallback_list() -> Vec<Self> {
        vec![
            Self {
                id: 1,
                name: "glasspane".into(),
                full_name: "glasspane/glasspane".into(),
                description: Some("Draggable, resizable floating panels.".into()),
                html_url: "https://example.invalid/glasspane/glasspane".into(),
                stargazers_count: 32,
                forks_count: 1,
                language: Some("Rust".into()),
                topics: vec!["panels".into(), "ui".into()],
                updated_at: "2025-09-15T00:00:00Z".into(),
                created_at: "2024-08-01T00:00:00Z".into(),
                size: 2048,
            },
            Self {
                id: 2,
                name: "wavegen".into(),
                full_name: "glasspane/wavegen".into(),
                description: Some("Sine wave generator and visualization toy.".into()),
                html_url: "https://example.invalid/glasspane/wavegen".into(),
                stargazers_count: 1,
                forks_count: 0,
                language: Some("JavaScript".into()),
                topics: vec!["visualization".into()],
                updated_at: "2025-09-14T00:00:00Z".into(),
                created_at: "2025-08-20T00:00:00Z".into(),
                size: 512,
            },
            Self {
                id: 3,
                name: "darkly".into(),
                full_name: "glasspane/darkly".into(),
                description: Some("Dark theme customization utility.".into()),
                html_url: "https://example.invalid/glasspane/darkly".into(),
                stargazers_count: 0,
                forks_count: 0,
                language: Some("Rust".into()),
                topics: vec!["theme".into()],
                updated_at: "2025-09-07T00:00:00Z".into(),
                created_at: "2025-09-07T00:00:00Z".into(),
                size: 384,
            },
        ]
    }
}
