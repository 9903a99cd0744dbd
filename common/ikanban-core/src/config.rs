//! Configuration loading for the iKanban tools
//!
//! Configuration is loaded from:
//! 1. An explicit path (`--config`)
//! 2. Environment variable IKANBAN_CONFIG_PATH
//! 3. ~/.binks/ikanban.toml
//! 4. Built-in defaults
//!
//! `VIBE_BACKEND_URL` and `VIBE_API_TOKEN` override whatever the file says.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Marker used in project alias tables for "no static UUID, ask the API"
pub const DYNAMIC_PROJECT: &str = "dynamic";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Collaborator API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Team used by MCP tools when the caller names none
    #[serde(default = "default_team")]
    pub default_team: String,
    /// Author recorded on comments added without an explicit author
    #[serde(default = "default_comment_author")]
    pub comment_author: String,
    /// Statically known teams and their project aliases
    #[serde(default = "default_teams")]
    pub teams: Vec<TeamConfig>,
}

/// REST API connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token; usually supplied through VIBE_API_TOKEN
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    #[serde(default = "default_upload_timeout")]
    pub upload_timeout_seconds: u64,
}

/// One statically known team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamConfig {
    /// Long name, e.g. "ikanban"
    pub name: String,
    /// Short identifier used in issue keys, e.g. "IKA"
    pub identifier: String,
    pub id: String,
    /// Project used when a command names none
    #[serde(default)]
    pub default_project: Option<String>,
    /// Project name -> UUID (or "dynamic")
    #[serde(default)]
    pub projects: BTreeMap<String, ProjectAlias>,
}

/// Target of a project alias
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectAlias {
    Id(String),
    /// No static UUID is known; resolve through the live project list
    Dynamic,
}

impl From<String> for ProjectAlias {
    fn from(value: String) -> Self {
        if value.eq_ignore_ascii_case(DYNAMIC_PROJECT) {
            ProjectAlias::Dynamic
        } else {
            ProjectAlias::Id(value)
        }
    }
}

impl From<ProjectAlias> for String {
    fn from(value: ProjectAlias) -> Self {
        match value {
            ProjectAlias::Id(id) => id,
            ProjectAlias::Dynamic => DYNAMIC_PROJECT.to_string(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://api.scho1ar.com".to_string()
}

fn default_timeout() -> u64 {
    15
}

fn default_upload_timeout() -> u64 {
    60
}

fn default_team() -> String {
    "IKA".to_string()
}

fn default_comment_author() -> String {
    "Claude Code".to_string()
}

const IKANBAN_TEAM_ID: &str = "a263e43f-43d3-4af7-a947-5f70e6670921";
const SCHILD_TEAM_ID: &str = "a2f22deb-901e-436b-9755-644cb26753b7";

fn default_teams() -> Vec<TeamConfig> {
    let id = |s: &str| ProjectAlias::Id(s.to_string());

    vec![
        TeamConfig {
            name: "ikanban".to_string(),
            identifier: "IKA".to_string(),
            id: IKANBAN_TEAM_ID.to_string(),
            default_project: Some("ff89ece5-eb49-4d8b-a349-4fc227773cbc".to_string()),
            projects: BTreeMap::from([
                ("frontend".to_string(), id("ff89ece5-eb49-4d8b-a349-4fc227773cbc")),
                ("backend".to_string(), ProjectAlias::Dynamic),
                ("integration".to_string(), ProjectAlias::Dynamic),
            ]),
        },
        TeamConfig {
            name: "schild".to_string(),
            identifier: "SCH".to_string(),
            id: SCHILD_TEAM_ID.to_string(),
            default_project: Some("ec364e49-b620-48e1-9dd1-8744eaedb5e2".to_string()),
            projects: BTreeMap::from([
                ("backend".to_string(), id("ec364e49-b620-48e1-9dd1-8744eaedb5e2")),
                ("frontend".to_string(), id("a0838686-0c56-4492-bf6d-65847451496a")),
                ("data-layer".to_string(), id("20f980e2-9cd8-427d-a11f-99cbff31acad")),
                ("temporal".to_string(), id("0ea3cbc6-11c3-4d68-bb99-7493a40de833")),
                ("elevenlabs".to_string(), id("e09697e8-c605-46a0-9dbc-877918fdca08")),
                ("infra".to_string(), id("b40b5eca-1856-4b69-928f-0ec3ecd2737b")),
            ]),
        },
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            default_team: default_team(),
            comment_author: default_comment_author(),
            teams: default_teams(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
            timeout_seconds: default_timeout(),
            upload_timeout_seconds: default_upload_timeout(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn upload_timeout(&self) -> Duration {
        Duration::from_secs(self.upload_timeout_seconds)
    }
}

impl Config {
    /// Load configuration from file or use defaults, then apply env overrides
    ///
    /// An explicit path must exist; the implicit lookup falls back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                anyhow::bail!("config file not found: {}", path.display());
            }
        }

        let config_path = explicit
            .map(Path::to_path_buf)
            .or_else(Self::find_config_path);

        let mut config = match config_path {
            Some(path) if path.exists() => Self::load_from(&path)?,
            Some(path) => {
                tracing::debug!("Config file {} not found, using defaults", path.display());
                Self::default()
            }
            None => {
                tracing::debug!("No config path available, using defaults");
                Self::default()
            }
        };

        config.apply_env();
        Ok(config)
    }

    /// Parse a TOML config file without consulting the environment
    pub fn load_from(path: &Path) -> Result<Self> {
        tracing::info!("Loading config from: {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Environment variables take priority over the file
    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("VIBE_BACKEND_URL") {
            if !url.is_empty() {
                self.api.base_url = url;
            }
        }
        if let Ok(token) = std::env::var("VIBE_API_TOKEN") {
            if !token.is_empty() {
                self.api.token = Some(token);
            }
        }
    }

    /// Find the configuration file path
    fn find_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("IKANBAN_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        if let Ok(home) = std::env::var("HOME") {
            return Some(PathBuf::from(home).join(".binks").join("ikanban.toml"));
        }

        None
    }
}
