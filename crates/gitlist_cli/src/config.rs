//! Configuration file support for gitlist.
//!
//! Configuration is loaded with the following precedence (highest to lowest):
//! 1. Environment variables (prefixed with `GITLIST_`, sections separated by a
//!    double underscore, e.g., `GITLIST_GITHUB__TOKEN`, `GITLIST_QUERY__PAGE_SIZE`)
//! 2. Local config file (./gitlist.toml)
//! 3. XDG config file (~/.config/gitlist/config.toml)
//! 4. Built-in defaults
//!
//! When no token is configured anywhere, the plain `GITHUB_TOKEN` variable is
//! used.
//!
//! Example config file:
//! ```toml
//! [github]
//! token = "ghp_..."  # or use GITLIST_GITHUB__TOKEN / GITHUB_TOKEN
//! api_url = "https://github.example.com/api"  # GitHub Enterprise only
//!
//! [query]
//! page_size = 20
//! languages_limit = 10
//! refs_limit = 100
//! ```

use std::path::PathBuf;

use config::{Config as ConfigBuilder, ConfigError, Environment, File, FileFormat};
use directories::ProjectDirs;
use gitlist::github::{DEFAULT_LANGUAGES_LIMIT, DEFAULT_PAGE_SIZE, DEFAULT_REFS_LIMIT, QueryLimits};
use serde::Deserialize;

/// Environment variable consulted when no token is configured.
const LEGACY_TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GitHub configuration.
    pub github: GitHubConfig,
    /// GraphQL query size limits.
    pub query: QueryConfig,
}

/// GitHub configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// GitHub API token.
    /// Can also be set via GITLIST_GITHUB__TOKEN or GITHUB_TOKEN.
    pub token: Option<String>,
    /// API root for GitHub Enterprise. Defaults to api.github.com.
    pub api_url: Option<String>,
}

/// GraphQL query size limits.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Repositories per page.
    pub page_size: u32,
    /// Languages fetched per repository.
    pub languages_limit: u32,
    /// Refs fetched per repository.
    pub refs_limit: u32,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            languages_limit: DEFAULT_LANGUAGES_LIMIT,
            refs_limit: DEFAULT_REFS_LIMIT,
        }
    }
}

impl Config {
    /// Load configuration using the config crate's layered approach.
    ///
    /// Sources are loaded in order (later sources override earlier):
    /// 1. Built-in defaults
    /// 2. XDG config file (~/.config/gitlist/config.toml)
    /// 3. Local config file (./gitlist.toml)
    /// 4. Environment variables with GITLIST_ prefix
    ///
    /// A file that exists but does not parse, or a value of the wrong type,
    /// is an error rather than a silent fallback to defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let files = Self::default_config_path()
            .into_iter()
            .chain([PathBuf::from("gitlist.toml")]);
        Self::load_from(files)
    }

    /// Load from the given config files (lowest priority first), then the
    /// environment.
    pub fn load_from(files: impl IntoIterator<Item = PathBuf>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        for path in files.into_iter().filter(|path| path.exists()) {
            tracing::debug!("Loading config from {:?}", path);
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
        }

        // GITLIST_GITHUB__API_URL -> github.api_url
        builder = builder.add_source(
            Environment::with_prefix("GITLIST")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Get the GitHub token, falling back to `GITHUB_TOKEN`.
    pub fn github_token(&self) -> Option<String> {
        non_blank(self.github.token.clone())
            .or_else(|| non_blank(std::env::var(LEGACY_TOKEN_VAR).ok()))
    }

    /// Get the GitHub API root, if one is configured.
    pub fn github_api_url(&self) -> Option<String> {
        non_blank(self.github.api_url.clone())
    }

    /// Get the query size limits.
    pub fn query_limits(&self) -> QueryLimits {
        QueryLimits {
            page_size: self.query.page_size,
            languages_limit: self.query.languages_limit,
            refs_limit: self.query.refs_limit,
        }
    }

    /// Get the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "gitlist").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
