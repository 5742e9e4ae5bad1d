pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const WHITELIST_FILE: &str = "whitelist.json";
pub const ALLOWLIST_FILE: &str = "allowlist.json";
pub const PERMISSIONS_FILE: &str = "permissions.json";

/// Legacy allowlist names, checked in this order.
pub const LEGACY_SOURCES: [&str; 2] = [WHITELIST_FILE, ALLOWLIST_FILE];

pub const DEFAULT_LOOKUP_URL: &str = "https://www.cxkes.me/xbox/xuid";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "allowlist-migrate")]
#[command(about = "Migrate a legacy server whitelist into allowlist.json and permissions.json")]
pub struct CliConfig {
    #[arg(long, default_value = ".", help = "Directory holding the server's allowlist files")]
    pub dir: String,

    #[arg(long, default_value = DEFAULT_LOOKUP_URL, help = "Page where operators can look up XUIDs")]
    pub lookup_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit diagnostics as JSON")]
    pub log_json: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            dir: ".".to_string(),
            lookup_url: DEFAULT_LOOKUP_URL.to_string(),
            verbose: false,
            log_json: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn source_candidates(&self) -> &[&str] {
        &LEGACY_SOURCES
    }

    fn allowlist_output(&self) -> &str {
        ALLOWLIST_FILE
    }

    fn permissions_output(&self) -> &str {
        PERMISSIONS_FILE
    }

    fn lookup_url(&self) -> &str {
        &self.lookup_url
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("dir", &self.dir)?;
        validate_url("lookup_url", &self.lookup_url)?;
        Ok(())
    }
}
