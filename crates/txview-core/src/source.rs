//! Where the user snapshot comes from

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use txview_config::Config;

use crate::error::{CoreError, CoreResult};
use crate::models::User;

/// Source reference type
pub type SourceRef = Arc<dyn UserSource>;

/// Supplier of already-validated user snapshots
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Load a fresh snapshot
    async fn load(&self) -> CoreResult<User>;

    /// Human-readable location, for logs
    fn describe(&self) -> String;
}

/// Reads a JSON snapshot from disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.user_path())
    }
}

#[async_trait]
impl UserSource for JsonFileSource {
    async fn load(&self) -> CoreResult<User> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CoreError::SourceNotFound {
                path: self.describe(),
            },
            _ => CoreError::IoError {
                message: e.to_string(),
            },
        })?;

        let user: User = serde_json::from_str(&content)?;
        log::debug!(
            "Parsed snapshot {} with {} transactions",
            self.describe(),
            user.transaction_count()
        );
        Ok(user)
    }

    fn describe(&self) -> String {
        self.path.to_string_lossy().to_string()
    }
}

/// Serves a fixed snapshot held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    user: User,
}

impl InMemorySource {
    pub fn new(user: User) -> Self {
        Self { user }
    }
}

#[async_trait]
impl UserSource for InMemorySource {
    async fn load(&self) -> CoreResult<User> {
        Ok(self.user.clone())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

/// Load the initial snapshot, starting empty when the file does not exist yet
pub async fn load_or_empty(source: &dyn UserSource) -> CoreResult<User> {
    match source.load().await {
        Ok(user) => {
            log::info!(
                "Loaded {} transactions from {}",
                user.transaction_count(),
                source.describe()
            );
            Ok(user)
        }
        Err(e @ CoreError::SourceNotFound { .. }) => {
            e.log("initial load");
            Ok(User::default())
        }
        Err(e) => Err(e),
    }
}
