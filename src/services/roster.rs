use crate::models::Creative;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while loading the roster
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Roster file not found: {0}")]
    NotFound(String),

    #[error("Failed to read roster: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid roster format: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Shared, read-only roster handle
pub type Roster = Arc<Vec<Creative>>;

const ROSTER_KEY: &str = "roster";

enum Source {
    File(PathBuf),
    Memory(Roster),
}

/// Read-only creative roster
///
/// File-backed stores keep the parsed roster in a TTL cache so that most
/// requests skip the disk read. A TTL of zero reads the file on every call.
pub struct RosterStore {
    source: Source,
    cache: Option<moka::future::Cache<&'static str, Roster>>,
}

impl RosterStore {
    /// Create a store backed by a JSON array file
    pub fn from_file<P: Into<PathBuf>>(path: P, ttl_secs: u64) -> Self {
        let cache = (ttl_secs > 0).then(|| {
            moka::future::CacheBuilder::new(1)
                .time_to_live(Duration::from_secs(ttl_secs))
                .build()
        });

        Self {
            source: Source::File(path.into()),
            cache,
        }
    }

    /// Create a store over an already loaded roster
    pub fn in_memory(creatives: Vec<Creative>) -> Self {
        Self {
            source: Source::Memory(Arc::new(creatives)),
            cache: None,
        }
    }

    /// Get the roster (cache first, then source)
    pub async fn load(&self) -> Result<Roster, RosterError> {
        let path = match &self.source {
            Source::Memory(roster) => return Ok(Arc::clone(roster)),
            Source::File(path) => path,
        };

        if let Some(cache) = &self.cache {
            if let Some(roster) = cache.get(ROSTER_KEY).await {
                tracing::trace!("Roster cache hit");
                return Ok(roster);
            }
        }

        let roster = Arc::new(read_roster_file(path).await?);
        tracing::debug!("Loaded {} creatives from {}", roster.len(), path.display());

        if let Some(cache) = &self.cache {
            cache.insert(ROSTER_KEY, Arc::clone(&roster)).await;
        }

        Ok(roster)
    }

    /// Drop any cached roster so the next load rereads the source
    #[cfg(test)]
    async fn invalidate(&self) {
        if let Some(cache) = &self.cache {
            cache.invalidate(ROSTER_KEY).await;
        }
    }
}

async fn read_roster_file(path: &Path) -> Result<Vec<Creative>, RosterError> {
    let data = match tokio::fs::read_to_string(path).await {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(RosterError::NotFound(path.display().to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    parse_roster(&data)
}

/// Parse a roster document (JSON array of creatives)
pub fn parse_roster(data: &str) -> Result<Vec<Creative>, RosterError> {
    Ok(serde_json::from_str(data)?)
}
