use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};

use crate::mint::types::{is_valid_token_id, Token};
use crate::utils::{KuberError, Result};

/// Persistence for minted tokens
#[async_trait]
pub trait TokenStore: Send + Sync + 'static {
    fn name(&self) -> String;

    /// Write a token, replacing any previous one with the same id
    async fn put(&self, token: &Token) -> Result<()>;
}

/// One pretty-printed JSON file per token: `<dir>/<id>.json`.
pub struct FsTokenStore {
    dir: PathBuf,
}

impl FsTokenStore {
    /// Open the store, creating the directory tree if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let dir = path.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| {
            KuberError::Storage(format!("cannot create {}: {}", dir.display(), e))
        })?;
        Ok(Self { dir })
    }

    fn token_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }
}

#[async_trait]
impl TokenStore for FsTokenStore {
    fn name(&self) -> String {
        "fs".into()
    }

    async fn put(&self, token: &Token) -> Result<()> {
        if !is_valid_token_id(&token.id) {
            return Err(KuberError::Storage(format!("invalid token id {:?}", token.id)));
        }
        let p = self.token_path(&token.id);
        let data = serde_json::to_vec_pretty(token)?;
        tokio::fs::write(&p, data)
            .await
            .map_err(|e| KuberError::Storage(format!("write {}: {}", p.display(), e)))
    }
}
