use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{anyhow, Result};
use msh_core::gateways::storage::AttachmentStorage;

/// Attachments that are stored in a local directory and
/// served below a public URL path.
#[derive(Debug, Clone)]
pub struct LocalAttachmentStorage {
    upload_dir: PathBuf,
    url_prefix: String,
}

impl LocalAttachmentStorage {
    pub fn new(upload_dir: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            url_prefix: url_prefix.into(),
        }
    }

    fn file_path(&self, url: &str) -> Result<PathBuf> {
        let prefix = self.url_prefix.trim_end_matches('/');
        let path = url
            .strip_prefix(prefix)
            .and_then(|p| p.strip_prefix('/'))
            .ok_or_else(|| anyhow!("Attachment URL '{url}' is outside of '{prefix}'"))?;
        let relative = Path::new(path);
        if path.is_empty()
            || !relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)))
        {
            return Err(anyhow!("Invalid attachment URL '{url}'"));
        }
        Ok(self.upload_dir.join(relative))
    }
}

impl AttachmentStorage for LocalAttachmentStorage {
    fn delete_attachment(&self, url: &str) -> Result<()> {
        let path = self.file_path(url)?;
        log::debug!("Deleting attachment {}", path.display());
        fs::remove_file(&path)?;
        Ok(())
    }
}
