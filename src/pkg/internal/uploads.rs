use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tokio::{fs, io::AsyncWriteExt};
use uuid::Uuid;

use crate::prelude::Result;

/// Directory under the media root that item images are written to.
pub const UPLOAD_TO: &str = "uploads";

/// Upper bound on a stored reference (`uploads/<name>`), in characters.
pub const MAX_REFERENCE_LEN: usize = 100;

const SUFFIX_LEN: usize = 7;

#[derive(Debug, Clone)]
pub struct MediaStorage {
    root: PathBuf,
}

impl MediaStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        MediaStorage { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes `data` under `<root>/uploads/` and returns the stored reference.
    /// An existing file is never overwritten; on a clash a random suffix is
    /// inserted before the extension.
    pub async fn save(&self, file_name: &str, data: &[u8]) -> Result<String> {
        let dir = self.root.join(UPLOAD_TO);
        fs::create_dir_all(&dir).await?;

        let clean = valid_file_name(file_name);
        let (stem, ext) = split_extension(&clean);
        let mut candidate = fit_name(stem, "", ext);
        loop {
            let open = fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(dir.join(&candidate))
                .await;
            match open {
                Ok(mut file) => {
                    file.write_all(data).await?;
                    file.flush().await?;
                    break;
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    let suffix = random_suffix();
                    tracing::debug!("{} already taken, retrying with _{}", candidate, suffix);
                    candidate = fit_name(stem, &format!("_{}", suffix), ext);
                }
                Err(e) => return Err(e.into()),
            }
        }

        let reference = format!("{}/{}", UPLOAD_TO, candidate);
        tracing::info!("stored upload at {}", &reference);
        Ok(reference)
    }
}

fn random_suffix() -> String {
    Uuid::new_v4().simple().to_string()[..SUFFIX_LEN].to_string()
}

/// Keeps only the final path component and the characters that are safe in
/// a file name; whitespace becomes `_`.
pub fn valid_file_name(raw: &str) -> String {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or("");
    let cleaned: String = base
        .trim()
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_alphanumeric() || matches!(*c, '-' | '_' | '.'))
        .collect();
    match cleaned.as_str() {
        "" | "." | ".." => "upload".to_string(),
        _ => cleaned,
    }
}

fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(0) | None => (name, ""),
        Some(idx) => name.split_at(idx),
    }
}

fn fit_name(stem: &str, suffix: &str, ext: &str) -> String {
    let prefix = UPLOAD_TO.len() + 1;
    let fixed = prefix + suffix.chars().count();
    let ext: String = ext
        .chars()
        .take(MAX_REFERENCE_LEN.saturating_sub(fixed + 1))
        .collect();
    let budget = MAX_REFERENCE_LEN.saturating_sub(fixed + ext.chars().count());
    let stem: String = stem.chars().take(budget.max(1)).collect();
    format!("{}{}{}", stem, suffix, ext)
}
