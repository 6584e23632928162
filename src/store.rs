use std::{
    io,
    path::{Path, PathBuf},
};

use tokio::{fs, io::AsyncWriteExt};

const FILE_MODE: u32 = 0o644;

/// The single file a saved document lives in.
#[derive(Clone, Debug)]
pub struct ConfigStore {
    target: PathBuf,
}

impl ConfigStore {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Replaces the target with `content`.
    ///
    /// The bytes go to a sibling temp file first, which is then renamed over
    /// the target, so readers see either the old or the new file in full.
    pub async fn replace(&self, content: &[u8]) -> io::Result<()> {
        let tmp = self.temp_path();

        if let Err(e) = write_new(&tmp, content).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(e);
        }

        if let Err(e) = fs::rename(&tmp, &self.target).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(e);
        }

        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let suffix: String = std::iter::repeat_with(fastrand::alphanumeric)
            .take(8)
            .collect();

        self.target.with_file_name(format!(".{name}.{suffix}.tmp"))
    }
}

async fn write_new(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    options.mode(FILE_MODE);

    let mut file = options.open(path).await?;
    file.write_all(content).await?;
    file.sync_all().await?;

    // umask may have narrowed the creation mode
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, std::fs::Permissions::from_mode(FILE_MODE)).await?;
    }

    Ok(())
}
