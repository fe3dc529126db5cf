//! Replace a file in one rename so readers never see a partial write.

use std::io::Write;
use std::path::Path;

use anyhow::Context;

/// Write `text` to a temporary file next to `path`, then rename it over `path`.
pub fn write_atomic(path: &Path, text: &str) -> anyhow::Result<()> {
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut staged = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to stage a temporary file in {}", dir.display()))?;
    staged
        .write_all(text.as_bytes())
        .and_then(|()| staged.as_file().sync_all())
        .with_context(|| format!("failed to write staged output for {}", path.display()))?;
    staged
        .persist(path)
        .map_err(|error| error.error)
        .with_context(|| format!("failed to replace {}", path.display()))?;

    tracing::debug!(path = %path.display(), bytes = text.len(), "file replaced");
    Ok(())
}
