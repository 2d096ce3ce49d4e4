use std::path::Path;

use tempfile::NamedTempFile;

/// Persist the stored theme JSON, staged through a sibling temp file and
/// renamed into place so a crash mid-save never leaves a torn theme behind.
pub(crate) async fn write_theme_file(
    target: &Path,
    value: &serde_json::Value,
) -> crate::Result<()> {
    let content = serde_json::to_string_pretty(value)?;

    let dir = target.parent().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "theme path has no parent directory",
        )
    })?;
    tokio::fs::create_dir_all(dir).await?;

    let staged = NamedTempFile::new_in(dir)?;
    tokio::fs::write(staged.path(), &content).await?;
    staged.persist(target).map_err(std::io::Error::from)?;

    Ok(())
}
