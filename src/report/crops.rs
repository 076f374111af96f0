use std::path::{Path, PathBuf};

use crate::foundation::error::{LintError, LintResult};
use crate::session::LintSession;

/// Write one PNG per finding whose region is visible in the session snapshot.
///
/// Files are named `finding-<n>-<check>.png` with `n` the 1-based position in the finding list.
/// Returns the written paths; nothing is written without a snapshot.
#[tracing::instrument(skip(session))]
pub fn write_crops(session: &LintSession, dir: &Path) -> LintResult<Vec<PathBuf>> {
    let Some(snapshot) = session.context().snapshot.as_ref() else {
        return Ok(Vec::new());
    };
    std::fs::create_dir_all(dir).map_err(|e| {
        LintError::snapshot(format!("create crops dir '{}': {e}", dir.display()))
    })?;

    let window = session.context().window_size;
    let mut written = Vec::new();
    for (n, finding) in session.findings().iter().enumerate() {
        let Some(region) = finding.crop.and_then(|r| snapshot.crop(r, window)) else {
            continue;
        };
        let path = dir.join(format!("finding-{:03}-{}.png", n + 1, finding.check));
        region
            .save_with_format(&path, image::ImageFormat::Png)
            .map_err(|e| LintError::snapshot(format!("write png '{}': {e}", path.display())))?;
        written.push(path);
    }
    tracing::debug!(count = written.len(), "wrote crops");
    Ok(written)
}
