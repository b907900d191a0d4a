// File: crates/benchplot-core/src/output.rs
// Summary: Atomic persistence of encoded chart images (temp file + rename).

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{ChartError, Result};

/// Write `bytes` to `path` so that readers only ever see the old file or the
/// complete new one. The parent directory must already exist.
///
/// The artifact ends up with the mode a plain `fs::write` would give it: an
/// existing target keeps its permissions, a new one gets `0o666` minus umask.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let fail = |source| ChartError::OutputWriteFailure { path: path.to_path_buf(), source };
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let existing = fs::metadata(path).ok().filter(|m| m.is_file()).map(|m| m.permissions());

    let mut builder = tempfile::Builder::new();
    builder.prefix(".benchplot-");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // passed to open(2), so the process umask applies
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    // The temp file lives next to the target so the rename stays on one filesystem;
    // it is deleted on drop if anything below fails.
    let mut tmp = builder.tempfile_in(parent).map_err(fail)?;
    tmp.write_all(bytes).map_err(fail)?;
    if let Some(perms) = existing {
        tmp.as_file().set_permissions(perms).map_err(fail)?;
    }
    tmp.as_file().sync_all().map_err(fail)?;
    tmp.persist(path).map_err(|e| fail(e.error))?;
    Ok(())
}
