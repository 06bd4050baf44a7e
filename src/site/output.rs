use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::TEMPLATE_DIR;

/// Deletes `output` (if present) and creates it again, empty.
///
/// Refuses directories whose removal would take sources with them.
pub(super) fn recreate_output_dir(root: &Path, output: &Path) -> Result<bool> {
    ensure_disposable(root, output)?;

    let removed = remove_path(output)?;
    fs::create_dir_all(output)
        .with_context(|| format!("failed to create output directory {}", output.display()))?;
    Ok(removed)
}

fn ensure_disposable(root: &Path, output: &Path) -> Result<()> {
    if !output.exists() {
        return Ok(());
    }

    let output = canonical(output)?;
    let root = canonical(root)?;
    if root.starts_with(&output) {
        bail!(
            "refusing to use {} as output: it contains the project root",
            output.display()
        );
    }

    let templates = root.join(TEMPLATE_DIR);
    if templates.starts_with(&output) || output.starts_with(&templates) {
        bail!(
            "refusing to use {} as output: it overlaps the {} template directory",
            output.display(),
            TEMPLATE_DIR
        );
    }

    Ok(())
}

fn canonical(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).with_context(|| format!("failed to resolve {}", path.display()))
}

fn remove_path(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }

    if path.is_dir() {
        fs::remove_dir_all(path)
            .with_context(|| format!("failed to remove directory {}", path.display()))?;
    } else {
        fs::remove_file(path)
            .with_context(|| format!("failed to remove file {}", path.display()))?;
    }

    Ok(true)
}
