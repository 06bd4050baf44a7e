use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

/// Files copied verbatim from the template directory when present.
pub(super) const STATIC_ASSETS: &[&str] = &["styles.css", "banner.png", "favicon.ico"];

pub(super) fn copy_static_assets(template_dir: &Path, output: &Path) -> Result<usize> {
    let mut copied = 0usize;
    for name in STATIC_ASSETS {
        let source = template_dir.join(name);
        if !source.is_file() {
            debug!("skipping missing asset {}", source.display());
            continue;
        }
        let destination = output.join(name);
        fs::copy(&source, &destination).with_context(|| {
            format!(
                "failed to copy static asset from {} to {}",
                source.display(),
                destination.display()
            )
        })?;
        copied += 1;
    }

    Ok(copied)
}
