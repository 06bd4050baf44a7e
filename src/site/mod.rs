mod assets;
mod output;


use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;

use crate::config::{Language, SourceConfig};
use crate::listing::LanguageData;
use crate::template;

use assets::copy_static_assets;
use output::recreate_output_dir;

pub const TEMPLATE_DIR: &str = "Website";
pub const LANG_DATA_FILE: &str = "lang-data.json";
const TEMPLATE_FILES: &[&str] = &["index.html", "app.js"];

#[derive(Debug)]
pub struct BuildSummary {
    pub output: PathBuf,
    pub templates_rendered: usize,
    pub packages: Vec<(Language, usize)>,
    pub assets_copied: usize,
}

/// Serializes as `{ "<code>": LanguageData, ... }` in language order.
struct LangDataFile<'a>(&'a [(Language, LanguageData)]);

impl Serialize for LangDataFile<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(language, data)| (language.code(), data)))
    }
}

pub fn build_site(root: &Path, output: &Path) -> Result<BuildSummary> {
    let output_root = root.join(output);

    let mut languages = Vec::with_capacity(Language::ALL.len());
    for language in Language::ALL {
        let (path, config) = SourceConfig::load_for_language(root, language)?;
        info!("loaded {} source from {}", language, path.display());
        for warning in config.url_warnings() {
            warn!("{}: {}", path.display(), warning);
        }
        languages.push((language, LanguageData::build(language, &config)));
    }

    let default_data = languages
        .iter()
        .find(|(language, _)| *language == Language::DEFAULT)
        .map(|(_, data)| data)
        .context("default language data missing")?;
    let context =
        serde_json::to_value(default_data).context("failed to serialize template data")?;

    if recreate_output_dir(root, &output_root)? {
        info!("cleared previous output in {}", output_root.display());
    }

    let template_dir = root.join(TEMPLATE_DIR);
    for name in TEMPLATE_FILES {
        render_template_file(&template_dir, &output_root, name, &context)?;
    }

    info!("writing {}", LANG_DATA_FILE);
    write_lang_data(&output_root, &languages)?;

    let assets_copied = copy_static_assets(&template_dir, &output_root)?;
    info!("copied {} static assets", assets_copied);

    Ok(BuildSummary {
        output: output_root,
        templates_rendered: TEMPLATE_FILES.len(),
        packages: languages
            .iter()
            .map(|(language, data)| (*language, data.packages.len()))
            .collect(),
        assets_copied,
    })
}

fn render_template_file(
    template_dir: &Path,
    output_root: &Path,
    name: &str,
    context: &JsonValue,
) -> Result<()> {
    let source_path = template_dir.join(name);
    let source = fs::read_to_string(&source_path)
        .with_context(|| format!("failed to read template {}", source_path.display()))?;

    info!("rendering {}", name);
    let rendered = template::render(&source, context);

    let destination = output_root.join(name);
    fs::write(&destination, rendered)
        .with_context(|| format!("failed to write {}", destination.display()))?;
    Ok(())
}

fn write_lang_data(output_root: &Path, languages: &[(Language, LanguageData)]) -> Result<()> {
    let json = serde_json::to_string_pretty(&LangDataFile(languages))
        .context("failed to serialize language data")?;
    let destination = output_root.join(LANG_DATA_FILE);
    fs::write(&destination, json)
        .with_context(|| format!("failed to write {}", destination.display()))?;
    Ok(())
}
