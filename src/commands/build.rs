use std::env;
use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::Cli;
use crate::config::Language;
use crate::site::{BuildSummary, build_site};

pub fn run_build_command(args: Cli) -> Result<()> {
    let root = env::current_dir().context("failed to resolve current directory")?;
    let summary = build_site(&root, &args.output)?;
    for line in summary_lines(&args.output, &summary) {
        println!("{line}");
    }
    Ok(())
}

fn summary_lines(output: &Path, summary: &BuildSummary) -> Vec<String> {
    let packages = summary
        .packages
        .iter()
        .map(|(language, count)| format!("{language}: {count}"))
        .collect::<Vec<_>>()
        .join(", ");

    vec![
        format!("Build complete: {}", summary.output.display()),
        format!(
            "  {} templates rendered, {} static assets copied, packages ({packages})",
            summary.templates_rendered, summary.assets_copied
        ),
        format!(
            "  Default page: {} ({}); use the page's language button to switch",
            output.join("index.html").display(),
            Language::DEFAULT
        ),
        format!(
            "  Preview: cd {} && python -m http.server 8000",
            output.display()
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn summary_lists_package_counts_per_language() {
        let summary = BuildSummary {
            output: PathBuf::from("/work/site/dist"),
            templates_rendered: 2,
            packages: vec![(Language::Zh, 3), (Language::En, 1)],
            assets_copied: 2,
        };

        let lines = summary_lines(Path::new("dist"), &summary);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Build complete: /work/site/dist");
        assert_eq!(
            lines[1],
            "  2 templates rendered, 2 static assets copied, packages (zh: 3, en: 1)"
        );
        assert!(lines[2].contains(&Path::new("dist").join("index.html").display().to_string()));
        assert!(lines[2].contains("(zh)"));
        assert_eq!(lines[3], "  Preview: cd dist && python -m http.server 8000");
    }

    #[test]
    fn summary_handles_empty_listing() {
        let summary = BuildSummary {
            output: PathBuf::from("out"),
            templates_rendered: 2,
            packages: Vec::new(),
            assets_copied: 0,
        };

        let lines = summary_lines(Path::new("out"), &summary);
        assert!(lines[1].ends_with("packages ()"));
    }
}
