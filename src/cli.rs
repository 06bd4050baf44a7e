use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_OUTPUT: &str = "dist";

#[derive(Parser, Clone, Debug)]
#[command(name = "vcc-listing", version)]
#[command(
    about = "Render the bilingual VCC package listing website",
    long_about = "vcc-listing reads source.zh.json and source.en.json (or a shared source.json), \n\
renders Website/index.html and Website/app.js with the Chinese listing data, and writes\n\
lang-data.json so the page can switch languages in the browser. Static assets from\n\
Website/ are copied alongside. The output directory is recreated on every run."
)]
pub struct Cli {
    #[arg(
        default_value = DEFAULT_OUTPUT,
        help = "Directory to write the generated site into",
        long_help = "Directory that receives the rendered site. Relative paths are resolved against the current directory. Any existing contents are deleted first."
    )]
    pub output: PathBuf,
}

impl Cli {
    pub fn build() -> Self {
        <Self as Parser>::parse()
    }
}
