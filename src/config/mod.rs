mod language;
mod model;

// Re-export public items
pub use language::Language;
pub use model::{Author, InfoLink, PackageSource, SourceConfig};
