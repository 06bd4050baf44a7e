mod overrides;
mod texts;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::{Author, InfoLink, Language, PackageSource, SourceConfig};

pub use texts::LangTexts;

const PACKAGE_VERSION: &str = "1.0.0";
const PACKAGE_TYPE: &str = "Package";
const PACKAGE_LICENSE: &str = "MIT";

/// Everything the templates and the language switcher see for one language.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageData {
    pub listing_info: ListingInfo,
    pub packages: Vec<PackageView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListingInfo {
    pub name: String,
    pub description: String,
    pub url: String,
    pub banner_image: String,
    pub banner_image_url: String,
    pub author: Author,
    pub info_link: InfoLink,
    pub lang_texts: LangTexts,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageView {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub version: &'static str,
    #[serde(rename = "Type")]
    pub kind: &'static str,
    pub zip_url: String,
    pub author: Author,
    pub dependencies: BTreeMap<String, String>,
    pub keywords: Vec<String>,
    pub license: &'static str,
    pub licenses_url: String,
}

impl LanguageData {
    pub fn build(language: Language, config: &SourceConfig) -> Self {
        let packages = config
            .packages
            .iter()
            .map(|package| PackageView::build(language, package, &config.author))
            .collect();

        Self {
            listing_info: ListingInfo::build(language, config),
            packages,
        }
    }
}

impl ListingInfo {
    pub fn build(language: Language, config: &SourceConfig) -> Self {
        Self {
            name: config.name.clone(),
            description: config.description.clone(),
            url: config.url.clone(),
            banner_image: config.banner_url.clone(),
            banner_image_url: config.banner_url.clone(),
            author: config.author.clone(),
            info_link: config.info_link.clone(),
            lang_texts: LangTexts::for_language(language),
        }
    }
}

impl PackageView {
    pub fn build(language: Language, package: &PackageSource, author: &Author) -> Self {
        Self {
            name: package.name.clone(),
            display_name: overrides::display_name(language, &package.name),
            description: overrides::description(language, &package.name),
            version: PACKAGE_VERSION,
            kind: PACKAGE_TYPE,
            zip_url: package.latest_release().unwrap_or_default().to_string(),
            author: author.clone(),
            dependencies: BTreeMap::new(),
            keywords: Vec::new(),
            license: PACKAGE_LICENSE,
            licenses_url: String::new(),
        }
    }
}
