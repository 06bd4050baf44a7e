use std::fmt;

pub const SHARED_SOURCE_FILE: &str = "source.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Zh,
    En,
}

impl Language {
    /// Every language the listing is published in, in output order.
    pub const ALL: [Language; 2] = [Language::Zh, Language::En];

    /// Language used for the statically rendered pages.
    pub const DEFAULT: Language = Language::Zh;

    pub fn code(self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::En => "en",
        }
    }

    pub fn source_file(self) -> String {
        format!("source.{}.json", self.code())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
