use serde::Serialize;

use crate::config::Language;

/// Fixed UI labels shipped with each language's data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LangTexts {
    pub switch_lang: &'static str,
    pub search_placeholder: &'static str,
    pub add_to_vcc: &'static str,
    pub copy: &'static str,
    pub published_by: &'static str,
    pub name_header: &'static str,
    pub type_header: &'static str,
    pub add_to_vcc_btn: &'static str,
    pub download_zip: &'static str,
}

// The switch label names the language the button switches *to*.
const ZH_TEXTS: LangTexts = LangTexts {
    switch_lang: "English",
    search_placeholder: "搜索...",
    add_to_vcc: "添加到VCC",
    copy: "复制",
    published_by: "发布者",
    name_header: "名称",
    type_header: "类型",
    add_to_vcc_btn: "添加至 VCC",
    download_zip: "下载.ZIP",
};

const EN_TEXTS: LangTexts = LangTexts {
    switch_lang: "中文",
    search_placeholder: "Search...",
    add_to_vcc: "Add to VCC",
    copy: "Copy",
    published_by: "Published by",
    name_header: "Name",
    type_header: "Type",
    add_to_vcc_btn: "Add to VCC",
    download_zip: "Download .ZIP",
};

impl LangTexts {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::Zh => ZH_TEXTS,
            Language::En => EN_TEXTS,
        }
    }
}
