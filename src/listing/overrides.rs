use crate::config::Language;

type OverrideTable = &'static [(&'static str, &'static str)];

const DISPLAY_NAMES_ZH: OverrideTable = &[("com.rlvrc.cn", "中文活动日历")];
const DISPLAY_NAMES_EN: OverrideTable = &[("com.rlvrc.cn", "Chinese Events Calendar")];

const DESCRIPTIONS_ZH: OverrideTable = &[(
    "com.rlvrc.cn",
    "在VRChat世界中显示中文节日和活动日历的组件",
)];
const DESCRIPTIONS_EN: OverrideTable = &[(
    "com.rlvrc.cn",
    "Component for displaying Chinese holidays and events calendar in VRChat worlds",
)];

fn lookup(table: OverrideTable, package: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(name, _)| *name == package)
        .map(|(_, text)| *text)
}

pub fn display_name(language: Language, package: &str) -> String {
    let table = match language {
        Language::Zh => DISPLAY_NAMES_ZH,
        Language::En => DISPLAY_NAMES_EN,
    };
    lookup(table, package)
        .map(str::to_string)
        .unwrap_or_else(|| title_case(last_segment(package)))
}

pub fn description(language: Language, package: &str) -> String {
    let table = match language {
        Language::Zh => DESCRIPTIONS_ZH,
        Language::En => DESCRIPTIONS_EN,
    };
    lookup(table, package)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Package {package}"))
}

fn last_segment(package: &str) -> &str {
    package.rsplit('.').next().unwrap_or(package)
}

/// Upper-cases the first character and lower-cases the rest.
fn title_case(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
