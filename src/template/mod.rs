//! A small directive expander for the listing's page and script templates.
//!
//! Directives are resolved in a fixed order: whitespace markers, conditionals,
//! loops, then plain variables. Blocks are not parsed recursively, so a loop
//! body may contain variables but not another loop or conditional.
//! Every miss renders as an empty string.

mod lookup;

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde_json::Value;

pub use lookup::{interpolate, is_truthy, resolve, stringify};

lazy_static! {
    static ref TRIM_OPEN: Regex = Regex::new(r"\{\{~\s*").expect("valid open marker pattern");
    static ref TRIM_CLOSE: Regex = Regex::new(r"\s*~\}\}").expect("valid close marker pattern");
    static ref CONDITIONAL: Regex =
        Regex::new(r"(?s)\{\{if\s+([^;]+);\s*\}\}(.*?)\{\{end;\s*\}\}")
            .expect("valid conditional pattern");
    static ref LOOP: Regex =
        Regex::new(r"(?s)\{\{for\s+(\w+)\s+in\s+(\w+)\s*\}\}(.*?)\{\{end\s*\}\}")
            .expect("valid loop pattern");
    static ref VARIABLE: Regex =
        Regex::new(r"\{\{\s*([^}]+)\s*\}\}").expect("valid variable pattern");
}

pub fn render(template: &str, data: &Value) -> String {
    let text = strip_whitespace_markers(template);
    let text = expand_conditionals(&text, data);
    let text = expand_loops(&text, data);
    interpolate_variables(&text, data)
}

/// `{{~ x ~}}` becomes `{{x}}`. Text around the marker is left alone.
fn strip_whitespace_markers(text: &str) -> String {
    let opened = TRIM_OPEN.replace_all(text, "{{");
    TRIM_CLOSE.replace_all(&opened, "}}").into_owned()
}

fn expand_conditionals(text: &str, data: &Value) -> String {
    CONDITIONAL
        .replace_all(text, |caps: &Captures| match resolve(data, &caps[1]) {
            Some(value) if is_truthy(value) => caps[2].to_string(),
            _ => String::new(),
        })
        .into_owned()
}

fn expand_loops(text: &str, data: &Value) -> String {
    LOOP.replace_all(text, |caps: &Captures| {
        expand_loop(&caps[1], &caps[2], &caps[3], data).unwrap_or_default()
    })
    .into_owned()
}

/// Field values are stringified like variables, so a `null` field renders empty.
fn expand_loop(item: &str, array: &str, body: &str, data: &Value) -> Option<String> {
    let elements = data.as_object()?.get(array)?.as_array()?;
    let mut expanded = String::new();
    for element in elements {
        let mut iteration = body.to_string();
        for (field, value) in element.as_object()? {
            let marker = format!("{{{{ {item}.{field} }}}}");
            iteration = iteration.replace(&marker, &stringify(value).unwrap_or_default());
        }
        expanded.push_str(&iteration);
    }
    Some(expanded)
}

fn interpolate_variables(text: &str, data: &Value) -> String {
    VARIABLE
        .replace_all(text, |caps: &Captures| {
            interpolate(data, &caps[1]).unwrap_or_default()
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn interpolates_nested_variables() {
        let data = json!({ "listingInfo": { "Name": "Listing", "LangTexts": { "copy": "Copy" } } });
        let rendered = render(
            "<h1>{{ listingInfo.Name }}</h1><button>{{listingInfo.LangTexts.copy}}</button>",
            &data,
        );
        assert_eq!(rendered, "<h1>Listing</h1><button>Copy</button>");
    }

    #[test]
    fn misses_render_empty() {
        let data = json!({ "a": { "b": null }, "s": "text" });
        assert_eq!(render("[{{ a.b }}|{{ a.c }}|{{ s.length }}|{{ missing }}]", &data), "[|||]");
    }

    #[test]
    fn non_string_values_render_as_json() {
        let data = json!({ "n": 3, "flag": false, "deps": {}, "keywords": [] });
        assert_eq!(
            render("{{ n }} {{ flag }} {{ deps }} {{ keywords }}", &data),
            "3 false {} []"
        );
    }

    #[test]
    fn whitespace_markers_are_normalized_without_trimming() {
        assert_eq!(strip_whitespace_markers("a {{~  x  ~}} b"), "a {{x}} b");
        assert_eq!(strip_whitespace_markers("{{~ end; ~}}"), "{{end;}}");
        assert_eq!(render("a\n{{~ x ~}}\nb", &json!({ "x": "X" })), "a\nX\nb");
    }

    #[test]
    fn falsy_conditions_drop_the_block() {
        let data = json!({ "info": { "off": false, "zero": 0, "blank": "", "none": null } });
        for path in ["info.off", "info.zero", "info.blank", "info.none", "info.missing", "nope.x"] {
            let template = format!("<{{{{if {path}; }}}}shown{{{{end;}}}}>");
            assert_eq!(render(&template, &data), "<>", "{path} should hide the block");
        }
    }

    #[test]
    fn truthy_conditions_keep_the_block_literally() {
        let data = json!({ "info": { "url": "https://example.com" } });
        let rendered = expand_conditionals("{{if info.url; }}\n<a>link</a>\n{{end;}}", &data);
        assert_eq!(rendered, "\n<a>link</a>\n");
    }

    #[test]
    fn conditional_blocks_match_non_greedily() {
        let data = json!({ "yes": true, "no": false });
        let rendered = render("{{if no; }}A{{end;}}-{{if yes; }}B{{end;}}", &data);
        assert_eq!(rendered, "-B");
    }

    #[test]
    fn conditional_content_still_interpolates() {
        let data = json!({ "info": { "url": "https://example.com", "text": "About" } });
        let rendered = render(
            "{{~ if info.url; ~}}<a href=\"{{ info.url }}\">{{ info.text }}</a>{{~ end; ~}}",
            &data,
        );
        assert_eq!(rendered, "<a href=\"https://example.com\">About</a>");
    }

    #[test]
    fn loops_concatenate_iterations() {
        let data = json!({ "items": [{ "x": "1" }, { "x": "2" }] });
        assert_eq!(render("{{for item in items}}{{ item.x }}{{end}}", &data), "12");
    }

    #[test]
    fn loops_over_missing_or_empty_arrays_render_empty() {
        let data = json!({ "items": [], "scalar": "abc", "mixed": [{ "x": 1 }, "oops"] });
        assert_eq!(render("[{{for item in items}}{{ item.x }}{{end}}]", &data), "[]");
        assert_eq!(render("[{{for item in missing}}{{ item.x }}{{end}}]", &data), "[]");
        assert_eq!(render("[{{for item in scalar}}{{ item.x }}{{end}}]", &data), "[]");
        assert_eq!(render("[{{for item in mixed}}{{ item.x }}{{end}}]", &data), "[]");
    }

    #[test]
    fn loop_fields_require_exact_markers() {
        let data = json!({ "packages": [{ "Name": "a", "Count": 2, "Gone": null }] });
        let rendered = render(
            "{{for package in packages}}{{ package.Name }}/{{package.Name}}/{{ package.Count }}/{{ package.Gone }}/{{ package.Other }};{{end}}",
            &data,
        );
        // The tight marker falls through to variable lookup, which misses.
        assert_eq!(rendered, "a//2//;");
    }

    #[test]
    fn loop_bodies_can_reference_outer_variables() {
        let data = json!({
            "texts": { "download": "Download" },
            "packages": [{ "ZipUrl": "a.zip" }, { "ZipUrl": "b.zip" }]
        });
        let rendered = render(
            "{{~ for package in packages ~}}<a href=\"{{ package.ZipUrl }}\">{{ texts.download }}</a>{{~ end ~}}",
            &data,
        );
        assert_eq!(
            rendered,
            "<a href=\"a.zip\">Download</a><a href=\"b.zip\">Download</a>"
        );
    }

    #[test]
    fn resolved_text_is_stable_under_rerendering() {
        let data = json!({ "name": "Listing", "items": [{ "x": "1" }] });
        let once = render("<p>{{ name }}</p>{{for item in items}}<i>{{ item.x }}</i>{{end}}", &data);
        assert_eq!(render(&once, &data), once);
        assert_eq!(render("plain { text } only", &data), "plain { text } only");
    }
}
