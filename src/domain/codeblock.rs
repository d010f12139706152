//! `{% codeblock %}` to fenced code block conversion

use super::language::{extension_of, language_for_extension, language_for_name};
use super::rewriter::{Rewrite, TagRewriter};
use regex::{Captures, Regex};
use std::sync::OnceLock;

pub const CODEBLOCK_MARKER: &str = "{% codeblock";

fn codeblock_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"(?s)\{% codeblock(?:\s+(.*?))?\s*%\}(.*?)\{% endcodeblock %\}").unwrap()
    })
}

fn lang_prefix_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^lang:(\w+)").unwrap())
}

/// Replace every `{% codeblock %}...{% endcodeblock %}` pair with a fenced block.
///
/// Tags without a closing `{% endcodeblock %}` are left as they are.
pub fn convert_codeblock_tags(content: &str) -> Rewrite {
    let mut conversions = 0usize;
    let converted = codeblock_regex().replace_all(content, |captures: &Captures<'_>| {
        conversions += 1;
        let params = captures.get(1).map_or("", |m| m.as_str());
        let body = captures.get(2).map_or("", |m| m.as_str()).trim();
        format!("```{}\n{}\n```", resolve_language(params), body)
    });

    Rewrite {
        content: converted.into_owned(),
        conversions,
    }
}

/// Resolve the fence language for the parameters of a codeblock tag.
///
/// `lang:NAME` wins; otherwise the first filename-looking token with a
/// known extension decides. Anything else is a title and yields no language.
pub fn resolve_language(params: &str) -> String {
    let params = params.trim();
    if params.is_empty() {
        return String::new();
    }

    if params.starts_with("lang:") {
        return match lang_prefix_regex().captures(params) {
            Some(captures) => {
                let name = captures[1].to_lowercase();
                match language_for_name(&name) {
                    Some(language) => language.to_string(),
                    None => name,
                }
            }
            None => String::new(),
        };
    }

    params
        .split_whitespace()
        .filter(|word| word.contains('.'))
        .find_map(|word| {
            let lowered = word.to_lowercase();
            extension_of(&lowered).and_then(language_for_extension)
        })
        .map(str::to_string)
        .unwrap_or_default()
}

/// Rewriter for `{% codeblock %}` tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeblockRewriter;

impl TagRewriter for CodeblockRewriter {
    fn label(&self) -> &'static str {
        "codeblock"
    }

    fn marker(&self) -> &'static str {
        CODEBLOCK_MARKER
    }

    fn rewrite(&self, content: &str) -> Rewrite {
        convert_codeblock_tags(content)
    }

    fn writes_unchanged(&self) -> bool {
        true
    }
}
