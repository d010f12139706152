//! `{% img %}` to markdown image conversion

use super::language::file_stem_of;
use super::rewriter::{Rewrite, TagRewriter};
use regex::{Captures, Regex};
use std::sync::OnceLock;

pub const IMAGE_MARKER: &str = "{% img";

const ALIGNMENT_KEYWORDS: [&str; 4] = ["left", "center", "centre", "right"];

fn image_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\{% img\s+(.*?)\s*%\}").unwrap())
}

/// A tag that would change, as it appears in the document and after conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub original: String,
    pub converted: String,
}

/// Replace every `{% img %}` tag with markdown image syntax.
pub fn convert_image_tags(content: &str) -> Rewrite {
    let mut conversions = 0usize;
    let converted = image_regex().replace_all(content, |captures: &Captures<'_>| {
        match convert_image_params(&captures[1]) {
            Some(image) => {
                if image != captures[0] {
                    conversions += 1;
                }
                image
            }
            None => captures[0].to_string(),
        }
    });

    Rewrite {
        content: converted.into_owned(),
        conversions,
    }
}

/// List the conversions `convert_image_tags` would make, without applying them.
pub fn preview_image_conversions(content: &str) -> Vec<Conversion> {
    image_regex()
        .captures_iter(content)
        .filter_map(|captures| {
            let original = &captures[0];
            convert_image_params(&captures[1])
                .filter(|converted| converted != original)
                .map(|converted| Conversion {
                    original: original.to_string(),
                    converted,
                })
        })
        .collect()
}

/// Markdown for the parameters of one image tag, or `None` when the tag
/// does not name an image path.
fn convert_image_params(params: &str) -> Option<String> {
    let mut parts = params.split_whitespace().peekable();

    let alignment = parts
        .next_if(|first| {
            ALIGNMENT_KEYWORDS
                .iter()
                .any(|keyword| first.eq_ignore_ascii_case(keyword))
        })
        .map(str::to_lowercase);

    let path = parts.next()?;
    let mut alt = parts.collect::<Vec<_>>().join(" ");
    if alt.is_empty() {
        alt = file_stem_of(path).to_string();
    }

    let image = format!("![{}]({})", alt, path);
    Some(match alignment {
        Some(alignment) => format!("<!-- {} -->\n{}", alignment, image),
        None => image,
    })
}

/// Rewriter for `{% img %}` tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageRewriter;

impl TagRewriter for ImageRewriter {
    fn label(&self) -> &'static str {
        "image tag"
    }

    fn marker(&self) -> &'static str {
        IMAGE_MARKER
    }

    fn rewrite(&self, content: &str) -> Rewrite {
        convert_image_tags(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(input: &str) -> String {
        convert_image_tags(input).content
    }

    #[test]
    fn alignment_is_kept_as_comment() {
        assert_eq!(
            convert("{% img center /images/pic.jpg My photo %}"),
            "<!-- center -->\n![My photo](/images/pic.jpg)"
        );
    }

    #[test]
    fn alt_text_falls_back_to_file_stem() {
        assert_eq!(
            convert("{% img /images/pic.jpg %}"),
            "![pic](/images/pic.jpg)"
        );
        assert_eq!(
            convert("{% img right /images/diagram.v2.png %}"),
            "<!-- right -->\n![diagram.v2](/images/diagram.v2.png)"
        );
    }

    #[test]
    fn empty_params_are_left_unchanged() {
        let result = convert_image_tags("{% img %}");
        assert_eq!(result.content, "{% img %}");
        assert_eq!(result.conversions, 0);
    }

    #[test]
    fn alignment_without_path_is_left_unchanged() {
        assert_eq!(convert("{% img left %}"), "{% img left %}");
    }

    #[test]
    fn alignment_is_case_insensitive_and_lowercased() {
        assert_eq!(
            convert("{% img CENTRE /a/b.png Bridge at night %}"),
            "<!-- centre -->\n![Bridge at night](/a/b.png)"
        );
    }

    #[test]
    fn alignment_only_recognised_as_first_token() {
        assert_eq!(
            convert("{% img /images/pic.jpg left %}"),
            "![left](/images/pic.jpg)"
        );
    }

    #[test]
    fn alt_text_whitespace_is_collapsed() {
        assert_eq!(
            convert("{% img   /images/pic.jpg   A    wide   shot   %}"),
            "![A wide shot](/images/pic.jpg)"
        );
    }

    #[test]
    fn converts_tags_inside_surrounding_text() {
        let input = "Before {% img /a.png %} and\n{% img left /b.gif Bee %} after.\n";
        let result = convert_image_tags(input);

        assert_eq!(
            result.content,
            "Before ![a](/a.png) and\n<!-- left -->\n![Bee](/b.gif) after.\n"
        );
        assert_eq!(result.conversions, 2);
    }

    #[test]
    fn preview_lists_only_changing_tags() {
        let input = "{% img %}\n{% img /images/one.jpg First %}\n{% img center /images/two.jpg %}";
        let preview = preview_image_conversions(input);

        assert_eq!(
            preview,
            vec![
                Conversion {
                    original: "{% img /images/one.jpg First %}".to_string(),
                    converted: "![First](/images/one.jpg)".to_string(),
                },
                Conversion {
                    original: "{% img center /images/two.jpg %}".to_string(),
                    converted: "<!-- center -->\n![two](/images/two.jpg)".to_string(),
                },
            ]
        );
        assert_eq!(convert_image_tags(input).conversions, preview.len());
    }

    #[test]
    fn converting_twice_is_a_no_op() {
        let once = convert("{% img center /images/pic.jpg My photo %}");
        assert!(!once.contains(IMAGE_MARKER));
        assert_eq!(convert(&once), once);
        assert!(preview_image_conversions(&once).is_empty());
    }
}
