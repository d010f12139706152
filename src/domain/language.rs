//! Lookup tables mapping language names and file extensions to fence identifiers

/// Language names accepted after `lang:` and their fence identifiers.
pub const LANGUAGE_ALIASES: &[(&str, &str)] = &[
    ("c++", "cpp"),
    ("c", "c"),
    ("python", "python"),
    ("java", "java"),
    ("javascript", "javascript"),
    ("js", "javascript"),
    ("html", "html"),
    ("css", "css"),
    ("bash", "bash"),
    ("shell", "bash"),
    ("ruby", "ruby"),
    ("php", "php"),
    ("sql", "sql"),
    ("xml", "xml"),
    ("json", "json"),
    ("yaml", "yaml"),
    ("yml", "yaml"),
    ("markdown", "markdown"),
    ("md", "markdown"),
    ("text", "text"),
    ("plain", "text"),
    ("go", "go"),
    ("rust", "rust"),
    ("swift", "swift"),
    ("kotlin", "kotlin"),
    ("scala", "scala"),
    ("r", "r"),
    ("matlab", "matlab"),
    ("perl", "perl"),
    ("vim", "vim"),
    ("diff", "diff"),
    ("dockerfile", "dockerfile"),
    ("makefile", "makefile"),
];

/// File extensions (lowercase, leading dot) and their fence identifiers.
pub const EXTENSION_LANGUAGES: &[(&str, &str)] = &[
    (".cpp", "cpp"),
    (".cc", "cpp"),
    (".cxx", "cpp"),
    (".c++", "cpp"),
    (".hpp", "cpp"),
    (".h", "cpp"),
    (".c", "c"),
    (".py", "python"),
    (".java", "java"),
    (".js", "javascript"),
    (".ts", "typescript"),
    (".html", "html"),
    (".htm", "html"),
    (".css", "css"),
    (".scss", "scss"),
    (".sass", "sass"),
    (".sh", "bash"),
    (".bash", "bash"),
    (".zsh", "bash"),
    (".rb", "ruby"),
    (".php", "php"),
    (".sql", "sql"),
    (".xml", "xml"),
    (".json", "json"),
    (".yaml", "yaml"),
    (".yml", "yaml"),
    (".md", "markdown"),
    (".markdown", "markdown"),
    (".txt", "text"),
    (".go", "go"),
    (".rs", "rust"),
    (".swift", "swift"),
    (".kt", "kotlin"),
    (".kts", "kotlin"),
    (".scala", "scala"),
    (".r", "r"),
    (".m", "matlab"),
    (".pl", "perl"),
    (".vim", "vim"),
    (".diff", "diff"),
    (".patch", "diff"),
    (".dockerfile", "dockerfile"),
    (".makefile", "makefile"),
    (".make", "makefile"),
    (".gradle", "gradle"),
    (".toml", "toml"),
    (".ini", "ini"),
    (".cfg", "ini"),
    (".conf", "text"),
];

/// Look up a lowercase language name.
pub fn language_for_name(name: &str) -> Option<&'static str> {
    lookup(LANGUAGE_ALIASES, name)
}

/// Look up a lowercase extension such as `.py`.
pub fn language_for_extension(extension: &str) -> Option<&'static str> {
    lookup(EXTENSION_LANGUAGES, extension)
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, language)| *language)
}

/// Extension of the last path segment, including the dot.
///
/// Leading dots of the segment do not start an extension, so `.bashrc`
/// has none while `main.cpp` has `.cpp`.
pub fn extension_of(word: &str) -> Option<&str> {
    let segment = word.rsplit('/').next().unwrap_or(word);
    let stem_start = segment.len() - segment.trim_start_matches('.').len();
    let dot = segment[stem_start..].rfind('.')?;
    Some(&segment[stem_start + dot..])
}

/// Last path segment with its extension removed.
pub fn file_stem_of(path: &str) -> &str {
    let segment = path.rsplit('/').next().unwrap_or(path);
    match extension_of(segment) {
        Some(extension) => &segment[..segment.len() - extension.len()],
        None => segment,
    }
}
