pub const APP_DIR_NAME: &str = "qalyzer";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const ANALYSES_DIR_NAME: &str = "analyses";

pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const ANTHROPIC_API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

pub const SUPPORTED_PROVIDERS: &[&str] = &["openai", "anthropic"];
pub const SUPPORTED_OUTPUT_FORMATS: &[&str] = &["text", "json"];

/// Upload limit for source files.
pub const MAX_FILE_SIZE: u64 = 1024 * 1024;
pub const MIN_CODE_LENGTH: usize = 10;

/// Allowed upload extensions and the language each one implies.
pub const SUPPORTED_FILE_EXTENSIONS: &[(&str, &str)] = &[
    ("rb", "Ruby"),
    ("py", "Python"),
    ("js", "JavaScript"),
    ("ts", "TypeScript"),
    ("cpp", "C++"),
    ("c", "C"),
    ("java", "Java"),
    ("php", "PHP"),
    ("go", "Go"),
    ("rs", "Rust"),
    ("sql", "SQL"),
    ("html", "HTML"),
    ("css", "CSS"),
    ("sh", "Bash"),
    ("bash", "Bash"),
];

pub const DEFAULT_FILE_TYPE: &str = "text";

pub fn language_for_extension(extension: &str) -> Option<&'static str> {
    let extension = extension.trim_start_matches('.').to_lowercase();
    SUPPORTED_FILE_EXTENSIONS
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, language)| *language)
}
