use std::fs;
use std::path::Path;
use crate::config::constants::{language_for_extension, MAX_FILE_SIZE, MIN_CODE_LENGTH, SUPPORTED_FILE_EXTENSIONS};
use crate::enums::analysis_mode::Mode;
use crate::errors::{QalyzerError, QalyzerResult};
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::source_file::SourceFile;

/// Turns pasted code and/or an uploaded file into an [`AnalysisRequest`].
pub struct IntakeService;

impl IntakeService {
    /// Reads a file from disk, refusing oversized files before loading them.
    pub fn read_source_file(path: &Path) -> QalyzerResult<SourceFile> {
        let display = path.display().to_string();
        let metadata = fs::metadata(path).map_err(|e| QalyzerError::file_error(&display, "stat", &e.to_string()))?;

        if metadata.len() > MAX_FILE_SIZE {
            return Err(Self::too_large(metadata.len()));
        }

        let bytes = fs::read(path).map_err(|e| QalyzerError::file_error(&display, "read", &e.to_string()))?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or(display);

        Ok(SourceFile::new(&file_name, bytes))
    }

    /// Checks type and size, then decodes the content: lossy UTF-8, LF line
    /// endings, trimmed, non-empty.
    pub fn file_content(file: &SourceFile) -> QalyzerResult<String> {
        let extension = file.extension().unwrap_or_default();
        if language_for_extension(&extension).is_none() {
            let allowed: Vec<String> = SUPPORTED_FILE_EXTENSIONS.iter().map(|(ext, _)| format!(".{}", ext)).collect();
            return Err(QalyzerError::validation_error(
                "file",
                &file.file_name,
                "unsupported file type",
                Some(&format!("Allowed extensions: {}", allowed.join(" "))),
            ));
        }

        if file.size() > MAX_FILE_SIZE {
            return Err(Self::too_large(file.size()));
        }

        let content = String::from_utf8_lossy(&file.bytes)
            .replace("\r\n", "\n")
            .trim()
            .to_string();

        if content.is_empty() {
            return Err(QalyzerError::validation_error("file", &file.file_name, "file is empty", None));
        }

        Ok(content)
    }

    pub fn detect_language(file: &SourceFile) -> Option<&'static str> {
        file.extension().and_then(|ext| language_for_extension(&ext))
    }

    /// `foo_bar-baz.rb` gives "Analyse de Foo Bar Baz".
    pub fn title_for(file: &SourceFile) -> String {
        let words: Vec<String> = file
            .stem()
            .replace(['_', '-'], " ")
            .split_whitespace()
            .map(capitalize)
            .collect();

        format!("Analyse de {}", words.join(" "))
    }

    /// Pasted code wins over file content; the file still supplies language
    /// and title when those are not given.
    pub fn build_request(
        code: Option<&str>,
        file: Option<&SourceFile>,
        language: Option<&str>,
        title: Option<&str>,
        mode: Mode,
    ) -> QalyzerResult<AnalysisRequest> {
        let pasted = code.map(str::trim).filter(|code| !code.is_empty());
        let file_content = match file {
            Some(file) => Some(Self::file_content(file)?),
            None => None,
        };

        let code = match (pasted, file_content.as_deref()) {
            (Some(pasted), _) => pasted.to_string(),
            (None, Some(content)) => content.to_string(),
            (None, None) => {
                return Err(QalyzerError::user_input_error(
                    "code",
                    "pasted code or a source file",
                    "Pass --code or --file",
                ))
            }
        };

        if code.chars().count() < MIN_CODE_LENGTH {
            return Err(QalyzerError::validation_error(
                "code",
                &code,
                &format!("must be at least {} characters", MIN_CODE_LENGTH),
                None,
            ));
        }

        let language = language
            .map(str::trim)
            .filter(|language| !language.is_empty())
            .map(str::to_string)
            .or_else(|| file.and_then(Self::detect_language).map(str::to_string))
            .unwrap_or_default();

        let title = title
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .map(str::to_string)
            .or_else(|| file.map(Self::title_for));

        log::debug!("📥 Intake: {} chars of {} code, mode {}", code.chars().count(), language, mode);

        Ok(AnalysisRequest::new(&language, &code, mode).with_title(title))
    }

    fn too_large(size: u64) -> QalyzerError {
        QalyzerError::validation_error(
            "file",
            &format!("{} bytes", size),
            "file too large (maximum 1MB)",
            None,
        )
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ruby_file() -> SourceFile {
        SourceFile::new("user_controller.rb", b"class UserController\r\n  def index; end\r\nend\r\n".to_vec())
    }

    #[test]
    fn test_file_content_is_normalized() {
        let content = IntakeService::file_content(&ruby_file()).unwrap();
        assert_eq!(content, "class UserController\n  def index; end\nend");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let file = SourceFile::new("a.py", vec![b'p', b'r', b'i', b'n', b't', 0xFF, b'(', b')']);
        let content = IntakeService::file_content(&file).unwrap();
        assert_eq!(content, "print\u{FFFD}()");
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let file = SourceFile::new("notes.txt", b"some text here".to_vec());
        assert!(matches!(
            IntakeService::file_content(&file),
            Err(QalyzerError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_oversized_file_is_rejected() {
        let file = SourceFile::new("big.js", vec![b'a'; (MAX_FILE_SIZE + 1) as usize]);
        assert!(IntakeService::file_content(&file).is_err());
    }

    #[test]
    fn test_blank_file_is_rejected() {
        let file = SourceFile::new("empty.go", b"  \r\n\t".to_vec());
        assert!(IntakeService::file_content(&file).is_err());
    }

    #[test]
    fn test_file_supplies_language_and_title() {
        let request = IntakeService::build_request(None, Some(&ruby_file()), None, None, Mode::Standard).unwrap();
        assert_eq!(request.language, "Ruby");
        assert_eq!(request.title.as_deref(), Some("Analyse de User Controller"));
        assert!(request.code.starts_with("class UserController"));
    }

    #[test]
    fn test_pasted_code_wins_over_file() {
        let request = IntakeService::build_request(
            Some("puts 'pasted code'"),
            Some(&ruby_file()),
            Some("Ruby"),
            Some("Mon titre"),
            Mode::Quick,
        )
        .unwrap();

        assert_eq!(request.code, "puts 'pasted code'");
        assert_eq!(request.title.as_deref(), Some("Mon titre"));
        assert_eq!(request.mode, Mode::Quick);
    }

    #[test]
    fn test_short_code_is_rejected() {
        let result = IntakeService::build_request(Some("x = 1"), None, Some("Python"), None, Mode::Standard);
        assert!(matches!(result, Err(QalyzerError::ValidationError { .. })));
    }

    #[test]
    fn test_missing_code_and_file_is_rejected() {
        let result = IntakeService::build_request(Some("   "), None, None, None, Mode::Standard);
        assert!(matches!(result, Err(QalyzerError::UserInputError { .. })));
    }

    #[test]
    fn test_title_handles_dashes() {
        let file = SourceFile::new("payment-GATEWAY_v2.ts", Vec::new());
        assert_eq!(IntakeService::title_for(&file), "Analyse de Payment Gateway V2");
    }
}
