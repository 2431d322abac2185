use std::cmp::Reverse;
use once_cell::sync::Lazy;
use regex::Regex;
use crate::constants::grammars::grammar_for;
use crate::enums::analysis_mode::Mode;
use crate::enums::section_key::SectionKey;
use crate::structs::parsed_feedback::ParsedFeedback;

/// Glyphs stripped from every export, whatever the mode.
const EXPORT_GLYPHS: &[&str] = &[
    "📊", "🛡", "⚙", "📐", "🧪", "🔧", "🧾", "👃", "✨", "📋", "🎯", "💻", "📚", "🔴", "🟡", "🔍", "🔢", "📝", "🌀",
    "🎓", "🚀",
];

static TESTS_TITLE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^[ \t]*📋\x{FE0F}?[^\n]*Tests g[ée]n[ée]r[ée]s automatiquement[^\n]*\n?").expect("valid title pattern"));

/// A score line as the tests prompt writes it: `Score :` or `📊 Score :`.
static SCORE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:📊\x{FE0F}?[ \t]*)?[*_]*Score[*_]*[ \t]*[:：][^\n]*\n?").expect("valid score line pattern")
});

static ELLIPSIS_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(?:\.\.\.|…)\]").expect("valid ellipsis pattern"));

/// A fenced block, or an unterminated one running to end of text.
static FENCED_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```.*?(?:```|\z)").expect("valid fence pattern"));

static TRAILING_SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)[ \t]+$").expect("valid trailing space pattern"));

static BLANK_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n[ \t]*\n(?:[ \t]*\n)+").expect("valid blank run pattern"));

fn collapse_blank_runs(text: &str) -> String {
    BLANK_RUNS.replace_all(text, "\n\n").trim().to_string()
}

/// Drops the generated-tests title and every score line.
pub fn clean_tests_feedback(text: &str) -> String {
    let text = text.replace("\r\n", "\n");
    let text = TESTS_TITLE_LINE.replace_all(&text, "");
    let text = SCORE_LINE.replace_all(&text, "");
    collapse_blank_runs(&text)
}

/// Matches any export glyph plus the spacing written after it.
fn glyph_regex(mode: Mode) -> Regex {
    let mut glyphs: Vec<String> = EXPORT_GLYPHS
        .iter()
        .chain(grammar_for(mode).all_markers().iter())
        .map(|glyph| glyph.replace('\u{FE0F}', ""))
        .filter(|glyph| !glyph.is_empty())
        .collect();
    glyphs.sort();
    glyphs.dedup();
    glyphs.sort_by_key(|glyph| Reverse(glyph.chars().count()));

    let alternatives: Vec<String> = glyphs.iter().map(|glyph| regex::escape(glyph)).collect();
    Regex::new(&format!(r"(?:{})\x{{FE0F}}?[ \t]*", alternatives.join("|"))).expect("valid glyph pattern")
}

fn clean_prose(text: &str, glyphs: &Regex, hints: &[&str]) -> String {
    let mut prose = glyphs.replace_all(text, "").replace('\u{FE0F}', "");
    for hint in hints {
        prose = prose.replace(hint, "");
    }
    let prose = ELLIPSIS_PLACEHOLDER.replace_all(&prose, "");
    let prose = TRAILING_SPACES.replace_all(&prose, "");
    BLANK_RUNS.replace_all(&prose, "\n\n").into_owned()
}

/// Plain-text rendition of a raw reply for export: no glyphs, no leftover
/// instruction placeholders. Fenced code is copied as is.
pub fn clean_feedback_for_export(text: &str, mode: Mode) -> String {
    let mut text = text.replace("\r\n", "\n");
    if mode == Mode::Tests {
        text = clean_tests_feedback(&text);
    }

    let glyphs = glyph_regex(mode);
    let hints = grammar_for(mode).all_hints();

    let mut cleaned = String::with_capacity(text.len());
    let mut last = 0;
    for block in FENCED_BLOCK.find_iter(&text) {
        cleaned.push_str(&clean_prose(&text[last..block.start()], &glyphs, &hints));
        cleaned.push_str(block.as_str());
        last = block.end();
    }
    cleaned.push_str(&clean_prose(&text[last..], &glyphs, &hints));

    cleaned.trim().to_string()
}

pub fn section_display_text(feedback: &ParsedFeedback, key: SectionKey) -> &str {
    feedback.display_body(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::parsed_feedback::NOT_AVAILABLE;

    #[test]
    fn test_tests_cleanup_drops_title_and_score_lines() {
        let raw = "📋 Tests générés automatiquement :\n📊 Score : 7/10\n**Score** : 6/10\n\n\n\n🎯 Scénarios testés :\n- nominal";
        assert_eq!(clean_tests_feedback(raw), "🎯 Scénarios testés :\n- nominal");
    }

    #[test]
    fn test_tests_cleanup_keeps_code_mentioning_scores() {
        let raw = "📊 Score : 7/10\nscores: list = []\nScore de couverture visé : 80%";
        assert_eq!(clean_tests_feedback(raw), "scores: list = []\nScore de couverture visé : 80%");
    }

    #[test]
    fn test_export_strips_glyphs_and_placeholders() {
        let raw = "📊 Score qualité globale : 7/10\n[Justification courte]\n\n🛡️ Sécurité : 6/10\nRAS [...]\n\n\n\n🔧 Proposition de correction :\nCode satisfaisant";
        let cleaned = clean_feedback_for_export(raw, Mode::Standard);

        assert_eq!(
            cleaned,
            "Score qualité globale : 7/10\n\nSécurité : 6/10\nRAS\n\nProposition de correction :\nCode satisfaisant"
        );
        assert!(!cleaned.contains('\u{FE0F}'));
    }

    #[test]
    fn test_export_strips_grammar_specific_markers() {
        let cleaned = clean_feedback_for_export("🧰 Framework : pytest\nℹ️ Notes : aucune", Mode::Tests);
        assert_eq!(cleaned, "Framework : pytest\nNotes : aucune");
    }

    #[test]
    fn test_export_keeps_fenced_code_intact() {
        let raw = "🔧 Proposition de correction :\n```python\ndef add(a, b):\n    values = [a, b]\n    return sum(\n        values\n    )\n```\n\n```toml\n[dependencies]\nregex = \"1\"\n```";
        let cleaned = clean_feedback_for_export(raw, Mode::Standard);

        assert_eq!(
            cleaned,
            "Proposition de correction :\n```python\ndef add(a, b):\n    values = [a, b]\n    return sum(\n        values\n    )\n```\n\n```toml\n[dependencies]\nregex = \"1\"\n```"
        );
    }

    #[test]
    fn test_export_keeps_bracketed_prose_that_is_not_a_hint() {
        let raw = "🧾 Résumé global :\n  [a, b] est retourné tel quel\n[2-3 phrases sur l'objectif et la structure du code]";
        assert_eq!(clean_feedback_for_export(raw, Mode::Standard), "Résumé global :\n  [a, b] est retourné tel quel");
    }

    #[test]
    fn test_export_of_empty_text_is_empty() {
        assert_eq!(clean_feedback_for_export("  \n\n ", Mode::Quick), "");
    }

    #[test]
    fn test_section_display_text_falls_back() {
        let feedback = ParsedFeedback::default();
        assert_eq!(section_display_text(&feedback, SectionKey::Security), NOT_AVAILABLE);
    }
}
