use std::cmp::Reverse;
use std::collections::HashMap;
use once_cell::sync::Lazy;
use regex::Regex;
use crate::constants::grammars::grammar_for;
use crate::enums::analysis_mode::Mode;
use crate::enums::section_key::SectionKey;
use crate::structs::grammar::{Grammar, SectionDescriptor};
use crate::structs::parsed_feedback::{ParsedFeedback, SectionFeedback};
use crate::structs::tests_detail::TestsDetail;

const VARIATION_SELECTOR: char = '\u{FE0F}';

/// `N/10` with an optional trailing period, or `(N/10)`; either is removed
/// with the score.
static SCORE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\([ \t]*(\d{1,2})[ \t]*/[ \t]*10[ \t]*\)|\b(\d{1,2})[ \t]*/[ \t]*10\b\.?").expect("valid score pattern")
});

/// Dedicated overall-score line: the chart glyph, then "score", then `N/10` on the same line.
static OVERALL_SCORE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)📊\x{FE0F}?[^\n]*?score[^\n]*?\b(\d{1,2})[ \t]*/[ \t]*10\b").expect("valid overall pattern")
});

static FENCED_BLOCK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```([A-Za-z0-9_+#.\-]*)[ \t]*\n(.*?)```").expect("valid fence pattern"));

static FRAMEWORK_LINE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^[^\n]*?framework[^\n:]*:[ \t]*([^\n]+)$").expect("valid framework pattern"));

static COMPILED_GRAMMARS: Lazy<HashMap<Mode, CompiledGrammar>> = Lazy::new(|| {
    Mode::ALL
        .iter()
        .map(|mode| (*mode, CompiledGrammar::compile(grammar_for(*mode))))
        .collect()
});

struct CompiledSection {
    descriptor: &'static SectionDescriptor,
    header: Regex,
}

struct CompiledGrammar {
    grammar: &'static Grammar,
    sections: Vec<CompiledSection>,
    correction: Option<Regex>,
}

impl CompiledGrammar {
    fn compile(grammar: &'static Grammar) -> Self {
        let sections = grammar
            .sections
            .iter()
            .map(|descriptor| CompiledSection {
                descriptor,
                header: header_regex(descriptor.markers, descriptor.labels),
            })
            .collect();

        let correction = grammar
            .correction
            .as_ref()
            .map(|correction| header_regex(correction.markers, correction.labels));

        Self { grammar, sections, correction }
    }

    /// Start offsets of every header of the grammar, sorted. A section body
    /// ends at the first boundary at or after its own header end.
    fn header_boundaries(&self, text: &str) -> Vec<usize> {
        let mut boundaries: Vec<usize> = self
            .sections
            .iter()
            .map(|section| &section.header)
            .chain(self.correction.iter())
            .flat_map(|header| header.find_iter(text).map(|m| m.start()))
            .collect();
        boundaries.sort_unstable();
        boundaries.dedup();
        boundaries
    }
}

/// Builds the header pattern of a section: at the start of a line, optional
/// list or emphasis decoration, one of the markers (variation selector
/// optional), one of the labels (longest first, whole words), an optional
/// parenthetical without a fraction such as "(score sur 10)", optional
/// punctuation.
fn header_regex(markers: &[&str], labels: &[&str]) -> Regex {
    let markers: Vec<String> = markers
        .iter()
        .map(|marker| regex::escape(&marker.replace(VARIATION_SELECTOR, "")))
        .collect();

    let mut labels: Vec<&str> = labels.to_vec();
    labels.sort_by_key(|label| Reverse(label.chars().count()));
    let labels: Vec<String> = labels.iter().map(|label| label_pattern(label)).collect();

    let mut pattern = String::from(r"(?im)^[ \t>#*_\-]*(?:\d{1,2}[.)][ \t]+)?(?:");
    pattern.push_str(&markers.join("|"));
    pattern.push_str(r")\x{FE0F}?[ \t*_#]*(?:");
    pattern.push_str(&labels.join("|"));
    pattern.push_str(r")[ \t*_]*(?:\([^)/\n]*\))?[ \t*_]*[:：.\-–—]?[ \t]*");

    Regex::new(&pattern).expect("grammar header pattern")
}

/// Escapes a label, letting spaces stretch and apostrophes vary. A label
/// ending in a letter must end a word, so "Score" does not match "Scores".
fn label_pattern(label: &str) -> String {
    let mut pattern = label
        .split(' ')
        .map(|word| regex::escape(word).replace(['\'', '’'], "['’]"))
        .collect::<Vec<_>>()
        .join(r"[ \t]+");
    if label.chars().last().is_some_and(char::is_alphanumeric) {
        pattern.push_str(r"\b");
    }
    pattern
}

fn normalize_line_endings(raw: &str) -> String {
    raw.replace("\r\n", "\n").replace('\r', "\n")
}

fn validate_score(digits: &str) -> Option<u8> {
    if digits.len() == 2 && digits.starts_with('0') {
        return None;
    }
    digits.parse::<u8>().ok().filter(|score| *score <= 10)
}

/// Takes the first `N/10` of a body as its score and removes it. An invalid
/// first match leaves the body untouched and the score absent. A score that
/// opens the body also takes the header colon written after it.
fn extract_score(body: &str) -> (String, Option<u8>) {
    let Some(captures) = SCORE_PATTERN.captures(body) else {
        return (body.trim().to_string(), None);
    };

    let digits = captures.get(1).or_else(|| captures.get(2));
    let (Some(whole), Some(digits)) = (captures.get(0), digits) else {
        return (body.trim().to_string(), None);
    };

    match validate_score(digits.as_str()) {
        Some(score) => {
            let before = &body[..whole.start()];
            let mut after = &body[whole.end()..];
            if before.trim().is_empty() {
                after = after.trim_start_matches([' ', '\t']).trim_start_matches([':', '：']);
            }

            let mut cleaned = String::with_capacity(body.len());
            cleaned.push_str(before);
            cleaned.push_str(after);
            (cleaned.trim().to_string(), Some(score))
        }
        None => (body.trim().to_string(), None),
    }
}

fn detect_overall_line(text: &str) -> Option<u8> {
    OVERALL_SCORE_PATTERN
        .captures(text)
        .and_then(|captures| captures.get(1))
        .and_then(|digits| validate_score(digits.as_str()))
        .filter(|score| *score >= 1)
}

pub struct FeedbackParser {
    text: String,
    compiled: &'static CompiledGrammar,
}

impl FeedbackParser {
    pub fn new(raw: &str, mode: Mode) -> Self {
        let compiled = COMPILED_GRAMMARS
            .get(&mode)
            .expect("every mode has a compiled grammar");

        Self {
            text: normalize_line_endings(raw),
            compiled,
        }
    }

    pub fn grammar(&self) -> &'static Grammar {
        self.compiled.grammar
    }

    /// Best-effort extraction. Never fails; blank input gives an empty result.
    pub fn parse(&self) -> ParsedFeedback {
        let mut feedback = ParsedFeedback::default();

        if self.text.trim().is_empty() {
            return feedback;
        }

        let boundaries = self.compiled.header_boundaries(&self.text);

        for section in &self.compiled.sections {
            // First header wins; repeats of it only act as terminators.
            let Some(header) = section.header.find(&self.text) else {
                continue;
            };

            let body_end = boundaries
                .iter()
                .copied()
                .find(|boundary| *boundary >= header.end())
                .unwrap_or(self.text.len());
            let raw_body = &self.text[header.end()..body_end];

            let (body, score) = if section.descriptor.has_score {
                extract_score(raw_body)
            } else {
                (raw_body.trim().to_string(), None)
            };

            feedback.sections.insert(section.descriptor.key, SectionFeedback { body, score });
        }

        feedback.correction = self.parse_correction();
        feedback.overall_score = self.detect_overall(&feedback);

        log::debug!(
            "🔍 Parsed {} feedback: {} sections, overall={:?}, correction={}",
            self.compiled.grammar.mode,
            feedback.sections.len(),
            feedback.overall_score,
            feedback.correction.is_some()
        );

        feedback
    }

    pub fn parse_reconciled(&self) -> ParsedFeedback {
        self.parse().reconcile(self.compiled.grammar)
    }

    /// Everything after the last correction header, trimmed.
    fn parse_correction(&self) -> Option<String> {
        let header = self.compiled.correction.as_ref()?;
        let last = header.find_iter(&self.text).last()?;
        Some(self.text[last.end()..].trim().to_string())
    }

    fn detect_overall(&self, feedback: &ParsedFeedback) -> Option<u8> {
        if !self.compiled.grammar.has_overall_score {
            return None;
        }

        feedback
            .score(SectionKey::Overall)
            .filter(|score| (1..=10).contains(score))
            .or_else(|| detect_overall_line(&self.text))
    }
}

pub fn parse_feedback(raw: &str, mode: Mode) -> ParsedFeedback {
    FeedbackParser::new(raw, mode).parse()
}

/// Same as [`parse_feedback`], with the overall score reconciled from the
/// category scores when the reply did not state one.
pub fn parse_feedback_reconciled(raw: &str, mode: Mode) -> ParsedFeedback {
    FeedbackParser::new(raw, mode).parse_reconciled()
}

/// Splits a generated-tests reply into the parts shown by the tests view.
pub fn parse_tests_detail(raw: &str) -> TestsDetail {
    let text = normalize_line_endings(raw);
    if text.trim().is_empty() {
        return TestsDetail::default();
    }

    let feedback = parse_feedback(&text, Mode::Tests);
    let non_empty = |key: SectionKey| {
        feedback
            .body(key)
            .filter(|body| !body.is_empty())
            .map(|body| body.to_string())
    };

    let code_source = feedback.body(SectionKey::TestCode).unwrap_or(text.as_str());
    let fenced = FENCED_BLOCK_PATTERN
        .captures(code_source)
        .or_else(|| FENCED_BLOCK_PATTERN.captures(&text));

    let code_language = fenced
        .as_ref()
        .and_then(|captures| captures.get(1))
        .map(|lang| lang.as_str().to_string())
        .filter(|lang| !lang.is_empty());
    let code = fenced
        .as_ref()
        .and_then(|captures| captures.get(2))
        .map(|code| code.as_str().trim_end().to_string())
        .or_else(|| non_empty(SectionKey::TestCode));

    let framework = non_empty(SectionKey::Framework)
        .and_then(|body| body.lines().next().map(|line| line.trim().to_string()))
        .or_else(|| {
            FRAMEWORK_LINE_PATTERN
                .captures(&text)
                .and_then(|captures| captures.get(1))
                .map(|m| m.as_str().trim().to_string())
        });

    TestsDetail {
        intro: non_empty(SectionKey::TestsIntro),
        framework,
        scenarios: non_empty(SectionKey::Scenarios),
        code_language,
        code,
        instructions: non_empty(SectionKey::Instructions),
        notes: non_empty(SectionKey::Notes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STANDARD_REPLY: &str = "📊 Score qualité globale : 7/10
La qualité globale du code est correcte.

🧾 Résumé global :
Le contrôleur crée des analyses.

🛡️ Sécurité : 6/10
Paramètres non filtrés.

⚙️ Performance : 8/10
Aucune requête N+1.

📐 Lisibilité et qualité du code : 9/10
Nommage explicite.

🧪 Recommandations de tests : 5/10
Ajouter des tests de contrôleur.

🔧 Proposition de correction :
```ruby
params.require(:analysis).permit(:code)
```";

    #[test]
    fn test_parses_full_standard_reply() {
        let feedback = parse_feedback(STANDARD_REPLY, Mode::Standard);

        assert_eq!(feedback.overall_score, Some(7));
        assert_eq!(feedback.score(SectionKey::Security), Some(6));
        assert_eq!(feedback.body(SectionKey::Security), Some("Paramètres non filtrés."));
        assert_eq!(feedback.score(SectionKey::Performance), Some(8));
        assert_eq!(feedback.score(SectionKey::Readability), Some(9));
        assert_eq!(feedback.body(SectionKey::Readability), Some("Nommage explicite."));
        assert_eq!(feedback.score(SectionKey::Testing), Some(5));
        assert_eq!(feedback.body(SectionKey::Summary), Some("Le contrôleur crée des analyses."));
        assert_eq!(feedback.body(SectionKey::Overall), Some("La qualité globale du code est correcte."));
        assert_eq!(
            feedback.correction.as_deref(),
            Some("```ruby\nparams.require(:analysis).permit(:code)\n```")
        );
    }

    #[test]
    fn test_score_on_header_line_is_removed_from_body() {
        let feedback = parse_feedback("🛡️ Sécurité : 3/10\nProblème X", Mode::Standard);
        assert_eq!(
            feedback.section(SectionKey::Security),
            Some(&SectionFeedback { body: "Problème X".to_string(), score: Some(3) })
        );
    }

    #[test]
    fn test_score_with_trailing_period_inside_body() {
        let feedback = parse_feedback("⚙️ Performance :\nBoucle inutile. Note : 4/10.", Mode::Standard);
        assert_eq!(feedback.score(SectionKey::Performance), Some(4));
        assert_eq!(feedback.body(SectionKey::Performance), Some("Boucle inutile. Note :"));
    }

    #[test]
    fn test_out_of_range_score_is_discarded_and_body_kept() {
        let feedback = parse_feedback("🛡️ Sécurité : 11/10\nTrop généreux", Mode::Standard);
        assert_eq!(feedback.score(SectionKey::Security), None);
        assert_eq!(feedback.body(SectionKey::Security), Some("11/10\nTrop généreux"));
    }

    #[test]
    fn test_zero_padded_score_is_an_anomaly() {
        let feedback = parse_feedback("🛡️ Sécurité : 00/10", Mode::Standard);
        assert_eq!(feedback.score(SectionKey::Security), None);
    }

    #[test]
    fn test_zero_is_a_valid_section_score() {
        let feedback = parse_feedback("🛡️ Sécurité : 0/10\nInjection SQL", Mode::Standard);
        assert_eq!(feedback.score(SectionKey::Security), Some(0));
    }

    #[test]
    fn test_reversed_order_is_keyed_by_type() {
        let reply = "🧪 Tests : 4/10\nAucun test.\n\n🛡️ Security: 9/10\nRAS.";
        let feedback = parse_feedback(reply, Mode::Standard);

        assert_eq!(feedback.score(SectionKey::Testing), Some(4));
        assert_eq!(feedback.body(SectionKey::Testing), Some("Aucun test."));
        assert_eq!(feedback.score(SectionKey::Security), Some(9));
        assert_eq!(feedback.body(SectionKey::Security), Some("RAS."));
    }

    #[test]
    fn test_prose_without_markers_gives_empty_result() {
        let feedback = parse_feedback("Le code semble correct dans l'ensemble, 8/10 selon moi.", Mode::Standard);
        assert!(feedback.sections.is_empty());
        assert_eq!(feedback.correction, None);
        assert_eq!(feedback.overall_score, None);
    }

    #[test]
    fn test_blank_input_short_circuits() {
        assert!(parse_feedback("   \n\t", Mode::Smells).is_empty());
        assert!(parse_feedback("", Mode::Standard).is_empty());
    }

    #[test]
    fn test_empty_section_is_still_present() {
        let feedback = parse_feedback("🧾 Résumé global :\n\n🛡️ Sécurité : 5/10\nOK", Mode::Standard);
        assert_eq!(feedback.body(SectionKey::Summary), Some(""));
        assert!(feedback.section(SectionKey::Performance).is_none());
    }

    #[test]
    fn test_duplicate_section_keeps_first_match() {
        let reply = "🛡️ Sécurité : 4/10\nPremière\n🛡️ Sécurité : 9/10\nSeconde";
        let feedback = parse_feedback(reply, Mode::Standard);
        assert_eq!(feedback.score(SectionKey::Security), Some(4));
        assert_eq!(feedback.body(SectionKey::Security), Some("Première"));
    }

    #[test]
    fn test_crlf_is_normalized() {
        let feedback = parse_feedback("🛡️ Sécurité : 6/10\r\nLigne 1\r\nLigne 2", Mode::Standard);
        assert_eq!(feedback.body(SectionKey::Security), Some("Ligne 1\nLigne 2"));
    }

    #[test]
    fn test_marker_without_variation_selector_and_english_label() {
        let feedback = parse_feedback("\u{1F6E1} **Security**: 7/10\nFine", Mode::Standard);
        assert_eq!(feedback.score(SectionKey::Security), Some(7));
        assert_eq!(feedback.body(SectionKey::Security), Some("Fine"));
    }

    #[test]
    fn test_parenthetical_after_label_is_skipped() {
        let feedback = parse_feedback("🛡️ Sécurité (score sur 10) :\nRAS. Note : 8/10", Mode::Standard);
        assert_eq!(feedback.score(SectionKey::Security), Some(8));
        assert_eq!(feedback.body(SectionKey::Security), Some("RAS. Note :"));
    }

    #[test]
    fn test_parenthesized_score_after_label_is_recorded() {
        let reply = "🛡️ Sécurité (8/10) :\nInjection SQL possible.\n⚙️ Performance (6/10) :\nOK";
        let feedback = parse_feedback(reply, Mode::Standard);

        assert_eq!(
            feedback.section(SectionKey::Security),
            Some(&SectionFeedback { body: "Injection SQL possible.".to_string(), score: Some(8) })
        );
        assert_eq!(
            feedback.section(SectionKey::Performance),
            Some(&SectionFeedback { body: "OK".to_string(), score: Some(6) })
        );
    }

    #[test]
    fn test_inline_mention_is_not_a_header() {
        let reply = "🧾 Résumé global :\nLe code couvre la 🛡️ sécurité des entrées.\n\n🛡️ Sécurité : 6/10\nRAS";
        let feedback = parse_feedback(reply, Mode::Standard);

        assert_eq!(feedback.body(SectionKey::Summary), Some("Le code couvre la 🛡️ sécurité des entrées."));
        assert_eq!(feedback.score(SectionKey::Security), Some(6));
        assert_eq!(feedback.body(SectionKey::Security), Some("RAS"));
    }

    #[test]
    fn test_decorated_headers_at_line_start() {
        let reply = "## 🛡️ Sécurité : 4/10\nRAS\n- ⚙️ Performance : 7/10\nOK\n3. 🧪 Tests : 2/10\nAucun";
        let feedback = parse_feedback(reply, Mode::Standard);

        assert_eq!(feedback.score(SectionKey::Security), Some(4));
        assert_eq!(feedback.body(SectionKey::Security), Some("RAS"));
        assert_eq!(feedback.score(SectionKey::Performance), Some(7));
        assert_eq!(feedback.score(SectionKey::Testing), Some(2));
        assert_eq!(feedback.body(SectionKey::Testing), Some("Aucun"));
    }

    #[test]
    fn test_label_must_end_a_word() {
        let reply = "📊 Scores par catégorie :\n🛡️ Sécurité : 7/10\nRAS";
        let feedback = parse_feedback(reply, Mode::Standard);

        assert!(feedback.section(SectionKey::Overall).is_none());
        assert_eq!(feedback.score(SectionKey::Security), Some(7));
    }

    #[test]
    fn test_placeholders_stay_in_body() {
        let feedback = parse_feedback("🧾 Résumé global :\n[...]", Mode::Standard);
        assert_eq!(feedback.body(SectionKey::Summary), Some("[...]"));
    }

    #[test]
    fn test_correction_uses_last_header() {
        let reply = "🔧 Correction : brouillon\n🛡️ Sécurité : 5/10\nRAS\n🔧 Proposition de correction :\nfinal";
        let feedback = parse_feedback(reply, Mode::Standard);
        assert_eq!(feedback.correction.as_deref(), Some("final"));
        assert_eq!(feedback.body(SectionKey::Security), Some("RAS"));
    }

    #[test]
    fn test_quick_mode_has_no_correction() {
        let feedback = parse_feedback("🔧 Proposition de correction :\nx = 1", Mode::Quick);
        assert_eq!(feedback.correction, None);
    }

    #[test]
    fn test_overall_falls_back_to_dedicated_line() {
        let feedback = parse_feedback("📊 Note finale du score : 6/10", Mode::Standard);
        assert!(feedback.section(SectionKey::Overall).is_none());
        assert_eq!(feedback.overall_score, Some(6));
    }

    #[test]
    fn test_overall_zero_is_not_a_valid_overall() {
        let feedback = parse_feedback("📊 Score global : 0/10", Mode::Standard);
        assert_eq!(feedback.score(SectionKey::Overall), Some(0));
        assert_eq!(feedback.overall_score, None);
    }

    #[test]
    fn test_reconciled_parse_derives_overall() {
        let reply = "🛡️ Sécurité : 6/10\n⚙️ Performance : 8/10\n📐 Lisibilité : 9/10\n🧪 Tests : 9/10";
        let plain = parse_feedback(reply, Mode::Standard);
        assert_eq!(plain.overall_score, None);

        let reconciled = parse_feedback_reconciled(reply, Mode::Standard);
        assert_eq!(reconciled.overall_score, Some(8));
        assert!(reconciled.overall_derived);
    }

    #[test]
    fn test_improve_mode_never_reports_overall() {
        let reply = "📊 Score : 8/10\n🚀 Améliorations proposées :\n1. Extraire une méthode\n✨ Code refactorisé :\nfn main() {}";
        let feedback = parse_feedback_reconciled(reply, Mode::Improve);
        assert_eq!(feedback.overall_score, None);
        assert_eq!(feedback.body(SectionKey::Improvements), Some("1. Extraire une méthode"));
        assert_eq!(feedback.correction.as_deref(), Some("fn main() {}"));
    }

    #[test]
    fn test_unscored_section_keeps_fraction_text() {
        let reply = "💻 Code des tests :\nassert_eq!(ratio(5, 10), \"5/10\");";
        let feedback = parse_feedback(reply, Mode::Tests);
        assert_eq!(feedback.body(SectionKey::TestCode), Some("assert_eq!(ratio(5, 10), \"5/10\");"));
        assert_eq!(feedback.score(SectionKey::TestCode), None);
    }

    #[test]
    fn test_tests_detail_extracts_code_and_framework() {
        let reply = "📋 Tests générés automatiquement :\nCouvre add().\n🧰 Framework : pytest\n🎯 Scénarios testés :\n- nominal\n💻 Code des tests :\n```python\ndef test_add():\n    assert add(1, 2) == 3\n```\n📚 Instructions d'exécution :\npytest -q\n📝 Notes importantes :\nAucune dépendance.";
        let detail = parse_tests_detail(reply);

        assert_eq!(detail.intro.as_deref(), Some("Couvre add()."));
        assert_eq!(detail.framework.as_deref(), Some("pytest"));
        assert_eq!(detail.scenarios.as_deref(), Some("- nominal"));
        assert_eq!(detail.code_language.as_deref(), Some("python"));
        assert_eq!(detail.code.as_deref(), Some("def test_add():\n    assert add(1, 2) == 3"));
        assert_eq!(detail.instructions.as_deref(), Some("pytest -q"));
        assert_eq!(detail.notes.as_deref(), Some("Aucune dépendance."));
    }

    #[test]
    fn test_every_grammar_compiles() {
        for mode in Mode::ALL {
            let parser = FeedbackParser::new("x", mode);
            assert_eq!(parser.grammar().mode, mode);
        }
    }
}
