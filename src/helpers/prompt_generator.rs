use crate::constants::grammars::grammar_for;
use crate::constants::language_rules::{normalize_language, rules_for};
use crate::constants::rubrics::{
    FORMAT_INSTRUCTION, INTEGER_SCORE_CONSTRAINTS, LENIENT_RUBRIC, MEAN_SCORE_CONSTRAINT, STRICT_RUBRIC,
};
use crate::enums::analysis_mode::Mode;
use crate::prompts::system_prompt::task_intro;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::grammar::Grammar;
use crate::structs::prompt_spec::PromptSpec;

const FALLBACK_FENCE_LABEL: &str = "text";

/// Builds the user prompt for `(language, code, mode)`.
///
/// Pure and byte-deterministic: the same arguments always give the same string.
/// Unknown or empty languages fall back to the generic rule set.
pub fn build_prompt(language: &str, code: &str, mode: Mode) -> String {
    let grammar = grammar_for(mode);
    let display_language = language.trim();
    let fence_label = match normalize_language(language) {
        label if label.is_empty() => FALLBACK_FENCE_LABEL.to_string(),
        label => label,
    };

    let mut prompt = String::new();
    prompt.push_str(&task_intro(mode, display_language));
    prompt.push_str("\n\n");

    if let Some(rubric) = rubric_for(mode) {
        prompt.push_str(rubric);
        prompt.push_str("\n\n");
    }

    prompt.push_str(&format!(
        "SPÉCIFICITÉS {} :\n{}\n\n",
        display_language.to_uppercase(),
        rules_for(language)
    ));

    prompt.push_str(FORMAT_INSTRUCTION);
    prompt.push_str("\n\n");
    prompt.push_str(&format_section(grammar));

    prompt.push_str(&format!("CODE :\n```{}\n{}\n```\n", fence_label, code));

    let constraints = constraints_for(grammar);
    if !constraints.is_empty() {
        prompt.push('\n');
        prompt.push_str(&constraints);
        prompt.push('\n');
    }

    prompt
}

pub fn build_prompt_spec(request: &AnalysisRequest) -> PromptSpec {
    PromptSpec {
        prompt: build_prompt(&request.language, &request.code, request.mode),
        grammar: grammar_for(request.mode),
    }
}

fn rubric_for(mode: Mode) -> Option<&'static str> {
    match mode {
        Mode::Standard | Mode::Tests | Mode::Smells => Some(STRICT_RUBRIC),
        Mode::Quick => Some(LENIENT_RUBRIC),
        Mode::Improve => None,
    }
}

fn format_section(grammar: &Grammar) -> String {
    let mut block = String::new();

    for section in grammar.sections {
        block.push_str(&section.heading());
        block.push('\n');
        block.push_str(section.hint);
        block.push_str("\n\n");
    }

    if let Some(correction) = &grammar.correction {
        block.push_str(&correction.heading());
        block.push('\n');
        block.push_str(correction.hint);
        block.push_str("\n\n");
    }

    block
}

fn constraints_for(grammar: &Grammar) -> String {
    let mut lines: Vec<&str> = Vec::new();

    if grammar.sections.iter().any(|s| s.has_score) {
        lines.push(INTEGER_SCORE_CONSTRAINTS);
    }
    if grammar.overall_is_mean {
        lines.push(MEAN_SCORE_CONSTRAINT);
    }

    match grammar.mode {
        Mode::Tests => lines.push("- Le code des tests tient dans UN SEUL bloc ``` complet et exécutable"),
        Mode::Improve => lines.push("CONTRAINTES :\n- AUCUN score numérique dans cette réponse\n- Le comportement du code doit rester identique"),
        Mode::Standard | Mode::Quick | Mode::Smells => {}
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "def add(a, b):\n    return a + b\n";

    #[test]
    fn test_prompt_is_deterministic() {
        for mode in Mode::ALL {
            assert_eq!(build_prompt("Python", SAMPLE, mode), build_prompt("Python", SAMPLE, mode));
        }
    }

    #[test]
    fn test_code_is_fenced_with_lowercase_language() {
        let prompt = build_prompt("  Python ", SAMPLE, Mode::Standard);
        assert!(prompt.contains(&format!("```python\n{}\n```", SAMPLE)));
        assert!(prompt.contains("SPÉCIFICITÉS PYTHON"));
        assert!(prompt.contains("PEP8"));
    }

    #[test]
    fn test_unknown_language_uses_generic_rules() {
        let prompt = build_prompt("Brainfuck", "+++[>++<-]", Mode::Standard);
        assert!(prompt.contains("Standards génériques du langage"));
        assert!(prompt.contains("```brainfuck\n"));
    }

    #[test]
    fn test_empty_language_falls_back_to_text_fence() {
        let prompt = build_prompt("   ", "echo hello world", Mode::Quick);
        assert!(prompt.contains("```text\necho hello world\n```"));
    }

    #[test]
    fn test_standard_prompt_lists_headings_in_order() {
        let prompt = build_prompt("ruby", "puts 'hello world'", Mode::Standard);
        let positions: Vec<usize> = [
            "📊 Score qualité globale : X/10",
            "🧾 Résumé global :",
            "🛡️ Sécurité : X/10",
            "⚙️ Performance : X/10",
            "📐 Lisibilité et qualité du code : X/10",
            "🧪 Recommandations de tests : X/10",
            "🔧 Proposition de correction :",
        ]
        .iter()
        .map(|heading| prompt.find(heading).unwrap_or_else(|| panic!("missing {}", heading)))
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(prompt.contains("moyenne arrondie des 4 catégories"));
        assert!(prompt.contains("Failles critiques=1-3/10"));
    }

    #[test]
    fn test_improve_prompt_has_no_rubric_or_mean_constraint() {
        let prompt = build_prompt("go", "func main() {}", Mode::Improve);
        assert!(!prompt.contains("BARÈMES"));
        assert!(!prompt.contains("moyenne arrondie"));
        assert!(prompt.contains("✨ Code refactorisé :"));
    }

    #[test]
    fn test_quick_prompt_is_lenient() {
        let prompt = build_prompt("js", "var a = 1;", Mode::Quick);
        assert!(prompt.contains("BARÈMES INDULGENTS"));
        assert!(!prompt.contains("🔧"));
    }

    #[test]
    fn test_prompt_spec_carries_grammar() {
        let request = AnalysisRequest::new("sql", "SELECT * FROM users;", Mode::Smells);
        let spec = build_prompt_spec(&request);
        assert_eq!(spec.grammar.mode, Mode::Smells);
        assert_eq!(spec.prompt, build_prompt("sql", "SELECT * FROM users;", Mode::Smells));
    }
}
