use crate::constants::grammars::grammar_for;
use crate::enums::analysis_mode::Mode;
use crate::enums::score_tier::{badge_text, ScoreTier};
use crate::services::feedback_parser::parse_tests_detail;
use crate::structs::analysis_record::AnalysisRecord;
use crate::structs::parsed_feedback::{ParsedFeedback, NOT_AVAILABLE};

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";
const RESET: &str = "\x1b[0m";

pub struct ReportLogger {}

impl ReportLogger {
    fn badge(score: Option<u8>, colored: bool) -> String {
        let text = badge_text(score);
        match ScoreTier::from_score(score) {
            Some(tier) if colored => format!("{}{} {}{}", tier.ansi_color(), tier.emoji(), text, RESET),
            Some(tier) => format!("{} {}", tier.emoji(), text),
            None => text,
        }
    }

    /// Terminal report of a parsed reply, sections in grammar order.
    pub fn render(feedback: &ParsedFeedback, mode: Mode, colored: bool) -> String {
        let grammar = grammar_for(mode);
        let mut out = String::new();

        if grammar.has_overall_score {
            let origin = if feedback.overall_derived { " (moyenne des catégories)" } else { "" };
            out.push_str(&format!(
                "📊 Score global : {}{}\n{}\n",
                Self::badge(feedback.overall_score, colored),
                origin,
                RULE
            ));
        }

        for descriptor in grammar.sections {
            let marker = descriptor.markers.first().copied().unwrap_or_default();
            let label = descriptor.labels.first().copied().unwrap_or_default();

            out.push_str(&format!("\n{} {}", marker, label));
            if descriptor.has_score {
                out.push_str(&format!(" [{}]", Self::badge(feedback.score(descriptor.key), colored)));
            }
            out.push('\n');
            out.push_str(feedback.display_body(descriptor.key));
            out.push('\n');
        }

        if let Some(correction) = &grammar.correction {
            let marker = correction.markers.first().copied().unwrap_or_default();
            let label = correction.labels.first().copied().unwrap_or_default();
            out.push_str(&format!("\n{} {}\n", marker, label));
            match feedback.correction.as_deref() {
                Some(text) if !text.is_empty() => out.push_str(text),
                _ => out.push_str(NOT_AVAILABLE),
            }
            out.push('\n');
        }

        out
    }

    pub fn print_report(record: &AnalysisRecord, feedback: &ParsedFeedback) {
        println!("\n{} {} · {}", record.mode.emoji(), record.mode.display_name(), record.display_title());
        println!("🆔 {}  🗣️ {}  🤖 {}  🕒 {}", record.id, record.language, record.model, record.created_at.format("%Y-%m-%d %H:%M"));
        println!("{}", RULE);
        println!("{}", Self::render(feedback, record.mode, true));

        if record.mode == Mode::Tests {
            let detail = parse_tests_detail(&record.feedback);
            if let Some(framework) = detail.framework {
                println!("🧰 Framework détecté : {}", framework);
            }
            if let Some(instructions) = detail.instructions {
                println!("▶️  {}", instructions);
            }
        }
        println!("{}", RULE);
    }

    pub fn print_history(records: &[AnalysisRecord]) {
        if records.is_empty() {
            println!("📭 No stored analyses");
            return;
        }

        println!("\n📚 {} stored analyses", records.len());
        println!("{}", RULE);
        for record in records {
            println!(
                "{}  {}  {:<14}  {:<12}  {}",
                record.id,
                record.created_at.format("%Y-%m-%d %H:%M"),
                record.mode.display_name(),
                record.language,
                record.display_title()
            );
        }
    }
}
