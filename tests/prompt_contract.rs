use qalyzer::constants::grammars::grammar_for;
use qalyzer::helpers::prompt_generator::build_prompt;
use qalyzer::{parse_feedback, Mode};

/// Reply that follows every heading the prompt asks for, with the score
/// placeholder filled in.
fn compliant_reply(mode: Mode) -> String {
    let grammar = grammar_for(mode);
    let mut reply = String::new();

    for (index, section) in grammar.sections.iter().enumerate() {
        let heading = section.heading().replace("X/10", &format!("{}/10", index % 10 + 1));
        reply.push_str(&format!("{}\nContenu {}\n\n", heading, index));
    }
    if let Some(correction) = &grammar.correction {
        reply.push_str(&format!("{}\n```\ncode()\n```\n", correction.heading()));
    }
    reply
}

#[test]
fn every_heading_the_prompt_requests_is_recognized() {
    for mode in Mode::ALL {
        let grammar = grammar_for(mode);
        let prompt = build_prompt("Rust", "fn main() { println!(\"hi\"); }", mode);
        let feedback = parse_feedback(&compliant_reply(mode), mode);

        for (index, section) in grammar.sections.iter().enumerate() {
            assert!(prompt.contains(&section.heading()), "{}: heading missing from prompt", mode);

            let parsed = feedback
                .section(section.key)
                .unwrap_or_else(|| panic!("{}: {:?} not recognized", mode, section.key));
            assert_eq!(parsed.body, format!("Contenu {}", index));

            let expected = if section.has_score { Some((index % 10 + 1) as u8) } else { None };
            assert_eq!(parsed.score, expected, "{}: {:?}", mode, section.key);
        }

        if grammar.correction.is_some() {
            assert_eq!(feedback.correction.as_deref(), Some("```\ncode()\n```"), "{}", mode);
        }
    }
}

#[test]
fn reversed_section_order_is_keyed_by_type() {
    for mode in Mode::ALL {
        let grammar = grammar_for(mode);
        let mut reply = String::new();
        for (index, section) in grammar.sections.iter().enumerate().rev() {
            reply.push_str(&format!("{}\nBloc {}\n", section.heading().replace(" X/10", ""), index));
        }

        let feedback = parse_feedback(&reply, mode);
        for (index, section) in grammar.sections.iter().enumerate() {
            assert_eq!(feedback.body(section.key), Some(format!("Bloc {}", index).as_str()), "{}", mode);
        }
    }
}
