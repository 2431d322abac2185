pub mod grammars;
pub mod language_rules;
pub mod rubrics;
