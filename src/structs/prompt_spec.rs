use crate::structs::grammar::Grammar;

/// A built prompt together with the grammar it commits the model to.
#[derive(Debug, Clone)]
pub struct PromptSpec {
    pub prompt: String,
    pub grammar: &'static Grammar,
}
