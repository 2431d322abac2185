use serde::{Deserialize, Serialize};

/// Display-oriented breakdown of a generated-tests reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestsDetail {
    pub intro: Option<String>,
    pub framework: Option<String>,
    pub scenarios: Option<String>,
    pub code_language: Option<String>,
    pub code: Option<String>,
    pub instructions: Option<String>,
    pub notes: Option<String>,
}
