use crate::enums::analysis_mode::Mode;
use crate::enums::section_key::SectionKey;

/// One labeled section of a mode's output grammar.
///
/// `markers` and `labels` are the accepted variants; the first of each is the
/// canonical form written into the prompt.
#[derive(Debug, Clone, Copy)]
pub struct SectionDescriptor {
    pub key: SectionKey,
    pub markers: &'static [&'static str],
    pub labels: &'static [&'static str],
    pub has_score: bool,
    pub hint: &'static str,
}

impl SectionDescriptor {
    /// Heading line the prompt mandates, e.g. `🛡️ Sécurité : X/10`.
    pub fn heading(&self) -> String {
        let marker = self.markers.first().copied().unwrap_or_default();
        let label = self.labels.first().copied().unwrap_or_default();
        if self.has_score {
            format!("{} {} : X/10", marker, label)
        } else {
            format!("{} {} :", marker, label)
        }
    }
}

/// Trailing block captured from its header to end of text.
#[derive(Debug, Clone, Copy)]
pub struct CorrectionDescriptor {
    pub markers: &'static [&'static str],
    pub labels: &'static [&'static str],
    pub hint: &'static str,
}

impl CorrectionDescriptor {
    pub fn heading(&self) -> String {
        let marker = self.markers.first().copied().unwrap_or_default();
        let label = self.labels.first().copied().unwrap_or_default();
        format!("{} {} :", marker, label)
    }
}

#[derive(Debug)]
pub struct Grammar {
    pub mode: Mode,
    pub sections: &'static [SectionDescriptor],
    pub correction: Option<CorrectionDescriptor>,
    pub has_overall_score: bool,
    /// The prompt requires overall = rounded mean of the four categories.
    pub overall_is_mean: bool,
}

impl Grammar {
    pub fn section(&self, key: SectionKey) -> Option<&SectionDescriptor> {
        self.sections.iter().find(|s| s.key == key)
    }

    /// Every marker glyph of the grammar, correction included.
    pub fn all_markers(&self) -> Vec<&'static str> {
        let mut markers: Vec<&'static str> = self
            .sections
            .iter()
            .flat_map(|s| s.markers.iter().copied())
            .collect();
        if let Some(correction) = &self.correction {
            markers.extend(correction.markers.iter().copied());
        }
        markers
    }

    /// Instruction placeholders the prompt shows under each heading.
    pub fn all_hints(&self) -> Vec<&'static str> {
        let mut hints: Vec<&'static str> = self.sections.iter().map(|s| s.hint).collect();
        if let Some(correction) = &self.correction {
            hints.push(correction.hint);
        }
        hints
    }
}
