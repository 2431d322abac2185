//! Output grammar per analysis mode.
//!
//! This table is the single contract shared by the prompt generator (which
//! instructs the model to follow it) and the feedback parser (which scans for
//! it). Marker glyphs never repeat inside one grammar: the parser uses the
//! other descriptors' headers as terminators for the current body.

use crate::enums::analysis_mode::Mode;
use crate::enums::section_key::SectionKey;
use crate::structs::grammar::{CorrectionDescriptor, Grammar, SectionDescriptor};

const OVERALL_REVIEW: SectionDescriptor = SectionDescriptor {
    key: SectionKey::Overall,
    markers: &["📊"],
    labels: &[
        "Score qualité globale",
        "Score de qualité globale",
        "Score qualite globale",
        "Score global",
        "Note globale",
        "Overall score",
        "Global score",
        "Score",
    ],
    has_score: true,
    hint: "[Justification courte]",
};

const SUMMARY: SectionDescriptor = SectionDescriptor {
    key: SectionKey::Summary,
    markers: &["🧾", "📄"],
    labels: &["Résumé global", "Resume global", "Résumé", "Resume", "Summary", "Overview"],
    has_score: false,
    hint: "[2-3 phrases sur l'objectif et la structure du code]",
};

const SECURITY: SectionDescriptor = SectionDescriptor {
    key: SectionKey::Security,
    markers: &["🛡️", "🔐"],
    labels: &["Sécurité", "Securite", "Security"],
    has_score: true,
    hint: "[Problèmes détectés + justification du score]",
};

const PERFORMANCE: SectionDescriptor = SectionDescriptor {
    key: SectionKey::Performance,
    markers: &["⚙️", "🚀"],
    labels: &["Performance", "Performances"],
    has_score: true,
    hint: "[Analyse de performance + justification du score]",
};

const READABILITY: SectionDescriptor = SectionDescriptor {
    key: SectionKey::Readability,
    markers: &["📐", "🧩"],
    labels: &[
        "Lisibilité et qualité du code",
        "Lisibilite et qualite du code",
        "Lisibilité",
        "Lisibilite",
        "Qualité du code",
        "Readability",
        "Code quality",
    ],
    has_score: true,
    hint: "[Conventions, nommage + justification du score]",
};

const TESTING: SectionDescriptor = SectionDescriptor {
    key: SectionKey::Testing,
    markers: &["🧪", "🔬"],
    labels: &[
        "Recommandations de tests",
        "Recommandation de tests",
        "Test recommendations",
        "Testabilité",
        "Testability",
        "Tests",
    ],
    has_score: true,
    hint: "[Tests manquants + justification du score]",
};

const REVIEW_CORRECTION: CorrectionDescriptor = CorrectionDescriptor {
    markers: &["🔧", "🛠️"],
    labels: &[
        "Proposition de correction",
        "Correction proposée",
        "Correction proposee",
        "Suggested fix",
        "Proposed fix",
        "Correction",
    ],
    hint: "[Code amélioré OU \"Code satisfaisant\"]",
};

static STANDARD_SECTIONS: [SectionDescriptor; 6] =
    [OVERALL_REVIEW, SUMMARY, SECURITY, PERFORMANCE, READABILITY, TESTING];

static QUICK_SECTIONS: [SectionDescriptor; 7] = [
    OVERALL_REVIEW,
    SUMMARY,
    SECURITY,
    PERFORMANCE,
    READABILITY,
    TESTING,
    SectionDescriptor {
        key: SectionKey::QuickTips,
        markers: &["💡"],
        labels: &["Conseils rapides", "Conseils", "Quick tips", "Tips"],
        has_score: false,
        hint: "[2-3 conseils concrets, un par ligne]",
    },
];

static TESTS_SECTIONS: [SectionDescriptor; 7] = [
    SectionDescriptor {
        key: SectionKey::Overall,
        markers: &["📊"],
        labels: &["Score de testabilité", "Score de testabilite", "Testability score", "Score"],
        has_score: true,
        hint: "[Facilité à tester le code en l'état]",
    },
    SectionDescriptor {
        key: SectionKey::TestsIntro,
        markers: &["📋"],
        labels: &["Tests générés automatiquement", "Tests generes automatiquement", "Tests générés", "Generated tests"],
        has_score: false,
        hint: "[Ce que couvrent les tests en une phrase]",
    },
    SectionDescriptor {
        key: SectionKey::Framework,
        markers: &["🧰"],
        labels: &["Framework de test", "Test framework", "Framework"],
        has_score: false,
        hint: "[Nom du framework utilisé]",
    },
    SectionDescriptor {
        key: SectionKey::Scenarios,
        markers: &["🎯"],
        labels: &["Scénarios testés", "Scenarios testes", "Tested scenarios", "Scénarios", "Scenarios"],
        has_score: false,
        hint: "[Liste des cas nominaux, limites et erreurs]",
    },
    SectionDescriptor {
        key: SectionKey::TestCode,
        markers: &["💻"],
        labels: &["Code des tests", "Code de test", "Test code", "Code"],
        has_score: false,
        hint: "[Un seul bloc de code complet et exécutable]",
    },
    SectionDescriptor {
        key: SectionKey::Instructions,
        markers: &["📚"],
        labels: &["Instructions d'exécution", "Instructions d’exécution", "Instructions d'execution", "How to run", "Instructions"],
        has_score: false,
        hint: "[Commande pour lancer les tests]",
    },
    SectionDescriptor {
        key: SectionKey::Notes,
        markers: &["📝", "ℹ️"],
        labels: &["Notes importantes", "Important notes", "Notes"],
        has_score: false,
        hint: "[Dépendances, mocks, limites]",
    },
];

static SMELLS_SECTIONS: [SectionDescriptor; 5] = [
    SectionDescriptor {
        key: SectionKey::Overall,
        markers: &["📊"],
        labels: &["Score de propreté", "Score de proprete", "Cleanliness score", "Score"],
        has_score: true,
        hint: "[10 = aucun smell, 1 = code à réécrire]",
    },
    SectionDescriptor {
        key: SectionKey::SmellsOverview,
        markers: &["👃"],
        labels: &["Code smells détectés", "Code smells detectes", "Smells détectés", "Detected smells", "Code smells"],
        has_score: false,
        hint: "[Vue d'ensemble des smells trouvés]",
    },
    SectionDescriptor {
        key: SectionKey::CriticalSmells,
        markers: &["🔴"],
        labels: &["Smells critiques", "Problèmes critiques", "Problemes critiques", "Critical smells", "Critical issues"],
        has_score: false,
        hint: "[Smell, ligne concernée, impact]",
    },
    SectionDescriptor {
        key: SectionKey::MinorSmells,
        markers: &["🟡"],
        labels: &["Smells mineurs", "Problèmes mineurs", "Problemes mineurs", "Minor smells", "Minor issues"],
        has_score: false,
        hint: "[Smell, ligne concernée, impact]",
    },
    SectionDescriptor {
        key: SectionKey::Priorities,
        markers: &["🎯"],
        labels: &["Priorités de refactoring", "Priorites de refactoring", "Priorités", "Priorites", "Priorities"],
        has_score: false,
        hint: "[Ordre de traitement recommandé]",
    },
];

static IMPROVE_SECTIONS: [SectionDescriptor; 4] = [
    SectionDescriptor {
        key: SectionKey::Summary,
        markers: &["🧾"],
        labels: &["Résumé", "Resume", "Summary"],
        has_score: false,
        hint: "[Objectif du code en 1-2 phrases]",
    },
    SectionDescriptor {
        key: SectionKey::Improvements,
        markers: &["🚀"],
        labels: &["Améliorations proposées", "Ameliorations proposees", "Améliorations", "Ameliorations", "Improvements"],
        has_score: false,
        hint: "[Liste numérotée des améliorations]",
    },
    SectionDescriptor {
        key: SectionKey::Complexity,
        markers: &["🌀"],
        labels: &["Complexité", "Complexite", "Complexity"],
        has_score: false,
        hint: "[Avant / après, en mots]",
    },
    SectionDescriptor {
        key: SectionKey::BestPractices,
        markers: &["🎓"],
        labels: &["Bonnes pratiques", "Best practices"],
        has_score: false,
        hint: "[Principes appliqués : SOLID, DRY, etc.]",
    },
];

pub static STANDARD_GRAMMAR: Grammar = Grammar {
    mode: Mode::Standard,
    sections: &STANDARD_SECTIONS,
    correction: Some(REVIEW_CORRECTION),
    has_overall_score: true,
    overall_is_mean: true,
};

pub static QUICK_GRAMMAR: Grammar = Grammar {
    mode: Mode::Quick,
    sections: &QUICK_SECTIONS,
    correction: None,
    has_overall_score: true,
    overall_is_mean: true,
};

pub static TESTS_GRAMMAR: Grammar = Grammar {
    mode: Mode::Tests,
    sections: &TESTS_SECTIONS,
    correction: None,
    has_overall_score: true,
    overall_is_mean: false,
};

pub static SMELLS_GRAMMAR: Grammar = Grammar {
    mode: Mode::Smells,
    sections: &SMELLS_SECTIONS,
    correction: Some(CorrectionDescriptor {
        markers: &["✨"],
        labels: &["Code nettoyé", "Code nettoye", "Version nettoyée", "Cleaned code", "Refactored code"],
        hint: "[Version corrigée du code, ou \"Aucun smell majeur\"]",
    }),
    has_overall_score: true,
    overall_is_mean: false,
};

pub static IMPROVE_GRAMMAR: Grammar = Grammar {
    mode: Mode::Improve,
    sections: &IMPROVE_SECTIONS,
    correction: Some(CorrectionDescriptor {
        markers: &["✨", "🛠️"],
        labels: &["Code refactorisé", "Code refactorise", "Version améliorée", "Version amelioree", "Refactored code", "Improved code"],
        hint: "[Code complet refactorisé]",
    }),
    has_overall_score: false,
    overall_is_mean: false,
};

pub fn grammar_for(mode: Mode) -> &'static Grammar {
    match mode {
        Mode::Standard => &STANDARD_GRAMMAR,
        Mode::Quick => &QUICK_GRAMMAR,
        Mode::Tests => &TESTS_GRAMMAR,
        Mode::Improve => &IMPROVE_GRAMMAR,
        Mode::Smells => &SMELLS_GRAMMAR,
    }
}
