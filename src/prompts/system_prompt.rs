use crate::enums::analysis_mode::Mode;

pub fn system_prompt(mode: Mode) -> &'static str {
    match mode {
        Mode::Standard => "Tu es un expert QA senior avec 15 ans d'expérience. Tu analyses le code avec une rigueur professionnelle MAXIMALE. Tu suis EXACTEMENT les barèmes donnés sans exception.",
        Mode::Quick => "Tu es un expert QA bienveillant. Tu fais des revues rapides, justes et encourageantes destinées à un·e développeur·se junior.",
        Mode::Tests => "Tu es un ingénieur QA spécialisé en tests automatisés. Tu écris des tests complets, exécutables et idiomatiques.",
        Mode::Improve => "Tu es un expert en refactoring et en architecture logicielle. Tu proposes des améliorations concrètes sans changer le comportement du code.",
        Mode::Smells => "Tu es un expert en qualité de code spécialisé dans la détection de code smells (Fowler, Clean Code).",
    }
}

/// Opening line of the user prompt, naming the task and the language.
pub fn task_intro(mode: Mode, language: &str) -> String {
    match mode {
        Mode::Standard => format!("Tu es un expert QA senior. Analyse ce code {} avec rigueur professionnelle.", language),
        Mode::Quick => format!("Fais une revue rapide et indulgente de ce code {}. Reste concis.", language),
        Mode::Tests => format!("Génère des tests unitaires complets pour ce code {} avec le framework le plus courant du langage.", language),
        Mode::Improve => format!("Propose un refactoring de ce code {} : lisibilité, structure, performance, sans changer son comportement.", language),
        Mode::Smells => format!("Détecte les code smells de ce code {} : duplication, fonctions trop longues, noms obscurs, couplage, etc.", language),
    }
}
