pub const GENERIC_RULES: &str =
    "Standards génériques du langage. Sécurité, performance, lisibilité.";

/// Language-specific review hints keyed by normalized language name.
pub const LANGUAGE_RULES: &[(&[&str], &str)] = &[
    (
        &["ruby", "rb"],
        "Injection SQL, mass assignment, XSS=1-3/10. N+1 queries=3/10. Variables explicites requis. Snake_case obligatoire.",
    ),
    (
        &["python", "py"],
        "eval(), pickle, os.system=1-3/10. PEP8 obligatoire. Type hints recommandés. Docstrings requis.",
    ),
    (
        &["javascript", "js"],
        "innerHTML sans validation, eval()=1-3/10. const/let vs var. Async/await recommandé.",
    ),
    (
        &["typescript", "ts"],
        "any généralisé=4/10 max en lisibilité. innerHTML, eval()=1-3/10. Types stricts et null checks requis.",
    ),
    (
        &["c++", "cpp"],
        "Buffer overflow, memory leaks=1-3/10. RAII, smart pointers requis. Const correctness.",
    ),
    (
        &["c"],
        "Buffer overflow, gets(), strcpy sans borne=1-3/10. Libération mémoire systématique. Vérifier les retours de malloc.",
    ),
    (
        &["java"],
        "Injection SQL via concaténation, désérialisation non sûre=1-3/10. Exceptions non catchées vides interdites. Nommage camelCase.",
    ),
    (
        &["php"],
        "Injection SQL, include dynamique, XSS=1-3/10. Requêtes préparées obligatoires. PSR-12 recommandé.",
    ),
    (
        &["go", "golang"],
        "Erreurs ignorées (_ = err)=3/10 max. Data races=1-3/10. gofmt et noms courts idiomatiques.",
    ),
    (
        &["rust", "rs"],
        "unsafe injustifié, unwrap() en production=3/10 max. Propagation d'erreurs avec ?. Clippy sans warning.",
    ),
    (
        &["sql"],
        "Injection SQL=1-3/10. INDEX manquants=3/10. SELECT * évité. Requêtes structurées.",
    ),
    (
        &["bash", "sh", "shell"],
        "Variables non quotées, eval=1-3/10. set -euo pipefail recommandé. shellcheck sans erreur.",
    ),
];

pub fn normalize_language(language: &str) -> String {
    language.trim().to_lowercase()
}

/// Rule hints for a language; unknown languages get the generic rules.
pub fn rules_for(language: &str) -> &'static str {
    let normalized = normalize_language(language);
    LANGUAGE_RULES
        .iter()
        .find(|(names, _)| names.contains(&normalized.as_str()))
        .map(|(_, rules)| *rules)
        .unwrap_or(GENERIC_RULES)
}
