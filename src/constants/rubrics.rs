pub const STRICT_RUBRIC: &str = r#"BARÈMES STRICTS :
• Sécurité : Failles critiques=1-3/10, Modérées=4-6/10, Bonnes pratiques=7-8/10, Exemplaire=9-10/10
• Performance : Catastrophique=1-3/10, Correct=6-7/10, Optimisé=8-10/10
• Lisibilité : Variables a,b,c=MAX 4/10, Code clair=6-7/10, Exemplaire=8-10/10
• Tests : Non testable=1-3/10, Basique=4-6/10, Complet=8-10/10"#;

pub const LENIENT_RUBRIC: &str = r#"BARÈMES INDULGENTS (revue rapide) :
• Sécurité : Faille exploitable=1-4/10, Points d'attention=5-7/10, Rien à signaler=8-10/10
• Performance : Bloquant=1-4/10, Acceptable=5-7/10, Efficace=8-10/10
• Lisibilité : Illisible=1-4/10, Compréhensible=5-7/10, Clair=8-10/10
• Tests : Intestable=1-4/10, Testable avec effort=5-7/10, Facile à tester=8-10/10"#;

pub const INTEGER_SCORE_CONSTRAINTS: &str = r#"CONTRAINTES ABSOLUES :
- TOUS les scores doivent être des NOMBRES ENTIERS (1, 2, 3... 10) au format X/10
- JAMAIS de décimales (8.75, 7.5, etc.)"#;

pub const MEAN_SCORE_CONSTRAINT: &str = r#"- Score global = moyenne arrondie des 4 catégories
- Exemple : (10+7+9+9)/4 = 8.75 → Score global = 9/10"#;

pub const FORMAT_INSTRUCTION: &str =
    "FORMAT OBLIGATOIRE (RESPECTER EXACTEMENT, ne change jamais l'ordre ni les emojis) :";
