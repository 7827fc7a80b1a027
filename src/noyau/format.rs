// src/noyau/format.rs

/// Texte affichable d’un résultat.
///
/// - fini : décimal simple, sans exposant, le plus court qui relit la même valeur
///   (14, 2.5, -5, 0.0000001)
/// - non fini : Infinity / -Infinity / NaN
///
/// Le texte d’un résultat fini est toujours relisible par `evaluate`.
pub fn format_resultat(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    // Display de f64 : jamais d’exposant, aller-retour exact
    format!("{x}")
}
