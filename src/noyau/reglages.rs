// src/noyau/reglages.rs
//
// Réglages d’évaluation (politiques de tolérance).
// Par défaut : permissif (parenthèse manquante tolérée, IEEE-754 pour la division).

/// Garde-fou : profondeur maximale d’imbrication des parenthèses
/// (les signes unaires, eux, sont repliés en boucle).
/// Au-delà, erreur de syntaxe plutôt qu’un débordement de pile.
pub const PROFONDEUR_MAX: usize = 256;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reglages {
    /// true : une parenthèse ouvrante sans ')' est une erreur de syntaxe.
    /// false : la ')' manquante est tolérée en silence.
    pub parentheses_strictes: bool,

    /// true : un résultat infini / NaN devient `ErreurEval::NonFini`.
    /// false : IEEE-754 (1/0 = inf, 0/0 = NaN).
    pub division_stricte: bool,
}

impl Reglages {
    /// Les deux politiques strictes.
    pub fn strict() -> Self {
        Self {
            parentheses_strictes: true,
            division_stricte: true,
        }
    }
}
