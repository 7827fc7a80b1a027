// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// - ErreurSyntaxe : l’entrée ne respecte pas la grammaire (toujours récupérable)
// - ErreurEval    : syntaxe OU résultat non fini (politique de division stricte)
//
// Positions = index de caractère (0 = premier caractère).

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurSyntaxe {
    #[error("caractère inattendu '{caractere}' en position {position}")]
    CaractereInattendu { caractere: char, position: usize },

    #[error("fin d’entrée inattendue en position {position}")]
    FinInattendue { position: usize },

    /// Suite de chiffres/points qui n’est pas un nombre (ex: "1.2.3", ".").
    #[error("nombre malformé \"{texte}\" en position {position}")]
    NombreMalforme { texte: String, position: usize },

    #[error("imbrication trop profonde en position {position}")]
    TropProfond { position: usize },
}

impl ErreurSyntaxe {
    pub fn position(&self) -> usize {
        match self {
            Self::CaractereInattendu { position, .. }
            | Self::FinInattendue { position }
            | Self::NombreMalforme { position, .. }
            | Self::TropProfond { position } => *position,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ErreurEval {
    #[error("expression invalide: {0}")]
    Syntaxe(#[from] ErreurSyntaxe),

    /// Seulement avec `Reglages::division_stricte`.
    #[error("résultat non fini ({0})")]
    NonFini(f64),
}

impl ErreurEval {
    pub fn est_syntaxe(&self) -> bool {
        matches!(self, Self::Syntaxe(_))
    }
}
