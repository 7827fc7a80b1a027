//! Noyau flottant
//!
//! Organisation interne :
//! - curseur.rs  : position + caractère courant (seul état mutable)
//! - eval.rs     : descente récursive expression / term / factor / number
//! - erreur.rs   : ErreurSyntaxe + ErreurEval
//! - reglages.rs : politiques (parenthèse manquante, division par zéro)
//! - format.rs   : texte d’affichage d’un résultat

pub mod curseur;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod reglages;

#[cfg(test)]
mod tests_proprietes;


// API publique minimale
pub use erreur::{ErreurEval, ErreurSyntaxe};
pub use eval::{evaluate, evaluate_with, lire_nombre};
pub use format::format_resultat;
pub use reglages::{Reglages, PROFONDEUR_MAX};
