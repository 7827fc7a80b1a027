// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc + Touche (pour main.rs)
//
// Important:
// - etat.rs ne connaît pas le noyau ; vue.rs fait le lien touches -> noyau -> état.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::{AppCalc, TEXTE_ERREUR};
pub use vue::{touche_depuis_char, Touche};
