//! src/app/etat.rs
//!
//! État de la calculatrice (sans vue, sans noyau).
//!
//! Rôle : contenir le tampon de saisie + l’affichage, et offrir les opérations
//! simples (saisie, C, ⌫, dépôt d’un résultat ou d’une erreur).
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Sur erreur : affichage "Error" ET tampon vidé (l’utilisateur repart de zéro).

use crate::noyau::{format_resultat, Reglages};

/// Texte affiché quand l’évaluation échoue (aucun détail pour l’utilisateur).
pub const TEXTE_ERREUR: &str = "Error";

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- entrée utilisateur (tampon de touches) ---
    pub entree: String,

    // --- sortie ---
    pub affichage: String,

    // --- paramètres ---
    pub reglages: Reglages,
}

impl AppCalc {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            reglages,
            ..Self::default()
        }
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// Chiffre, opérateur, point, parenthèse : ajout en fin de tampon.
    pub fn saisir(&mut self, c: char) {
        self.entree.push(c);
        self.affichage = self.entree.clone();
    }

    /// C : tout effacer (tampon + affichage).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.affichage.clear();
    }

    /// ⌫ : retire le dernier caractère (rien si tampon vide).
    pub fn backspace_entree(&mut self) {
        if self.entree.pop().is_some() {
            self.affichage = self.entree.clone();
        }
    }

    /// Dépose un résultat : il devient aussi le nouveau tampon (on peut enchaîner).
    pub fn set_resultat(&mut self, x: f64) {
        let texte = format_resultat(x);
        self.affichage = texte.clone();
        self.entree = texte;
    }

    pub fn set_erreur(&mut self) {
        self.affichage = TEXTE_ERREUR.to_string();
        self.entree.clear();
    }

    pub fn est_en_erreur(&self) -> bool {
        self.affichage == TEXTE_ERREUR && self.entree.is_empty()
    }
}
