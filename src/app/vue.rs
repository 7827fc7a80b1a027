// src/app/vue.rs
//
// Vue terminal
// ------------
// Objectifs :
// - Même AppCalc (etat.rs) quelle que soit la source des touches
// - Raccourcis clavier : '=' évalue, 'c' efface, '<' / Backspace retire un caractère
// - Session : une ligne lue = une suite de touches (Entrée n’évalue pas, '=' oui)
// - Rendu : une ligne, affichage aligné à droite (comme l’écran d’une calculatrice)
//
// Note :
// - C’est ici (pas dans etat.rs) que l’on appelle le noyau.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use super::etat::AppCalc;
use crate::noyau::{evaluate_with, lire_nombre};

/// Largeur de l’écran (rendu aligné à droite).
pub const LARGEUR_AFFICHAGE: usize = 24;

/// Touches de la calculatrice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// chiffre, '.', opérateur, parenthèse, espace
    Saisie(char),
    Egal,
    Effacer,
    Retour,
    Racine,
    Carre,
}

/// Raccourci clavier -> touche. None = caractère ignoré.
pub fn touche_depuis_char(c: char) -> Option<Touche> {
    match c {
        '0'..='9' | '.' | '+' | '-' | '*' | '/' | '(' | ')' | ' ' => Some(Touche::Saisie(c)),
        '=' => Some(Touche::Egal),
        'c' | 'C' | '\u{1b}' => Some(Touche::Effacer),
        '<' | '\u{8}' | '\u{7f}' => Some(Touche::Retour),
        '√' | 'r' => Some(Touche::Racine),
        '²' | 's' => Some(Touche::Carre),
        _ => None,
    }
}

impl AppCalc {
    /// Une pression de touche.
    pub fn appuyer(&mut self, touche: Touche) {
        debug!(?touche, entree = %self.entree, "touche");

        match touche {
            Touche::Saisie(c) => self.saisir(c),
            Touche::Egal => self.eval_via_noyau(),
            Touche::Effacer => self.clear_entree(),
            Touche::Retour => self.backspace_entree(),
            Touche::Racine => self.unaire_via_noyau("√", f64::sqrt),
            Touche::Carre => self.unaire_via_noyau("x²", |x| x * x),
        }
    }

    /// Tape une ligne entière (raccourcis clavier), retourne l’affichage.
    pub fn taper(&mut self, ligne: &str) -> &str {
        for touche in ligne.chars().filter_map(touche_depuis_char) {
            self.appuyer(touche);
        }
        &self.affichage
    }

    /// Rendu une ligne : écran aligné à droite.
    pub fn rendu(&self) -> String {
        format!("[{:>largeur$}]", self.affichage, largeur = LARGEUR_AFFICHAGE)
    }

    /// Session terminal : chaque ligne est tapée puis l’écran est rendu.
    /// Retourne le nombre de lignes qui ont laissé l’écran en erreur.
    pub fn session(
        &mut self,
        lecteur: impl BufRead,
        mut ecrivain: impl Write,
    ) -> io::Result<usize> {
        let mut erreurs = 0usize;

        for ligne in lecteur.lines() {
            let ligne = ligne?;
            self.taper(&ligne);
            if self.est_en_erreur() {
                erreurs += 1;
            }
            writeln!(ecrivain, "{}", self.rendu())?;
        }

        Ok(erreurs)
    }

    fn eval_via_noyau(&mut self) {
        match evaluate_with(&self.entree, &self.reglages) {
            Ok(x) => self.set_resultat(x),
            Err(e) => {
                warn!(entree = %self.entree, erreur = %e, "évaluation impossible");
                self.set_erreur();
            }
        }
    }

    /// √ et x² : l’entrée doit être un nombre seul (vide = 0).
    fn unaire_via_noyau(&mut self, nom: &str, f: impl Fn(f64) -> f64) {
        let lu = if self.entree.trim_matches(' ').is_empty() {
            Ok(0.0)
        } else {
            lire_nombre(&self.entree)
        };

        match lu {
            Ok(x) => self.set_resultat(f(x)),
            Err(e) => {
                warn!(operation = nom, entree = %self.entree, erreur = %e, "opérande invalide");
                self.set_erreur();
            }
        }
    }
}
