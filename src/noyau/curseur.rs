// src/noyau/curseur.rs
//
// Curseur de lecture (seul état mutable d’une évaluation).
// - position : index de caractère dans l’entrée
// - courant  : caractère sous le curseur, None = fin d’entrée
//
// Invariant : le curseur n’avance que vers la droite.

use super::erreur::ErreurSyntaxe;

#[derive(Clone, Debug)]
pub struct Curseur {
    chars: Vec<char>,
    pos: usize,
}

impl Curseur {
    pub fn new(s: &str) -> Self {
        Self {
            chars: s.chars().collect(),
            pos: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn courant(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    pub fn a_la_fin(&self) -> bool {
        self.pos >= self.chars.len()
    }

    pub fn avancer(&mut self) {
        if !self.a_la_fin() {
            self.pos += 1;
        }
    }

    /// Espace ASCII seulement (tab, \n, etc. restent des caractères inattendus).
    pub fn sauter_espaces(&mut self) {
        while self.courant() == Some(' ') {
            self.avancer();
        }
    }

    /// Saute les espaces puis consomme `c` s’il est sous le curseur.
    /// Sinon ne consomme rien (hors espaces) et retourne false.
    pub fn manger(&mut self, c: char) -> bool {
        self.sauter_espaces();
        if self.courant() == Some(c) {
            self.avancer();
            true
        } else {
            false
        }
    }

    /// Consomme la plus longue suite de caractères acceptés par `garde`.
    pub fn prendre_tant_que(&mut self, garde: impl Fn(char) -> bool) -> String {
        let debut = self.pos;
        while let Some(c) = self.courant() {
            if !garde(c) {
                break;
            }
            self.avancer();
        }
        self.chars[debut..self.pos].iter().collect()
    }

    /// Erreur “rien d’attendu ici” : caractère courant, ou fin d’entrée.
    pub fn erreur_ici(&self) -> ErreurSyntaxe {
        match self.courant() {
            Some(caractere) => ErreurSyntaxe::CaractereInattendu {
                caractere,
                position: self.pos,
            },
            None => ErreurSyntaxe::FinInattendue { position: self.pos },
        }
    }
}
