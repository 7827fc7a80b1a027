//! Noyau — évaluation par descente récursive
//!
//! expression := term (('+' | '-') term)*
//! term       := factor (('*' | '/') factor)*
//! factor     := ('+' | '-') factor | '(' expression ')' | number
//! number     := chiffre+ ('.' chiffre*)?   ("3." toléré, ".5" refusé)
//!
//! Pas d’AST : chaque règle calcule directement son f64.
//! Le curseur est passé par `&mut` d’une règle à l’autre.

use tracing::debug;

use super::curseur::Curseur;
use super::erreur::{ErreurEval, ErreurSyntaxe};
use super::reglages::{Reglages, PROFONDEUR_MAX};

/// API publique : évalue avec les réglages par défaut (permissifs).
pub fn evaluate(texte: &str) -> Result<f64, ErreurEval> {
    evaluate_with(texte, &Reglages::default())
}

/// Évalue `texte` en entier : après l’expression, seuls des espaces sont admis.
pub fn evaluate_with(texte: &str, reglages: &Reglages) -> Result<f64, ErreurEval> {
    let mut c = Curseur::new(texte);

    let x = expression(&mut c, reglages, 0)?;

    c.sauter_espaces();
    if !c.a_la_fin() {
        // reste non consommé (ex: ')' en trop, "3 4")
        return Err(c.erreur_ici().into());
    }

    if reglages.division_stricte && !x.is_finite() {
        debug!(entree = texte, resultat = x, "résultat non fini refusé");
        return Err(ErreurEval::NonFini(x));
    }

    debug!(entree = texte, resultat = x, "évaluation");
    Ok(x)
}

/// Lit un nombre seul, avec au plus un signe (ex: " -2.5 ").
/// Sert aux touches √ et x² qui opèrent sur l’entrée courante.
pub fn lire_nombre(texte: &str) -> Result<f64, ErreurSyntaxe> {
    let mut c = Curseur::new(texte);

    let negatif = if c.manger('-') {
        true
    } else {
        c.manger('+');
        false
    };

    c.sauter_espaces();
    let x = match c.courant() {
        Some(ch) if ch.is_ascii_digit() => number(&mut c)?,
        _ => return Err(c.erreur_ici()),
    };

    c.sauter_espaces();
    if !c.a_la_fin() {
        return Err(c.erreur_ici());
    }

    Ok(if negatif { -x } else { x })
}

/* ------------------------ Règles de grammaire ------------------------ */

fn expression(c: &mut Curseur, r: &Reglages, prof: usize) -> Result<f64, ErreurSyntaxe> {
    let mut x = term(c, r, prof)?;
    loop {
        if c.manger('+') {
            x += term(c, r, prof)?;
        } else if c.manger('-') {
            x -= term(c, r, prof)?;
        } else {
            return Ok(x);
        }
    }
}

fn term(c: &mut Curseur, r: &Reglages, prof: usize) -> Result<f64, ErreurSyntaxe> {
    let mut x = factor(c, r, prof)?;
    loop {
        if c.manger('*') {
            x *= factor(c, r, prof)?;
        } else if c.manger('/') {
            // IEEE-754 : pas de cas particulier pour 0 ici
            x /= factor(c, r, prof)?;
        } else {
            return Ok(x);
        }
    }
}

fn factor(c: &mut Curseur, r: &Reglages, prof: usize) -> Result<f64, ErreurSyntaxe> {
    // signes unaires : repliés en boucle, autant qu’on veut
    let mut negatif = false;
    loop {
        if c.manger('-') {
            negatif = !negatif;
        } else if !c.manger('+') {
            break;
        }
    }

    let x = primaire(c, r, prof)?;
    Ok(if negatif { -x } else { x })
}

/// '(' expression ')' | number
fn primaire(c: &mut Curseur, r: &Reglages, prof: usize) -> Result<f64, ErreurSyntaxe> {
    if c.manger('(') {
        // seules les parenthèses font grandir la pile
        if prof >= PROFONDEUR_MAX {
            return Err(ErreurSyntaxe::TropProfond {
                position: c.position() - 1,
            });
        }
        let x = expression(c, r, prof + 1)?;
        if !c.manger(')') && r.parentheses_strictes {
            return Err(c.erreur_ici());
        }
        return Ok(x);
    }

    // manger() a déjà sauté les espaces ; un nombre commence par un chiffre
    match c.courant() {
        Some(ch) if ch.is_ascii_digit() => number(c),
        _ => Err(c.erreur_ici()),
    }
}

fn est_car_nombre(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '.'
}

/// Suite maximale de chiffres/points (le curseur est sur un chiffre),
/// convertie tout de suite en f64.
/// "3." est accepté (= 3.0) ; "1.2.3" ne l’est pas.
fn number(c: &mut Curseur) -> Result<f64, ErreurSyntaxe> {
    let position = c.position();
    let texte = c.prendre_tant_que(est_car_nombre);

    if texte.chars().filter(|&ch| ch == '.').count() > 1 {
        return Err(ErreurSyntaxe::NombreMalforme { texte, position });
    }

    texte
        .parse::<f64>()
        .map_err(|_| ErreurSyntaxe::NombreMalforme { texte, position })
}
