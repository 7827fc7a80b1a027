//! Propriétés de l’évaluateur (campagne) : cas de base + aller-retour.
//!
//! Notes :
//! - Aller-retour : format_resultat(x) est relu comme un nombre (ou -nombre)
//!   et doit redonner exactement x (bits égaux), pour tout x fini.
//! - Les entrées générées restent petites (profondeur 4) : budget court.

use std::time::{Duration, Instant};

use super::tests_fuzz_safe::{budget, gen_expr, gen_nombre, Rng};
use super::{evaluate, evaluate_with, format_resultat, ErreurEval, Reglages};

fn eval_ok(expr: &str) -> f64 {
    evaluate(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_syntaxe(expr: &str) {
    match evaluate(expr) {
        Err(ErreurEval::Syntaxe(_)) => {}
        autre => panic!("erreur de syntaxe attendue pour expr={expr:?}, obtenu {autre:?}"),
    }
}

/* ------------------------ Cas de base ------------------------ */

#[test]
fn prop_cas_de_base() {
    assert_eq!(eval_ok("2+3*4"), 14.0);
    assert_eq!(eval_ok("(2+3)*4"), 20.0);
    assert_eq!(eval_ok("--5"), 5.0);
    assert_eq!(eval_ok("+-5"), -5.0);
    assert_eq!(eval_ok("10/4"), 2.5);
    assert_eq!(eval_ok("2++3"), 5.0);
    assert_syntaxe("");
    assert_syntaxe("1+");
}

#[test]
fn prop_division_par_zero_coherente() {
    // défaut : IEEE-754
    assert_eq!(eval_ok("1/0"), f64::INFINITY);

    // strict : toujours NonFini, jamais Syntaxe
    let r = Reglages {
        division_stricte: true,
        ..Reglages::default()
    };
    for s in ["1/0", "-1/0", "0/0", "(1/0)*0", "2/(3-3)"] {
        assert!(
            matches!(evaluate_with(s, &r), Err(ErreurEval::NonFini(_))),
            "s={s:?}"
        );
    }
}

/* ------------------------ Aller-retour numérique ------------------------ */

#[test]
fn prop_aller_retour_format() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0x5EED_u64);
    let mut vus = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let x = eval_ok(&expr);
        if !x.is_finite() {
            continue;
        }

        let texte = format_resultat(x);
        let y = evaluate(&texte).unwrap_or_else(|e| panic!("relecture {texte:?} err={e}"));
        assert_eq!(
            x.to_bits(),
            y.to_bits(),
            "aller-retour: expr={expr:?} texte={texte:?}"
        );
        vus += 1;
    }

    assert!(vus > 100, "trop peu de résultats finis: {vus}");
}

#[test]
fn prop_aller_retour_valeurs_extremes() {
    for x in [
        f64::MAX,
        f64::MIN,
        f64::MIN_POSITIVE,
        f64::EPSILON,
        1e-300,
        123_456_789.125,
        -0.0,
    ] {
        let texte = format_resultat(x);
        assert_eq!(evaluate(&texte), Ok(x), "texte={texte:?}");
    }
}

/* ------------------------ Nombre seul entouré d’espaces ------------------------ */

#[test]
fn prop_nombre_seul_avec_espaces() {
    let mut rng = Rng::new(0xFEED_u64);

    for _ in 0..300 {
        let n = gen_nombre(&mut rng);
        let avant = " ".repeat(rng.pick(4) as usize);
        let apres = " ".repeat(rng.pick(4) as usize);
        let s = format!("{avant}{n}{apres}");

        let attendu: f64 = n
            .parse()
            .unwrap_or_else(|e| panic!("nombre généré invalide {n:?}: {e}"));
        assert_eq!(eval_ok(&s), attendu, "s={s:?}");

        if rng.coin() {
            // la politique stricte ne touche pas un nombre seul
            assert_eq!(evaluate_with(&s, &Reglages::strict()), Ok(attendu));
        }
    }
}
