// src/main.rs
//
// Calculatrice flottante — point d’entrée terminal
// ------------------------------------------------
// But:
// - Avec des expressions en arguments : une ligne de sortie par expression
//   (résultat, ou "Error"), code de sortie 1 si au moins une a échoué
// - Sans argument : mode interactif, chaque ligne lue est “tapée” sur les touches
//   ('=' évalue ; Entrée ne fait qu’afficher l’écran)
// - Journalisation : RUST_LOG, sinon -v / -vv

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use calculatrice_flottante::app::{AppCalc, TEXTE_ERREUR};
use calculatrice_flottante::noyau::{evaluate_with, format_resultat, Reglages};

/// Calculatrice à virgule flottante (+ - * / parenthèses, signes unaires).
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Une parenthèse ouvrante non refermée devient une erreur.
    #[arg(long)]
    strict_parens: bool,

    /// Un résultat infini ou NaN (division par zéro) devient une erreur.
    #[arg(long)]
    strict_division: bool,

    /// Plus de journalisation (-v : info, -vv : debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Expressions à évaluer. Sans expression : mode interactif sur stdin.
    #[arg(allow_hyphen_values = true)]
    expressions: Vec<String>,
}

impl Args {
    fn reglages(&self) -> Reglages {
        Reglages {
            parentheses_strictes: self.strict_parens,
            division_stricte: self.strict_division,
        }
    }
}

fn installer_journal(verbose: u8) {
    let niveau = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(niveau));

    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(io::stderr)
        .init();
}

/// Mode arguments : "Error" pour l’utilisateur, détail dans le journal.
fn evaluer_arguments(expressions: &[String], reglages: &Reglages) -> anyhow::Result<bool> {
    let mut stdout = io::stdout().lock();
    let mut tout_ok = true;

    for expr in expressions {
        let ligne = match evaluate_with(expr, reglages) {
            Ok(x) => format_resultat(x),
            Err(e) => {
                let genre = if e.est_syntaxe() { "syntaxe" } else { "non fini" };
                tracing::warn!(entree = %expr, genre, erreur = %e, "évaluation impossible");
                tout_ok = false;
                TEXTE_ERREUR.to_string()
            }
        };
        writeln!(stdout, "{ligne}").context("écriture stdout")?;
    }

    Ok(tout_ok)
}

/// Mode interactif : une ligne = une suite de touches, puis rendu de l’écran.
fn boucle_interactive(reglages: Reglages) -> anyhow::Result<()> {
    let mut app = AppCalc::new(reglages);

    let erreurs = app
        .session(io::stdin().lock(), io::stdout().lock())
        .context("session interactive (stdin/stdout)")?;

    tracing::info!(erreurs, "fin de l’entrée, au revoir");
    Ok(())
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    installer_journal(args.verbose);

    let reglages = args.reglages();
    tracing::info!(?reglages, "démarrage");

    if args.expressions.is_empty() {
        boucle_interactive(reglages)?;
        return Ok(ExitCode::SUCCESS);
    }

    if evaluer_arguments(&args.expressions, &reglages)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
