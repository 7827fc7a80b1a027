//! # calculatrice_flottante
//!
//! Calculatrice à virgule flottante : un évaluateur d’expressions arithmétiques
//! par descente récursive (`noyau`) et l’état d’une calculatrice à touches qui
//! l’utilise (`app`).
//!
//! ```
//! use calculatrice_flottante::noyau::evaluate;
//!
//! assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
//! assert!(evaluate("1+").is_err());
//! ```

pub mod app;
pub mod noyau;

pub use noyau::{evaluate, evaluate_with, ErreurEval, ErreurSyntaxe, Reglages};
