//! Noyau calculatrice
//!
//! Organisation interne :
//! - erreurs.rs : sortes d'erreurs + messages utilisateur
//! - jetons.rs  : expression structurée (Nombre/Operateur) + tokenisation
//! - rpn.rs     : shunting-yard + repli f64
//! - eval.rs    : pipeline complet (validations -> RPN -> format)
//! - format.rs  : normalisation des résultats (10 décimales)
//! - moteur.rs  : machine à états des intentions + instantané d'affichage

pub mod erreurs;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod moteur;
pub mod rpn;

#[cfg(test)]
mod tests_machine;


// API publique minimale
pub use jetons::Operateur;
pub use moteur::{Affichage, Moteur, DELAI_RECUPERATION};
