//! Noyau — évaluation (pipeline réel)
//!
//! texte -> validations (vide, /0 littéral, alphabet) -> tokenize -> RPN
//!       -> repli f64 -> contrôle finitude -> format
//!
//! Remarque : la division par un littéral zéro est refusée AVANT l'évaluation
//! (contrôle textuel), alors qu'un zéro calculé (ex: 5/(3-3)) suit la
//! sémantique f64 et ressort en `ResultatInfini`.

use super::erreurs::ErreurCalc;
use super::format::formater_resultat;
use super::jetons::tokenize;
use super::rpn::{eval_rpn, to_rpn};

/// API publique : évalue le texte d'une expression complète et retourne le
/// résultat formaté pour l'affichage.
///
/// Ordre des validations (chacune avec sa propre sorte d'erreur):
/// 1. expression vide / blanche
/// 2. division par un littéral zéro exact
/// 3. caractère hors alphabet
pub fn evaluer_texte(expr_str: &str) -> Result<String, ErreurCalc> {
    if expr_str.trim().is_empty() {
        return Err(ErreurCalc::EntreeVide);
    }

    // Le symbole d'affichage × devient l'étoile de calcul.
    let s = expr_str.replace('×', "*");

    if division_par_zero_litteral(&s) {
        return Err(ErreurCalc::DivisionParZero);
    }

    if !alphabet_valide(&s) {
        return Err(ErreurCalc::CaracteresInvalides);
    }

    let jetons = tokenize(&s)?;
    let rpn = to_rpn(&jetons)?;
    let v = eval_rpn(&rpn)?;

    if v.is_nan() {
        return Err(ErreurCalc::ResultatNonNumerique);
    }
    if v.is_infinite() {
        return Err(ErreurCalc::ResultatInfini);
    }

    Ok(formater_resultat(v))
}

/// Détection textuelle d'une division par un zéro littéral:
/// '/' suivi (espaces permises) d'un '0' NON suivi d'un point.
/// Ainsi "5/0.5" passe, mais "5/0" et "5/02" sont refusés.
fn division_par_zero_litteral(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();

    for (i, &c) in chars.iter().enumerate() {
        if c != '/' {
            continue;
        }

        let mut j = i + 1;
        while j < chars.len() && chars[j].is_whitespace() {
            j += 1;
        }

        if j < chars.len() && chars[j] == '0' {
            let suivant = chars.get(j + 1);
            if suivant != Some(&'.') {
                return true;
            }
        }
    }

    false
}

/// Alphabet autorisé: chiffres, + - * / . ( ) et espace.
fn alphabet_valide(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '.' | '(' | ')' | ' '))
}
