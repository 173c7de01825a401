// src/noyau/erreurs.rs
//
// Erreurs du noyau — toutes non fatales, toutes affichables.
// Contrat: aucune erreur ne traverse la frontière du moteur autrement
// que sous forme d'état d'erreur affichable (voir moteur.rs).

use std::fmt;

/// Marqueur affiché à la place de l'expression pendant l'état d'erreur.
pub const MARQUEUR_ERREUR: &str = "Erreur";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErreurCalc {
    /// Rien à évaluer (expression vide ou blanche).
    EntreeVide,
    /// Division par un littéral zéro exact (détection textuelle, voir eval.rs).
    DivisionParZero,
    /// Caractère hors de l'alphabet autorisé (chiffres, + - * / . ( ), espace).
    CaracteresInvalides,
    /// L'évaluation a produit NaN.
    ResultatNonNumerique,
    /// L'évaluation a produit ±∞ (ex: division par un zéro calculé).
    ResultatInfini,
    /// Texte structurellement malformé (parenthèses non fermées, opérateur orphelin…).
    ExpressionInvalide,
}

impl fmt::Display for ErreurCalc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ErreurCalc::EntreeVide => "Entrée vide",
            ErreurCalc::DivisionParZero => "Division par zéro",
            ErreurCalc::CaracteresInvalides => "Caractères invalides dans l'expression",
            ErreurCalc::ResultatNonNumerique => "Résultat non numérique (NaN)",
            ErreurCalc::ResultatInfini => "Résultat infini",
            ErreurCalc::ExpressionInvalide => "Expression invalide",
        };
        f.write_str(msg)
    }
}
