//! Tests machine (campagne) : les propriétés observables de la machine à
//! états, pilotées par scripts d'intentions.
//!
//! Convention de script (voir `tape`):
//! - '0'..'9' = chiffre, '.' = point, '+', '-', '*', '/' = opérateur,
//!   '=' = égal, '<' = retour arrière, 'C' = effacement total,
//!   l'espace est ignoré (lisibilité).

use super::jetons::Operateur;
use super::moteur::Moteur;

fn tape(m: &mut Moteur, script: &str) {
    for c in script.chars() {
        match c {
            ' ' => {}
            '0'..='9' => m.chiffre(c),
            '.' => m.decimale(),
            '+' | '-' | '*' | '/' | '×' => {
                let op = Operateur::depuis_caractere(c).expect("opérateur de script");
                m.operateur(op);
            }
            '=' => m.egal(),
            '<' => m.retour_arriere(),
            'C' => m.tout_effacer(),
            autre => panic!("caractère de script inconnu: {autre:?}"),
        }
    }
}

fn machine(script: &str) -> Moteur {
    let mut m = Moteur::default();
    tape(&mut m, script);
    m
}

fn assert_saisie(script: &str, attendu: &str) {
    let m = machine(script);
    let a = m.affichage();
    assert!(!a.erreur, "script={script:?}: erreur inattendue {:?}", a.saisie);
    assert_eq!(a.saisie, attendu, "script={script:?}");
}

fn assert_erreur(script: &str, message: &str) {
    let a = machine(script).affichage();
    assert!(a.erreur, "script={script:?}: erreur attendue");
    assert_eq!(a.saisie, message, "script={script:?}");
    assert_eq!(a.expression, "Erreur", "script={script:?}");
}

/* ------------------------ Saisie de chiffres ------------------------ */

#[test]
fn suite_de_chiffres_apres_effacement() {
    assert_saisie("C 123", "123");
    assert_saisie("C 102", "102");
    // zéros de tête effondrés en un seul "0" de départ
    assert_saisie("C 007", "7");
    assert_saisie("C 000", "0");
    assert_saisie("C 0.5", "0.5");
}

#[test]
fn point_unique_par_jeton() {
    assert_saisie("1.5.2", "1.52");
    // point en début de jeton => "0."
    assert_saisie("C .5", "0.5");
    assert_saisie("1 + .5", "0.5");
}

/* ------------------------ Évaluation ------------------------ */

#[test]
fn addition_et_bandeau() {
    let m = machine("2 + 3 =");
    let a = m.affichage();
    assert_eq!(a.saisie, "5");
    assert_eq!(a.expression, "2 + 3 =");
}

#[test]
fn substitution_operateur() {
    // deux opérateurs d'affilée : le second remplace le premier
    let m = machine("1 + - 2 =");
    let a = m.affichage();
    assert_eq!(a.saisie, "-1");
    assert_eq!(a.expression, "1 - 2 =");
}

#[test]
fn substitution_operateur_multiple() {
    let m = machine("6 + * / 2 =");
    let a = m.affichage();
    assert_eq!(a.saisie, "3");
    assert_eq!(a.expression, "6 / 2 =");
}

#[test]
fn operateur_final_en_suspens_ignore() {
    // "7 + =" évalue "7", pas une erreur
    let m = machine("7 + =");
    let a = m.affichage();
    assert_eq!(a.saisie, "7");
    assert_eq!(a.expression, "7 =");
}

#[test]
fn chaine_longue_associativite() {
    assert_saisie("8 - 3 - 2 =", "3");
    assert_saisie("2 + 3 * 4 =", "14");
}

/* ------------------------ Division par zéro ------------------------ */

#[test]
fn division_par_zero_litteral() {
    assert_erreur("5 / 0 =", "Division par zéro");
}

#[test]
fn division_par_zero_virgule_passe() {
    assert_saisie("5 / 0.5 =", "10");
}

/* ------------------------ Égal répété ------------------------ */

#[test]
fn egal_idempotent() {
    let mut m = machine("2 + 3 =");
    assert_eq!(m.affichage().saisie, "5");

    m.egal();
    let a = m.affichage();
    assert!(!a.erreur);
    assert_eq!(a.saisie, "5");

    m.egal();
    assert_eq!(m.affichage().saisie, "5");
}

#[test]
fn egal_sur_machine_vierge_donne_zero() {
    // machine vierge: saisie "0", expression vide => "0" s'évalue en 0
    assert_saisie("=", "0");
}

/* ------------------------ Retour arrière ------------------------ */

#[test]
fn retour_arriere_dans_la_saisie() {
    assert_saisie("123 <", "12");
    assert_saisie("5 <", "0");
    assert_saisie("0.5 < <", "0");
}

#[test]
fn retour_arriere_franchit_l_operateur() {
    // un seul appui retire l'opérateur en attente et restaure l'opérande
    let m = machine("1 + <");
    let a = m.affichage();
    assert_eq!(a.saisie, "1");
    assert_eq!(a.expression, "");

    let m = machine("1 + < <");
    assert_eq!(m.affichage().saisie, "0");
}

#[test]
fn retour_arriere_restaure_l_operande_entier() {
    let m = machine("12 + <");
    let a = m.affichage();
    assert_eq!(a.saisie, "12");
    assert_eq!(a.expression, "");
}

#[test]
fn retour_arriere_edite_le_resultat_apres_egal() {
    // après un égal l'expression est vide: le résultat s'édite
    // caractère par caractère, sans franchissement d'opérateur
    let m = machine("2 + 3 = <");
    let a = m.affichage();
    assert!(!a.erreur);
    assert_eq!(a.saisie, "0");
}

#[test]
fn retour_arriere_laisse_un_litteral_partiel() {
    // rogner un résultat négatif laisse "-" : état légitime, pas une erreur
    let m = machine("1 - 2 = <");
    let a = m.affichage();
    assert!(!a.erreur);
    assert_eq!(a.saisie, "-");

    let m = machine("1 - 2 = < <");
    assert_eq!(m.affichage().saisie, "0");
}

#[test]
fn retour_arriere_puis_reprise() {
    // on efface l'opérateur, on peut repartir proprement
    assert_saisie("1 + < * 2 =", "2");
}

#[test]
fn retour_arriere_sur_machine_vierge_inerte() {
    assert_saisie("< < <", "0");
}

/* ------------------------ Formatage des résultats ------------------------ */

#[test]
fn entier_sans_point_decimal() {
    assert_saisie("4 * 0.25 =", "1");
    assert_saisie("10 / 4 =", "2.5");
}

#[test]
fn jamais_plus_de_dix_decimales() {
    let m = machine("1 / 3 =");
    let a = m.affichage();
    assert_eq!(a.saisie, "0.3333333333");
    // ni zéros de queue
    assert_saisie("0.1 + 0.2 =", "0.3");
}

/* ------------------------ Enchaînements après égal ------------------------ */

#[test]
fn resultat_negatif_reutilisable() {
    // -1 redevient opérande de l'expression suivante
    let m = machine("1 - 2 = * 3 =");
    let a = m.affichage();
    assert_eq!(a.saisie, "-3");
    assert_eq!(a.expression, "-1 × 3 =");
}

#[test]
fn point_apres_egal_repart_de_zero() {
    let m = machine("2 + 3 = .5");
    let a = m.affichage();
    assert_eq!(a.saisie, "0.5");
    assert_eq!(a.expression, "");
}

/* ------------------------ Récupération d'erreur ------------------------ */

#[test]
fn effacement_sort_de_l_erreur() {
    let mut m = machine("5 / 0 =");
    assert!(m.affichage().erreur);

    m.tout_effacer();
    let a = m.affichage();
    assert!(!a.erreur);
    assert_eq!(a.saisie, "0");
    assert_eq!(a.expression, "");

    // la machine est de nouveau pleinement opérante
    tape(&mut m, "2 + 2 =");
    assert_eq!(m.affichage().saisie, "4");
}
