// src/noyau/format.rs
//
// Normalisation des résultats pour l'affichage:
// - arrondi à 10 décimales
// - entier  -> sans point décimal
// - fraction -> au plus 10 chiffres après le point, sans zéros de queue

/// Nombre de décimales conservées à l'affichage.
const DECIMALES: i32 = 10;

/// Arrondit à 10 décimales. Une valeur déjà entière est rendue telle quelle:
/// la mise à l'échelle ×1e10 n'est pas exacte en f64 et fabriquerait une
/// fausse partie fractionnaire sur les grands entiers. Même garde si la mise
/// à l'échelle déborde.
fn arrondi_decimales(x: f64) -> f64 {
    if x == x.trunc() {
        return x;
    }
    let echelle = 10f64.powi(DECIMALES);
    let y = (x * echelle).round() / echelle;
    if y.is_finite() {
        y
    } else {
        x
    }
}

/// Formate un résultat fini pour l'affichage.
///
/// Précondition (garantie par eval.rs): x est fini.
pub fn formater_resultat(x: f64) -> String {
    let v = arrondi_decimales(x);

    // -0.0 s'affiche "0"
    if v == 0.0 {
        return "0".to_string();
    }

    if v == v.trunc() {
        return format!("{v:.0}");
    }

    let s = format!("{v:.10}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
