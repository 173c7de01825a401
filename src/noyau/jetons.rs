// src/noyau/jetons.rs
//
// Deux familles de jetons:
// - Jeton / Operateur : l'expression EN COURS DE SAISIE, stockée structurée
//   (liste typée nombre/opérateur) au lieu d'un texte épissé à offsets fixes.
//   Le texte n'est produit qu'à la frontière affichage/évaluation.
// - Tok : la tokenisation du TEXTE complet au moment de l'évaluation.

use super::erreurs::ErreurCalc;

/* ------------------------ Opérateurs ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Division,
}

impl Operateur {
    /// Symbole affiché (× pour la multiplication, comme sur le pavé).
    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '×',
            Operateur::Division => '/',
        }
    }

    /// Depuis un caractère clavier. '*' et '×' donnent tous deux Fois.
    pub fn depuis_caractere(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '×' | '*' => Some(Operateur::Fois),
            '/' => Some(Operateur::Division),
            _ => None,
        }
    }
}

/* ------------------------ Expression structurée ------------------------ */

/// Un élément du préfixe d'expression accumulé par le moteur.
/// Invariant (maintenu par moteur.rs): la liste alterne Nombre/Operateur
/// et se termine par un Operateur quand elle est non vide.
#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    /// Texte source du nombre, tel que saisi ("0.5", "-1", "12").
    Nombre(String),
    Operateur(Operateur),
}

/// Rend le préfixe d'expression en texte "n op n op " (espace final inclus
/// après chaque jeton — le format historique de l'affichage).
pub fn rendre_expression(jetons: &[Jeton]) -> String {
    let mut out = String::new();
    for j in jetons {
        match j {
            Jeton::Nombre(n) => out.push_str(n),
            Jeton::Operateur(op) => out.push(op.symbole()),
        }
        out.push(' ');
    }
    out
}

/* ------------------------ Tokenisation (texte -> Tok) ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LPar,
    RPar,
}

/// Tokenize le texte d'une expression complète.
/// Supporte:
/// - littéraux décimaux (ex: 12, 0.5, 3.)
/// - opérateurs + - * /
/// - parenthèses ( )
///
/// Précondition (garantie par eval.rs): l'alphabet a déjà été validé,
/// donc tout caractère inattendu ici est une malformation structurelle.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        match c {
            '(' => {
                out.push(Tok::LPar);
                i += 1;
                continue;
            }
            ')' => {
                out.push(Tok::RPar);
                i += 1;
                continue;
            }
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Tok::Star);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Littéral décimal: chiffres puis éventuellement '.' + chiffres.
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
            let lit: String = chars[start..i].iter().collect();
            let v: f64 = lit.parse().map_err(|_| ErreurCalc::ExpressionInvalide)?;
            out.push(Tok::Num(v));
            continue;
        }

        return Err(ErreurCalc::ExpressionInvalide);
    }

    Ok(out)
}
