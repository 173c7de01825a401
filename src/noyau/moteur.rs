//! src/noyau/moteur.rs
//!
//! Moteur d'expression (machine à états).
//!
//! Rôle : accumuler les intentions utilisateur (chiffre, point, opérateur,
//! égal, retour arrière, effacement) dans une expression bien formée,
//! demander l'évaluation au pipeline (eval.rs) et produire un instantané
//! d'affichage après chaque intention.
//!
//! Contrats :
//! - Aucune intention ne panique ; toute défaillance devient un état
//!   d'erreur affichable.
//! - Pendant l'état d'erreur, seule `tout_effacer` agit (le collaborateur
//!   UI n'accepte alors qu'Échap, voir app.rs).
//! - `expression` alterne Nombre/Operateur et finit par un Operateur
//!   quand elle est non vide.

use std::time::Duration;

use super::erreurs::{ErreurCalc, MARQUEUR_ERREUR};
use super::eval::evaluer_texte;
use super::jetons::{rendre_expression, Jeton, Operateur};

/// Délai avant récupération automatique après une erreur.
/// Le chronomètre appartient au collaborateur UI (voir app/etat.rs),
/// le moteur ne fait qu'exposer la consigne.
pub const DELAI_RECUPERATION: Duration = Duration::from_millis(3000);

/// Instantané de rendu, lu par la vue après chaque intention.
#[derive(Clone, Debug, PartialEq)]
pub struct Affichage {
    /// Saisie courante (ou message d'erreur pendant l'état d'erreur).
    pub saisie: String,
    /// Préfixe d'expression, bandeau "… =" après un égal, ou marqueur d'erreur.
    pub expression: String,
    pub erreur: bool,
}

#[derive(Clone, Debug)]
pub struct Moteur {
    /// Jeton en cours de frappe (toujours un littéral numérique valide).
    saisie: String,
    /// Préfixe accumulé, structuré (jamais de texte épissé à offsets).
    expression: Vec<Jeton>,
    /// La prochaine saisie de chiffre/point démarre un jeton neuf.
    nouvelle_saisie: bool,
    erreur: Option<ErreurCalc>,
    /// Dernier résultat formaté ; amorce l'expression suivante après un égal.
    dernier_resultat: Option<String>,
    /// Bandeau "<expression> =" affiché après un égal réussi,
    /// remplacé dès la prochaine intention mutante.
    bandeau: Option<String>,
}

impl Default for Moteur {
    fn default() -> Self {
        Self {
            saisie: "0".to_string(),
            expression: Vec::new(),
            nouvelle_saisie: false,
            erreur: None,
            dernier_resultat: None,
            bandeau: None,
        }
    }
}

impl Moteur {
    /* ------------------------ Intentions ------------------------ */

    /// Intention chiffre. Taper après un égal efface l'historique au lieu
    /// d'enchaîner ; un "0" seul est remplacé plutôt que préfixé.
    pub fn chiffre(&mut self, c: char) {
        if self.erreur.is_some() || !c.is_ascii_digit() {
            return;
        }

        if self.dernier_resultat.is_some() && self.nouvelle_saisie {
            self.tout_effacer();
        }

        if self.nouvelle_saisie {
            self.saisie = c.to_string();
            self.nouvelle_saisie = false;
        } else if self.saisie == "0" {
            self.saisie = c.to_string();
        } else {
            self.saisie.push(c);
        }

        self.dernier_resultat = None;
        self.bandeau = None;
    }

    /// Intention point décimal. Au plus un point par jeton ; un jeton neuf
    /// démarre à "0.".
    pub fn decimale(&mut self) {
        if self.erreur.is_some() {
            return;
        }

        if self.dernier_resultat.is_some() && self.nouvelle_saisie {
            self.tout_effacer();
        }

        if self.nouvelle_saisie {
            self.saisie = "0.".to_string();
            self.nouvelle_saisie = false;
        } else if !self.saisie.contains('.') {
            self.saisie.push('.');
        }

        self.dernier_resultat = None;
        self.bandeau = None;
    }

    /// Intention opérateur. Trois issues :
    /// - un résultat est en attente : il amorce une nouvelle expression
    ///   (les deux variantes historiques convergent) ;
    /// - un opérateur vient d'être saisi : substitution en place ;
    /// - sinon : la saisie et l'opérateur sont engagés dans l'expression.
    pub fn operateur(&mut self, op: Operateur) {
        if self.erreur.is_some() {
            return;
        }
        self.bandeau = None;

        if let Some(res) = self.dernier_resultat.take() {
            self.expression = vec![Jeton::Nombre(res.clone()), Jeton::Operateur(op)];
            self.saisie = res;
            self.nouvelle_saisie = true;
        } else if self.nouvelle_saisie {
            // substitution: deux opérateurs d'affilée changent l'opérateur
            // en attente au lieu de l'empiler
            if let Some(Jeton::Operateur(o)) = self.expression.last_mut() {
                *o = op;
            }
        } else {
            self.expression.push(Jeton::Nombre(self.saisie.clone()));
            self.expression.push(Jeton::Operateur(op));
            self.nouvelle_saisie = true;
        }
    }

    /// Intention égal : assemble l'expression complète, l'évalue, et dépose
    /// soit le résultat (bandeau "… ="), soit l'état d'erreur.
    pub fn egal(&mut self) {
        if self.erreur.is_some() {
            return;
        }

        let complet = self.expression_complete();

        match evaluer_texte(&complet) {
            Ok(res) => {
                self.bandeau = Some(format!("{complet} ="));
                self.saisie = res.clone();
                self.dernier_resultat = Some(res);
                self.expression.clear();
                self.nouvelle_saisie = true;
                self.erreur = None;
            }
            Err(e) => self.entre_en_erreur(e),
        }
    }

    /// Intention retour arrière.
    /// - un opérateur est en attente (ou la saisie est "0"/vide devant une
    ///   expression) : retire le bloc opérateur final et ramène le nombre
    ///   qui le précédait en saisie — un seul appui franchit la frontière ;
    /// - sinon : retire le dernier caractère (retombe sur "0" s'il était seul).
    ///   Après un égal l'expression est vide : le résultat s'édite donc
    ///   caractère par caractère.
    pub fn retour_arriere(&mut self) {
        if self.erreur.is_some() {
            return;
        }
        self.bandeau = None;

        let operateur_en_attente = self.nouvelle_saisie && !self.expression.is_empty();
        let saisie_epuisee = self.saisie == "0" || self.saisie.is_empty();

        if (operateur_en_attente || saisie_epuisee) && !self.expression.is_empty() {
            if matches!(self.expression.last(), Some(Jeton::Operateur(_))) {
                self.expression.pop();
            }
            self.nouvelle_saisie = false;
            self.saisie = match self.expression.pop() {
                Some(Jeton::Nombre(n)) => n,
                _ => "0".to_string(),
            };
        } else if self.saisie.chars().count() > 1 {
            self.saisie.pop();
        } else {
            self.saisie = "0".to_string();
        }
    }

    /// Remise à zéro totale. Seule intention acceptée pendant l'état
    /// d'erreur ; cible aussi de la récupération automatique.
    pub fn tout_effacer(&mut self) {
        self.saisie = "0".to_string();
        self.expression.clear();
        self.nouvelle_saisie = false;
        self.erreur = None;
        self.dernier_resultat = None;
        self.bandeau = None;
    }

    /* ------------------------ Assemblage ------------------------ */

    /// Expression complète à évaluer, selon l'état (quatre cas historiques):
    /// - résultat en attente + jeton neuf entamé : résultat ++ préfixe ++ saisie
    /// - résultat en attente seul : le résultat restitué tel quel
    /// - pas de résultat, saisie en cours : préfixe ++ saisie
    /// - pas de résultat, opérateur en suspens : préfixe SANS l'opérateur final
    fn expression_complete(&self) -> String {
        match (&self.dernier_resultat, self.nouvelle_saisie) {
            (Some(res), false) => format!(
                "{res}{}{}",
                rendre_expression(&self.expression),
                self.saisie
            ),
            (Some(res), true) => res.clone(),
            (None, false) => {
                format!("{}{}", rendre_expression(&self.expression), self.saisie)
            }
            (None, true) => {
                let fin = self.expression.len().saturating_sub(1);
                rendre_expression(&self.expression[..fin])
                    .trim_end()
                    .to_string()
            }
        }
    }

    /* ------------------------ Erreur & instantané ------------------------ */

    fn entre_en_erreur(&mut self, e: ErreurCalc) {
        self.erreur = Some(e);
        self.dernier_resultat = None;
    }

    pub fn en_erreur(&self) -> bool {
        self.erreur.is_some()
    }

    /// Instantané de rendu. En état d'erreur : message en saisie, marqueur
    /// fixe en expression.
    pub fn affichage(&self) -> Affichage {
        match &self.erreur {
            Some(e) => Affichage {
                saisie: e.to_string(),
                expression: MARQUEUR_ERREUR.to_string(),
                erreur: true,
            },
            None => Affichage {
                saisie: self.saisie.clone(),
                expression: self
                    .bandeau
                    .clone()
                    .unwrap_or_else(|| rendre_expression(&self.expression)),
                erreur: false,
            },
        }
    }
}
