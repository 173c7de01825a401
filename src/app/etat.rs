//! src/app/etat.rs
//!
//! État UI (sans vue, sans egui).
//!
//! Rôle : posséder le moteur d'expression et le chronomètre de récupération
//! d'erreur — c'est le “collaborateur minuterie” du noyau. Le moteur expose
//! la consigne (DELAI_RECUPERATION), l'UI possède l'échéance.
//!
//! Contrats :
//! - L'échéance est un état explicite : armée à l'ENTRÉE en erreur,
//!   annulée sur toute transition qui sort de l'erreur (Échap compris).
//!   Une erreur qui en remplace une autre remplace aussi l'échéance ;
//!   aucun chronomètre périmé ne peut effacer un état ultérieur.

use crate::noyau::{Moteur, DELAI_RECUPERATION};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub moteur: Moteur,

    // Échéance de récupération, en secondes d'horloge egui (f64 pour rester
    // portable en wasm32, où std::time::Instant n'existe pas).
    echeance_recuperation: Option<f64>,
}

impl AppCalc {
    /// Effacement total : remet le moteur à zéro ET annule le chronomètre.
    pub fn tout_effacer(&mut self) {
        self.moteur.tout_effacer();
        self.echeance_recuperation = None;
    }

    /// À appeler une fois par frame avec l'horloge egui.
    /// Arme l'échéance à l'entrée en erreur, la déclenche une fois passée,
    /// l'annule dès que le moteur n'est plus en erreur.
    pub fn tic(&mut self, temps: f64) {
        if !self.moteur.en_erreur() {
            self.echeance_recuperation = None;
            return;
        }

        let echeance = *self
            .echeance_recuperation
            .get_or_insert(temps + DELAI_RECUPERATION.as_secs_f64());

        if temps >= echeance {
            self.tout_effacer();
        }
    }

    /// Temps restant avant récupération, si un chronomètre est armé.
    /// Sert à planifier le prochain repaint.
    pub fn recuperation_dans(&self, temps: f64) -> Option<f64> {
        self.echeance_recuperation
            .map(|echeance| (echeance - temps).max(0.0))
    }
}
