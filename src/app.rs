// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Le clavier est entièrement traité ici, au niveau du contexte: il n'y a
//   aucun champ de saisie, donc pas de question de focus.
// - Pendant l'état d'erreur, seul Échap est accepté.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Operateur;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let temps = ctx.input(|i| i.time);

        self.clavier(ctx);

        // Chronomètre de récupération (armement / déclenchement / annulation).
        self.tic(temps);

        // Tant qu'une échéance court, on garde la boucle de frames vivante
        // pour qu'elle se déclenche même sans entrée utilisateur.
        if let Some(restant) = self.recuperation_dans(temps) {
            ctx.request_repaint_after(std::time::Duration::from_secs_f64(restant.min(0.25)));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}

impl AppCalc {
    /// Correspondance clavier -> intentions:
    /// 0-9, '.', '+', '-', '/', '×' ('*' compris), '=', Entrée, Retour, Échap.
    fn clavier(&mut self, ctx: &egui::Context) {
        // Échap = effacement total. Seule touche acceptée en état d'erreur.
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.tout_effacer();
            return;
        }
        if self.moteur.en_erreur() {
            return;
        }

        let evenements = ctx.input(|i| i.events.clone());
        for evt in evenements {
            match evt {
                egui::Event::Text(texte) => {
                    for c in texte.chars() {
                        match c {
                            '0'..='9' => self.moteur.chiffre(c),
                            '.' => self.moteur.decimale(),
                            '=' => self.moteur.egal(),
                            autre => {
                                if let Some(op) = Operateur::depuis_caractere(autre) {
                                    self.moteur.operateur(op);
                                }
                            }
                        }
                    }
                }

                egui::Event::Key {
                    key: egui::Key::Enter,
                    pressed: true,
                    ..
                } => self.moteur.egal(),

                egui::Event::Key {
                    key: egui::Key::Backspace,
                    pressed: true,
                    ..
                } => self.moteur.retour_arriere(),

                _ => {}
            }
        }
    }
}
