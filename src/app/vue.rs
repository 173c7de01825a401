// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Affichage en deux lignes : expression (ou bandeau "… =") + saisie
// - Saisie colorée en rouge d'erreur pendant l'état d'erreur
// - Tactile : gros boutons, pavé 4 colonnes
//
// Note :
// - Le clavier est géré dans app.rs (au niveau du contexte, pas d'un champ
//   focalisé : il n'y a aucun TextEdit ici, l'affichage est en lecture seule).

use eframe::egui;

use crate::noyau::Operateur;

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    /* ------------------------ Écran ------------------------ */

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let a = self.moteur.affichage();

        // Ligne du haut: expression en cours ou bandeau "… ="
        Self::champ_monospace(ui, "ecran_expression", &a.expression, 1, None);

        // Ligne du bas: saisie courante (ou message d'erreur, en rouge)
        let couleur = if a.erreur {
            Some(ui.visuals().error_fg_color)
        } else {
            None
        };
        Self::champ_monospace(ui, "ecran_saisie", &a.saisie, 2, couleur);
    }

    fn champ_monospace(
        ui: &mut egui::Ui,
        id: &str,
        contenu: &str,
        rows: usize,
        couleur: Option<egui::Color32>,
    ) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        match couleur {
                            Some(c) => {
                                ui.colored_label(c, egui::RichText::new(contenu).monospace())
                            }
                            None => ui.monospace(contenu),
                        }
                    });
                });
            });
    }

    /* ------------------------ Pavé ------------------------ */

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let en_erreur = self.moteur.affichage().erreur;

        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                // Pendant l'état d'erreur, seul C reste actif — comme Échap.
                self.bouton_action(ui, "C", "Remise à zéro totale", true, |app| {
                    app.tout_effacer();
                });
                self.bouton_action(ui, "DEL", "Efface le dernier symbole", !en_erreur, |app| {
                    app.moteur.retour_arriere();
                });
                self.bouton_operateur(ui, Operateur::Division, !en_erreur);
                self.bouton_operateur(ui, Operateur::Fois, !en_erreur);
                ui.end_row();

                self.bouton_chiffre(ui, '7', !en_erreur);
                self.bouton_chiffre(ui, '8', !en_erreur);
                self.bouton_chiffre(ui, '9', !en_erreur);
                self.bouton_operateur(ui, Operateur::Moins, !en_erreur);
                ui.end_row();

                self.bouton_chiffre(ui, '4', !en_erreur);
                self.bouton_chiffre(ui, '5', !en_erreur);
                self.bouton_chiffre(ui, '6', !en_erreur);
                self.bouton_operateur(ui, Operateur::Plus, !en_erreur);
                ui.end_row();

                self.bouton_chiffre(ui, '1', !en_erreur);
                self.bouton_chiffre(ui, '2', !en_erreur);
                self.bouton_chiffre(ui, '3', !en_erreur);
                self.bouton_action(ui, "=", "Évalue l'expression", !en_erreur, |app| {
                    app.moteur.egal();
                });
                ui.end_row();

                self.bouton_chiffre(ui, '0', !en_erreur);
                self.bouton_action(ui, ".", "Point décimal", !en_erreur, |app| {
                    app.moteur.decimale();
                });
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    fn bouton_chiffre(&mut self, ui: &mut egui::Ui, c: char, actif: bool) {
        let resp = ui.add_enabled(actif, egui::Button::new(c.to_string()).min_size([46.0, 32.0].into()));
        if resp.clicked() {
            self.moteur.chiffre(c);
        }
    }

    fn bouton_operateur(&mut self, ui: &mut egui::Ui, op: Operateur, actif: bool) {
        let resp = ui.add_enabled(
            actif,
            egui::Button::new(op.symbole().to_string()).min_size([46.0, 32.0].into()),
        );
        if resp.clicked() {
            self.moteur.operateur(op);
        }
    }

    fn bouton_action(
        &mut self,
        ui: &mut egui::Ui,
        label: &str,
        tip: &str,
        actif: bool,
        action: fn(&mut Self),
    ) {
        let resp = ui
            .add_enabled(actif, egui::Button::new(label).min_size([46.0, 32.0].into()))
            .on_hover_text(tip);

        if resp.clicked() {
            action(self);
        }
    }
}
