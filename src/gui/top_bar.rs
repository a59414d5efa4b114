use eframe::egui::{
    self,
    containers,
};

use crate::{
    gui::{
        ActionQueue,
        UiAction,
    },
    wizard::{
        WizardController,
        WizardStep,
    },
};

pub struct TopBar;

impl TopBar {
    pub fn show(ctx: &egui::Context, wizard: &WizardController, actions: &mut ActionQueue) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);

                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Search", |ui| {
                    let on_results = wizard.step() == WizardStep::Results;
                    if ui.add_enabled(on_results, egui::Button::new("Start Over")).clicked() {
                        actions.push(UiAction::Reset);
                        ui.close();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_step_indicator(ui, wizard);
                });
            });
        });
    }

    fn show_step_indicator(ui: &mut egui::Ui, wizard: &WizardController) {
        let step = wizard.step();
        let label = match step {
            WizardStep::Results => "Results".to_string(),
            other => format!("Step {} of 3", other.ordinal()),
        };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small(label).on_hover_text(step.title());
        });
    }
}
