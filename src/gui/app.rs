use eframe::egui;

use super::{
    message_overlay::MessageOverlay,
    results,
    steps,
    theme::{
        set_theme,
        Theme,
    },
    top_bar::TopBar,
    ActionQueue,
    UiAction,
};
use crate::{
    catalog::StaticCatalog,
    profile::ProfileStore,
    wizard::{
        WizardController,
        WizardStep,
    },
};

/// The whole UI state in one place: the wizard controller owns every piece
/// of mutable application state and the panels render against it.
pub struct ScholarQuestApp {
    wizard: WizardController,
    theme: Theme,
    message_overlay: MessageOverlay,
}

impl ScholarQuestApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let wizard = WizardController::new(Box::new(StaticCatalog::new()), ProfileStore::load());

        let theme = Theme::harbor();
        set_theme(&cc.egui_ctx, &theme);
        cc.egui_ctx.set_zoom_factor(cc.egui_ctx.zoom_factor() + 0.2);

        Self { wizard, theme, message_overlay: MessageOverlay::new() }
    }

    fn apply_action(&mut self, action: UiAction) {
        match action {
            UiAction::Advance => {
                let searching = self.wizard.step() == WizardStep::Refine;
                let was_pending = self.wizard.is_transitioning();
                self.wizard.advance();

                if searching && !was_pending && self.wizard.is_transitioning() {
                    self.message_overlay.set_message("Finding scholarships...".to_string());
                }
            }
            UiAction::Back => self.wizard.back(),
            UiAction::Reset => {
                self.wizard.reset();
                self.message_overlay.clear_message();
            }
        }
    }
}

impl eframe::App for ScholarQuestApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.wizard.tick() {
            self.message_overlay.clear_message();
        }

        // While a transition is pending, keep repainting until it commits.
        if let Some(remaining) = self.wizard.time_until_commit() {
            ctx.request_repaint_after(remaining);
        }

        let mut actions = ActionQueue::new();

        TopBar::show(ctx, &self.wizard, &mut actions);

        egui::CentralPanel::default().show(ctx, |ui| {
            let transitioning = self.wizard.is_transitioning();
            match self.wizard.step() {
                WizardStep::Academic => {
                    let can_advance = self.wizard.can_advance();
                    steps::academic(
                        ui,
                        &mut self.wizard.store.profile,
                        can_advance,
                        transitioning,
                        &self.theme,
                        &mut actions,
                    );
                }
                WizardStep::Preferences => {
                    steps::preferences(
                        ui,
                        &mut self.wizard.store.profile,
                        transitioning,
                        &self.theme,
                        &mut actions,
                    );
                }
                WizardStep::Refine => {
                    steps::refine(
                        ui,
                        &mut self.wizard.query,
                        &mut self.wizard.country_filter,
                        transitioning,
                        &self.theme,
                        &mut actions,
                    );
                }
                WizardStep::Results => {
                    results::results_view(ui, self.wizard.results(), &self.theme, &mut actions);
                }
            }
        });

        self.message_overlay.show(ctx, &self.theme);

        for action in actions.drain() {
            self.apply_action(action);
        }
    }
}
