//! The three data-collection panels of the wizard.
//!
//! The forms mutate the profile (or the refine filters) in place and push
//! transition actions onto the queue; nothing here commits a step change
//! directly. Slider and combo bounds are the only input validation the
//! system has, beyond the step-one required-fields guard.

use eframe::egui;

use crate::{
    core::{
        models::{
            BUDGET_MAX,
            BUDGET_STEP,
            COUNTRIES,
            DEGREE_LEVELS,
            FIELDS_OF_STUDY,
            GPA_RANGE,
        },
        Profile,
    },
    gui::{
        theme::Theme,
        ActionQueue,
        UiAction,
    },
};

const FORM_WIDTH: f32 = 420.0;

pub fn academic(
    ui: &mut egui::Ui,
    profile: &mut Profile,
    can_advance: bool,
    transitioning: bool,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    form_frame(ui, theme, "Step 1 of 3", "Academic Background", |ui| {
        combo_row(ui, "Field of study", &mut profile.field_of_study, FIELDS_OF_STUDY, "Select a field...");
        combo_row(ui, "Degree level", &mut profile.degree_level, DEGREE_LEVELS, "Select a level...");

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label("GPA");
            ui.add(egui::Slider::new(&mut profile.gpa, GPA_RANGE).step_by(0.1).fixed_decimals(1));
        });

        if !can_advance {
            ui.add_space(4.0);
            ui.colored_label(
                theme.muted(ui.ctx()),
                "Field of study and degree level are required.",
            );
        }

        nav_row(ui, transitioning, NavButtons { back: false, forward: Some("Next") }, can_advance, actions);
    });
}

pub fn preferences(
    ui: &mut egui::Ui,
    profile: &mut Profile,
    transitioning: bool,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    form_frame(ui, theme, "Step 2 of 3", "Funding Preferences", |ui| {
        ui.horizontal(|ui| {
            ui.label("Annual budget");
            ui.add(
                egui::Slider::new(&mut profile.annual_budget_usd, 0..=BUDGET_MAX)
                    .step_by(BUDGET_STEP as f64)
                    .prefix("$"),
            );
        });

        ui.add_space(6.0);
        ui.checkbox(&mut profile.fully_funded_only, "Only show fully funded scholarships");

        ui.add_space(6.0);
        combo_row_clearable(
            ui,
            "Preferred country",
            &mut profile.preferred_country,
            COUNTRIES,
            "No preference",
        );

        nav_row(ui, transitioning, NavButtons { back: true, forward: Some("Next") }, true, actions);
    });
}

pub fn refine(
    ui: &mut egui::Ui,
    query: &mut String,
    country_filter: &mut String,
    transitioning: bool,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    form_frame(ui, theme, "Step 3 of 3", "Refine Your Search", |ui| {
        ui.horizontal(|ui| {
            ui.label("Keywords");
            ui.add(
                egui::TextEdit::singleline(query)
                    .hint_text("Title, country or field...")
                    .desired_width(240.0),
            );
        });

        ui.add_space(6.0);
        combo_row_clearable(ui, "Country", country_filter, COUNTRIES, "All countries");

        ui.add_space(4.0);
        ui.colored_label(
            theme.muted(ui.ctx()),
            "Both filters are optional. Leave them empty to rank the whole catalog.",
        );

        nav_row(
            ui,
            transitioning,
            NavButtons { back: true, forward: Some("Find Scholarships") },
            true,
            actions,
        );
    });
}

struct NavButtons {
    back: bool,
    forward: Option<&'static str>,
}

fn nav_row(
    ui: &mut egui::Ui,
    transitioning: bool,
    buttons: NavButtons,
    can_advance: bool,
    actions: &mut ActionQueue,
) {
    ui.add_space(16.0);
    ui.horizontal(|ui| {
        if buttons.back && ui.add_enabled(!transitioning, egui::Button::new("Back")).clicked() {
            actions.push(UiAction::Back);
        }

        if let Some(label) = buttons.forward {
            let enabled = can_advance && !transitioning;
            let text = if transitioning { "..." } else { label };
            if ui.add_enabled(enabled, egui::Button::new(text)).clicked() {
                actions.push(UiAction::Advance);
            }
        }
    });
}

fn form_frame(
    ui: &mut egui::Ui,
    theme: &Theme,
    step_label: &str,
    title: &str,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.set_max_width(FORM_WIDTH);

        ui.small(step_label);
        ui.label(theme.heading(ui.ctx(), title).size(24.0));
        ui.add_space(16.0);

        ui.vertical(|ui| {
            add_contents(ui);
        });
    });
}

fn combo_row(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    options: &[&str],
    placeholder: &str,
) {
    ui.horizontal(|ui| {
        ui.label(label);
        let selected = if value.is_empty() { placeholder } else { value.as_str() };
        egui::ComboBox::from_id_salt(label).selected_text(selected.to_string()).show_ui(
            ui,
            |ui| {
                for option in options {
                    ui.selectable_value(value, (*option).to_string(), *option);
                }
            },
        );
    });
}

/// Like `combo_row` but with a leading entry that clears the selection.
fn combo_row_clearable(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    options: &[&str],
    none_label: &str,
) {
    ui.horizontal(|ui| {
        ui.label(label);
        let selected = if value.is_empty() { none_label } else { value.as_str() };
        egui::ComboBox::from_id_salt(label).selected_text(selected.to_string()).show_ui(
            ui,
            |ui| {
                ui.selectable_value(value, String::new(), none_label);
                for option in options {
                    ui.selectable_value(value, (*option).to_string(), *option);
                }
            },
        );
    });
}
