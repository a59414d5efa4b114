use chrono::Local;
use eframe::egui::{
    self,
    RichText,
};
use egui_extras::{
    Column,
    TableBuilder,
};

use crate::{
    core::{
        utils::{
            deadline_has_passed,
            format_deadline,
        },
        ScoredScholarship,
    },
    gui::{
        theme::Theme,
        ActionQueue,
        UiAction,
    },
};

pub fn results_view(
    ui: &mut egui::Ui,
    results: &[ScoredScholarship],
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    if results.is_empty() {
        empty_state(ui, theme, actions);
        return;
    }

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        ui.label(theme.heading(ui.ctx(), "Matching Scholarships").size(20.0));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Start Over").clicked() {
                actions.push(UiAction::Reset);
            }
        });
    });

    let best = results.first().map(|s| s.match_score).unwrap_or(0);
    ui.colored_label(
        theme.muted(ui.ctx()),
        format!("{} match(es), best score {}%", results.len(), best),
    );
    ui.add_space(8.0);

    let today = Local::now().date_naive();
    let text_height = egui::TextStyle::Body
        .resolve(ui.style())
        .size
        .max(ui.spacing().interact_size.y);

    egui::ScrollArea::vertical().show(ui, |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(60.0))
            .column(Column::auto().at_least(220.0))
            .column(Column::auto().at_least(110.0))
            .column(Column::auto().at_least(100.0))
            .column(Column::remainder().at_least(160.0))
            .column(Column::auto().at_least(60.0))
            .header(25.0, |mut header| {
                for title in ["Match", "Scholarship", "Country", "Deadline", "Amount", ""] {
                    header.col(|ui| {
                        ui.label(theme.heading(ui.ctx(), title));
                    });
                }
            })
            .body(|mut body| {
                body.rows(text_height + 8.0, results.len(), |mut row| {
                    let scored = &results[row.index()];
                    let record = &scored.record;

                    row.col(|ui| {
                        ui.label(
                            RichText::new(format!("{}%", scored.match_score))
                                .color(theme.score_color(ui.ctx(), scored.match_score))
                                .strong(),
                        );
                    });

                    row.col(|ui| {
                        ui.label(RichText::new(&record.title).strong()).on_hover_ui(|ui| {
                            ui.label(theme.heading(ui.ctx(), &record.field));
                            ui.label(&record.eligibility_text);
                            ui.label(format!("Minimum GPA: {:.1}", record.min_gpa));
                        });
                    });

                    row.col(|ui| {
                        ui.label(&record.country);
                    });

                    row.col(|ui| {
                        let formatted = format_deadline(&record.deadline);
                        if deadline_has_passed(&record.deadline, today) {
                            ui.colored_label(theme.red(ui.ctx()), formatted)
                                .on_hover_text("This deadline has passed");
                        } else {
                            ui.label(formatted);
                        }
                    });

                    row.col(|ui| {
                        ui.label(&record.amount_description);
                        if record.fully_funded {
                            ui.label(
                                RichText::new("fully funded")
                                    .small()
                                    .color(theme.green(ui.ctx())),
                            );
                        }
                    });

                    row.col(|ui| {
                        ui.hyperlink_to("Apply ↗", &record.apply_link);
                    });
                });
            });
    });
}

fn empty_state(ui: &mut egui::Ui, theme: &Theme, actions: &mut ActionQueue) {
    ui.vertical_centered(|ui| {
        ui.add_space(100.0);

        ui.label(
            RichText::new("No scholarships found")
                .size(28.0)
                .color(theme.accent(ui.ctx())),
        );

        ui.add_space(4.0);
        ui.colored_label(
            theme.muted(ui.ctx()),
            "Try clearing the keyword or country filter, or widen your profile.",
        );

        ui.add_space(16.0);
        if ui.button("Start Over").clicked() {
            actions.push(UiAction::Reset);
        }
    });
}
