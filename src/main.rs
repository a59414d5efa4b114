#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use scholarquest::gui::app::ScholarQuestApp;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([980.0, 700.0])
            .with_min_inner_size([720.0, 520.0])
            .with_title("ScholarQuest"),
        ..Default::default()
    };

    eframe::run_native(
        "ScholarQuest",
        options,
        Box::new(|cc| Ok(Box::new(ScholarQuestApp::new(cc)))),
    )
}
