mod app;
mod widgets;

use eframe::{egui, NativeOptions};
use timeline_core::{AppConfig, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::app::TimelineApp;

// Fallback families for the engagement glyphs
const SYMBOL_FAMILIES: &[&str] = &[
    "Noto Emoji",
    "Noto Sans Symbols2",
    "Noto Sans Symbols",
    "DejaVu Sans",
];

fn main() -> eframe::Result<()> {
    init_tracing();

    let config = AppConfig::load();
    let session = Session::with_seed();
    let [width, height] = config.ui.window_size;

    eframe::run_native(
        "Home",
        NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([width, height])
                .with_min_inner_size([400.0, 500.0]),
            ..Default::default()
        },
        Box::new(move |cc| {
            install_symbol_fonts(&cc.egui_ctx);
            Box::new(TimelineApp::new(session, config))
        }),
    )
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn install_symbol_fonts(ctx: &egui::Context) {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    let mut fonts = egui::FontDefinitions::default();
    let mut added: Vec<String> = Vec::new();
    for &family in SYMBOL_FAMILIES {
        let query = fontdb::Query {
            families: &[fontdb::Family::Name(family)],
            ..fontdb::Query::default()
        };
        let Some(id) = db.query(&query) else {
            continue;
        };
        let Some(bytes) = db.with_face_data(id, |data, _index| data.to_vec()) else {
            continue;
        };

        let name = format!("system-{}", family);
        fonts.font_data.insert(name.clone(), egui::FontData::from_owned(bytes));
        // Appended last so the default fonts keep priority
        fonts
            .families
            .entry(egui::FontFamily::Proportional)
            .or_default()
            .push(name.clone());
        fonts
            .families
            .entry(egui::FontFamily::Monospace)
            .or_default()
            .push(name.clone());
        added.push(name);
    }

    if !added.is_empty() {
        info!(fonts = ?added, "installed fallback fonts");
        ctx.set_fonts(fonts);
    }
}
