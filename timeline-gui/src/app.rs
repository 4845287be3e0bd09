use eframe::egui::{self, Color32, Rounding, Stroke};
use timeline_core::{AppConfig, Interaction, Session};
use tracing::debug;

use crate::widgets::{post_card, Palette};

pub struct TimelineApp {
    session: Session,
    config: AppConfig,
    theme_applied: bool,
}

impl TimelineApp {
    pub fn new(session: Session, config: AppConfig) -> Self {
        Self {
            session,
            config,
            theme_applied: false,
        }
    }

    fn setup_dark_theme(&self, ctx: &egui::Context) {
        let theme = &self.config.theme;
        let mut style = (*ctx.style()).clone();

        let bg_color = theme.background_color32();
        let panel_color = theme.panel_color32();
        let border_color = theme.border_color32();
        let text_color = theme.text_color32();
        let accent_color = theme.accent_color32();

        style.visuals.dark_mode = true;
        style.visuals.panel_fill = bg_color;
        style.visuals.window_fill = bg_color;
        style.visuals.extreme_bg_color = panel_color;
        style.visuals.faint_bg_color = panel_color;
        style.visuals.override_text_color = Some(text_color);

        style.visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, border_color);
        style.visuals.widgets.inactive.bg_fill = Color32::TRANSPARENT;
        style.visuals.widgets.hovered.bg_fill = theme.accent_tint(25);
        style.visuals.widgets.hovered.bg_stroke = Stroke::NONE;
        style.visuals.widgets.active.bg_fill = accent_color;

        style.visuals.selection.bg_fill = theme.accent_tint(60);
        style.visuals.selection.stroke = Stroke::new(1.0, accent_color);

        // Pill-shaped hover backgrounds for the engagement buttons
        style.visuals.widgets.hovered.rounding = Rounding::same(16.0);
        style.visuals.widgets.active.rounding = Rounding::same(16.0);

        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(8.0, 6.0);

        ctx.set_style(style);
    }

    fn draw_header(&self, ctx: &egui::Context) {
        let view_title = timeline_core::render::FEED_TITLE;
        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::none()
                    .fill(self.config.theme.background_color32())
                    .inner_margin(egui::Margin::symmetric(16.0, 12.0))
                    .stroke(Stroke::new(1.0, self.config.theme.border_color32())),
            )
            .show(ctx, |ui| {
                ui.heading(egui::RichText::new(view_title).strong().size(24.0));
            });
    }

    /// Paints the feed and returns the interactions clicked this frame.
    fn draw_feed(&self, ctx: &egui::Context) -> Vec<Interaction> {
        let view = self.session.render();
        let palette = Palette {
            theme: &self.config.theme,
            font_size: self.config.ui.font_size,
        };
        let mut clicked = Vec::new();

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(self.config.theme.background_color32()))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let available = ui.available_width();
                        let width = self.config.ui.feed_width.min(available);
                        let side = ((available - width) / 2.0).max(0.0);
                        ui.horizontal_top(|ui| {
                            ui.add_space(side);
                            ui.vertical(|ui| {
                                ui.set_width(width);
                                for card in &view.cards {
                                    post_card(ui, card, &palette, &mut clicked);
                                }
                            });
                        });
                    });
            });

        clicked
    }
}

impl eframe::App for TimelineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            self.setup_dark_theme(ctx);
            self.theme_applied = true;
        }

        self.draw_header(ctx);
        let clicked = self.draw_feed(ctx);

        // State changes only after the frame was painted
        if !clicked.is_empty() {
            debug!(count = clicked.len(), "dispatching interactions");
            self.session.dispatch_all(clicked);
            ctx.request_repaint();
        }
    }
}
