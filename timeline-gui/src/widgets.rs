use eframe::egui::{self, Align2, Color32, FontId, Rounding, Sense, Stroke};
use timeline_core::{
    AvatarView, Block, ButtonKind, ButtonView, CardView, EngagementBarView, Interaction,
    ThemeConfig, VideoDescriptor,
};

const AVATAR_SIZE: f32 = 48.0;

/// Everything the presenters need besides the view itself.
pub struct Palette<'a> {
    pub theme: &'a ThemeConfig,
    pub font_size: f32,
}

fn color_for_asset(asset: &str) -> Color32 {
    use std::hash::{Hash, Hasher};
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    asset.hash(&mut hasher);
    let h = hasher.finish();
    const PALETTE: [Color32; 6] = [
        Color32::from_rgb(59, 130, 246),  // blue
        Color32::from_rgb(147, 51, 234),  // purple
        Color32::from_rgb(16, 185, 129),  // green
        Color32::from_rgb(245, 158, 11),  // amber
        Color32::from_rgb(236, 72, 153),  // pink
        Color32::from_rgb(75, 85, 99),    // gray
    ];
    PALETTE[(h as usize) % PALETTE.len()]
}

fn avatar(ui: &mut egui::Ui, view: &AvatarView, name: &str) {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(AVATAR_SIZE, AVATAR_SIZE), Sense::hover());
    let painter = ui.painter();
    let center = rect.center();
    let radius = AVATAR_SIZE / 2.0;

    match view {
        // Assets are not decoded; the path picks the disc colour.
        AvatarView::Image(asset) => {
            painter.circle_filled(center, radius, color_for_asset(asset));
            response.on_hover_text(name);
        }
        AvatarView::Placeholder { initial } => {
            // Two-tone disc standing in for the blue/purple gradient
            painter.circle_filled(center, radius, Color32::from_rgb(59, 130, 246));
            painter.circle_filled(
                center + egui::vec2(radius * 0.25, radius * 0.25),
                radius * 0.7,
                Color32::from_rgb(147, 51, 234),
            );
            if let Some(c) = initial {
                painter.text(
                    center,
                    Align2::CENTER_CENTER,
                    c.to_string(),
                    FontId::proportional(20.0),
                    Color32::WHITE,
                );
            }
        }
    }
}

fn card_header(ui: &mut egui::Ui, card: &CardView, palette: &Palette) {
    let secondary = palette.theme.secondary_text_color32();
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(&card.name)
                .strong()
                .size(palette.font_size + 2.0)
                .color(palette.theme.text_color32()),
        );
        if card.verified {
            ui.label(egui::RichText::new("✔").color(palette.theme.accent_color32()))
                .on_hover_text("Verified");
        }
        ui.label(egui::RichText::new(&card.handle).color(secondary));
        ui.label(egui::RichText::new("·").color(secondary));
        ui.label(egui::RichText::new(&card.timestamp).color(secondary));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // Inert overflow menu
            ui.add(egui::Button::new(egui::RichText::new("⋯").color(secondary)).frame(false));
        });
    });
}

fn card_body(ui: &mut egui::Ui, blocks: &[Block], palette: &Palette) {
    let text = palette.theme.text_color32();
    let size = palette.font_size + 1.0;
    for block in blocks {
        match block {
            Block::Paragraph(p) => {
                ui.add(egui::Label::new(egui::RichText::new(p).size(size).color(text)).wrap(true));
            }
            Block::OrderedList(items) => {
                for (i, item) in items.iter().enumerate() {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(format!("{}. {}", i + 1, item))
                                .size(size)
                                .color(text),
                        )
                        .wrap(true),
                    );
                }
            }
            Block::ShowMore => {
                ui.label(
                    egui::RichText::new("Show more")
                        .size(size)
                        .color(palette.theme.accent_color32()),
                );
            }
        }
        ui.add_space(6.0);
    }
}

fn corner_badge(painter: &egui::Painter, anchor: egui::Pos2, align: Align2, text: &str, size: f32) {
    let galley = painter.layout_no_wrap(text.to_owned(), FontId::proportional(size), Color32::WHITE);
    let padding = egui::vec2(8.0, 4.0);
    let badge = align.anchor_size(anchor, galley.size() + padding * 2.0);
    painter.rect_filled(badge, Rounding::same(4.0), Color32::from_black_alpha(180));
    painter.galley(badge.min + padding, galley, Color32::WHITE);
}

fn video_preview(ui: &mut egui::Ui, video: &VideoDescriptor, palette: &Palette) {
    let width = ui.available_width();
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(width, width * 9.0 / 16.0), Sense::hover());
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, Rounding::same(16.0), Color32::from_rgb(17, 24, 39));
    painter.rect_filled(rect, Rounding::same(16.0), Color32::from_black_alpha(50));

    // Play affordance; playback is not available
    let center = rect.center();
    painter.circle_filled(center, 32.0, palette.theme.accent_color32());
    painter.add(egui::Shape::convex_polygon(
        vec![
            center + egui::vec2(-10.0, -14.0),
            center + egui::vec2(-10.0, 14.0),
            center + egui::vec2(16.0, 0.0),
        ],
        Color32::WHITE,
        Stroke::NONE,
    ));

    let inset = egui::vec2(8.0, -8.0);
    corner_badge(&painter, rect.left_bottom() + inset, Align2::LEFT_BOTTOM, &video.duration, 14.0);
    corner_badge(
        &painter,
        rect.right_bottom() + egui::vec2(-inset.x, inset.y),
        Align2::RIGHT_BOTTOM,
        &video.channel_name,
        12.0,
    );

    response.on_hover_text(&video.thumbnail);
}

fn glyph(button: &ButtonView) -> &'static str {
    match (button.kind, button.active) {
        (ButtonKind::Reply, _) => "💬",
        (ButtonKind::Repost, _) => "🔁",
        (ButtonKind::Like, true) => "♥",
        (ButtonKind::Like, false) => "♡",
        (ButtonKind::Views, _) => "📊",
        (ButtonKind::Bookmark, _) => "🔖",
        (ButtonKind::Share, _) => "⤴",
    }
}

fn button_color(button: &ButtonView, palette: &Palette) -> Color32 {
    match (button.kind, button.active) {
        (ButtonKind::Like, true) => palette.theme.like_color32(),
        (ButtonKind::Repost, true) => palette.theme.repost_color32(),
        _ => palette.theme.secondary_text_color32(),
    }
}

/// Draws the button row; clicked actions are appended to `clicked`.
pub fn engagement_bar(
    ui: &mut egui::Ui,
    bar: &EngagementBarView,
    palette: &Palette,
    clicked: &mut Vec<Interaction>,
) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 28.0;
        for button in &bar.buttons {
            let label = match &button.count {
                Some(count) => format!("{}  {}", glyph(button), count),
                None => glyph(button).to_owned(),
            };
            let response = ui.add(
                egui::Button::new(
                    egui::RichText::new(label)
                        .size(palette.font_size)
                        .color(button_color(button, palette)),
                )
                .frame(false),
            );
            if response.clicked() {
                if let Some(action) = &button.action {
                    clicked.push(action.clone());
                }
            }
        }
    });
}

/// Draws one post card followed by its bottom border.
pub fn post_card(
    ui: &mut egui::Ui,
    card: &CardView,
    palette: &Palette,
    clicked: &mut Vec<Interaction>,
) {
    let inner = egui::Frame::none()
        .inner_margin(egui::Margin::symmetric(16.0, 12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_top(|ui| {
                avatar(ui, &card.avatar, &card.name);
                ui.vertical(|ui| {
                    card_header(ui, card, palette);
                    card_body(ui, &card.body, palette);
                    if let Some(video) = &card.video {
                        video_preview(ui, video, palette);
                        ui.add_space(8.0);
                    }
                    engagement_bar(ui, &card.engagement, palette, clicked);
                });
            });
        });

    let rect = inner.response.rect;
    ui.painter().hline(
        rect.x_range(),
        rect.bottom(),
        Stroke::new(1.0, palette.theme.border_color32()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(kind: ButtonKind, active: bool) -> ButtonView {
        ButtonView {
            kind,
            count: None,
            active,
            action: None,
        }
    }

    #[test]
    fn like_glyph_fills_when_active() {
        assert_eq!(glyph(&button(ButtonKind::Like, false)), "♡");
        assert_eq!(glyph(&button(ButtonKind::Like, true)), "♥");
    }

    #[test]
    fn only_active_toggles_are_coloured() {
        let theme = ThemeConfig::default();
        let palette = Palette {
            theme: &theme,
            font_size: 16.0,
        };
        assert_eq!(
            button_color(&button(ButtonKind::Like, true), &palette),
            theme.like_color32()
        );
        assert_eq!(
            button_color(&button(ButtonKind::Repost, true), &palette),
            theme.repost_color32()
        );
        assert_eq!(
            button_color(&button(ButtonKind::Share, true), &palette),
            theme.secondary_text_color32()
        );
    }
}
