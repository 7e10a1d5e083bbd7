use eframe::egui;

use crate::common::{Message, MessageSequence};
use crate::ui::collapse::ExpansionStore;
use crate::ui::layout::{BUBBLE_WIDTH_FRACTION, Side};

use super::message_content;

// Leaves room for the bubble tails at both edges.
const TAIL_MARGIN: i8 = 14;

/// Scrollable list of chat bubbles.
///
/// `scroll_target` is the id of a message to bring into view this frame.
pub fn render(
    ui: &mut egui::Ui,
    messages: &MessageSequence,
    expansion: &mut ExpansionStore,
    scroll_target: Option<u64>,
    max_lines: usize,
) {
    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            egui::Frame::new()
                .inner_margin(egui::Margin::symmetric(TAIL_MARGIN, 12))
                .show(ui, |ui| {
                    if messages.is_empty() {
                        ui.vertical_centered(|ui| {
                            ui.label(egui::RichText::new("No messages yet").weak());
                        });
                    }

                    let max_bubble_width = ui.available_width() * BUBBLE_WIDTH_FRACTION;
                    for message in messages {
                        let scroll_here = scroll_target == Some(message.id);
                        render_bubble(
                            ui,
                            message,
                            expansion,
                            max_bubble_width,
                            max_lines,
                            scroll_here,
                        );
                    }
                });
        });
}

fn render_bubble(
    ui: &mut egui::Ui,
    message: &Message,
    expansion: &mut ExpansionStore,
    max_width: f32,
    max_lines: usize,
    scroll_here: bool,
) {
    let side = Side::of(message);
    let (fill, text_color) = bubble_colors(ui.visuals(), side);
    let expanded = expansion.is_expanded(message);

    ui.with_layout(egui::Layout::top_down(side.align()), |ui| {
        ui.add_space(4.0);
        let bubble = egui::Frame::new()
            .fill(fill)
            .corner_radius(side.corner_radius())
            .inner_margin(egui::Margin::same(10))
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                message_content::render(ui, message, expanded, max_lines, text_color)
            });

        ui.painter().add(egui::Shape::convex_polygon(
            side.tail(bubble.response.rect).to_vec(),
            fill,
            egui::Stroke::NONE,
        ));

        if bubble.inner.toggled {
            let now_expanded = expansion.toggle(message);
            log::debug!("Message {} expanded: {now_expanded}", message.id);
        }

        if scroll_here {
            bubble.response.scroll_to_me(Some(egui::Align::BOTTOM));
        }
    });
}

fn bubble_colors(visuals: &egui::Visuals, side: Side) -> (egui::Color32, egui::Color32) {
    match side {
        Side::Right => (visuals.selection.bg_fill, visuals.selection.stroke.color),
        Side::Left => (visuals.widgets.inactive.bg_fill, visuals.text_color()),
    }
}
