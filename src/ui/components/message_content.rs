//! Body of a single chat bubble: the text, clipped to the collapsed budget
//! when it runs long, plus the read more toggle and the send time.

use chrono::{DateTime, TimeZone, Utc};
use eframe::egui;

use crate::common::Message;
use crate::ui::collapse::{self, Measurement, Overflow};

const EXPAND_ANIMATION_SECS: f32 = 0.3;

pub struct ContentOutput {
    /// The read more/less toggle was clicked this frame.
    pub toggled: bool,
    pub overflow: Overflow,
    /// Height given to the text, not counting the toggle and time row.
    pub text_height: f32,
}

pub fn render(
    ui: &mut egui::Ui,
    message: &Message,
    expanded: bool,
    max_lines: usize,
    text_color: egui::Color32,
) -> ContentOutput {
    let font_id = egui::TextStyle::Body.resolve(ui.style());
    let wrap_width = ui.available_width();
    let galley = ui
        .painter()
        .layout(message.text.clone(), font_id, text_color, wrap_width);

    let measurement = Measurement {
        natural_height: galley.size().y,
        line_height: ui.text_style_height(&egui::TextStyle::Body),
    };
    let overflow = collapse::detect_overflow(Some(measurement), max_lines);

    let openness = ui.ctx().animate_bool_with_time(
        egui::Id::new(("message_expand", message.id)),
        expanded,
        EXPAND_ANIMATION_SECS,
    );
    let height = collapse::visible_height(overflow, measurement, max_lines, openness);

    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(galley.size().x, height), egui::Sense::hover());
    ui.painter_at(rect).galley(rect.min, galley, text_color);

    let mut toggled = false;
    ui.horizontal(|ui| {
        if overflow.shows_toggle()
            && ui
                .link(
                    egui::RichText::new(collapse::toggle_label(expanded))
                        .small()
                        .color(text_color),
                )
                .clicked()
        {
            toggled = true;
        }
        ui.label(
            egui::RichText::new(format_time(&message.timestamp, &chrono::Local))
                .small()
                .color(text_color.gamma_multiply(0.7)),
        );
    });

    ContentOutput {
        toggled,
        overflow,
        text_height: height,
    }
}

/// `HH:MM`, 24-hour clock, in the given zone.
pub fn format_time<Tz: TimeZone>(timestamp: &DateTime<Utc>, zone: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    timestamp.with_timezone(zone).format("%H:%M").to_string()
}
