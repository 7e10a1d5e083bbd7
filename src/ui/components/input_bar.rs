use eframe::egui;

const FIELD_HEIGHT: f32 = 36.0;
const SEND_BUTTON_WIDTH: f32 = 48.0;

/// Id of the draft text field, so focus can be handed back after a send.
pub fn field_id() -> egui::Id {
    egui::Id::new("draft_input")
}

/// Draws the draft field and the send button. Returns `true` when the user
/// asked to send, by clicking or by pressing Enter in the field.
pub fn render(ui: &mut egui::Ui, draft: &mut String) -> bool {
    let mut submit = false;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 12.0;
        let field_width = (ui.available_width() - SEND_BUTTON_WIDTH - 12.0).max(0.0);

        let response = ui.add_sized(
            [field_width, FIELD_HEIGHT],
            egui::TextEdit::singleline(draft)
                .id(field_id())
                .hint_text("Type a message...")
                .vertical_align(egui::Align::Center),
        );

        let send = ui
            .add_sized([SEND_BUTTON_WIDTH, FIELD_HEIGHT], egui::Button::new("Send"))
            .on_hover_text("Send message");
        if send.clicked() {
            submit = true;
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
        }
    });

    submit
}
