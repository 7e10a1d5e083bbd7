use eframe::egui;

pub fn render(ui: &mut egui::Ui, title: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(8.0);
        ui.label(egui::RichText::new(title).heading().strong().italics());
        ui.add_space(8.0);
    });
}
