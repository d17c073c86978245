use eframe::egui;

use super::super::app::BinderApp;
use crate::core::TrustedHtml;

/// Detail pane for the selected card: enlarged image, name, category, and
/// the description fragment.
pub fn card_detail(ui: &mut egui::Ui, app: &BinderApp) {
    let Some(card) = app.browser.selected() else {
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new("Click a card to see it up close")
                    .size(18.0)
                    .color(app.theme.comment()),
            );
        });
        return;
    };

    egui::ScrollArea::vertical().auto_shrink(false).show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(12.0);

            if !card.image.is_empty() {
                ui.add(egui::Image::new(card.image.as_str()).max_height(420.0));
                ui.add_space(8.0);
            }

            ui.label(app.theme.heading(&card.name).size(24.0).strong());

            if !card.card_type.is_empty() {
                ui.label(
                    egui::RichText::new(&card.card_type)
                        .size(16.0)
                        .italics()
                        .color(app.theme.orange()),
                );
            }

            ui.add_space(6.0);
            render_trusted_html(ui, &card.card_text);
        });
    });
}

/// Display sink for the card description.
///
/// Precondition: the fragment was sanitized upstream by the data source (see
/// [`TrustedHtml`]). It is injected into the pane verbatim, markup included.
fn render_trusted_html(ui: &mut egui::Ui, fragment: &TrustedHtml) {
    if fragment.is_empty() {
        return;
    }

    ui.label(fragment.as_str());
}
