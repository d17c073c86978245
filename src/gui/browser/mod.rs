use eframe::egui;

mod detail;
mod search;
mod state;

pub use state::{
    BrowserState,
    PAGE_SIZE,
};

use super::{
    app::BinderApp,
    theme::Theme,
};
use crate::core::Card;

/// Draws the whole browser: the searchable, paginated card list on the left
/// and the selected-card pane in the center.
pub fn card_browser(ctx: &egui::Context, app: &mut BinderApp) {
    app.browser.ensure_indices(&app.cards);

    egui::SidePanel::left("card_list_panel").resizable(true).default_width(340.0).show(
        ctx,
        |ui| {
            if app.loading {
                // Placeholder while the startup load is in flight.
                ui.centered_and_justified(|ui| {
                    ui.add(egui::Spinner::new());
                });
                return;
            }

            ui_search_row(ui, app);
            ui_pagination_row(ui, app);
            ui.separator();
            ui_card_list(ui, app);
        },
    );

    egui::CentralPanel::default().show(ctx, |ui| {
        detail::card_detail(ui, app);
    });
}

fn ui_search_row(ui: &mut egui::Ui, app: &mut BinderApp) {
    ui.horizontal(|ui| {
        let mut search = app.browser.search().to_string();
        let search_width = (ui.available_width() - 90.0).max(120.0);

        let response = ui.add(
            egui::TextEdit::singleline(&mut search)
                .hint_text("Search cards")
                .desired_width(search_width),
        );
        if response.changed() {
            app.browser.set_search(search);
        }

        if ui.button("Clear card").clicked() {
            app.browser.clear_selection();
        }
    });
}

fn ui_pagination_row(ui: &mut egui::Ui, app: &mut BinderApp) {
    let current = app.browser.current_page();
    let total = app.browser.total_pages();

    ui.horizontal(|ui| {
        if ui.add_enabled(current > 1, egui::Button::new("Previous")).clicked() {
            app.browser.prev_page();
        }

        ui.label(format!("Page {} of {}", current, total));

        if ui.add_enabled(current < total, egui::Button::new("Next")).clicked() {
            app.browser.next_page();
        }
    });
}

fn ui_card_list(ui: &mut egui::Ui, app: &mut BinderApp) {
    if app.cards.is_empty() {
        ui_empty_notice(
            ui,
            &app.theme,
            "No Cards Loaded",
            "Configure a card feed and restart to browse a collection.",
        );
        return;
    }

    if app.browser.filtered_count() == 0 {
        ui_empty_notice(
            ui,
            &app.theme,
            "No Matches",
            "No card name, text, or id contains the current search.",
        );
        return;
    }

    let page: Vec<usize> = app.browser.page_indices().to_vec();
    let selected_id = app.browser.selected().map(|card| card.id.clone());
    let mut clicked: Option<Card> = None;

    egui::ScrollArea::vertical().auto_shrink(false).show(ui, |ui| {
        for index in page {
            let Some(card) = app.cards.get(index) else {
                continue;
            };

            let is_selected = selected_id.as_deref() == Some(card.id.as_str());
            if ui_card_row(ui, &app.theme, card, is_selected) {
                clicked = Some(card.clone());
            }
        }
    });

    if let Some(card) = clicked {
        app.browser.select(card);
    }
}

fn ui_card_row(ui: &mut egui::Ui, theme: &Theme, card: &Card, is_selected: bool) -> bool {
    let response = ui
        .horizontal(|ui| {
            ui.add(
                egui::Image::new(card.image.as_str())
                    .fit_to_exact_size(egui::vec2(40.0, 56.0))
                    .show_loading_spinner(false),
            );

            let name: &str = if card.name.is_empty() { "(unnamed)" } else { &card.name };
            if is_selected {
                ui.label(egui::RichText::new(name).color(theme.orange()));
            } else {
                ui.label(name);
            }
        })
        .response
        .interact(egui::Sense::click());

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    response.clicked()
}

fn ui_empty_notice(ui: &mut egui::Ui, theme: &Theme, title: &str, hint: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);

        ui.label(egui::RichText::new(title).size(24.0).color(theme.cyan()));

        ui.add_space(4.0);

        ui.label(egui::RichText::new(hint).size(12.0).color(theme.comment()));
    });
}
