use std::time::Duration;

use eframe::egui;

use super::{
    browser::{
        card_browser,
        BrowserState,
    },
    message_overlay::MessageOverlay,
    theme::{
        set_theme,
        Theme,
    },
};
use crate::{
    core::{
        tasks::{
            TaskManager,
            TaskResult,
        },
        Card,
    },
    feed::CardFeed,
};

pub struct BinderApp {
    pub cards: Vec<Card>,
    pub browser: BrowserState,
    pub loading: bool,
    pub theme: Theme,
    pub message_overlay: MessageOverlay,
    task_manager: TaskManager,
}

impl BinderApp {
    pub fn new(cc: &eframe::CreationContext<'_>, card_feed: Option<CardFeed>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let theme = Theme::dracula();
        set_theme(&cc.egui_ctx, theme.clone());

        let task_manager = TaskManager::new();
        let mut message_overlay = MessageOverlay::new();

        let loading = match card_feed {
            Some(card_feed) => {
                task_manager.load_cards(card_feed);
                true
            }
            None => {
                message_overlay.clear_message();
                false
            }
        };

        Self {
            cards: Vec::new(),
            browser: BrowserState::default(),
            loading,
            theme,
            message_overlay,
            task_manager,
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::LoadingMessage(message) => {
                self.message_overlay.set_message(message);
            }

            TaskResult::CardsLoaded(result) => {
                self.loading = false;
                self.message_overlay.clear_message();

                match result {
                    Ok(cards) => {
                        log::info!("Loaded {} cards", cards.len());
                        self.cards = cards;
                        self.browser.on_collection_changed();
                    }
                    Err(error) => {
                        // A failed load is not a user-facing state; the
                        // browser just stays empty.
                        log::error!("Error fetching cards: {}", error);
                    }
                }
            }
        }
    }
}

impl eframe::App for BinderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        card_browser(ctx, self);
        self.message_overlay.show(ctx, &self.theme);

        if self.loading {
            // Nothing repaints an idle window, so keep polling for the load
            // result until it lands.
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
