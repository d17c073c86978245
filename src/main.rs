use cardbinder::{
    feed::CardFeed,
    gui::BinderApp,
};
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();
    dotenvy::dotenv().ok();

    let feed = CardFeed::from_env();
    if feed.is_none() {
        log::warn!("No card feed configured (set CARDS_FILE, or SERVER_BASE and AUTH)");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Card Binder")
            .with_inner_size([1160.0, 760.0])
            .with_min_inner_size([760.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Card Binder",
        options,
        Box::new(|cc| Ok(Box::new(BinderApp::new(cc, feed)))),
    )
}
