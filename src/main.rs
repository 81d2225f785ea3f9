#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use base_converter::{config::Settings, logging, App};
use iced::Task;

fn main() -> iced::Result {
    let settings = Settings::default();
    logging::init(settings.log_filter);

    tracing::info!("starting {}", settings.title);

    iced::application(settings.title, App::update, App::view)
        .theme(App::theme)
        .window_size(settings.window_size)
        .run_with(move || (App::with_settings(&settings), Task::none()))
}
