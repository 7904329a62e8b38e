use env_logger::{Builder, Target};
use log::LevelFilter;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("naka_app", LevelFilter::Debug)
        .filter_module("naka_model", LevelFilter::Debug)
        .init();
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    // An optional site address opens the app on that page,
    // e.g. `naka /carte?restaurant=merlin`.
    let initial_address = std::env::args().nth(1);

    naka_app::app::run(initial_address)
}
