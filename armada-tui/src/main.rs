mod app;
mod screen;

use std::fs::File;
use std::io;

use simplelog::{Config, LevelFilter, WriteLogger};

const SAMPLE_MENU: &str = include_str!("../menu.json");

fn main() {
    let log_file = File::create("armada-tui.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> io::Result<()> {
    let payload = match std::fs::read_to_string("menu.json") {
        Ok(payload) => payload,
        Err(_) => {
            log::info!("no menu.json in the working directory, using the built-in sample");
            SAMPLE_MENU.to_string()
        }
    };

    let entries = armada_menu::parse_menu(&payload).map_err(io::Error::other)?;
    let forest = armada_menu::to_forest(&entries);
    trellis::validate(&forest).map_err(io::Error::other)?;

    app::App::new(forest).run()
}
