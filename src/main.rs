use crate::app::App;
use log::{LevelFilter, error, info};
use std::error::Error;
use std::path::Path;

mod anim;
mod app;
mod config;
mod controller;
mod editor;
mod membership;
mod network;
mod roster;
mod settings;
mod spin;
mod wheel;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Info)
        .filter_module("famwheel::network", LevelFilter::Info)
        .filter_module("famwheel::spin", LevelFilter::Debug)
        .init();

    info!("Application starting...");
    settings::load();
    let settings = settings::get();

    // Roster load failure ends the session before it starts; there is no
    // wheel without members.
    let roster = if settings.online {
        network::fetch_roster()
    } else {
        network::load_roster_file(Path::new(&settings.roster_path))
    };
    let roster = match roster {
        Ok(roster) if !roster.is_empty() => roster,
        Ok(_) => {
            error!("Roster source returned no members.");
            return Err("empty roster".into());
        }
        Err(e) => {
            error!("Failed to load member roster: {}", e);
            return Err(e);
        }
    };

    let mut app = App::new(roster)?;
    if let Err(e) = app.run() {
        error!("Application exited with error: {}", e);
        return Err(e);
    }

    info!("Application exited gracefully.");
    Ok(())
}
