mod assets;
mod controls;
mod game;
mod render;

use geng::prelude::*;

#[derive(clap::Parser)]
struct Opts {
    #[clap(long)]
    config: Option<std::path::PathBuf>,
    /// Seed for reproducible particles.
    #[clap(long)]
    seed: Option<u64>,
    #[clap(flatten)]
    geng: geng::CliArgs,
}

fn main() {
    logger::init();
    geng::setup_panic_handler();

    let opts: Opts = clap::Parser::parse();

    let mut geng_options = geng::ContextOptions::default();
    geng_options.window.title = "Sprite Toolkit".to_string();
    geng_options.with_cli(&opts.geng);

    Geng::run_with(&geng_options, |geng| async move {
        let manager = geng.asset_manager();

        let assets = match assets::Assets::load(manager).await {
            Ok(assets) => assets,
            Err(err) => {
                log::error!("{:?}", err);
                return;
            }
        };

        let config_path = opts
            .config
            .unwrap_or_else(|| run_dir().join("assets").join("config.ron"));
        let config = match sprite_toolkit::config::Config::load(config_path) {
            Ok(config) => config,
            Err(err) => {
                log::error!("{:?}", err);
                return;
            }
        };

        let state = game::Game::new(&geng, &Rc::new(assets), config, opts.seed);
        geng.run_state(state).await;
    });
}
