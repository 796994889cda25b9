// Module declarations
mod app;
mod lyrics;
mod source;
mod ui;

use std::path::Path;

use app::cli::Args;
use app::config::Config;
use app::{
    App, AppConstructor,
    main_loop::AppMainLoop,
    terminal::{init_terminal, install_hooks, restore_terminal},
};
use clap::Parser;
use source::NotificationReader;

fn main() -> color_eyre::Result<()> {
    install_hooks()?;

    let args = Args::parse();

    // Handle --generate-config option
    if let Some(path) = &args.generate_config {
        let config_path = if path.is_dir() || path.to_str() == Some(".") {
            path.join("config.toml")
        } else {
            path.clone()
        };
        Config::generate_default(config_path)?;
        return Ok(());
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(run(args));

    // A pending stdin read can't be cancelled, so don't wait for it
    runtime.shutdown_background();
    result
}

async fn run(args: Args) -> color_eyre::Result<()> {
    if args.list_entities {
        return list_entities(args.input.as_deref()).await;
    }

    // Determine config path for logging later
    let config_path = match args.config.clone() {
        Some(path) => path,
        None => Config::default_config_path()?,
    };
    let config_existed = config_path.exists();

    let (mut config, config_warnings) = Config::load(Some(config_path.clone()))?;
    app::apply_overrides(&mut config, args.entity.as_deref());

    // Logger must outlive the app
    let _logger = if config.logging.enabled {
        app::logging::ensure_log_directory(&config.logging)?;
        let handle = app::logging::init_logger(&config.logging)?;
        app::logging::log_startup_info(&config.logging);
        app::logging::log_config_loading(&config_path, !config_existed);

        for warning in &config_warnings {
            log::warn!("{}", warning);
        }
        Some(handle)
    } else {
        None
    };

    let logging_enabled = config.logging.enabled;

    let mut app = App::new_with_config(config, args);
    app.config_warnings = config_warnings;

    let terminal = init_terminal()?;
    let result = app.run(terminal).await;

    if logging_enabled {
        app::logging::log_shutdown_info();
    }

    restore_terminal()?;
    result
}

/// Print the media players of the first notification, like the card editor's
/// entity picker.
async fn list_entities(input: Option<&Path>) -> color_eyre::Result<()> {
    let mut reader = NotificationReader::open(input).await?;

    let Some(notification) = reader.next_notification().await? else {
        eprintln!("No state notification received");
        return Ok(());
    };

    let players = notification.media_players();
    if players.is_empty() {
        eprintln!("No media_player entities found");
    }
    for player in players {
        println!("{}\t{}\t{}", player.entity_id, player.state, player.name);
    }
    Ok(())
}
