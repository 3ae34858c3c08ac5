use log::{error, info};

use routesync::{discover_config, load_config, sync, RouteWatcher};

fn main() {
    let exit_code = run();
    std::process::exit(exit_code);
}

fn run() -> i32 {
    let project_root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Failed to determine working directory: {}", e);
            return 1;
        }
    };

    let config_path = match discover_config(&project_root) {
        Ok(path) => path,
        Err(e) => {
            init_logging(false);
            error!("{}", e);
            return 1;
        }
    };

    let config = match load_config(&config_path, &project_root) {
        Ok(config) => config,
        Err(e) => {
            init_logging(false);
            error!("{}", e);
            return 1;
        }
    };

    init_logging(config.verbose);

    info!(
        "Syncing {} -> {}",
        config.pages_dir.display(),
        config.app_dir.display()
    );

    if let Err(e) = sync(&config) {
        error!("Sync failed: {}", e);
        return 1;
    }

    if config.watch {
        let watcher = RouteWatcher::new(&config.pages_dir);
        let result = watcher.watch(|| {
            // Per-pass failures are reported but keep the watch loop alive
            if let Err(e) = sync(&config) {
                error!("Sync failed: {}", e);
            }
        });

        if let Err(e) = result {
            error!("{}", e);
            return 1;
        }
    }

    0
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_secs()
        .init();
}
