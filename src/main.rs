use clap::Parser;
use todolist::cli::commands::Cli;
use todolist::io::config_io::load_config;
use todolist::io::log::init_logging;

fn main() {
    let cli = Cli::parse();

    let mut config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    // Flags win over the file
    if let Some(file) = cli.log_file {
        config.log.file = Some(file);
    }
    if let Some(level) = cli.log_level {
        config.log.level = level;
    }

    let _log_guard = match init_logging(&config.log) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = todolist::tui::run(&config) {
        tracing::error!(error = %e, "exiting with error");
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
