use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "todo", about = concat!("to.do v", env!("CARGO_PKG_VERSION"), " - a single-screen to-do list"), version)]
pub struct Cli {
    /// Read settings from this file instead of the default location
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Append log output to this file (overrides [log] file)
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter directive, e.g. "debug" or "todolist=trace" (overrides [log] level)
    #[arg(long = "log-level", value_name = "FILTER")]
    pub log_level: Option<String>,
}
