mod app;
mod cli;
mod output;

use std::process::ExitCode;

use clap::Parser;
use liftlog::config::Config;
use liftlog::utils::set_debug;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // JSON output stays clean: no config notices on stderr
    let config = if cli.json {
        Config::load_quiet()
    } else {
        Config::load()
    };
    let cli = cli.with_config(&config);
    set_debug(cli.debug);

    match app::run(&cli, &config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
