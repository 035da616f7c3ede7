//! MeowSSG CLI: the `meowssg` command.

mod cli;
mod commands;
mod config;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            config,
            out,
            base_url,
            json,
        } => commands::build::run(commands::build::Args {
            config,
            out,
            base_url,
            json,
        }),

        Commands::Routes { config, json } => commands::routes::run(config, json),

        Commands::Validate {
            file,
            base_url,
            json,
        } => commands::validate::run(file, base_url, json),

        Commands::Fix {
            file,
            route,
            output,
            base_url,
            json,
        } => commands::fix::run(file, route, output, base_url, json),
    }
}
