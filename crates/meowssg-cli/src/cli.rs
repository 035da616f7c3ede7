use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "meowssg",
    about = "MeowSSG: pre-render the MeowRescue site to static HTML",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full pre-render build: resolve, render, validate, fix,
    /// write, and generate the sitemap/robots/redirects artifacts
    Build {
        /// Site configuration TOML path
        #[arg(long, default_value = "meowssg.toml")]
        config: String,

        /// Output directory (overrides configuration)
        #[arg(long)]
        out: Option<String>,

        /// Site origin URL (overrides configuration)
        #[arg(long)]
        base_url: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve and print the route set for one build
    Routes {
        /// Site configuration TOML path
        #[arg(long, default_value = "meowssg.toml")]
        config: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the validation checklist over one HTML file
    Validate {
        /// HTML file to validate
        file: String,

        /// Site origin URL used for internal-link classification
        #[arg(long)]
        base_url: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Repair one HTML file into a complete, valid document
    Fix {
        /// HTML file to repair
        file: String,

        /// Route the document belongs to
        #[arg(long)]
        route: String,

        /// Write the repaired document here instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Site origin URL used for canonical links
        #[arg(long)]
        base_url: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
