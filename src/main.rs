//! CLI entry point for folio

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::commands::frontmatter::FrontmatterArgs;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Authoring tools for a portfolio and blog site", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rebuild blog post front matter from the post body
    #[command(alias = "fm")]
    Frontmatter {
        /// Post to update (all posts when omitted) and `--refresh-images`.
        /// Other flags are ignored.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Check every content file against the content schema
    Validate,

    /// Generate the Open Graph preview image
    #[command(name = "og-image", alias = "og")]
    OgImage,

    /// List site content
    List {
        /// Type of content to list (post, project)
        #[arg(default_value = "post")]
        r#type: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio=debug,info"
    } else {
        "folio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let site = folio::Site::new(&base_dir)?;

    match cli.command {
        Commands::Frontmatter { args } => {
            let args = FrontmatterArgs::parse(&args);
            site.regenerate(args.file.as_deref(), args.refresh_images)
                .await?;
        }

        Commands::Validate => {
            site.validate()?;
        }

        Commands::OgImage => {
            site.og_image()?;
        }

        Commands::List { r#type } => {
            folio::commands::list::run(&site, &r#type)?;
        }
    }

    Ok(())
}
