mod cli;

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use adventfs::config::Config;
use adventfs::content::{ScriptLibrary, ScriptModule};
use adventfs::handlers::FileRegistry;
use adventfs::vfs::{Archive, FileNode};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();

    let config = match cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.telemetry.log_filter)),
        )
        .init();

    let archive = Archive::load(&config.world.archive_path, &demo_scripts())?;
    let registry = FileRegistry::with_defaults();

    match cli.command {
        Commands::Ls => {
            for node in archive.nodes() {
                println!("{}", node.path);
            }
        }
        Commands::Read(args) => {
            let node = lookup(&archive, &args.path)?;
            match registry.open(node, archive.table()).await? {
                Some(output) => println!("{output}"),
                None => println!("There is nothing to read in '{}'.", node.full_name),
            }
        }
        Commands::Examine(args) => {
            let node = lookup(&archive, &args.path)?;
            match registry.examine(node, archive.table()).await? {
                Some(description) => println!("{description}"),
                None => println!("You see nothing special about '{}'.", node.full_name),
            }
        }
    }

    Ok(())
}

fn lookup<'a>(archive: &'a Archive, path: &str) -> Result<&'a FileNode, String> {
    archive
        .node(path)
        .ok_or_else(|| format!("No such file: {path}"))
}

/// Scripts referenced by name from the demo world archive.
fn demo_scripts() -> ScriptLibrary {
    let mut scripts = ScriptLibrary::new();
    scripts.insert(
        "flashlight".to_string(),
        ScriptModule {
            run: Some(Arc::new(|| {
                "The flashlight flickers on, throwing long shadows across the room.".to_string()
            })),
            examine: Some(Arc::new(|| {
                "A battered flashlight. The switch is sticky.".to_string()
            })),
        },
    );
    scripts.insert(
        "terminal".to_string(),
        ScriptModule {
            run: Some(Arc::new(|| {
                "The terminal hums to life. A cursor blinks, waiting.".to_string()
            })),
            examine: None,
        },
    );
    scripts
}
