use clap::Parser;
use tagmigrate::application::{convert_codeblocks, convert_images, CodeblockOptions, ImageOptions};
use tagmigrate::cli::{
    format_language_tables, format_outcome, Cli, Commands, CODEBLOCK_NOTES, IMAGE_NOTES,
};
use tagmigrate::error::MigrateError;
use tagmigrate::infrastructure::{AssumeYes, Config, ConsolePrompt, PostsRepository};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // --verbose enables INFO level, otherwise use RUST_LOG
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), MigrateError> {
    let recursive = cli.recursive_override();
    let (outcome, notes) = match cli.command {
        Commands::Codeblocks { dry_run } => {
            let (repo, config) = open_posts(cli.dir, recursive)?;
            let options = CodeblockOptions {
                recursive: config.recursive,
                dry_run,
            };
            (convert_codeblocks(&repo, options)?, CODEBLOCK_NOTES)
        }
        Commands::Images { dry_run, yes } => {
            let (repo, config) = open_posts(cli.dir, recursive)?;
            let options = ImageOptions {
                recursive: config.recursive,
                dry_run,
                assume_yes: yes,
            };
            let outcome = if yes {
                convert_images(&repo, options, &mut AssumeYes)?
            } else {
                convert_images(&repo, options, &mut ConsolePrompt::stdio())?
            };
            (outcome, IMAGE_NOTES)
        }
        Commands::Languages => {
            print!("{}", format_language_tables());
            return Ok(());
        }
    };

    println!("{}", format_outcome(&outcome, notes));
    Ok(())
}

/// Resolve configuration from the working directory and command-line flags
fn open_posts(
    dir: Option<PathBuf>,
    recursive: Option<bool>,
) -> Result<(PostsRepository, Config), MigrateError> {
    let current_dir = std::env::current_dir()?;
    let config = Config::load_from_dir(&current_dir)?.with_overrides(dir, recursive);
    tracing::debug!(
        posts_dir = %config.posts_dir.display(),
        recursive = config.recursive,
        "resolved configuration"
    );

    Ok((PostsRepository::new(config.posts_dir.clone()), config))
}
