use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use example_finder::cli::commands::{
    browse::BrowseCommand, config::ConfigCommand, gallery::GalleryCommand, paths::PathsCommand,
    quiz::QuizCommand, search::FilterArgs, search::SearchCommand, show::ShowCommand,
    validate::ValidateCommand, CommandHandler, FinderContext,
};
use example_finder::cli::{Cli, Commands, LogLevel};

fn initialize_tracing(log_level: LogLevel) {
    let filter = EnvFilter::new(log_level.to_filter_directive());

    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    initialize_tracing(cli.log_level);
    tracing::debug!(command = cli.command.name(), "starting");

    let context = if cli.command.needs_context() {
        FinderContext::load(cli.config.as_deref(), cli.catalog.as_deref())
            .context("Failed to load configuration or catalog")?
    } else {
        FinderContext::builtin()
    };

    let handler: Box<dyn CommandHandler + '_> = match cli.command {
        Commands::Search {
            query,
            categories,
            difficulty,
            only_new,
            sort,
            json,
        } => Box::new(SearchCommand::new(
            &context,
            FilterArgs {
                query,
                categories,
                difficulty,
                only_new,
                sort,
            },
            json,
        )),
        Commands::Gallery {
            categories,
            difficulty,
            only_new,
            sort,
            json,
        } => Box::new(GalleryCommand::new(
            &context,
            FilterArgs {
                query: None,
                categories,
                difficulty,
                only_new,
                sort,
            },
            json,
        )),
        Commands::Browse {
            category,
            select,
            json,
        } => Box::new(BrowseCommand::new(&context, category, select, json)),
        Commands::Quiz {
            experience,
            background,
            interest,
            time,
            json,
        } => Box::new(QuizCommand::new(
            &context, experience, background, interest, time, json,
        )),
        Commands::Paths { path, json } => Box::new(PathsCommand::new(&context, path, json)),
        Commands::Show { id, json } => Box::new(ShowCommand::new(&context, id, json)),
        Commands::Validate { file } => Box::new(ValidateCommand::new(file)),
        Commands::Config { json } => Box::new(ConfigCommand::new(&context, json)),
        #[cfg(feature = "tui")]
        Commands::Tui => {
            example_finder::cli::tui::run_finder(context.clone()).await?;
            return Ok(());
        }
    };

    handler
        .execute()
        .with_context(|| format!("{} failed", handler.name()))?;
    Ok(())
}
