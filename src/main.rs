// src/main.rs

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use notion_blog::constants::TOKEN_ENV_VAR;
use notion_blog::output::OutputReport;
use notion_blog::{
    AppError, CommandLineInput, NotionHttpClient, NotionRepository, PostRepository, SiteConfig,
    SiteGenerator, SiteRenderer,
};
use std::fs;
use std::io::Write;
use std::sync::Arc;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("notion_blog.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(log4rs::append::console::Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] {t} - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Wires the Notion client, repository, renderer and generator together.
fn build_generator(config: &SiteConfig) -> anyhow::Result<SiteGenerator> {
    let client: Arc<dyn NotionRepository> = Arc::new(
        NotionHttpClient::new(&config.api_key).context("Failed to create Notion client")?,
    );
    let repository = PostRepository::new(client, config.database_id.clone())
        .with_slug_policy(config.slug_policy);
    let renderer =
        SiteRenderer::new(config.view.clone()).context("Failed to load site templates")?;

    Ok(SiteGenerator::new(
        repository,
        renderer,
        config.output_dir.clone(),
    ))
}

/// Prints the route table to stdout.
async fn list_paths(generator: &SiteGenerator) -> anyhow::Result<()> {
    let table = generator
        .path_table()
        .await
        .map_err(|e| explain(e, "Failed to enumerate post paths"))?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(table.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Adds context to a failed build, pointing at the token when Notion rejected it.
fn explain(err: AppError, what: &'static str) -> anyhow::Error {
    let auth_failure =
        matches!(&err, AppError::NotionService { code, .. } if code.is_auth_failure());
    let err = anyhow::Error::new(err).context(what);
    if auth_failure {
        err.context(format!(
            "Notion rejected the token; check {} and that the database is shared \
             with the integration",
            TOKEN_ENV_VAR
        ))
    } else {
        err
    }
}

fn report_completion(generator: &SiteGenerator, report: &OutputReport) {
    println!(
        "✓ Wrote {} page(s) to {} ({} bytes, {}ms)",
        report.pages_written(),
        generator.output_dir().display(),
        report.bytes_written,
        report.duration_ms
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose).context("Failed to initialize logging")?;

    let config = SiteConfig::resolve(cli).context("Invalid configuration")?;
    log::debug!(
        "Building from database '{}' into {} (slug policy: {})",
        config.database_id,
        config.output_dir.display(),
        config.slug_policy
    );

    let generator = build_generator(&config)?;

    if config.list_paths {
        return list_paths(&generator).await;
    }

    let report = generator
        .generate()
        .await
        .map_err(|e| explain(e, "Site generation failed"))?;
    report_completion(&generator, &report);

    Ok(())
}
