// src/config.rs
use crate::api::SlugLookupPolicy;
use crate::constants::{DATABASE_ID_ENV_VAR, TOKEN_ENV_VAR};
use crate::error::AppError;
use crate::types::{ApiKey, DatabaseId};
use crate::views::{validate_date_format, ViewOptions, DEFAULT_DATE_FORMAT, DEFAULT_SITE_TITLE};
use clap::Parser;
use std::path::PathBuf;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Builds a static blog from a Notion database",
    long_about = None
)]
pub struct CommandLineInput {
    /// Directory the site is written into
    #[arg(short, long, default_value = "public")]
    pub output_dir: PathBuf,

    /// Site title shown in the header and page titles
    #[arg(long, default_value = DEFAULT_SITE_TITLE)]
    pub site_title: String,

    /// strftime pattern for post dates
    #[arg(long, default_value = DEFAULT_DATE_FORMAT)]
    pub date_format: String,

    /// Which posts a slug may resolve to
    #[arg(long, value_enum, default_value_t = SlugLookupPolicy::AnyStatus)]
    pub slug_policy: SlugLookupPolicy,

    /// Print the route table instead of building the site
    #[arg(long, default_value_t = false)]
    pub list_paths: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved site configuration, validated and ready to build with.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub api_key: ApiKey,
    /// May be unset; Notion will then reject the query.
    pub database_id: DatabaseId,
    pub output_dir: PathBuf,
    pub view: ViewOptions,
    pub slug_policy: SlugLookupPolicy,
    pub list_paths: bool,
    pub verbose: bool,
}

impl SiteConfig {
    /// Resolves the configuration from CLI input and the process environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        Self::resolve_with(cli, |name| std::env::var(name).ok())
    }

    /// Like [`SiteConfig::resolve`], reading variables through `env`.
    pub fn resolve_with(
        cli: CommandLineInput,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AppError> {
        let token = env(TOKEN_ENV_VAR).ok_or_else(|| {
            AppError::MissingConfiguration(format!(
                "{} environment variable not set",
                TOKEN_ENV_VAR
            ))
        })?;
        let api_key = ApiKey::new(token)?;

        let database_id = match env(DATABASE_ID_ENV_VAR).filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => DatabaseId::parse(&raw)?,
            None => {
                log::warn!(
                    "{} is not set; querying with an empty database id",
                    DATABASE_ID_ENV_VAR
                );
                DatabaseId::unset()
            }
        };

        validate_date_format(&cli.date_format)?;

        Ok(SiteConfig {
            api_key,
            database_id,
            output_dir: cli.output_dir,
            view: ViewOptions {
                site_title: cli.site_title,
                date_format: cli.date_format,
            },
            slug_policy: cli.slug_policy,
            list_paths: cli.list_paths,
            verbose: cli.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const TOKEN: &str = "secret_abcdefghijklmnopqrstuvwxyz";

    fn cli(args: &[&str]) -> CommandLineInput {
        CommandLineInput::parse_from(std::iter::once("notion-blog").chain(args.iter().copied()))
    }

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_resolve() {
        let config = SiteConfig::resolve_with(
            cli(&[]),
            env(&[
                (TOKEN_ENV_VAR, TOKEN),
                (DATABASE_ID_ENV_VAR, "12345678123456781234567812345678"),
            ]),
        )
        .unwrap();

        assert_eq!(config.output_dir, PathBuf::from("public"));
        assert_eq!(config.view, ViewOptions::default());
        assert_eq!(config.slug_policy, SlugLookupPolicy::AnyStatus);
        assert_eq!(
            config.database_id.to_dashed(),
            "12345678-1234-5678-1234-567812345678"
        );
        assert!(!config.list_paths);
    }

    #[test]
    fn flags_override_defaults() {
        let config = SiteConfig::resolve_with(
            cli(&[
                "-o",
                "site",
                "--site-title",
                "Field Notes",
                "--date-format",
                "%d.%m.%Y",
                "--slug-policy",
                "published",
                "--list-paths",
            ]),
            env(&[(TOKEN_ENV_VAR, TOKEN)]),
        )
        .unwrap();

        assert_eq!(config.output_dir, PathBuf::from("site"));
        assert_eq!(config.view.site_title, "Field Notes");
        assert_eq!(config.view.date_format, "%d.%m.%Y");
        assert_eq!(config.slug_policy, SlugLookupPolicy::PublishedOnly);
        assert!(config.list_paths);
    }

    #[test]
    fn unknown_slug_policy_is_rejected_by_the_parser() {
        let err = CommandLineInput::try_parse_from(["notion-blog", "--slug-policy", "drafts"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn missing_token_is_a_configuration_error() {
        let err = SiteConfig::resolve_with(cli(&[]), env(&[])).unwrap_err();
        assert!(matches!(err, AppError::MissingConfiguration(_)));
    }

    #[test]
    fn missing_database_id_is_tolerated() {
        let config = SiteConfig::resolve_with(cli(&[]), env(&[(TOKEN_ENV_VAR, TOKEN)])).unwrap();
        assert!(config.database_id.is_unset());
    }

    #[test]
    fn bad_values_are_rejected() {
        let bad_format = SiteConfig::resolve_with(
            cli(&["--date-format", "%Q"]),
            env(&[(TOKEN_ENV_VAR, TOKEN)]),
        );
        assert!(matches!(bad_format, Err(AppError::Validation(_))));

        let bad_token =
            SiteConfig::resolve_with(cli(&[]), env(&[(TOKEN_ENV_VAR, "not-a-token")]));
        assert!(matches!(bad_token, Err(AppError::Validation(_))));
    }
}
