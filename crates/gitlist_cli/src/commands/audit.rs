use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use clap::ArgGroup;
use console::Term;
use gitlist::audit::{fetch_all, read_organizations};
use gitlist::github::{GitHubClient, QueryLimits};
use gitlist::report::{OutputMode, write_report};

use crate::config::Config;
use crate::progress::ProgressReporter;

const MISSING_TOKEN: &str = "No GitHub token configured. Set GITLIST_GITHUB__TOKEN or GITHUB_TOKEN, \
or add a [github] token to ~/.config/gitlist/config.toml.";

pub(crate) const AUDIT_AFTER_HELP: &str = r#"OUTPUT
    --outputcsv FILE writes one row per repository, separated by ';', with the
    columns Repo URL, Primary language, All languages, Last commit, PushedAt,
    Total pull requests and Calculated status. Nothing is printed to stdout.

    --rawjson prints the fetched records as a tab-indented JSON array on
    stdout, without classification.

    Either way, nothing is written unless every organization was fetched.

EXIT STATUS
    0      the report was written
    1      configuration, organization list, GitHub API or output failure
    130    interrupted with Ctrl+C
"#;

/// Options for the `audit` command.
#[derive(Debug, Clone, clap::Args)]
#[command(group(
    ArgGroup::new("output")
        .required(true)
        .args(["outputcsv", "rawjson"]),
))]
pub(crate) struct AuditArgs {
    /// File listing one organization login per line
    #[arg(long, value_name = "FILE")]
    pub orgs: PathBuf,

    /// Classify repositories and write a semicolon separated report to FILE
    #[arg(long, value_name = "FILE")]
    pub outputcsv: Option<PathBuf>,

    /// Print the raw repository records as JSON to stdout, without classifying
    #[arg(long)]
    pub rawjson: bool,
}

/// Everything an audit run needs, resolved once from flags and config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AuditConfig {
    pub orgs_file: PathBuf,
    pub output: OutputMode,
    pub token: String,
    pub api_url: Option<String>,
    pub limits: QueryLimits,
}

impl AuditConfig {
    pub fn from_args(args: AuditArgs, config: &Config) -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_parts(args, config.github_token(), config)
    }

    fn from_parts(
        args: AuditArgs,
        token: Option<String>,
        config: &Config,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let token = token.ok_or(MISSING_TOKEN)?;
        let output = match args.outputcsv {
            Some(path) => OutputMode::Csv(path),
            None => OutputMode::RawJson,
        };

        Ok(Self {
            orgs_file: args.orgs,
            output,
            token,
            api_url: config.github_api_url(),
            limits: config.query_limits(),
        })
    }
}

pub(crate) async fn handle_audit(
    args: AuditArgs,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let audit = AuditConfig::from_args(args, config)?;
    run_audit(&audit, ProgressReporter::new()).await
}

async fn run_audit(
    audit: &AuditConfig,
    reporter: ProgressReporter,
) -> Result<(), Box<dyn std::error::Error>> {
    let organizations = read_organizations(&audit.orgs_file)?;

    let client =
        GitHubClient::with_base_uri(&audit.token, audit.api_url.as_deref())?.with_limits(audit.limits);

    let reporter = Arc::new(reporter);
    let progress = reporter.as_callback();
    let result = fetch_all(&client, &organizations, Some(&progress)).await;
    reporter.finish();
    let records = result?;

    write_report(&audit.output, &records, Utc::now(), io::stdout().lock())?;

    if let OutputMode::Csv(path) = &audit.output
        && Term::stderr().is_term()
    {
        Term::stderr().write_line(&format!(
            "Wrote {} repositories to {}",
            records.len(),
            path.display()
        ))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::progress::LoggingReporter;
    use crate::{Cli, Commands};

    fn parse(args: &[&str]) -> Result<AuditArgs, clap::Error> {
        let cli = Cli::try_parse_from(args)?;
        match cli.command {
            Commands::Audit(args) => Ok(args),
            _ => panic!("expected audit command"),
        }
    }

    #[test]
    fn test_parse_csv_mode() {
        let args = parse(&[
            "gitlist",
            "audit",
            "--orgs",
            "orgs.txt",
            "--outputcsv",
            "out.csv",
        ])
        .unwrap();

        assert_eq!(args.orgs, PathBuf::from("orgs.txt"));
        assert_eq!(args.outputcsv, Some(PathBuf::from("out.csv")));
        assert!(!args.rawjson);
    }

    #[test]
    fn test_parse_raw_json_mode() {
        let args = parse(&["gitlist", "audit", "--orgs", "orgs.txt", "--rawjson"]).unwrap();

        assert!(args.rawjson);
        assert!(args.outputcsv.is_none());
    }

    #[test]
    fn test_output_mode_is_required() {
        let err = parse(&["gitlist", "audit", "--orgs", "orgs.txt"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_output_modes_are_exclusive() {
        let err = parse(&[
            "gitlist",
            "audit",
            "--orgs",
            "orgs.txt",
            "--outputcsv",
            "out.csv",
            "--rawjson",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_orgs_is_required() {
        let err = parse(&["gitlist", "audit", "--rawjson"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_audit_config_from_parts() {
        let args = AuditArgs {
            orgs: PathBuf::from("orgs.txt"),
            outputcsv: Some(PathBuf::from("out.csv")),
            rawjson: false,
        };

        let audit =
            AuditConfig::from_parts(args, Some("ghp_x".to_string()), &Config::default()).unwrap();

        assert_eq!(audit.output, OutputMode::Csv(PathBuf::from("out.csv")));
        assert_eq!(audit.token, "ghp_x");
        assert!(audit.api_url.is_none());
        assert_eq!(audit.limits, QueryLimits::default());
    }

    #[test]
    fn test_audit_config_requires_token() {
        let args = AuditArgs {
            orgs: PathBuf::from("orgs.txt"),
            outputcsv: None,
            rawjson: true,
        };

        let err = AuditConfig::from_parts(args, None, &Config::default()).unwrap_err();

        assert!(err.to_string().contains("No GitHub token configured"));
    }

    fn audit_config(dir: &tempfile::TempDir, server: &MockServer, output: OutputMode) -> AuditConfig {
        let orgs_file = dir.path().join("orgs.txt");
        std::fs::write(&orgs_file, "acme\n").unwrap();
        AuditConfig {
            orgs_file,
            output,
            token: "ghp_test".to_string(),
            api_url: Some(server.uri()),
            limits: QueryLimits::default(),
        }
    }

    #[tokio::test]
    async fn test_run_audit_writes_csv_report() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "organization": { "repositories": {
                    "totalCount": 1,
                    "nodes": [{
                        "url": "https://github.com/acme/old",
                        "isArchived": true,
                        "isEmpty": false,
                        "isFork": false,
                        "isDisabled": false,
                        "primaryLanguage": { "name": "C" },
                        "languages": { "nodes": [{ "name": "C" }] },
                        "pushedAt": "2015-01-01T00:00:00Z",
                        "pullRequests": { "totalCount": 2 },
                        "refs": { "edges": [] }
                    }],
                    "pageInfo": { "endCursor": "MQ", "hasNextPage": false }
                } } }
            })))
            .mount(&server)
            .await;
        let dir = tempfile::tempdir().unwrap();
        let report = dir.path().join("report.csv");
        let audit = audit_config(&dir, &server, OutputMode::Csv(report.clone()));

        run_audit(&audit, ProgressReporter::Logging(LoggingReporter::new()))
            .await
            .unwrap();

        let written = std::fs::read_to_string(&report).unwrap();
        assert!(written.contains("https://github.com/acme/old"));
        assert!(written.contains("Already archived"));
    }

    #[tokio::test]
    async fn test_run_audit_fetch_failure_writes_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "organization": null },
                "errors": [{ "type": "NOT_FOUND", "message": "Could not resolve to an Organization" }]
            })))
            .mount(&server)
            .await;
        let dir = tempfile::tempdir().unwrap();
        let report = dir.path().join("report.csv");
        let audit = audit_config(&dir, &server, OutputMode::Csv(report.clone()));

        let err = run_audit(&audit, ProgressReporter::Logging(LoggingReporter::new()))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("acme"));
        assert!(!report.exists());
    }

    #[tokio::test]
    async fn test_run_audit_missing_orgs_file() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let mut audit = audit_config(&dir, &server, OutputMode::RawJson);
        audit.orgs_file = dir.path().join("missing.txt");

        let err = run_audit(&audit, ProgressReporter::Logging(LoggingReporter::new()))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("missing.txt"));
    }
}
