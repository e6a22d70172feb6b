use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use flow_logging::{LevelFilter, LogDestination, DEFAULT_LOG_FILE};
use jobflow_core::Route;
use jobflow_engine::{FetchSettings, DEFAULT_API_BASE};

/// Command line, with environment fallbacks for deployment.
#[derive(Debug, Parser)]
#[command(name = "jobflow")]
#[command(about = "Browse job listings and market analytics from the terminal")]
pub struct Cli {
    /// Base URL of the listing service. Used verbatim as a prefix.
    #[arg(long, env = "API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Route shown at startup: /, /analytics, /login or /register.
    #[arg(long, default_value = "/", value_parser = parse_route)]
    pub route: Route,

    /// Log file, or "off" to disable logging.
    #[arg(long, env = "JOBFLOW_LOG", default_value = DEFAULT_LOG_FILE)]
    pub log_file: String,

    #[arg(long, default_value = "info", value_parser = parse_level)]
    pub log_level: LevelFilter,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub fetch: FetchSettings,
    pub initial_route: Route,
    pub log_destination: LogDestination,
    pub log_level: LevelFilter,
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        let log_destination = if cli.log_file.eq_ignore_ascii_case("off") {
            LogDestination::Off
        } else {
            LogDestination::File(PathBuf::from(cli.log_file))
        };
        AppConfig {
            fetch: FetchSettings {
                request_timeout: Duration::from_secs(cli.timeout_secs.max(1)),
                ..FetchSettings::with_api_base(cli.api_base)
            },
            initial_route: cli.route,
            log_destination,
            log_level: cli.log_level,
        }
    }
}

fn parse_route(raw: &str) -> Result<Route, String> {
    Route::from_path(raw).ok_or_else(|| {
        format!("unknown route {raw:?} (expected /, /analytics, /login or /register)")
    })
}

fn parse_level(raw: &str) -> Result<LevelFilter, String> {
    raw.parse().map_err(|_| {
        format!("unknown log level {raw:?} (expected off, error, warn, info, debug or trace)")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobflow_core::AuthMode;

    fn parse(args: &[&str]) -> AppConfig {
        let mut argv = vec!["jobflow"];
        argv.extend_from_slice(args);
        AppConfig::from(Cli::try_parse_from(argv).expect("valid args"))
    }

    #[test]
    fn flags_override_defaults() {
        let config = parse(&[
            "--api-base",
            "https://jobs.example.com/",
            "--route",
            "/register",
            "--log-file",
            "off",
            "--timeout-secs",
            "5",
        ]);
        assert_eq!(config.fetch.api_base, "https://jobs.example.com/");
        assert_eq!(config.initial_route, Route::Auth(AuthMode::Register));
        assert_eq!(config.log_destination, LogDestination::Off);
        assert_eq!(config.fetch.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn unknown_route_is_rejected() {
        assert!(Cli::try_parse_from(["jobflow", "--route", "/settings"]).is_err());
    }
}
