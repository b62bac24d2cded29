use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use phishguard_engine::{ClassifierSettings, ProgressAnimation};

#[derive(Parser, Debug)]
#[command(name = "phishguard")]
#[command(version)]
#[command(about = "Interactive phishing URL scanner backed by a remote /predict service.", long_about = None)]
pub struct Args {
    /// URL to scan right away, as if typed and submitted.
    pub url: Option<String>,

    /// Base URL of the classification service.
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    pub endpoint: String,

    /// Directory holding the persisted scan history.
    #[arg(long, default_value = ".phishguard")]
    pub history_dir: PathBuf,

    /// Pause between progress stages, in milliseconds.
    #[arg(long, default_value_t = 600)]
    pub step_delay_ms: u64,

    /// Give up on the service after this many seconds (no limit by default).
    #[arg(long)]
    pub request_timeout_secs: Option<u64>,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogDestination {
    /// Write to ./phishguard.log in the current directory.
    File,
    /// Write to the terminal (stderr).
    Terminal,
    /// Write to both file and terminal.
    Both,
}

impl Args {
    pub fn classifier_settings(&self) -> ClassifierSettings {
        ClassifierSettings {
            endpoint: self.endpoint.clone(),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            ..ClassifierSettings::default()
        }
    }

    pub fn animation(&self) -> ProgressAnimation {
        ProgressAnimation::with_step_delay(Duration::from_millis(self.step_delay_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_service_contract() {
        let args = Args::parse_from(["phishguard"]);
        assert_eq!(args.url, None);
        assert_eq!(args.log, LogDestination::File);
        assert_eq!(args.animation(), ProgressAnimation::default());
        let settings = args.classifier_settings();
        assert_eq!(settings.endpoint, "http://127.0.0.1:8000");
        assert_eq!(settings.request_timeout, None);
    }

    #[test]
    fn flags_override_settings() {
        let args = Args::parse_from([
            "phishguard",
            "--endpoint",
            "http://scanner.test:9000",
            "--step-delay-ms",
            "0",
            "--request-timeout-secs",
            "15",
            "--log",
            "both",
            "http://bad-site.test",
        ]);
        assert_eq!(args.url.as_deref(), Some("http://bad-site.test"));
        assert_eq!(args.log, LogDestination::Both);
        assert_eq!(args.animation().step_delay, Duration::ZERO);
        assert_eq!(
            args.classifier_settings().request_timeout,
            Some(Duration::from_secs(15))
        );
    }
}
