use std::process::ExitCode;

use anyhow::{Context, Result};
use persnamer_etl::{lookup, Config, Lookup};

/// Overrides for the lookup, applied on top of the loaded configuration.
#[derive(Debug, Default, clap::Args)]
pub struct LookupArgs {
    /// Record URL prefix (default: https://viaf.org/viaf)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// HTTP timeout in seconds (default: 30)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Split run-together names such as "GaleazzoSanseverino"
    #[arg(long)]
    pub split_camel_case: bool,

    /// Reduce YYYY-MM-00 dates to the bare year
    #[arg(long)]
    pub truncate_unknown_day: bool,
}

impl LookupArgs {
    fn apply(&self, mut config: Config) -> Config {
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url.clone());
        }
        if let Some(secs) = self.timeout {
            config = config.with_timeout_secs(secs);
        }
        if self.split_camel_case {
            config = config.with_split_camel_case(true);
        }
        if self.truncate_unknown_day {
            config = config.with_truncate_unknown_day(true);
        }
        config
    }
}

/// Look up one VIAF number and print both TEI fragments.
///
/// Lookup failures are logged with the stage that failed and reported
/// through the exit code; only configuration problems surface as errors.
pub async fn run_lookup(viaf_id: &str, args: &LookupArgs) -> Result<ExitCode> {
    let config = args.apply(Config::load().context("Failed to load configuration")?);
    log::debug!("Effective configuration: {:?}", config);

    match lookup(&config, viaf_id).await {
        Ok(result) => {
            print!("{}", format_output(&result));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            log::error!("Lookup failed during {}: {}", e.stage(), e);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn format_output(result: &Lookup) -> String {
    format!(
        "<!-- authority -->\n{}\n\n<!-- annotation -->\n{}\n",
        result.authority_xml, result.annotation_xml
    )
}
