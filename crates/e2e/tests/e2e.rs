//! E2E suite entry point
//!
//! This file is the test binary that runs scenarios from YAML files.
//! Run with: cargo test --package ide-e2e --test e2e

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use url::Url;

use ide_e2e::{SuiteConfig, SuiteResult, SuiteRunner};
use ide_e2e_driver::DriverConfig;

#[derive(Parser, Debug)]
#[command(name = "ide-e2e")]
#[command(about = "End-to-end test runner for the web IDE")]
struct Args {
    /// Path to the scenarios directory
    #[arg(short, long, env = "E2E_SCENARIOS_DIR", default_value = "crates/e2e/scenarios")]
    scenarios: PathBuf,

    /// Run only scenarios with this tag
    #[arg(short, long)]
    tag: Option<String>,

    /// Run only the scenario with this name
    #[arg(short, long)]
    name: Option<String>,

    /// IDE base URL
    #[arg(long, env = "E2E_BASE_URL", default_value = "http://localhost:8080")]
    base_url: String,

    /// Run the browser in headless mode
    #[arg(long, env = "E2E_HEADLESS", default_value = "false")]
    headless: bool,

    /// Negotiate the W3C WebDriver protocol; false forces legacy mode
    #[arg(long, env = "E2E_W3C_PROTOCOL", default_value = "true")]
    w3c_protocol: bool,

    /// Remote WebDriver server URL (unset spawns a local chromedriver)
    #[arg(long, env = "E2E_REMOTE_DRIVER_URL")]
    remote_url: Option<Url>,

    /// Viewport width
    #[arg(long, env = "E2E_RESOLUTION_WIDTH", default_value = "1920")]
    width: u32,

    /// Viewport height
    #[arg(long, env = "E2E_RESOLUTION_HEIGHT", default_value = "1080")]
    height: u32,

    /// chromedriver binary for the local transport
    #[arg(long, env = "E2E_CHROMEDRIVER_BINARY", default_value = "chromedriver")]
    chromedriver: PathBuf,

    /// How long to wait for the IDE to become reachable, in seconds
    #[arg(long, default_value = "60")]
    ide_timeout_secs: u64,

    /// Output directory for reports and screenshots
    #[arg(short, long, env = "E2E_ARTIFACT_DIR", default_value = "test-results")]
    output: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .init();

    let args = Args::parse();

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let result = rt.block_on(async_main(args));

    match result {
        Ok(success) => {
            if success {
                std::process::exit(0);
            } else {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}

async fn async_main(args: Args) -> SuiteResult<bool> {
    let driver_config = DriverConfig {
        headless: args.headless,
        w3c_protocol: args.w3c_protocol,
        remote_url: args.remote_url,
        window_width: args.width,
        window_height: args.height,
        chromedriver_binary: args.chromedriver,
        ..DriverConfig::default()
    };

    let suite_config = SuiteConfig {
        base_url: args.base_url.trim_end_matches('/').to_string(),
        scenarios_dir: args.scenarios,
        artifact_dir: args.output,
        ..SuiteConfig::default()
    };

    let runner = SuiteRunner::new(driver_config, suite_config);

    runner
        .wait_ide_reachable(Duration::from_secs(args.ide_timeout_secs))
        .await?;

    let report = if let Some(name) = args.name {
        runner.run_named(&name).await?
    } else if let Some(tag) = args.tag {
        runner.run_tagged(&tag).await?
    } else {
        runner.run_all().await?
    };

    runner.write_report(&report)?;

    Ok(report.failed == 0)
}
