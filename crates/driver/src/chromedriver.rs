//! Local chromedriver process management

use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::time::Duration;

use tokio::time::sleep;
use tracing::{info, warn};

use crate::error::{DriverError, DriverResult};

/// Handle to a locally spawned chromedriver process
pub struct ChromedriverHandle {
    child: Child,
    port: u16,
    url: String,
}

impl ChromedriverHandle {
    /// Spawn chromedriver and wait until it answers status checks.
    ///
    /// When `port` is `None` a free port is picked.
    pub async fn spawn(
        binary: &Path,
        port: Option<u16>,
        startup_timeout: Duration,
    ) -> DriverResult<Self> {
        let port = match port {
            Some(p) => p,
            None => find_free_port()?,
        };
        let url = format!("http://127.0.0.1:{}", port);

        info!("Spawning chromedriver on port {}", port);

        let child = Command::new(binary)
            .arg(format!("--port={}", port))
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| DriverError::Spawn(format!("{}: {}", binary.display(), e)))?;

        let handle = ChromedriverHandle { child, port, url };

        handle.wait_for_ready(startup_timeout).await?;

        info!("chromedriver ready at {}", handle.url);
        Ok(handle)
    }

    /// Poll the WebDriver status endpoint until the server reports ready
    async fn wait_for_ready(&self, timeout: Duration) -> DriverResult<()> {
        let status_url = format!("{}/status", self.url);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(2))
            .build()?;

        let start = std::time::Instant::now();
        let mut attempts = 0;

        while start.elapsed() < timeout {
            attempts += 1;

            match client.get(&status_url).send().await {
                Ok(resp) if resp.status().is_success() => {
                    let ready = resp
                        .json::<serde_json::Value>()
                        .await
                        .ok()
                        .and_then(|v| v["value"]["ready"].as_bool())
                        .unwrap_or(true);
                    if ready {
                        return Ok(());
                    }
                }
                Ok(resp) => {
                    warn!("chromedriver status returned {}", resp.status());
                }
                Err(e) => {
                    if attempts == 1 {
                        info!("Waiting for chromedriver to start...");
                    }
                    // Connection refused is expected while it is starting
                    if !e.is_connect() {
                        warn!("chromedriver status error: {}", e);
                    }
                }
            }

            sleep(Duration::from_millis(100)).await;
        }

        Err(DriverError::Startup { attempts })
    }

    /// Local WebDriver endpoint
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Stop the process
    pub fn stop(&mut self) -> DriverResult<()> {
        info!("Stopping chromedriver (pid: {})", self.child.id());

        // Try graceful shutdown first
        #[cfg(unix)]
        {
            use nix::sys::signal::{kill, Signal};
            use nix::unistd::Pid;

            let pid = Pid::from_raw(self.child.id() as i32);
            if kill(pid, Signal::SIGTERM).is_ok() {
                std::thread::sleep(Duration::from_millis(200));
            }
        }

        // Force kill if still running
        let _ = self.child.kill();
        let _ = self.child.wait();

        Ok(())
    }
}

impl Drop for ChromedriverHandle {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}

/// Find a free port to use
fn find_free_port() -> std::io::Result<u16> {
    use std::net::TcpListener;

    let listener = TcpListener::bind("127.0.0.1:0")?;
    Ok(listener.local_addr()?.port())
}
