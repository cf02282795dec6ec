//! Session factory and handle

use fantoccini::{Client, ClientBuilder};
use tracing::{debug, info};
use url::Url;

use crate::capabilities::CapabilitySet;
use crate::chromedriver::ChromedriverHandle;
use crate::config::DriverConfig;
use crate::error::DriverResult;

/// Underlying transport of a session
pub enum Transport {
    /// Locally spawned chromedriver, killed when the handle closes
    Local(ChromedriverHandle),
    /// Remote WebDriver server managing browsers on our behalf
    Remote(Url),
}

impl Transport {
    pub fn is_remote(&self) -> bool {
        matches!(self, Transport::Remote(_))
    }

    /// WebDriver endpoint this transport targets
    pub fn endpoint(&self) -> String {
        match self {
            Transport::Local(chromedriver) => chromedriver.url().to_string(),
            Transport::Remote(url) => url.as_str().trim_end_matches('/').to_string(),
        }
    }
}

/// Builds exactly one [`SessionHandle`] from a [`DriverConfig`].
///
/// Construction is cheap and infallible: the capability set is assembled
/// eagerly from the configuration, but no process is spawned and no
/// connection is opened until [`create`](SessionFactory::create), which
/// consumes the factory.
pub struct SessionFactory {
    config: DriverConfig,
    capabilities: CapabilitySet,
}

impl SessionFactory {
    pub fn new(config: DriverConfig) -> Self {
        let capabilities = CapabilitySet::from_config(&config);
        Self { config, capabilities }
    }

    /// Capability set that will be sent at session creation
    pub fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Open the browser session.
    ///
    /// Transport selection: a configured remote URL routes session creation
    /// through that server; otherwise a local chromedriver is spawned. The
    /// new-session handshake happens here, so transport failures surface at
    /// creation rather than on first use. The configured viewport is
    /// applied before the handle is returned.
    pub async fn create(self) -> DriverResult<SessionHandle> {
        let transport = match &self.config.remote_url {
            Some(url) => Transport::Remote(url.clone()),
            None => {
                let chromedriver = ChromedriverHandle::spawn(
                    &self.config.chromedriver_binary,
                    None,
                    self.config.startup_timeout,
                )
                .await?;
                Transport::Local(chromedriver)
            }
        };

        let endpoint = transport.endpoint();
        debug!(endpoint = %endpoint, "Opening WebDriver session");

        let client = ClientBuilder::native()
            .capabilities(self.capabilities.clone().into_map())
            .connect(&endpoint)
            .await?;

        let handle = SessionHandle {
            client,
            transport,
            capabilities: self.capabilities,
        };

        handle
            .resize(self.config.window_width, self.config.window_height)
            .await?;

        info!(
            "Browser session ready ({} transport, {}x{})",
            if handle.is_remote() { "remote" } else { "local" },
            self.config.window_width,
            self.config.window_height,
        );

        Ok(handle)
    }
}

/// One live browser-automation connection.
///
/// Callers serialize access to a handle; separate handles (from separate
/// factories) are fully independent.
pub struct SessionHandle {
    client: Client,
    transport: Transport,
    capabilities: CapabilitySet,
}

impl SessionHandle {
    /// The generic automation interface: element lookup, navigation, input,
    /// waits. Page objects and test libraries consume this.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Capability set the session was negotiated with
    pub fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }

    pub fn is_remote(&self) -> bool {
        self.transport.is_remote()
    }

    /// WebDriver endpoint the session runs against
    pub fn endpoint(&self) -> String {
        self.transport.endpoint()
    }

    /// Apply viewport dimensions. Idempotent: re-applying the same
    /// dimensions leaves the window unchanged. Fails if the underlying
    /// session is no longer alive.
    pub async fn resize(&self, width: u32, height: u32) -> DriverResult<()> {
        self.client.set_window_size(width, height).await?;
        Ok(())
    }

    /// Current window dimensions
    pub async fn viewport(&self) -> DriverResult<(u64, u64)> {
        Ok(self.client.get_window_size().await?)
    }

    /// PNG screenshot of the current page
    pub async fn screenshot(&self) -> DriverResult<Vec<u8>> {
        Ok(self.client.screenshot().await?)
    }

    /// End the WebDriver session and shut down a locally spawned
    /// chromedriver.
    pub async fn close(self) -> DriverResult<()> {
        self.client.close().await?;
        if let Transport::Local(mut chromedriver) = self.transport {
            chromedriver.stop()?;
        }
        Ok(())
    }
}
