//! WebDriver session construction for the IDE e2e suite
//!
//! Translates a declarative [`DriverConfig`] into a live browser-automation
//! session:
//!
//! ```text
//! DriverConfig ──► CapabilitySet ──► SessionFactory::create()
//!                                        │
//!                       remote_url set ──┤── otherwise
//!                            │           │
//!                    remote endpoint   spawn chromedriver
//!                            └─────┬─────┘
//!                                  ▼
//!                            SessionHandle (resize, screenshot, client)
//! ```
//!
//! The capability set is an immutable value assembled in a fixed order
//! (hardening flags, headless toggle, legacy-protocol override), so later
//! steps can never silently drop earlier ones. Exactly one handle is
//! produced per factory; `create` consumes the factory.

pub mod capabilities;
pub mod chromedriver;
pub mod config;
pub mod error;
pub mod session;

pub use capabilities::CapabilitySet;
pub use chromedriver::ChromedriverHandle;
pub use config::DriverConfig;
pub use error::{DriverError, DriverResult};
pub use session::{SessionFactory, SessionHandle, Transport};
