//! Capability-set assembly
//!
//! A [`CapabilitySet`] is an immutable value: every toggle returns a new,
//! fully specified set, and the JSON capability map is only rendered once
//! at session-creation time. Later steps can never silently overwrite
//! earlier ones, so nothing has to be re-applied.

use serde_json::{json, Map, Value};

use crate::config::DriverConfig;

/// Arguments applied to every session. The suite runs against ephemeral,
/// self-signed-certificate environments, so sandboxing and certificate
/// validation are traded away for deterministic automation.
pub const HARDENING_ARGS: [&str; 4] = [
    "--no-sandbox",
    "--disable-web-security",
    "--allow-running-insecure-content",
    "--ignore-certificate-errors",
];

const HEADLESS_ARG: &str = "--headless=new";

/// Capability set for one Chrome session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilitySet {
    browser_name: String,
    args: Vec<String>,
    w3c: bool,
}

impl CapabilitySet {
    /// Base set: Chrome identity plus the unconditional hardening arguments.
    pub fn chrome() -> Self {
        Self {
            browser_name: "chrome".to_string(),
            args: HARDENING_ARGS.iter().map(|s| s.to_string()).collect(),
            w3c: true,
        }
    }

    /// Appends the headless flag. Additive: hardening arguments remain.
    #[must_use]
    pub fn headless(mut self) -> Self {
        if !self.args.iter().any(|a| a == HEADLESS_ARG) {
            self.args.push(HEADLESS_ARG.to_string());
        }
        self
    }

    /// Forces legacy (non-W3C) protocol negotiation. Browser identity and
    /// arguments assembled so far are preserved.
    #[must_use]
    pub fn legacy_protocol(mut self) -> Self {
        self.w3c = false;
        self
    }

    /// Linearizes the configuration toggles into one capability set, in
    /// order: base, headless, legacy-protocol override.
    pub fn from_config(config: &DriverConfig) -> Self {
        let mut caps = Self::chrome();
        if config.headless {
            caps = caps.headless();
        }
        if !config.w3c_protocol {
            caps = caps.legacy_protocol();
        }
        caps
    }

    pub fn browser_name(&self) -> &str {
        &self.browser_name
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn is_headless(&self) -> bool {
        self.args.iter().any(|a| a == HEADLESS_ARG)
    }

    pub fn w3c_disabled(&self) -> bool {
        !self.w3c
    }

    /// Renders the WebDriver capability map sent at session creation.
    pub fn into_map(self) -> Map<String, Value> {
        let mut chrome_options = Map::new();
        chrome_options.insert("args".to_string(), json!(self.args));
        if !self.w3c {
            chrome_options.insert("w3c".to_string(), Value::Bool(false));
        }

        let mut caps = Map::new();
        caps.insert("browserName".to_string(), Value::String(self.browser_name));
        caps.insert("goog:chromeOptions".to_string(), Value::Object(chrome_options));
        caps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DriverConfig {
        DriverConfig::default()
    }

    #[test]
    fn test_hardening_args_always_present() {
        for caps in [
            CapabilitySet::chrome(),
            CapabilitySet::chrome().headless(),
            CapabilitySet::chrome().legacy_protocol(),
            CapabilitySet::chrome().headless().legacy_protocol(),
        ] {
            for arg in HARDENING_ARGS {
                assert!(caps.args().iter().any(|a| a == arg), "missing {}", arg);
            }
        }
    }

    #[test]
    fn test_headless_flag_present_iff_configured() {
        let mut on = config();
        on.headless = true;
        assert!(CapabilitySet::from_config(&on).is_headless());

        let mut off = config();
        off.headless = false;
        assert!(!CapabilitySet::from_config(&off).is_headless());
    }

    #[test]
    fn test_headless_is_idempotent() {
        let caps = CapabilitySet::chrome().headless().headless();
        let count = caps.args().iter().filter(|a| *a == "--headless=new").count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_legacy_override_preserves_identity_and_args() {
        let caps = CapabilitySet::chrome().headless().legacy_protocol();
        assert!(caps.w3c_disabled());
        assert_eq!(caps.browser_name(), "chrome");
        assert!(caps.is_headless());
        for arg in HARDENING_ARGS {
            assert!(caps.args().iter().any(|a| a == arg));
        }
    }

    #[test]
    fn test_legacy_override_in_rendered_map() {
        let map = CapabilitySet::chrome().legacy_protocol().into_map();
        assert_eq!(map["browserName"], "chrome");
        assert_eq!(map["goog:chromeOptions"]["w3c"], false);
    }

    #[test]
    fn test_w3c_key_absent_by_default() {
        let map = CapabilitySet::chrome().into_map();
        assert!(map["goog:chromeOptions"].get("w3c").is_none());
    }

    #[test]
    fn test_rendered_map_shape() {
        let mut cfg = config();
        cfg.headless = true;
        let map = CapabilitySet::from_config(&cfg).into_map();

        let args = map["goog:chromeOptions"]["args"]
            .as_array()
            .expect("args array");
        assert_eq!(args.len(), HARDENING_ARGS.len() + 1);
        assert_eq!(args[0], "--no-sandbox");
        assert_eq!(args[args.len() - 1], "--headless=new");
    }

    #[test]
    fn test_spec_scenario_local_headless_w3c() {
        // headless on, W3C negotiation kept, no remote endpoint
        let mut cfg = config();
        cfg.headless = true;
        cfg.w3c_protocol = true;

        let caps = CapabilitySet::from_config(&cfg);
        assert!(caps.is_headless());
        assert!(!caps.w3c_disabled());
    }

    #[test]
    fn test_spec_scenario_headed_legacy() {
        // headed, legacy negotiation requested
        let mut cfg = config();
        cfg.headless = false;
        cfg.w3c_protocol = false;

        let caps = CapabilitySet::from_config(&cfg);
        assert!(!caps.is_headless());
        assert!(caps.w3c_disabled());
        assert_eq!(caps.browser_name(), "chrome");
    }
}
