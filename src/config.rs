//! Restock scenario configuration for the observer demo.
//!
//! ```toml
//! product = "iPhone"
//! script = [10, 0, 10]
//!
//! [[observers]]
//! channel = "email"
//! identity = "tim.cook@apple.com"
//!
//! [[observers]]
//! channel = "mobile"
//! identity = "Tim Cook"
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::delivery::{Channel, MessageSender};
use crate::error::ConfigError;
use crate::observer::{alert_observer, StockObservable};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ObserverSpec {
    pub channel: Channel,
    pub identity: String,
}

impl ObserverSpec {
    pub fn new(channel: Channel, identity: impl Into<String>) -> Self {
        Self {
            channel,
            identity: identity.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RestockConfig {
    #[serde(default = "default_product")]
    pub product: String,
    pub observers: Vec<ObserverSpec>,
    pub script: Vec<u32>,
}

fn default_product() -> String {
    "iPhone".to_string()
}

impl Default for RestockConfig {
    fn default() -> Self {
        Self {
            product: default_product(),
            observers: vec![
                ObserverSpec::new(Channel::Email, "tim.cook@apple.com"),
                ObserverSpec::new(Channel::Email, "tim.cook@gmail.com"),
                ObserverSpec::new(Channel::Mobile, "Tim Cook"),
            ],
            script: vec![10, 0, 10],
        }
    }
}

impl RestockConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: RestockConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.observers.is_empty() {
            return Err(ConfigError::Invalid("at least one observer is required".into()));
        }
        if self.script.is_empty() {
            return Err(ConfigError::Invalid("script must list at least one stock count".into()));
        }
        if let Some(spec) = self.observers.iter().find(|spec| spec.identity.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "{} observer has an empty identity",
                spec.channel
            )));
        }
        Ok(())
    }

    /// Subject with every configured observer registered, in file order.
    pub fn build_subject(&self, sender: Arc<dyn MessageSender>) -> StockObservable {
        let mut subject = StockObservable::new(&self.product);
        for spec in &self.observers {
            subject.add_observer(alert_observer(spec.channel, &spec.identity, Arc::clone(&sender)));
        }
        subject
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::RecordingSender;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"
product = "Pixel"
script = [3, 0]

[[observers]]
channel = "email"
identity = "a@x.com"

[[observers]]
channel = "mobile"
identity = "user1"
"#;

    #[test]
    fn test_default_is_reference_scenario() {
        let config = RestockConfig::default();
        assert_eq!(config.product, "iPhone");
        assert_eq!(config.script, vec![10, 0, 10]);
        assert_eq!(config.observers.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_sample() {
        let config = RestockConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.product, "Pixel");
        assert_eq!(config.script, vec![3, 0]);
        assert_eq!(config.observers[1], ObserverSpec::new(Channel::Mobile, "user1"));
    }

    #[test]
    fn test_product_defaults() {
        let content = "script = [1]\n[[observers]]\nchannel = \"email\"\nidentity = \"a@x.com\"\n";
        let config = RestockConfig::from_toml_str(content).unwrap();
        assert_eq!(config.product, "iPhone");
    }

    #[test]
    fn test_unknown_channel_rejected() {
        let content = "script = [1]\n[[observers]]\nchannel = \"pigeon\"\nidentity = \"a\"\n";
        assert!(matches!(
            RestockConfig::from_toml_str(content),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_empty_script_rejected() {
        let content = "script = []\n[[observers]]\nchannel = \"email\"\nidentity = \"a@x.com\"\n";
        assert!(matches!(
            RestockConfig::from_toml_str(content),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_blank_identity_rejected() {
        let content = "script = [1]\n[[observers]]\nchannel = \"mobile\"\nidentity = \"  \"\n";
        let err = RestockConfig::from_toml_str(content).unwrap_err();
        assert!(err.to_string().contains("mobile"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", SAMPLE).unwrap();

        let config = RestockConfig::load(file.path()).unwrap();
        assert_eq!(config.product, "Pixel");
    }

    #[test]
    fn test_load_missing_file() {
        let result = RestockConfig::load(Path::new("/nonexistent/restock.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_build_subject_registers_in_order() {
        let sender = Arc::new(RecordingSender::new());
        let config = RestockConfig::from_toml_str(SAMPLE).unwrap();
        let mut subject = config.build_subject(sender.clone());

        assert_eq!(subject.product(), "Pixel");
        assert_eq!(subject.observer_count(), 2);

        subject.set_stock_count(3);
        assert_eq!(sender.recipients(), vec!["a@x.com", "user1"]);
    }
}
