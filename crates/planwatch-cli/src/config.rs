//! TOML configuration
//!
//! Every section is optional; a missing file argument means all defaults.

use planwatch_core::errors::{ExError, ExErrorKind, PlanWatchError};
use planwatch_core::notify::{NoopNotificationHandler, NotificationHandler};
use planwatch_store::OutboxNotificationHandler;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanWatchConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    /// Required when `general.notification_handler = "outbox"`
    pub outbox: Option<OutboxConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// `noop` or `outbox`
    #[serde(default = "default_notification_handler")]
    pub notification_handler: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            notification_handler: default_notification_handler(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    #[serde(default = "default_messages_db_path")]
    pub messages_db_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            messages_db_path: default_messages_db_path(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutboxConfig {
    pub dir: PathBuf,
    pub subject_prefix: Option<String>,
}

fn default_notification_handler() -> String {
    "noop".to_string()
}

fn default_messages_db_path() -> PathBuf {
    PathBuf::from("planwatch.db")
}

fn config_error(path: &Path, message: String) -> ExError {
    ExError::new(ExErrorKind::InvalidConfig)
        .with_op("load_config")
        .with_entity_id(path.display().to_string())
        .with_message(message)
}

impl PlanWatchConfig {
    /// Parse a TOML configuration file
    ///
    /// # Errors
    ///
    /// `InvalidConfig` when the file cannot be read or is not valid
    /// configuration (including unknown keys).
    pub fn load(path: &Path) -> Result<Self, ExError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| config_error(path, format!("cannot read config file: {}", e)))?;
        toml::from_str(&raw).map_err(|e| config_error(path, e.to_string()))
    }

    /// Parse the file when given, defaults otherwise
    ///
    /// # Errors
    ///
    /// See [`PlanWatchConfig::load`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ExError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Instantiate the configured notification handler
    ///
    /// # Errors
    ///
    /// `InvalidConfig` for an unknown handler name, or for `outbox` without
    /// an `[outbox]` section.
    pub fn build_notification_handler(&self) -> Result<Box<dyn NotificationHandler>, ExError> {
        match self.general.notification_handler.as_str() {
            "noop" => Ok(Box::new(NoopNotificationHandler)),
            "outbox" => {
                let outbox = self.outbox.as_ref().ok_or_else(|| {
                    ExError::new(ExErrorKind::InvalidConfig)
                        .with_op("build_notification_handler")
                        .with_entity_id("outbox")
                        .with_message("notification_handler = \"outbox\" needs an [outbox] section")
                })?;
                let mut handler = OutboxNotificationHandler::new(&outbox.dir);
                if let Some(prefix) = &outbox.subject_prefix {
                    handler = handler.with_subject_prefix(prefix.clone());
                }
                Ok(Box::new(handler))
            }
            other => Err(PlanWatchError::UnknownNotificationHandler {
                name: other.to_string(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: PlanWatchConfig = toml::from_str("").unwrap();
        assert_eq!(config.general.notification_handler, "noop");
        assert_eq!(config.storage.messages_db_path, PathBuf::from("planwatch.db"));
        assert!(config.outbox.is_none());
    }

    #[test]
    fn test_full_config() {
        let config: PlanWatchConfig = toml::from_str(
            r#"
            [general]
            notification_handler = "outbox"

            [storage]
            messages_db_path = "/var/lib/planwatch/inbox.db"

            [outbox]
            dir = "/var/spool/planwatch"
            subject_prefix = "[planwatch] "
            "#,
        )
        .unwrap();

        let handler = config.build_notification_handler().unwrap();
        assert_eq!(handler.name(), "outbox");
        assert_eq!(
            config.storage.messages_db_path,
            PathBuf::from("/var/lib/planwatch/inbox.db")
        );
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result: Result<PlanWatchConfig, _> = toml::from_str(
            r#"
            [general]
            notification_handlr = "noop"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_handler() {
        let config: PlanWatchConfig = toml::from_str(
            r#"
            [general]
            notification_handler = "smtp"
            "#,
        )
        .unwrap();

        let err = config.build_notification_handler().err().unwrap();
        assert_eq!(err.kind(), ExErrorKind::InvalidConfig);
        assert_eq!(err.entity_id(), Some("smtp"));
    }

    #[test]
    fn test_outbox_requires_section() {
        let mut config = PlanWatchConfig::default();
        config.general.notification_handler = "outbox".to_string();

        let err = config.build_notification_handler().err().unwrap();
        assert_eq!(err.kind(), ExErrorKind::InvalidConfig);
    }

    #[test]
    fn test_noop_handler() {
        let handler = PlanWatchConfig::default()
            .build_notification_handler()
            .unwrap();
        assert_eq!(handler.name(), "noop");
    }
}
