use super::{Config, ConfigError};

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "Logger name must not be empty".to_string(),
            ));
        }

        // LOG_LEVEL is checked by the bootstrap so a bad value still produces
        // a structured fatal line.
        self.parsed_fields()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Level;
    use serde_json::json;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let config = Config {
            name: "  ".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidConfig(_))));
    }

    #[test]
    fn test_fields_must_be_an_object() {
        let config = Config {
            fields: Some("[1, 2]".to_string()),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidFields(_))));

        let config = Config {
            fields: Some("{not json".to_string()),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_parsed_fields() {
        let config = Config {
            fields: Some(r#"{"request_id": "abc", "attempt": 2}"#.to_string()),
            ..Config::default()
        };
        let fields = config.parsed_fields().unwrap().unwrap();
        assert_eq!(fields["request_id"], json!("abc"));
        assert_eq!(fields["attempt"], json!(2));

        assert!(Config::default().parsed_fields().unwrap().is_none());
    }

    #[test]
    fn test_message_value_respects_json_flag() {
        let plain = Config::default();
        assert_eq!(plain.message_value("42"), json!("42"));

        let json_mode = Config {
            json: true,
            ..Config::default()
        };
        assert_eq!(json_mode.message_value("42"), json!(42));
        assert_eq!(json_mode.message_value(r#"{"k":1}"#), json!({"k": 1}));
        assert_eq!(json_mode.message_value("not json"), json!("not json"));
    }

    #[test]
    fn test_from_args() {
        let config = Config::from_args_and_env([
            "rask-logger",
            "--name",
            "svc",
            "--level",
            "DEBUG",
            "--at",
            "warn",
            "--fields",
            r#"{"a":1}"#,
            "hello",
            "world",
        ])
        .unwrap();

        assert_eq!(config.name, "svc");
        assert_eq!(config.configured_level().as_deref(), Some("DEBUG"));
        assert_eq!(config.at, Level::Warn);
        assert_eq!(config.messages, vec!["hello", "world"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_level_reaches_the_bootstrap_lossily() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let config = Config::from_args_and_env([
            OsStr::new("rask-logger"),
            OsStr::new("--level"),
            OsStr::from_bytes(b"de\xffbug"),
        ])
        .unwrap();

        let level = config.configured_level().unwrap();
        assert_eq!(level, "de\u{FFFD}bug");
        assert!(level.parse::<Level>().is_err());
    }

    #[test]
    fn test_at_accepts_any_case_and_rejects_unknown_levels() {
        let config = Config::from_args_and_env(["rask-logger", "--at", "FATAL"]).unwrap();
        assert_eq!(config.at, Level::Fatal);

        let err = Config::from_args_and_env(["rask-logger", "--at", "info"]).unwrap_err();
        assert!(matches!(err, ConfigError::ArgumentError(_)));
    }
}
