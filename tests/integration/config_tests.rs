//! Configuration loading integration tests

#[cfg(test)]
mod tests {
    use crate::common::PAGE_ID;
    use notion_relay::Config;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_yaml(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_example_file_parses() {
        let example = include_str!("../../config/relay.yaml.example");
        let config = Config::from_yaml(example).unwrap();

        assert_eq!(config.server.port, 8787);
        assert_eq!(config.batch.max_payload, 1800);
        assert_eq!(config.notion.version, "2025-09-03");
    }

    #[test]
    fn test_file_then_overrides() {
        let file = write_yaml(&format!(
            "notion:\n  token: from_file\n  page_id: {}\nbatch:\n  max_payload: 50\n",
            PAGE_ID
        ));

        let mut config = tokio_test::block_on(Config::from_file(file.path())).unwrap();
        let env: HashMap<&str, &str> =
            HashMap::from([("NOTION_TOKEN", "from_env"), ("RELAY_PORT", "9000")]);
        config
            .apply_env_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.notion.token, "from_env");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.batch.max_payload, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_token_fails_validation() {
        let file = write_yaml(&format!("notion:\n  page_id: {}\n", PAGE_ID));
        let config = tokio_test::block_on(Config::from_file(file.path())).unwrap();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("token"));
    }

    #[test]
    fn test_yaml_round_trip_keeps_settings() {
        let mut config = Config::default();
        config.batch.report_unknown_actions = true;
        config.logging.json = true;

        let parsed = Config::from_yaml(&config.to_yaml().unwrap()).unwrap();
        assert!(parsed.batch.report_unknown_actions);
        assert!(parsed.logging.json);
    }
}
