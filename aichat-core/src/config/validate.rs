//! Configuration validation rules.

use super::schema::Config;

/// Validate configuration and return aggregated validation errors.
pub fn validate_config(config: &Config) -> crate::Result<()> {
    let mut errors = Vec::new();

    if config.service.app_id.trim().is_empty() {
        errors.push("service.app_id must not be empty".to_string());
    }
    let base_url = config.service.base_url.trim();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        errors.push("service.base_url must start with http:// or https://".to_string());
    }
    if config.storage.auth_file.trim().is_empty() {
        errors.push("storage.auth_file must not be empty".to_string());
    }
    if config.storage.conversation_file.trim().is_empty() {
        errors.push("storage.conversation_file must not be empty".to_string());
    }
    if config.storage.auth_file == config.storage.conversation_file {
        errors.push("storage.auth_file and storage.conversation_file must differ".to_string());
    }
    if !matches!(
        config.logging.format.to_lowercase().as_str(),
        "text" | "json"
    ) {
        errors.push("logging.format must be one of: text, json".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(crate::Error::Validation(errors.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_defaults() {
        validate_config(&Config::default()).unwrap();
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let mut config = Config::default();
        config.service.base_url = "qianfan.baidubce.com".to_string();

        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("service.base_url"));
    }

    #[test]
    fn test_validate_aggregates_errors() {
        let mut config = Config::default();
        config.service.app_id = "  ".to_string();
        config.storage.conversation_file = config.storage.auth_file.clone();

        let err = validate_config(&config).unwrap_err().to_string();
        assert!(err.contains("service.app_id"));
        assert!(err.contains("must differ"));
    }
}
