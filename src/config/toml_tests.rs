//! Tests for TOML configuration parsing.

use crate::message::DefaultPayload;

use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let toml = r#"
            [webhook]
            url = "https://hooks.slack.com/services/T0/B0/XXX"
        "#;

        let config = TomlConfig::parse(toml).unwrap();
        assert_eq!(
            config.webhook.url.as_deref(),
            Some("https://hooks.slack.com/services/T0/B0/XXX")
        );
        assert!(!config.webhook.use_webhook_identity);
        assert!(!config.webhook.link_names);
    }

    #[test]
    fn parse_full_webhook_section() {
        let toml = r##"
            [webhook]
            url = "https://hooks.slack.com/services/T0/B0/XXX"
            channel = "#builds"
            thread_timestamp = "1703039603.183649"
            username = "release-bot"
            icon_url = "https://example.com/bot.png"
            use_webhook_identity = true
            link_names = true
        "##;

        let config = TomlConfig::parse(toml).unwrap();
        let webhook = &config.webhook;

        assert_eq!(webhook.channel.as_deref(), Some("#builds"));
        assert_eq!(
            webhook.thread_timestamp.as_deref(),
            Some("1703039603.183649")
        );
        assert_eq!(webhook.username.as_deref(), Some("release-bot"));
        assert_eq!(webhook.icon_url.as_deref(), Some("https://example.com/bot.png"));
        assert!(webhook.use_webhook_identity);
        assert!(webhook.link_names);
    }

    #[test]
    fn parse_message_section() {
        let toml = r#"
            [message]
            text = "App released!"
            pretext = "Release pipeline"
            success = false
            fail_on_error = false
            lane = "deploy"
            default_payloads = ["git_branch", "last_git_commit_hash"]
        "#;

        let config = TomlConfig::parse(toml).unwrap();
        let message = &config.message;

        assert_eq!(message.text.as_deref(), Some("App released!"));
        assert_eq!(message.pretext.as_deref(), Some("Release pipeline"));
        assert_eq!(message.success, Some(false));
        assert_eq!(message.fail_on_error, Some(false));
        assert_eq!(message.lane.as_deref(), Some("deploy"));
        assert_eq!(
            message.default_payloads,
            Some(vec![
                DefaultPayload::GitBranch,
                DefaultPayload::LastGitCommitHash,
            ])
        );
    }

    #[test]
    fn empty_default_payloads_parses_as_empty_selection() {
        let toml = r"
            [message]
            default_payloads = []
        ";

        let config = TomlConfig::parse(toml).unwrap();
        assert_eq!(config.message.default_payloads, Some(Vec::new()));
    }

    #[test]
    fn parse_payload_table() {
        let toml = r#"
            [message.payload]
            "Build Date" = "2024-01-01"
            "Built by" = "Jenkins"
        "#;

        let config = TomlConfig::parse(toml).unwrap();
        let payload = &config.message.payload;

        assert_eq!(payload.len(), 2);
        assert_eq!(
            payload.get("Built by").and_then(|v| v.as_str()),
            Some("Jenkins")
        );
    }

    #[test]
    fn parse_attachment_properties_table() {
        let toml = r#"
            [message.attachment_properties]
            thumb_url = "https://example.com/thumb.png"

            [[message.attachment_properties.fields]]
            title = "My Field"
            value = "My Value"
            short = true
        "#;

        let config = TomlConfig::parse(toml).unwrap();
        let properties = config.message.attachment_properties.unwrap();

        assert_eq!(properties["thumb_url"], "https://example.com/thumb.png");
        assert_eq!(properties["fields"][0]["title"], "My Field");
        assert_eq!(properties["fields"][0]["short"], true);
    }

    #[test]
    fn empty_config_is_valid() {
        let config = TomlConfig::parse("").unwrap();
        assert!(config.webhook.url.is_none());
        assert!(config.message.text.is_none());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let toml = r#"
            [webhook]
            url = "https://hooks.slack.com/services/T0/B0/XXX"
            retries = 3
        "#;

        assert!(TomlConfig::parse(toml).is_err());
    }

    #[test]
    fn unknown_default_payload_is_rejected() {
        let toml = r#"
            [message]
            default_payloads = ["bogus"]
        "#;

        assert!(TomlConfig::parse(toml).is_err());
    }

    #[test]
    fn invalid_toml_is_rejected() {
        assert!(TomlConfig::parse("[webhook").is_err());
    }
}

mod template {
    use super::*;

    #[test]
    fn template_parses_as_valid_config() {
        let template = default_config_template();
        let config = TomlConfig::parse(&template).unwrap();

        // Everything in the template is commented out
        assert!(config.webhook.url.is_none());
        assert!(config.message.text.is_none());
    }

    #[test]
    fn template_documents_all_sections() {
        let template = default_config_template();

        assert!(template.contains("[webhook]"));
        assert!(template.contains("[message]"));
        assert!(template.contains("SLACK_URL"));
        assert!(template.contains("default_payloads"));
    }
}
