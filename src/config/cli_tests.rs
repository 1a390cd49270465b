//! Tests for CLI argument parsing.

use clap::Parser;

use super::cli::{Cli, Command, DefaultPayloadArg};

mod parsing {
    use super::*;

    #[test]
    fn parse_minimal_args() {
        let cli = Cli::parse_from_iter([
            "slack-notify",
            "--url",
            "https://hooks.slack.com/services/T0/B0/XXX",
            "--message",
            "Deploy ok",
        ]);

        assert_eq!(
            cli.url.as_deref(),
            Some("https://hooks.slack.com/services/T0/B0/XXX")
        );
        assert_eq!(cli.message.as_deref(), Some("Deploy ok"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_delivery_options() {
        let cli = Cli::parse_from_iter([
            "slack-notify",
            "--channel",
            "#builds",
            "--thread-timestamp",
            "1703039603.183649",
            "--username",
            "release-bot",
            "--icon-url",
            "https://example.com/bot.png",
            "--link-names",
        ]);

        assert_eq!(cli.channel.as_deref(), Some("#builds"));
        assert_eq!(cli.thread_timestamp.as_deref(), Some("1703039603.183649"));
        assert_eq!(cli.username.as_deref(), Some("release-bot"));
        assert_eq!(cli.icon_url.as_deref(), Some("https://example.com/bot.png"));
        assert!(cli.link_names);
    }

    #[test]
    fn parse_boolean_value_options() {
        let cli = Cli::parse_from_iter([
            "slack-notify",
            "--success",
            "false",
            "--fail-on-error",
            "false",
        ]);

        assert_eq!(cli.success, Some(false));
        assert_eq!(cli.fail_on_error, Some(false));
    }

    #[test]
    fn boolean_value_options_default_to_unset() {
        let cli = Cli::parse_from_iter(["slack-notify"]);

        assert_eq!(cli.success, None);
        assert_eq!(cli.fail_on_error, None);
        assert!(!cli.use_webhook_identity);
        assert!(!cli.link_names);
    }

    #[test]
    fn parse_default_payloads_list() {
        let cli = Cli::parse_from_iter([
            "slack-notify",
            "--default-payloads",
            "git_branch,git_author",
        ]);

        assert_eq!(
            cli.default_payloads,
            Some(vec![
                DefaultPayloadArg::GitBranch,
                DefaultPayloadArg::GitAuthor,
            ])
        );
    }

    #[test]
    fn parse_all_default_payload_names() {
        let cli = Cli::parse_from_iter([
            "slack-notify",
            "--default-payloads",
            "lane,test_result,git_branch,git_author,last_git_commit,last_git_commit_hash",
        ]);

        assert_eq!(cli.default_payloads.map(|p| p.len()), Some(6));
    }

    #[test]
    fn no_default_payloads_conflicts_with_selection() {
        let result = Cli::try_parse_from([
            "slack-notify",
            "--no-default-payloads",
            "--default-payloads",
            "lane",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn unknown_default_payload_is_rejected() {
        let result = Cli::try_parse_from(["slack-notify", "--default-payloads", "bogus"]);

        assert!(result.is_err());
    }

    #[test]
    fn parse_json_options_as_raw_strings() {
        let cli = Cli::parse_from_iter([
            "slack-notify",
            "--payload",
            r#"{"Build": "1.2.3"}"#,
            "--attachment-properties",
            r#"{"thumb_url": "https://example.com/t.png"}"#,
        ]);

        assert_eq!(cli.payload.as_deref(), Some(r#"{"Build": "1.2.3"}"#));
        assert_eq!(
            cli.attachment_properties.as_deref(),
            Some(r#"{"thumb_url": "https://example.com/t.png"}"#)
        );
    }

    #[test]
    fn parse_init_subcommand() {
        let cli = Cli::parse_from_iter(["slack-notify", "init", "--output", "custom.toml"]);

        assert!(cli.is_init());
        match cli.command {
            Some(Command::Init { output }) => {
                assert_eq!(output, std::path::PathBuf::from("custom.toml"));
            }
            _ => panic!("expected init command"),
        }
    }

    #[test]
    fn init_has_default_output_path() {
        let cli = Cli::parse_from_iter(["slack-notify", "init"]);

        match cli.command {
            Some(Command::Init { output }) => {
                assert_eq!(output, std::path::PathBuf::from("slack-notify.toml"));
            }
            _ => panic!("expected init command"),
        }
    }

    #[test]
    fn parse_run_flags() {
        let cli = Cli::parse_from_iter(["slack-notify", "--dry-run", "--verbose", "--lane", "deploy"]);

        assert!(cli.dry_run);
        assert!(cli.verbose);
        assert_eq!(cli.lane.as_deref(), Some("deploy"));
    }
}

mod conversion {
    use super::*;
    use crate::message::DefaultPayload;

    #[test]
    fn payload_args_map_to_message_payloads() {
        let pairs = [
            (DefaultPayloadArg::Lane, DefaultPayload::Lane),
            (DefaultPayloadArg::TestResult, DefaultPayload::TestResult),
            (DefaultPayloadArg::GitBranch, DefaultPayload::GitBranch),
            (DefaultPayloadArg::GitAuthor, DefaultPayload::GitAuthor),
            (DefaultPayloadArg::LastGitCommit, DefaultPayload::LastGitCommit),
            (
                DefaultPayloadArg::LastGitCommitHash,
                DefaultPayload::LastGitCommitHash,
            ),
        ];

        for (arg, expected) in pairs {
            assert_eq!(DefaultPayload::from(arg), expected);
        }
    }
}
