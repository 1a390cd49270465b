//! Tests for the text transforms.

use super::format::{
    MESSAGE_MAX_LEN, convert_links, interpret_newlines, normalize_channel, trim_message,
};

mod trim {
    use super::*;

    #[test]
    fn absent_input_yields_empty_string() {
        assert_eq!(trim_message(None), "");
    }

    #[test]
    fn short_message_passes_through() {
        assert_eq!(trim_message(Some("Deploy ok")), "Deploy ok");
    }

    #[test]
    fn message_at_limit_is_unchanged() {
        let message = "x".repeat(MESSAGE_MAX_LEN);
        assert_eq!(trim_message(Some(&message)), message);
    }

    #[test]
    fn long_message_truncates_to_limit() {
        let message = "x".repeat(MESSAGE_MAX_LEN + 100);
        let trimmed = trim_message(Some(&message));
        assert_eq!(trimmed.chars().count(), MESSAGE_MAX_LEN);
    }

    #[test]
    fn truncation_never_splits_multibyte_characters() {
        // Each snowman is 3 bytes but one character
        let message = "☃".repeat(MESSAGE_MAX_LEN + 10);
        let trimmed = trim_message(Some(&message));

        assert_eq!(trimmed.chars().count(), MESSAGE_MAX_LEN);
        assert!(trimmed.chars().all(|c| c == '☃'));
    }
}

mod links {
    use super::*;

    #[test]
    fn converts_markdown_link_to_slack_syntax() {
        assert_eq!(
            convert_links("[see here](https://x.test)"),
            "<https://x.test|see here>"
        );
    }

    #[test]
    fn converts_multiple_links() {
        assert_eq!(
            convert_links("[a](https://a.test) and [b](https://b.test)"),
            "<https://a.test|a> and <https://b.test|b>"
        );
    }

    #[test]
    fn conversion_is_idempotent() {
        let once = convert_links("[see here](https://x.test)");
        let twice = convert_links(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(convert_links("no links here"), "no links here");
        assert_eq!(
            convert_links("bare https://x.test stays"),
            "bare https://x.test stays"
        );
    }

    #[test]
    fn empty_label_is_preserved() {
        assert_eq!(convert_links("[](https://x.test)"), "<https://x.test|>");
    }
}

mod newlines {
    use super::*;

    #[test]
    fn replaces_literal_backslash_n() {
        assert_eq!(interpret_newlines(Some(r"a\nb")), "a\nb");
    }

    #[test]
    fn replaces_every_occurrence() {
        assert_eq!(interpret_newlines(Some(r"a\nb\nc")), "a\nb\nc");
    }

    #[test]
    fn absent_input_yields_empty_string() {
        assert_eq!(interpret_newlines(None), "");
    }

    #[test]
    fn actual_newlines_are_untouched() {
        assert_eq!(interpret_newlines(Some("a\nb")), "a\nb");
    }
}

mod channel {
    use super::*;

    #[test]
    fn absent_or_empty_yields_none() {
        assert_eq!(normalize_channel(None), None);
        assert_eq!(normalize_channel(Some("")), None);
    }

    #[test]
    fn bare_name_gets_hash_prefix() {
        assert_eq!(normalize_channel(Some("general")).as_deref(), Some("#general"));
    }

    #[test]
    fn hash_prefixed_name_is_unchanged() {
        assert_eq!(normalize_channel(Some("#general")).as_deref(), Some("#general"));
    }

    #[test]
    fn at_prefixed_name_is_unchanged() {
        assert_eq!(normalize_channel(Some("@alice")).as_deref(), Some("@alice"));
    }
}
