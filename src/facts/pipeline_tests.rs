//! Tests for the production build-facts provider.

use super::pipeline::PipelineFacts;
use super::BuildFacts;

#[test]
fn lane_passes_through_caller_value() {
    let facts = PipelineFacts::new(Some("deploy".to_string()));
    assert_eq!(facts.lane().as_deref(), Some("deploy"));
}

#[test]
fn lane_absent_when_not_supplied() {
    let facts = PipelineFacts::new(None);
    assert_eq!(facts.lane(), None);
}

#[test]
fn default_provider_has_no_lane() {
    let facts = PipelineFacts::default();
    assert_eq!(facts.lane(), None);
}
