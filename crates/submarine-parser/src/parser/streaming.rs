//! Streaming provider detection.

use tracing::warn;

use crate::model::StreamingProvider;
use crate::registry::STREAMING_PROVIDERS;

/// First provider, in declaration order, whose tag appears in the title.
pub fn parse_streaming_provider(title: &str) -> Option<StreamingProvider> {
    STREAMING_PROVIDERS
        .iter()
        .find_map(|(provider, regex)| match regex.is_match(title) {
            Ok(true) => Some(*provider),
            Ok(false) => None,
            Err(err) => {
                warn!(provider = ?provider, error = %err, "Streaming provider pattern failed");
                None
            }
        })
}
