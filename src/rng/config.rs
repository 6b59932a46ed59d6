//! Factory configuration.
//!
//! [`FactoryConfig`] controls which generator sources the factory tries,
//! and in which order, plus the inputs of the entropy collector used to
//! seed the insecure sibling and the last-resort fallback.

use crate::error::{RandomError, Result};
use crate::rng::SourceKind;
use crate::rng::entropy::EntropyCollector;

/// Configuration for [`create_random_with`](crate::rng::create_random_with).
#[derive(Clone, Debug)]
pub struct FactoryConfig {
    /// Sources to try, first to last. The first one that constructs wins.
    /// If all fail, an entropy-seeded Alea generator is used.
    /// [`SourceKind::Custom`] is rejected; wrap custom generators with
    /// [`Random::compose`](crate::Random::compose) instead.
    pub sources: Vec<SourceKind>,
    /// Display `(height, width)` for the entropy collector. `None` probes
    /// the terminal.
    pub display: Option<(u32, u32)>,
    /// Client identifier for the entropy collector. `None` uses a string
    /// built from the crate name, platform and process id.
    pub client_id: Option<String>,
}

impl FactoryConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.sources.is_empty() {
            return Err(RandomError::NoSources);
        }

        if self.sources.contains(&SourceKind::Custom) {
            return Err(RandomError::InvalidSource {
                kind: SourceKind::Custom,
            });
        }

        Ok(())
    }

    pub(crate) fn collector(&self) -> EntropyCollector {
        let mut collector = EntropyCollector::default();

        if let Some((height, width)) = self.display {
            collector = collector.with_display(height, width);
        }

        if let Some(client_id) = &self.client_id {
            collector = collector.with_client_id(client_id.clone());
        }

        collector
    }
}

impl Default for FactoryConfig {
    /// Operating system first, then the host's secure values.
    fn default() -> Self {
        Self {
            sources: vec![SourceKind::Os, SourceKind::Host],
            display: None,
            client_id: None,
        }
    }
}
