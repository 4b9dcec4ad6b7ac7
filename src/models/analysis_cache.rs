use crate::models::{
    ContentFingerprint, PolarityScorer, PostLoader, PreparedDataset, SentimentPipeline,
};
use crate::Error;
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

/// Memoizes prepared datasets by the fingerprint of their raw input.
///
/// Nothing is evicted implicitly; callers decide when an entry is stale.
#[derive(Default)]
pub struct AnalysisCache {
    entries: HashMap<ContentFingerprint, Arc<PreparedDataset>>,
}

impl AnalysisCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the prepared dataset for `bytes`, loading and preparing it only
    /// if these exact contents have not been seen before.
    ///
    /// Failed runs are not cached.
    pub fn get_or_prepare<S: PolarityScorer>(
        &mut self,
        bytes: &[u8],
        pipeline: &SentimentPipeline<S>,
    ) -> Result<Arc<PreparedDataset>, Error> {
        let fingerprint = ContentFingerprint::from_bytes(bytes);

        if let Some(dataset) = self.entries.get(&fingerprint) {
            debug!("Analysis cache hit for {}", fingerprint);
            return Ok(Arc::clone(dataset));
        }

        debug!("Analysis cache miss for {}", fingerprint);

        let records = PostLoader::read_posts_from_bytes(bytes)?;
        let dataset = Arc::new(pipeline.prepare(records)?);
        self.entries.insert(fingerprint, Arc::clone(&dataset));

        Ok(dataset)
    }

    pub fn get(&self, fingerprint: &ContentFingerprint) -> Option<Arc<PreparedDataset>> {
        self.entries.get(fingerprint).cloned()
    }

    pub fn contains(&self, fingerprint: &ContentFingerprint) -> bool {
        self.entries.contains_key(fingerprint)
    }

    /// Drops one entry. Returns whether it was present.
    pub fn invalidate(&mut self, fingerprint: &ContentFingerprint) -> bool {
        self.entries.remove(fingerprint).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
