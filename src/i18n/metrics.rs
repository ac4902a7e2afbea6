//! Translation metrics.
//!
//! Every [`MessageCatalog`](crate::i18n::MessageCatalog) owns one
//! `TranslationMetrics`. Translators record how each message was resolved:
//! directly in the requested locale, through the baseline fallback, or not
//! at all (rendered as the literal key).

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Resolution counters for one catalog.
#[derive(Debug, Default)]
pub struct TranslationMetrics {
    /// Template found in the requested locale
    hits: AtomicUsize,

    /// Template found only in the baseline locale
    fallbacks: AtomicUsize,

    /// No template anywhere; the key was rendered literally
    misses: AtomicUsize,
}

impl TranslationMetrics {
    /// Create zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a direct hit in the requested locale.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a baseline fallback.
    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a literal-key degradation.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.hits();
        let fallbacks = self.fallbacks();
        let misses = self.misses();
        let translations = hits + fallbacks + misses;
        let hit_rate = if translations > 0 {
            (hits as f64 / translations as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            translations,
            hits,
            fallbacks,
            misses,
            hit_rate,
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.fallbacks.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}

/// Snapshot of translation statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    /// Total translations performed
    pub translations: usize,

    /// Resolved in the requested locale
    pub hits: usize,

    /// Resolved through the baseline locale
    pub fallbacks: usize,

    /// Rendered as the literal key
    pub misses: usize,

    /// Direct hit rate as a percentage (0-100)
    pub hit_rate: f64,
}
