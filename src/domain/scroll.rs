//! Scroll - Scroll Position of the Product Table

use serde::{Deserialize, Serialize};

/// Scroll metrics reported by the table container
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollMetrics {
    /// Offset scrolled from the top
    pub scroll_top: f64,
    /// Total scrollable content height
    pub scroll_height: f64,
    /// Height of the visible area
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    /// Remaining distance to the end of the content
    pub fn distance_to_bottom(&self) -> f64 {
        self.scroll_height - self.scroll_top - self.client_height
    }

    /// Whether the viewport is within `threshold` pixels of the end
    pub fn is_near_bottom(&self, threshold: f64) -> bool {
        self.distance_to_bottom() <= threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_bottom_within_threshold() {
        let metrics = ScrollMetrics::new(1450.0, 2000.0, 500.0);
        assert_eq!(metrics.distance_to_bottom(), 50.0);
        assert!(metrics.is_near_bottom(50.0));
    }

    #[test]
    fn not_near_bottom_at_top() {
        let metrics = ScrollMetrics::new(0.0, 2000.0, 500.0);
        assert!(!metrics.is_near_bottom(50.0));
    }

    #[test]
    fn short_content_is_always_near_bottom() {
        let metrics = ScrollMetrics::new(0.0, 300.0, 500.0);
        assert!(metrics.is_near_bottom(50.0));
    }
}
