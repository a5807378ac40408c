//! Embedding constants for the default host page layout.

/// Canvas id for the free-floating backdrop layer (lowest z-order).
pub const DRIFT_CANVAS_ID: &str = "dotfield-drift";

/// Canvas id for the pointer-reactive orbit layer (stacked above).
pub const ORBIT_CANVAS_ID: &str = "dotfield-orbit";
