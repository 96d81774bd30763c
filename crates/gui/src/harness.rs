//! Headless test harness for programmatic snowflake manipulation.
//!
//! Drives the same state mutations as the keyboard and controls panel,
//! without a window, so integration tests can exercise the whole
//! rebuild path.

use koch_core::{ConfigError, Segment, SnowflakeSpec};

use crate::state::settings::AppSettings;
use crate::state::{AppState, Overrides};

/// Headless test harness wrapping the application state
pub struct TestHarness {
    pub state: AppState,
}

impl TestHarness {
    /// Create a harness with default settings (no disk access).
    pub fn new() -> Self {
        Self {
            state: AppState::from_settings(AppSettings::default(), Overrides::default()),
        }
    }

    /// Create a harness from an explicit snowflake spec.
    pub fn with_spec(spec: SnowflakeSpec) -> Result<Self, ConfigError> {
        let mut harness = Self::new();
        harness.state.snowflake.set_spec(spec)?;
        Ok(harness)
    }

    // ── User-input mutations (with UI floor guards) ───────────

    pub fn deepen(&mut self) {
        self.state.deepen();
    }

    pub fn flatten(&mut self) {
        self.state.flatten();
    }

    pub fn add_face(&mut self) {
        self.state.add_face();
    }

    pub fn remove_face(&mut self) {
        self.state.remove_face();
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    // ── Direct spec mutations (error paths) ───────────────────

    pub fn set_depth(&mut self, depth: u32) -> Result<(), ConfigError> {
        self.state.snowflake.set_depth(depth)
    }

    pub fn set_face_count(&mut self, faces: u32) -> Result<(), ConfigError> {
        self.state.snowflake.set_face_count(faces)
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn depth(&self) -> u32 {
        self.state.snowflake.spec().depth
    }

    pub fn face_count(&self) -> u32 {
        self.state.snowflake.spec().face_count
    }

    pub fn segments(&self) -> &[Segment] {
        self.state.snowflake.segments()
    }

    pub fn segment_count(&self) -> usize {
        self.state.snowflake.segments().len()
    }

    /// Largest gap between consecutive segment endpoints, including the
    /// closing gap from the last segment back to the first. Zero (up to
    /// floating-point error) for a well-formed closed snowflake.
    pub fn max_closure_gap(&self) -> f64 {
        let segments = self.state.snowflake.segments();
        if segments.is_empty() {
            return 0.0;
        }
        let mut max_gap: f64 = 0.0;
        for pair in segments.windows(2) {
            let dx = pair[0].end.x - pair[1].start.x;
            let dy = pair[0].end.y - pair[1].start.y;
            max_gap = max_gap.max((dx * dx + dy * dy).sqrt());
        }
        let first = &segments[0];
        let last = &segments[segments.len() - 1];
        let dx = last.end.x - first.start.x;
        let dy = last.end.y - first.start.y;
        max_gap.max((dx * dx + dy * dy).sqrt())
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
