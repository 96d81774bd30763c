//! Application state

pub mod settings;

use koch_core::{Snowflake, SnowflakeSpec, MAX_DEPTH, MIN_FACES};

use self::settings::AppSettings;

/// Optional startup overrides parsed from the command line
#[derive(Debug, Default, Clone, Copy)]
pub struct Overrides {
    pub depth: Option<u32>,
    pub faces: Option<u32>,
}

/// Top-level application state: the snowflake plus user settings
pub struct AppState {
    pub snowflake: Snowflake,
    pub settings: AppSettings,
}

impl AppState {
    /// Load settings from disk and build the initial snowflake.
    pub fn new(overrides: Overrides) -> Self {
        Self::from_settings(AppSettings::load(), overrides)
    }

    /// Build state from explicit settings (no disk access); used by the
    /// headless harness.
    pub fn from_settings(settings: AppSettings, overrides: Overrides) -> Self {
        let mut spec = settings.snowflake;
        if let Some(depth) = overrides.depth {
            spec.depth = depth.min(MAX_DEPTH);
        }
        if let Some(faces) = overrides.faces {
            spec.face_count = faces.max(MIN_FACES);
        }

        let snowflake = Snowflake::build(spec).unwrap_or_else(|e| {
            tracing::warn!("Stored snowflake spec is invalid ({e}); using defaults");
            Snowflake::build(SnowflakeSpec::default())
                .expect("default snowflake spec is valid")
        });

        Self {
            snowflake,
            settings,
        }
    }

    // ── User-input mutations. Out-of-range requests are clamped here
    // (intentional UI floor guards); the core still validates. ──

    /// Increase recursion depth by one, capped at MAX_DEPTH
    pub fn deepen(&mut self) {
        let depth = self.snowflake.spec().depth;
        if depth >= MAX_DEPTH {
            return;
        }
        self.apply_depth(depth + 1);
    }

    /// Decrease recursion depth by one, floored at 0
    pub fn flatten(&mut self) {
        let depth = self.snowflake.spec().depth;
        if depth == 0 {
            return;
        }
        self.apply_depth(depth - 1);
    }

    /// Increase polygon face count by one
    pub fn add_face(&mut self) {
        let faces = self.snowflake.spec().face_count;
        self.apply_faces(faces + 1);
    }

    /// Decrease polygon face count by one, floored at MIN_FACES
    pub fn remove_face(&mut self) {
        let faces = self.snowflake.spec().face_count;
        if faces <= MIN_FACES {
            return;
        }
        self.apply_faces(faces - 1);
    }

    /// Change the stroke width of every generated segment
    pub fn set_stroke_width(&mut self, width: f64) {
        let mut spec = *self.snowflake.spec();
        spec.stroke_width = width;
        if let Err(e) = self.snowflake.set_spec(spec) {
            tracing::warn!("Rebuild failed: {e}");
        }
    }

    /// Change the curve color
    pub fn set_color(&mut self, color: koch_core::Rgb) {
        let mut spec = *self.snowflake.spec();
        spec.color = color;
        if let Err(e) = self.snowflake.set_spec(spec) {
            tracing::warn!("Rebuild failed: {e}");
        }
    }

    /// Reset the snowflake to the default spec
    pub fn reset(&mut self) {
        if let Err(e) = self.snowflake.set_spec(SnowflakeSpec::default()) {
            tracing::warn!("Reset failed: {e}");
        }
    }

    fn apply_depth(&mut self, depth: u32) {
        match self.snowflake.set_depth(depth) {
            Ok(()) => tracing::info!(
                "Rebuilt snowflake: depth {depth}, {} segments",
                self.snowflake.segments().len()
            ),
            Err(e) => tracing::warn!("Depth change rejected: {e}"),
        }
    }

    fn apply_faces(&mut self, faces: u32) {
        match self.snowflake.set_face_count(faces) {
            Ok(()) => tracing::info!(
                "Rebuilt snowflake: {faces} faces, {} segments",
                self.snowflake.segments().len()
            ),
            Err(e) => tracing::warn!("Face count change rejected: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::from_settings(AppSettings::default(), Overrides::default())
    }

    #[test]
    fn test_depth_floor_guard() {
        let mut s = state();
        for _ in 0..20 {
            s.flatten();
        }
        assert_eq!(s.snowflake.spec().depth, 0);
    }

    #[test]
    fn test_depth_ceiling_guard() {
        let mut s = state();
        for _ in 0..20 {
            s.deepen();
        }
        assert_eq!(s.snowflake.spec().depth, MAX_DEPTH);
    }

    #[test]
    fn test_face_floor_guard() {
        let mut s = state();
        for _ in 0..10 {
            s.remove_face();
        }
        assert_eq!(s.snowflake.spec().face_count, MIN_FACES);
    }

    #[test]
    fn test_cli_overrides_clamped() {
        let overrides = Overrides {
            depth: Some(99),
            faces: Some(1),
        };
        let s = AppState::from_settings(AppSettings::default(), overrides);
        assert_eq!(s.snowflake.spec().depth, MAX_DEPTH);
        assert_eq!(s.snowflake.spec().face_count, MIN_FACES);
    }
}
