//! Toy configuration resource.
//!
//! Tuning values loaded from an INI file. Defaults are safe on their own, so
//! a missing file or a missing key simply keeps them.
//!
//! # Configuration File Format
//!
//! ```ini
//! [viewport]
//! width = 1280
//! height = 720
//! padding = 40
//!
//! [hourglass]
//! count = 5
//! min_duration = 30
//! max_duration = 200
//!
//! [bird]
//! interval = 3
//! flight_time = 3
//!
//! [interaction]
//! radius = 100
//! fill_amount = 10
//!
//! [timeline]
//! duration_minutes = 20
//! rows = 8
//!
//! [simulation]
//! seed = 2025
//! fps = 60
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::error::ToyError;

const DEFAULT_VIEWPORT_WIDTH: f32 = 1280.0;
const DEFAULT_VIEWPORT_HEIGHT: f32 = 720.0;
const DEFAULT_PADDING: f32 = 40.0;
const DEFAULT_HOURGLASS_COUNT: u32 = 5;
const DEFAULT_MIN_FILL: f32 = 30.0;
const DEFAULT_MAX_FILL: f32 = 200.0;
const DEFAULT_BIRD_INTERVAL: f32 = 3.0;
const DEFAULT_FLIGHT_TIME: f32 = 3.0;
const DEFAULT_RADIUS: f32 = 100.0;
const DEFAULT_FILL_AMOUNT: f32 = 10.0;
const DEFAULT_TIMELINE_MINUTES: f32 = 20.0;
const DEFAULT_TIMELINE_ROWS: u32 = 8;
const DEFAULT_SEED: u64 = 2025;
const DEFAULT_FPS: u32 = 60;
const DEFAULT_CONFIG_PATH: &str = "./notime.ini";

/// Toy configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ToyConfig {
    /// Viewport width in pixels.
    pub viewport_width: f32,
    /// Viewport height in pixels.
    pub viewport_height: f32,
    /// Distance from the viewport edges random positions keep.
    pub padding: f32,
    /// Number of hourglasses spawned at setup.
    pub hourglass_count: u32,
    /// Shortest fill duration in seconds.
    pub min_fill_duration: f32,
    /// Longest fill duration in seconds.
    pub max_fill_duration: f32,
    /// Seconds between bird take-off attempts.
    pub bird_interval: f32,
    /// Seconds a flight lasts.
    pub flight_time: f32,
    /// Bird/hourglass interaction radius.
    pub interaction_radius: f32,
    /// Percent added to an hourglass the bird lands near.
    pub fill_amount: f32,
    /// Minutes per timeline lap.
    pub timeline_minutes: f32,
    /// Rows of the serpentine timeline.
    pub timeline_rows: u32,
    /// Seed for the shared random source.
    pub seed: u64,
    /// Simulated frames per second for headless runs.
    pub fps: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for ToyConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ToyConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            padding: DEFAULT_PADDING,
            hourglass_count: DEFAULT_HOURGLASS_COUNT,
            min_fill_duration: DEFAULT_MIN_FILL,
            max_fill_duration: DEFAULT_MAX_FILL,
            bird_interval: DEFAULT_BIRD_INTERVAL,
            flight_time: DEFAULT_FLIGHT_TIME,
            interaction_radius: DEFAULT_RADIUS,
            fill_amount: DEFAULT_FILL_AMOUNT,
            timeline_minutes: DEFAULT_TIMELINE_MINUTES,
            timeline_rows: DEFAULT_TIMELINE_ROWS,
            seed: DEFAULT_SEED,
            fps: DEFAULT_FPS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values. Values that fail to parse
    /// or are out of range are logged and ignored.
    pub fn load_from_file(&mut self) -> Result<(), ToyError> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| ToyError::InvalidConfig(format!("failed to load config file: {}", e)))?;
        self.apply_ini(&config);
        info!(
            "Loaded config from {:?}: {}x{} viewport, {} hourglasses ({}-{} s), radius={}, seed={}",
            self.config_path,
            self.viewport_width,
            self.viewport_height,
            self.hourglass_count,
            self.min_fill_duration,
            self.max_fill_duration,
            self.interaction_radius,
            self.seed
        );
        Ok(())
    }

    /// Parse configuration from an INI string. Used by tests and tools.
    pub fn load_from_str(&mut self, contents: &str) -> Result<(), ToyError> {
        let mut config = Ini::new();
        config
            .read(contents.to_string())
            .map_err(|e| ToyError::InvalidConfig(format!("failed to parse config: {}", e)))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [viewport] section
        if let Some(v) = positive_float(config, "viewport", "width") {
            self.viewport_width = v;
        }
        if let Some(v) = positive_float(config, "viewport", "height") {
            self.viewport_height = v;
        }
        if let Some(v) = non_negative_float(config, "viewport", "padding") {
            self.padding = v;
        }

        // [hourglass] section
        if let Some(v) = uint32(config, "hourglass", "count") {
            self.hourglass_count = v;
        }
        if let Some(v) = positive_float(config, "hourglass", "min_duration") {
            self.min_fill_duration = v;
        }
        if let Some(v) = positive_float(config, "hourglass", "max_duration") {
            self.max_fill_duration = v;
        }
        if self.min_fill_duration > self.max_fill_duration {
            warn!(
                "[hourglass] min_duration {} > max_duration {}, swapping",
                self.min_fill_duration, self.max_fill_duration
            );
            std::mem::swap(&mut self.min_fill_duration, &mut self.max_fill_duration);
        }

        // [bird] section
        if let Some(v) = positive_float(config, "bird", "interval") {
            self.bird_interval = v;
        }
        if let Some(v) = positive_float(config, "bird", "flight_time") {
            self.flight_time = v;
        }

        // [interaction] section
        if let Some(v) = non_negative_float(config, "interaction", "radius") {
            self.interaction_radius = v;
        }
        if let Some(v) = non_negative_float(config, "interaction", "fill_amount") {
            self.fill_amount = v.min(100.0);
        }

        // [timeline] section
        if let Some(v) = positive_float(config, "timeline", "duration_minutes") {
            self.timeline_minutes = v;
        }
        if let Some(v) = uint32(config, "timeline", "rows") {
            if v == 0 {
                warn!("[timeline] rows must be at least 1, keeping {}", self.timeline_rows);
            } else {
                self.timeline_rows = v;
            }
        }

        // [simulation] section
        if let Some(v) = uint(config, "simulation", "seed") {
            self.seed = v;
        }
        if let Some(v) = uint32(config, "simulation", "fps") {
            if v == 0 {
                warn!("[simulation] fps must be at least 1, keeping {}", self.fps);
            } else {
                self.fps = v;
            }
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), ToyError> {
        let mut config = Ini::new();

        config.set("viewport", "width", Some(self.viewport_width.to_string()));
        config.set("viewport", "height", Some(self.viewport_height.to_string()));
        config.set("viewport", "padding", Some(self.padding.to_string()));

        config.set("hourglass", "count", Some(self.hourglass_count.to_string()));
        config.set("hourglass", "min_duration", Some(self.min_fill_duration.to_string()));
        config.set("hourglass", "max_duration", Some(self.max_fill_duration.to_string()));

        config.set("bird", "interval", Some(self.bird_interval.to_string()));
        config.set("bird", "flight_time", Some(self.flight_time.to_string()));

        config.set("interaction", "radius", Some(self.interaction_radius.to_string()));
        config.set("interaction", "fill_amount", Some(self.fill_amount.to_string()));

        config.set("timeline", "duration_minutes", Some(self.timeline_minutes.to_string()));
        config.set("timeline", "rows", Some(self.timeline_rows.to_string()));

        config.set("simulation", "seed", Some(self.seed.to_string()));
        config.set("simulation", "fps", Some(self.fps.to_string()));

        config.write(&self.config_path)?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Fill duration range as `(min, max)`.
    pub fn fill_range(&self) -> (f32, f32) {
        (self.min_fill_duration, self.max_fill_duration)
    }
}

fn float(config: &Ini, section: &str, key: &str) -> Option<f32> {
    match config.getfloat(section, key) {
        Ok(v) => v.map(|v| v as f32).filter(|v| v.is_finite()),
        Err(e) => {
            warn!("[{}] {}: {}", section, key, e);
            None
        }
    }
}

fn positive_float(config: &Ini, section: &str, key: &str) -> Option<f32> {
    let v = float(config, section, key)?;
    if v > 0.0 {
        Some(v)
    } else {
        warn!("[{}] {} must be > 0, got {}", section, key, v);
        None
    }
}

fn non_negative_float(config: &Ini, section: &str, key: &str) -> Option<f32> {
    let v = float(config, section, key)?;
    if v >= 0.0 {
        Some(v)
    } else {
        warn!("[{}] {} must be >= 0, got {}", section, key, v);
        None
    }
}

fn uint(config: &Ini, section: &str, key: &str) -> Option<u64> {
    match config.getuint(section, key) {
        Ok(v) => v,
        Err(e) => {
            warn!("[{}] {}: {}", section, key, e);
            None
        }
    }
}

fn uint32(config: &Ini, section: &str, key: &str) -> Option<u32> {
    let v = uint(config, section, key)?;
    match u32::try_from(v) {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("[{}] {}: {} is too large, ignoring", section, key, v);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = ToyConfig::new();
        assert_eq!(c.hourglass_count, 5);
        assert_eq!(c.fill_range(), (30.0, 200.0));
        assert_eq!(c.interaction_radius, 100.0);
        assert_eq!(c.timeline_rows, 8);
    }

    #[test]
    fn test_load_from_str_overrides_present_keys() {
        let mut c = ToyConfig::new();
        c.load_from_str(
            "[viewport]\nwidth = 800\nheight = 600\n\n[hourglass]\ncount = 3\n\n[interaction]\nradius = 50\n",
        )
        .unwrap();
        assert_eq!(c.viewport_width, 800.0);
        assert_eq!(c.viewport_height, 600.0);
        assert_eq!(c.hourglass_count, 3);
        assert_eq!(c.interaction_radius, 50.0);
        assert_eq!(c.bird_interval, 3.0);
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let mut c = ToyConfig::new();
        c.load_from_str("[bird]\ninterval = -3\nflight_time = fast\n\n[timeline]\nrows = 0\n")
            .unwrap();
        assert_eq!(c.bird_interval, 3.0);
        assert_eq!(c.flight_time, 3.0);
        assert_eq!(c.timeline_rows, 8);
    }

    #[test]
    fn test_out_of_range_counts_keep_defaults() {
        let mut c = ToyConfig::new();
        c.load_from_str(
            "[hourglass]\ncount = 5000000000\n\n[timeline]\nrows = 4294967297\n\n[simulation]\nfps = 4294967296\nseed = 5000000000\n",
        )
        .unwrap();
        assert_eq!(c.hourglass_count, 5);
        assert_eq!(c.timeline_rows, 8);
        assert_eq!(c.fps, 60);
        // the seed is a u64 and keeps the full value
        assert_eq!(c.seed, 5_000_000_000);
    }

    #[test]
    fn test_swapped_fill_range_is_fixed() {
        let mut c = ToyConfig::new();
        c.load_from_str("[hourglass]\nmin_duration = 90\nmax_duration = 20\n")
            .unwrap();
        assert_eq!(c.fill_range(), (20.0, 90.0));
    }

    #[test]
    fn test_fill_amount_capped_at_hundred() {
        let mut c = ToyConfig::new();
        c.load_from_str("[interaction]\nfill_amount = 250\n").unwrap();
        assert_eq!(c.fill_amount, 100.0);
    }

    #[test]
    fn test_missing_file_is_error() {
        let mut c = ToyConfig::with_path("/definitely/not/here/notime.ini");
        assert!(matches!(c.load_from_file(), Err(ToyError::InvalidConfig(_))));
        assert_eq!(c, ToyConfig::with_path("/definitely/not/here/notime.ini"));
    }
}
