//! # Station Settings
//!
//! Persistence collaborator: the station settings file and its defaults.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     LABELPRESS_PRINTER=ZTC-GK420t                                      │
//! │     LABELPRESS_DARKNESS=20                                             │
//! │                                                                         │
//! │  2. TOML Settings File                                                 │
//! │     $LABELPRESS_CONFIG when set, else                                  │
//! │     ~/.config/labelpress/station.toml (Linux)                          │
//! │     ~/Library/Application Support/dev.labelpress.labelpress/ (macOS)   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     2in x 1in stock on a 203 dpi GK420t                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Settings File Format
//! ```toml
//! # station.toml
//! [printer]
//! name = "ZTC-GK420t"
//!
//! [label]
//! width_mm = 50.0
//! height_mm = 25.0
//! dpi = 203
//!
//! [quality]
//! darkness = 15
//! speed_ips = 4
//! x_offset_mm = 2.0
//! y_offset_mm = 2.0
//!
//! [content]
//! text = "labelpress.dev"
//! ```
//!
//! The engine itself never reads this file - it only accepts the validated
//! value types produced by [`StationSettings::geometry`] and
//! [`StationSettings::quality`].

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use labelpress_core::{CoreError, CoreResult, LabelGeometry, PrintQuality};

use crate::error::{SpoolError, SpoolResult};

// =============================================================================
// Printer Settings
// =============================================================================

/// Which CUPS queue receives the raw stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrinterSettings {
    /// CUPS queue name (must be configured raw / driver-less).
    #[serde(default = "default_printer_name")]
    pub name: String,
}

fn default_printer_name() -> String {
    "ZTC-GK420t".to_string()
}

impl Default for PrinterSettings {
    fn default() -> Self {
        PrinterSettings {
            name: default_printer_name(),
        }
    }
}

// =============================================================================
// Label Settings
// =============================================================================

/// Physical label stock as entered by the operator, in millimeters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LabelSettings {
    #[serde(default = "default_width_mm")]
    pub width_mm: f64,

    #[serde(default = "default_height_mm")]
    pub height_mm: f64,

    #[serde(default = "default_dpi")]
    pub dpi: u32,
}

fn default_width_mm() -> f64 {
    50.0
}

fn default_height_mm() -> f64 {
    25.0
}

fn default_dpi() -> u32 {
    203
}

impl Default for LabelSettings {
    fn default() -> Self {
        LabelSettings {
            width_mm: default_width_mm(),
            height_mm: default_height_mm(),
            dpi: default_dpi(),
        }
    }
}

// =============================================================================
// Quality Settings
// =============================================================================

/// Darkness, speed and offsets as entered by the operator.
///
/// Offsets default to 2mm on both axes - the classic remedy for left-edge
/// cold-start fade on the GK420t.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QualitySettings {
    #[serde(default = "default_darkness")]
    pub darkness: u8,

    #[serde(default = "default_speed_ips")]
    pub speed_ips: u8,

    #[serde(default = "default_offset_mm")]
    pub x_offset_mm: f64,

    #[serde(default = "default_offset_mm")]
    pub y_offset_mm: f64,
}

fn default_darkness() -> u8 {
    15
}

fn default_speed_ips() -> u8 {
    4
}

fn default_offset_mm() -> f64 {
    2.0
}

impl Default for QualitySettings {
    fn default() -> Self {
        QualitySettings {
            darkness: default_darkness(),
            speed_ips: default_speed_ips(),
            x_offset_mm: default_offset_mm(),
            y_offset_mm: default_offset_mm(),
        }
    }
}

// =============================================================================
// Content Settings
// =============================================================================

/// The default payload for standard-content jobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSettings {
    #[serde(default = "default_text")]
    pub text: String,
}

fn default_text() -> String {
    "labelpress.dev".to_string()
}

impl Default for ContentSettings {
    fn default() -> Self {
        ContentSettings {
            text: default_text(),
        }
    }
}

// =============================================================================
// Station Settings
// =============================================================================

/// Complete station settings.
///
/// Lifecycle contract with the engine: load at start, save at exit; the
/// engine only ever sees the validated value types derived from this record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StationSettings {
    /// CUPS queue selection.
    #[serde(default)]
    pub printer: PrinterSettings,

    /// Label stock geometry.
    #[serde(default)]
    pub label: LabelSettings,

    /// Darkness / speed / offsets.
    #[serde(default)]
    pub quality: QualitySettings,

    /// Default payload text.
    #[serde(default)]
    pub content: ContentSettings,
}

impl StationSettings {
    /// Loads settings from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Settings file (explicit path, else `$LABELPRESS_CONFIG`, else
    ///    the platform station.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> SpoolResult<Self> {
        let mut settings = Self::default();

        if let Some(path) = config_path
            .or_else(Self::config_path_from_env)
            .or_else(Self::default_config_path)
        {
            if path.exists() {
                info!(?path, "Loading station settings from file");
                let contents = std::fs::read_to_string(&path)
                    .map_err(|e| SpoolError::ConfigLoadFailed(e.to_string()))?;
                settings = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Settings file not found, using defaults");
            }
        }

        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Loads settings or returns defaults if the load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load station settings: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves settings to file (the save-at-exit half of the contract).
    pub fn save(&self, config_path: Option<PathBuf>) -> SpoolResult<()> {
        let path = config_path
            .or_else(Self::config_path_from_env)
            .or_else(Self::default_config_path)
            .ok_or_else(|| SpoolError::ConfigSaveFailed("No settings path available".into()))?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| SpoolError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| SpoolError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Station settings saved");
        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(name) = std::env::var("LABELPRESS_PRINTER") {
            debug!(printer = %name, "Overriding printer name from environment");
            self.printer.name = name;
        }

        if let Ok(darkness) = std::env::var("LABELPRESS_DARKNESS") {
            if let Ok(d) = darkness.parse::<u8>() {
                self.quality.darkness = d;
            }
        }

        if let Ok(speed) = std::env::var("LABELPRESS_SPEED") {
            if let Ok(s) = speed.parse::<u8>() {
                self.quality.speed_ips = s;
            }
        }
    }

    /// Returns the settings file path named by `LABELPRESS_CONFIG`, if set.
    fn config_path_from_env() -> Option<PathBuf> {
        std::env::var_os("LABELPRESS_CONFIG").map(PathBuf::from)
    }

    /// Returns the default settings file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "labelpress", "labelpress").map(|dirs| {
            let config_dir = dirs.config_dir();
            config_dir.join("station.toml")
        })
    }

    // =========================================================================
    // Value-Type Boundary
    // =========================================================================
    // The engine re-validates everything; these accessors are where a stored
    // settings record either becomes a printable value or gets refused.

    /// Builds the validated [`LabelGeometry`] this record describes.
    pub fn geometry(&self) -> CoreResult<LabelGeometry> {
        LabelGeometry::new(self.label.width_mm, self.label.height_mm, self.label.dpi)
    }

    /// Builds the validated [`PrintQuality`] this record describes.
    pub fn quality(&self) -> CoreResult<PrintQuality> {
        PrintQuality::new(
            self.quality.darkness,
            self.quality.speed_ips,
            self.quality.x_offset_mm,
            self.quality.y_offset_mm,
        )
        .map_err(CoreError::from)
    }

    /// Validates the whole record by constructing both value types.
    pub fn validate(&self) -> SpoolResult<()> {
        self.geometry()?;
        self.quality()?;
        Ok(())
    }
}
