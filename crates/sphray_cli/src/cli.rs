use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Built-in scenes, used when no scene file is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Nine small spheres seen at an angle
    Demo,
    /// White origin with red, green and blue unit axes
    Axes,
}

/// Image encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One letter per pixel
    Symbols,
    /// Plain-text PPM
    Ppm,
    /// Binary PPM, one byte per channel (--ppm-max at most 255)
    PpmBinary,
    /// 8-bit PNG (requires --output)
    Png,
}

impl Format {
    /// Guess the format from an output file extension.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("ppm") => Format::Ppm,
            Some("png") => Format::Png,
            _ => Format::Symbols,
        }
    }
}

/// Scene file encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneFormat {
    /// JSON document
    Json,
    /// Whitespace-separated numbers: camera, then `type len data...` records
    Text,
}

impl SceneFormat {
    /// Guess the format from a scene file extension. Anything but `.sce`
    /// and `.txt` is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("sce") | Some("txt") => SceneFormat::Text,
            _ => SceneFormat::Json,
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Debug, Parser)]
#[command(name = "sphray")]
#[command(about = "Casts one ray per pixel through a scene of flat-colored spheres")]
pub struct Args {
    /// Scene file (overrides --preset)
    #[arg(short, long)]
    pub scene: Option<PathBuf>,

    /// Scene file encoding (inferred from the scene extension when omitted)
    #[arg(long, value_enum)]
    pub scene_format: Option<SceneFormat>,

    /// Built-in scene to render when no scene file is given
    #[arg(long, value_enum, default_value = "demo")]
    pub preset: Preset,

    /// Image width in pixels
    #[arg(long, default_value = "100")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "100")]
    pub height: u32,

    /// Horizontal viewport scale
    #[arg(long, default_value = "1.0")]
    pub ratio_x: f64,

    /// Vertical viewport scale, applied on top of the image aspect ratio
    #[arg(long, default_value = "1.0")]
    pub ratio_y: f64,

    /// Output encoding (inferred from the output extension when omitted)
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// Output file path (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Channel value at which a color channel counts as lit in symbol output
    #[arg(long, default_value = "0.5")]
    pub threshold: f64,

    /// Maximum channel value in PPM output
    #[arg(long, default_value = "100")]
    pub ppm_max: u32,

    /// Treat discriminants within this distance of zero as grazing hits
    #[arg(long, default_value = "0.0")]
    pub tangent_tolerance: f64,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub debug_level: LogLevel,
}

impl Args {
    /// Viewport extents: width `ratio_x`, height following the image aspect
    /// ratio scaled by `ratio_y`.
    pub fn viewport(&self) -> (f64, f64) {
        let width = self.ratio_x;
        let height = width * self.height as f64 / self.width as f64 * self.ratio_y;
        (width, height)
    }

    /// Explicit scene encoding, or the one implied by the scene path.
    pub fn scene_format(&self) -> SceneFormat {
        match (self.scene_format, &self.scene) {
            (Some(format), _) => format,
            (None, Some(path)) => SceneFormat::from_path(path),
            (None, None) => SceneFormat::Json,
        }
    }

    /// Explicit format, or the one implied by the output path.
    pub fn output_format(&self) -> Format {
        match (self.format, &self.output) {
            (Some(format), _) => format,
            (None, Some(path)) => Format::from_path(path),
            (None, None) => Format::Symbols,
        }
    }
}
