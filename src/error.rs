//! Error types for the kinematics core, its SDL2 collaborators and the
//! tuning file loader.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Invalid entity construction or animation parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KinematicsError {
    /// Width, height and map width must all be non-zero.
    #[error("invalid extents: {width}x{height} entity on a map {map_width} px wide")]
    InvalidExtents {
        width: u32,
        height: u32,
        map_width: u32,
    },

    /// Animation range is empty.
    #[error("invalid frame range: start {start} must be below end {end}")]
    InvalidFrameRange { start: u32, end: u32 },

    /// Animation rate must be finite and positive.
    #[error("invalid animation rate: {0} fps")]
    InvalidFrameRate(f64),
}

/// Failures of the sprite loading and drawing collaborators.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The entity has no sprite to draw.
    #[error("entity has no sprite loaded")]
    SpriteNotLoaded,

    /// The sprite image could not be turned into a texture.
    #[error("sprite {path} unavailable: {reason}")]
    SpriteUnavailable { path: PathBuf, reason: String },

    /// An SDL call failed.
    #[error("sdl: {0}")]
    Sdl(String),
}

/// Failures while reading a tuning file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed tuning file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid animation tuning: {0}")]
    Animation(#[from] KinematicsError),

    #[error("invalid motion tuning: {0}")]
    Motion(String),
}

/// Top-level error for the demo driver.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Kinematics(#[from] KinematicsError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
