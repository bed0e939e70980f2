//! Per-frame kinematics, state flags and sprite animation for side-scrolling
//! entities, plus the thin SDL2 collaborators that draw and load them.

pub mod app;
pub mod camera;
pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod renderer;
pub mod scene;
pub mod systems;
