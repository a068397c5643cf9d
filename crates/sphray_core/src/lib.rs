//! SPHRAY Core - Scene descriptions for the sphere ray caster.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `CameraDescription`,
//!   `SphereDescription`, exactly as read from a scene file
//! - **Scene loading**: JSON scene files via serde, and the older
//!   whitespace-separated `.sce` files
//! - **Built-in scenes**: `SceneDescription::demo()` and `SceneDescription::axes()`
//!
//! Descriptions are not validated here; the renderer checks radii and the
//! camera basis when it converts them.
//!
//! # Example
//!
//! ```ignore
//! use sphray_core::load_scene;
//!
//! let scene = load_scene("assets/demo.json")?;
//! println!("Loaded {} spheres", scene.sphere_count());
//! ```

pub mod loader;
pub mod scene;
pub mod text;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, LoadError, LoadResult};
pub use scene::{CameraDescription, SceneDescription, SphereDescription};
pub use text::{load_scene_text, parse_scene_text, save_scene_text, scene_to_text};
