//! Scene file loading.
//!
//! Scene files are JSON documents:
//!
//! ```json
//! {
//!   "camera": { "eye": [0, 0, 3], "front": [0, 0, -1], "up": [0, 1, 0] },
//!   "spheres": [
//!     { "center": [0, 0, 0], "radius": 1.0, "color": [1, 0, 0] }
//!   ]
//! }
//! ```
//!
//! `spheres` may be omitted, which yields an empty scene.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::scene::SceneDescription;

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid scene: {0}")]
    Invalid(String),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load a scene description from a JSON file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<SceneDescription> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let scene = load_scene_from_str(&contents)?;

    log::info!(
        "Loaded {} spheres from {}",
        scene.sphere_count(),
        path.display()
    );

    Ok(scene)
}

/// Parse a scene description from a JSON string.
///
/// Every sphere must have a positive radius. Colors are not clamped.
pub fn load_scene_from_str(contents: &str) -> LoadResult<SceneDescription> {
    let scene: SceneDescription = serde_json::from_str(contents)?;

    for (index, sphere) in scene.spheres.iter().enumerate() {
        if !(sphere.radius > 0.0) {
            return Err(LoadError::Invalid(format!(
                "sphere {} has non-positive radius {}",
                index, sphere.radius
            )));
        }
    }

    if scene.spheres.is_empty() {
        log::warn!("Scene has no spheres, every pixel will be background");
    }

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sphray_math::Vector3;

    /// Helper to get test asset path (works from any working directory)
    fn test_asset_path(relative: &str) -> std::path::PathBuf {
        let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
        let crate_root = std::path::Path::new(&manifest_dir);
        // Go up to workspace root
        let workspace_root = crate_root.parent().unwrap().parent().unwrap();
        workspace_root.join(relative)
    }

    #[test]
    fn test_load_from_str() {
        let json = r#"{
            "camera": { "eye": [0, 0, 3], "front": [0, 0, -1], "up": [0, 1, 0] },
            "spheres": [
                { "center": [0, 0, 0], "radius": 1.0, "color": [1, 0, 0] },
                { "center": [0, 2, 0], "radius": 0.5, "color": [0, 1, 0] }
            ]
        }"#;

        let scene = load_scene_from_str(json).unwrap();
        assert_eq!(scene.sphere_count(), 2);
        assert_eq!(scene.camera.eye(), Vector3::new(0.0, 0.0, 3.0));
        assert_eq!(scene.spheres[0].color(), Vector3::X);
        assert_eq!(scene.spheres[1].radius, 0.5);
    }

    #[test]
    fn test_missing_spheres_is_empty_scene() {
        let json = r#"{ "camera": { "eye": [0, 0, 0], "front": [1, 0, 0], "up": [0, 0, 1] } }"#;
        let scene = load_scene_from_str(json).unwrap();
        assert_eq!(scene.sphere_count(), 0);
    }

    #[test]
    fn test_missing_camera_fails() {
        let json = r#"{ "spheres": [] }"#;
        assert!(matches!(load_scene_from_str(json), Err(LoadError::Json(_))));
    }

    #[test]
    fn test_malformed_vector_fails() {
        let json = r#"{ "camera": { "eye": [0, 0], "front": [1, 0, 0], "up": [0, 0, 1] } }"#;
        assert!(matches!(load_scene_from_str(json), Err(LoadError::Json(_))));
    }

    #[test]
    fn test_non_positive_radius_fails() {
        let json = r#"{
            "camera": { "eye": [0, 0, 3], "front": [0, 0, -1], "up": [0, 1, 0] },
            "spheres": [ { "center": [0, 0, 0], "radius": 0.0, "color": [1, 0, 0] } ]
        }"#;
        assert!(matches!(load_scene_from_str(json), Err(LoadError::Invalid(_))));
    }

    #[test]
    fn test_roundtrip_builtin() {
        let demo = SceneDescription::demo();
        let json = serde_json::to_string(&demo).unwrap();
        assert_eq!(load_scene_from_str(&json).unwrap(), demo);
    }

    #[test]
    fn test_missing_file() {
        let result = load_scene(test_asset_path("assets/does_not_exist.json"));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn test_load_asset_scene() {
        let scene = load_scene(test_asset_path("assets/axes.json")).unwrap();
        assert_eq!(scene, SceneDescription::axes());
    }

    #[test]
    fn test_load_single_sphere_asset() {
        let scene = load_scene(test_asset_path("assets/single_red.json")).unwrap();
        assert_eq!(scene.sphere_count(), 1);
        assert_eq!(scene.spheres[0].radius, 1.0);
        assert_eq!(scene.spheres[0].color(), Vector3::X);
        assert_eq!(scene.camera.front(), -Vector3::Z);
    }
}
