//! Whitespace-separated scene files.
//!
//! The older scene format is a flat stream of numbers:
//!
//! ```text
//! ex ey ez   fx fy fz   ux uy uz
//! type len data...
//! type len data...
//! ```
//!
//! The first nine numbers are the camera `eye`, `front` and `up`. Each
//! following record starts with an object type and the number of values
//! after it. Type `0` is a sphere with eight values:
//!
//! ```text
//! 0 8 flags r g b cx cy cz radius
//! ```
//!
//! Records of any other type are skipped. Line breaks carry no meaning.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::loader::{LoadError, LoadResult};
use crate::scene::{CameraDescription, SceneDescription, SphereDescription};

/// Object type tag of a sphere record.
pub const SPHERE_TYPE: u32 = 0;

/// Number of values in a sphere record.
pub const SPHERE_LEN: usize = 8;

// Value offsets inside a sphere record
const COLOR: usize = 1;
const CENTER: usize = 4;
const RADIUS: usize = 7;

/// Token reader over a scene text.
struct SceneTokens<'a> {
    tokens: std::str::SplitWhitespace<'a>,
    position: usize,
}

impl<'a> SceneTokens<'a> {
    fn new(contents: &'a str) -> Self {
        Self {
            tokens: contents.split_whitespace(),
            position: 0,
        }
    }

    fn next_token(&mut self, what: &str) -> LoadResult<Option<&'a str>> {
        let token = self.tokens.next();
        if token.is_some() {
            self.position += 1;
        } else if !what.is_empty() {
            return Err(LoadError::Invalid(format!(
                "unexpected end of scene while reading {}",
                what
            )));
        }
        Ok(token)
    }

    fn number(&mut self, what: &str) -> LoadResult<f64> {
        let token = self.next_token(what)?.unwrap_or_default();
        token.parse().map_err(|_| {
            LoadError::Invalid(format!(
                "token {} ({:?}) in {} is not a number",
                self.position, token, what
            ))
        })
    }

    fn count(&mut self, what: &str) -> LoadResult<u32> {
        let token = self.next_token(what)?.unwrap_or_default();
        token.parse().map_err(|_| {
            LoadError::Invalid(format!(
                "token {} ({:?}) in {} is not a count",
                self.position, token, what
            ))
        })
    }

    fn vector(&mut self, what: &str) -> LoadResult<[f64; 3]> {
        Ok([self.number(what)?, self.number(what)?, self.number(what)?])
    }
}

/// Load a scene description from a whitespace-separated scene file.
pub fn load_scene_text<P: AsRef<Path>>(path: P) -> LoadResult<SceneDescription> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let scene = parse_scene_text(&contents)?;

    log::info!(
        "Loaded {} spheres from {}",
        scene.sphere_count(),
        path.display()
    );

    Ok(scene)
}

/// Parse a whitespace-separated scene.
///
/// A record cut short by the end of the input is an error, as is a sphere
/// record with fewer than eight values or a non-positive radius. Values
/// past the eighth in a sphere record are ignored.
pub fn parse_scene_text(contents: &str) -> LoadResult<SceneDescription> {
    let mut tokens = SceneTokens::new(contents);

    let camera = CameraDescription {
        eye: tokens.vector("camera eye")?,
        front: tokens.vector("camera front")?,
        up: tokens.vector("camera up")?,
    };
    let mut scene = SceneDescription::new(camera);

    let mut record = 0;
    while let Some(type_token) = tokens.next_token("")? {
        let kind: u32 = type_token.parse().map_err(|_| {
            LoadError::Invalid(format!(
                "record {} has invalid type {:?}",
                record, type_token
            ))
        })?;
        let len = tokens.count("record length")? as usize;

        let mut data = Vec::with_capacity(len);
        for _ in 0..len {
            data.push(tokens.number("record data")?);
        }

        if kind == SPHERE_TYPE {
            scene.add_sphere(sphere_record(record, &data)?);
        } else {
            log::debug!("Skipping record {} of unknown type {}", record, kind);
        }
        record += 1;
    }

    if scene.spheres.is_empty() {
        log::warn!("Scene has no spheres, every pixel will be background");
    }

    Ok(scene)
}

fn sphere_record(record: usize, data: &[f64]) -> LoadResult<SphereDescription> {
    if data.len() < SPHERE_LEN {
        return Err(LoadError::Invalid(format!(
            "sphere record {} has {} values, expected {}",
            record,
            data.len(),
            SPHERE_LEN
        )));
    }

    let radius = data[RADIUS];
    if !(radius > 0.0) {
        return Err(LoadError::Invalid(format!(
            "sphere record {} has non-positive radius {}",
            record, radius
        )));
    }

    Ok(SphereDescription {
        center: [data[CENTER], data[CENTER + 1], data[CENTER + 2]],
        radius,
        color: [data[COLOR], data[COLOR + 1], data[COLOR + 2]],
    })
}

/// Format a scene in the whitespace-separated layout.
///
/// The output parses back to the same description. Flags are written as 0.
pub fn scene_to_text(scene: &SceneDescription) -> String {
    let mut text = String::new();
    let vector = |v: &[f64; 3]| format!("{} {} {}", v[0], v[1], v[2]);

    let camera = &scene.camera;
    // Writing to a String cannot fail
    let _ = writeln!(text, "{}", vector(&camera.eye));
    let _ = writeln!(text, "{}", vector(&camera.front));
    let _ = writeln!(text, "{}", vector(&camera.up));
    text.push('\n');

    for sphere in &scene.spheres {
        let _ = writeln!(
            text,
            "{} {} 0 {} {} {}",
            SPHERE_TYPE,
            SPHERE_LEN,
            vector(&sphere.color),
            vector(&sphere.center),
            sphere.radius
        );
    }

    text
}

/// Write a scene file in the whitespace-separated layout.
pub fn save_scene_text<P: AsRef<Path>>(scene: &SceneDescription, path: P) -> LoadResult<()> {
    let path = path.as_ref();
    fs::write(path, scene_to_text(scene))?;
    log::info!("Saved {} spheres to {}", scene.sphere_count(), path.display());
    Ok(())
}
