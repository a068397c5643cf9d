//! Frame renderer.
//!
//! Casts one primary ray per pixel and resolves it against the sphere list:
//! - No anti-aliasing, one ray through each pixel's corner position
//! - Row 0 of the output is the top of the image
//! - Rows are rendered in parallel; the result equals a sequential render

use std::time::Instant;

use rayon::prelude::*;

use crate::{Camera, Color, Ray, RenderError, RenderResult, SphereList};

/// What a single pixel resolved to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pixel {
    /// No sphere in front of the camera along this pixel's ray.
    Background,
    /// Flat color of the nearest sphere hit.
    Hit(Color),
}

impl Pixel {
    /// The hit color, if any.
    pub fn color(&self) -> Option<Color> {
        match *self {
            Pixel::Background => None,
            Pixel::Hit(color) => Some(color),
        }
    }

    /// Whether the ray missed every sphere.
    pub fn is_background(&self) -> bool {
        matches!(self, Pixel::Background)
    }
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Horizontal extent of the viewport, in units of `forward`'s length
    pub viewport_width: f64,
    /// Vertical extent of the viewport
    pub viewport_height: f64,
    /// Discriminants with `|d| <= tangent_tolerance` count as a single
    /// grazing hit. `0.0` means exact comparison.
    pub tangent_tolerance: f64,
}

impl RenderConfig {
    /// Resolution with the default viewport: width 1, height scaled by
    /// `height / width` so pixels stay square.
    pub fn new(width: u32, height: u32) -> Self {
        let viewport_height = if width == 0 {
            1.0
        } else {
            height as f64 / width as f64
        };

        Self {
            width,
            height,
            viewport_width: 1.0,
            viewport_height,
            tangent_tolerance: 0.0,
        }
    }

    /// Set the viewport extents independently.
    pub fn with_viewport(mut self, viewport_width: f64, viewport_height: f64) -> Self {
        self.viewport_width = viewport_width;
        self.viewport_height = viewport_height;
        self
    }

    /// Set the tangent tolerance.
    pub fn with_tangent_tolerance(mut self, tolerance: f64) -> Self {
        self.tangent_tolerance = tolerance;
        self
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check the configuration before any pixel work.
    pub fn validate(&self) -> RenderResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidResolution {
                width: self.width,
                height: self.height,
            });
        }

        let valid_extent = |v: f64| v > 0.0 && v.is_finite();
        if !valid_extent(self.viewport_width) || !valid_extent(self.viewport_height) {
            return Err(RenderError::InvalidViewport {
                width: self.viewport_width,
                height: self.viewport_height,
            });
        }

        if !(self.tangent_tolerance >= 0.0 && self.tangent_tolerance.is_finite()) {
            return Err(RenderError::InvalidTolerance(self.tangent_tolerance));
        }

        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(100, 100)
    }
}

/// Rendered image: `height` rows of `width` pixels, row 0 at the top.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PixelGrid {
    fn from_rows(width: u32, height: u32, rows: Vec<Vec<Pixel>>) -> Self {
        let pixels: Vec<Pixel> = rows.into_iter().flatten().collect();
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the pixel at column `x`, row `y` (row 0 is the top).
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn get(&self, x: u32, y: u32) -> Pixel {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Iterate over rows, top first.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        self.pixels.chunks(self.width as usize)
    }

    /// Number of pixels that hit a sphere.
    pub fn hit_count(&self) -> usize {
        self.pixels.iter().filter(|p| !p.is_background()).count()
    }
}

/// Build the primary ray for pixel column `i` and vertical index `j`.
///
/// `j` grows with the camera's up vector, so `j = 0` is the bottom row.
pub fn primary_ray(camera: &Camera, i: u32, j: u32, config: &RenderConfig) -> RenderResult<Ray> {
    let (w, h) = (config.width as f64, config.height as f64);

    let vertical = camera.up() * ((j as f64 - h / 2.0) / h * config.viewport_height);
    let horizontal = camera.right() * ((i as f64 - w / 2.0) / w * config.viewport_width);
    let direction = camera.forward() + vertical + horizontal;

    Ray::through(camera.eye(), direction).map_err(|_| RenderError::DegenerateRay { i, j })
}

/// Render a single pixel. `j` is the bottom-up vertical index, see
/// [`primary_ray`]; the pixel lands in grid row `height - 1 - j`.
pub fn render_pixel(
    camera: &Camera,
    scene: &SphereList,
    i: u32,
    j: u32,
    config: &RenderConfig,
) -> RenderResult<Pixel> {
    let ray = primary_ray(camera, i, j, config)?;
    Ok(scene.trace(&ray, config.tangent_tolerance))
}

/// Render grid row `row` (0 = top).
fn render_row(
    camera: &Camera,
    scene: &SphereList,
    row: u32,
    config: &RenderConfig,
) -> RenderResult<Vec<Pixel>> {
    let j = config.height - 1 - row;
    (0..config.width)
        .map(|i| render_pixel(camera, scene, i, j, config))
        .collect()
}

/// Render the entire frame, one rayon task per row.
///
/// Either every pixel is resolved or an error is returned; a partial grid is
/// never produced.
pub fn render(camera: &Camera, scene: &SphereList, config: &RenderConfig) -> RenderResult<PixelGrid> {
    config.validate()?;

    log::info!(
        "Rendering {}x{} with {} spheres",
        config.width,
        config.height,
        scene.len()
    );
    let start = Instant::now();

    let rows = (0..config.height)
        .into_par_iter()
        .map(|row| render_row(camera, scene, row, config))
        .collect::<RenderResult<Vec<_>>>()?;

    let grid = PixelGrid::from_rows(config.width, config.height, rows);
    log::debug!(
        "Rendered {} pixels ({} hits) in {:?}",
        config.pixel_count(),
        grid.hit_count(),
        start.elapsed()
    );

    Ok(grid)
}

/// Single-threaded variant of [`render`]. Produces an identical grid.
pub fn render_sequential(
    camera: &Camera,
    scene: &SphereList,
    config: &RenderConfig,
) -> RenderResult<PixelGrid> {
    config.validate()?;

    let rows = (0..config.height)
        .map(|row| render_row(camera, scene, row, config))
        .collect::<RenderResult<Vec<_>>>()?;

    Ok(PixelGrid::from_rows(config.width, config.height, rows))
}
