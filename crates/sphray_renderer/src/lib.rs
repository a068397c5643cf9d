//! SPHRAY Renderer - CPU primary-ray caster.
//!
//! Casts one ray per pixel from a camera and paints each pixel with the flat
//! color of the nearest sphere it hits. No bounces, no shading.
//!
//! Rows are rendered in parallel with rayon.

mod camera;
mod error;
mod hittable;
mod output;
mod renderer;
mod sphere;

pub use camera::{build_camera, Camera};
pub use error::{RenderError, RenderResult};
pub use hittable::{nearest_hit, Hittable, SphereList};
pub use output::{
    color_symbol, pixel_symbol, save_png, to_rgb_image, to_symbol_grid, write_ppm,
    write_ppm_binary, OutputError,
    BACKGROUND_SYMBOL, DEFAULT_PPM_MAX, DEFAULT_SYMBOL_THRESHOLD,
};
pub use renderer::{
    primary_ray, render, render_pixel, render_sequential, Pixel, PixelGrid, RenderConfig,
};
pub use sphere::Sphere;

/// Re-export the math types used in the public API
pub use sphray_math::{Ray, Vector3};

/// Flat RGB color, conventionally 0-1 per channel.
pub type Color = Vector3;
