//! # scatter-circles
//!
//! A scatter-of-circles rendering demo: thousands of depth-colored points
//! rasterized as anti-aliased filled circles into an RGBA pixel buffer,
//! with a resize-aware viewport transform, a drawn-circle counter overlay,
//! and PNG export.
//!
//! The crate is the *model* behind a windowed demo. Window and widget glue
//! stays outside: an external display surface blits
//! [`view::ScatterView::buffer`] and forwards resize and parameter-change
//! events into the view, which runs everything synchronously:
//!
//! 1. **Point field** — depth scalars drive both placement on a perturbed
//!    ellipse and color along a fixed spline gradient
//! 2. **Viewport transform** — affine fit of the logical canvas onto the
//!    physical viewport, optionally preserving aspect ratio
//! 3. **Rasterizer** — anti-aliased scanline fill of circle polygons,
//!    alpha-over composited in field order with depth-window fading
//! 4. **Export** — one-shot PNG serialization of the buffer

// Foundation
pub mod basics;
pub mod color;

// Geometry
pub mod ellipse;
pub mod spline;
pub mod transform;

// Rasterization
pub mod buffer;
pub mod raster;
pub mod text;

// Scene
pub mod export;
pub mod points;
pub mod render;
pub mod view;
