//! Flat PNG previews of layer examples.
//!
//! A preview evaluates a descriptor's position, path, and color properties per record and
//! rasterizes the result as dots and polylines in an equirectangular projection of the
//! data's bounding box. It is a sanity check for descriptors, not a renderer.
use std::path::Path;

use anyhow::{bail, Context};
use glam::DVec2;
use image::{Rgb, RgbImage};
use layer_gallery::prelude::*;
use layer_gallery::samples::hex::{RES8_CELL_SIZE_DEG, SF_ROOT_CENTER};
use rand::RngCore;
use tracing::{info, warn};

/// Properties consulted for a record color, in priority order.
const COLOR_PROPS: [&str; 3] = ["getColor", "getFillColor", "getSourceColor"];

/// Image settings for previews.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    pub background: [u8; 3],
    pub default_color: [u8; 3],
    pub point_radius: i32,
    /// Fraction of the data extent added around the bounding box.
    pub padding: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_size: (800, 800),
            background: [26, 26, 26],
            default_color: [235, 235, 235],
            point_radius: 2,
            padding: 0.05,
        }
    }
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32)) -> Self {
        Self {
            image_size,
            ..Default::default()
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_point_radius(mut self, point_radius: i32) -> Self {
        self.point_radius = point_radius;
        self
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.image_size.0 == 0 || self.image_size.1 == 0 {
            bail!("image_size must be > 0 in both dimensions");
        }
        if self.point_radius < 0 {
            bail!("point_radius must be >= 0");
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            bail!("padding must be finite and >= 0");
        }
        Ok(())
    }
}

/// A primitive to rasterize, in longitude/latitude.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Dot { at: DVec2, color: [u8; 3] },
    Polyline { points: Vec<DVec2>, color: [u8; 3] },
}

impl Shape {
    fn points(&self) -> &[DVec2] {
        match self {
            Shape::Dot { at, .. } => std::slice::from_ref(at),
            Shape::Polyline { points, .. } => points,
        }
    }
}

fn to_rgb(value: &Value) -> Option<[u8; 3]> {
    let v = value.as_vector()?;
    if v.len() < 3 {
        return None;
    }
    let channel = |c: f64| c.clamp(0.0, 255.0) as u8;
    Some([channel(v[0]), channel(v[1]), channel(v[2])])
}

fn to_point(value: &Value) -> Option<DVec2> {
    match value.as_vector()? {
        [x, y, ..] => Some(DVec2::new(*x, *y)),
        _ => None,
    }
}

fn constant_number(props: &Props, name: &str) -> Option<f64> {
    props.get(name)?.as_constant()?.as_number()
}

/// Evaluates `props` over `records` and collects the shapes to draw.
pub fn collect_shapes(
    props: &Props,
    records: &[Record],
    default_color: [u8; 3],
    rng: &mut dyn RngCore,
) -> Vec<Shape> {
    // Trips: only the trail window ending at the current time is visible.
    let window = constant_number(props, "currentTime").map(|current| {
        let trail = constant_number(props, "trailLength").unwrap_or(f64::INFINITY);
        (current - trail, current)
    });

    let mut shapes = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        let ctx = AccessorContext::at(i);
        let color = COLOR_PROPS
            .iter()
            .find_map(|name| props.evaluate(name, record, &ctx, rng))
            .and_then(|v| to_rgb(&v))
            .unwrap_or(default_color);

        if let Some(at) = props
            .evaluate("getPosition", record, &ctx, rng)
            .as_ref()
            .and_then(to_point)
        {
            shapes.push(Shape::Dot { at, color });
            continue;
        }

        let source = props.evaluate("getSourcePosition", record, &ctx, rng);
        let target = props.evaluate("getTargetPosition", record, &ctx, rng);
        if let (Some(from), Some(to)) = (
            source.as_ref().and_then(to_point),
            target.as_ref().and_then(to_point),
        ) {
            shapes.push(Shape::Polyline {
                points: vec![from, to],
                color,
            });
            continue;
        }

        match props.evaluate("getPath", record, &ctx, rng) {
            Some(Value::Path(path)) => {
                let points: Vec<DVec2> = path
                    .iter()
                    .filter(|[_, _, t]| window.is_none_or(|(lo, hi)| *t >= lo && *t <= hi))
                    .map(|[x, y, _]| DVec2::new(*x, *y))
                    .collect();
                if points.len() >= 2 {
                    shapes.push(Shape::Polyline { points, color });
                }
                continue;
            }
            Some(_) | None => {}
        }

        if let Some(Value::Cells(cells)) = props.evaluate("getHexagons", record, &ctx, rng) {
            for cell in cells {
                shapes.push(Shape::Dot {
                    at: cell.center(SF_ROOT_CENTER, RES8_CELL_SIZE_DEG),
                    color,
                });
            }
            continue;
        }

        if let Record::HexCell(cell) = record {
            shapes.push(Shape::Dot {
                at: cell.center(SF_ROOT_CENTER, RES8_CELL_SIZE_DEG),
                color,
            });
        }
    }
    shapes
}

struct Projection {
    min: DVec2,
    scale: f64,
    height: f64,
}

impl Projection {
    fn fit(shapes: &[Shape], config: &RenderConfig) -> Option<Self> {
        let mut points = shapes.iter().flat_map(Shape::points);
        let first = *points.next()?;
        let (mut min, mut max) = (first, first);
        for p in points {
            min = min.min(*p);
            max = max.max(*p);
        }
        let extent = (max - min).max(DVec2::splat(1e-6));
        let pad = extent * config.padding;
        let min = min - pad;
        let extent = extent + pad * 2.0;

        let (w, h) = (config.image_size.0 as f64, config.image_size.1 as f64);
        Some(Self {
            min,
            scale: (w / extent.x).min(h / extent.y),
            height: h,
        })
    }

    fn project(&self, p: DVec2) -> (i64, i64) {
        let local = (p - self.min) * self.scale;
        (local.x.round() as i64, (self.height - local.y).round() as i64)
    }
}

fn put(img: &mut RgbImage, x: i64, y: i64, color: [u8; 3]) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, Rgb(color));
    }
}

fn draw_disc(img: &mut RgbImage, cx: i64, cy: i64, radius: i32, color: [u8; 3]) {
    let r = radius as i64;
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                put(img, cx + dx, cy + dy, color);
            }
        }
    }
}

fn draw_segment(img: &mut RgbImage, a: (i64, i64), b: (i64, i64), color: [u8; 3]) {
    let steps = (b.0 - a.0).abs().max((b.1 - a.1).abs()).max(1);
    for s in 0..=steps {
        let t = s as f64 / steps as f64;
        let x = a.0 as f64 + (b.0 - a.0) as f64 * t;
        let y = a.1 as f64 + (b.1 - a.1) as f64 * t;
        put(img, x.round() as i64, y.round() as i64, color);
    }
}

/// Rasterizes `shapes` into a new image.
pub fn render_shapes(shapes: &[Shape], config: &RenderConfig) -> RgbImage {
    let (w, h) = config.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(config.background));
    let Some(projection) = Projection::fit(shapes, config) else {
        return img;
    };

    for shape in shapes {
        match shape {
            Shape::Dot { at, color } => {
                let (x, y) = projection.project(*at);
                draw_disc(&mut img, x, y, config.point_radius, *color);
            }
            Shape::Polyline { points, color } => {
                for pair in points.windows(2) {
                    draw_segment(
                        &mut img,
                        projection.project(pair[0]),
                        projection.project(pair[1]),
                        *color,
                    );
                }
            }
        }
    }
    img
}

/// Resolves the descriptor's data, applies live control values, and writes a PNG preview.
pub fn render_preview_to_png(
    descriptor: &ExampleDescriptor,
    controls: &ControlValues,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
    out: impl AsRef<Path>,
) -> anyhow::Result<usize> {
    config.validate()?;
    let records = descriptor.data.resolve();
    let props = descriptor.props_with_controls(controls);
    let shapes = collect_shapes(&props, &records, config.default_color, rng);
    if shapes.is_empty() {
        warn!(
            "{} has no positional properties to preview; writing an empty image.",
            descriptor.layer
        );
    }

    let img = render_shapes(&shapes, config);
    let out = out.as_ref();
    img.save(out)
        .with_context(|| format!("failed to write {}", out.display()))?;
    info!(
        "Wrote {} | records: {} | shapes: {}.",
        out.display(),
        records.len(),
        shapes.len()
    );
    Ok(shapes.len())
}
