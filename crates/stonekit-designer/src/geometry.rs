//! Frame outlines and surface mapping.
//!
//! `outline` turns a frame shape and size into the two closed outlines the
//! renderer draws and hit-tests against: the decorative border (`outer`) and
//! the area it encloses (`inner`). It is pure, so results are memoized by
//! [`GeometryCache`].

use lyon::algorithms::hit_test::hit_test_path;
use lyon::math::{point, Point};
use lyon::path::{FillRule, Path};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use std::collections::HashMap;
use std::f32::consts::TAU;
use std::sync::Arc;

/// Border width added around the inner area.
pub const FRAME_WIDTH: f32 = 0.05;
/// Extrusion depth of oval frames.
pub const FRAME_DEPTH: f32 = 0.02;
/// Segments used for round outlines; fewer shows visible facets.
pub const CIRCLE_SEGMENTS: usize = 64;

const HIT_TOLERANCE: f32 = 0.001;

/// Decorative frame shape
///
/// Parsing never fails: any unrecognised name is a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FrameShape {
    Circle,
    #[default]
    Square,
    Rectangle,
    Oval,
}

impl FrameShape {
    pub fn name(&self) -> &'static str {
        match self {
            FrameShape::Circle => "circle",
            FrameShape::Square => "square",
            FrameShape::Rectangle => "rectangle",
            FrameShape::Oval => "oval",
        }
    }

    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "circle" => FrameShape::Circle,
            "rectangle" => FrameShape::Rectangle,
            "oval" => FrameShape::Oval,
            "square" => FrameShape::Square,
            other => {
                tracing::debug!("Unknown frame shape '{}', using square", other);
                FrameShape::Square
            }
        }
    }
}

impl From<String> for FrameShape {
    fn from(s: String) -> Self {
        FrameShape::parse(&s)
    }
}

impl From<FrameShape> for String {
    fn from(shape: FrameShape) -> Self {
        shape.name().to_string()
    }
}

pub type Ring = Vec<Point>;

/// A set of closed rings filled with the even-odd rule, plus extrusion data.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    pub rings: SmallVec<[Ring; 2]>,
    pub depth: f32,
    pub bevel: f32,
}

impl Outline {
    fn planar(rings: SmallVec<[Ring; 2]>) -> Self {
        Self {
            rings,
            depth: 0.0,
            bevel: 0.0,
        }
    }

    pub fn to_path(&self) -> Path {
        let mut builder = Path::builder();
        for ring in &self.rings {
            let mut points = ring.iter();
            if let Some(first) = points.next() {
                builder.begin(*first);
                for p in points {
                    builder.line_to(*p);
                }
                builder.end(true);
            }
        }
        builder.build()
    }

    /// Even-odd hit test; the hole of an annulus is outside.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        hit_test_path(
            &point(x, y),
            self.to_path().iter(),
            FillRule::EvenOdd,
            HIT_TOLERANCE,
        )
    }

    /// Axis-aligned bounds as `(min_x, min_y, max_x, max_y)`.
    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        self.rings.iter().flatten().fold(
            (f32::MAX, f32::MAX, f32::MIN, f32::MIN),
            |(x1, y1, x2, y2), p| (x1.min(p.x), y1.min(p.y), x2.max(p.x), y2.max(p.y)),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutline {
    pub outer: Outline,
    pub inner: Outline,
}

fn ellipse_ring(rx: f32, ry: f32) -> Ring {
    (0..CIRCLE_SEGMENTS)
        .map(|i| {
            let angle = TAU * i as f32 / CIRCLE_SEGMENTS as f32;
            point(rx * angle.cos(), ry * angle.sin())
        })
        .collect()
}

fn quad_ring(w: f32, h: f32) -> Ring {
    let (hw, hh) = (w / 2.0, h / 2.0);
    vec![
        point(-hw, -hh),
        point(hw, -hh),
        point(hw, hh),
        point(-hw, hh),
    ]
}

/// Outline of a frame centred on the origin. `size` is `[width, height]`;
/// circles use the width as diameter and squares use it as side length.
pub fn outline(shape: FrameShape, size: [f64; 2]) -> FrameOutline {
    let w = size[0] as f32;
    let h = size[1] as f32;
    match shape {
        FrameShape::Circle => {
            let r = w / 2.0;
            FrameOutline {
                outer: Outline::planar(smallvec![
                    ellipse_ring(r + FRAME_WIDTH, r + FRAME_WIDTH),
                    ellipse_ring(r, r),
                ]),
                inner: Outline::planar(smallvec![ellipse_ring(r, r)]),
            }
        }
        FrameShape::Oval => {
            let ring = ellipse_ring(w / 2.0, h / 2.0);
            FrameOutline {
                outer: Outline {
                    rings: smallvec![ring.clone()],
                    depth: FRAME_DEPTH,
                    bevel: FRAME_WIDTH,
                },
                inner: Outline {
                    rings: smallvec![ring],
                    depth: FRAME_DEPTH,
                    bevel: 0.0,
                },
            }
        }
        FrameShape::Square | FrameShape::Rectangle => {
            let (w, h) = if shape == FrameShape::Square {
                (w, w)
            } else {
                (w, h)
            };
            FrameOutline {
                outer: Outline::planar(smallvec![quad_ring(
                    w + 2.0 * FRAME_WIDTH,
                    h + 2.0 * FRAME_WIDTH
                )]),
                inner: Outline::planar(smallvec![quad_ring(w, h)]),
            }
        }
    }
}

/// Memoizes [`outline`] on `(shape, size)`.
#[derive(Debug, Default, Clone)]
pub struct GeometryCache {
    entries: HashMap<(FrameShape, u64, u64), Arc<FrameOutline>>,
}

impl GeometryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outline(&mut self, shape: FrameShape, size: [f64; 2]) -> Arc<FrameOutline> {
        let key = (shape, size[0].to_bits(), size[1].to_bits());
        Arc::clone(
            self.entries
                .entry(key)
                .or_insert_with(|| Arc::new(outline(shape, size))),
        )
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Where an element sits on the stone and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePlacement {
    pub point: Point3<f64>,
    pub normal: Vector3<f64>,
}

/// Map an element position onto the stone surface.
///
/// Flat faces keep the position as is. On a cylindrical body `x` is an arc
/// length around a cylinder of `radius`, so the element wraps the curve.
pub fn surface_point(position: [f64; 3], cylindrical: bool, radius: f64) -> SurfacePlacement {
    let [x, y, z] = position;
    if !cylindrical || radius <= 0.0 {
        return SurfacePlacement {
            point: Point3::new(x, y, z),
            normal: Vector3::z(),
        };
    }
    let theta = x / radius;
    let normal = Vector3::new(theta.sin(), 0.0, theta.cos());
    let on_axis = Point3::new(0.0, y, 0.0);
    SurfacePlacement {
        point: on_axis + normal * radius,
        normal,
    }
}
