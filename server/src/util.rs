//! Pure helpers used by the join handler, the game loop and collision checks.

use crate::config::Arena;
use cellarena_shared::Point;
use rand::Rng;

/// Radius of a massless cell
const BASE_RADIUS: f64 = 4.0;
/// Radius gained per unit of sqrt(mass)
const RADIUS_SCALE: f64 = 6.0;

/// Random candidates drawn by [`uniform_position`]
pub const UNIFORM_CANDIDATES: usize = 10;

/// Rendered radius for an entity of the given mass.
///
/// Negative mass yields NaN.
pub fn mass_to_radius(mass: f64) -> f64 {
    BASE_RADIUS + RADIUS_SCALE * mass.sqrt()
}

/// A nickname is valid when it is non-empty and made only of ASCII letters,
/// digits, underscores and spaces.
pub fn valid_nick(nickname: &str) -> bool {
    !nickname.is_empty()
        && nickname
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ' ')
}

/// Logarithm of `value` in `base` via change of base.
pub fn log(value: f64, base: f64) -> f64 {
    value.ln() / base.ln()
}

/// Euclidean distance between two points. Radii are ignored.
pub fn get_distance(p1: &Point, p2: &Point) -> f64 {
    (p1.x - p2.x).hypot(p1.y - p2.y)
}

/// Uniform value in `[from, to)`, or `from` for an empty, inverted or
/// non-finite range.
pub fn random_in_range(rng: &mut impl Rng, from: f64, to: f64) -> f64 {
    let span = to - from;
    if !span.is_finite() || span <= 0.0 {
        return from;
    }
    rng.gen_range(from..to)
}

/// Random spot where a circle of `radius` fits fully inside the arena.
/// On an axis narrower than the circle the coordinate is the arena centre.
/// A NaN radius yields NaN coordinates.
pub fn random_position(rng: &mut impl Rng, arena: Arena, radius: f64) -> Point {
    Point::with_radius(
        axis_position(rng, arena.width, radius),
        axis_position(rng, arena.height, radius),
        radius,
    )
}

fn axis_position(rng: &mut impl Rng, extent: f64, radius: f64) -> f64 {
    if extent < 2.0 * radius {
        return extent / 2.0;
    }
    random_in_range(rng, radius, extent - radius)
}

/// Best-candidate sampling: among [`UNIFORM_CANDIDATES`] random positions,
/// pick the one farthest from its nearest occupied point.
pub fn uniform_position(
    rng: &mut impl Rng,
    arena: Arena,
    occupied: &[Point],
    radius: f64,
) -> Point {
    let mut best = random_position(rng, arena, radius);
    if occupied.is_empty() {
        return best;
    }

    let mut best_distance = nearest_distance(&best, occupied);
    for _ in 1..UNIFORM_CANDIDATES {
        let candidate = random_position(rng, arena, radius);
        let distance = nearest_distance(&candidate, occupied);
        if distance > best_distance {
            best = candidate;
            best_distance = distance;
        }
    }
    best
}

fn nearest_distance(candidate: &Point, occupied: &[Point]) -> f64 {
    occupied
        .iter()
        .map(|p| get_distance(candidate, p))
        .fold(f64::INFINITY, f64::min)
}

/// Cell colours packed as 0xRRGGBB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellColor {
    pub fill: u32,
    pub border: u32,
}

/// Random hue, bright fill, darker border of the same hue.
pub fn random_color(rng: &mut impl Rng) -> CellColor {
    let hue = rng.gen_range(0.0..360.0);
    CellColor {
        fill: hsv_to_rgb(hue, 0.55, 0.95),
        border: hsv_to_rgb(hue, 0.55, 0.75),
    }
}

fn hsv_to_rgb(h: f64, s: f64, v: f64) -> u32 {
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let ri = ((r + m) * 255.0).round() as u32;
    let gi = ((g + m) * 255.0).round() as u32;
    let bi = ((b + m) * 255.0).round() as u32;

    (ri << 16) | (gi << 8) | bi
}
