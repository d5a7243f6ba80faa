//! Wheel geometry and spin-resolution math.
//!
//! DESIGN
//! ======
//! Everything here is pure: components feed in random samples and state,
//! and get back angles, SVG path data, and style strings. The winner
//! formula and the rendering convention live side by side because they
//! must agree exactly — the wheel rotates clockwise, slices are laid
//! clockwise from the fixed top pointer, and the slice under the pointer
//! after a rotation `R` is `floor(((360 - R mod 360) mod 360) / (360/N))`.

#[cfg(test)]
#[path = "wheel_math_test.rs"]
mod wheel_math_test;

/// Fixed slice palette; slice `i` gets `WHEEL_COLORS[i % 8]`.
pub const WHEEL_COLORS: [&str; 8] = [
    "#EF476F", // red/pink
    "#FFD166", // yellow
    "#06D6A0", // green
    "#118AB2", // blue
    "#073B4C", // dark blue
    "#9D4EDD", // purple
    "#FF9F1C", // orange
    "#2EC4B6", // teal
];

/// Spin animation length; the completion timeout and the CSS transition
/// both use this value so the wheel stops exactly when the winner fires.
pub const SPIN_DURATION_MS: u32 = 5_000;

pub const SPIN_MIN_ROTATIONS: f64 = 5.0;
pub const SPIN_MAX_ROTATIONS: f64 = 10.0;

pub const WHEEL_VIEWBOX: f64 = 500.0;
pub const WHEEL_OUTER_RADIUS: f64 = 240.0;
pub const WHEEL_INNER_RADIUS: f64 = 20.0;
/// Labels sit at this fraction of the outer radius, on the slice bisector.
pub const LABEL_RADIUS_RATIO: f64 = 0.65;

/// Labels longer than this render truncated with a trailing ellipsis.
pub const LABEL_MAX_CHARS: usize = 15;
/// Above this many segments the label font shrinks to stay legible.
pub const SMALL_LABEL_THRESHOLD: usize = 20;

pub fn normalize_degrees_360(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

pub fn slice_angle_deg(segment_count: usize) -> f64 {
    360.0 / segment_count.max(1) as f64
}

/// Map a cumulative clockwise rotation to the slice index under the fixed
/// top pointer, or `None` for an empty wheel.
///
/// Rotating the wheel clockwise by `R` moves the slice that started at
/// `(360 - R mod 360) mod 360` under the pointer.
pub fn winning_index(rotation_deg: f64, segment_count: usize) -> Option<usize> {
    if segment_count == 0 {
        return None;
    }
    let offset = normalize_degrees_360(rotation_deg);
    let winning_angle = normalize_degrees_360(360.0 - offset);
    let index = (winning_angle / slice_angle_deg(segment_count)).floor() as usize;
    Some(index.min(segment_count - 1))
}

/// Convert two unit random samples into a rotation delta: a whole-spin
/// count in `[SPIN_MIN_ROTATIONS, SPIN_MAX_ROTATIONS)` plus a
/// sub-rotation offset in `[0, 360)` degrees.
pub fn spin_delta_deg(spin_sample: f64, offset_sample: f64) -> f64 {
    let spin = clamp_unit(spin_sample);
    let offset = clamp_unit(offset_sample);
    let whole_spins = (SPIN_MIN_ROTATIONS + spin * (SPIN_MAX_ROTATIONS - SPIN_MIN_ROTATIONS)).floor();
    (whole_spins * 360.0) + (offset * 360.0)
}

fn clamp_unit(sample: f64) -> f64 {
    if sample.is_finite() { sample.clamp(0.0, 1.0) } else { 0.0 }
}

/// Truncate a slice label to `LABEL_MAX_CHARS`, marking overflow.
pub fn truncate_label(text: &str) -> String {
    if text.chars().count() > LABEL_MAX_CHARS {
        let head = text.chars().take(LABEL_MAX_CHARS - 1).collect::<String>();
        format!("{head}...")
    } else {
        text.to_owned()
    }
}

pub fn label_font_px(segment_count: usize) -> f64 {
    if segment_count > SMALL_LABEL_THRESHOLD { 10.0 } else { 14.0 }
}

/// Point on a circle centered at the origin, `angle_deg` measured
/// clockwise from the top (SVG y grows downward).
fn polar_point(angle_deg: f64, radius: f64) -> (f64, f64) {
    let rad = angle_deg.to_radians();
    (rad.sin() * radius, -rad.cos() * radius)
}

/// SVG path for the annular sector of slice `index`, centered at the
/// origin. A single-entry wheel renders as a full ring since a sector
/// whose start and end coincide would collapse.
pub fn slice_path(index: usize, segment_count: usize, outer_radius: f64, inner_radius: f64) -> String {
    if segment_count <= 1 {
        return annulus_path(outer_radius, inner_radius);
    }
    let step = slice_angle_deg(segment_count);
    let start = index as f64 * step;
    let end = start + step;
    let (x0, y0) = polar_point(start, outer_radius);
    let (x1, y1) = polar_point(end, outer_radius);
    let (x2, y2) = polar_point(end, inner_radius);
    let (x3, y3) = polar_point(start, inner_radius);
    let large_arc = i32::from(step > 180.0);
    format!(
        "M {x0:.3} {y0:.3} \
         A {outer_radius:.3} {outer_radius:.3} 0 {large_arc} 1 {x1:.3} {y1:.3} \
         L {x2:.3} {y2:.3} \
         A {inner_radius:.3} {inner_radius:.3} 0 {large_arc} 0 {x3:.3} {y3:.3} Z"
    )
}

/// Full ring: outer circle clockwise, inner circle counterclockwise so
/// the nonzero fill rule leaves a hole.
fn annulus_path(outer_radius: f64, inner_radius: f64) -> String {
    format!(
        "M 0 {:.3} \
         A {o:.3} {o:.3} 0 1 1 0 {:.3} \
         A {o:.3} {o:.3} 0 1 1 0 {:.3} Z \
         M 0 {:.3} \
         A {i:.3} {i:.3} 0 1 0 0 {:.3} \
         A {i:.3} {i:.3} 0 1 0 0 {:.3} Z",
        -outer_radius,
        outer_radius,
        -outer_radius,
        -inner_radius,
        inner_radius,
        -inner_radius,
        o = outer_radius,
        i = inner_radius,
    )
}

/// `translate(..) rotate(..)` placing a label on the slice bisector,
/// rotated to radiate outward.
pub fn label_transform(index: usize, segment_count: usize, outer_radius: f64) -> String {
    let step = slice_angle_deg(segment_count);
    let mid = (index as f64 + 0.5) * step;
    let (x, y) = polar_point(mid, outer_radius * LABEL_RADIUS_RATIO);
    let rotate = mid - 90.0;
    format!("translate({x:.3}, {y:.3}) rotate({rotate:.3})")
}

/// Inline style driving the CSS spin: the rotation is always applied, the
/// eased transition only while a spin is in flight so list edits never
/// animate the wheel.
pub fn wheel_transform_style(rotation_deg: f64, spinning: bool) -> String {
    let transition = if spinning {
        format!("transform {SPIN_DURATION_MS}ms cubic-bezier(0.25, 0.1, 0.25, 1)")
    } else {
        "none".to_owned()
    };
    format!("transform: rotate({rotation_deg}deg); transition: {transition};")
}
