//! Pointer geometry shared by the spotlight, tilt and cursor effects.

/// A target's bounding box in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Region {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Region {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn from_rect(rect: &web_sys::DomRect) -> Self {
        Self::new(rect.left(), rect.top(), rect.width(), rect.height())
    }

    /// Pointer position in pixels from the region's top-left corner.
    pub fn relative(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        (client_x - self.left, client_y - self.top)
    }

    /// Pointer offset from the centre as a fraction of the size, `[-0.5, 0.5]`
    /// while inside the region. A region without area reports the centre.
    pub fn normalized(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        if !(self.width > 0.0 && self.height > 0.0) {
            return (0.0, 0.0);
        }
        let (x, y) = self.relative(client_x, client_y);
        (x / self.width - 0.5, y / self.height - 0.5)
    }
}

/// Linear interpolation from `from` onto `to`, clamped at both ends.
pub fn map_range(value: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    let span = from.1 - from.0;
    if span == 0.0 || value.is_nan() {
        return to.0;
    }
    let t = ((value - from.0) / span).clamp(0.0, 1.0);
    to.0 + (to.1 - to.0) * t
}

pub const MAX_TILT_DEG: f64 = 15.0;

/// Card rotation for a normalized pointer offset: `(rotate_x, rotate_y)` in
/// degrees. Moving down tips the top away, moving right turns the card right.
pub fn tilt(normalized: (f64, f64)) -> (f64, f64) {
    let (x, y) = normalized;
    let rotate_x = map_range(y, (-0.5, 0.5), (MAX_TILT_DEG, -MAX_TILT_DEG));
    let rotate_y = map_range(x, (-0.5, 0.5), (-MAX_TILT_DEG, MAX_TILT_DEG));
    (rotate_x, rotate_y)
}

/// Soft light that follows the pointer across a card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spotlight {
    pub radius_px: u32,
    pub rgba: (u8, u8, u8, f32),
}

impl Spotlight {
    pub const BLUE: Spotlight = Spotlight {
        radius_px: 800,
        rgba: (55, 121, 241, 0.1),
    };
    pub const RED: Spotlight = Spotlight {
        radius_px: 800,
        rgba: (239, 68, 68, 0.1),
    };

    pub fn with_radius(self, radius_px: u32) -> Self {
        Self { radius_px, ..self }
    }

    /// CSS `background` value centred on `(x, y)` pixels within the card.
    pub fn gradient(&self, x: f64, y: f64) -> String {
        let (r, g, b, a) = self.rgba;
        format!(
            "radial-gradient({}px circle at {:.0}px {:.0}px, rgba({}, {}, {}, {}), transparent 40%)",
            self.radius_px, x, y, r, g, b, a
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    pub translate_y: f64,
    pub opacity: f64,
}

/// Hero content drift for the current scroll offset.
pub fn hero_parallax(scroll_y: f64) -> Parallax {
    Parallax {
        translate_y: map_range(scroll_y, (0.0, 1000.0), (0.0, 300.0)),
        opacity: map_range(scroll_y, (0.0, 500.0), (1.0, 0.2)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn relative_and_normalized_positions() {
        let region = Region::new(100.0, 50.0, 400.0, 200.0);
        assert_eq!(region.relative(150.0, 70.0), (50.0, 20.0));
        assert_eq!(region.normalized(300.0, 150.0), (0.0, 0.0));
        assert_eq!(region.normalized(100.0, 50.0), (-0.5, -0.5));
        assert_eq!(region.normalized(500.0, 250.0), (0.5, 0.5));
    }

    #[test]
    fn empty_region_reports_centre() {
        let region = Region::new(10.0, 10.0, 0.0, 100.0);
        assert_eq!(region.normalized(42.0, 42.0), (0.0, 0.0));
    }

    #[test]
    fn map_range_clamps_both_ends() {
        assert_eq!(map_range(-50.0, (0.0, 1000.0), (0.0, 300.0)), 0.0);
        assert_eq!(map_range(500.0, (0.0, 1000.0), (0.0, 300.0)), 150.0);
        assert_eq!(map_range(5000.0, (0.0, 1000.0), (0.0, 300.0)), 300.0);
        assert_eq!(map_range(1.0, (1.0, 1.0), (7.0, 9.0)), 7.0);
    }

    #[test]
    fn tilt_corners() {
        assert_eq!(tilt((0.0, 0.0)), (0.0, 0.0));
        assert_eq!(tilt((0.5, 0.5)), (-15.0, 15.0));
        assert_eq!(tilt((-0.5, -0.5)), (15.0, -15.0));
        assert_eq!(tilt((3.0, -3.0)), (15.0, 15.0));
    }

    #[test]
    fn hero_parallax_limits() {
        assert_eq!(hero_parallax(0.0), Parallax { translate_y: 0.0, opacity: 1.0 });
        let far = hero_parallax(2000.0);
        assert_eq!(far.translate_y, 300.0);
        assert!((far.opacity - 0.2).abs() < 1e-12);
    }

    #[test]
    fn spotlight_gradient_string() {
        assert_eq!(
            Spotlight::BLUE.with_radius(600).gradient(12.4, 80.6),
            "radial-gradient(600px circle at 12px 81px, rgba(55, 121, 241, 0.1), transparent 40%)"
        );
    }
}
