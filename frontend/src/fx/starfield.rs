//! Perspective-projected star field.
//!
//! Pure state and maths only. Drawing goes through [`StarSurface`] and frame
//! scheduling lives in [`super::frame_loop`], so everything here runs under
//! plain `cargo test`.

use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarFieldConfig {
    pub population: usize,
    /// Depth units a star moves toward the viewer per frame.
    pub speed: f64,
    pub focal_length: f64,
    pub max_radius: f64,
}

impl Default for StarFieldConfig {
    fn default() -> Self {
        Self {
            population: 800,
            speed: 2.0,
            focal_length: 128.0,
            max_radius: 2.5,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Field depth follows the viewport width. Never zero, so sampling
    /// `(0, depth]` always has room.
    pub fn depth(&self) -> f64 {
        if self.width > 0.0 {
            self.width
        } else {
            1.0
        }
    }
}

/// Position relative to the projection centre; `z` is distance from the
/// viewer and stays in `(0, depth]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub size: f64,
}

impl Star {
    fn sample<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> Self {
        let mut star = Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            size: rng.gen::<f64>() * 2.0,
        };
        star.respawn(rng, viewport);
        star
    }

    fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: Viewport) {
        self.x = (rng.gen::<f64>() - 0.5) * viewport.width;
        self.y = (rng.gen::<f64>() - 0.5) * viewport.height;
        // gen() is in [0, 1), so this lands in (0, depth].
        let depth = viewport.depth();
        self.z = depth - rng.gen::<f64>() * depth;
    }
}

/// One star as it should appear on screen this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub alpha: f64,
}

pub trait StarSurface {
    fn clear(&mut self, viewport: Viewport);
    fn draw(&mut self, sprite: Sprite);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Drawn { visible: usize },
    /// Viewport had no area; nothing moved and nothing was drawn.
    Skipped,
}

/// Projects a star for the given viewport, or `None` when it falls outside.
pub fn project(star: &Star, viewport: Viewport, config: &StarFieldConfig) -> Option<Sprite> {
    let k = config.focal_length / star.z;
    let x = star.x * k + viewport.width / 2.0;
    let y = star.y * k + viewport.height / 2.0;
    if !(0.0..=viewport.width).contains(&x) || !(0.0..=viewport.height).contains(&y) {
        return None;
    }
    let nearness = 1.0 - star.z / viewport.width;
    // f64::max drops a NaN operand, so degenerate input collapses to zero.
    Some(Sprite {
        x,
        y,
        radius: (nearness * config.max_radius).max(0.0),
        alpha: nearness.max(0.0),
    })
}

pub struct StarField<R> {
    config: StarFieldConfig,
    viewport: Viewport,
    stars: Vec<Star>,
    rng: R,
}

impl<R: Rng> StarField<R> {
    pub fn new(config: StarFieldConfig, viewport: Viewport, mut rng: R) -> Self {
        let stars = (0..config.population)
            .map(|_| Star::sample(&mut rng, viewport))
            .collect();
        log::debug!(
            "star field: {} stars in {}x{}",
            config.population,
            viewport.width,
            viewport.height
        );
        Self {
            config,
            viewport,
            stars,
            rng,
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &StarFieldConfig {
        &self.config
    }

    /// Takes effect on later recycles and projections; existing stars keep
    /// their coordinates.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn advance<S: StarSurface + ?Sized>(&mut self, surface: &mut S) -> FrameOutcome {
        let viewport = self.viewport;
        if viewport.is_empty() {
            return FrameOutcome::Skipped;
        }
        surface.clear(viewport);
        let mut visible = 0;
        for star in &mut self.stars {
            star.z -= self.config.speed;
            if star.z <= 0.0 {
                star.respawn(&mut self.rng, viewport);
            }
            if let Some(sprite) = project(star, viewport, &self.config) {
                surface.draw(sprite);
                visible += 1;
            }
        }
        FrameOutcome::Drawn { visible }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Default)]
    struct Recorder {
        clears: usize,
        sprites: Vec<Sprite>,
    }

    impl StarSurface for Recorder {
        fn clear(&mut self, _viewport: Viewport) {
            self.clears += 1;
            self.sprites.clear();
        }

        fn draw(&mut self, sprite: Sprite) {
            self.sprites.push(sprite);
        }
    }

    fn field(seed: u64, width: f64, height: f64) -> StarField<StdRng> {
        StarField::new(
            StarFieldConfig::default(),
            Viewport::new(width, height),
            StdRng::seed_from_u64(seed),
        )
    }

    #[test]
    fn initial_stars_fill_the_viewport_box() {
        let field = field(7, 1920.0, 1080.0);
        assert_eq!(field.stars().len(), 800);
        for star in field.stars() {
            assert!((-960.0..960.0).contains(&star.x), "{star:?}");
            assert!((-540.0..540.0).contains(&star.y), "{star:?}");
            assert!(star.z > 0.0 && star.z <= 1920.0, "{star:?}");
        }
    }

    #[test]
    fn thousand_frames_recycle_every_star() {
        let mut field = field(42, 1920.0, 1080.0);
        let original = field.stars().to_vec();
        let mut surface = Recorder::default();
        for _ in 0..1000 {
            field.advance(&mut surface);
            for star in field.stars() {
                assert!(star.z > 0.0 && star.z <= 1920.0, "{star:?}");
            }
        }
        for (before, after) in original.iter().zip(field.stars()) {
            assert_ne!((before.x, before.y, before.z), (after.x, after.y, after.z));
        }
        assert_eq!(surface.clears, 1000);
    }

    #[test]
    fn zero_sized_viewport_skips_without_touching_stars() {
        let mut field = field(3, 0.0, 1080.0);
        let before = field.stars().to_vec();
        let mut surface = Recorder::default();
        assert_eq!(field.advance(&mut surface), FrameOutcome::Skipped);
        assert_eq!(surface.clears, 0);
        assert_eq!(field.stars(), &before[..]);

        field.resize(Viewport::new(800.0, 600.0));
        assert!(matches!(field.advance(&mut surface), FrameOutcome::Drawn { .. }));
    }

    #[test]
    fn recycle_uses_viewport_at_recycle_time() {
        let mut field = field(11, 1920.0, 1080.0);
        field.resize(Viewport::new(400.0, 300.0));
        let mut surface = Recorder::default();
        // Long enough for every star to have been recycled at least once.
        for _ in 0..1000 {
            field.advance(&mut surface);
        }
        for star in field.stars() {
            assert!((-200.0..200.0).contains(&star.x), "{star:?}");
            assert!((-150.0..150.0).contains(&star.y), "{star:?}");
            assert!(star.z > 0.0 && star.z <= 400.0, "{star:?}");
        }
    }

    #[test]
    fn star_far_behind_a_shrunken_viewport_has_zero_radius() {
        let config = StarFieldConfig::default();
        let star = Star { x: 0.0, y: 0.0, z: 1500.0, size: 1.0 };
        let sprite = project(&star, Viewport::new(1000.0, 800.0), &config).expect("centred star is visible");
        assert_eq!(sprite.radius, 0.0);
        assert_eq!(sprite.alpha, 0.0);
    }

    #[test]
    fn stars_outside_the_viewport_are_not_drawn() {
        let config = StarFieldConfig::default();
        let star = Star { x: 900.0, y: 0.0, z: 10.0, size: 1.0 };
        assert_eq!(project(&star, Viewport::new(1920.0, 1080.0), &config), None);
    }

    proptest! {
        #[test]
        fn radius_is_never_negative_or_nan(
            seed in any::<u64>(),
            width in 0.0f64..4000.0,
            height in 0.0f64..3000.0,
            resized_width in 0.0f64..4000.0,
            frames in 1usize..300,
        ) {
            let mut field = field(seed, width, height);
            let mut surface = Recorder::default();
            for frame in 0..frames {
                if frame == frames / 2 {
                    field.resize(Viewport::new(resized_width, height));
                }
                field.advance(&mut surface);
                for sprite in &surface.sprites {
                    prop_assert!(sprite.radius >= 0.0);
                    prop_assert!(!sprite.radius.is_nan());
                    prop_assert!((0.0..=1.0).contains(&sprite.alpha));
                }
                for star in field.stars() {
                    prop_assert!(star.z > 0.0);
                }
            }
        }
    }
}
