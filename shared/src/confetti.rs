use std::f64::consts::PI;

use rand::Rng;

pub const CONFETTI_COLORS: [&str; 6] = [
    "#f59e0b", "#10b981", "#3b82f6", "#ec4899", "#8b5cf6", "#ffffff",
];

const GRAVITY: f64 = 0.25;
const DRAG: f64 = 0.99;
const SPIN_DRAG: f64 = 0.97;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub rotation: f64,
    pub spin: f64,
    pub size: f64,
    pub color: &'static str,
    /// Frames left before the particle disappears.
    pub life: u32,
}

impl Particle {
    pub fn opacity(&self, max_life: u32) -> f64 {
        if max_life == 0 {
            return 0.0;
        }
        (self.life as f64 / max_life as f64).clamp(0.0, 1.0)
    }
}

/// Celebration burst fired from a point, stepped once per frame.
#[derive(Debug, Clone)]
pub struct ConfettiBurst {
    particles: Vec<Particle>,
    height: f64,
    max_life: u32,
}

impl ConfettiBurst {
    pub fn new<R: Rng + ?Sized>(
        origin: (f64, f64),
        count: usize,
        height: f64,
        rng: &mut R,
    ) -> Self {
        let max_life = 120;
        let particles = (0..count)
            .map(|_| {
                // Upward cone, roughly 60 degrees either side of vertical
                let angle = -PI / 2.0 + rng.gen_range(-PI / 3.0..PI / 3.0);
                let speed = rng.gen_range(6.0..14.0);
                Particle {
                    x: origin.0,
                    y: origin.1,
                    vx: angle.cos() * speed,
                    vy: angle.sin() * speed,
                    rotation: rng.gen_range(0.0..2.0 * PI),
                    spin: rng.gen_range(-0.3..0.3),
                    size: rng.gen_range(4.0..9.0),
                    color: CONFETTI_COLORS[rng.gen_range(0..CONFETTI_COLORS.len())],
                    life: rng.gen_range(max_life / 2..=max_life),
                }
            })
            .collect();

        Self {
            particles,
            height,
            max_life,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn max_life(&self) -> u32 {
        self.max_life
    }

    pub fn step(&mut self) {
        let height = self.height;
        for p in self.particles.iter_mut() {
            p.vx *= DRAG;
            p.vy = p.vy * DRAG + GRAVITY;
            p.x += p.vx;
            p.y += p.vy;
            p.rotation += p.spin;
            p.spin *= SPIN_DRAG;
            p.life = p.life.saturating_sub(1);
        }
        self.particles.retain(|p| p.life > 0 && p.y < height + p.size);
    }

    pub fn is_finished(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_burst_launches_upwards_then_falls() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut burst = ConfettiBurst::new((200.0, 300.0), 40, 450.0, &mut rng);
        assert_eq!(burst.particles().len(), 40);
        assert!(burst.particles().iter().all(|p| p.vy < 0.0));

        for _ in 0..60 {
            burst.step();
        }
        assert!(burst.particles().iter().all(|p| p.vy > 0.0));
    }

    #[test]
    fn test_burst_finishes() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut burst = ConfettiBurst::new((0.0, 0.0), 25, 100.0, &mut rng);
        let mut frames = 0;
        while !burst.is_finished() {
            burst.step();
            frames += 1;
        }
        assert!(frames <= burst.max_life());
    }

    #[test]
    fn test_opacity_fades_with_life() {
        let mut rng = StdRng::seed_from_u64(1);
        let burst = ConfettiBurst::new((0.0, 0.0), 1, 100.0, &mut rng);
        let p = &burst.particles()[0];
        assert!(p.opacity(burst.max_life()) > 0.4);
        assert_eq!(p.opacity(0), 0.0);
    }
}
