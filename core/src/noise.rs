use rand::seq::SliceRandom;

use crate::seed::Seed;

// Salt so the permutation table never shares a stream with the walk / automata RNG
const PERMUTATION_SALT: u64 = 0xDEAD_BEEF_CAFE_BABE;

// Anything that can be sampled as a 2D scalar field
pub trait NoiseSource {
    // Raw sample, roughly in [-1, +1]
    fn get2(&self, x: f64, y: f64) -> f64;

    // Sample remapped to [0, 1]
    fn unit(&self, x: f64, y: f64) -> f64 {
        ((self.get2(x, y) + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}

// 2D Perlin gradient noise with optional octaves
pub struct Perlin2D {
    frequency: f64,   // Controls the "zoom level" of the noise pattern
    persistence: f64, // Controls amplitude scaling per octave
    octaves: usize,
    perm: [u8; 512], // permutation table (256 duplicated)
}

impl Perlin2D {
    pub fn new(seed: Seed, frequency: f64, persistence: f64, octaves: usize) -> Self {
        let mut p: Vec<u8> = (0..=255).collect();
        p.shuffle(&mut seed.derive(PERMUTATION_SALT).rng());
        // Duplicated so corner lookups never need a modulo
        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = p[i & 255];
        }

        Self {
            frequency,
            persistence,
            octaves: octaves.max(1),
            perm,
        }
    }

    // Single octave at unit frequency, what the surface and cave carvers sample
    pub fn single(seed: Seed) -> Self {
        Self::new(seed, 1.0, 0.5, 1)
    }

    // 6t^5 - 15t^4 + 10t^3, zero first and second derivative at both ends
    #[inline]
    fn fade(t: f64) -> f64 {
        t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
    }

    #[inline]
    fn lerp(a: f64, b: f64, t: f64) -> f64 {
        a + t * (b - a)
    }

    // Low 4 bits of the hash pick one of the diagonal / axis gradients
    #[inline]
    fn grad(hash: u8, x: f64, y: f64) -> f64 {
        let h = hash & 0xF;
        let u = if h < 8 { x } else { y };
        let v = if h < 8 { y } else { x };
        let sign_u = if (h & 1) == 0 { u } else { -u };
        let sign_v = if (h & 2) == 0 { v } else { -v };
        sign_u + sign_v
    }

    #[inline]
    fn hash(&self, xi: usize, yi: usize) -> u8 {
        self.perm[self.perm[xi] as usize + yi]
    }

    // Raw single-octave noise, zero on integer lattice points
    fn noise(&self, x: f64, y: f64) -> f64 {
        let x0 = x.floor();
        let y0 = y.floor();
        let xi = (x0 as i64 & 255) as usize;
        let yi = (y0 as i64 & 255) as usize;
        let xf = x - x0;
        let yf = y - y0;
        let u = Self::fade(xf);
        let v = Self::fade(yf);

        let aa = self.hash(xi, yi);
        let ab = self.hash(xi, yi + 1);
        let ba = self.hash(xi + 1, yi);
        let bb = self.hash(xi + 1, yi + 1);

        let x1 = Self::lerp(Self::grad(aa, xf, yf), Self::grad(ba, xf - 1.0, yf), u);
        let x2 = Self::lerp(
            Self::grad(ab, xf, yf - 1.0),
            Self::grad(bb, xf - 1.0, yf - 1.0),
            u,
        );
        Self::lerp(x1, x2, v)
    }
}

impl NoiseSource for Perlin2D {
    // Fractal sum over octaves, normalised by the total amplitude
    fn get2(&self, x: f64, y: f64) -> f64 {
        let mut amplitude = 1.0;
        let mut freq = self.frequency;
        let mut total = 0.0;
        let mut max_amp = 0.0;

        for _ in 0..self.octaves {
            total += self.noise(x * freq, y * freq) * amplitude;
            max_amp += amplitude;
            amplitude *= self.persistence;
            freq *= 2.0;
        }

        total / max_amp
    }
}
