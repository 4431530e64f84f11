use rand::Rng;

/// Source of the bounded random perturbations in the lap model. Kept behind a
/// trait so the session can run on real randomness while tests substitute a
/// deterministic source.
pub trait Noise {
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

pub struct ThreadRngNoise;

impl Noise for ThreadRngNoise {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        rand::thread_rng().gen_range(low..=high)
    }
}

/// Always answers with the midpoint of the requested band, which makes every
/// update formula exactly reproducible.
pub struct FixedNoise;

impl Noise for FixedNoise {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        (low + high) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_rng_noise_stays_in_band() {
        let mut noise = ThreadRngNoise;
        for _ in 0..1000 {
            let sample = noise.uniform(-5.0, 5.0);
            assert!(sample >= -5.0 && sample <= 5.0);
        }
    }

    #[test]
    fn fixed_noise_returns_midpoint() {
        let mut noise = FixedNoise;
        assert_eq!(noise.uniform(1.5, 2.5), 2.0);
        assert_eq!(noise.uniform(-0.5, 0.5), 0.0);
    }
}
