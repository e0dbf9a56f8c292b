use fastnoise_lite::{FastNoiseLite, NoiseType};

/// Fractal noise: octave `j` samples at `1/2^j` frequency with `2^j`
/// amplitude, each octave on its own seed derived from the world seed
/// and a field salt, so independently-salted fields are uncorrelated.
pub struct Octave {
    layers: Vec<FastNoiseLite>,
}

impl Octave {
    pub fn new(seed: i32, octaves: usize, salt: i32) -> Self {
        let layers = (0..octaves)
            .map(|j| {
                let mut n = FastNoiseLite::with_seed(
                    seed.wrapping_add(j as i32).wrapping_add(salt.wrapping_mul(32)),
                );
                n.set_noise_type(Some(NoiseType::OpenSimplex2));
                n.set_frequency(Some(1.0));
                n
            })
            .collect();
        Self { layers }
    }

    pub fn sample(&self, x: f32, z: f32) -> f32 {
        let mut u = 1.0_f32;
        let mut v = 0.0_f32;
        for layer in &self.layers {
            v += layer.get_noise_2d(x / u, z / u) * u;
            u *= 2.0;
        }
        v
    }
}

/// Domain warp: offsets the x input of `n` by a sample of `m`.
pub struct Combined<'a> {
    pub n: &'a Octave,
    pub m: &'a Octave,
}

impl Combined<'_> {
    pub fn sample(&self, x: f32, z: f32) -> f32 {
        self.n.sample(x + self.m.sample(x, z), z)
    }
}
