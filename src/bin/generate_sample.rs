use serde::Serialize;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// One output row in the fixed two-column layout the viewer loads.
#[derive(Serialize)]
struct SampleRow {
    block_layer: String,
    value: f64,
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // 23 blocks: a non-square count, so the 5×5 grid keeps empty cells.
    let blocks = 23u32;
    let layers = 5u32;
    let side = (blocks as f64).sqrt().ceil();

    let output_path = "test.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    let mut rows = 0usize;
    for block in 1..=blocks {
        let row = f64::from(block - 1).div_euclid(side);
        let col = f64::from(block - 1).rem_euclid(side);
        // Radial gradient across the grid so neighboring blocks get close
        // quantiles, plus per-layer growth and noise.
        let center = (side - 1.0) / 2.0;
        let dist = ((row - center).powi(2) + (col - center).powi(2)).sqrt();

        for layer in 0..layers {
            // A sprinkling of exact zeros exercises the neutral override.
            let value = if rng.next_f64() < 0.08 {
                0.0
            } else {
                let base = 10.0 - dist * 2.0 + f64::from(layer) * 1.5;
                base + rng.next_f64() * 2.0
            };

            writer
                .serialize(SampleRow {
                    block_layer: format!("{block}_{layer}"),
                    value,
                })
                .expect("Failed to write row");
            rows += 1;
        }
    }

    writer.flush().expect("Failed to flush output file");
    println!("Wrote {rows} rows ({blocks} blocks × {layers} layers) to {output_path}");
}
