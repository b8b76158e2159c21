use anyhow::{Context, Result};

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

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next_u64() % (hi - lo + 1)
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.range(0, items.len() as u64 - 1) as usize]
    }
}

/// Rough charge model: grows with age, jumps for smokers, more so when obese.
fn charges_for(
    age: u64,
    bmi: f64,
    children: u64,
    smoker: bool,
    region: &str,
    rng: &mut SimpleRng,
) -> f64 {
    let mut base = 250.0 * age as f64 + 400.0 * children as f64 + 1500.0;
    if smoker {
        base += 20_000.0;
        if bmi >= 30.0 {
            base += 15_000.0;
        }
    }
    if region == "southeast" {
        base *= 1.08;
    }
    (base + rng.gauss(0.0, 2500.0)).max(1100.0)
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let regions = ["northeast", "northwest", "southeast", "southwest"];
    let sexes = ["female", "male"];

    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "insurance.csv".to_string());
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record(["age", "sex", "bmi", "children", "smoker", "region", "charges"])?;

    let rows = 1338;
    for _ in 0..rows {
        let age = rng.range(18, 64);
        let sex = rng.pick(&sexes);
        let bmi = rng.gauss(30.6, 6.1).clamp(16.0, 53.0);
        let children = rng.range(0, 5).min(rng.range(0, 5));
        let smoker = rng.next_f64() < 0.2;
        let region = rng.pick(&regions);
        let charges = charges_for(age, bmi, children, smoker, region, &mut rng);

        writer.write_record([
            age.to_string(),
            sex.to_string(),
            format!("{bmi:.2}"),
            children.to_string(),
            if smoker { "yes" } else { "no" }.to_string(),
            region.to_string(),
            format!("{charges:.2}"),
        ])?;
    }
    writer.flush().context("flushing CSV writer")?;

    println!("Wrote {rows} insurance records to {output_path}");
    Ok(())
}
