use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::prelude::*;
use rand_distr::Normal;
use serde::Serialize;

/// Coefficients the sample points are scattered around.
const SLOPE: f64 = -0.0214;
const INTERCEPT: f64 = 8500.0;
const N_POINTS: usize = 24;
const NOISE_STD_DEV: f64 = 450.0;
const SEED: u64 = 42;

#[derive(Serialize)]
struct Record {
    km: f64,
    price: f64,
}

#[derive(Serialize)]
struct Model {
    a: f64,
    b: f64,
}

fn generate_records(rng: &mut StdRng) -> Result<Vec<Record>> {
    let noise = Normal::new(0.0, NOISE_STD_DEV).context("building noise distribution")?;
    Ok((0..N_POINTS)
        .map(|_| {
            let km: f64 = rng.gen_range(20_000.0..250_000.0_f64).round();
            let price = (SLOPE * km + INTERCEPT + rng.sample(noise)).round();
            Record { km, price }
        })
        .collect())
}

fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flushing {}", path.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let mut rng = StdRng::seed_from_u64(SEED);
    let records = generate_records(&mut rng)?;

    let data_path = out_dir.join("data.csv");
    let model_path = out_dir.join("model.csv");
    write_csv(&data_path, &records)?;
    write_csv(
        &model_path,
        &[Model {
            a: SLOPE,
            b: INTERCEPT,
        }],
    )?;

    println!(
        "Wrote {} records to {} and the model to {}",
        records.len(),
        data_path.display(),
        model_path.display()
    );
    Ok(())
}
