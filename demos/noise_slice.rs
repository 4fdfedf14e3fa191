//! Demonstration of the noise kernel
//!
//! Prints a few reference values and renders an ASCII slice of the field.
//! Run with `RUST_LOG=debug` to see table construction.

use perlin_kernel::*;

const SHADES: &[u8] = b" .:-=+*#%@";

fn render_slice(sampler: &PerlinNoise, z: f32, width: usize, height: usize) {
    for row in 0..height {
        let line: String = (0..width)
            .map(|col| {
                let position = Vec3::new(col as f32 * 0.15, row as f32 * 0.3, z);
                let value = sampler.sample_normalized(position);
                let index = (value * (SHADES.len() - 1) as f32).round() as usize;
                SHADES[index.min(SHADES.len() - 1)] as char
            })
            .collect();
        println!("{}", line);
    }
}

fn main() -> Result<()> {
    env_logger::init();

    println!("Perlin Noise Demo\n");

    println!("Classic table reference values:");
    println!("{:-<60}", "");
    for (x, y, z) in [(0.0, 0.0, 0.0), (3.5, 0.0, 0.0), (0.5, 0.5, 0.5), (1.25, 2.5, 3.75)] {
        println!("noise({:5}, {:5}, {:5}) = {:+.12}", x, y, z, noise(x, y, z));
    }

    let config = NoiseConfigBuilder::new()
        .seed(42)
        .frequency(0.5)?
        .build()?;
    let sampler = PerlinNoise::new(&config)?;

    println!("\n{:-<60}", "");
    println!(
        "{} table, frequency {}, slice at z = 0.5:",
        config.permutation.name(),
        config.frequency
    );
    println!("{:-<60}", "");
    render_slice(&sampler, 0.5, 60, 20);

    println!("\n{:-<60}", "");
    println!("Classic table, slice at z = 0.5:");
    println!("{:-<60}", "");
    render_slice(&PerlinNoise::classic(), 0.5, 60, 20);

    Ok(())
}
