use std::collections::HashSet;

use exr::image::FlatSamples;
use exr::prelude::read_first_flat_layer_from_file;

fn main() -> anyhow::Result<()> {
    let path = std::env::args().nth(1).unwrap_or_else(|| "output.exr".to_string());
    let image = read_first_flat_layer_from_file(&path)?;
    let layer = &image.layer_data;

    println!("Image: {}x{} pixels", layer.size.width(), layer.size.height());
    println!("Compression: {:?}", layer.encoding.compression);

    for channel in &layer.channel_data.list {
        // Only half channels are produced by tga2exr
        let FlatSamples::F16(samples) = &channel.sample_data else {
            println!("\n{}: not a half float channel", channel.name);
            continue;
        };

        let finite: Vec<f32> = samples
            .iter()
            .map(|s| s.to_f32())
            .filter(|v| v.is_finite())
            .collect();
        let min = finite.iter().copied().fold(f32::INFINITY, f32::min);
        let max = finite.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let unique: HashSet<u16> = samples.iter().map(|s| s.to_bits()).collect();
        let over_one = finite.iter().filter(|v| **v > 1.0).count();

        println!("\n{} channel:", channel.name);
        println!("  Range: {} - {}", min, max);
        println!("  Unique values: {}", unique.len());
        println!("  Non-finite samples: {}", samples.len() - finite.len());
        println!(
            "  Above 1.0: {} samples ({:.2}%)",
            over_one,
            over_one as f64 / samples.len().max(1) as f64 * 100.0
        );
    }

    Ok(())
}
