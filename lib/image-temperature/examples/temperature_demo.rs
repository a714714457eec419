/// Temperature adjustment example
/// Sweeps warm and cool temperature values over a test image
use image_temperature::{Bitmap, TemperatureConfig, normalize};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    // Load test image, baking in any embedded orientation first
    let bitmap = normalize(Bitmap::open("data/test.png")?);
    println!("Test image size: {}x{}", bitmap.width(), bitmap.height());

    // Warm adjustments (red up, blue down)
    for amount in [0.2, 0.5, 0.8] {
        let config = TemperatureConfig::new().with_amount(amount);
        let adjusted = config.apply(&bitmap).expect("Adjustment failed");

        let filename = format!("warm_{:.1}.png", amount);
        adjusted.pixels().save(output_dir.join(&filename))?;
        println!("✓ Generated {}", filename);
    }

    // Cool adjustments (blue up, red down)
    for amount in [0.2, 0.5, 0.8] {
        let config = TemperatureConfig::new().with_amount(-amount);
        let adjusted = config.apply(&bitmap).expect("Adjustment failed");

        let filename = format!("cool_{:.1}.png", amount);
        adjusted.pixels().save(output_dir.join(&filename))?;
        println!("✓ Generated {}", filename);
    }

    println!("\n✓ All temperature adjustments applied successfully!");
    println!("  Images saved to: tmp/");

    Ok(())
}
