/// Slider offloading example
///
/// The library is synchronous and blocking by design; keeping a UI responsive
/// is the caller's job. This demo simulates a slider drag publishing a stream
/// of temperature values through an atomic, with a worker thread that only
/// ever processes the latest value it sees (older requests are dropped).
use image_temperature::{Bitmap, adjust, normalize};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::time::{Duration, Instant};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let output_dir = Path::new("tmp/slider");
    std::fs::create_dir_all(output_dir)?;

    let bitmap = Arc::new(normalize(Bitmap::open("data/test.png")?));
    println!("Test image size: {}x{}", bitmap.width(), bitmap.height());

    // Latest slider position, stored as f32 bits the way a UI callback would
    // publish it. The worker never queues requests; it just reads the newest.
    let slider = Arc::new(AtomicU32::new(0f32.to_bits()));
    let dragging = Arc::new(AtomicBool::new(true));

    let worker = {
        let bitmap = bitmap.clone();
        let slider = slider.clone();
        let dragging = dragging.clone();
        let output_dir = output_dir.to_path_buf();

        std::thread::spawn(move || {
            let mut last_applied = f32::NAN;
            let mut frames = 0u32;

            loop {
                let temperature = f32::from_bits(slider.load(Ordering::Relaxed));
                if temperature == last_applied {
                    if !dragging.load(Ordering::Relaxed) {
                        break;
                    }
                    std::thread::sleep(Duration::from_millis(1));
                    continue;
                }

                let start = Instant::now();
                if let Some(adjusted) = adjust(&bitmap, temperature) {
                    frames += 1;
                    let elapsed = start.elapsed().as_secs_f64() * 1000.0;
                    println!("applied t = {:+.2} in {:.1} ms", temperature, elapsed);

                    let filename = format!("frame_{:03}.png", frames);
                    if let Err(e) = adjusted.pixels().save(output_dir.join(&filename)) {
                        eprintln!("save failed: {}", e);
                    }
                }
                last_applied = temperature;
            }

            frames
        })
    };

    // Simulate the drag: cold to warm in coarse steps, faster than the worker
    // can keep up, so intermediate positions get skipped.
    for step in 0..=20 {
        let value = -1.0 + step as f32 * 0.1;
        slider.store(value.to_bits(), Ordering::Relaxed);
        std::thread::sleep(Duration::from_millis(10));
    }
    dragging.store(false, Ordering::Relaxed);

    let frames = worker.join().expect("worker panicked");
    println!("\n✓ Drag finished; worker rendered {} of 21 slider positions", frames);
    println!("  Frames saved to: tmp/slider/");

    Ok(())
}
