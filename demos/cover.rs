//! Cover-resize a single image from the command line.
//!
//! ```sh
//! cargo run --example cover -- photo.jpg 1280 720 out.jpg
//! ```

use std::process::ExitCode;

use coverfit::{Pixmap, env};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 5 {
        eprintln!("usage: cover <input> <width> <height> <output>");
        return ExitCode::from(2);
    }
    match run(&args[1], &args[2], &args[3], &args[4]) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("cover: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(input: &str, width: &str, height: &str, output: &str) -> Result<(), Box<dyn std::error::Error>> {
    let width: u32 = width.parse().map_err(|_| format!("bad width: {width}"))?;
    let height: u32 = height.parse().map_err(|_| format!("bad height: {height}"))?;

    env::init()?;
    let blob = std::fs::read(input)?;
    let mut pixmap = Pixmap::from_blob(&blob)?;
    println!("{input}: {}x{}", pixmap.width(), pixmap.height());

    pixmap.resize(width, height)?;
    let out = pixmap.encode()?;
    std::fs::write(output, &out)?;
    println!("{output}: {width}x{height}, {} bytes", out.len());

    env::shutdown()?;
    Ok(())
}
