//! # Wallplan CLI
//!
//! Usage:
//!   wallplan gallery.json -o wall.json
//!   echo '{ ... }' | wallplan
//!   wallplan --measure a.jpg b.png --margin 3 --strategy grid -o wall.json
//!   wallplan --example > gallery.json

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use wallplan::error::ArrangeError;
use wallplan::model::{ArrangeOptions, Gallery, Strategy};
use wallplan::{arrange, measure};

fn main() {
    let args: Vec<String> = env::args().collect();

    // Handle --example flag
    if args.iter().any(|a| a == "--example") {
        print!("{}", example_gallery_json());
        return;
    }

    let mut input_path: Option<String> = None;
    let mut output_path: Option<String> = None;
    let mut measure_paths: Vec<String> = Vec::new();
    let mut margin: Option<i64> = None;
    let mut strategy: Option<Strategy> = None;
    let mut seed: Option<u64> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-o" => {
                i += 1;
                output_path = Some(expect_value(&args, i, "-o needs an output path"));
            }
            "--margin" => {
                i += 1;
                let raw = expect_value(&args, i, "--margin needs an integer");
                margin = Some(
                    raw.parse()
                        .unwrap_or_else(|_| die(&format!("invalid margin '{}'", raw))),
                );
            }
            "--strategy" => {
                i += 1;
                let raw = expect_value(&args, i, "--strategy needs a name");
                strategy = Some(raw.parse().unwrap_or_else(|e: String| die(&e)));
            }
            "--seed" => {
                i += 1;
                let raw = expect_value(&args, i, "--seed needs an integer");
                seed = Some(
                    raw.parse()
                        .unwrap_or_else(|_| die(&format!("invalid seed '{}'", raw))),
                );
            }
            "--measure" => {
                // Every following non-flag argument is a picture file.
                while i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    i += 1;
                    measure_paths.push(args[i].clone());
                }
                if measure_paths.is_empty() {
                    die("--measure needs at least one picture file");
                }
            }
            other if !other.starts_with('-') && input_path.is_none() => {
                input_path = Some(other.to_string());
            }
            other => die(&format!("unknown argument '{}'", other)),
        }
        i += 1;
    }

    // Build the gallery: measured picture files, an input file, or stdin.
    let mut gallery = if !measure_paths.is_empty() {
        match measure::pictures_from_files(&measure_paths) {
            Ok(pictures) => Gallery {
                pictures,
                options: ArrangeOptions::default(),
            },
            Err(e) => die(&e.to_string()),
        }
    } else {
        let input = match &input_path {
            Some(path) => fs::read_to_string(path).expect("Failed to read input file"),
            None => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .expect("Failed to read stdin");
                buf
            }
        };
        match serde_json::from_str::<Gallery>(&input).map_err(ArrangeError::from) {
            Ok(gallery) => gallery,
            Err(e) => die(&e.to_string()),
        }
    };

    if let Some(margin) = margin {
        gallery.options.margin = margin;
    }
    if let Some(strategy) = strategy {
        gallery.options.strategy = strategy;
    }
    if let Some(seed) = seed {
        gallery.options.seed = Some(seed);
    }

    match arrange(&gallery.pictures, &gallery.options) {
        Ok(wall) => {
            let json = serde_json::to_string_pretty(&wall)
                .unwrap_or_else(|e| die(&format!("failed to serialize wall: {}", e)));
            match &output_path {
                Some(path) => {
                    fs::write(path, &json).expect("Failed to write wall");
                    eprintln!(
                        "✓ Arranged {} pictures onto a {}x{} wall → {}",
                        wall.placements.len(),
                        wall.width,
                        wall.height,
                        path
                    );
                }
                None => println!("{}", json),
            }
        }
        Err(e) => {
            eprintln!("✗ {}", e);
            process::exit(1);
        }
    }
}

fn expect_value(args: &[String], i: usize, message: &str) -> String {
    args.get(i).cloned().unwrap_or_else(|| die(message))
}

fn die(message: &str) -> ! {
    eprintln!("✗ {}", message);
    process::exit(1)
}

fn example_gallery_json() -> &'static str {
    r##"{
  "pictures": [
    { "id": 1, "width": 8.0, "height": 10.5 },
    { "id": 2, "width": 12.0, "height": 15.0 },
    { "id": 3, "width": 7.5, "height": 9.5 },
    { "id": 4, "width": 11.0, "height": 14.0 },
    { "id": 5, "width": 8.5, "height": 6.5 },
    { "id": 6, "width": 15.0, "height": 11.0 },
    { "id": 7, "width": 19.5, "height": 16.5 },
    { "id": 8, "width": 13.0, "height": 15.5 }
  ],
  "options": {
    "margin": 2,
    "strategy": "linear",
    "seed": 13
  }
}
"##
}
