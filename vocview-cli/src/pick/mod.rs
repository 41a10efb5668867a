// Copyright (c) 2025, The vocview developers
// Licensed under the MIT License

use std::path::Path;

use clap::Args;

use vocview_core::ds::{self, Dataset};
use vocview_core::ut;

#[derive(Debug, Args)]
#[command(about = "Copy original dataset images into an output directory.")]
pub struct PickArgs {
    #[arg(short = 'i', long, help = "Image directory.", required = true)]
    pub images: Option<String>,

    #[arg(short = 'o', long, help = "Output directory.", required = true)]
    pub output: Option<String>,

    #[arg(
        short = 's',
        long,
        help = "Filename stems of the images to copy (repeatable).",
        required = true
    )]
    pub stems: Vec<String>,

    #[arg(short = 'v', long, help = "Verbose output.")]
    pub verbose: bool,
}

pub fn pick(args: &PickArgs) {
    let image_path = args.images.to_owned().unwrap();
    let output = args.output.to_owned().unwrap();

    let dataset = Dataset::open(&image_path, &image_path).unwrap_or_else(|err| {
        eprintln!("{}", err);
        std::process::exit(1);
    });

    if std::fs::create_dir_all(&output).is_err() {
        eprintln!("[vocview::pick] ERROR: Could not create {}.", output);
        std::process::exit(1);
    }

    let mut copied = 0;
    for stem in &args.stems {
        let Some(index) = dataset.position(stem) else {
            eprintln!("[vocview::pick] WARNING: No image named {}. Skipping.", stem);
            continue;
        };

        let entry = dataset.get(index).unwrap();

        match ds::pick(entry, Path::new(&output)) {
            Ok(destination) => {
                ut::track::progress_log(
                    &format!("Copied {} to {}.", stem, destination.display()),
                    args.verbose,
                );
                copied += 1;
            }
            Err(err) => eprintln!("{}", err),
        }
    }

    ut::track::progress_log(
        &format!("Copied {} of {} images to {}.", copied, args.stems.len(), output),
        args.verbose,
    );
}
