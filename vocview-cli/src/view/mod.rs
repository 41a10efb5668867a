// Copyright (c) 2025, The vocview developers
// Licensed under the MIT License

use std::path::PathBuf;

use clap::Args;

use vocview_core::ds::Dataset;
use vocview_core::im::render_fitted;
use vocview_core::ut;

use crate::style::StyleArgs;

#[derive(Debug, Args)]
#[command(about = "Render the overlay for a single dataset entry.")]
pub struct ViewArgs {
    #[arg(short = 'i', long, help = "Image directory.", required = true)]
    pub images: Option<String>,

    #[arg(short = 'a', long, help = "Annotation directory.")]
    pub annotations: Option<String>,

    #[arg(short = 's', long, help = "Filename stem of the entry to render.")]
    pub stem: Option<String>,

    #[arg(short = 'n', long, help = "Entry index to render.", default_value = "0")]
    pub index: Option<usize>,

    #[arg(short = 'o', long, help = "Output image path.")]
    pub output: Option<String>,

    #[arg(short = 'v', long, help = "Verbose output.")]
    pub verbose: bool,

    #[command(flatten)]
    pub style: StyleArgs,
}

pub fn view(args: &ViewArgs) {
    let image_path = args.images.to_owned().unwrap();
    let annotation_path = args.annotations.to_owned().unwrap_or(image_path.clone());

    let style = args.style.overlay_style().unwrap_or_else(|err| {
        eprintln!("{}", err);
        std::process::exit(1);
    });

    let dataset = Dataset::open(&image_path, &annotation_path).unwrap_or_else(|err| {
        eprintln!("{}", err);
        std::process::exit(1);
    });

    let index = match &args.stem {
        Some(stem) => dataset.position(stem).unwrap_or_else(|| {
            eprintln!("[vocview::view] ERROR: No entry named {}.", stem);
            std::process::exit(1);
        }),
        None => args.index.unwrap_or(0),
    };

    let Some(entry) = dataset.get(index) else {
        eprintln!(
            "[vocview::view] ERROR: Entry index {} is out of range (0-{}).",
            index,
            dataset.len().saturating_sub(1)
        );
        std::process::exit(1);
    };

    let output = args
        .output
        .to_owned()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(format!("{}_overlay.png", entry.stem())));

    let (image, annotation) = dataset.load(index).unwrap_or_else(|err| {
        eprintln!("{}", err);
        std::process::exit(1);
    });

    let overlaid = render_fitted(
        &image,
        &annotation,
        &style,
        args.style.max_width,
        args.style.max_height,
    )
    .unwrap_or_else(|err| {
        eprintln!("{}", err);
        std::process::exit(1);
    });

    if overlaid.save(&output).is_err() {
        eprintln!(
            "[vocview::view] ERROR: Could not write overlay to {}.",
            output.display()
        );
        std::process::exit(1);
    }

    ut::track::progress_log(
        &format!(
            "Wrote {} with {} boxes to {}.",
            entry.stem(),
            annotation.len(),
            output.display()
        ),
        args.verbose,
    );
}
