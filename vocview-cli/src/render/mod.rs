// Copyright (c) 2025, The vocview developers
// Licensed under the MIT License

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use clap::Args;
use futures::stream::{self, StreamExt};
use kdam::BarExt;

use vocview_core::constant;
use vocview_core::ds::Dataset;
use vocview_core::error::VocError;
use vocview_core::im::{OverlayStyle, render_fitted};
use vocview_core::ut;

use crate::style::StyleArgs;

#[derive(Debug, Args)]
#[command(about = "Render bounding-box overlays for every dataset entry.")]
pub struct RenderArgs {
    #[arg(short = 'i', long, help = "Image directory.", required = true)]
    pub images: Option<String>,

    #[arg(short = 'a', long, help = "Annotation directory.")]
    pub annotations: Option<String>,

    #[arg(short = 'o', long, help = "Output directory.", required = true)]
    pub output: Option<String>,

    #[arg(
        short = 'e',
        long,
        help = "Format to save overlaid images (e.g. png, jpg).",
        default_value = "png"
    )]
    pub image_format: Option<String>,

    #[arg(short = 't', long, help = "Number of threads.")]
    pub threads: Option<usize>,

    #[arg(short = 'v', long, help = "Verbose output.")]
    pub verbose: bool,

    #[command(flatten)]
    pub style: StyleArgs,
}

pub fn render(args: &RenderArgs) {
    let image_format = args.image_format.to_owned().unwrap_or("png".to_string());

    let threads = if let Some(t) = args.threads {
        t
    } else {
        std::thread::available_parallelism().unwrap_or_else(|_| {
            eprintln!("[vocview::render] Could not automatically assign number of tasks. Please manually set the --threads (-t) argument.");
            std::process::exit(1);
        }).get()
    };

    if !constant::SUPPORTED_IMAGE_FORMATS.contains(&image_format.as_str()) {
        eprintln!(
            "[vocview::render] ERROR: Invalid image_format {}. Must be one of: {:?}.",
            image_format,
            constant::SUPPORTED_IMAGE_FORMATS
        );
        std::process::exit(1);
    }

    let style = args.style.overlay_style().unwrap_or_else(|err| {
        eprintln!("{}", err);
        std::process::exit(1);
    });

    let image_path = args.images.to_owned().unwrap();
    let annotation_path = args.annotations.to_owned().unwrap_or(image_path.clone());

    let dataset = Dataset::open(&image_path, &annotation_path).unwrap_or_else(|err| {
        eprintln!("{}", err);
        std::process::exit(1);
    });

    if dataset.is_empty() {
        eprintln!(
            "[vocview::render] ERROR: No image files were detected. Please check your image directory."
        );
        std::process::exit(1);
    }

    ut::track::progress_log(
        &format!(
            "Detected {} image entries.",
            ut::track::thousands_format(dataset.len())
        ),
        args.verbose,
    );

    let output = PathBuf::from(args.output.to_owned().unwrap());

    let output = ut::path::create_directory(&output).unwrap_or_else(|_| {
        eprintln!("[vocview::render] ERROR: Could not create directory.");
        std::process::exit(1);
    });

    let rt = tokio::runtime::Runtime::new().unwrap();

    let results = rt.block_on(run_all(
        &dataset,
        &style,
        args.style.max_width,
        args.style.max_height,
        &output,
        &image_format,
        threads,
        args.verbose,
    ));

    let mut boxes: usize = 0;
    let mut success: Vec<String> = Vec::with_capacity(results.len());
    let mut failure: Vec<String> = vec![];

    for (stem, run) in results {
        match run {
            Ok(n_boxes) => {
                boxes += n_boxes;
                success.push(format!("{}\t{}", stem, n_boxes));
            }
            Err(err) => failure.push(format!("{}\t{}", stem, err)),
        }
    }

    if args.verbose {
        println!();
    }

    ut::track::progress_log(
        &format!(
            "Complete. {} boxes drawn across {} images.",
            ut::track::thousands_format(boxes),
            ut::track::thousands_format(success.len())
        ),
        args.verbose,
    );

    if !success.is_empty() {
        std::fs::write(output.join("box_counts.tsv"), success.join("\n")).unwrap();
    }

    if !failure.is_empty() {
        std::fs::write(output.join("render_errors.tsv"), failure.join("\n")).unwrap();
    }
}

/// Render one entry's overlay into the output directory
///
/// Returns the number of boxes drawn after class filtering.
fn render_entry(
    dataset: &Dataset,
    index: usize,
    style: &OverlayStyle,
    max_width: u32,
    max_height: u32,
    output: &Path,
    image_format: &str,
) -> Result<usize, VocError> {
    let entry = dataset.get(index).ok_or(VocError::IndexError(index))?;

    let (image, annotation) = dataset.load(index)?;

    let overlaid = render_fitted(&image, &annotation, style, max_width, max_height)?;

    overlaid
        .save(output.join(format!("{}.{}", entry.stem(), image_format)))
        .map_err(|_| VocError::ImageWriteError)?;

    let drawn = annotation
        .boxes()
        .iter()
        .filter(|b| style.filter.allows(b.name()))
        .count();

    Ok(drawn)
}

#[allow(clippy::too_many_arguments)]
async fn run_all(
    dataset: &Dataset,
    style: &OverlayStyle,
    max_width: u32,
    max_height: u32,
    output: &Path,
    image_format: &str,
    threads: usize,
    verbose: bool,
) -> Vec<(String, Result<usize, VocError>)> {
    let dataset = Arc::new(dataset.clone());
    let style = Arc::new(style.clone());

    let pb = Arc::new(Mutex::new(ut::track::progress_bar(
        dataset.len(),
        "Rendering",
        verbose,
    )));

    stream::iter(0..dataset.len())
        .map(|index| {
            let dataset = dataset.clone();
            let style = style.clone();
            let output = output.to_path_buf();
            let image_format = image_format.to_string();
            let pb_clone = pb.clone();

            async move {
                let stem = dataset
                    .get(index)
                    .map(|entry| entry.stem().to_string())
                    .unwrap_or_default();

                let result = tokio::task::spawn_blocking(move || {
                    render_entry(
                        &dataset,
                        index,
                        &style,
                        max_width,
                        max_height,
                        &output,
                        &image_format,
                    )
                })
                .await
                .unwrap_or_else(|_| {
                    Err(VocError::OtherError("Failed to render overlay.".to_string()))
                });

                if verbose {
                    pb_clone.lock().unwrap().update(1).unwrap();
                }

                (stem, result)
            }
        })
        .buffer_unordered(threads)
        .collect::<Vec<_>>()
        .await
}
