// Copyright (c) 2025, The vocview developers
// Licensed under the MIT License

use std::io::{BufRead, Write};
use std::path::Path;

use clap::Args;

use vocview_core::an::VocAnnotation;
use vocview_core::ds::{self, Dataset, Navigator};
use vocview_core::im::{OverlayStyle, render_fitted};

use crate::style::StyleArgs;

#[derive(Debug, Args)]
#[command(about = "Step through a dataset interactively from the terminal.")]
pub struct BrowseArgs {
    #[arg(short = 'i', long, help = "Image directory.", required = true)]
    pub images: Option<String>,

    #[arg(short = 'a', long, help = "Annotation directory.")]
    pub annotations: Option<String>,

    #[arg(
        short = 'o',
        long,
        help = "Directory picked images are copied into.",
        default_value = "picked"
    )]
    pub output: Option<String>,

    #[arg(
        short = 'w',
        long,
        help = "Path the preview overlay is written to.",
        default_value = "preview.png"
    )]
    pub preview: Option<String>,

    #[command(flatten)]
    pub style: StyleArgs,
}

pub fn browse(args: &BrowseArgs) {
    let image_path = args.images.to_owned().unwrap();
    let annotation_path = args.annotations.to_owned().unwrap_or(image_path.clone());
    let output = args.output.to_owned().unwrap();
    let preview = args.preview.to_owned().unwrap();

    let style = args.style.overlay_style().unwrap_or_else(|err| {
        eprintln!("{}", err);
        std::process::exit(1);
    });

    let dataset = Dataset::open(&image_path, &annotation_path).unwrap_or_else(|err| {
        eprintln!("{}", err);
        std::process::exit(1);
    });

    if dataset.is_empty() {
        eprintln!("[vocview::browse] ERROR: No supported images in {}.", image_path);
        std::process::exit(1);
    }

    let mut navigator = Navigator::new(dataset.len());

    println!("Browsing {} entries. Type h for help.", dataset.len());
    print_entry(&dataset, navigator.index());

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let trimmed = line.trim();
        let mut parts = trimmed.split_whitespace();

        match parts.next() {
            Some("n") => {
                navigator.next();
                print_entry(&dataset, navigator.index());
            }
            Some("p") => {
                navigator.prev();
                print_entry(&dataset, navigator.index());
            }
            Some("g") => {
                match parts.next().and_then(|index| index.parse::<usize>().ok()) {
                    Some(index) => {
                        navigator.goto(index);
                        print_entry(&dataset, navigator.index());
                    }
                    None => eprintln!("Usage: g <index>"),
                }
            }
            Some("k") => {
                let entry = dataset.get(navigator.index()).unwrap();

                if std::fs::create_dir_all(&output).is_err() {
                    eprintln!("[vocview::browse] ERROR: Could not create {}.", output);
                    continue;
                }

                match ds::pick(entry, Path::new(&output)) {
                    Ok(destination) => {
                        println!("Copied {} to {}.", entry.stem(), destination.display())
                    }
                    Err(err) => eprintln!("{}", err),
                }
            }
            Some("w") => match write_preview(&dataset, navigator.index(), &style, args, &preview) {
                Ok(count) => println!("Wrote {} boxes to {}.", count, preview),
                Err(err) => eprintln!("{}", err),
            },
            Some("h") => print_help(),
            Some("q") => break,
            Some(other) => eprintln!("Unknown command {}. Type h for help.", other),
            None => {}
        }
    }
}

/// Print the current entry as `[index/count] stem (boxes)`
fn print_entry(dataset: &Dataset, index: usize) {
    let entry = dataset.get(index).unwrap();

    // Parse only the annotation here so stepping never pays for image decode.
    let boxes = entry
        .annotation()
        .and_then(|path| VocAnnotation::open(path).ok())
        .map(|annotation| annotation.len())
        .unwrap_or(0);

    println!(
        "[{}/{}] {} ({} boxes)",
        index + 1,
        dataset.len(),
        entry.stem(),
        boxes
    );
}

fn write_preview(
    dataset: &Dataset,
    index: usize,
    style: &OverlayStyle,
    args: &BrowseArgs,
    preview: &str,
) -> Result<usize, vocview_core::error::VocError> {
    let (image, annotation) = dataset.load(index)?;

    let overlaid = render_fitted(
        &image,
        &annotation,
        style,
        args.style.max_width,
        args.style.max_height,
    )?;

    overlaid
        .save(preview)
        .map_err(|_| vocview_core::error::VocError::ImageWriteError)?;

    Ok(annotation.len())
}

fn print_help() {
    println!("  n          Next entry");
    println!("  p          Previous entry");
    println!("  g <index>  Jump to a zero-based entry index");
    println!("  k          Copy the current image into the picked directory");
    println!("  w          Write the current overlay to the preview path");
    println!("  h          Show this help");
    println!("  q          Quit");
}
