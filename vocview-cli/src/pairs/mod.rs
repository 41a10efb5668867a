// Copyright (c) 2025, The vocview developers
// Licensed under the MIT License

use clap::Args;

use vocview_core::an::VocAnnotation;
use vocview_core::ds::Dataset;
use vocview_core::ut;

#[derive(Debug, Args)]
#[command(about = "List matched (image, annotation) pairs as TSV.")]
pub struct PairsArgs {
    #[arg(short = 'i', long, help = "Image directory.", required = true)]
    pub images: Option<String>,

    #[arg(short = 'a', long, help = "Annotation directory.")]
    pub annotations: Option<String>,

    #[arg(short = 'v', long, help = "Verbose output.")]
    pub verbose: bool,
}

pub fn pairs(args: &PairsArgs) {
    let image_path = args.images.to_owned().unwrap();
    let annotation_path = args.annotations.to_owned().unwrap_or(image_path.clone());

    let dataset = Dataset::open(&image_path, &annotation_path).unwrap_or_else(|err| {
        eprintln!("{}", err);
        std::process::exit(1);
    });

    ut::track::progress_log(
        &format!(
            "Detected {} image entries.",
            ut::track::thousands_format(dataset.len())
        ),
        args.verbose,
    );

    for entry in dataset.entries() {
        let (annotation, boxes) = match entry.annotation() {
            Some(path) => {
                // Unparseable annotations list as zero boxes, same as the viewer
                let boxes = VocAnnotation::open(path).map(|a| a.len()).unwrap_or(0);
                (path.display().to_string(), boxes)
            }
            None => ("-".to_string(), 0),
        };

        println!(
            "{}\t{}\t{}\t{}",
            entry.stem(),
            entry.image().display(),
            annotation,
            boxes
        );
    }
}
