// Copyright (c) 2025, The vocview developers
// Licensed under the MIT License

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::an::VocAnnotation;
use crate::constant;
use crate::error::VocError;
use crate::im::open_image;
use crate::ut;

/// One navigable dataset entry
///
/// An entry always has an image path; the matching annotation path is
/// `None` when no XML file shares the image's filename stem.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    stem: String,
    image: PathBuf,
    annotation: Option<PathBuf>,
}

impl Entry {
    /// Filename stem shared by the image and its annotation
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Path to the image file
    pub fn image(&self) -> &Path {
        &self.image
    }

    /// Path to the matched annotation file, if one exists
    pub fn annotation(&self) -> Option<&Path> {
        self.annotation.as_deref()
    }
}

/// An ordered collection of (image, annotation) pairs
///
/// Images and annotations are matched 1:1 by filename stem and entries
/// are traversed in image filename order. An image without a matching
/// annotation file stays in the dataset with zero boxes; an annotation
/// without a matching image is dropped.
///
/// # Examples
///
/// ```no_run
/// use vocview_core::ds::Dataset;
///
/// let dataset = Dataset::open("VOC2007/JPEGImages", "VOC2007/Annotations").unwrap();
///
/// for entry in dataset.entries() {
///     println!("{} -> {:?}", entry.stem(), entry.annotation());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Dataset {
    entries: Vec<Entry>,
}

impl Dataset {
    /// Enumerate the matched pairs under an image and an annotation directory
    ///
    /// # Arguments
    ///
    /// * `image_dir` - Directory containing image files
    /// * `annotation_dir` - Directory containing PASCAL VOC XML files
    pub fn open<P, Q>(image_dir: P, annotation_dir: Q) -> Result<Dataset, VocError>
    where
        P: AsRef<Path> + ToString,
        Q: AsRef<Path> + ToString,
    {
        let images = ut::path::collect_file_paths(
            image_dir,
            constant::SUPPORTED_IMAGE_FORMATS.as_slice(),
        )?;

        // An unreadable annotation directory degrades to zero boxes
        // everywhere rather than failing the whole session
        let annotations = ut::path::collect_file_paths(
            annotation_dir,
            constant::SUPPORTED_ANNOTATION_FORMATS.as_slice(),
        )
        .unwrap_or_default();

        let annotation_map: HashMap<String, PathBuf> = annotations
            .into_iter()
            .filter_map(|path| {
                path.file_stem()
                    .map(|stem| (stem.to_string_lossy().to_string(), path.clone()))
            })
            .collect();

        let mut entries: Vec<Entry> = images
            .into_iter()
            .filter_map(|image| {
                image.file_stem().map(|stem| {
                    let stem = stem.to_string_lossy().to_string();
                    let annotation = annotation_map.get(&stem).cloned();

                    Entry {
                        stem,
                        image: image.clone(),
                        annotation,
                    }
                })
            })
            .collect();

        entries.sort_unstable_by(|a, b| a.image.file_name().cmp(&b.image.file_name()));

        Ok(Dataset { entries })
    }

    /// Number of navigable entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dataset has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in filename order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Entry at the provided index
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Index of the entry with the provided filename stem
    pub fn position(&self, stem: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.stem == stem)
    }

    /// Load the image and annotation for one entry
    ///
    /// A missing or unparseable annotation degrades to an annotation
    /// with zero boxes sized to the image; an unreadable image is an
    /// error the caller may skip.
    ///
    /// # Arguments
    ///
    /// * `index` - Entry index in `[0, len - 1]`
    pub fn load(&self, index: usize) -> Result<(RgbImage, VocAnnotation), VocError> {
        let entry = self.get(index).ok_or(VocError::IndexError(index))?;

        let image = open_image(entry.image())?;

        let annotation = match entry.annotation() {
            Some(path) => VocAnnotation::open(path)
                .unwrap_or_else(|_| VocAnnotation::empty(image.width(), image.height())),
            None => VocAnnotation::empty(image.width(), image.height()),
        };

        Ok((image, annotation))
    }
}

/// Copy an entry's image file unmodified into an output directory
///
/// # Arguments
///
/// * `entry` - Entry whose image should be picked
/// * `output` - Existing output directory
pub fn pick(entry: &Entry, output: &Path) -> Result<PathBuf, VocError> {
    let name = entry.image().file_name().ok_or_else(|| {
        VocError::NoFileError(format!("Invalid image path {}", entry.image().display()))
    })?;

    let destination = output.join(name);

    std::fs::copy(entry.image(), &destination)
        .map_err(|err| VocError::OtherError(err.to_string()))?;

    Ok(destination)
}
