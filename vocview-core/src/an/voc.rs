// Copyright (c) 2025, The vocview developers
// Licensed under the MIT License

use std::path::Path;

use serde::Deserialize;

use crate::an::{VocAnnotation, VocBox};
use crate::error::VocError;

// Mirrors the PASCAL VOC per-image schema:
// <annotation><size><width>/<height></size>
// <object><name>/<bndbox><xmin>/<ymin>/<xmax>/<ymax></bndbox></object>...</annotation>
//
// Coordinates are parsed as f32 since VOC files in the wild write both
// "12" and "12.0". Fields like <folder>, <pose> or <difficult> are ignored.

#[derive(Debug, Deserialize)]
struct XmlAnnotation {
    #[serde(default)]
    filename: String,
    #[serde(default)]
    size: XmlSize,
    #[serde(rename = "object", default)]
    objects: Vec<XmlObject>,
}

#[derive(Debug, Default, Deserialize)]
struct XmlSize {
    #[serde(default)]
    width: u32,
    #[serde(default)]
    height: u32,
}

#[derive(Debug, Deserialize)]
struct XmlObject {
    #[serde(default)]
    name: String,
    bndbox: XmlBndbox,
}

#[derive(Debug, Deserialize)]
struct XmlBndbox {
    xmin: f32,
    ymin: f32,
    xmax: f32,
    ymax: f32,
}

/// Read a single PASCAL VOC XML annotation file
pub(crate) fn read_voc_xml(path: &Path) -> Result<VocAnnotation, VocError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|err| VocError::AnnotationReadError(err.to_string()))?;

    let parsed: XmlAnnotation = quick_xml::de::from_str(&contents)
        .map_err(|err| VocError::AnnotationParseError(err.to_string()))?;

    let boxes = parsed
        .objects
        .into_iter()
        .map(|object| {
            VocBox::new(
                object.name,
                [
                    object.bndbox.xmin,
                    object.bndbox.ymin,
                    object.bndbox.xmax,
                    object.bndbox.ymax,
                ],
            )
        })
        .collect::<Result<Vec<VocBox>, VocError>>()?;

    Ok(VocAnnotation::new(
        parsed.filename,
        parsed.size.width,
        parsed.size.height,
        boxes,
    ))
}
