// Copyright (c) 2025, The vocview developers
// Licensed under the MIT License

use std::fmt;

#[derive(Debug, Clone)]
pub enum VocError {
    AnnotationReadError(String),
    AnnotationParseError(String),
    BoxError,
    ImageReadError,
    ImageWriteError,
    ImageExtensionError,
    IndexError(usize),
    NoFileError(String),
    DirError(String),
    StyleError(String),
    OtherError(String),
}

impl fmt::Display for VocError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VocError::AnnotationReadError(message) => {
                write!(
                    f,
                    "[vocview::AnnotationReadError] Annotation file could not be read. {}.",
                    message
                )
            }
            VocError::AnnotationParseError(message) => {
                write!(
                    f,
                    "[vocview::AnnotationParseError] Annotation file is not valid PASCAL VOC XML. {}.",
                    message
                )
            }
            VocError::BoxError => {
                write!(
                    f,
                    "[vocview::BoxError] A bounding box must satisfy xmin <= xmax and ymin <= ymax."
                )
            }
            VocError::ImageReadError => {
                write!(f, "[vocview::ImageReadError] Failed to read image.")
            }
            VocError::ImageWriteError => {
                write!(f, "[vocview::ImageWriteError] Failed to write image.")
            }
            VocError::ImageExtensionError => {
                write!(
                    f,
                    "[vocview::ImageExtensionError] Could not detect a valid image extension for input."
                )
            }
            VocError::IndexError(index) => {
                write!(
                    f,
                    "[vocview::IndexError] Entry index {} is out of range.",
                    index
                )
            }
            VocError::NoFileError(message) => {
                write!(
                    f,
                    "[vocview::NoFileError] File could not be found. {}.",
                    message
                )
            }
            VocError::DirError(message) => {
                write!(
                    f,
                    "[vocview::DirError] Directory could not be read. {}.",
                    message
                )
            }
            VocError::StyleError(message) => {
                write!(
                    f,
                    "[vocview::StyleError] Invalid overlay style. {}.",
                    message
                )
            }
            VocError::OtherError(message) => {
                write!(f, "[vocview::OtherError] Error: {}.", message)
            }
        }
    }
}

impl std::error::Error for VocError {}
