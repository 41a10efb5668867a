// Copyright (c) 2025, The vocview developers
// Licensed under the MIT License

use std::path::Path;

use crate::an::voc::read_voc_xml;
use crate::constant;
use crate::error::VocError;

/// A single labeled bounding box in original-image pixel space
///
/// Coordinates are stored in xyxy format. A box whose maximum coordinate
/// is smaller than its minimum coordinate is rejected at construction.
///
/// # Examples
///
/// ```
/// use vocview_core::an::VocBox;
///
/// let voc_box = VocBox::new("car", [10.0, 20.0, 110.0, 120.0]);
/// assert!(voc_box.is_ok());
///
/// let voc_box = VocBox::new("car", [110.0, 20.0, 10.0, 120.0]);
/// assert!(voc_box.is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VocBox {
    name: String,
    xyxy: [f32; 4],
}

impl VocBox {
    /// Initialize a new labeled bounding box
    ///
    /// # Arguments
    ///
    /// * `name` - Class name of the boxed object
    /// * `xyxy` - Pixel coordinates as [xmin, ymin, xmax, ymax]
    pub fn new<S: Into<String>>(name: S, xyxy: [f32; 4]) -> Result<Self, VocError> {
        let [xmin, ymin, xmax, ymax] = xyxy;

        if xmax < xmin || ymax < ymin {
            return Err(VocError::BoxError);
        }

        Ok(Self {
            name: name.into(),
            xyxy,
        })
    }

    /// Class name of the boxed object
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Box coordinates as [xmin, ymin, xmax, ymax]
    pub fn as_xyxy(&self) -> [f32; 4] {
        self.xyxy
    }

    /// Linearly rescale box coordinates by a positive ratio
    pub fn scale(&self, ratio: f32) -> VocBox {
        VocBox {
            name: self.name.clone(),
            xyxy: self.xyxy.map(|coordinate| coordinate * ratio),
        }
    }
}

/// A parsed PASCAL VOC annotation for one image
///
/// Holds the annotated image's filename and pixel dimensions plus the
/// ordered sequence of labeled boxes found in the XML file.
///
/// # Examples
///
/// ```no_run
/// use vocview_core::an::VocAnnotation;
///
/// let annotation = VocAnnotation::open("annotations/000001.xml").unwrap();
///
/// for voc_box in annotation.boxes() {
///     println!("{} {:?}", voc_box.name(), voc_box.as_xyxy());
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VocAnnotation {
    filename: String,
    width: u32,
    height: u32,
    boxes: Vec<VocBox>,
}

impl VocAnnotation {
    /// Initialize an annotation from parsed parts
    ///
    /// # Arguments
    ///
    /// * `filename` - Annotated image filename as recorded in the XML
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `boxes` - Ordered labeled boxes
    pub fn new<S: Into<String>>(filename: S, width: u32, height: u32, boxes: Vec<VocBox>) -> Self {
        Self {
            filename: filename.into(),
            width,
            height,
            boxes,
        }
    }

    /// An annotation with zero boxes for images with no annotation file
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            filename: String::new(),
            width,
            height,
            boxes: Vec::new(),
        }
    }

    /// Open a PASCAL VOC XML annotation from the provided path
    ///
    /// # Arguments
    ///
    /// * `path` - A path to an annotation file with a valid extension
    ///
    /// ```no_run
    /// use vocview_core::an::VocAnnotation;
    /// let annotation = VocAnnotation::open("annotations/000001.xml");
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<VocAnnotation, VocError> {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_lowercase());

        if let Some(ext) = extension {
            if constant::SUPPORTED_ANNOTATION_FORMATS.iter().any(|e| e == &ext) {
                return read_voc_xml(path.as_ref());
            }
        }

        Err(VocError::AnnotationReadError(format!(
            "Unsupported annotation extension for {}",
            path.as_ref().display()
        )))
    }
}

// >>> PROPERTY METHODS

impl VocAnnotation {
    /// Annotated image filename as recorded in the XML
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Annotated image width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Annotated image height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Ordered labeled boxes
    pub fn boxes(&self) -> &[VocBox] {
        &self.boxes
    }

    /// Number of labeled boxes
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Check if the annotation has no boxes
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

// <<< PROPERTY METHODS

// >>> TRANSFORM METHODS

impl VocAnnotation {
    /// Linearly rescale all box coordinates and image dimensions
    ///
    /// # Arguments
    ///
    /// * `ratio` - Positive scaling ratio applied to both axes
    pub fn scale(&self, ratio: f32) -> VocAnnotation {
        VocAnnotation {
            filename: self.filename.clone(),
            width: (self.width as f32 * ratio).round() as u32,
            height: (self.height as f32 * ratio).round() as u32,
            boxes: self.boxes.iter().map(|b| b.scale(ratio)).collect(),
        }
    }

    /// Rescale the annotation to fit inside a maximum display size
    ///
    /// The same aspect-preserving ratio is applied to both axes and
    /// images are never upscaled. Returns the scaled annotation along
    /// with the ratio that was applied.
    ///
    /// # Arguments
    ///
    /// * `max_width` - Maximum display width (0 disables the bound)
    /// * `max_height` - Maximum display height (0 disables the bound)
    pub fn fit(&self, max_width: u32, max_height: u32) -> (VocAnnotation, f32) {
        let ratio = fit_ratio(self.width, self.height, max_width, max_height);
        (self.scale(ratio), ratio)
    }
}

// <<< TRANSFORM METHODS

/// Aspect-preserving ratio that fits a size inside a maximum display size
///
/// A zero maximum disables that bound. The ratio is capped at 1.0 so
/// images smaller than the display bound are left at native resolution.
///
/// # Examples
///
/// ```
/// use vocview_core::an::fit_ratio;
///
/// assert_eq!(fit_ratio(200, 200, 100, 100), 0.5);
/// assert_eq!(fit_ratio(50, 50, 100, 100), 1.0);
/// ```
pub fn fit_ratio(width: u32, height: u32, max_width: u32, max_height: u32) -> f32 {
    if width == 0 || height == 0 {
        return 1.0;
    }

    let mut ratio = 1.0_f32;

    if max_width > 0 {
        ratio = ratio.min(max_width as f32 / width as f32);
    }

    if max_height > 0 {
        ratio = ratio.min(max_height as f32 / height as f32);
    }

    ratio
}

#[cfg(test)]
mod test {

    use super::*;

    fn example_annotation() -> VocAnnotation {
        VocAnnotation::new(
            "000001.jpg",
            200,
            200,
            vec![VocBox::new("car", [10.0, 20.0, 110.0, 120.0]).unwrap()],
        )
    }

    #[test]
    fn test_invalid_box_rejected() {
        assert!(VocBox::new("car", [10.0, 0.0, 5.0, 10.0]).is_err());
        assert!(VocBox::new("car", [0.0, 10.0, 5.0, 5.0]).is_err());
        assert!(VocBox::new("car", [0.0, 0.0, 0.0, 0.0]).is_ok());
    }

    #[test]
    fn test_fit_to_display_size() {
        let annotation = example_annotation();

        let (fitted, ratio) = annotation.fit(100, 100);

        assert_eq!(ratio, 0.5);
        assert_eq!(fitted.width(), 100);
        assert_eq!(fitted.height(), 100);
        assert_eq!(fitted.boxes()[0].as_xyxy(), [5.0, 10.0, 55.0, 60.0]);
    }

    #[test]
    fn test_fit_never_upscales() {
        let annotation = example_annotation();

        let (fitted, ratio) = annotation.fit(1000, 1000);

        assert_eq!(ratio, 1.0);
        assert_eq!(fitted, annotation);
    }

    #[test]
    fn test_fit_unbounded_axis() {
        let annotation = example_annotation();

        let (_, ratio) = annotation.fit(0, 50);
        assert_eq!(ratio, 0.25);

        let (_, ratio) = annotation.fit(0, 0);
        assert_eq!(ratio, 1.0);
    }

    #[test]
    fn test_scale_round_trip() {
        let annotation = VocAnnotation::new(
            "odd.jpg",
            333,
            457,
            vec![
                VocBox::new("person", [13.0, 27.0, 121.0, 304.0]).unwrap(),
                VocBox::new("dog", [0.0, 5.0, 57.0, 93.0]).unwrap(),
            ],
        );

        let ratio = fit_ratio(333, 457, 100, 100);
        let restored = annotation.scale(ratio).scale(1.0 / ratio);

        for (original, round_tripped) in annotation.boxes().iter().zip(restored.boxes()) {
            for (a, b) in original
                .as_xyxy()
                .iter()
                .zip(round_tripped.as_xyxy().iter())
            {
                assert!((a - b).abs() <= 1.0, "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn test_empty_annotation() {
        let annotation = VocAnnotation::empty(640, 480);

        assert_eq!(annotation.len(), 0);
        assert!(annotation.is_empty());
        assert_eq!(annotation.width(), 640);
        assert_eq!(annotation.height(), 480);
    }

    #[test]
    fn test_open_rejects_unknown_extension() {
        assert!(VocAnnotation::open("annotation.json").is_err());
    }
}
