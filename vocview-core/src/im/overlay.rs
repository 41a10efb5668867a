// Copyright (c) 2025, The vocview developers
// Licensed under the MIT License

use std::collections::{HashMap, HashSet};

use font8x8::{BASIC_FONTS, UnicodeFonts};
use image::{Rgb, RgbImage};

use crate::an::{VocAnnotation, fit_ratio};
use crate::constant;
use crate::error::VocError;
use crate::im::resize_image;

/// An include or exclude filter over class names
#[derive(Debug, Clone, Default)]
pub enum ClassFilter {
    #[default]
    All,
    Include(HashSet<String>),
    Exclude(HashSet<String>),
}

impl ClassFilter {
    /// Build a filter from CLI-style include/exclude lists
    ///
    /// # Arguments
    ///
    /// * `include` - Only draw boxes with these class names
    /// * `exclude` - Draw all boxes except these class names
    pub fn from_lists(include: &[String], exclude: &[String]) -> Result<ClassFilter, VocError> {
        match (include.is_empty(), exclude.is_empty()) {
            (true, true) => Ok(ClassFilter::All),
            (false, true) => Ok(ClassFilter::Include(include.iter().cloned().collect())),
            (true, false) => Ok(ClassFilter::Exclude(exclude.iter().cloned().collect())),
            (false, false) => Err(VocError::StyleError(
                "Include and exclude class filters cannot be combined".to_string(),
            )),
        }
    }

    /// Check whether a class name passes the filter
    pub fn allows(&self, name: &str) -> bool {
        match self {
            ClassFilter::All => true,
            ClassFilter::Include(names) => names.contains(name),
            ClassFilter::Exclude(names) => !names.contains(name),
        }
    }
}

/// Styling options for overlay rendering
#[derive(Debug, Clone)]
pub struct OverlayStyle {
    /// Box line thickness in pixels
    pub thickness: u32,
    /// Integer scale applied to the 8x8 label glyphs
    pub label_scale: u32,
    /// Draw class-name labels near each box
    pub draw_labels: bool,
    /// Optional class-name to display-name mapping
    pub rename: HashMap<String, String>,
    /// Class-name filter applied before drawing
    pub filter: ClassFilter,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            thickness: constant::DEFAULT_BOX_THICKNESS,
            label_scale: constant::DEFAULT_LABEL_SCALE,
            draw_labels: true,
            rename: HashMap::new(),
            filter: ClassFilter::All,
        }
    }
}

/// Deterministic palette color for a class name
///
/// The same class name always maps to the same palette entry so boxes
/// keep their color across images and sessions.
pub fn class_color(name: &str) -> Rgb<u8> {
    let hash = name
        .bytes()
        .fold(5381_u32, |h, b| h.wrapping_mul(33).wrapping_add(b as u32));

    Rgb(constant::BOX_COLOR_PALETTE[hash as usize % constant::BOX_COLOR_PALETTE.len()])
}

/// Draw annotation boxes and labels over a copy of an image
///
/// Box coordinates are expected in the pixel space of `image`. Boxes are
/// clamped to the image bounds; the source image is never mutated.
///
/// # Arguments
///
/// * `image` - Image the annotation refers to
/// * `annotation` - Parsed boxes in the image's pixel space
/// * `style` - Thickness, labels, rename map and class filter
///
/// # Examples
///
/// ```
/// use image::RgbImage;
/// use vocview_core::an::{VocAnnotation, VocBox};
/// use vocview_core::im::{OverlayStyle, render_overlay};
///
/// let image = RgbImage::new(50, 50);
/// let boxes = vec![VocBox::new("car", [5.0, 5.0, 20.0, 30.0]).unwrap()];
/// let annotation = VocAnnotation::new("car.png", 50, 50, boxes);
///
/// let overlaid = render_overlay(&image, &annotation, &OverlayStyle::default());
/// assert_ne!(overlaid, image);
/// ```
pub fn render_overlay(
    image: &RgbImage,
    annotation: &VocAnnotation,
    style: &OverlayStyle,
) -> RgbImage {
    let mut output = image.clone();

    if output.width() == 0 || output.height() == 0 {
        return output;
    }

    for voc_box in annotation.boxes() {
        if !style.filter.allows(voc_box.name()) {
            continue;
        }

        let color = class_color(voc_box.name());
        let [xmin, ymin, xmax, ymax] = voc_box.as_xyxy();

        let x0 = (xmin.round().max(0.0) as u32).min(output.width() - 1);
        let y0 = (ymin.round().max(0.0) as u32).min(output.height() - 1);
        let x1 = (xmax.round().max(0.0) as u32).min(output.width() - 1);
        let y1 = (ymax.round().max(0.0) as u32).min(output.height() - 1);

        draw_box_outline(&mut output, x0, y0, x1, y1, color, style.thickness);

        if style.draw_labels {
            let name = style
                .rename
                .get(voc_box.name())
                .map(String::as_str)
                .unwrap_or(voc_box.name());

            draw_label(&mut output, x0, y0, name, color, style.label_scale);
        }
    }

    output
}

/// Fit an image to a maximum display size and render its overlay
///
/// Applies the same aspect-preserving ratio to the image and the box
/// coordinates before drawing, so overlays land on the same pixels they
/// would occupy at native resolution.
///
/// # Arguments
///
/// * `image` - Image at native resolution
/// * `annotation` - Parsed boxes in native pixel space
/// * `style` - Overlay styling options
/// * `max_width` - Maximum display width (0 disables the bound)
/// * `max_height` - Maximum display height (0 disables the bound)
pub fn render_fitted(
    image: &RgbImage,
    annotation: &VocAnnotation,
    style: &OverlayStyle,
    max_width: u32,
    max_height: u32,
) -> Result<RgbImage, VocError> {
    let ratio = fit_ratio(image.width(), image.height(), max_width, max_height);

    if ratio >= 1.0 {
        return Ok(render_overlay(image, annotation, style));
    }

    let new_width = (image.width() as f32 * ratio).round().max(1.0) as u32;
    let new_height = (image.height() as f32 * ratio).round().max(1.0) as u32;

    let resized = resize_image(image, new_width, new_height)?;

    Ok(render_overlay(&resized, &annotation.scale(ratio), style))
}

/// Draw a hollow rectangle with the thickness growing outward
fn draw_box_outline(
    image: &mut RgbImage,
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
    color: Rgb<u8>,
    thickness: u32,
) {
    let max_x = image.width() - 1;
    let max_y = image.height() - 1;

    for t in 0..thickness.max(1) {
        let tx0 = x0.saturating_sub(t);
        let ty0 = y0.saturating_sub(t);
        let tx1 = (x1 + t).min(max_x);
        let ty1 = (y1 + t).min(max_y);

        for x in tx0..=tx1 {
            image.put_pixel(x, ty0, color);
            image.put_pixel(x, ty1, color);
        }

        for y in ty0..=ty1 {
            image.put_pixel(tx0, y, color);
            image.put_pixel(tx1, y, color);
        }
    }
}

/// Draw a class-name tag anchored to a box's top-left corner
///
/// The tag sits above the corner when there is room and folds inside the
/// box otherwise, matching where annotation viewers place their labels.
fn draw_label(image: &mut RgbImage, x: u32, y: u32, text: &str, color: Rgb<u8>, scale: u32) {
    if text.is_empty() {
        return;
    }

    let scale = scale.max(1);
    let glyph_size = 8 * scale;

    let label_width = glyph_size * text.chars().count() as u32 + 2;
    let label_height = glyph_size + 2;

    let label_y = if y >= label_height { y - label_height } else { y };

    draw_filled_rect(image, x, label_y, label_width, label_height, color);

    draw_bitmap_text(
        image,
        x as i32 + 1,
        label_y as i32 + 1,
        text,
        Rgb(constant::LABEL_TEXT_COLOR),
        scale,
    );
}

fn draw_filled_rect(image: &mut RgbImage, x: u32, y: u32, width: u32, height: u32, color: Rgb<u8>) {
    let x1 = (x + width).min(image.width());
    let y1 = (y + height).min(image.height());

    for yy in y..y1 {
        for xx in x..x1 {
            image.put_pixel(xx, yy, color);
        }
    }
}

/// Rasterize text with the 8x8 bitmap font at an integer scale
fn draw_bitmap_text(image: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>, scale: u32) {
    let scale = scale.max(1) as i32;
    let mut cursor_x = x;

    for ch in text.chars() {
        let Some(glyph) = BASIC_FONTS.get(ch).or_else(|| BASIC_FONTS.get('?')) else {
            cursor_x += 8 * scale;
            continue;
        };

        for (row_idx, row) in glyph.iter().enumerate() {
            let row_bits = *row;

            for col_idx in 0..8 {
                if (row_bits >> col_idx) & 1 == 0 {
                    continue;
                }

                for sy in 0..scale {
                    for sx in 0..scale {
                        let tx = cursor_x + col_idx * scale + sx;
                        let ty = y + row_idx as i32 * scale + sy;

                        if tx >= 0
                            && ty >= 0
                            && (tx as u32) < image.width()
                            && (ty as u32) < image.height()
                        {
                            image.put_pixel(tx as u32, ty as u32, color);
                        }
                    }
                }
            }
        }

        cursor_x += 8 * scale;
    }
}

#[cfg(test)]
mod test {

    use super::*;
    use crate::an::VocBox;

    fn unlabeled_style() -> OverlayStyle {
        OverlayStyle {
            draw_labels: false,
            ..OverlayStyle::default()
        }
    }

    fn black_background(overlaid: &RgbImage) -> usize {
        overlaid.pixels().filter(|p| p.0 == [0, 0, 0]).count()
    }

    #[test]
    fn test_render_draws_each_box() {
        let image = RgbImage::new(100, 100);
        let annotation = VocAnnotation::new(
            "two.png",
            100,
            100,
            vec![
                VocBox::new("car", [10.0, 10.0, 30.0, 30.0]).unwrap(),
                VocBox::new("person", [50.0, 50.0, 90.0, 90.0]).unwrap(),
            ],
        );

        let overlaid = render_overlay(&image, &annotation, &unlabeled_style());

        assert_eq!(overlaid.get_pixel(10, 10), &class_color("car"));
        assert_eq!(overlaid.get_pixel(30, 30), &class_color("car"));
        assert_eq!(overlaid.get_pixel(50, 50), &class_color("person"));
        assert_eq!(overlaid.get_pixel(90, 90), &class_color("person"));

        // Box interiors are untouched
        assert_eq!(overlaid.get_pixel(20, 20).0, [0, 0, 0]);
        assert_eq!(overlaid.get_pixel(70, 70).0, [0, 0, 0]);

        // The source image is not mutated
        assert_eq!(black_background(&image), 100 * 100);
    }

    #[test]
    fn test_render_clamps_out_of_bounds_boxes() {
        let image = RgbImage::new(20, 20);
        let annotation = VocAnnotation::new(
            "edge.png",
            20,
            20,
            vec![VocBox::new("dog", [-5.0, -5.0, 40.0, 40.0]).unwrap()],
        );

        let overlaid = render_overlay(&image, &annotation, &unlabeled_style());

        assert_eq!(overlaid.get_pixel(0, 0), &class_color("dog"));
        assert_eq!(overlaid.get_pixel(19, 19), &class_color("dog"));
    }

    #[test]
    fn test_render_respects_class_filter() {
        let image = RgbImage::new(50, 50);
        let annotation = VocAnnotation::new(
            "filter.png",
            50,
            50,
            vec![
                VocBox::new("car", [5.0, 5.0, 20.0, 20.0]).unwrap(),
                VocBox::new("person", [30.0, 30.0, 45.0, 45.0]).unwrap(),
            ],
        );

        let mut style = unlabeled_style();
        style.filter = ClassFilter::from_lists(&["car".to_string()], &[]).unwrap();

        let overlaid = render_overlay(&image, &annotation, &style);

        assert_eq!(overlaid.get_pixel(5, 5), &class_color("car"));
        assert_eq!(overlaid.get_pixel(30, 30).0, [0, 0, 0]);

        let mut style = unlabeled_style();
        style.filter = ClassFilter::from_lists(&[], &["car".to_string()]).unwrap();

        let overlaid = render_overlay(&image, &annotation, &style);

        assert_eq!(overlaid.get_pixel(5, 5).0, [0, 0, 0]);
        assert_eq!(overlaid.get_pixel(30, 30), &class_color("person"));
    }

    #[test]
    fn test_class_filter_lists() {
        assert!(ClassFilter::from_lists(&[], &[]).is_ok());
        assert!(
            ClassFilter::from_lists(&["car".to_string()], &["person".to_string()]).is_err()
        );

        let filter = ClassFilter::from_lists(&[], &["person".to_string()]).unwrap();
        assert!(filter.allows("car"));
        assert!(!filter.allows("person"));
    }

    #[test]
    fn test_render_empty_annotation_is_identity() {
        let image = RgbImage::from_fn(10, 10, |x, y| Rgb([x as u8, y as u8, 7]));
        let annotation = VocAnnotation::empty(10, 10);

        let overlaid = render_overlay(&image, &annotation, &OverlayStyle::default());
        assert_eq!(overlaid, image);
    }

    #[test]
    fn test_render_labels_paint_tag() {
        let image = RgbImage::new(100, 100);
        let annotation = VocAnnotation::new(
            "label.png",
            100,
            100,
            vec![VocBox::new("cat", [20.0, 40.0, 60.0, 80.0]).unwrap()],
        );

        let overlaid = render_overlay(&image, &annotation, &OverlayStyle::default());

        // The tag background sits directly above the top-left corner
        assert_eq!(overlaid.get_pixel(21, 31), &class_color("cat"));
    }

    #[test]
    fn test_render_fitted_scales_boxes_with_image() {
        let image = RgbImage::new(200, 200);
        let annotation = VocAnnotation::new(
            "fit.png",
            200,
            200,
            vec![VocBox::new("car", [10.0, 20.0, 110.0, 120.0]).unwrap()],
        );

        let overlaid = render_fitted(&image, &annotation, &unlabeled_style(), 100, 100).unwrap();

        assert_eq!(overlaid.width(), 100);
        assert_eq!(overlaid.height(), 100);
        assert_eq!(overlaid.get_pixel(5, 10), &class_color("car"));
        assert_eq!(overlaid.get_pixel(55, 60), &class_color("car"));
    }

    #[test]
    fn test_class_color_deterministic() {
        assert_eq!(class_color("car"), class_color("car"));
    }
}
