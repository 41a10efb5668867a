// Copyright (c) 2025, The vocview developers
// Licensed under the MIT License

use std::path::Path;

use fast_image_resize::{FilterType, PixelType, images::Image};
use image::{DynamicImage, RgbImage, open as open_dynamic};

use crate::constant;
use crate::error::VocError;

/// Open an image from the provided path as an 8-bit RGB buffer
///
/// # Arguments
///
/// * `path` - A path to an image with a valid extension
///
/// # Examples
///
/// ```no_run
/// use vocview_core::im::open_image;
/// let image = open_image("images/000001.jpg");
/// ```
pub fn open_image<P: AsRef<Path>>(path: P) -> Result<RgbImage, VocError> {
    let extension = path
        .as_ref()
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());

    if let Some(ext) = extension {
        if constant::SUPPORTED_IMAGE_FORMATS.iter().any(|e| e == &ext) {
            if let Ok(image) = open_dynamic(&path) {
                return Ok(image.to_rgb8());
            }

            return Err(VocError::ImageReadError);
        }
    }

    Err(VocError::ImageExtensionError)
}

/// Resize an RGB image with SIMD-accelerated bilinear interpolation
///
/// # Arguments
///
/// * `image` - Source image
/// * `new_width` - New width following resizing
/// * `new_height` - New height following resizing
pub fn resize_image(
    image: &RgbImage,
    new_width: u32,
    new_height: u32,
) -> Result<RgbImage, VocError> {
    if new_width == 0 || new_height == 0 {
        return Err(VocError::OtherError(
            "Resize dimensions must be non-zero".to_string(),
        ));
    }

    if new_width == image.width() && new_height == image.height() {
        return Ok(image.clone());
    }

    let source = DynamicImage::ImageRgb8(image.clone());
    let mut destination = Image::new(new_width, new_height, PixelType::U8x3);

    let mut resizer = fast_image_resize::Resizer::new();
    let option = fast_image_resize::ResizeOptions {
        algorithm: fast_image_resize::ResizeAlg::Convolution(FilterType::Bilinear),
        cropping: fast_image_resize::SrcCropping::None,
        mul_div_alpha: false,
    };

    resizer.resize(&source, &mut destination, &option).unwrap();

    RgbImage::from_raw(new_width, new_height, destination.into_vec()).ok_or(
        VocError::OtherError("Resized buffer did not match output size".to_string()),
    )
}

#[cfg(test)]
mod test {

    use super::*;
    use image::Rgb;

    #[test]
    fn test_open_missing_image() {
        let image = open_image("does_not_exist/missing.png");
        assert!(matches!(image, Err(VocError::ImageReadError)));
    }

    #[test]
    fn test_open_invalid_extension() {
        let image = open_image("annotation.xml");
        assert!(matches!(image, Err(VocError::ImageExtensionError)));
    }

    #[test]
    fn test_open_written_image() {
        let path = std::env::temp_dir().join("TEST_OPEN_IMAGE.png");

        let image = RgbImage::from_pixel(4, 6, Rgb([1, 2, 3]));
        image.save(&path).unwrap();

        let reloaded = open_image(&path).unwrap();
        assert_eq!(reloaded.width(), 4);
        assert_eq!(reloaded.height(), 6);
        assert_eq!(reloaded.get_pixel(0, 0), &Rgb([1, 2, 3]));

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_resize_dimensions() {
        let image = RgbImage::from_pixel(10, 10, Rgb([100, 150, 200]));

        let downsampled = resize_image(&image, 3, 4).unwrap();
        assert_eq!(downsampled.width(), 3);
        assert_eq!(downsampled.height(), 4);

        let upsampled = resize_image(&image, 23, 24).unwrap();
        assert_eq!(upsampled.width(), 23);
        assert_eq!(upsampled.height(), 24);

        // Constant images stay constant under bilinear resizing
        assert_eq!(downsampled.get_pixel(1, 1), &Rgb([100, 150, 200]));
    }

    #[test]
    fn test_resize_noop() {
        let image = RgbImage::from_pixel(5, 5, Rgb([9, 9, 9]));
        let resized = resize_image(&image, 5, 5).unwrap();
        assert_eq!(image, resized);
    }

    #[test]
    fn test_resize_zero_dimension() {
        let image = RgbImage::new(5, 5);
        assert!(resize_image(&image, 0, 5).is_err());
    }
}
