// Copyright (c) 2025, The vocview developers
// Licensed under the MIT License

// All currently supported image formats
pub const SUPPORTED_IMAGE_FORMATS: [&str; 12] = [
    "bmp", "dds", "ico", "jpeg", "jpg", "png", "pbm", "pgm", "ppm", "tga", "tif", "tiff",
];

// All currently supported annotation formats
pub const SUPPORTED_ANNOTATION_FORMATS: [&str; 1] = ["xml"];

// Default line thickness (pixels) for drawn bounding boxes
pub const DEFAULT_BOX_THICKNESS: u32 = 2;

// Default integer scale applied to the 8x8 label glyphs
pub const DEFAULT_LABEL_SCALE: u32 = 1;

// Default maximum display size when fitting images for viewing
pub const DEFAULT_MAX_DISPLAY_WIDTH: u32 = 1000;
pub const DEFAULT_MAX_DISPLAY_HEIGHT: u32 = 800;

// Class colors are assigned by hashing the class name into this palette.
// The first entry is the green used by the original single-color viewers.
pub const BOX_COLOR_PALETTE: [[u8; 3]; 12] = [
    [0, 255, 0],
    [255, 64, 64],
    [64, 128, 255],
    [255, 200, 0],
    [255, 0, 255],
    [0, 220, 220],
    [255, 128, 0],
    [128, 64, 255],
    [0, 160, 80],
    [220, 60, 130],
    [150, 200, 50],
    [90, 170, 255],
];

// Label text is always drawn in white over a filled patch of the box color
pub const LABEL_TEXT_COLOR: [u8; 3] = [255, 255, 255];
