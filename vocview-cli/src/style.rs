// Copyright (c) 2025, The vocview developers
// Licensed under the MIT License

use std::collections::HashMap;

use clap::Args;

use vocview_core::constant;
use vocview_core::error::VocError;
use vocview_core::im::{ClassFilter, OverlayStyle};

/// Overlay styling flags shared by the render, view and browse commands
#[derive(Debug, Args)]
pub struct StyleArgs {
    #[arg(
        long,
        help = "Box line thickness in pixels.",
        default_value_t = constant::DEFAULT_BOX_THICKNESS
    )]
    pub thickness: u32,

    #[arg(
        long,
        help = "Integer scale applied to label text.",
        default_value_t = constant::DEFAULT_LABEL_SCALE
    )]
    pub label_scale: u32,

    #[arg(long, help = "Hide class-name labels.")]
    pub no_labels: bool,

    #[arg(long, help = "Only draw boxes with this class name (repeatable).")]
    pub include: Vec<String>,

    #[arg(long, help = "Skip boxes with this class name (repeatable).")]
    pub exclude: Vec<String>,

    #[arg(long, help = "JSON file mapping class names to display names.")]
    pub rename: Option<String>,

    #[arg(
        long,
        help = "Maximum display width (0 keeps native size).",
        default_value_t = constant::DEFAULT_MAX_DISPLAY_WIDTH
    )]
    pub max_width: u32,

    #[arg(
        long,
        help = "Maximum display height (0 keeps native size).",
        default_value_t = constant::DEFAULT_MAX_DISPLAY_HEIGHT
    )]
    pub max_height: u32,
}

impl StyleArgs {
    /// Build the overlay style, loading the rename map if one was given
    pub fn overlay_style(&self) -> Result<OverlayStyle, VocError> {
        let rename: HashMap<String, String> = match &self.rename {
            Some(path) => {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| VocError::NoFileError(err.to_string()))?;

                serde_json::from_str(&contents)
                    .map_err(|err| VocError::StyleError(format!("Invalid rename map: {}", err)))?
            }
            None => HashMap::new(),
        };

        Ok(OverlayStyle {
            thickness: self.thickness,
            label_scale: self.label_scale,
            draw_labels: !self.no_labels,
            rename,
            filter: ClassFilter::from_lists(&self.include, &self.exclude)?,
        })
    }
}
