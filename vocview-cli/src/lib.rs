// Copyright (c) 2025, The vocview developers
// Licensed under the MIT License

pub mod browse;
pub mod pairs;
pub mod pick;
pub mod render;
pub mod style;
pub mod view;
