// Copyright (c) 2025, The vocview developers
// Licensed under the MIT License

pub mod an;
pub mod constant;
pub mod ds;
pub mod error;
pub mod im;
pub mod ut;
