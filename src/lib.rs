// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! PIXR - A retro-styled thumbnail editor.
//!
//! Core library: the editor state model, the CPU compositor and file io.
//! The egui desktop shell lives in [`app`] and is booted by the binary.

pub mod app;
pub mod io;
pub mod models;
pub mod render;
pub mod ui;

pub use models::editor::EditorState;
pub use models::geometry::AspectRatio;
pub use models::text_layer::{LayerId, TextLayer, TextPatch};
pub use render::{compose, FontLibrary};
