// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for the editor: aspect-ratio geometry, text layers,
//! style templates and the session state store.

pub mod editor;
pub mod geometry;
pub mod template;
pub mod text_layer;
