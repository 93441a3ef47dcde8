// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! File input/output: background image decoding and PNG export.

pub mod export;
pub mod media;
