// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI panels. Each panel is a plain `show` function that draws itself and
//! returns an action enum; all state mutation happens in `app.rs` when the
//! action is interpreted.

pub mod canvas;
pub mod properties;
pub mod templates;
pub mod toolbar;
