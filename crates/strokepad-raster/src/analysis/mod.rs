// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Geometry analysis of foreground pixels.

pub mod geometry;

pub use geometry::{bounding_box, centroid};
