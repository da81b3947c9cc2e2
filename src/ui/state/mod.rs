// SPDX-License-Identifier: MPL-2.0
//! UI interaction state machines.

pub mod swipe;

pub use swipe::{label_opacities, CardTransform, Completion, ReleaseOutcome, SwipeState};
