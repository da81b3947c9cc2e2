// SPDX-License-Identifier: MPL-2.0
//! UI: views, interaction state, styles, and design tokens.

pub mod cards;
pub mod design_tokens;
pub mod state;
pub mod status;
pub mod styles;
pub mod summary;
pub mod widgets;
