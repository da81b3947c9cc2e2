// SPDX-License-Identifier: MPL-2.0
//! Custom widgets.

pub mod loading_wheel;

pub use loading_wheel::LoadingWheel;
