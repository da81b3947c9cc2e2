// SPDX-License-Identifier: MPL-2.0
//! `catdeck` is a card-swiping cat rater built with the Iced GUI framework.
//!
//! It fetches a batch of cat images from the Cataas API, deals them out as a
//! draggable card stack, and collects accept/reject verdicts into a summary.

pub mod app;
pub mod deck;
pub mod error;
pub mod i18n;
pub mod source;
pub mod ui;
