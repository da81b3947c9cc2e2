// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Localization uses the Fluent system with `.ftl` files embedded into the
//! binary. The locale is resolved from an explicit override first, then the
//! OS locale, then `en-US`.

pub mod fluent;

pub use fluent::I18n;
