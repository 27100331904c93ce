//! # gatehouse-core - Core Domain Types
//!
//! Foundation crate for Gatehouse. Provides the error taxonomy, logging setup,
//! login field validation and the passive theme configuration.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Infrastructure error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ### Validation (`validation`)
//! - [`validate_email()`] - Check an email address against [`EMAIL_PATTERN`]
//! - [`validate_password()`] - Check the minimum password length
//! - [`ValidationError`] - Recoverable, user-correctable field errors
//!
//! ### Theme (`theme`)
//! - [`Theme`] - Immutable palette, typography and widget style overrides
//! - [`Rgb`] - A `#rrggbb` colour value
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use gatehouse_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod prelude;
pub mod theme;
pub mod validation;

pub use error::{Error, Result, ResultExt};
pub use theme::{
    FontWeight, HeadingStyle, InputOverride, LabelOverride, Palette, Rgb, Theme, Typography,
    Underline, WidgetOverrides,
};
pub use validation::{
    is_valid_email, validate_email, validate_password, ValidationError, EMAIL_PATTERN,
    MIN_PASSWORD_LEN,
};
