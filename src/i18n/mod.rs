// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Translation files are embedded in the binary; the active locale is resolved
//! from the command line, then the config file, then the operating system.

pub mod fluent;
