//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// The `chrono` format string dates are displayed with (default: `4.7.2021`).
/// Feel free to override it when initing this library.
pub static DATE_FORMAT: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("%-d.%-m.%Y".to_string())));
