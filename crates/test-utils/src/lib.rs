//! Test support for the landsat calibration crates.
//!
//! - [`MtlBuilder`] renders synthetic scene metadata
//! - [`generators`] produces DN rasters with known layouts
//! - [`fixtures`] holds reference coefficients and closed-form expectations
//! - [`paths`] finds the committed sample scene
//!
//! Pulled in as a dev-dependency only:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod fixtures;
pub mod generators;
pub mod mtl;
pub mod paths;

pub use fixtures::*;
pub use generators::*;
pub use mtl::MtlBuilder;
pub use paths::*;

use std::sync::Once;

static TRACING: Once = Once::new();

/// Route `tracing` output through the test harness, once per test binary.
///
/// `RUST_LOG` wins when set; otherwise the extractor and converter log at debug.
pub fn init_test_tracing() {
    TRACING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("mtl_parser=debug,radiometry=debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Resolve a fixture path or skip the calling test.
///
/// Expands to the fixture's `PathBuf`. When the file is missing it prints a
/// notice and returns from the enclosing `()`-returning test.
///
/// ```ignore
/// let path = test_utils::require_test_file!("LC08_L1TP_sample_MTL.txt");
/// ```
#[macro_export]
macro_rules! require_test_file {
    ($name:expr) => {{
        let name = $name;
        let Some(path) = $crate::find_test_file(name) else {
            eprintln!("skipping: fixture '{}' not found (set {})", name, $crate::TEST_DATA_ENV);
            return;
        };
        path
    }};
}

/// Assert that two numbers are within `tol` of each other.
///
/// Both sides are widened to `f64`. NaN on either side always fails.
///
/// ```ignore
/// test_utils::assert_approx_eq!(bt.get([0, 0]).unwrap(), 21.4, 1e-6);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($actual:expr, $expected:expr, $tol:expr) => {{
        let (actual, expected, tol) = ($actual as f64, $expected as f64, $tol as f64);
        let delta = (actual - expected).abs();
        assert!(
            delta <= tol,
            "assertion failed: {} ≈ {} (|Δ| = {:e}, tolerance {:e})",
            actual,
            expected,
            delta,
            tol
        );
    }};
}
