//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::{golden_dir, regout_dir};
use ctlpaint_core::Canvas;
use std::fs;
use std::path::Path;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Generate golden files
    Generate,
    /// Compare with golden files (default)
    #[default]
    Compare,
    /// Display mode - run without comparison
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "generate" => Self::Generate,
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the state of a regression test: the test name, current index,
/// mode, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "border")
    pub test_name: String,
    /// Current test index (incremented before each test)
    index: usize,
    /// Test mode (generate, compare, or display)
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from `REGTEST_MODE`.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        // Ensure directories exist
        let _ = fs::create_dir_all(golden_dir());
        let _ = fs::create_dir_all(regout_dir());

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `expected` and `actual` differ by at most `delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            self.fail(format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Compare two canvases for exact equality
    pub fn compare_canvas(&mut self, canvas1: &Canvas, canvas2: &Canvas) -> bool {
        self.index += 1;

        if canvas1.width() != canvas2.width() || canvas1.height() != canvas2.height() {
            self.fail(format!(
                "Failure in {}_reg: canvas comparison for index {} - dimension mismatch",
                self.test_name, self.index
            ));
            return false;
        }

        let diffs = canvas1
            .data()
            .iter()
            .zip(canvas2.data())
            .filter(|(a, b)| a != b)
            .count();
        if diffs > 0 {
            self.fail(format!(
                "Failure in {}_reg: canvas comparison for index {} - {} pixels differ",
                self.test_name, self.index, diffs
            ));
            return false;
        }
        true
    }

    /// Compare two binary data arrays
    pub fn compare_strings(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;

        if data1 != data2 {
            self.fail(format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 sizes: {} vs {}",
                self.test_name,
                self.index,
                data1.len(),
                data2.len()
            ));
            false
        } else {
            true
        }
    }

    /// Write a canvas to the regout directory as PNG and check it against
    /// its golden counterpart.
    ///
    /// In generate mode, copies the file to golden. In compare mode,
    /// compares with the golden file; a missing golden file is a failure.
    /// In display mode, only writes the local file.
    pub fn write_canvas_and_check(&mut self, canvas: &Canvas) -> TestResult<()> {
        self.index += 1;

        let local_path = format!(
            "{}/{}.{:02}.png",
            regout_dir(),
            self.test_name,
            self.index
        );
        ctlpaint_io::write_canvas(canvas, &local_path).map_err(|e| TestError::CanvasWrite {
            path: local_path.clone(),
            message: e.to_string(),
        })?;

        self.check_file(&local_path)
    }

    /// Check a file against its golden counterpart
    fn check_file(&mut self, local_path: &str) -> TestResult<()> {
        let ext = Path::new(local_path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        let golden_path = format!(
            "{}/{}_golden.{:02}.{}",
            golden_dir(),
            self.test_name,
            self.index,
            ext
        );

        match self.mode {
            RegTestMode::Generate => {
                fs::copy(local_path, &golden_path)?;
                eprintln!("Generated: {}", golden_path);
            }
            RegTestMode::Compare => {
                if !Path::new(&golden_path).exists() {
                    self.fail(format!(
                        "Failure in {}_reg: golden file not found: {}",
                        self.test_name, golden_path
                    ));
                    return Ok(());
                }

                let local_data = fs::read(local_path)?;
                let golden_data = fs::read(&golden_path)?;
                // Encoders may differ in compression; fall back to pixels
                if local_data != golden_data && !Self::same_pixels(local_path, &golden_path) {
                    self.fail(format!(
                        "Failure in {}_reg, index {}: comparing {} with {}",
                        self.test_name, self.index, local_path, golden_path
                    ));
                }
            }
            RegTestMode::Display => {}
        }

        Ok(())
    }

    /// Compare two image files pixel-by-pixel
    fn same_pixels(path1: &str, path2: &str) -> bool {
        match (
            ctlpaint_io::read_canvas(path1),
            ctlpaint_io::read_canvas(path2),
        ) {
            (Ok(a), Ok(b)) => {
                a.width() == b.width() && a.height() == b.height() && a.data() == b.data()
            }
            _ => false,
        }
    }

    /// Write a canvas to the regout directory for visual inspection only.
    ///
    /// Returns the path written. Nothing is compared.
    pub fn write_canvas(&self, canvas: &Canvas, name: &str) -> TestResult<String> {
        let path = format!("{}/{}.{}.png", regout_dir(), self.test_name, name);
        ctlpaint_io::write_canvas(canvas, &path).map_err(|e| TestError::CanvasWrite {
            path: path.clone(),
            message: e.to_string(),
        })?;
        Ok(path)
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all checks passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctlpaint_core::Color;

    #[test]
    fn test_mode_from_env() {
        // Can't safely mutate the env var here; just check the result is valid
        let mode = RegTestMode::from_env();
        assert!(matches!(
            mode,
            RegTestMode::Compare | RegTestMode::Generate | RegTestMode::Display
        ));
    }

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
        assert_eq!(rp.index(), 1);
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 102.0, 1.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_canvas() {
        let mut rp = RegParams::new("test");
        let a = Canvas::new(3, 3).unwrap();
        let mut b = a.clone();
        assert!(rp.compare_canvas(&a, &b));
        b.set_pixel(1, 1, Color::RED).unwrap();
        assert!(!rp.compare_canvas(&a, &b));
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_missing_golden_fails_in_compare_mode() {
        let mut rp = RegParams::new("missing_golden_check");
        if rp.mode != RegTestMode::Compare {
            return;
        }
        let canvas = Canvas::filled(2, 2, Color::BLUE).unwrap();
        rp.write_canvas_and_check(&canvas).unwrap();
        assert!(!rp.is_success());
        assert!(rp.failures()[0].contains("golden file not found"));
    }

    #[test]
    fn test_display_write_skips_comparison() {
        let rp = RegParams::new("display_write");
        let canvas = Canvas::filled(2, 2, Color::GREEN).unwrap();
        let path = rp.write_canvas(&canvas, "scratch").unwrap();
        assert!(Path::new(&path).exists());
        assert!(rp.is_success());
        assert_eq!(rp.index(), 0);
    }
}
