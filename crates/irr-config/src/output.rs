//! Output locations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_comparison_file() -> String {
    "fileComparison.txt".into()
}

fn default_binary_file() -> String {
    "IrrSpreadsheetBinary.csv".into()
}

fn default_text_file() -> String {
    "IrrSpreadsheetText.csv".into()
}

fn default_results_file() -> String {
    "IRR_Results.csv".into()
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Directory all four output files are written into.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Scheme comparison report.
    #[serde(default = "default_comparison_file")]
    pub comparison_file: String,

    /// 0/1 presence table.
    #[serde(default = "default_binary_file")]
    pub binary_file: String,

    /// Excerpt text table.
    #[serde(default = "default_text_file")]
    pub text_file: String,

    /// Krippendorff's alpha results.
    #[serde(default = "default_results_file")]
    pub results_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            comparison_file: default_comparison_file(),
            binary_file: default_binary_file(),
            text_file: default_text_file(),
            results_file: default_results_file(),
        }
    }
}

impl OutputConfig {
    #[must_use]
    pub fn comparison_path(&self) -> PathBuf {
        self.dir.join(&self.comparison_file)
    }

    #[must_use]
    pub fn binary_path(&self) -> PathBuf {
        self.dir.join(&self.binary_file)
    }

    #[must_use]
    pub fn text_path(&self) -> PathBuf {
        self.dir.join(&self.text_file)
    }

    #[must_use]
    pub fn results_path(&self) -> PathBuf {
        self.dir.join(&self.results_file)
    }
}
