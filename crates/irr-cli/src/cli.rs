use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Output mode for the run summary printed on stdout.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Raw,
}

/// Flags shared by the pipeline, UI and output helpers.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
}

/// Top-level CLI parser for the `irr` binary.
#[derive(Debug, Parser)]
#[command(
    name = "irr",
    version,
    about = "Reconcile two coders' exports and compute Krippendorff's alpha"
)]
pub struct Cli {
    /// Config file (defaults to ./irr.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Coder 1 export file; repeat for several batches
    #[arg(long = "coder1", value_name = "FILE")]
    pub coder1: Vec<PathBuf>,

    /// Coder 2 export file, paired by position with --coder1
    #[arg(long = "coder2", value_name = "FILE")]
    pub coder2: Vec<PathBuf>,

    /// Directory the four output files are written into
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Summary format: json, raw
    #[arg(short, long, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (no summary, errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, OutputFormat};

    #[test]
    fn clap_command_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn repeated_coder_flags_keep_order() {
        let cli = Cli::try_parse_from([
            "irr",
            "--coder1",
            "b1_c1.json",
            "--coder2",
            "b1_c2.json",
            "--coder1",
            "b2_c1.json",
            "--coder2",
            "b2_c2.json",
        ])
        .expect("cli should parse");

        assert_eq!(
            cli.coder1,
            vec![PathBuf::from("b1_c1.json"), PathBuf::from("b2_c1.json")]
        );
        assert_eq!(
            cli.coder2,
            vec![PathBuf::from("b1_c2.json"), PathBuf::from("b2_c2.json")]
        );
    }

    #[test]
    fn defaults_without_flags() {
        let cli = Cli::try_parse_from(["irr"]).expect("cli should parse");
        assert!(cli.config.is_none());
        assert!(cli.coder1.is_empty());
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(!cli.quiet);
    }

    #[test]
    fn format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["irr", "--format", "xml"]).is_err());
    }

    #[test]
    fn global_flags_copy_values() {
        let cli = Cli::try_parse_from(["irr", "-q", "--format", "raw", "-o", "out"])
            .expect("cli should parse");
        let flags = cli.global_flags();
        assert!(flags.quiet);
        assert_eq!(flags.format, OutputFormat::Raw);
        assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
    }
}
