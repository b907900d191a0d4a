// File: crates/benchplot/src/config.rs
// Summary: Command line surface and the resolved run configuration.

use std::path::{Path, PathBuf};

use benchplot_core::{theme, Insets, RenderOptions};
use clap::{ArgAction, Parser};

/// Result files of the reference allocator run, with their legend labels.
pub const REFERENCE_SERIES: [(&str, &str); 4] = [
    ("Single Pool", "PoolAllocator-vector.txt"),
    ("Single Pool (diff chunks)", "PoolAllocator-sizeof4-vector.txt"),
    ("Pool Manager", "PoolManager-vector.txt"),
    ("STL", "stl-allocator-vector.txt"),
];

pub const DEFAULT_INPUT_DIR: &str = "stress-tests";
pub const DEFAULT_OUTPUT: &str = "Allocators-vector.png";
pub const DEFAULT_TITLE: &str = "Allocators with vector";
pub const DEFAULT_X_LABEL: &str = "PushBacks";
pub const DEFAULT_Y_LABEL: &str = "Seconds";

/// One `LABEL=FILE` argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeriesSpec {
    pub label: String,
    pub file: PathBuf,
}

impl SeriesSpec {
    pub fn new(label: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self { label: label.into(), file: file.into() }
    }

    /// `file` joined onto `dir` unless it is already absolute.
    pub fn resolve(&self, dir: &Path) -> Self {
        let file = if self.file.is_absolute() { self.file.clone() } else { dir.join(&self.file) };
        Self { label: self.label.clone(), file }
    }
}

fn parse_series_spec(raw: &str) -> Result<SeriesSpec, String> {
    match raw.split_once('=') {
        Some((label, file)) if !label.trim().is_empty() && !file.trim().is_empty() => {
            Ok(SeriesSpec::new(label.trim(), file.trim()))
        }
        _ => Err(format!("expected LABEL=FILE, got {raw:?}")),
    }
}

#[derive(Debug, Parser)]
#[command(name = "benchplot", version, about = "Plot allocator benchmark timings as one comparison chart")]
pub struct Cli {
    /// Directory holding the harness result files.
    #[arg(long, default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    /// Series to plot as LABEL=FILE, in legend order (repeatable).
    /// Replaces the four reference allocator variants when given.
    #[arg(long = "series", value_name = "LABEL=FILE", value_parser = parse_series_spec)]
    pub series: Vec<SeriesSpec>,

    /// Image to write; the format follows the extension (.png, .jpg).
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    #[arg(long, default_value = DEFAULT_X_LABEL)]
    pub x_label: String,

    #[arg(long, default_value = DEFAULT_Y_LABEL)]
    pub y_label: String,

    #[arg(long, default_value_t = benchplot_core::types::WIDTH as u32, value_parser = clap::value_parser!(u32).range(200..=8192))]
    pub width: u32,

    #[arg(long, default_value_t = benchplot_core::types::HEIGHT as u32, value_parser = clap::value_parser!(u32).range(150..=8192))]
    pub height: u32,

    #[arg(long, default_value = "light", value_parser = ["light", "dark"])]
    pub theme: String,

    /// Open the chart in a window after writing it (blocks until closed).
    #[arg(long)]
    pub show: bool,

    /// Raise log verbosity (RUST_LOG overrides).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Everything one run needs, with paths already resolved.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub series: Vec<SeriesSpec>,
    pub output: PathBuf,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub render: RenderOptions,
    pub show: bool,
}

impl RunConfig {
    /// The reference allocator comparison read from `input_dir`.
    pub fn reference(input_dir: impl AsRef<Path>) -> Self {
        let dir = input_dir.as_ref();
        Self {
            series: REFERENCE_SERIES.iter().map(|(label, file)| SeriesSpec::new(*label, dir.join(file))).collect(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            title: DEFAULT_TITLE.to_string(),
            x_label: DEFAULT_X_LABEL.to_string(),
            y_label: DEFAULT_Y_LABEL.to_string(),
            render: RenderOptions::default(),
            show: false,
        }
    }

    /// First label that names more than one series, if any.
    pub fn duplicate_label(&self) -> Option<&str> {
        self.series
            .iter()
            .enumerate()
            .find(|(i, s)| self.series[..*i].iter().any(|prev| prev.label == s.label))
            .map(|(_, s)| s.label.as_str())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::reference(DEFAULT_INPUT_DIR)
    }
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        let series = if cli.series.is_empty() {
            REFERENCE_SERIES.iter().map(|(label, file)| SeriesSpec::new(*label, *file)).collect()
        } else {
            cli.series
        };
        Self {
            series: series.iter().map(|s| s.resolve(&cli.input_dir)).collect(),
            output: cli.output,
            title: cli.title,
            x_label: cli.x_label,
            y_label: cli.y_label,
            render: RenderOptions {
                width: cli.width as i32,
                height: cli.height as i32,
                insets: Insets::default(),
                theme: theme::find(&cli.theme).unwrap_or_default(),
                draw_labels: true,
            },
            show: cli.show,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_spec_parsing() {
        assert_eq!(parse_series_spec("STL=stl.txt"), Ok(SeriesSpec::new("STL", "stl.txt")));
        assert_eq!(
            parse_series_spec("Single Pool (diff chunks) = a b.txt"),
            Ok(SeriesSpec::new("Single Pool (diff chunks)", "a b.txt"))
        );
        assert!(parse_series_spec("no-separator").is_err());
        assert!(parse_series_spec("=file.txt").is_err());
        assert!(parse_series_spec("label=").is_err());
    }

    #[test]
    fn relative_files_join_input_dir() {
        let spec = SeriesSpec::new("STL", "stl.txt").resolve(Path::new("runs"));
        assert_eq!(spec.file, Path::new("runs").join("stl.txt"));
    }

    #[test]
    fn absolute_files_are_kept() {
        let abs = std::env::temp_dir().join("stl.txt");
        let spec = SeriesSpec::new("STL", &abs).resolve(Path::new("runs"));
        assert_eq!(spec.file, abs);
    }

    #[test]
    fn duplicate_labels_are_found() {
        let mut cfg = RunConfig::reference("runs");
        assert_eq!(cfg.duplicate_label(), None);
        cfg.series.push(SeriesSpec::new("STL", "other.txt"));
        assert_eq!(cfg.duplicate_label(), Some("STL"));
    }
}
