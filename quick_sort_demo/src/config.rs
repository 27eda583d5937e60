use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use qsorts::{DEFAULT_PARALLEL_THRESHOLD, Order, SortOptions, Strategy};
use serde::Deserialize;

/// Sample sorted by a plain `quick_sort` run.
pub const SAMPLE_VALUES: [i32; 9] = [6, 8, 4, 2, 5, 1, 9, 3, 7];
/// `SAMPLE_VALUES` in descending order.
pub const SAMPLE_EXPECTED: [i32; 9] = [9, 8, 7, 6, 5, 4, 3, 2, 1];

/// Sample used by `--show-partition` when no values are given.
pub const PARTITION_SAMPLE: [i32; 8] = [2, 8, 7, 1, 3, 5, 6, 4];

/// Command-line flags. Every flag overrides the matching key of `--config`.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "quick_sort")]
#[command(about = "Sort a sample with quick sort and check the result")]
pub struct Args {
    /// TOML file with `values`, `expected`, `order`, `strategy`, `parallel_threshold`
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Comma-separated values to sort
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub values: Option<Vec<i32>>,

    /// Comma-separated expected result (default: computed with the std sort)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub expected: Option<Vec<i32>>,

    /// Sort order: descending or ascending
    #[arg(long)]
    pub order: Option<Order>,

    /// Sort strategy: recursive, bounded or parallel
    #[arg(long)]
    pub strategy: Option<Strategy>,

    /// Ranges at or below this length are sorted sequentially by the parallel strategy
    #[arg(long)]
    pub parallel_threshold: Option<usize>,

    /// Also run a single partition and print the sequence before and after
    #[arg(long)]
    pub show_partition: bool,
}

/// Keys accepted in the TOML file. All of them are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    values: Option<Vec<i32>>,
    expected: Option<Vec<i32>>,
    order: Option<Order>,
    strategy: Option<Strategy>,
    parallel_threshold: Option<usize>,
}

/// Resolved self-test configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub values: Vec<i32>,
    /// False while `values` is still the built-in sample.
    pub values_supplied: bool,
    /// When `None` the reference result is computed with the std sort in `order`.
    pub expected: Option<Vec<i32>>,
    pub order: Order,
    pub strategy: Strategy,
    pub parallel_threshold: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            values: SAMPLE_VALUES.to_vec(),
            values_supplied: false,
            expected: None,
            order: Order::Descending,
            strategy: Strategy::Recursive,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl Config {
    /// Build the configuration from defaults, then the `--config` file, then flags.
    pub fn load(args: &Args) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_args(args);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        let mut config = Self::default();

        // New values without an expectation fall back to the std sort.
        if let Some(values) = file.values {
            config.values = values;
            config.values_supplied = true;
            config.expected = None;
        }
        if file.expected.is_some() {
            config.expected = file.expected;
        }
        if let Some(order) = file.order {
            config.order = order;
        }
        if let Some(strategy) = file.strategy {
            config.strategy = strategy;
        }
        if let Some(threshold) = file.parallel_threshold {
            config.parallel_threshold = threshold;
        }
        Ok(config)
    }

    fn apply_args(&mut self, args: &Args) {
        if let Some(values) = &args.values {
            self.values = values.clone();
            self.values_supplied = true;
            self.expected = None;
        }
        if let Some(expected) = &args.expected {
            self.expected = Some(expected.clone());
        }
        if let Some(order) = args.order {
            self.order = order;
        }
        if let Some(strategy) = args.strategy {
            self.strategy = strategy;
        }
        if let Some(threshold) = args.parallel_threshold {
            self.parallel_threshold = threshold;
        }
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if let Some(expected) = &self.expected {
            if expected.len() != self.values.len() {
                anyhow::bail!(
                    "expected has {} values but values has {}",
                    expected.len(),
                    self.values.len()
                );
            }
        }

        if self.parallel_threshold == 0 {
            anyhow::bail!("parallel_threshold must be greater than 0");
        }

        Ok(())
    }

    pub fn options(&self) -> SortOptions {
        SortOptions {
            order: self.order,
            strategy: self.strategy,
            parallel_threshold: self.parallel_threshold,
        }
    }

    /// The result the sort is checked against.
    pub fn reference(&self) -> Vec<i32> {
        match &self.expected {
            Some(expected) => expected.clone(),
            None => {
                let mut reference = self.values.clone();
                match self.order {
                    Order::Descending => reference.sort_unstable_by(|a, b| b.cmp(a)),
                    Order::Ascending => reference.sort_unstable(),
                }
                reference
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.reference(), SAMPLE_EXPECTED.to_vec());
        assert_eq!(config.options(), SortOptions::default());
        assert!(!config.values_supplied);
    }

    #[test]
    fn test_order_without_expected_uses_same_order() {
        let args = Args::parse_from(["quick_sort", "--order", "ascending"]);
        let config = Config::load(&args).unwrap();
        assert_eq!(config.expected, None);
        assert_eq!(config.reference(), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);

        let config = Config::from_toml_str("order = \"ascending\"").unwrap();
        assert_eq!(config.reference(), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert!(!config.values_supplied);
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        config.expected = Some(vec![1, 2]);
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.parallel_threshold = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_toml_str() {
        let config = Config::from_toml_str(
            r#"
            values = [8, 10, 43, 123, 635, 92, 1, 99, 32, 10]
            order = "ascending"
            strategy = "bounded"
            "#,
        )
        .unwrap();

        assert_eq!(config.order, Order::Ascending);
        assert_eq!(config.strategy, Strategy::Bounded);
        assert_eq!(config.expected, None);
        assert!(config.values_supplied);
        assert_eq!(config.reference(), vec![1, 8, 10, 10, 32, 43, 92, 99, 123, 635]);
    }

    #[test]
    fn test_from_toml_str_rejects_unknown_keys() {
        assert!(Config::from_toml_str("pivot = \"median\"").is_err());
        assert!(Config::from_toml_str("order = \"sideways\"").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "values = [5, 3, 5, 1, 5]").unwrap();
        writeln!(file, "expected = [5, 5, 5, 3, 1]").unwrap();
        writeln!(file, "strategy = \"parallel\"").unwrap();
        writeln!(file, "parallel_threshold = 2").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.values, vec![5, 3, 5, 1, 5]);
        assert_eq!(config.expected, Some(vec![5, 5, 5, 3, 1]));
        assert_eq!(config.strategy, Strategy::Parallel);
        assert_eq!(config.parallel_threshold, 2);
    }

    #[test]
    fn test_from_missing_file() {
        let err = Config::from_file("/nonexistent/quick_sort.toml").unwrap_err();
        assert!(format!("{:#}", err).contains("failed to read config file"));
    }

    #[test]
    fn test_args_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "values = [1, 2, 3]").unwrap();
        writeln!(file, "order = \"ascending\"").unwrap();

        let args = Args::parse_from([
            "quick_sort",
            "--config",
            file.path().to_str().unwrap(),
            "--order",
            "descending",
            "--values=-4,7,0",
        ]);
        let config = Config::load(&args).unwrap();
        assert_eq!(config.values, vec![-4, 7, 0]);
        assert_eq!(config.order, Order::Descending);
        assert_eq!(config.reference(), vec![7, 0, -4]);
    }
}
