use anyhow::Result;
use qsorts::verify::{check_partition, first_mismatch, is_permutation_of, is_sorted_by};
use qsorts::{Order, partition_by, sort_with};

use crate::config::{Args, Config, PARTITION_SAMPLE};

/// Outcome of sorting the configured values.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    pub input: Vec<i32>,
    pub output: Vec<i32>,
    pub expected: Vec<i32>,
    pub mismatch: Option<usize>,
    pub sorted: bool,
    pub permutation: bool,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.mismatch.is_none()
    }
}

/// Sort a copy of `config.values` and compare it element-wise with the reference.
pub fn run_check(config: &Config) -> CheckReport {
    let expected = config.reference();
    let mut output = config.values.clone();
    sort_with(&mut output, &config.options());

    CheckReport {
        mismatch: first_mismatch(&output, &expected),
        sorted: is_sorted_by(&output, config.order),
        permutation: is_permutation_of(&output, &config.values),
        input: config.values.clone(),
        output,
        expected,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PartitionReport {
    pub before: Vec<i32>,
    pub after: Vec<i32>,
    pub pivot_index: usize,
    pub holds: bool,
}

/// Run one partition over the whole of `values`. `None` for an empty input.
pub fn run_partition_demo(values: &[i32], order: Order) -> Option<PartitionReport> {
    let last = values.len().checked_sub(1)?;
    let mut after = values.to_vec();
    let pivot_index = partition_by(&mut after, 0, last, order);

    Some(PartitionReport {
        holds: check_partition(&after, 0, last, pivot_index, order),
        before: values.to_vec(),
        after,
        pivot_index,
    })
}

/// Values walked through by `--show-partition`: the configured ones when the
/// user gave any, the partition sample otherwise.
pub fn partition_values(config: &Config) -> &[i32] {
    if config.values_supplied {
        &config.values
    } else {
        &PARTITION_SAMPLE
    }
}

/// Run the self-test described by `args` and print the report.
///
/// Returns `Ok(false)` when the sorted output does not match the expectation.
pub fn run(args: &Args) -> Result<bool> {
    let config = Config::load(args)?;
    tracing::debug!(?config, "loaded configuration");

    if args.show_partition {
        print_partition(partition_values(&config), config.order);
    }

    println!("Testing quick_sort: ");
    let report = run_check(&config);

    if report.passed() {
        println!("quick_sort succeeded.");
        return Ok(true);
    }

    if let Some(index) = report.mismatch {
        eprintln!("  input:    {:?}", report.input);
        eprintln!("  output:   {:?}", report.output);
        eprintln!("  expected: {:?}", report.expected);
        eprintln!("  first mismatch at index {}", index);
    }
    if !report.sorted {
        tracing::warn!(order = %config.order, "output is not sorted");
    }
    if !report.permutation {
        tracing::warn!("output is not a permutation of the input");
    }
    println!("quick_sort failed.");
    Ok(false)
}

fn print_partition(values: &[i32], order: Order) {
    println!("testing partition: ");
    match run_partition_demo(values, order) {
        Some(report) => {
            println!(
                "Before partition: {:?}  pivot index = {}",
                report.before,
                report.before.len() - 1
            );
            println!(
                "After partition:  {:?}  pivot index = {}",
                report.after, report.pivot_index
            );
            if report.holds {
                println!("partition invariant holds.");
            } else {
                println!("partition invariant violated.");
            }
        }
        None => println!("nothing to partition."),
    }
    println!();
}
