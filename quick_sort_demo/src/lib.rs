pub mod config;
pub mod selftest;

pub use config::{Args, Config};
pub use selftest::{
    CheckReport, PartitionReport, partition_values, run, run_check, run_partition_demo,
};
