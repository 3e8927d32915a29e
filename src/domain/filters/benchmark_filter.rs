//! Execution time benchmark filter implementation.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Deserialize;
use tracing::debug;

use super::{CallFilter, FilterChain};
use crate::domain::{Call, CallError, Command, CommandResult};

/// Time unit for thresholds and reported durations, ordered fine to coarse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    #[default]
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    /// Duration of `amount` units, saturating on overflow.
    pub fn to_duration(self, amount: u64) -> Duration {
        match self {
            TimeUnit::Nanoseconds => Duration::from_nanos(amount),
            TimeUnit::Microseconds => Duration::from_micros(amount),
            TimeUnit::Milliseconds => Duration::from_millis(amount),
            TimeUnit::Seconds => Duration::from_secs(amount),
            TimeUnit::Minutes => Duration::from_secs(amount.saturating_mul(60)),
            TimeUnit::Hours => Duration::from_secs(amount.saturating_mul(60 * 60)),
            TimeUnit::Days => Duration::from_secs(amount.saturating_mul(24 * 60 * 60)),
        }
    }

    /// Whole units contained in `duration`, truncating.
    pub fn convert(self, duration: Duration) -> u64 {
        let nanos = duration.as_nanos();
        let per_unit: u128 = match self {
            TimeUnit::Nanoseconds => 1,
            TimeUnit::Microseconds => 1_000,
            TimeUnit::Milliseconds => 1_000_000,
            TimeUnit::Seconds => 1_000_000_000,
            TimeUnit::Minutes => 60 * 1_000_000_000,
            TimeUnit::Hours => 60 * 60 * 1_000_000_000,
            TimeUnit::Days => 24 * 60 * 60 * 1_000_000_000,
        };
        u64::try_from(nanos / per_unit).unwrap_or(u64::MAX)
    }

    /// Lowercase unit name.
    pub fn as_str(self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "nanoseconds",
            TimeUnit::Microseconds => "microseconds",
            TimeUnit::Milliseconds => "milliseconds",
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Benchmark filter settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Measure calls at all
    pub active: bool,

    /// Report calls slower than this many `threshold_unit`s
    pub threshold: u64,

    /// Unit of `threshold`
    pub threshold_unit: TimeUnit,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            active: true,
            threshold: 100,
            threshold_unit: TimeUnit::Milliseconds,
        }
    }
}

impl BenchmarkConfig {
    /// Threshold as a duration.
    pub fn threshold_duration(&self) -> Duration {
        self.threshold_unit.to_duration(self.threshold)
    }
}

/// One slow call.
#[derive(Debug)]
pub struct BenchmarkRecord<'a> {
    /// Name of the command being called
    pub command: &'a str,
    /// Time spent in the rest of the chain
    pub time: u64,
    /// Unit of `time`
    pub unit: TimeUnit,
    /// The incoming call
    pub call: &'a Call,
    /// The produced result, read-only
    pub result: &'a CommandResult,
}

/// Sink for benchmark records.
pub trait BenchmarkService: Send + Sync {
    /// Record a slow call.
    fn log(&self, record: &BenchmarkRecord<'_>);
}

/// Writes benchmark records to the process log.
#[derive(Debug, Default)]
pub struct LogBenchmarkService;

impl BenchmarkService for LogBenchmarkService {
    fn log(&self, record: &BenchmarkRecord<'_>) {
        debug!(
            target: "callguard::benchmark",
            command = %record.command,
            time = record.time,
            unit = %record.unit,
            "{} took {} {} to process {}",
            record.command,
            record.time,
            record.unit,
            serde_json::Value::Object(record.call.arguments.clone())
        );
    }
}

/// Filter measuring how long the rest of the chain takes.
pub struct BenchmarkFilter {
    active: bool,
    threshold: Duration,
    report_unit: TimeUnit,
    service: Arc<dyn BenchmarkService>,
}

impl BenchmarkFilter {
    /// Create a new BenchmarkFilter.
    ///
    /// Records are reported in the threshold unit, or in milliseconds when
    /// the threshold unit is coarser.
    pub fn new(config: &BenchmarkConfig, service: Arc<dyn BenchmarkService>) -> Self {
        Self {
            active: config.active,
            threshold: config.threshold_duration(),
            report_unit: config.threshold_unit.min(TimeUnit::Milliseconds),
            service,
        }
    }
}

impl CallFilter for BenchmarkFilter {
    fn name(&self) -> &'static str {
        "benchmark"
    }

    fn filter(
        &self,
        call: &Call,
        command: &dyn Command,
        chain: FilterChain<'_>,
    ) -> Result<CommandResult, CallError> {
        if !self.active {
            return chain.proceed(call, command);
        }

        let start = Instant::now();
        let result = chain.proceed(call, command)?;
        let elapsed = start.elapsed();

        if elapsed > self.threshold {
            self.service.log(&BenchmarkRecord {
                command: &command.meta().name,
                time: self.report_unit.convert(elapsed),
                unit: self.report_unit,
                call,
                result: &result,
            });
        }

        Ok(result)
    }
}
