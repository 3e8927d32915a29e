//! Call filters and the chain that runs them.

mod benchmark_filter;
mod chain;
mod deprecation_filter;
mod description_filter;
mod filter_trait;
mod predicate;
pub(crate) mod quality;
mod registry;

pub use benchmark_filter::{
    BenchmarkConfig, BenchmarkFilter, BenchmarkRecord, BenchmarkService, LogBenchmarkService,
    TimeUnit,
};
pub use chain::FilterChain;
pub use deprecation_filter::DeprecationFilter;
pub use description_filter::DescriptionFilter;
pub use filter_trait::CallFilter;
pub use predicate::CommandPredicate;
pub use quality::{
    LogQualityReporter, QualityConfig, QualityMode, QualityReporter, QualityViolation,
};
pub use registry::{FilterList, FilterRegistration, FilterRegistry};
