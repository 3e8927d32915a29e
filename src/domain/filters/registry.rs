//! Filter registrations and per-command chain selection.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::debug;

use super::{
    BenchmarkFilter, BenchmarkService, CallFilter, CommandPredicate, DeprecationFilter,
    DescriptionFilter, FilterChain, LogBenchmarkService, LogQualityReporter, QualityReporter,
};
use crate::config::{Config, FilterKind};
use crate::domain::{Call, CallError, Command, CommandMeta, CommandResult, Marker};

/// Filters selected for one command, in registration order.
pub type FilterList = Arc<[Arc<dyn CallFilter>]>;

/// A filter together with the commands it applies to.
#[derive(Clone)]
pub struct FilterRegistration {
    predicate: CommandPredicate,
    filter: Arc<dyn CallFilter>,
}

impl FilterRegistration {
    /// Create a new registration.
    pub fn new(predicate: CommandPredicate, filter: Arc<dyn CallFilter>) -> Self {
        Self { predicate, filter }
    }

    /// Check whether the filter applies to the command.
    pub fn matches(&self, meta: &CommandMeta) -> bool {
        self.predicate.matches(meta)
    }
}

/// Ordered, immutable set of filter registrations.
///
/// The first registration is the outermost filter of every chain.
pub struct FilterRegistry {
    registrations: Vec<FilterRegistration>,
    cache: RwLock<HashMap<CommandMeta, FilterList>>,
}

impl FilterRegistry {
    /// Create a registry from registrations in nesting order.
    pub fn new(registrations: Vec<FilterRegistration>) -> Self {
        Self {
            registrations,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Create a registry from configuration, logging through the process log.
    pub fn from_config(config: &Config) -> Self {
        Self::with_sinks(
            config,
            Arc::new(LogBenchmarkService),
            Arc::new(LogQualityReporter),
        )
    }

    /// Create a registry from configuration with explicit sinks.
    pub fn with_sinks(
        config: &Config,
        benchmark: Arc<dyn BenchmarkService>,
        reporter: Arc<dyn QualityReporter>,
    ) -> Self {
        let registrations = config
            .filters
            .iter()
            .map(|kind| match kind {
                FilterKind::Benchmark => FilterRegistration::new(
                    CommandPredicate::Always,
                    Arc::new(BenchmarkFilter::new(&config.benchmark, benchmark.clone())),
                ),
                FilterKind::Deprecation => FilterRegistration::new(
                    CommandPredicate::HasMarker(Marker::Deprecated),
                    Arc::new(DeprecationFilter::new(config.qa, reporter.clone())),
                ),
                FilterKind::Description => FilterRegistration::new(
                    CommandPredicate::LacksMarker(Marker::Description),
                    Arc::new(DescriptionFilter::new(config.qa, reporter.clone())),
                ),
            })
            .collect();

        Self::new(registrations)
    }

    /// Number of registrations.
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Whether no filter is registered.
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Filters applying to the command, memoized per command metadata.
    pub fn filters_for(&self, meta: &CommandMeta) -> Result<FilterList, CallError> {
        {
            let cache = self
                .cache
                .read()
                .map_err(|_| CallError::Invariant("filter cache lock poisoned".to_string()))?;
            if let Some(filters) = cache.get(meta) {
                return Ok(filters.clone());
            }
        }

        let filters: FilterList = self
            .registrations
            .iter()
            .filter(|registration| registration.matches(meta))
            .map(|registration| registration.filter.clone())
            .collect();

        debug!(
            command = %meta.name,
            filters = ?filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            "Built filter chain"
        );

        let mut cache = self
            .cache
            .write()
            .map_err(|_| CallError::Invariant("filter cache lock poisoned".to_string()))?;
        Ok(cache.entry(meta.clone()).or_insert(filters).clone())
    }

    /// Names of the filters applying to the command, outermost first.
    pub fn plan(&self, meta: &CommandMeta) -> Result<Vec<&'static str>, CallError> {
        Ok(self.filters_for(meta)?.iter().map(|f| f.name()).collect())
    }

    /// Run the call through the command's filter chain.
    pub fn invoke(&self, call: &Call, command: &dyn Command) -> Result<CommandResult, CallError> {
        let filters = self.filters_for(command.meta())?;
        FilterChain::new(&filters).proceed(call, command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filters::quality::testing::RecordingReporter;
    use crate::domain::filters::{BenchmarkConfig, QualityConfig, QualityMode, TimeUnit};
    use serde_json::Value;
    use std::thread;

    struct Fixed(CommandMeta);

    impl Command for Fixed {
        fn meta(&self) -> &CommandMeta {
            &self.0
        }

        fn execute(&self, _call: &Call, result: &mut CommandResult) -> Result<(), CallError> {
            result.insert("name".to_string(), Value::from(self.0.name.clone()));
            Ok(())
        }
    }

    fn config(mode: QualityMode) -> Config {
        Config {
            benchmark: BenchmarkConfig {
                active: false,
                threshold: 100,
                threshold_unit: TimeUnit::Milliseconds,
            },
            qa: QualityConfig { mode },
            ..Config::default()
        }
    }

    fn foo() -> Fixed {
        Fixed(CommandMeta::new("Foo").described("Does foo"))
    }

    fn bar() -> Fixed {
        Fixed(CommandMeta::new("Bar").deprecated())
    }

    #[test]
    fn test_plan_follows_predicates_and_order() {
        let reporter = Arc::new(RecordingReporter::default());
        let registry = FilterRegistry::with_sinks(
            &config(QualityMode::Warn),
            Arc::new(LogBenchmarkService),
            reporter,
        );
        assert_eq!(registry.len(), 3);

        assert_eq!(registry.plan(foo().meta()).unwrap(), vec!["benchmark"]);
        assert_eq!(
            registry.plan(bar().meta()).unwrap(),
            vec!["benchmark", "deprecation", "description"]
        );
        assert_eq!(
            registry
                .plan(&CommandMeta::new("Plain"))
                .unwrap(),
            vec!["benchmark", "description"]
        );
    }

    #[test]
    fn test_configured_order_is_respected() {
        let mut config = config(QualityMode::Warn);
        config.filters = vec![FilterKind::Description, FilterKind::Benchmark];
        let registry = FilterRegistry::from_config(&config);

        assert_eq!(
            registry.plan(bar().meta()).unwrap(),
            vec!["description", "benchmark"]
        );
    }

    #[test]
    fn test_documented_command_passes_silently() {
        let reporter = Arc::new(RecordingReporter::default());
        let registry = FilterRegistry::with_sinks(
            &config(QualityMode::Warn),
            Arc::new(LogBenchmarkService),
            reporter.clone(),
        );

        let result = registry.invoke(&Call::new("Foo"), &foo()).unwrap();
        assert_eq!(result.get("name"), Some(&Value::from("Foo")));
        assert!(reporter.violations().is_empty());
    }

    #[test]
    fn test_deprecated_command_fails_in_fail_mode() {
        let reporter = Arc::new(RecordingReporter::default());
        let registry = FilterRegistry::with_sinks(
            &config(QualityMode::Fail),
            Arc::new(LogBenchmarkService),
            reporter,
        );

        let err = registry.invoke(&Call::new("Bar"), &bar()).unwrap_err();
        assert!(matches!(err, CallError::Unsupported(ref m) if m.contains("Bar")));
    }

    #[test]
    fn test_repeated_invocations_are_idempotent() {
        let reporter = Arc::new(RecordingReporter::default());
        let registry = FilterRegistry::with_sinks(
            &config(QualityMode::Warn),
            Arc::new(LogBenchmarkService),
            reporter.clone(),
        );
        let command = bar();

        let first = registry.invoke(&Call::new("Bar"), &command).unwrap();
        let second = registry.invoke(&Call::new("Bar"), &command).unwrap();

        assert_eq!(first, second);
        // deprecation and description each warn once per call
        assert_eq!(reporter.violations().len(), 4);
    }

    #[test]
    fn test_filter_lists_are_cached_per_command() {
        let registry = FilterRegistry::from_config(&config(QualityMode::Warn));
        let first = registry.filters_for(foo().meta()).unwrap();
        let second = registry.filters_for(foo().meta()).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_shared_name_with_different_metadata_gets_own_chain() {
        let registry = FilterRegistry::from_config(&config(QualityMode::Fail));
        let described = Fixed(CommandMeta::new("X").described("x"));
        let deprecated = Fixed(CommandMeta::new("X").deprecated());

        assert!(registry.invoke(&Call::new("X"), &described).is_ok());
        assert_eq!(
            registry.plan(deprecated.meta()).unwrap(),
            vec!["benchmark", "deprecation", "description"]
        );
        let err = registry.invoke(&Call::new("X"), &deprecated).unwrap_err();
        assert_eq!(err, CallError::Unsupported("X is deprecated".to_string()));
    }

    #[test]
    fn test_empty_registry_executes_command_directly() {
        let registry = FilterRegistry::new(Vec::new());
        assert!(registry.is_empty());
        let result = registry.invoke(&Call::new("Bar"), &bar()).unwrap();
        assert_eq!(result.get("name"), Some(&Value::from("Bar")));
    }

    #[test]
    fn test_concurrent_invocations_share_registry() {
        let registry = Arc::new(FilterRegistry::from_config(&config(QualityMode::Fail)));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let registry = registry.clone();
                thread::spawn(move || {
                    if i % 2 == 0 {
                        registry.invoke(&Call::new("Foo"), &foo()).is_ok()
                    } else {
                        registry.invoke(&Call::new("Bar"), &bar()).is_err()
                    }
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
