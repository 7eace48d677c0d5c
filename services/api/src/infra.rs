use crs_engine::config::TablesConfig;
use crs_engine::tables::TableLoadError;
use crs_engine::{BenchmarkTable, CrsCalculator};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Reference tables shared read-only by every request.
#[derive(Debug, Clone)]
pub(crate) struct ScoringContext {
    pub(crate) benchmark: BenchmarkTable,
    pub(crate) calculator: CrsCalculator,
}

impl ScoringContext {
    pub(crate) fn standard() -> Self {
        Self {
            benchmark: BenchmarkTable::standard(),
            calculator: CrsCalculator::default(),
        }
    }

    pub(crate) fn load(tables: &TablesConfig) -> Result<Self, TableLoadError> {
        let benchmark = tables.benchmark()?;
        let calculator = tables.calculator()?;

        info!(
            benchmark = ?tables.benchmark_path,
            breakdown = ?tables.breakdown_path,
            benchmark_rows = benchmark.rows().len(),
            breakdown_rows = calculator.table().rows().len(),
            "reference tables loaded"
        );

        Ok(Self {
            benchmark,
            calculator,
        })
    }
}
