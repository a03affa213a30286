//! Forecaster builder.

use forecast_core::{DampingRecurrence, ForecastEngine};
use forecast_spi::{Criterion, Result};

use crate::{ForecastConfig, Forecaster};

/// Builder for a configured [`Forecaster`].
#[derive(Debug, Clone, Default)]
pub struct ForecasterBuilder {
    config: ForecastConfig,
}

impl ForecasterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: ForecastConfig) -> Self {
        Self { config }
    }

    pub fn damping(mut self, damping: DampingRecurrence) -> Self {
        self.config.damping = damping;
        self
    }

    pub fn default_criterion(mut self, criterion: Criterion) -> Self {
        self.config.default_criterion = criterion;
        self
    }

    pub fn default_limit(mut self, limit: usize) -> Self {
        self.config.default_limit = limit;
        self
    }

    /// Validate the configuration and build the forecaster.
    pub fn build(self) -> Result<Forecaster> {
        self.config.validate()?;
        Ok(Forecaster {
            engine: ForecastEngine::with_damping(self.config.damping),
            config: self.config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forecast_spi::ForecastError;

    #[test]
    fn test_builder_sets_fields() {
        let forecaster = ForecasterBuilder::new()
            .damping(DampingRecurrence::Cumulative)
            .default_criterion(Criterion::Aicc)
            .default_limit(2)
            .build()
            .unwrap();
        assert_eq!(forecaster.engine().damping(), DampingRecurrence::Cumulative);
        assert_eq!(forecaster.config().default_criterion, Criterion::Aicc);
        assert_eq!(forecaster.config().default_limit, 2);
    }

    #[test]
    fn test_builder_rejects_zero_limit() {
        let err = ForecasterBuilder::new().default_limit(0).build().unwrap_err();
        assert!(matches!(err, ForecastError::InvalidArgument { .. }));
    }
}
