//! Driven port exposing whether a predictive model has been trained.
//!
//! The model itself lives outside this service; diagnostics only report
//! whether one is available.

use async_trait::async_trait;

/// Reports whether a predictive model is available.
#[async_trait]
pub trait PredictiveModelStatus: Send + Sync {
    /// Return true when a trained model is loaded.
    async fn is_model_loaded(&self) -> bool;
}

/// Status used when no model subsystem is deployed.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPredictiveModel;

#[async_trait]
impl PredictiveModelStatus for NoPredictiveModel {
    async fn is_model_loaded(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn no_predictive_model_reports_unloaded() {
        assert!(!NoPredictiveModel.is_model_loaded().await);
    }
}
