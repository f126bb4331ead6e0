//! Ordinal labels attached to likelihood and suitability scores.

use serde::Serialize;
use std::fmt;

/// Qualitative likelihood of failure, from least to most likely.
///
/// The ordering of the variants follows the ordering of the score domain, so
/// `RiskCategory::Unlikely < RiskCategory::Probable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum RiskCategory {
    ExceptionallyImprobable,
    VeryUnlikely,
    Unlikely,
    AsLikelyAsNot,
    Probable,
    VeryProbable,
    VirtuallyCertain,
}

impl RiskCategory {
    pub const ALL: [RiskCategory; 7] = [
        RiskCategory::ExceptionallyImprobable,
        RiskCategory::VeryUnlikely,
        RiskCategory::Unlikely,
        RiskCategory::AsLikelyAsNot,
        RiskCategory::Probable,
        RiskCategory::VeryProbable,
        RiskCategory::VirtuallyCertain,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::ExceptionallyImprobable => "Exceptionally improbable",
            RiskCategory::VeryUnlikely => "Very unlikely",
            RiskCategory::Unlikely => "Unlikely",
            RiskCategory::AsLikelyAsNot => "As likely as not",
            RiskCategory::Probable => "Probable",
            RiskCategory::VeryProbable => "Very probable",
            RiskCategory::VirtuallyCertain => "Virtually certain",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Suitability class of an averaged score, as shown on suitability maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SuitabilityClass {
    NotSuitable,
    MarginallySuitable,
    Suitable,
    VerySuitable,
}

impl SuitabilityClass {
    pub fn label(&self) -> &'static str {
        match self {
            SuitabilityClass::NotSuitable => "Not Suitable",
            SuitabilityClass::MarginallySuitable => "Marginally Suitable",
            SuitabilityClass::Suitable => "Suitable",
            SuitabilityClass::VerySuitable => "Very Suitable",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            SuitabilityClass::NotSuitable => "red",
            SuitabilityClass::MarginallySuitable => "orange",
            SuitabilityClass::Suitable => "green",
            SuitabilityClass::VerySuitable => "cyan",
        }
    }
}

impl fmt::Display for SuitabilityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Exposure class of a risk score. Colours run opposite to [`SuitabilityClass`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ExposureClass {
    Minimal,
    Low,
    Moderate,
    High,
}

impl ExposureClass {
    pub fn label(&self) -> &'static str {
        match self {
            ExposureClass::Minimal => "Minimal Exposure",
            ExposureClass::Low => "Low Exposure",
            ExposureClass::Moderate => "Moderate Exposure",
            ExposureClass::High => "High Exposure",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ExposureClass::Minimal => "cyan",
            ExposureClass::Low => "green",
            ExposureClass::Moderate => "orange",
            ExposureClass::High => "red",
        }
    }
}

impl fmt::Display for ExposureClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
