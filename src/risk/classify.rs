//! Fixed ordinal scales turning failure frequencies and scores into categories.

use crate::types::risk::{ExposureClass, RiskCategory, SuitabilityClass};

/// Maps a failure frequency in percent to a likelihood score in `[0, 1]`.
///
/// | frequency      | score |
/// |----------------|-------|
/// | (99, 100]      | 1.0   |
/// | (90, 99]       | 0.84  |
/// | (66, 90]       | 0.67  |
/// | (33, 66]       | 0.5   |
/// | [10, 33]       | 0.34  |
/// | [1, 10]        | 0.17  |
/// | anything else  | 0.0   |
///
/// "Anything else" covers `[0, 1)`, values outside `[0, 100]` and `NaN`.
///
/// # Examples
///
/// ```
/// use agroclimate_risk::classify_risk_frequency;
///
/// assert_eq!(classify_risk_frequency(10.0), 0.34);
/// assert_eq!(classify_risk_frequency(0.5), 0.0);
/// assert_eq!(classify_risk_frequency(f64::NAN), 0.0);
/// ```
pub fn classify_risk_frequency(frequency: f64) -> f64 {
    match frequency {
        f if f > 99.0 && f <= 100.0 => 1.0,
        f if f > 90.0 && f <= 99.0 => 0.84,
        f if f > 66.0 && f <= 90.0 => 0.67,
        f if f > 33.0 && f <= 66.0 => 0.5,
        f if (10.0..=33.0).contains(&f) => 0.34,
        f if (1.0..=10.0).contains(&f) => 0.17,
        _ => 0.0,
    }
}

/// Maps a likelihood score to its category. Boundaries are exclusive from below:
/// exactly 0.84 is still "Very probable".
pub fn classify_risk_score(score: f64) -> RiskCategory {
    match score {
        s if s > 0.84 => RiskCategory::VirtuallyCertain,
        s if s > 0.67 => RiskCategory::VeryProbable,
        s if s > 0.5 => RiskCategory::Probable,
        s if s > 0.34 => RiskCategory::AsLikelyAsNot,
        s if s > 0.17 => RiskCategory::Unlikely,
        s if s > 0.0 => RiskCategory::VeryUnlikely,
        _ => RiskCategory::ExceptionallyImprobable,
    }
}

pub fn classify_suitability(score: f64) -> SuitabilityClass {
    match score {
        s if s >= 0.75 => SuitabilityClass::VerySuitable,
        s if s >= 0.5 => SuitabilityClass::Suitable,
        s if s >= 0.25 => SuitabilityClass::MarginallySuitable,
        _ => SuitabilityClass::NotSuitable,
    }
}

pub fn classify_exposure(score: f64) -> ExposureClass {
    match score {
        s if s >= 0.75 => ExposureClass::High,
        s if s >= 0.5 => ExposureClass::Moderate,
        s if s >= 0.25 => ExposureClass::Low,
        _ => ExposureClass::Minimal,
    }
}
