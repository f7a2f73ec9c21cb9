//! Client-side carbon footprint estimator.
//!
//! A fixed linear weighted sum over monthly household inputs, producing
//! an estimate in tons of CO₂ per year together with a comparison band
//! and matching recommendations. Runs entirely on the client; nothing
//! here talks to a server.

use serde::{Deserialize, Serialize};

/// Global average footprint in tons CO₂ per person per year, shown next
/// to the comparison text.
pub const GLOBAL_AVERAGE_TONS: f64 = 4.5;

const MONTHS_PER_YEAR: f64 = 12.0;

// Emission factors, tons CO₂ per unit and year.
const ELECTRICITY_TONS_PER_KWH: f64 = 0.0005;
const CAR_TONS_PER_KM: f64 = 0.0002;
const BUS_TONS_PER_KM: f64 = 0.00008;

// Base yearly emissions scaled by the diet and waste factors.
const DIET_BASE_TONS: f64 = 2.5;
const WASTE_BASE_TONS: f64 = 0.5;

/// Diet profile, scaling the base diet emissions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Diet {
    #[default]
    Average,
    Vegetarian,
    Vegan,
}

impl Diet {
    fn factor(self) -> f64 {
        match self {
            Self::Average => 1.0,
            Self::Vegetarian => 0.8,
            Self::Vegan => 0.6,
        }
    }
}

/// Household waste level, scaling the base waste emissions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WasteLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl WasteLevel {
    fn factor(self) -> f64 {
        match self {
            Self::Low => 0.8,
            Self::Medium => 1.0,
            Self::High => 1.2,
        }
    }
}

/// Monthly household inputs to the estimator.
///
/// Fields left out of a submitted form count as zero, resp. the average
/// diet and medium waste level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FootprintProfile {
    /// Electricity use in kWh per month.
    pub electricity_kwh: f64,

    /// Car travel in km per month.
    pub car_km: f64,

    /// Public transport in km per month.
    pub bus_km: f64,

    pub diet: Diet,

    pub waste: WasteLevel,
}

impl FootprintProfile {
    /// Estimate the yearly footprint for this profile.
    pub fn estimate(&self) -> Footprint {
        let mut tons = 0.0;
        tons += self.electricity_kwh * MONTHS_PER_YEAR * ELECTRICITY_TONS_PER_KWH;
        tons += self.car_km * MONTHS_PER_YEAR * CAR_TONS_PER_KM;
        tons += self.bus_km * MONTHS_PER_YEAR * BUS_TONS_PER_KM;
        tons += DIET_BASE_TONS * self.diet.factor();
        tons += WASTE_BASE_TONS * self.waste.factor();
        Footprint {
            tons_per_year: tons,
        }
    }
}

/// An estimated yearly footprint.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Footprint {
    tons_per_year: f64,
}

impl Footprint {
    /// The estimate in tons CO₂ per year.
    pub fn tons_per_year(self) -> f64 {
        self.tons_per_year
    }

    /// The comparison band this footprint falls into.
    pub fn band(self) -> Band {
        if self.tons_per_year < 2.0 {
            Band::BelowAverage
        } else if self.tons_per_year < 4.0 {
            Band::NearAverage
        } else if self.tons_per_year < 6.0 {
            Band::AboveAverage
        } else {
            Band::High
        }
    }
}

/// How an estimate compares against the global average.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    BelowAverage,
    NearAverage,
    AboveAverage,
    High,
}

impl Band {
    /// The comparison line shown with the result.
    pub fn summary(self) -> &'static str {
        match self {
            Self::BelowAverage => "Excellent! Your footprint is below the global average.",
            Self::NearAverage => "Good! Your footprint is around the global average.",
            Self::AboveAverage => {
                "Your footprint is above average. There's room for improvement!"
            }
            Self::High => "Your footprint is quite high. Let's work on reducing it!",
        }
    }

    /// Three suggestions matching the band.
    pub fn recommendations(self) -> [&'static str; 3] {
        match self {
            Self::BelowAverage => [
                "Keep up the great work!",
                "Consider mentoring others on sustainable living.",
                "Share your tips on social media.",
            ],
            Self::NearAverage => [
                "Try reducing meat consumption.",
                "Use public transport more often.",
                "Consider installing solar panels.",
            ],
            Self::AboveAverage => [
                "Reduce air travel when possible.",
                "Switch to a more fuel-efficient vehicle.",
                "Implement recycling and composting.",
            ],
            Self::High => [
                "Consider lifestyle changes for significant impact.",
                "Join environmental challenges on EcoLearn.",
                "Calculate your footprint regularly to track progress.",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn empty_profile_has_only_base_emissions() {
        let footprint = FootprintProfile::default().estimate();
        assert_close(footprint.tons_per_year(), 3.0);
        assert_eq!(footprint.band(), Band::NearAverage);
    }

    #[test]
    fn weighted_sum_matches_the_factors() {
        let profile = FootprintProfile {
            electricity_kwh: 300.0,
            car_km: 500.0,
            bus_km: 100.0,
            diet: Diet::Average,
            waste: WasteLevel::Medium,
        };
        // 300*12*0.0005 + 500*12*0.0002 + 100*12*0.00008 + 2.5 + 0.5
        assert_close(profile.estimate().tons_per_year(), 1.8 + 1.2 + 0.096 + 3.0);
    }

    #[test]
    fn vegan_low_waste_profile_lands_below_average() {
        let profile = FootprintProfile {
            diet: Diet::Vegan,
            waste: WasteLevel::Low,
            ..Default::default()
        };
        let footprint = profile.estimate();
        assert_close(footprint.tons_per_year(), 1.9);
        assert_eq!(footprint.band(), Band::BelowAverage);
    }

    #[test]
    fn band_cutoffs_are_half_open() {
        let at = |tons_per_year| Footprint { tons_per_year }.band();
        assert_eq!(at(1.999), Band::BelowAverage);
        assert_eq!(at(2.0), Band::NearAverage);
        assert_eq!(at(4.0), Band::AboveAverage);
        assert_eq!(at(6.0), Band::High);
    }

    #[test]
    fn every_band_has_three_recommendations() {
        for band in [
            Band::BelowAverage,
            Band::NearAverage,
            Band::AboveAverage,
            Band::High,
        ] {
            assert_eq!(band.recommendations().len(), 3);
            assert!(!band.summary().is_empty());
        }
    }

    #[test]
    fn missing_form_fields_deserialize_to_defaults() {
        let profile: FootprintProfile =
            serde_json::from_str(r#"{"electricity_kwh": 250, "diet": "vegan"}"#).unwrap();
        assert_close(profile.electricity_kwh, 250.0);
        assert_eq!(profile.diet, Diet::Vegan);
        assert_eq!(profile.waste, WasteLevel::Medium);
        assert_close(profile.car_km, 0.0);
    }
}
