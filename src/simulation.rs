//! Synthetic measurement generation
//!
//! The station never touches a random generator itself. Harnesses inject a
//! [`MeasurementSource`] and drive [`simulate`], which keeps test data
//! generation reproducible (seeded) and swappable (scripted).

use std::time::Duration;

use rand::prelude::*;
use tracing::info;

use crate::station::Station;
use crate::types::Measurement;

// ============================================================================
// Value ranges (half-open, whole units)
// ============================================================================

/// AQI range, spans every severity band
const AQI_RANGE: std::ops::Range<u32> = 20..320;
/// CO2 range (ppm)
const CO2_RANGE: std::ops::Range<u32> = 300..1300;
/// PM2.5 range (µg/m³)
const PM2_5_RANGE: std::ops::Range<u32> = 5..155;
/// PM10 range (µg/m³)
const PM10_RANGE: std::ops::Range<u32> = 10..210;
/// NO2 range (ppb)
const NO2_RANGE: std::ops::Range<u32> = 10..110;

// ============================================================================
// Source trait
// ============================================================================

/// Supplier of raw measurements for simulated runs.
pub trait MeasurementSource {
    fn next_measurement(&mut self) -> Measurement;
}

/// Uniformly distributed whole-number measurements.
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded when `seed` is given, entropy-backed otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => Self::from_entropy(),
        }
    }

    fn draw(&mut self, range: std::ops::Range<u32>) -> f64 {
        f64::from(self.rng.gen_range(range))
    }
}

impl MeasurementSource for RandomSource {
    fn next_measurement(&mut self) -> Measurement {
        Measurement {
            aqi: self.draw(AQI_RANGE),
            co2: self.draw(CO2_RANGE),
            pm2_5: self.draw(PM2_5_RANGE),
            pm10: self.draw(PM10_RANGE),
            no2: self.draw(NO2_RANGE),
        }
    }
}

/// Replays a fixed list of measurements, wrapping around at the end.
pub struct ScriptedSource {
    script: Vec<Measurement>,
    cursor: usize,
}

impl ScriptedSource {
    /// An empty script yields `Measurement::default()` forever.
    pub fn new(script: Vec<Measurement>) -> Self {
        Self { script, cursor: 0 }
    }

    /// Script built from AQI values only; pollutants are zero.
    pub fn from_aqi(values: &[f64]) -> Self {
        Self::new(
            values
                .iter()
                .map(|&aqi| Measurement { aqi, ..Measurement::default() })
                .collect(),
        )
    }
}

impl MeasurementSource for ScriptedSource {
    fn next_measurement(&mut self) -> Measurement {
        if self.script.is_empty() {
            return Measurement::default();
        }
        let next = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        next
    }
}

// ============================================================================
// Driver
// ============================================================================

/// Append `count` simulated readings to `station`, pausing `interval`
/// between them so consecutive timestamps differ. Returns the number added.
pub fn simulate(
    station: &mut Station,
    source: &mut dyn MeasurementSource,
    count: usize,
    interval: Duration,
) -> usize {
    for i in 0..count {
        if i > 0 && !interval.is_zero() {
            std::thread::sleep(interval);
        }
        station.record(source.next_measurement());
    }
    info!(station = %station.id(), added = count, total = station.reading_count(), "Simulated readings");
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;

    #[test]
    fn seeded_sources_are_reproducible() {
        let mut a = RandomSource::seeded(42);
        let mut b = RandomSource::seeded(42);
        for _ in 0..20 {
            assert_eq!(a.next_measurement(), b.next_measurement());
        }
    }

    #[test]
    fn random_values_stay_in_range() {
        let mut source = RandomSource::seeded(7);
        for _ in 0..500 {
            let m = source.next_measurement();
            assert!((20.0..320.0).contains(&m.aqi), "aqi {}", m.aqi);
            assert!((300.0..1300.0).contains(&m.co2), "co2 {}", m.co2);
            assert!((5.0..155.0).contains(&m.pm2_5), "pm2.5 {}", m.pm2_5);
            assert!((10.0..210.0).contains(&m.pm10), "pm10 {}", m.pm10);
            assert!((10.0..110.0).contains(&m.no2), "no2 {}", m.no2);
            assert_eq!(m.aqi.fract(), 0.0);
        }
    }

    #[test]
    fn scripted_source_cycles() {
        let mut source = ScriptedSource::from_aqi(&[10.0, 20.0]);
        let aqis: Vec<f64> = (0..5).map(|_| source.next_measurement().aqi).collect();
        assert_eq!(aqis, vec![10.0, 20.0, 10.0, 20.0, 10.0]);
    }

    #[test]
    fn empty_script_yields_defaults() {
        let mut source = ScriptedSource::new(Vec::new());
        assert_eq!(source.next_measurement(), Measurement::default());
    }

    #[test]
    fn simulate_appends_requested_count() {
        let mut station = Station::new("PS-1000", "Downtown");
        let mut source = ScriptedSource::from_aqi(&[30.0, 120.0, 60.0, 210.0]);
        let added = simulate(&mut station, &mut source, 4, Duration::ZERO);

        assert_eq!(added, 4);
        assert_eq!(station.reading_count(), 4);
        assert_eq!(station.worst_reading(), Severity::Hazardous);
        assert_eq!(station.critical_readings().len(), 2);
    }

    #[test]
    fn simulate_zero_is_noop() {
        let mut station = Station::new("PS-1000", "Downtown");
        let mut source = RandomSource::seeded(1);
        assert_eq!(simulate(&mut station, &mut source, 0, Duration::ZERO), 0);
        assert!(station.latest_reading().is_none());
    }
}
