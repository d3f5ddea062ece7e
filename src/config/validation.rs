//! Unknown-key detection for station config files.
//!
//! The raw TOML is walked before serde deserialization. Keys that do not map
//! to a config field produce warnings, with a suggestion when a known key is
//! within a small edit distance. Warnings never reject a config.

use std::collections::HashSet;

/// A non-fatal config warning.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown config key '{}'", self.field)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " (did you mean '{s}'?)")?;
        }
        Ok(())
    }
}

/// Every valid dotted key path in `StationConfig`.
pub fn known_config_keys() -> HashSet<&'static str> {
    [
        "station",
        "station.id",
        "station.location",
        "thresholds",
        "thresholds.good_max",
        "thresholds.moderate_max",
        "thresholds.unhealthy_max",
        "thresholds.very_unhealthy_max",
        "simulation",
        "simulation.seed",
        "simulation.interval_ms",
    ]
    .into_iter()
    .collect()
}

/// Collect dotted key paths from a parsed TOML tree.
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let Some(table) = value.as_table() {
        for (k, v) in table {
            let path = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            keys.push(path.clone());
            if v.is_table() {
                keys.extend(walk_toml_keys(v, &path));
            }
        }
    }
    keys
}

/// Warnings for keys in `contents` that no config field reads.
///
/// Unparseable input yields no warnings; the deserializer reports it.
pub fn validate_unknown_keys(contents: &str) -> Vec<ValidationWarning> {
    let Ok(value) = contents.parse::<toml::Value>() else {
        return Vec::new();
    };
    let known = known_config_keys();

    let mut warnings: Vec<ValidationWarning> = walk_toml_keys(&value, "")
        .into_iter()
        .filter(|key| !known.contains(key.as_str()))
        .map(|field| {
            let suggestion = suggest_correction(&field, &known);
            ValidationWarning { field, suggestion }
        })
        .collect();
    warnings.sort_by(|a, b| a.field.cmp(&b.field));
    warnings
}

/// Closest known key within edit distance 2, if any.
pub fn suggest_correction(field: &str, known: &HashSet<&'static str>) -> Option<String> {
    known
        .iter()
        .map(|k| (levenshtein(field, k), *k))
        .filter(|(d, _)| *d <= 2)
        .min()
        .map(|(_, k)| k.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut curr = vec![i + 1; b.len() + 1];
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != *cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev = curr;
    }
    prev[b.len()]
}
