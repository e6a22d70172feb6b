use serde_json::Value;

/// Colours assigned to categorical slices, cycled by index.
pub const PALETTE: [&str; 5] = ["#6366f1", "#2dd4bf", "#fbbf24", "#f472b6", "#a78bfa"];

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedCount {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCount {
    pub kind: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
    pub color: &'static str,
}

/// Market statistics from one `/analytics` fetch. Replaced wholesale.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalyticsSnapshot {
    pub total_jobs: u64,
    pub computer_jobs_count: u64,
    pub remote_percent: f64,
    /// Server ranking order.
    pub top_cities: Vec<NamedCount>,
    pub employment_types: Vec<TypeCount>,
    pub jobs_posted_last_24h: u64,
    /// Chronological as served; not re-validated.
    pub jobs_by_day: Vec<NamedCount>,
}

impl AnalyticsSnapshot {
    /// "Cities Found": the raw ranking length. Repeated names count twice.
    pub fn cities_found(&self) -> usize {
        self.top_cities.len()
    }

    /// Bar chart series for the hiring hubs, in server order.
    pub fn hubs_series(&self) -> Vec<(String, u64)> {
        self.top_cities
            .iter()
            .map(|city| (city.name.clone(), city.count))
            .collect()
    }

    pub fn employment_slices(&self) -> Vec<PieSlice> {
        self.employment_types
            .iter()
            .enumerate()
            .map(|(index, entry)| PieSlice {
                label: entry.kind.clone(),
                value: entry.count,
                color: palette_color(index),
            })
            .collect()
    }

    pub fn daily_series(&self) -> Vec<(String, u64)> {
        self.jobs_by_day
            .iter()
            .map(|day| (day.name.clone(), day.count))
            .collect()
    }
}

/// Projects a raw `/analytics` payload.
///
/// Every field is independently optional: a missing or ill-typed aggregate
/// degrades to zero or an empty series instead of failing the projection.
pub fn project_analytics(raw: &Value) -> AnalyticsSnapshot {
    AnalyticsSnapshot {
        total_jobs: count_field(raw, "total_jobs"),
        computer_jobs_count: count_field(raw, "number_computer_jobs"),
        remote_percent: raw
            .get("remote_percent")
            .and_then(as_number)
            .unwrap_or(0.0),
        top_cities: named_counts(raw, "top_cities", "name"),
        employment_types: named_counts(raw, "employment_types", "type")
            .into_iter()
            .map(|entry| TypeCount {
                kind: entry.name,
                count: entry.count,
            })
            .collect(),
        jobs_posted_last_24h: count_field(raw, "number_of_jobs_today"),
        jobs_by_day: named_counts(raw, "number_of_jobs_by_days", "name"),
    }
}

fn count_field(raw: &Value, key: &str) -> u64 {
    raw.get(key).map(as_count).unwrap_or(0)
}

fn named_counts(raw: &Value, key: &str, label_key: &str) -> Vec<NamedCount> {
    let Some(entries) = raw.get(key).and_then(Value::as_array) else {
        return Vec::new();
    };
    entries
        .iter()
        .filter(|entry| entry.is_object())
        .map(|entry| NamedCount {
            name: entry.get(label_key).map(label).unwrap_or_default(),
            count: entry.get("count").map(as_count).unwrap_or(0),
        })
        .collect()
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_count(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

fn label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn palette_cycles_modulo_five() {
        assert_eq!(palette_color(0), "#6366f1");
        assert_eq!(palette_color(4), "#a78bfa");
        assert_eq!(palette_color(5), "#6366f1");
        assert_eq!(palette_color(12), "#fbbf24");
    }

    #[test]
    fn ill_typed_fields_degrade_to_defaults() {
        let snapshot = project_analytics(&json!({
            "total_jobs": "120",
            "remote_percent": "oops",
            "top_cities": {"not": "a list"},
            "employment_types": [null, {"type": "Contract", "count": 2.0}]
        }));
        assert_eq!(snapshot.total_jobs, 120);
        assert_eq!(snapshot.remote_percent, 0.0);
        assert!(snapshot.top_cities.is_empty());
        assert_eq!(
            snapshot.employment_types,
            vec![TypeCount {
                kind: "Contract".into(),
                count: 2
            }]
        );
    }
}
