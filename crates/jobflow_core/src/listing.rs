use flow_logging::flow_warn;
use serde::Deserialize;
use serde_json::Value;

/// One job posting as served by `/jobs`. Read-only on the client.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub employer: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub description: String,
    pub is_remote: bool,
    pub apply_link: String,
    pub employment_type: Option<String>,
    pub logo: Option<String>,
    pub posted_at: Option<String>,
}

/// Result of one successful listing fetch. Replaced wholesale, never merged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingPage {
    pub jobs: Vec<JobListing>,
    /// The service's own `count` field, when present.
    pub reported_count: Option<u64>,
}

impl ListingPage {
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&JobListing> {
        self.jobs.iter().find(|job| job.id == id)
    }
}

// Rows come straight from the database, so any column may be null.
#[derive(Debug, Deserialize)]
struct WireJob {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    employer: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    is_remote: Option<Value>,
    #[serde(default)]
    apply_link: Option<String>,
    #[serde(default)]
    employment_type: Option<String>,
    #[serde(default)]
    logo: Option<String>,
    #[serde(default)]
    posted_at: Option<String>,
}

impl From<WireJob> for JobListing {
    fn from(wire: WireJob) -> Self {
        JobListing {
            id: wire.id.as_ref().map(id_to_string).unwrap_or_default(),
            title: wire.title.unwrap_or_default(),
            employer: wire.employer.unwrap_or_default(),
            city: wire.city.unwrap_or_default(),
            state: wire.state.unwrap_or_default(),
            country: wire.country.unwrap_or_default(),
            description: wire.description.unwrap_or_default(),
            is_remote: wire.is_remote.as_ref().is_some_and(truthy),
            apply_link: wire.apply_link.unwrap_or_default(),
            employment_type: wire.employment_type,
            logo: wire.logo,
            posted_at: wire.posted_at,
        }
    }
}

/// Projects a raw `/jobs` payload into render order.
///
/// Total over any JSON value: a missing or non-array `jobs` field yields an
/// empty page. Entries that are not objects are skipped; the server's order
/// and membership are otherwise kept as-is.
pub fn project_listings(raw: &Value) -> ListingPage {
    let reported_count = raw.get("count").and_then(Value::as_u64);
    let Some(entries) = raw.get("jobs").and_then(Value::as_array) else {
        return ListingPage {
            jobs: Vec::new(),
            reported_count,
        };
    };

    let jobs = entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| match WireJob::deserialize(entry) {
            Ok(wire) => Some(JobListing::from(wire)),
            Err(err) => {
                flow_warn!("Skipping malformed job entry #{}: {}", index, err);
                None
            }
        })
        .collect();

    ListingPage {
        jobs,
        reported_count,
    }
}

fn id_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

// SQLite hands booleans back as 0/1.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        _ => false,
    }
}
