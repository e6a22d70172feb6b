use jobflow_core::{analytics_view, project_analytics, project_listings, NamedCount, PALETTE};
use pretty_assertions::assert_eq;
use serde_json::json;

fn sample_analytics() -> serde_json::Value {
    json!({
        "total_jobs": 250,
        "number_computer_jobs": 90,
        "remote_percent": 42.5,
        "top_cities": [
            {"name": "Austin", "count": 30},
            {"name": "Boston", "count": 45},
            {"name": "Austin", "count": 12}
        ],
        "employment_types": [
            {"type": "Full-time", "count": 100},
            {"type": "Part-time", "count": 20},
            {"type": "Contract", "count": 15},
            {"type": "Internship", "count": 5},
            {"type": "Temporary", "count": 3},
            {"type": "Volunteer", "count": 1}
        ],
        "number_of_jobs_today": 11,
        "number_of_jobs_by_days": [
            {"name": "2024-05-01", "count": 4},
            {"name": "2024-05-02", "count": 9}
        ]
    })
}

#[test]
fn empty_listing_payload_projects_to_empty_sequence() {
    let page = project_listings(&json!({}));
    assert!(page.jobs.is_empty());
    assert!(page.is_empty());
    assert_eq!(page.reported_count, None);
}

#[test]
fn listing_order_and_duplicates_are_kept() {
    let page = project_listings(&json!({
        "count": 3,
        "jobs": [
            {"id": "z", "title": "Zeta", "employer": "Acme", "is_remote": true,
             "apply_link": "https://acme.example/apply"},
            {"id": "a", "title": "Alpha", "employer": "Acme"},
            {"id": "z", "title": "Zeta", "employer": "Acme"}
        ]
    }));
    let titles: Vec<_> = page.jobs.iter().map(|j| j.title.as_str()).collect();
    assert_eq!(titles, vec!["Zeta", "Alpha", "Zeta"]);
    assert_eq!(page.jobs[0].apply_link, "https://acme.example/apply");
    assert!(page.jobs[0].is_remote);
    assert!(!page.jobs[1].is_remote);
}

#[test]
fn non_object_listing_payloads_are_total() {
    assert!(project_listings(&json!(null)).is_empty());
    assert!(project_listings(&json!([1, 2, 3])).is_empty());
    assert!(project_listings(&json!({"jobs": "nope"})).is_empty());
}

#[test]
fn full_analytics_payload_maps_every_field() {
    let snapshot = project_analytics(&sample_analytics());
    assert_eq!(snapshot.total_jobs, 250);
    assert_eq!(snapshot.computer_jobs_count, 90);
    assert_eq!(snapshot.remote_percent, 42.5);
    assert_eq!(snapshot.jobs_posted_last_24h, 11);
    assert_eq!(
        snapshot.top_cities,
        vec![
            NamedCount { name: "Austin".into(), count: 30 },
            NamedCount { name: "Boston".into(), count: 45 },
            NamedCount { name: "Austin".into(), count: 12 },
        ]
    );
    assert_eq!(snapshot.jobs_by_day.len(), 2);
    assert_eq!(snapshot.jobs_by_day[1].name, "2024-05-02");
}

#[test]
fn cities_found_counts_raw_entries_without_dedup() {
    let snapshot = project_analytics(&sample_analytics());
    assert_eq!(snapshot.cities_found(), 3);
}

#[test]
fn employment_slices_cycle_palette() {
    let slices = project_analytics(&sample_analytics()).employment_slices();
    let colors: Vec<_> = slices.iter().map(|s| s.color).collect();
    assert_eq!(
        colors,
        vec![PALETTE[0], PALETTE[1], PALETTE[2], PALETTE[3], PALETTE[4], PALETTE[0]]
    );
    assert_eq!(slices[3].label, "Internship");
}

#[test]
fn missing_top_cities_renders_zero_cities_found() {
    let mut raw = sample_analytics();
    raw.as_object_mut().unwrap().remove("top_cities");

    let snapshot = project_analytics(&raw);
    assert!(snapshot.top_cities.is_empty());

    let view = analytics_view(&snapshot);
    let cities = view
        .stats
        .iter()
        .find(|card| card.label == "Cities Found")
        .expect("cities card");
    assert_eq!(cities.value, "0");
    assert!(view.hubs.is_empty());
}

#[test]
fn empty_analytics_payload_degrades_to_zero_snapshot() {
    let snapshot = project_analytics(&json!({}));
    assert_eq!(snapshot.total_jobs, 0);
    assert_eq!(snapshot.remote_percent, 0.0);
    assert!(snapshot.employment_types.is_empty());
    assert!(snapshot.jobs_by_day.is_empty());
}

#[test]
fn remote_percent_renders_like_the_service_number() {
    let view = analytics_view(&project_analytics(&sample_analytics()));
    let labels: Vec<_> = view.stats.iter().map(|c| (c.label, c.value.as_str())).collect();
    assert_eq!(
        labels,
        vec![
            ("Total Listings", "250"),
            ("Computer Jobs", "90"),
            ("Remote Adoption", "42.5%"),
            ("Cities Found", "3"),
            ("Job posted in last 24 hours", "11"),
        ]
    );

    let round = analytics_view(&project_analytics(&json!({"remote_percent": 40})));
    assert_eq!(round.stats[2].value, "40%");
}
