//! Paging-merge behavior, exercised without a network.

use serde_json::json;

use immucert_client::{merge_page, next_link};
use immucert_core::{Bundle, BundleEntry, BundleLink};

fn entry(id: u32) -> BundleEntry {
    BundleEntry::new(
        Some(format!("Immunization/{id}")),
        json!({"resourceType": "Immunization", "status": "completed"}),
    )
}

fn page(total: Option<u32>, ids: &[u32], next: Option<&str>) -> Bundle {
    let mut bundle = Bundle::searchset(0, ids.iter().copied().map(entry).collect());
    bundle.total = total;
    bundle.link = vec![BundleLink {
        relation: "self".to_string(),
        url: "https://fhir.example.org/baseR4/Immunization".to_string(),
    }];
    if let Some(url) = next {
        bundle.link.push(BundleLink {
            relation: "next".to_string(),
            url: url.to_string(),
        });
    }
    bundle
}

#[test]
fn next_link_finds_the_next_relation() {
    let bundle = page(Some(28), &[1, 2], Some("https://fhir.example.org/page2"));
    assert_eq!(next_link(&bundle), Some("https://fhir.example.org/page2"));
}

#[test]
fn next_link_is_none_on_the_last_page() {
    let bundle = page(Some(28), &[1, 2], None);
    assert_eq!(next_link(&bundle), None);
}

#[test]
fn merge_appends_entries_and_advances_the_link_chain() {
    let mut merged = page(Some(4), &[1, 2], Some("https://fhir.example.org/page2"));
    merge_page(&mut merged, page(Some(4), &[3, 4], None));

    let urls: Vec<_> = merged
        .entry
        .iter()
        .filter_map(|entry| entry.full_url.as_deref())
        .collect();
    assert_eq!(
        urls,
        [
            "Immunization/1",
            "Immunization/2",
            "Immunization/3",
            "Immunization/4"
        ]
    );
    assert_eq!(next_link(&merged), None);
}

#[test]
fn merge_keeps_the_first_reported_total() {
    let mut merged = page(Some(4), &[1, 2], Some("https://fhir.example.org/page2"));
    merge_page(&mut merged, page(Some(999), &[3, 4], None));
    assert_eq!(merged.total, Some(4));

    // A first page without a total picks it up from a later page
    let mut merged = page(None, &[1], Some("https://fhir.example.org/page2"));
    merge_page(&mut merged, page(Some(2), &[2], None));
    assert_eq!(merged.total, Some(2));
}
