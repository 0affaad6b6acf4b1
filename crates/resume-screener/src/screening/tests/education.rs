use std::sync::Arc;

use super::common::*;
use crate::screening::domain::DegreeLevel;
use crate::screening::education::{classify_degree_level, DegreeClassifier, DegreeMatchPolicy};
use crate::screening::vocabulary::Vocabulary;
use crate::screening::ScreeningService;

#[test]
fn first_canonical_policy_reports_lowest_listed_level() {
    let snippets = [
        "Bachelor of Science in Computer Science, 2016",
        "Master of Data Science, 2019",
    ];
    assert_eq!(classify_degree_level(&snippets), Some(DegreeLevel::Bachelor));
}

#[test]
fn highest_policy_reports_top_attainment() {
    let classifier = DegreeClassifier::new(&Vocabulary::default(), DegreeMatchPolicy::Highest);
    let snippets = [
        "Bachelor of Science in Computer Science, 2016",
        "Master of Data Science, 2019",
    ];
    assert_eq!(classifier.classify(&snippets), Some(DegreeLevel::Master));
}

#[test]
fn regional_degree_names_are_recognized() {
    assert_eq!(
        classify_degree_level(&["S1 Teknik Informatika, Universitas Gadjah Mada"]),
        Some(DegreeLevel::Bachelor)
    );
    assert_eq!(
        classify_degree_level(&["Magister Manajemen, 2020"]),
        Some(DegreeLevel::Master)
    );
    assert_eq!(
        classify_degree_level(&["SMA Negeri 3 Bandung"]),
        Some(DegreeLevel::HighSchool)
    );
    assert_eq!(
        classify_degree_level(&["PhD in Physics"]),
        Some(DegreeLevel::Phd)
    );
}

#[test]
fn keywords_must_match_whole_words() {
    // "absent" contains "bs" only inside a word.
    assert_eq!(
        classify_degree_level(&["Business studies while absent from campus"]),
        None
    );
    assert_eq!(classify_degree_level::<&str>(&[]), None);
}

#[test]
fn ingested_snippets_feed_the_configured_policy() {
    let text = "Rina Putri\nBachelor of Arts, 2012\nMaster of Design, 2015\nSkills: Figma";

    let (first_service, _) = build_service();
    let record = first_service
        .ingest(submission("rina.pdf", text), fixed_now())
        .expect("ingests");
    assert_eq!(record.education.len(), 2);
    assert_eq!(
        first_service.engine().classifier().classify(&record.education),
        Some(DegreeLevel::Bachelor)
    );

    let highest_service = ScreeningService::new(
        Arc::new(MemoryRepository::default()),
        Vocabulary::default(),
        DegreeMatchPolicy::Highest,
    );
    assert_eq!(
        highest_service.engine().classifier().classify(&record.education),
        Some(DegreeLevel::Master)
    );
}

#[test]
fn policy_parses_from_configuration_tokens() {
    assert_eq!("first".parse::<DegreeMatchPolicy>(), Ok(DegreeMatchPolicy::FirstCanonical));
    assert_eq!("HIGHEST".parse::<DegreeMatchPolicy>(), Ok(DegreeMatchPolicy::Highest));
    assert!("latest".parse::<DegreeMatchPolicy>().is_err());
}
