use std::sync::Arc;

use chrono::NaiveDate;

use super::common::*;
use crate::screening::experience::{
    estimate_experience_years, EstimateSource, ExperienceEstimator,
};
use crate::screening::text::SentenceSegmenter;

struct FixedSegmenter(Vec<&'static str>);

impl SentenceSegmenter for FixedSegmenter {
    fn segment(&self, _text: &str) -> Vec<String> {
        self.0.iter().map(|sentence| sentence.to_string()).collect()
    }
}

#[test]
fn open_ended_range_resolves_against_supplied_today() {
    let years = estimate_experience_years("Product Designer, Feb 2021 - Present", today());
    assert_eq!(years, 2.92);
}

#[test]
fn dated_ranges_win_over_every_fallback() {
    let text = "Backend Engineer, Feb 2021 - Present.\n\
        I have experience with APIs. Experience leading teams.\n\
        Certified 1999, refreshed 2005.";
    let estimate = ExperienceEstimator::default().estimate(text, today());

    assert_eq!(estimate.source, EstimateSource::DateRanges);
    assert_eq!(estimate.years, 2.92);
}

#[test]
fn overlapping_ranges_count_once() {
    let text = "Analyst, Jan 2020 - Jun 2021\nLead Analyst, Mar 2021 - Dec 2022";
    let estimate = ExperienceEstimator::default().estimate(text, today());

    let span = NaiveDate::from_ymd_opt(2022, 12, 1).expect("valid")
        - NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid");
    let expected = (span.num_days() as f64 / 365.25 * 100.0).round() / 100.0;
    assert_eq!(estimate.years, expected);
}

#[test]
fn experience_sentences_beat_year_span() {
    let text = "I have experience with APIs. Experience leading teams.\n\
        Graduated 2015, joined 2019.";
    let estimate = ExperienceEstimator::default().estimate(text, today());

    assert_eq!(estimate.source, EstimateSource::ExperienceSentences);
    assert_eq!(estimate.years, 2.0);
}

#[test]
fn short_acronyms_close_experience_sentences() {
    let estimate = ExperienceEstimator::default().estimate(
        "Experience with Go. Experience with AI. Experience in QA.",
        today(),
    );

    assert_eq!(estimate.source, EstimateSource::ExperienceSentences);
    assert_eq!(estimate.years, 3.0);
}

#[test]
fn sentence_proxy_is_capped() {
    let text = "Relevant experience.\n".repeat(45);
    let estimate = ExperienceEstimator::default().estimate(&text, today());
    assert_eq!(estimate.years, 40.0);
}

#[test]
fn year_span_fallback_uses_earliest_and_latest_year() {
    let estimate =
        ExperienceEstimator::default().estimate("Graduated in 2018. Joined Acme in 2021.", today());

    assert_eq!(estimate.source, EstimateSource::YearSpan);
    assert_eq!(estimate.years, 3.0);
}

#[test]
fn single_year_is_not_evidence() {
    let estimate = ExperienceEstimator::default().estimate("Class of 2019", today());
    assert_eq!(estimate.source, EstimateSource::NoEvidence);
    assert_eq!(estimate.years, 0.0);
}

#[test]
fn injected_segmenter_drives_sentence_tier() {
    let segmenter = FixedSegmenter(vec![
        "Experience in retail.",
        "More experience in logistics.",
        "Hobbies: chess.",
    ]);
    let estimator = ExperienceEstimator::new(Arc::new(segmenter));

    let estimate = estimator.estimate("no dates or keywords here", today());
    assert_eq!(estimate.source, EstimateSource::ExperienceSentences);
    assert_eq!(estimate.years, 2.0);
}

#[test]
fn ingestion_records_years_once() {
    let (service, _) = build_service();
    let record = service.ingest(alice(), fixed_now()).expect("alice ingests");
    assert_eq!(record.total_experience_years, 6.01);

    let later = service
        .get(&record.id)
        .expect("record stored");
    assert_eq!(later.total_experience_years, 6.01);
}
