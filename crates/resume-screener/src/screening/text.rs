//! Text helpers standing in for the extraction pipeline: sentence segmentation, skill
//! pre-detection, education snippets, and contact details.

use once_cell::sync::Lazy;
use regex::Regex;

use super::vocabulary::Vocabulary;

static SENTENCE_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+\s+|\r?\n\s*").expect("sentence break pattern compiles"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("email pattern compiles")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?\d[\d \t().-]{7,}\d").expect("phone pattern compiles"));

const MIN_PHONE_DIGITS: usize = 9;

/// Lowercase tokens whose trailing period does not close a sentence.
const ABBREVIATIONS: &[&str] = &[
    "dr", "mr", "mrs", "ms", "prof", "st", "jr", "sr", "vs", "etc", "inc", "ltd", "approx",
];

/// Splits extracted resume text into sentences.
pub trait SentenceSegmenter: Send + Sync {
    fn segment(&self, text: &str) -> Vec<String>;
}

/// Punctuation and line-break segmenter.
///
/// Breaks after `.`, `!` or `?` followed by whitespace, and at every line break. A period
/// closing a known abbreviation ("Dr.") or a dotted token ("B.Sc.") does not end a sentence;
/// short acronyms such as "Go" or "QA" still do.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedSegmenter;

impl SentenceSegmenter for RuleBasedSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut sentence_start = 0;

        for found in SENTENCE_BREAK_RE.find_iter(text) {
            let separator = found.as_str();
            let punctuated = separator.starts_with(['.', '!', '?']);
            if punctuated && separator.starts_with('.') {
                let token = text[sentence_start..found.start()]
                    .rsplit(char::is_whitespace)
                    .next()
                    .unwrap_or_default();
                if is_abbreviation(token) {
                    continue;
                }
            }

            let sentence_end = if punctuated {
                found.start() + separator.trim_end().len()
            } else {
                found.start()
            };
            push_sentence(&mut sentences, &text[sentence_start..sentence_end]);
            sentence_start = found.end();
        }

        push_sentence(&mut sentences, &text[sentence_start..]);
        sentences
    }
}

fn is_abbreviation(token: &str) -> bool {
    token.contains('.') || ABBREVIATIONS.contains(&token.to_lowercase().as_str())
}

fn push_sentence(sentences: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

/// Canonical skills whose lowercase form appears anywhere in the text, in vocabulary order.
pub fn detect_skills(text: &str, vocabulary: &Vocabulary) -> Vec<String> {
    let lowered = text.to_lowercase();
    vocabulary
        .skills()
        .iter()
        .filter(|skill| lowered.contains(&skill.to_lowercase()))
        .cloned()
        .collect()
}

/// Sentences mentioning an education marker as a whole word.
pub fn education_snippets(sentences: &[String], vocabulary: &Vocabulary) -> Vec<String> {
    sentences
        .iter()
        .filter(|sentence| {
            let lowered = sentence.to_lowercase();
            vocabulary
                .education_markers()
                .iter()
                .any(|marker| contains_whole_word(&lowered, marker))
        })
        .cloned()
        .collect()
}

pub fn extract_emails(text: &str) -> Vec<String> {
    EMAIL_RE
        .find_iter(text)
        .map(|found| found.as_str().to_string())
        .collect()
}

/// Phone-like digit runs within a single line; runs with fewer than nine digits (such as
/// "2018 - 2021") are skipped.
pub fn extract_phones(text: &str) -> Vec<String> {
    PHONE_RE
        .find_iter(text)
        .map(|found| found.as_str().trim().to_string())
        .filter(|candidate| candidate.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS)
        .collect()
}

/// Word-boundary match with regex `\b` semantics on both ends of `needle`.
///
/// Both arguments are expected to be lowercase already.
pub(crate) fn contains_whole_word(haystack: &str, needle: &str) -> bool {
    let (Some(first), Some(last)) = (needle.chars().next(), needle.chars().next_back()) else {
        return false;
    };

    haystack.match_indices(needle).any(|(index, _)| {
        let before = haystack[..index].chars().next_back();
        let after = haystack[index + needle.len()..].chars().next();
        is_boundary(before, first) && is_boundary(after, last)
    })
}

fn is_boundary(outside: Option<char>, inside: char) -> bool {
    outside.map(is_word_char).unwrap_or(false) != is_word_char(inside)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_on_punctuation_and_line_breaks() {
        let sentences = RuleBasedSegmenter.segment(
            "Jane Doe\nSenior engineer with 5 years of experience. Led teams! Open to relocation?",
        );
        assert_eq!(
            sentences,
            vec![
                "Jane Doe",
                "Senior engineer with 5 years of experience.",
                "Led teams!",
                "Open to relocation?",
            ]
        );
    }

    #[test]
    fn keeps_abbreviations_inside_the_sentence() {
        let sentences =
            RuleBasedSegmenter.segment("B.Sc. in Computer Science, Dr. Smith supervised. Done");
        assert_eq!(
            sentences,
            vec!["B.Sc. in Computer Science, Dr. Smith supervised.", "Done"]
        );
    }

    #[test]
    fn acronyms_still_end_sentences() {
        let sentences = RuleBasedSegmenter.segment("Built tooling in Go. Mr. Lee led QA. Moved to HR.");
        assert_eq!(
            sentences,
            vec!["Built tooling in Go.", "Mr. Lee led QA.", "Moved to HR."]
        );
    }

    #[test]
    fn whole_word_matching_respects_boundaries() {
        assert!(contains_whole_word("bs in physics", "bs"));
        assert!(contains_whole_word("b.sc in physics", "b.sc"));
        assert!(!contains_whole_word("jobs in physics", "bs"));
        assert!(!contains_whole_word("masters", "master"));
        assert!(contains_whole_word("attended high school", "high school"));
        assert!(!contains_whole_word("anything", ""));
    }

    #[test]
    fn detects_canonical_skills_case_insensitively() {
        let vocabulary = Vocabulary::with_skills(["Python", "Node.js", "Kubernetes"]);
        let skills = detect_skills("Built services in PYTHON and node.js", &vocabulary);
        assert_eq!(skills, vec!["Python".to_string(), "Node.js".to_string()]);
    }

    #[test]
    fn picks_education_sentences() {
        let sentences = vec![
            "Bachelor of Engineering, Universitas Indonesia".to_string(),
            "Worked on degree-audit tooling".to_string(),
            "Managed a team of five".to_string(),
        ];
        let snippets = education_snippets(&sentences, &Vocabulary::default());
        assert_eq!(snippets, sentences[..2].to_vec());
    }

    #[test]
    fn extracts_contact_details() {
        let text = "jane.doe@example.com | +62 812-3456-7890 | 2018 - 2021";
        assert_eq!(extract_emails(text), vec!["jane.doe@example.com".to_string()]);
        assert_eq!(extract_phones(text), vec!["+62 812-3456-7890".to_string()]);
    }

    #[test]
    fn year_ranges_on_consecutive_lines_are_not_phones() {
        assert!(extract_phones("Acme 2015 - 2018\n2019 - 2021 Globex").is_empty());
        assert_eq!(
            extract_phones("Phone:\n0812 3456 7890\n2019 - 2021"),
            vec!["0812 3456 7890".to_string()]
        );
    }
}
