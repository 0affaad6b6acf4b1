use std::sync::Arc;

use super::domain::DegreeLevel;

const DEFAULT_SKILLS: &[&str] = &[
    "Python",
    "JavaScript",
    "TypeScript",
    "React",
    "Node.js",
    "Django",
    "FastAPI",
    "SQL",
    "NoSQL",
    "AWS",
    "Docker",
    "Kubernetes",
    "Machine Learning",
    "Data Analysis",
    "Figma",
    "Adobe Illustrator",
    "UI/UX",
    "UI Design",
    "Photoshop",
    "HTML",
    "CSS",
    "Wireframe",
    "Prototype",
    "Git",
];

const EDUCATION_MARKERS: &[&str] = &[
    "university",
    "bachelor",
    "master",
    "phd",
    "degree",
    "diploma",
    "s1",
    "s2",
    "s3",
    "sarjana",
    "magister",
];

const COMMON_KEYWORDS: &[&str] = &["leadership", "communication", "problem solving", "teamwork"];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn default_degree_keywords(level: DegreeLevel) -> &'static [&'static str] {
    match level {
        DegreeLevel::HighSchool => &["high school", "smk", "sma"],
        DegreeLevel::Diploma => &["diploma", "associate"],
        DegreeLevel::Bachelor => &["bachelor", "sarjana", "s1", "b.sc", "bsc", "bs"],
        DegreeLevel::Master => &["master", "msc", "m.sc", "s2", "magister", "ms"],
        DegreeLevel::Phd => &["phd", "doctorate", "s3", "dr."],
    }
}

/// Immutable word lists shared by ingestion, classification, and job description analysis.
///
/// Cloning is cheap; the lists sit behind `Arc`s so one vocabulary can back every
/// component of a running service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    skills: Arc<[String]>,
    degree_keywords: Arc<[(DegreeLevel, Vec<String>)]>,
    education_markers: Arc<[String]>,
    common_keywords: Arc<[String]>,
}

impl Vocabulary {
    pub fn new(
        skills: Vec<String>,
        degree_keywords: Vec<(DegreeLevel, Vec<String>)>,
        education_markers: Vec<String>,
        common_keywords: Vec<String>,
    ) -> Self {
        let mut degree_keywords = degree_keywords;
        degree_keywords.sort_by_key(|(level, _)| level.rank());

        Self {
            skills: skills.into(),
            degree_keywords: degree_keywords.into(),
            education_markers: education_markers.into(),
            common_keywords: common_keywords.into(),
        }
    }

    /// Built-in lists with the skill vocabulary swapped out.
    pub fn with_skills<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vocabulary = Self::default();
        vocabulary.skills = skills
            .into_iter()
            .map(Into::into)
            .filter(|skill: &String| !skill.trim().is_empty())
            .collect::<Vec<_>>()
            .into();
        vocabulary
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Keyword sets in canonical level order (highschool first).
    pub fn degree_keywords(&self) -> &[(DegreeLevel, Vec<String>)] {
        &self.degree_keywords
    }

    pub fn education_markers(&self) -> &[String] {
        &self.education_markers
    }

    pub fn common_keywords(&self) -> &[String] {
        &self.common_keywords
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        let degree_keywords = DegreeLevel::ordered()
            .into_iter()
            .map(|level| (level, owned(default_degree_keywords(level))))
            .collect();

        Self::new(
            owned(DEFAULT_SKILLS),
            degree_keywords,
            owned(EDUCATION_MARKERS),
            owned(COMMON_KEYWORDS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_degree_keywords_are_in_canonical_order() {
        let vocabulary = Vocabulary::default();
        let levels: Vec<_> = vocabulary
            .degree_keywords()
            .iter()
            .map(|(level, _)| *level)
            .collect();
        assert_eq!(levels, DegreeLevel::ordered().to_vec());
    }

    #[test]
    fn with_skills_replaces_only_the_skill_list() {
        let vocabulary = Vocabulary::with_skills(["Rust", " ", "Tokio"]);
        assert_eq!(
            vocabulary.skills().to_vec(),
            vec!["Rust".to_string(), "Tokio".to_string()]
        );
        assert_eq!(
            vocabulary.common_keywords(),
            Vocabulary::default().common_keywords()
        );
    }
}
