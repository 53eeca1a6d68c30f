use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Language a course was taught in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ru];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == s)
            .ok_or_else(|| format!("Unknown language code: {}", s))
    }
}

/// Final grade for a course on the Russian academic scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    #[default]
    Excellent,
    Good,
    Satisfactory,
    Passed,
}

impl Grade {
    pub const ALL: [Grade; 4] = [
        Grade::Excellent,
        Grade::Good,
        Grade::Satisfactory,
        Grade::Passed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Grade::Excellent => "отлично",
            Grade::Good => "хорошо",
            Grade::Satisfactory => "удовлетворительно",
            Grade::Passed => "зачтено",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grade::ALL
            .into_iter()
            .find(|grade| grade.label() == s)
            .ok_or_else(|| format!("Unknown grade: {}", s))
    }
}

/// A single course result on a FairCV.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreDto {
    pub subject: String,
    pub lang: Language,
    pub hours: u32,
    pub credits: u32,
    pub grade: Grade,
}

/// Request body for `POST /faircvs`
#[derive(Serialize, Deserialize)]
pub struct NewFairCvDto {
    pub student_name: String,
    /// Account of the connected wallet that signs the record
    pub wallet_address: String,
    pub scores: Vec<ScoreDto>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FairCvSummaryDto {
    pub id: i64,
    pub student_name: String,
    pub scores_count: u32,
    pub created_at: NaiveDateTime,
}

/// One page of `GET /faircvs`, pages are numbered from 1
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FairCvPageDto {
    pub items: Vec<FairCvSummaryDto>,
    pub page: usize,
    pub total_pages: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_round_trips_through_code() {
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>(), Ok(lang));
        }
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn test_grade_parses_from_label() {
        assert_eq!("зачтено".parse::<Grade>(), Ok(Grade::Passed));
        assert!("excellent".parse::<Grade>().is_err());
    }

    #[test]
    fn test_score_wire_format() {
        let score = ScoreDto {
            subject: "Linear Algebra".to_string(),
            lang: Language::Ru,
            hours: 72,
            credits: 4,
            grade: Grade::Satisfactory,
        };

        let json = serde_json::to_value(&score).unwrap();
        assert_eq!(json["lang"], "ru");
        assert_eq!(json["grade"], "satisfactory");
    }
}
