//! Editable score rows of a FairCV being created.

use crate::{
    client::i18n::errors,
    model::faircv::{Grade, Language, ScoreDto},
};

/// Raw input of a score row, exactly as typed.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreDraft {
    pub subject: String,
    pub lang: String,
    pub hours: String,
    pub credits: String,
    pub grade: String,
}

impl Default for ScoreDraft {
    fn default() -> Self {
        Self {
            subject: String::new(),
            lang: Language::default().code().to_string(),
            hours: String::new(),
            credits: String::new(),
            grade: Grade::default().label().to_string(),
        }
    }
}

/// Messages for the inputs of a draft that failed to parse.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DraftErrors {
    pub subject: Option<&'static str>,
    pub hours: Option<&'static str>,
    pub credits: Option<&'static str>,
}

fn parse_count(raw: &str) -> Result<u32, &'static str> {
    raw.trim().parse::<u32>().map_err(|_| errors::NUMBER_INVALID)
}

impl ScoreDraft {
    pub fn from_score(score: &ScoreDto) -> Self {
        Self {
            subject: score.subject.clone(),
            lang: score.lang.code().to_string(),
            hours: score.hours.to_string(),
            credits: score.credits.to_string(),
            grade: score.grade.label().to_string(),
        }
    }

    /// Validates the draft into a score, reporting every bad input at once.
    pub fn parse(&self) -> Result<ScoreDto, DraftErrors> {
        let subject = self.subject.trim();
        let hours = parse_count(&self.hours);
        let credits = parse_count(&self.credits);
        let lang = self.lang.parse::<Language>().unwrap_or_default();
        let grade = self.grade.parse::<Grade>().unwrap_or_default();

        match (subject.is_empty(), hours, credits) {
            (false, Ok(hours), Ok(credits)) => Ok(ScoreDto {
                subject: subject.to_string(),
                lang,
                hours,
                credits,
                grade,
            }),
            (empty, hours, credits) => Err(DraftErrors {
                subject: empty.then_some(errors::SUBJECT_EMPTY),
                hours: hours.err(),
                credits: credits.err(),
            }),
        }
    }
}

/// A committed score with a stable identity for keyed rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreRow {
    pub id: u64,
    pub score: ScoreDto,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ScoreAction {
    Add(ScoreDto),
    Update(u64, ScoreDto),
    Remove(u64),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scores {
    rows: Vec<ScoreRow>,
    next_id: u64,
}

impl Scores {
    pub fn rows(&self) -> &[ScoreRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Applies an edit; updates and removals of unknown rows are ignored.
    pub fn apply(&mut self, action: ScoreAction) {
        match action {
            ScoreAction::Add(score) => {
                self.rows.push(ScoreRow {
                    id: self.next_id,
                    score,
                });
                self.next_id += 1;
            }
            ScoreAction::Update(id, score) => {
                if let Some(row) = self.rows.iter_mut().find(|row| row.id == id) {
                    row.score = score;
                }
            }
            ScoreAction::Remove(id) => self.rows.retain(|row| row.id != id),
        }
    }

    pub fn to_scores(&self) -> Vec<ScoreDto> {
        self.rows.iter().map(|row| row.score.clone()).collect()
    }
}
