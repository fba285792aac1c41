//! The onboarding questionnaire.
//!
//! A short, paged set of questions about the user's goals and routines. The
//! answers become the [`UserProfile`] that grounds the assistant's replies.

use serde::{Deserialize, Serialize};

use crate::conversation::UserProfile;
use crate::error::{ScheduleError, ScheduleResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub description: String,
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question: String,
    pub answer: String,
}

/// Outcome of answering the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Moved on to the question at this index
    Next(usize),
    /// That was the last question
    Complete(Vec<Answer>),
}

pub fn default_questions() -> Vec<Question> {
    vec![
        Question {
            prompt: "What do you want?".to_string(),
            description: "Tell us about your immediate goals and desires.".to_string(),
            placeholder: "e.g., I want to be happy, I want to be more productive...".to_string(),
        },
        Question {
            prompt: "What do you really want?".to_string(),
            description: "Dig deeper into your core motivations and long-term aspirations."
                .to_string(),
            placeholder: "e.g., I want financial freedom, I want a loving partner...".to_string(),
        },
        Question {
            prompt: "What are your regular commitments?".to_string(),
            description: "Tell us about your recurring activities and obligations.".to_string(),
            placeholder:
                "e.g., Mon-Fri 9-5 I have work, Mon/Wed/Fri I go to the gym 7-8:30am..."
                    .to_string(),
        },
    ]
}

#[derive(Debug, Clone)]
pub struct Questionnaire {
    questions: Vec<Question>,
    answers: Vec<Option<String>>,
    step: usize,
}

impl Default for Questionnaire {
    fn default() -> Self {
        Questionnaire::new(default_questions())
    }
}

impl Questionnaire {
    pub fn new(questions: Vec<Question>) -> Self {
        let answers = vec![None; questions.len()];
        Questionnaire {
            questions,
            answers,
            step: 0,
        }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// 1-based position and total, for a progress indicator.
    pub fn progress(&self) -> (usize, usize) {
        (self.step + 1, self.questions.len())
    }

    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.step)
    }

    /// The answer previously given to the current question, if any.
    pub fn current_answer(&self) -> &str {
        self.answers
            .get(self.step)
            .and_then(|a| a.as_deref())
            .unwrap_or("")
    }

    pub fn is_first(&self) -> bool {
        self.step == 0
    }

    pub fn is_last(&self) -> bool {
        self.step + 1 >= self.questions.len()
    }

    /// Record an answer for the current question and advance.
    pub fn answer(&mut self, text: &str) -> ScheduleResult<Step> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ScheduleError::invalid("Answer must not be empty"));
        }

        if let Some(slot) = self.answers.get_mut(self.step) {
            *slot = Some(text.to_string());
        }

        if self.is_last() {
            Ok(Step::Complete(self.answers()))
        } else {
            self.step += 1;
            Ok(Step::Next(self.step))
        }
    }

    /// Go back one question. Returns false when already on the first.
    pub fn previous(&mut self) -> bool {
        if self.step == 0 {
            return false;
        }
        self.step -= 1;
        true
    }

    /// Answers given so far, in question order.
    pub fn answers(&self) -> Vec<Answer> {
        self.questions
            .iter()
            .zip(&self.answers)
            .filter_map(|(q, a)| {
                a.as_ref().map(|answer| Answer {
                    question: q.prompt.clone(),
                    answer: answer.clone(),
                })
            })
            .collect()
    }

    /// Profile built from the default questions' answers.
    pub fn profile(&self) -> UserProfile {
        let answer_at = |i: usize| self.answers.get(i).cloned().flatten();
        UserProfile {
            what_do_you_want: answer_at(0),
            what_do_you_really_want: answer_at(1),
            regulars: answer_at(2),
        }
    }
}
