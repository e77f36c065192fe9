#![forbid(unsafe_code)]

//! The recommendation quiz progression.
//!
//! A strictly forward, one-shot walk over a fixed number of questions.
//! Each advance hides the current question and reveals the next; after the
//! last question the results region is shown instead, and the machine
//! stays there. There is deliberately no way back: the quiz is a one-way
//! survey.

use bookdeck_view::ViewTree;
use tracing::debug;

/// Mutable quiz position.
///
/// `current_step` runs from 1 through `total_steps`, then rests at
/// `total_steps + 1` once results are showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizState {
    current_step: u32,
    total_steps: u32,
}

impl QuizState {
    /// Start at question 1 of `total_steps`.
    pub fn new(total_steps: u32) -> Self {
        Self {
            current_step: 1,
            total_steps,
        }
    }

    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    pub fn total_steps(&self) -> u32 {
        self.total_steps
    }

    /// True once the walk has passed the last question.
    pub fn at_results(&self) -> bool {
        self.current_step > self.total_steps
    }

    /// Move to the next question, or to results after the last one.
    ///
    /// Returns false (and changes nothing) once results are showing.
    pub fn advance(&mut self) -> bool {
        if self.at_results() {
            return false;
        }
        self.current_step += 1;
        debug!(
            step = self.current_step,
            total = self.total_steps,
            results = self.at_results(),
            "quiz advance"
        );
        true
    }
}

/// Stateless quiz renderer: maps steps to question regions.
#[derive(Debug, Clone)]
pub struct QuizFlow {
    question_prefix: String,
    results_region: String,
}

impl Default for QuizFlow {
    fn default() -> Self {
        Self {
            question_prefix: "question-".to_string(),
            results_region: "recommendations".to_string(),
        }
    }
}

impl QuizFlow {
    pub fn new(question_prefix: impl Into<String>, results_region: impl Into<String>) -> Self {
        Self {
            question_prefix: question_prefix.into(),
            results_region: results_region.into(),
        }
    }

    fn question_region(&self, step: u32) -> String {
        format!("{}{step}", self.question_prefix)
    }

    /// Show the active step's region and hide all the others in one batch.
    pub fn render(&self, tree: &mut ViewTree, state: &QuizState) {
        for step in 1..=state.total_steps() {
            let id = self.question_region(step);
            tree.set_visible(&id, !state.at_results() && step == state.current_step());
        }
        tree.set_visible(&self.results_region, state.at_results());
    }
}
