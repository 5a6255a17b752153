//! Input providers for interactive flows.

use std::collections::VecDeque;

/// Source of answers to interactive questions.
///
/// `None` means the shopper cancelled or input ended; flows treat it the
/// same as an empty answer.
pub trait Prompt {
    /// Ask a question and return the answer, if any.
    fn ask(&mut self, label: &str) -> Option<String>;
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn ask(&mut self, label: &str) -> Option<String> {
        (**self).ask(label)
    }
}

/// A prompt that replays canned answers in order.
///
/// Questions asked after the answers run out get `None`. Every question is
/// recorded so tests can check what was asked.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<Option<String>>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    /// Create a prompt answering with `answers`, in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(|a| Some(a.into())).collect(),
            asked: Vec::new(),
        }
    }

    /// Queue a cancelled answer.
    #[must_use]
    pub fn then_cancel(mut self) -> Self {
        self.answers.push_back(None);
        self
    }

    /// Labels of every question asked so far.
    #[must_use]
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Number of answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, label: &str) -> Option<String> {
        self.asked.push(label.to_owned());
        self.answers.pop_front().flatten()
    }
}
