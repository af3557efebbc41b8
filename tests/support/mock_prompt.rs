use std::collections::VecDeque;

use vi_cjk::LineSource;

/// Answers ex prompts from a script; `None` entries cancel the prompt.
#[derive(Default, Debug, Clone)]
pub struct ScriptedPrompt {
    answers: VecDeque<Option<String>>,
    pub asked: usize,
}

impl ScriptedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answering(line: &str) -> Self {
        let mut prompt = Self::new();
        prompt.push(line);
        prompt
    }

    pub fn push(&mut self, line: &str) {
        self.answers.push_back(Some(line.to_owned()));
    }

    pub fn push_cancel(&mut self) {
        self.answers.push_back(None);
    }
}

impl LineSource for ScriptedPrompt {
    fn read_line(&mut self) -> Option<String> {
        self.asked += 1;
        self.answers.pop_front().flatten()
    }
}
