//! Floating assistant panel: open/closed flag plus a log of canned
//! question/answer pairs.

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

/// Topics a `[data-assist]` button can ask about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topic {
    Register,
    About,
    News,
}

impl Topic {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "register" => Some(Self::Register),
            "about" => Some(Self::About),
            "news" => Some(Self::News),
            _ => None,
        }
    }

    pub fn question(self) -> &'static str {
        match self {
            Self::Register => "How do I register?",
            Self::About => "What is RoboticsHub?",
            Self::News => "How do I use the news page?",
        }
    }

    pub fn answer(self) -> &'static str {
        match self {
            Self::Register => {
                "Go to the Register page, fill in your name, email, password, and interest area, then submit the form. Your progress is saved automatically while typing."
            }
            Self::About => {
                "RoboticsHub is your learning space for humanoids, AI robots, automation, and projects that connect software with hardware."
            }
            Self::News => {
                "Scroll through the main cards for curated highlights, and check the Live Robotics Updates section for simulated real-time feed."
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speaker {
    Me,
    Bot,
}

impl Speaker {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Me => "me",
            Self::Bot => "bot",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssistantMessage {
    pub speaker: Speaker,
    pub text: &'static str,
}

#[derive(Clone, Debug, Default)]
pub struct AssistantState {
    pub open: bool,
    pub messages: Vec<AssistantMessage>,
}

impl AssistantState {
    /// Empty log, starting open or closed as the page markup rendered it.
    pub fn starting_open(open: bool) -> Self {
        Self { open, ..Self::default() }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Append the question and canned answer for `raw`. Unknown topics append
    /// nothing; returns whether anything was added.
    pub fn ask(&mut self, raw: &str) -> bool {
        let Some(topic) = Topic::parse(raw) else {
            return false;
        };
        self.messages.push(AssistantMessage { speaker: Speaker::Me, text: topic.question() });
        self.messages.push(AssistantMessage { speaker: Speaker::Bot, text: topic.answer() });
        true
    }
}
