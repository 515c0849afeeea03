use crate::constants::QUESTION_COUNT;

/// Option letter a player can answer with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerKey {
    A,
    B,
    C,
    D,
}

impl AnswerKey {
    /// Parses a single option letter, ignoring case.
    pub fn parse(choice: &str) -> Option<Self> {
        match choice {
            "A" | "a" => Some(Self::A),
            "B" | "b" => Some(Self::B),
            "C" | "c" => Some(Self::C),
            "D" | "d" => Some(Self::D),
            _ => None,
        }
    }

    pub fn letter(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

pub struct Question {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    pub answer: AnswerKey,
}

impl Question {
    /// Anything that does not parse as the correct letter counts as wrong.
    pub fn is_correct(&self, choice: &str) -> bool {
        AnswerKey::parse(choice) == Some(self.answer)
    }
}

/// Looks up a question by bank index, wrapping out-of-range indices.
pub fn question(index: u8) -> &'static Question {
    &QUESTION_BANK[usize::from(index % QUESTION_COUNT)]
}

pub static QUESTION_BANK: [Question; QUESTION_COUNT as usize] = [
    Question {
        prompt: "What is GenLayer's primary goal?",
        options: ["A) Replace lawyers", "B) Trust infra for AI Age", "C) Social crypto", "D) Central AI DB"],
        answer: AnswerKey::B,
    },
    Question {
        prompt: "What are programs on GenLayer called?",
        options: ["A) Smart Scripts", "B) AI Protocols", "C) Intelligent Contracts", "D) Synthetic Agreements"],
        answer: AnswerKey::C,
    },
    Question {
        prompt: "GenVM is based on which language?",
        options: ["A) Solidity", "B) C++", "C) JavaScript", "D) Python"],
        answer: AnswerKey::D,
    },
    Question {
        prompt: "What is GenLayer's consensus mechanism?",
        options: ["A) Proof of Stake", "B) Optimistic Democracy", "C) Proof of Intelligence", "D) Delegated Authority"],
        answer: AnswerKey::B,
    },
    Question {
        prompt: "How does GenVM handle non-deterministic ops?",
        options: ["A) Disallows them", "B) Equivalence Principle", "C) Exact seed matching", "D) User choice"],
        answer: AnswerKey::B,
    },
    Question {
        prompt: "What are the two account types?",
        options: ["A) User/Bot", "B) Private/Public", "C) EOAs & Contracts", "D) Validated/Anon"],
        answer: AnswerKey::C,
    },
    Question {
        prompt: "What happens to unused gas?",
        options: ["A) Burned", "B) Validator bonus", "C) Refunded to user", "D) Donated to DAO"],
        answer: AnswerKey::C,
    },
    Question {
        prompt: "How do contracts access the internet?",
        options: ["A) API keys", "B) http protocol", "C) Manual entry", "D) Google only"],
        answer: AnswerKey::B,
    },
    Question {
        prompt: "Role of the Leader in consensus?",
        options: ["A) Pay gas", "B) Propose execution", "C) Allow validators", "D) Write code"],
        answer: AnswerKey::B,
    },
    Question {
        prompt: "Purpose of Finality Window?",
        options: ["A) LLM thinking time", "B) Cancel tx", "C) Appeal period", "D) Price stabilization"],
        answer: AnswerKey::C,
    },
    Question {
        prompt: "What does Grayboxing protect against?",
        options: ["A) High costs", "B) Prompt injections", "C) Slow internet", "D) Unauthorized transfers"],
        answer: AnswerKey::B,
    },
    Question {
        prompt: "How is gas priced for AI tasks?",
        options: ["A) Fixed fee", "B) Auction/Commit-Reveal", "C) Word count", "D) BTC price"],
        answer: AnswerKey::B,
    },
    Question {
        prompt: "Truth without Trust removes what?",
        options: ["A) Oversight", "B) Belief (via Math/AI)", "C) Regulation", "D) Popularity"],
        answer: AnswerKey::B,
    },
    Question {
        prompt: "Intelligent Contracts vs Ethereum Contracts?",
        options: ["A) Faster/Less secure", "B) NLP & Web Access", "C) No gas", "D) Solidity only"],
        answer: AnswerKey::B,
    },
    Question {
        prompt: "Result of a successful appeal against a validator?",
        options: ["A) Promotion", "B) Nothing", "C) Slashing (Loss)", "D) Ban"],
        answer: AnswerKey::C,
    },
    Question {
        prompt: "What is a 'True DAO'?",
        options: ["A) Intelligent Oracle", "B) World DB", "C) AI Decision Org", "D) Synthetic Bank"],
        answer: AnswerKey::C,
    },
    Question {
        prompt: "What is an 'Intelligent Oracle'?",
        options: ["A) AI Prophet", "B) Web Data Contract", "C) Hardware Key", "D) Riddle Bot"],
        answer: AnswerKey::B,
    },
    Question {
        prompt: "Equivalence Principle output?",
        options: ["A) Summary", "B) Score 1-100", "C) TRUE or FALSE", "D) New code"],
        answer: AnswerKey::C,
    },
    Question {
        prompt: "Why Python for GenVM?",
        options: ["A) Math speed", "B) AI/ML Standard", "C) Blockchain native", "D) Easy for kids"],
        answer: AnswerKey::B,
    },
    Question {
        prompt: "What determines Authority in GenLayer?",
        options: ["A) Gatekeepers", "B) Money", "C) Code", "D) Location"],
        answer: AnswerKey::C,
    },
];
