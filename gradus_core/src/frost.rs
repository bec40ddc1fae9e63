//! Frost - keyword-matching career advice
//!
//! Frost lower-cases a question and returns the advice of the first topic
//! keyword contained anywhere in it. Matching is plain substring
//! containment, so "flawless" matches the "law" topic.

use serde::{Deserialize, Serialize};

/// Returned when no topic keyword appears in the question.
pub const FALLBACK_ANSWER: &str =
    "Frost doesn't know the answer to that yet. Try rephrasing your question!";

/// One topic keyword and the advice it unlocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub topic: String,
    pub advice: String,
}

impl KnowledgeEntry {
    pub fn new(topic: &str, advice: &str) -> Self {
        Self {
            topic: topic.to_lowercase(),
            advice: advice.to_string(),
        }
    }
}

/// Ordered topic table. Lookup walks it in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
}

impl KnowledgeBase {
    /// The built-in table: engineering, medicine, law, architecture, computer science.
    pub fn builtin() -> Self {
        Self::from_entries(vec![
            KnowledgeEntry::new(
                "engineering",
                "Engineering requires strong performance in Level 2 and 3 Maths and Physics. Aim for Merit or Excellence.",
            ),
            KnowledgeEntry::new(
                "medicine",
                "To study medicine in NZ, you'll need Biology, Chemistry, and high Excellence credits. UCAT is also required.",
            ),
            KnowledgeEntry::new(
                "law",
                "Law prefers students with strong reading, writing, and reasoning skills. Excellence in English helps.",
            ),
            KnowledgeEntry::new(
                "architecture",
                "Architecture combines creativity and science. Good grades in Graphics, Math, and Physics are recommended.",
            ),
            KnowledgeEntry::new(
                "computer science",
                "Strong performance in Math and Digital Tech is helpful. Aim for Merit or higher at Level 2 and 3.",
            ),
        ])
    }

    /// Build from custom entries; topics are lower-cased so they can match.
    pub fn from_entries(entries: Vec<KnowledgeEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|e| KnowledgeEntry {
                topic: e.topic.to_lowercase(),
                advice: e.advice,
            })
            .collect();
        Self { entries }
    }

    /// First entry whose topic occurs in `question`. The caller lower-cases.
    pub fn lookup(&self, question: &str) -> Option<&KnowledgeEntry> {
        self.entries.iter().find(|e| question.contains(e.topic.as_str()))
    }

    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.topic.as_str())
    }

    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

/// The advice engine.
#[derive(Debug, Clone, Default)]
pub struct Frost {
    knowledge_base: KnowledgeBase,
}

impl Frost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_knowledge_base(knowledge_base: KnowledgeBase) -> Self {
        Self { knowledge_base }
    }

    pub fn answer(&self, question: &str) -> &str {
        let question = question.to_lowercase();
        match self.knowledge_base.lookup(&question) {
            Some(entry) => &entry.advice,
            None => FALLBACK_ANSWER,
        }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }
}
