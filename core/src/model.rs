use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CategoryId(pub u64);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Listing entry, only used to pick which categories get fetched in full.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategorySummary {
    pub id: CategoryId,
    pub title: String,
    pub clue_count: u32,
}

impl CategorySummary {
    pub fn new(id: u64, title: impl Into<String>, clue_count: u32) -> Self {
        Self {
            id: CategoryId(id),
            title: title.into(),
            clue_count,
        }
    }

    pub const fn has_enough_clues(&self) -> bool {
        self.clue_count >= crate::MIN_CLUES_PER_CATEGORY
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clue {
    pub question: String,
    pub answer: String,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    pub clues: Vec<Clue>,
}

impl Category {
    pub fn clue(&self, index: usize) -> Option<&Clue> {
        self.clues.get(index)
    }
}
