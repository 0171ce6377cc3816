use serde::{Deserialize, Serialize};

/// Number of records shown in the static FAQ preview listing.
pub const DEFAULT_PREVIEW_LIMIT: usize = 10;

/// One question/keywords/answer block of the FAQ corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqRecord {
    pub question: String,
    /// Lowercased, trimmed, de-duplicated keywords in first-seen order.
    pub keywords: Vec<String>,
    pub answer: String,
}

impl FaqRecord {
    /// Records without keywords can only be shown in previews, never matched.
    pub fn is_matchable(&self) -> bool {
        !self.keywords.is_empty()
    }
}

/// A record paired with its keyword score for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredMatch {
    pub score: u32,
    pub record: FaqRecord,
}

/// The parsed corpus, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqCorpus {
    records: Vec<FaqRecord>,
}

impl FaqCorpus {
    pub fn new(records: Vec<FaqRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[FaqRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The first `limit` records, for the preview listing.
    pub fn preview(&self, limit: usize) -> &[FaqRecord] {
        &self.records[..limit.min(self.records.len())]
    }
}

impl From<Vec<FaqRecord>> for FaqCorpus {
    fn from(records: Vec<FaqRecord>) -> Self {
        Self::new(records)
    }
}
