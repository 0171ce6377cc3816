use crate::model::{FaqRecord, ScoredMatch};

/// Points awarded for every keyword found in the query.
pub const KEYWORD_HIT_SCORE: u32 = 2;

/// Lowest score a record needs to be returned.
pub const DEFAULT_MIN_SCORE: u32 = 1;

/// Score `records` against `query` by keyword substring hits.
///
/// Matches are ordered by descending score; equal scores keep corpus order.
/// Records scoring below `min_score` are left out.
pub fn keyword_match(query: &str, records: &[FaqRecord], min_score: u32) -> Vec<ScoredMatch> {
    let query = query.to_lowercase();

    let mut matches = records
        .iter()
        .filter_map(|record| {
            let hits = record
                .keywords
                .iter()
                .filter(|keyword| !keyword.is_empty() && query.contains(keyword.as_str()))
                .count() as u32;
            let score = hits * KEYWORD_HIT_SCORE;
            (score >= min_score).then(|| ScoredMatch { score, record: record.clone() })
        })
        .collect::<Vec<_>>();

    // sort_by is stable
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}
