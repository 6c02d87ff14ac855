//! Entropy-based guess ranking
//!
//! A guess is worth playing when its response splits the remaining candidates
//! into many small groups. The expected information of a guess is the Shannon
//! entropy of its response distribution over the candidate columns; ranking
//! sorts every allowed guess by that measure.

use rayon::prelude::*;

use crate::core::Response;
use crate::table::LookupTable;

/// A guess scored against a candidate set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedGuess {
    /// Canonical word index of the guess.
    pub word_index: usize,
    /// Expected information in bits.
    pub information: f64,
    /// Whether the guess itself can still be the answer.
    pub is_candidate: bool,
    /// Candidate count expected to survive the guess: |C| · 2^(−information).
    pub expected_remaining: f64,
}

/// Expected information (bits) from playing a guess against the candidates
///
/// Groups the candidate columns by the guess row's response values and
/// computes H = −Σ p·log₂(p) over the group frequencies. An empty candidate
/// set yields 0.0.
///
/// # Panics
/// Panics if `guess` or any candidate index is out of range for the table.
#[must_use]
pub fn information_bits(table: &LookupTable, guess: usize, candidates: &[usize]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let row = table.row(guess);
    let mut counts = [0u32; Response::COUNT];
    for &candidate in candidates {
        counts[row[candidate] as usize] += 1;
    }

    let total = candidates.len() as f64;
    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let probability = f64::from(count) / total;
            -probability * probability.log2()
        })
        .sum()
}

/// Rank guesses by expected information, best first
///
/// `guess_pool` limits which rows are scored; `None` scores every word in the
/// table. Ties in information break toward the lower word index, so rankings
/// are fully deterministic.
#[must_use]
pub fn rank(
    table: &LookupTable,
    candidates: &[usize],
    guess_pool: Option<&[usize]>,
) -> Vec<RankedGuess> {
    let pool: Vec<usize> = match guess_pool {
        Some(rows) => rows.to_vec(),
        None => (0..table.size()).collect(),
    };

    let mut in_candidates = vec![false; table.size()];
    for &candidate in candidates {
        in_candidates[candidate] = true;
    }

    let total = candidates.len() as f64;
    let mut ranked: Vec<RankedGuess> = pool
        .par_iter()
        .map(|&word_index| {
            let information = information_bits(table, word_index, candidates);
            RankedGuess {
                word_index,
                information,
                is_candidate: in_candidates[word_index],
                expected_remaining: total * (-information).exp2(),
            }
        })
        .collect();

    ranked.sort_unstable_by(|a, b| {
        b.information
            .total_cmp(&a.information)
            .then_with(|| a.word_index.cmp(&b.word_index))
    });
    ranked
}

/// First `count` entries of a ranking
///
/// A `count` at or beyond the length returns the whole ranking.
#[must_use]
pub fn top_n(mut ranked: Vec<RankedGuess>, count: usize) -> Vec<RankedGuess> {
    ranked.truncate(count);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Codec;

    const EPSILON: f64 = 1e-10;

    fn test_table() -> (Codec, LookupTable) {
        let codec = Codec::build(["solen", "stole", "store", "svane"]).unwrap();
        let table = LookupTable::build(&codec);
        (codec, table)
    }

    fn all_columns(table: &LookupTable) -> Vec<usize> {
        (0..table.size()).collect()
    }

    #[test]
    fn empty_candidate_set_scores_zero() {
        let (_, table) = test_table();
        assert_eq!(information_bits(&table, 0, &[]), 0.0);
    }

    #[test]
    fn single_candidate_scores_zero_for_every_guess() {
        let (_, table) = test_table();
        for guess in 0..table.size() {
            assert_eq!(information_bits(&table, guess, &[2]), 0.0);
        }
    }

    #[test]
    fn distinct_responses_score_log2_of_count() {
        let (codec, table) = test_table();
        let candidates = all_columns(&table);

        // "store" answers differently against all four words.
        let store = codec.index_of("store").unwrap();
        let row = table.row(store);
        let mut seen: Vec<u8> = candidates.iter().map(|&column| row[column]).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 4);

        assert!((information_bits(&table, store, &candidates) - 2.0).abs() < EPSILON);
    }

    #[test]
    fn partial_split_scores_between_zero_and_log2() {
        let (codec, table) = test_table();
        let candidates = all_columns(&table);

        // "svane" groups the answers 1/2/1, worth exactly 1.5 bits.
        let svane = codec.index_of("svane").unwrap();
        assert!((information_bits(&table, svane, &candidates) - 1.5).abs() < EPSILON);
    }

    #[test]
    fn rank_sorts_by_information_then_index() {
        let (_, table) = test_table();
        let candidates = all_columns(&table);
        let ranked = rank(&table, &candidates, None);

        let order: Vec<usize> = ranked.iter().map(|guess| guess.word_index).collect();
        assert_eq!(order, [0, 1, 2, 3]);
        assert!((ranked[0].information - 2.0).abs() < EPSILON);
        assert!((ranked[3].information - 1.5).abs() < EPSILON);
    }

    #[test]
    fn full_tie_falls_back_to_ascending_index() {
        let (_, table) = test_table();
        // One candidate left: every guess is worth 0 bits.
        let ranked = rank(&table, &[1], None);
        let order: Vec<usize> = ranked.iter().map(|guess| guess.word_index).collect();
        assert_eq!(order, [0, 1, 2, 3]);
        assert!(ranked.iter().all(|guess| guess.information == 0.0));
    }

    #[test]
    fn expected_remaining_matches_information() {
        let (codec, table) = test_table();
        let candidates = all_columns(&table);
        let ranked = rank(&table, &candidates, None);

        let store = codec.index_of("store").unwrap();
        let svane = codec.index_of("svane").unwrap();
        let by_index = |index: usize| {
            ranked
                .iter()
                .find(|guess| guess.word_index == index)
                .copied()
                .unwrap()
        };

        assert!((by_index(store).expected_remaining - 1.0).abs() < EPSILON);
        assert!((by_index(svane).expected_remaining - 2.0_f64.sqrt()).abs() < EPSILON);
    }

    #[test]
    fn is_candidate_reflects_membership() {
        let (_, table) = test_table();
        let ranked = rank(&table, &[1, 3], None);
        for guess in &ranked {
            assert_eq!(guess.is_candidate, guess.word_index == 1 || guess.word_index == 3);
        }
    }

    #[test]
    fn guess_pool_restricts_ranked_rows() {
        let (_, table) = test_table();
        let candidates = all_columns(&table);
        let ranked = rank(&table, &candidates, Some(&[2, 3]));

        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|guess| guess.word_index >= 2));
    }

    #[test]
    fn top_n_truncates_and_tolerates_overshoot() {
        let (_, table) = test_table();
        let candidates = all_columns(&table);
        let ranked = rank(&table, &candidates, None);

        assert_eq!(top_n(ranked.clone(), 2).len(), 2);
        assert_eq!(top_n(ranked.clone(), 10), ranked);
    }
}
