//! Opening-pair search
//!
//! Before any feedback exists, the best two-guess opening can be found
//! offline: for a first guess g1, partition the answers by the response g1
//! would draw, then weight the information a second guess g2 earns inside
//! each partition by that partition's probability. Scoring every ordered
//! shortlist pair this way costs O(shortlist² · n) and the result is saved
//! as CSV for reuse.

use std::fmt;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::core::{Codec, Response};
use crate::solver::ranking::information_bits;
use crate::table::LookupTable;

const PAIRS_HEADER: &str = "guess_1,guess_2,information,expected_nb_words";

/// An ordered pair of opening guesses with its expected information
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairScore {
    /// Canonical word index of the first guess.
    pub first: usize,
    /// Canonical word index of the second guess.
    pub second: usize,
    /// Expected conditional information of the pair, in bits.
    pub information: f64,
    /// Word count expected to survive both guesses: n · 2^(−information).
    pub expected_remaining: f64,
}

/// A pair read back from a saved CSV
#[derive(Debug, Clone, PartialEq)]
pub struct PairRecord {
    pub first: String,
    pub second: String,
    pub information: f64,
    pub expected_remaining: f64,
}

/// Error type for reading a saved pairs file
#[derive(Debug)]
pub enum PairFileError {
    Missing(PathBuf),
    Io(io::Error),
    Malformed { line: usize },
}

impl fmt::Display for PairFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(path) => write!(
                f,
                "pairs file {} not found, run the best-pairs command to generate it",
                path.display()
            ),
            Self::Io(error) => write!(f, "failed to read pairs file: {error}"),
            Self::Malformed { line } => write!(f, "pairs file is malformed at line {line}"),
        }
    }
}

impl std::error::Error for PairFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(error) => Some(error),
            _ => None,
        }
    }
}

/// Score every ordered pair of shortlist guesses, best first
///
/// The score of (g1, g2) is Σ over g1's responses r1 of
/// p(r1) · H(g2 | answers where g1 scores r1), the information the pair is
/// expected to deliver beyond g1's own split. Pairs tie-break by ascending
/// (first, second) index, and (g, g) legally scores zero.
#[must_use]
pub fn rank_pairs(table: &LookupTable, shortlist: &[usize]) -> Vec<PairScore> {
    if table.size() == 0 || shortlist.is_empty() {
        return Vec::new();
    }

    let total = table.size() as f64;
    let mut pairs: Vec<PairScore> = shortlist
        .par_iter()
        .flat_map(|&first| {
            let partitions = partition_by_response(table, first);
            shortlist
                .iter()
                .map(|&second| {
                    let mut information = 0.0;
                    for partition in &partitions {
                        let weight = partition.len() as f64 / total;
                        information += weight * information_bits(table, second, partition);
                    }
                    PairScore {
                        first,
                        second,
                        information,
                        expected_remaining: total * (-information).exp2(),
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect();

    pairs.sort_unstable_by(|a, b| {
        b.information
            .total_cmp(&a.information)
            .then_with(|| a.first.cmp(&b.first))
            .then_with(|| a.second.cmp(&b.second))
    });
    pairs
}

/// Group all answer columns by the response a guess row gives them
fn partition_by_response(table: &LookupTable, guess: usize) -> Vec<Vec<usize>> {
    let mut groups: Vec<Vec<usize>> = vec![Vec::new(); Response::COUNT];
    for (column, &value) in table.row(guess).iter().enumerate() {
        groups[value as usize].push(column);
    }
    groups.retain(|group| !group.is_empty());
    groups
}

/// Save scored pairs as CSV with the `guess_1,guess_2,...` header
///
/// # Errors
/// Returns any underlying file system error.
pub fn save_pairs(
    path: impl AsRef<Path>,
    codec: &Codec,
    pairs: &[PairScore],
) -> io::Result<()> {
    let file = fs::File::create(path)?;
    let mut out = BufWriter::new(file);
    writeln!(out, "{PAIRS_HEADER}")?;
    for pair in pairs {
        writeln!(
            out,
            "{},{},{:.6},{:.6}",
            codec.word_at(pair.first),
            codec.word_at(pair.second),
            pair.information,
            pair.expected_remaining
        )?;
    }
    out.flush()
}

/// Load a previously saved pairs CSV
///
/// # Errors
/// - [`PairFileError::Missing`] if there is no file at `path`
/// - [`PairFileError::Malformed`] for a wrong header or unparseable row
pub fn load_pairs(path: impl AsRef<Path>) -> Result<Vec<PairRecord>, PairFileError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|error| {
        if error.kind() == io::ErrorKind::NotFound {
            PairFileError::Missing(path.to_path_buf())
        } else {
            PairFileError::Io(error)
        }
    })?;

    let mut lines = text.lines();
    if lines.next() != Some(PAIRS_HEADER) {
        return Err(PairFileError::Malformed { line: 1 });
    }

    let mut records = Vec::new();
    for (index, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_number = index + 2;
        let malformed = || PairFileError::Malformed { line: line_number };

        let mut fields = line.split(',');
        let (Some(first), Some(second), Some(information), Some(expected), None) = (
            fields.next(),
            fields.next(),
            fields.next(),
            fields.next(),
            fields.next(),
        ) else {
            return Err(malformed());
        };

        records.push(PairRecord {
            first: first.to_owned(),
            second: second.to_owned(),
            information: information.parse().map_err(|_| malformed())?,
            expected_remaining: expected.parse().map_err(|_| malformed())?,
        });
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    fn fixture() -> (Codec, LookupTable) {
        let codec = Codec::build(["solen", "stole", "store", "svane"]).unwrap();
        let table = LookupTable::build(&codec);
        (codec, table)
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("ordle_pairs_{}_{name}", std::process::id()))
    }

    #[test]
    fn pair_score_matches_hand_computation() {
        let (codec, table) = fixture();
        let svane = codec.index_of("svane").unwrap();
        let store = codec.index_of("store").unwrap();

        let pairs = rank_pairs(&table, &[svane, store]);
        let svane_store = pairs
            .iter()
            .find(|pair| pair.first == svane && pair.second == store)
            .unwrap();

        // "svane" splits 1/2/1; "store" then separates the pair of answers
        // it left together, so the pair adds 0.5 · 1 bit.
        assert!((svane_store.information - 0.5).abs() < EPSILON);
        assert!((svane_store.expected_remaining - 2.0 * 2.0_f64.sqrt()).abs() < EPSILON);
    }

    #[test]
    fn same_word_pair_adds_no_information() {
        let (codec, table) = fixture();
        let svane = codec.index_of("svane").unwrap();

        let pairs = rank_pairs(&table, &[svane]);
        assert_eq!(pairs.len(), 1);
        assert!(pairs[0].information.abs() < EPSILON);
        assert!((pairs[0].expected_remaining - 4.0).abs() < EPSILON);
    }

    #[test]
    fn pairs_sort_by_score_then_index_pair() {
        let (codec, table) = fixture();
        let store = codec.index_of("store").unwrap();
        let svane = codec.index_of("svane").unwrap();

        let pairs = rank_pairs(&table, &[store, svane]);
        let order: Vec<(usize, usize)> = pairs.iter().map(|pair| (pair.first, pair.second)).collect();

        // (svane, store) is the only pair with information to add; the
        // zero-scoring rest order by ascending index pair.
        assert_eq!(
            order,
            [(svane, store), (store, store), (store, svane), (svane, svane)]
        );
    }

    #[test]
    fn every_ordered_pair_is_scored() {
        let (_, table) = fixture();
        let pairs = rank_pairs(&table, &[0, 1, 2]);
        assert_eq!(pairs.len(), 9);
    }

    #[test]
    fn empty_shortlist_yields_no_pairs() {
        let (_, table) = fixture();
        assert!(rank_pairs(&table, &[]).is_empty());
    }

    #[test]
    fn save_load_round_trip() {
        let (codec, table) = fixture();
        let pairs = rank_pairs(&table, &[2, 3]);
        let path = temp_path("round_trip.csv");

        save_pairs(&path, &codec, &pairs).unwrap();
        let records = load_pairs(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(records.len(), pairs.len());
        for (record, pair) in records.iter().zip(&pairs) {
            assert_eq!(record.first, codec.word_at(pair.first));
            assert_eq!(record.second, codec.word_at(pair.second));
            assert!((record.information - pair.information).abs() < 1e-5);
            assert!((record.expected_remaining - pair.expected_remaining).abs() < 1e-5);
        }
    }

    #[test]
    fn load_rejects_missing_file() {
        let result = load_pairs(temp_path("missing.csv"));
        assert!(matches!(result, Err(PairFileError::Missing(_))));
    }

    #[test]
    fn load_rejects_wrong_header() {
        let path = temp_path("bad_header.csv");
        fs::write(&path, "first,second\n").unwrap();
        let result = load_pairs(&path);
        let _ = fs::remove_file(&path);

        assert!(matches!(result, Err(PairFileError::Malformed { line: 1 })));
    }

    #[test]
    fn load_rejects_unparseable_rows() {
        let path = temp_path("bad_row.csv");
        fs::write(&path, format!("{PAIRS_HEADER}\nbager,gader,abc,1.0\n")).unwrap();
        let result = load_pairs(&path);
        let _ = fs::remove_file(&path);

        assert!(matches!(result, Err(PairFileError::Malformed { line: 2 })));
    }
}
