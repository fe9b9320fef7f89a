//! Per-record keep/drop stages.
//!
//! A `RecordStage` sees one complete record at a time and decides whether it
//! continues to the output. Stages may keep state across records, such as
//! the per-pattern hit counts of [`BoilerplateStage`].

use crate::patterns::PatternSet;
use crate::record::Record;

/// Outcome for a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Keep,
    Drop,
}

/// A filter stage that decides on records one at a time.
pub trait RecordStage {
    /// Decide whether `record` is written to the output.
    fn decide(&mut self, record: &Record) -> Decision;

    /// The display name of this stage.
    fn name(&self) -> &str;
}

/// Drops records whose `# text = ` value starts with a boilerplate prefix.
///
/// Records without a text line are always kept.
pub struct BoilerplateStage<'p> {
    patterns: &'p PatternSet,
    hits: Vec<u64>,
}

impl<'p> BoilerplateStage<'p> {
    pub fn new(patterns: &'p PatternSet) -> Self {
        Self {
            patterns,
            hits: vec![0; patterns.len()],
        }
    }

    /// Dropped-record count per pattern, in pattern order.
    ///
    /// A record is credited to the first pattern it matches.
    pub fn hits(&self) -> &[u64] {
        &self.hits
    }

    /// Patterns paired with their hit counts, skipping patterns never hit.
    pub fn hit_summary(&self) -> impl Iterator<Item = (&'p str, u64)> + '_ {
        self.patterns
            .iter()
            .zip(self.hits.iter().copied())
            .filter(|&(_, n)| n > 0)
    }
}

impl RecordStage for BoilerplateStage<'_> {
    fn decide(&mut self, record: &Record) -> Decision {
        let Some(text) = record.text() else {
            return Decision::Keep;
        };
        match self.patterns.first_match(text) {
            Some(index) => {
                self.hits[index] += 1;
                log::trace!(
                    "pattern {:?} matched text {:?}",
                    self.patterns.get(index).unwrap_or_default(),
                    String::from_utf8_lossy(text)
                );
                Decision::Drop
            }
            None => Decision::Keep,
        }
    }

    fn name(&self) -> &str {
        "BOILERPLATE"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(text: &str) -> Record {
        Record::from_lines([format!("# text = {text}\n"), "1\tx\t_\n".to_string()])
    }

    #[test]
    fn test_drops_matching_text() {
        let patterns = PatternSet::new(["DOI:"]);
        let mut stage = BoilerplateStage::new(&patterns);
        assert_eq!(stage.decide(&record("DOI: 10.1234/x")), Decision::Drop);
        assert_eq!(stage.decide(&record("A real sentence.")), Decision::Keep);
    }

    #[test]
    fn test_keeps_record_without_text() {
        let patterns = PatternSet::new([""]);
        let mut stage = BoilerplateStage::new(&patterns);
        let no_text = Record::from_lines(["# sent_id = 7\n", "1\tx\t_\n"]);
        assert_eq!(stage.decide(&no_text), Decision::Keep);
        assert_eq!(stage.hits(), &[0]);
    }

    #[test]
    fn test_empty_pattern_set_keeps_everything() {
        let patterns = PatternSet::default();
        let mut stage = BoilerplateStage::new(&patterns);
        assert_eq!(stage.decide(&record("DOI: 1")), Decision::Keep);
        assert!(stage.hits().is_empty());
    }

    #[test]
    fn test_hits_credit_first_matching_pattern() {
        let patterns = PatternSet::new(["Copyright", "Copy", "Volume:"]);
        let mut stage = BoilerplateStage::new(&patterns);
        stage.decide(&record("Copyright 2015"));
        stage.decide(&record("Copyright 2016"));
        stage.decide(&record("Copy editor"));
        stage.decide(&record("Nothing here"));

        assert_eq!(stage.hits(), &[2, 1, 0]);
        let summary: Vec<(&str, u64)> = stage.hit_summary().collect();
        assert_eq!(summary, vec![("Copyright", 2), ("Copy", 1)]);
    }

    #[test]
    fn test_name() {
        let patterns = PatternSet::default();
        assert_eq!(BoilerplateStage::new(&patterns).name(), "BOILERPLATE");
    }
}
