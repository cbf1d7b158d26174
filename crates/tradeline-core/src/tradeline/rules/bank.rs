//! Creditor name from the first institution-looking line.

use super::patterns::BANK_KEYWORDS;
use super::{LineRule, RuleResult, Slot};
use crate::tradeline::line::CleanLine;

/// Takes the first line containing an institution keyword. Later matches are
/// ignored.
pub struct BankName<R> {
    slot: Slot<R, String>,
    found: bool,
}

impl<R> BankName<R> {
    pub fn new(slot: Slot<R, String>) -> Self {
        Self { slot, found: false }
    }
}

impl<R> LineRule<R> for BankName<R> {
    fn name(&self) -> &'static str {
        "Account Name"
    }

    fn apply(&mut self, record: &mut R, line: &CleanLine) -> RuleResult {
        if self.found {
            return Ok(());
        }

        let upper = line.as_str().to_uppercase();
        if BANK_KEYWORDS.iter().any(|k| upper.contains(k)) {
            *(self.slot)(record) = line.as_str().to_string();
            self.found = true;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_wins() {
        let mut name = String::from("N/A");
        let mut rule = BankName::new(|r: &mut String| r);

        for (i, text) in ["Credit Report", "Capital One Bank USA", "Navy FCU"]
            .iter()
            .enumerate()
        {
            rule.apply(&mut name, &CleanLine::new(i + 1, text)).unwrap();
        }
        assert_eq!(name, "Capital One Bank USA");
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        let mut name = String::new();
        let mut rule = BankName::new(|r: &mut String| r);

        rule.apply(&mut name, &CleanLine::new(1, "Golden 1 Credit Union"))
            .unwrap();
        assert_eq!(name, "Golden 1 Credit Union");
    }
}
