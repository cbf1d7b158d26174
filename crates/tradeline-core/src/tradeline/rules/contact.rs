//! Creditor contact lines recognized by fixed literals.

use super::{LineRule, RuleResult, Slot};
use crate::tradeline::line::CleanLine;

/// Captures the whole clean line when it contains one of a closed set of
/// upper-case literals.
pub struct ContactLiteral<R> {
    name: &'static str,
    literals: &'static [&'static str],
    slot: Slot<R, String>,
}

impl<R> ContactLiteral<R> {
    pub fn new(name: &'static str, literals: &'static [&'static str], slot: Slot<R, String>) -> Self {
        Self {
            name,
            literals,
            slot,
        }
    }
}

impl<R> LineRule<R> for ContactLiteral<R> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&mut self, record: &mut R, line: &CleanLine) -> RuleResult {
        let upper = line.as_str().to_uppercase();
        if self.literals.iter().any(|lit| upper.contains(lit)) {
            *(self.slot)(record) = line.as_str().to_string();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tradeline::rules::patterns::{PHONE_PREFIXES, PO_BOX_LITERALS};

    #[test]
    fn test_po_box_line() {
        let mut address = String::from("N/A");
        let mut rule = ContactLiteral::new("Address", PO_BOX_LITERALS, |r: &mut String| r);

        rule.apply(&mut address, &CleanLine::new(1, "Account Type Revolving"))
            .unwrap();
        assert_eq!(address, "N/A");

        rule.apply(&mut address, &CleanLine::new(2, "  P.O. Box 15298  "))
            .unwrap();
        assert_eq!(address, "P.O. Box 15298");
    }

    #[test]
    fn test_phone_line() {
        let mut phone = String::new();
        let mut rule = ContactLiteral::new("Phone", PHONE_PREFIXES, |r: &mut String| r);

        rule.apply(&mut phone, &CleanLine::new(1, "(800)   955-7070")).unwrap();
        assert_eq!(phone, "(800)  955-7070");
    }
}
