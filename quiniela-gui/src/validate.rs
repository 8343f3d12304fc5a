use email_address::EmailAddress;

/// A single rule applied to the raw content of a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    Required,
    MinLength(usize),
    Email,
}

impl Constraint {
    pub fn holds(&self, value: &str) -> bool {
        match self {
            Constraint::Required => !value.trim().is_empty(),
            // Constraints other than Required accept an empty value, an
            // optional field left blank is fine.
            Constraint::MinLength(min) => value.is_empty() || value.chars().count() >= *min,
            Constraint::Email => {
                value.is_empty()
                    || EmailAddress::parse_with_options(
                        value,
                        email_address::Options::default().with_required_tld(),
                    )
                    .is_ok()
            }
        }
    }
}

/// The set of constraints attached to one field.
///
/// Submission eligibility is always recomputed from the raw field values
/// through [`FieldRules::check`], never read back from what the widgets
/// currently display.
#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    constraints: &'static [Constraint],
}

impl FieldRules {
    pub const fn new(constraints: &'static [Constraint]) -> Self {
        Self { constraints }
    }

    pub fn check(&self, value: &str) -> bool {
        self.constraints.iter().all(|c| c.holds(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank_values() {
        assert!(!Constraint::Required.holds(""));
        assert!(!Constraint::Required.holds("   "));
        assert!(Constraint::Required.holds("admin"));
    }

    #[test]
    fn min_length_skips_empty_values() {
        assert!(Constraint::MinLength(6).holds(""));
        assert!(!Constraint::MinLength(6).holds("abc12"));
        assert!(Constraint::MinLength(6).holds("abc123"));
    }

    #[test]
    fn email_requires_a_tld() {
        assert!(Constraint::Email.holds(""));
        assert!(Constraint::Email.holds("user@example.com"));
        assert!(!Constraint::Email.holds("user@example"));
        assert!(!Constraint::Email.holds("not-an-email"));
    }

    #[test]
    fn rules_combine_constraints() {
        const PASSWORD: FieldRules =
            FieldRules::new(&[Constraint::Required, Constraint::MinLength(6)]);
        assert!(!PASSWORD.check(""));
        assert!(!PASSWORD.check("abc12"));
        assert!(PASSWORD.check("abc123"));
    }
}
