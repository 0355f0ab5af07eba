use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::offices::OfficeDirectory;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\w.-]+@[\w.-]+\.\w{2,}$").expect("email pattern is a valid regex")
});

pub fn is_nonempty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Shape check only: `local@domain.tld` with a TLD of two or more word chars.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

pub fn is_known_office(offices: &OfficeDirectory, value: &str) -> bool {
    offices.contains(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn blank_identifiers_are_rejected() {
        assert!(!is_nonempty(""));
        assert!(!is_nonempty("   \t"));
        assert!(is_nonempty(" GAGB000101HSRNNR09 "));
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("a.b@c.do"));
        assert!(is_valid_email("first-last@mail.example.mx"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("ab.co"));
        assert!(!is_valid_email("a@b.c"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn office_membership_is_case_and_space_insensitive() {
        let offices = OfficeDirectory::sonora();
        assert!(is_known_office(&offices, "ome guaymas"));
        assert!(is_known_office(&offices, "  Ome Guaymas  "));
        assert!(!is_known_office(&offices, "OME TIJUANA"));
    }

    proptest! {
        #[test]
        fn any_non_blank_string_is_nonempty(s in "[a-zA-Z0-9]{1,18}", pad in " {0,4}") {
            let padded = format!("{pad}{s}{pad}");
            prop_assert!(is_nonempty(&padded));
        }

        #[test]
        fn whitespace_only_is_empty(s in "[ \t\n]{0,8}") {
            prop_assert!(!is_nonempty(&s));
        }

        #[test]
        fn well_shaped_emails_pass(
            local in "[a-z0-9._-]{1,12}",
            domain in "[a-z0-9-]{1,12}",
            tld in "[a-z]{2,6}",
        ) {
            let email = format!("{local}@{domain}.{tld}");
            prop_assert!(is_valid_email(&email));
        }

        #[test]
        fn emails_without_at_sign_fail(s in "[a-z0-9.]{0,20}") {
            prop_assert!(!is_valid_email(&s));
        }

        #[test]
        fn emails_without_dot_fail(local in "[a-z0-9]{1,8}", domain in "[a-z0-9]{1,8}") {
            let email = format!("{local}@{domain}");
            prop_assert!(!is_valid_email(&email));
        }
    }
}
