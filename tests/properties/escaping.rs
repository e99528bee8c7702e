//! Property tests for escaping.

use proptest::prelude::*;

use navwalker::escaping::{escape_attr, escape_html, escape_url};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: escaped text never contains markup or quote characters.
    #[test]
    fn property_escape_html_defuses_markup(s in "(?s).{0,64}") {
        let escaped = escape_html(&s);
        prop_assert!(!escaped.contains(['<', '>', '"', '\'']));
        prop_assert_eq!(escape_attr(&s), escaped);
    }

    /// PROPERTY: escaping is stable on its own output.
    #[test]
    fn property_escape_html_idempotent(s in "(?s).{0,64}") {
        let once = escape_html(&s);
        prop_assert_eq!(escape_html(&once), once);
    }

    /// PROPERTY: escaped urls cannot break out of a quoted attribute.
    #[test]
    fn property_escape_url_is_attribute_safe(s in "(?s).{0,64}") {
        let escaped = escape_url(&s);
        prop_assert!(!escaped.contains(['<', '>', '"', '\'', ' ', '\n', '\t']));
    }

    /// PROPERTY: only allow-listed schemes survive.
    #[test]
    fn property_escape_url_blocks_script_schemes(rest in "[a-z0-9()/.]{0,24}") {
        let url = format!("javascript:{}", rest);
        prop_assert_eq!(escape_url(&url), "");
    }
}
