//! Property-based tests for address bar input resolution.
//!
//! Input with a URL scheme is loaded exactly as typed; anything else becomes
//! a search whose words are joined with '+' after the search prefix.

use proptest::prelude::*;
use ripe_browser::services::address_bar::{resolve_input, AddressInput};

const SEARCH_URL: &str = "https://www.google.com/search?q=";

fn arb_url() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("https"), Just("http")],
        "[a-z][a-z0-9]{2,15}",
        prop_oneof![Just(".com"), Just(".org"), Just(".net"), Just(".io")],
        proptest::option::of("/[a-z0-9]{1,10}"),
    )
        .prop_map(|(scheme, host, tld, path)| {
            format!("{}://{}{}{}", scheme, host, tld, path.unwrap_or_default())
        })
}

fn arb_words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z0-9]{1,12}", 1..6)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn url_with_scheme_is_loaded_unchanged(url in arb_url()) {
        let resolved = resolve_input(&url, SEARCH_URL);
        prop_assert_eq!(resolved, Some(AddressInput::Url(url.clone())));
    }

    #[test]
    fn plain_words_become_search(words in arb_words(), gap in " {1,3}") {
        let text = words.join(gap.as_str());
        let expected = format!("{}{}", SEARCH_URL, words.join("+"));

        let resolved = resolve_input(&text, SEARCH_URL);
        prop_assert_eq!(resolved, Some(AddressInput::Search(expected)));
    }

    #[test]
    fn surrounding_whitespace_is_ignored(url in arb_url(), pad in "[ \t]{0,4}") {
        let text = format!("{}{}{}", pad, url, pad);
        let resolved = resolve_input(&text, SEARCH_URL).map(|r| r.into_url());
        prop_assert_eq!(resolved, Some(url));
    }

    #[test]
    fn search_url_stays_in_the_query(text in "[ -~]{1,40}") {
        if let Some(AddressInput::Search(url)) = resolve_input(&text, SEARCH_URL) {
            prop_assert!(url.starts_with(SEARCH_URL));
            let query = &url[SEARCH_URL.len()..];
            prop_assert!(!query.contains(' '));
            prop_assert!(!query.contains('&'));
            prop_assert!(!query.contains('#'));
        }
    }
}
