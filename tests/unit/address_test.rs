//! Unit tests for address bar resolution.

use rstest::rstest;

use ripe_browser::services::address_bar::{encode_query, has_scheme, resolve_input, AddressInput};

const SEARCH: &str = "https://www.google.com/search?q=";

#[rstest]
#[case("https://example.com")]
#[case("http://localhost:8080/path?x=1")]
#[case("file:///etc/hosts")]
#[case("about:blank")]
#[case("ftp://mirror.example.org/pub")]
fn test_urls_with_scheme_load_unchanged(#[case] input: &str) {
    assert_eq!(
        resolve_input(input, SEARCH),
        Some(AddressInput::Url(input.to_string()))
    );
}

#[rstest]
#[case("open source rewrite", "https://www.google.com/search?q=open+source+rewrite")]
#[case("rust", "https://www.google.com/search?q=rust")]
#[case("example.com", "https://www.google.com/search?q=example.com")]
#[case("two  spaces", "https://www.google.com/search?q=two+spaces")]
#[case("c++ & rust", "https://www.google.com/search?q=c%2B%2B+%26+rust")]
fn test_text_without_scheme_becomes_search(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(
        resolve_input(input, SEARCH),
        Some(AddressInput::Search(expected.to_string()))
    );
}

#[test]
fn test_surrounding_whitespace_is_trimmed() {
    let resolved = resolve_input("  https://example.com  ", SEARCH).unwrap();
    assert_eq!(resolved.url(), "https://example.com");
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn test_blank_input_resolves_to_nothing(#[case] input: &str) {
    assert_eq!(resolve_input(input, SEARCH), None);
}

#[test]
fn test_custom_search_prefix() {
    let resolved = resolve_input("hello world", "https://duckduckgo.com/?q=").unwrap();
    assert_eq!(resolved.into_url(), "https://duckduckgo.com/?q=hello+world");
}

#[test]
fn test_has_scheme() {
    assert!(has_scheme("https://example.com"));
    assert!(!has_scheme("www.example.com"));
    assert!(!has_scheme("what is rust"));
}

#[test]
fn test_encode_query_non_ascii() {
    assert_eq!(encode_query("café"), "caf%C3%A9");
}
