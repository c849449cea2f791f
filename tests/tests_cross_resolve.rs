//! Cross-enumeration resolution tests: matching one key type's constants
//! to another's through shared metadata.

#[path = "helpers/mod.rs"]
mod helpers;

use helpers::fixtures::{ALIAS, Greeting, Language, greeting_catalog, language_catalog};
use metacat::{Catalog, DeclarationSet, KindId, MatchMode, QueryError, Scalar};

#[test]
fn test_resolve_through_shared_value() {
    let greetings = greeting_catalog();
    let languages = language_catalog();
    // GutenTag's alias "german" is German's alias too.
    assert_eq!(
        greetings.resolve_key(Greeting::GutenTag, ALIAS, &languages, ALIAS),
        Ok(Some(Language::German))
    );
}

#[test]
fn test_resolution_is_the_manual_pipeline() {
    let greetings = greeting_catalog();
    let languages = language_catalog();

    let values = greetings
        .values_of::<Scalar>(Greeting::Hello, ALIAS)
        .unwrap();
    let manual = languages
        .key_from_values(&values, ALIAS, MatchMode::Overlap)
        .unwrap();

    assert_eq!(
        greetings.resolve_key(Greeting::Hello, ALIAS, &languages, ALIAS),
        Ok(manual)
    );
    assert_eq!(manual, Some(Language::English));
}

#[test]
fn test_resolve_keys_collects_all_targets() {
    let greetings = greeting_catalog();
    // A target whose keys both overlap the source values.
    let numbers = Catalog::new(
        DeclarationSet::builder()
            .attach_all(Language::English, ALIAS, ["one", "three"])
            .attach(Language::French, ALIAS, "two")
            .build(),
    );
    assert_eq!(
        greetings.resolve_keys(Greeting::Hello, ALIAS, &numbers, ALIAS),
        Ok(vec![Language::English, Language::French])
    );
}

#[test]
fn test_source_key_without_metadata_resolves_to_nothing() {
    let greetings = greeting_catalog();
    let languages = language_catalog();
    assert_eq!(
        greetings.resolve_key(Greeting::Default, ALIAS, &languages, ALIAS),
        Ok(None)
    );
    assert_eq!(
        greetings.resolve_keys(Greeting::Default, ALIAS, &languages, ALIAS),
        Ok(vec![])
    );
}

#[test]
fn test_resolve_by_declared_name() {
    const SPEAKS: KindId = KindId::new("speaks");
    let greetings = greeting_catalog();
    // German's metadata names the GutenTag constant itself.
    let languages = Catalog::new(
        DeclarationSet::builder()
            .attach_all(Language::German, SPEAKS, ["GutenTag", "Hallo"])
            .build(),
    );
    assert_eq!(
        greetings.resolve_key_by_name(Greeting::GutenTag, &languages, SPEAKS),
        Ok(Some(Language::German))
    );
    assert_eq!(
        greetings.resolve_key_by_name(Greeting::Hi, &languages, SPEAKS),
        Ok(None)
    );
}

#[test]
fn test_resolve_named_key_from_string_metadata() {
    const NAMES: KindId = KindId::new("names");
    // Hi's metadata spells out Language constants by name.
    let greetings = Catalog::new(
        DeclarationSet::builder()
            .attach_all(Greeting::Hi, NAMES, ["French", "German"])
            .build(),
    );
    // First match follows Language's declaration order, not metadata order.
    assert_eq!(
        greetings.resolve_named_key::<Language>(Greeting::Hi, NAMES),
        Ok(Some(Language::German))
    );
    assert_eq!(
        greetings.resolve_named_keys::<Language>(Greeting::Hi, NAMES),
        Ok(vec![Language::German, Language::French])
    );
}

#[test]
fn test_resolve_named_key_needs_string_values() {
    let greetings = greeting_catalog();
    // Hi's alias is numeric; interpreting it as names is a cast error.
    assert!(matches!(
        greetings.resolve_named_key::<Language>(Greeting::Hi, ALIAS),
        Err(QueryError::Cast(_))
    ));
}
