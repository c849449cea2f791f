//! Shared catalog fixtures for the integration suites.

use metacat::{Catalog, DISPLAY_NAME, DeclarationSet, KindId};

metacat::meta_keys! {
    pub enum Greeting {
        Default,
        Hi,
        Hello,
        GoodMorning,
        GoodAfternoon,
        GutenTag,
    }
}

metacat::meta_keys! {
    pub enum Language {
        English,
        German,
        French,
    }
}

/// The metadata axis the greeting fixtures declare on.
pub const ALIAS: KindId = KindId::new("alias");

/// A greeting catalog exercising every payload shape:
/// a scalar, a collection, repeated scalar entries of one kind,
/// repeated collection entries, and a key with no metadata at all.
pub fn greeting_catalog() -> Catalog<Greeting, DeclarationSet<Greeting>> {
    Catalog::new(
        DeclarationSet::builder()
            .attach(Greeting::Hi, ALIAS, 123)
            .attach_all(Greeting::Hello, ALIAS, ["one", "two"])
            .attach(Greeting::GoodMorning, ALIAS, "one")
            .attach(Greeting::GoodMorning, ALIAS, "two")
            .attach_all(Greeting::GoodAfternoon, ALIAS, ["one", "two"])
            .attach_all(Greeting::GoodAfternoon, ALIAS, ["three", "four"])
            .attach(Greeting::GutenTag, ALIAS, "german")
            .attach(Greeting::Hi, DISPLAY_NAME, "a casual hello")
            .build(),
    )
}

/// A language catalog whose aliases overlap the greeting metadata.
pub fn language_catalog() -> Catalog<Language, DeclarationSet<Language>> {
    Catalog::new(
        DeclarationSet::builder()
            .attach_all(Language::English, ALIAS, ["english", "one", "two"])
            .attach(Language::German, ALIAS, "german")
            .attach(Language::French, ALIAS, "french")
            .build(),
    )
}
