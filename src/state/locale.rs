#[cfg(test)]
#[path = "locale_test.rs"]
mod locale_test;

use crate::i18n::Language;

/// The active UI language.
///
/// Initialized from the selector's default (English) and mutated only by
/// explicit selection; every localized text surface is a closure over this
/// state, so setting it re-applies the whole catalog.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocaleState {
    pub language: Language,
}
