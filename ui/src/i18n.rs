//! Internationalization (i18n) support for `ignis-ui`.
//!
//! Built on:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/ignis-ui.ftl   (fallback/reference)
//!   es-ES/ignis-ui.ftl
//!   fr-FR/ignis-ui.ftl
//! ```
//!
//! Usage in a component:
//! ```ignore
//! crate::i18n::init(); // idempotent
//! let title = crate::t!("ignis-header-title");
//! ```
//!
//! Platform notes:
//! - Desktop: `DesktopLanguageRequester` (OS locale list).
//! - Web/WASM: `WebLanguageRequester` (`navigator.languages`); assets are
//!   always embedded on WASM (`debug-embed`).
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Translation macro routing every lookup through [`LOADER`].
///
/// ```ignore
/// t!("nav-home")
/// t!("ignis-python-required", version = "3.6")
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback file is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "ignis-ui";

const FALLBACK: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!(target: "i18n", "failed selecting languages ({err}); continuing with fallback");
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => {
            tracing::debug!(target: "i18n", "ignoring unparseable language tag {tag:?}");
            return Ok(());
        }
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Tag of the language currently used for lookups.
pub fn current_language() -> String {
    LOADER
        .current_languages()
        .first()
        .map(|l| l.to_string())
        .unwrap_or_else(|| FALLBACK.to_string())
}

/// Embedded language tags, sorted (for the language picker).
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Name of a language in that language, as shown in the picker.
/// Unknown tags are shown as-is.
pub fn language_display_name(tag: &str) -> &str {
    match tag {
        "en-US" => "English",
        "es-ES" => "Español",
        "fr-FR" => "Français",
        other => other,
    }
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
