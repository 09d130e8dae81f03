use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_current = _lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(crate::i18n::current_language);

    #[cfg(debug_assertions)]
    {
        tracing::trace!(target: "i18n", lang = %_lang_current, "Home render");
    }

    rsx! {
        section { class: "page page-home",
            h1 { {crate::t!("home-title")} }
            p { {crate::t!("home-intro")} }
            p { class: "page-home__cta",
                {crate::t!("home-cta")}
            }
        }
    }
}
