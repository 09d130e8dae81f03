//! Shared UI crate for the Ignis page: analytics, localization, components
//! and views used by every platform crate.

pub mod analytics;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    mod code_sample;
    pub use code_sample::CodeSample;
}

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
