#![cfg(test)]
/*!
Selectors the shared components render with, which must stay in the unified
theme (`ui/assets/theme/main.css`). Update this list together with the
component markup when renaming a class.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    // Buttons
    ".button {",
    ".button--ghost",
    // Ignis page
    ".page-ignis__header",
    ".page-ignis__logo",
    ".page-ignis__badges",
    ".page-ignis__row",
    ".page-ignis__note",
    // Stack list
    ".stack-list {",
    ".stack-list__element",
    ".stack-list__title",
    ".stack-list__subtitle",
    // Code samples
    ".code-sample {",
    ".code-sample__body",
    ".code-sample__copy",
    // Responsive block
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !THEME_CSS.contains(**sel))
        .copied()
        .collect();

    assert!(
        missing.is_empty(),
        "Missing {} required CSS selectors/tokens in unified theme:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn ignis_accent_color_is_defined() {
    assert!(THEME_CSS.contains("--ignis-color:"));
    assert!(THEME_CSS.contains("var(--ignis-color)"));
}
