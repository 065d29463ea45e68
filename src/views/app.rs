use dioxus::prelude::*;

use crate::utils::{apply_document_theme, Theme};

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");
const LOGO: Asset = asset!("/assets/logo.svg");

/// External link shown under the toggle, kept from the starter template.
pub const LEARN_REACT_TEXT: &str = "Learn React";
pub const LEARN_REACT_URL: &str = "https://reactjs.org";

/// Root component. Owns the theme signal and keeps the document root's
/// `data-theme` attribute in sync with it.
#[component]
pub fn ThemeApp() -> Element {
    let mut theme = use_signal(Theme::default);

    // Re-runs on mount and on every flip, since it reads the signal.
    use_effect(move || {
        apply_document_theme(theme());
    });

    rsx! {
        div {
            class: "App",
            document::Link { rel: "stylesheet", href: MAIN_CSS }

            header {
                class: "App-header",
                img {
                    class: "App-logo",
                    src: LOGO,
                    alt: "logo",
                }
                p {
                    "Edit "
                    code { "src/views/app.rs" }
                    " and save to reload."
                }
                p {
                    class: "theme-status",
                    "Current theme: {theme()}"
                }
                button {
                    class: "theme-toggle",
                    aria_label: theme().toggle_label(),
                    onclick: move |_| {
                        let next = theme().toggled();
                        log::info!("switching theme to {}", next);
                        theme.set(next);
                    },
                    {theme().toggle_label()}
                }
                a {
                    class: "App-link",
                    href: LEARN_REACT_URL,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    {LEARN_REACT_TEXT}
                }
            }
        }
    }
}
