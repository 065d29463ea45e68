use std::fmt::{Display, Formatter};

/// The two visual modes of the app. The active value is mirrored onto the
/// document root's `data-theme` attribute, which the stylesheet keys its
/// custom-property blocks on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The complementary theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// The value written to `data-theme`.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Toggle-button label. Names the theme a click switches *to*, not the
    /// current one.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark mode",
            Theme::Dark => "Switch to light mode",
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mirror the theme onto `<html data-theme="...">`.
///
/// Runs after every render of the root component, so the attribute never
/// diverges from the signal. On non-wasm targets there is no document to
/// mutate and this is a no-op.
pub fn apply_document_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        let root = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element());

        match root {
            Some(element) => {
                if let Err(e) = element.set_attribute("data-theme", theme.as_str()) {
                    log::warn!("failed to set data-theme attribute: {:?}", e);
                }
            }
            None => {
                log::warn!("document root unavailable, data-theme not applied");
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        log::debug!("non-wasm target, skipping data-theme sync for {}", theme);
    }
}
