//! Home hero content and its admin preview form.

use serde::{Deserialize, Serialize};

/// Message shown after the admin form replaces the preview.
pub const PREVIEW_UPDATED_MESSAGE: &str =
    "Preview updated. Connect an API or CMS to persist this hero.";

/// Display strings for the home page hero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroConfig {
    pub status: String,
    pub drop_label: String,
    /// Free-form date range, e.g. "Dec 02 — Jan 05".
    pub release_window: String,
    pub title: String,
    pub description: String,
    pub cta_label: String,
    pub image: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            status: "Now Dropping".to_string(),
            drop_label: "Blondes & Brunettes".to_string(),
            release_window: "Dec 02 — Jan 05".to_string(),
            title: "Anfa Label".to_string(),
            description: "Fashion that defies conformity, empowering individuals to express \
                          their true selves with every stitch."
                .to_string(),
            cta_label: "Explore catalog".to_string(),
            image: "/static/images/Hero2.webp".to_string(),
        }
    }
}

impl HeroConfig {
    /// The title split into its first word and the rest.
    ///
    /// The remainder is empty for single-word titles.
    #[must_use]
    pub fn title_lines(&self) -> (&str, &str) {
        let trimmed = self.title.trim();
        trimmed
            .split_once(char::is_whitespace)
            .map_or((trimmed, ""), |(first, rest)| (first, rest.trim_start()))
    }

    /// First line of the split title.
    #[must_use]
    pub fn title_first_line(&self) -> &str {
        self.title_lines().0
    }

    /// Second line of the split title, possibly empty.
    #[must_use]
    pub fn title_second_line(&self) -> &str {
        self.title_lines().1
    }
}

/// Hero admin form submission. Every field is required by the form, but
/// the server accepts whatever it is sent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeroForm {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub drop_label: String,
    #[serde(default)]
    pub release_window: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cta_label: String,
    #[serde(default)]
    pub image: String,
}

impl From<HeroForm> for HeroConfig {
    fn from(form: HeroForm) -> Self {
        Self {
            status: form.status,
            drop_label: form.drop_label,
            release_window: form.release_window,
            title: form.title,
            description: form.description,
            cta_label: form.cta_label,
            image: form.image,
        }
    }
}
