//! Site chrome rendered around every page.

use tower_sessions::Session;

use crate::content::{self, FOOTER_LINKS, NAV_LINKS, NavLink};
use crate::models::audio::{self, AUDIO_VIDEO_ID, BAR_COUNT, PLAYER_VOLUME};
use crate::models::{Bag, session};

/// Server-rendered state of the audio widget.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioWidget {
    pub video_id: &'static str,
    pub volume: u8,
    pub bars: [f64; BAR_COUNT],
}

impl Default for AudioWidget {
    fn default() -> Self {
        Self {
            video_id: AUDIO_VIDEO_ID,
            volume: PLAYER_VOLUME,
            bars: audio::initial_bar_heights(),
        }
    }
}

/// Banner, header, footer, and audio widget data.
#[derive(Debug, Clone)]
pub struct SiteChrome {
    /// Home renders a transparent header over the hero.
    pub is_home: bool,
    pub banner: Vec<&'static str>,
    pub nav_links: &'static [NavLink],
    pub footer_links: &'static [NavLink],
    pub regions: Vec<String>,
    /// Bag shown in the header preview popover.
    pub bag: Bag,
    pub audio: AudioWidget,
}

impl SiteChrome {
    /// Chrome around an explicit bag.
    #[must_use]
    pub fn new(bag: Bag, is_home: bool) -> Self {
        Self {
            is_home,
            banner: content::banner_messages(),
            nav_links: &NAV_LINKS,
            footer_links: &FOOTER_LINKS,
            regions: content::regions(),
            bag,
            audio: AudioWidget::default(),
        }
    }

    /// Chrome for a page, reading the visitor's bag from the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn load(
        session: &Session,
        is_home: bool,
    ) -> Result<Self, tower_sessions::session::Error> {
        Ok(Self::new(session::load_bag(session).await?, is_home))
    }

    /// "1 item" / "2 items".
    #[must_use]
    pub fn bag_count_label(&self) -> String {
        match self.bag.item_count() {
            1 => "1 item".to_string(),
            n => format!("{n} items"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bag_count_label() {
        let chrome = SiteChrome::new(Bag::seeded(), false);
        assert_eq!(chrome.bag_count_label(), "2 items");

        let mut bag = Bag::seeded();
        bag.remove(anfa_core::BagItemId::new(1));
        assert_eq!(SiteChrome::new(bag, false).bag_count_label(), "1 item");
        assert_eq!(SiteChrome::new(Bag::empty(), false).bag_count_label(), "0 items");
    }

    #[test]
    fn test_header_preview_uses_bag_subtotal() {
        let chrome = SiteChrome::new(Bag::seeded(), true);
        assert_eq!(chrome.bag.subtotal_label(), "2,460 AED");
        assert_eq!(chrome.audio.bars, [0.3; BAR_COUNT]);
    }
}
