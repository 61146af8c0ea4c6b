//! Page hero editing panel.

use serde::Deserialize;

use merchdesk_core::format::is_valid_remote_image;
use merchdesk_core::{PageHeroId, Visibility};

use crate::models::PageHero;

/// Draft values of the page hero panel.
///
/// Missing stored fields are edited as empty strings and saved back as
/// `null`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct PageHeroForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub destination_url: String,
    #[serde(default)]
    pub visibility: Visibility,
}

impl PageHeroForm {
    /// Seed the draft from the stored hero.
    #[must_use]
    pub fn from_hero(hero: &PageHero) -> Self {
        Self {
            title: hero.title.clone().unwrap_or_default(),
            image: hero.image.clone().unwrap_or_default(),
            destination_url: hero.destination_url.clone().unwrap_or_default(),
            visibility: hero.visibility,
        }
    }

    pub fn toggle_visibility(&mut self) {
        self.visibility = self.visibility.toggled();
    }

    /// First missing requirement of a visible hero.
    ///
    /// # Errors
    ///
    /// Returns the message to show when a visible hero lacks its title,
    /// image or destination URL, checked in that order.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.visibility.is_visible() {
            return Ok(());
        }
        if self.title.is_empty() {
            return Err("Please provide the title");
        }
        if self.image.is_empty() {
            return Err("Please provide the image");
        }
        if self.destination_url.is_empty() {
            return Err("Please provide the destination URL");
        }
        Ok(())
    }

    /// Discard edits to the text fields, as when the panel is closed.
    ///
    /// The visibility toggle is kept.
    pub fn reset(&mut self, stored: &PageHero) {
        let visibility = self.visibility;
        *self = Self::from_hero(stored);
        self.visibility = visibility;
    }

    /// Image URL to preview, if it is a remote image we may render.
    #[must_use]
    pub fn image_preview(&self, allowed_hosts: &[String]) -> Option<&str> {
        is_valid_remote_image(&self.image, allowed_hosts).then_some(self.image.as_str())
    }

    /// The hero to save under `id`.
    #[must_use]
    pub fn into_hero(self, id: PageHeroId) -> PageHero {
        PageHero {
            id,
            image: Some(self.image),
            title: Some(self.title),
            destination_url: Some(self.destination_url),
            visibility: self.visibility,
        }
    }
}
