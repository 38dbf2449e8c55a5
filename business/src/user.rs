//! User profile as seen by the store and the renderers.

use bon::Builder;
use serde::{Deserialize, Serialize};
use ustr::Ustr;

/// Avatar image locations. Opaque to the store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AvatarUrls {
    pub thumbnail: String,
    pub medium: String,
    pub large: String,
}

impl AvatarUrls {
    pub fn new(
        thumbnail: impl Into<String>,
        medium: impl Into<String>,
        large: impl Into<String>,
    ) -> Self {
        Self {
            thumbnail: thumbnail.into(),
            medium: medium.into(),
            large: large.into(),
        }
    }
}

/// A user profile.
///
/// Immutable once built; identity is `id`, which the source guarantees to be
/// stable. Use [`User::builder`] to construct one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct User {
    #[builder(into)]
    id: Ustr,
    /// Honorific such as "Mr" or "Ms", when the source provides one.
    #[builder(into)]
    title: Option<String>,
    #[builder(into)]
    first_name: String,
    #[builder(into)]
    last_name: String,
    /// Date of birth exactly as the source formats it.
    #[builder(into)]
    date_of_birth: String,
    age: Option<u32>,
    #[builder(default)]
    avatar_urls: AvatarUrls,
}

impl User {
    pub fn id(&self) -> Ustr {
        self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn date_of_birth(&self) -> &str {
        &self.date_of_birth
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }

    pub fn avatar_urls(&self) -> &AvatarUrls {
        &self.avatar_urls
    }

    /// "First Last", as both renderers label a user.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
