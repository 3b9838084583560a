//! The skill catalogue rendered on the ring.

use serde::{Deserialize, Serialize};

/// One skill card: a title and the image shown above it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Card caption.
    pub title: String,
    /// Image path relative to the site's public root.
    pub img: String,
}

impl Skill {
    /// Build a skill from borrowed strings.
    #[must_use]
    pub fn new(title: &str, img: &str) -> Self {
        Self {
            title: title.to_owned(),
            img: img.to_owned(),
        }
    }
}

/// The default catalogue, in ring order.
#[must_use]
pub fn default_catalogue() -> Vec<Skill> {
    [
        ("UI/UX Designing", "/ux.jpeg"),
        ("Branding", "/branding.jpeg"),
        ("Digital Marketing", "/dm.jpeg"),
        ("Photoshop", "/photoshop.jpeg"),
        ("Figma", "/figma.jpeg"),
        ("Canva", "/canva.jpeg"),
        ("Premiere Pro", "/premierepro.jpeg"),
        ("Corel Draw", "/coreldraw.jpeg"),
        ("MailChimp", "/mailchimp.jpeg"),
        ("WordPress", "/wordpress.jpeg"),
        ("Wix Studio", "/wixstudio.jpeg"),
        ("Da Vinci", "/davinci.jpeg"),
        ("Ubersuggest", "/10.jpg"),
        ("Semrush", "/11.jpg"),
    ]
    .into_iter()
    .map(|(title, img)| Skill::new(title, img))
    .collect()
}
