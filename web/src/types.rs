use serde::Deserialize;

/// shown whenever a vendor has no pet to take a thumbnail from
pub const FALLBACK_IMAGE: &str = "missing.png";

#[derive(Debug, Clone, Deserialize)]
pub struct Pet {
    pub name: String,
    pub image: String,
}

/// Vendor as delivered by the clinic backend. The frontend only reads it,
/// ownership stays with the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct Vendor {
    pub name: String,
    pub pets: Vec<Pet>,
}

impl Vendor {
    /// filename for the card thumbnail - the first pet's image, or the
    /// fixed fallback for a vendor without pets
    pub fn card_image(&self) -> &str {
        self.pets
            .first()
            .map(|pet| pet.image.as_str())
            .unwrap_or(FALLBACK_IMAGE)
    }

    /// in-app route showing all pets of this vendor; the name goes in raw,
    /// the router decodes params on match
    pub fn pets_path(&self) -> String {
        format!("/pets/vendor/{}", self.name)
    }
}
