use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assets::AssetResolver;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BioProfile {
    pub name: String,
    pub bio: String,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub contact: Vec<String>,
    /// Asset names of pictures shown under the text.
    #[serde(default)]
    pub pictures: Vec<String>,
}

/// A picture that resolved successfully.
#[derive(Debug, Clone)]
pub struct Picture {
    pub name: String,
    pub bytes: Vec<u8>,
}

pub struct BioPanel {
    profile: BioProfile,
    pictures: Vec<Picture>,
}

impl BioPanel {
    /// Pictures that cannot be resolved are skipped.
    pub fn new(profile: BioProfile, resolver: &dyn AssetResolver) -> Self {
        let pictures = profile
            .pictures
            .iter()
            .filter_map(|name| match resolver.resolve(name) {
                Ok(bytes) => Some(Picture {
                    name: name.clone(),
                    bytes,
                }),
                Err(err) => {
                    debug!(%err, "skipping bio picture");
                    None
                }
            })
            .collect();
        Self { profile, pictures }
    }

    pub fn profile(&self) -> &BioProfile {
        &self.profile
    }

    pub fn pictures(&self) -> &[Picture] {
        &self.pictures
    }

    /// Bio, tips and contact sections joined for display.
    pub fn text(&self) -> String {
        let mut sections = vec![self.profile.bio.clone()];
        if !self.profile.tips.is_empty() {
            let tips: Vec<String> = self
                .profile
                .tips
                .iter()
                .map(|tip| format!("- {tip}"))
                .collect();
            sections.push(format!(
                "--- Tips and Inspiration for Authors ---\n{}",
                tips.join("\n")
            ));
        }
        if !self.profile.contact.is_empty() {
            sections.push(format!("--- Contact ---\n{}", self.profile.contact.join("\n")));
        }
        sections.join("\n\n")
    }
}
