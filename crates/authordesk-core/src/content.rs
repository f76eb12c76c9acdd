//! Static bio and catalog content shown by the desk.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::bio::BioProfile;
use crate::catalog::CatalogItem;
use crate::config::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeskContent {
    pub bio: BioProfile,
    #[serde(default)]
    pub books: Vec<CatalogItem>,
}

impl DeskContent {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn book(title: &str, price: &str, amazon: &str, google_play: &str) -> CatalogItem {
    let mut purchase_links = IndexMap::new();
    purchase_links.insert("Amazon".to_string(), amazon.to_string());
    purchase_links.insert("Google Play".to_string(), google_play.to_string());
    CatalogItem {
        title: title.into(),
        price: price.into(),
        purchase_links,
    }
}

impl Default for DeskContent {
    fn default() -> Self {
        let bio = BioProfile {
            name: "Sample Author".into(),
            bio: "Young writer hoping these books inspire readers of every age to write \
                  stories of their own. Have a good day and remember: you're amazing!"
                .into(),
            tips: vec![
                "Write every day, even if it's just a little.".into(),
                "Read widely and learn from others.".into(),
                "Don't be afraid to edit and revise.".into(),
                "Believe in your voice.".into(),
                "Connect with readers and other writers.".into(),
                "Take breaks to recharge your creativity.".into(),
            ],
            contact: vec!["EMAIL: author@example.com".into()],
            pictures: vec!["author_portrait.png".into()],
        };
        let books = vec![
            book(
                "Colors: A Poem",
                "5.99",
                "https://www.example.com/books/colors",
                "https://play.example.com/books/colors",
            ),
            book(
                "Troubled",
                "3.99",
                "https://www.example.com/books/troubled",
                "",
            ),
            book(
                "Lantern Street #1",
                "4.99",
                "https://www.example.com/books/lantern-street-1",
                "https://play.example.com/books/lantern-street-1",
            ),
            book(
                "Lantern Street #2",
                "4.99",
                "https://www.example.com/books/lantern-street-2",
                "https://play.example.com/books/lantern-street-2",
            ),
        ];
        Self { bio, books }
    }
}
