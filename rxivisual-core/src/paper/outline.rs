use std::collections::HashSet;

use crate::{
    deck::{config::DeckConfig, session::DeckSession},
    foundation::core::Viewport,
    foundation::error::{RxivisualError, RxivisualResult},
};

/// One paper section; becomes one card.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Section {
    /// Stable identifier, e.g. `section-3-2`.
    pub id: String,
    pub title: String,
    /// Header level (1 = top-level).
    #[serde(default = "default_level")]
    pub level: u8,
    #[serde(default)]
    pub summary: String,
}

fn default_level() -> u8 {
    1
}

/// Ordered section list of one paper. Section order is card order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PaperOutline {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl PaperOutline {
    pub fn from_json_str(s: &str) -> RxivisualResult<Self> {
        let outline: Self =
            serde_json::from_str(s).map_err(|e| RxivisualError::serde(e.to_string()))?;
        outline.validate()?;
        Ok(outline)
    }

    pub fn from_path(path: &std::path::Path) -> RxivisualResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            RxivisualError::Other(anyhow::anyhow!(
                "read paper outline '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_json_str(&s)
    }

    pub fn validate(&self) -> RxivisualResult<()> {
        let mut seen = HashSet::with_capacity(self.sections.len());
        for (i, section) in self.sections.iter().enumerate() {
            if section.id.trim().is_empty() {
                return Err(RxivisualError::validation(format!(
                    "section {i} has an empty id"
                )));
            }
            if section.level == 0 {
                return Err(RxivisualError::validation(format!(
                    "section '{}' level must be >= 1",
                    section.id
                )));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(RxivisualError::validation(format!(
                    "duplicate section id '{}'",
                    section.id
                )));
            }
        }
        Ok(())
    }

    pub fn card_count(&self) -> usize {
        self.sections.len()
    }

    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    /// Build a deck session with one card per section.
    pub fn session(&self, cfg: DeckConfig, viewport: Viewport) -> RxivisualResult<DeckSession> {
        DeckSession::new(self.card_count(), cfg, viewport)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paper/outline.rs"]
mod tests;
