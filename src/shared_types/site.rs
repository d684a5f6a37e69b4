use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::constants;

/// How the address is pulled out of a site's page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SiteShape {
    /// the whole page text is the address
    DirectText,
    /// the address sits in the next `tag` sibling of a `tag` element reading exactly `label`
    LabeledSibling {
        #[serde(default = "default_label")]
        label: String,
        #[serde(default = "default_label_tag")]
        tag: String,
    },
}

fn default_label() -> String {
    constants::DEFAULT_LABEL.to_string()
}

fn default_label_tag() -> String {
    constants::DEFAULT_LABEL_TAG.to_string()
}

impl SiteShape {
    pub fn labeled_sibling(label: &str) -> Self {
        Self::LabeledSibling {
            label: label.to_string(),
            tag: default_label_tag(),
        }
    }
}

impl Display for SiteShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DirectText => write!(f, "direct-text"),
            Self::LabeledSibling { label, tag } => {
                write!(f, "labeled-sibling(<{}>{})", tag, label)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// also names the site's log stream / file
    pub name: String,
    pub url: String,
    pub shape: SiteShape,
}

impl Site {
    pub fn direct_text(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            shape: SiteShape::DirectText,
        }
    }

    pub fn labeled_sibling(name: &str, url: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            shape: SiteShape::labeled_sibling(label),
        }
    }

    pub fn defaults() -> Vec<Self> {
        let (name, url) = constants::LABELED_SIBLING_SITE;

        constants::DIRECT_TEXT_SITES
            .iter()
            .map(|(name, url)| Site::direct_text(name, url))
            .chain([Site::labeled_sibling(name, url, constants::DEFAULT_LABEL)])
            .collect()
    }
}
