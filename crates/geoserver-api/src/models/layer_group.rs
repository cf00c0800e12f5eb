// Layer group wire types
//
// A group is an ordered list of publishables (layers or nested groups)
// with a parallel list of style slots. GeoServer writes a default style
// slot as an empty string and a single publishable as a bare object.

use serde::{Deserialize, Serialize};

use super::common::{BoundingBox, Keywords, ResourceRef};
use crate::envelope::one_or_many;
use crate::error::Error;
use crate::validate::validate_name;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayerGroupMode {
    #[default]
    Single,
    Named,
    Container,
    Eo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PublishedType {
    #[serde(rename = "layer")]
    Layer,
    #[serde(rename = "layerGroup", alias = "layergroup")]
    LayerGroup,
}

/// One member of a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Published {
    #[serde(rename = "@type")]
    pub kind: PublishedType,
    /// `workspace:name` for layers that live in a workspace.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Style applied to the publishable at the same index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleSlot {
    Named(ResourceRef),
    /// `""` on the wire: use the layer's default style.
    Default(String),
}

impl StyleSlot {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(ResourceRef::new(name))
    }

    pub fn default_style() -> Self {
        Self::Default(String::new())
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named(style) => Some(&style.name),
            Self::Default(name) if name.is_empty() => None,
            Self::Default(name) => Some(name),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publishables {
    #[serde(default, deserialize_with = "one_or_many")]
    pub published: Vec<Published>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerGroupStyles {
    #[serde(default, deserialize_with = "one_or_many")]
    pub style: Vec<StyleSlot>,
}

/// `{"layerGroup": {...}}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerGroup {
    pub name: String,
    #[serde(default)]
    pub mode: LayerGroupMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abstract_txt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<ResourceRef>,
    #[serde(default)]
    pub publishables: Publishables,
    #[serde(default)]
    pub styles: LayerGroupStyles,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<BoundingBox>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Keywords>,
}

impl LayerGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn published(&self) -> &[Published] {
        &self.publishables.published
    }

    pub fn styles(&self) -> &[StyleSlot] {
        &self.styles.style
    }

    /// Checks the name and that publishables and styles line up.
    pub fn validate(&self) -> Result<(), Error> {
        validate_name(&self.name)?;
        let (published, styles) = (self.published().len(), self.styles().len());
        if styles != 0 && styles != published {
            return Err(Error::input(format!(
                "layer group {} has {published} publishables but {styles} styles",
                self.name
            )));
        }
        Ok(())
    }
}
