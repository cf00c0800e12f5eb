use crate::error::Error;
use crate::models::{
    BoundingBox, Keywords, LayerGroup, LayerGroupMode, Published, PublishedType, ResourceRef,
    StyleSlot,
};
use crate::resources::LayerGroups;

/// Assembles a layer group, keeping publishables and style slots in
/// step. Consumed by [`create`](Self::create).
#[derive(Debug, Clone)]
pub struct LayerGroupBuilder {
    groups: LayerGroups,
    group: LayerGroup,
}

impl LayerGroupBuilder {
    pub(crate) fn new(groups: LayerGroups, name: &str) -> Self {
        let mut group = LayerGroup::new(name);
        group.workspace = groups.workspace().map(ResourceRef::new);
        Self { groups, group }
    }

    #[must_use]
    pub fn mode(mut self, mode: LayerGroupMode) -> Self {
        self.group.mode = mode;
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.group.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn abstract_text(mut self, text: impl Into<String>) -> Self {
        self.group.abstract_txt = Some(text.into());
        self
    }

    #[must_use]
    pub fn keywords(mut self, words: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.group.keywords = Some(words.into_iter().map(Into::into).collect::<Keywords>());
        self
    }

    #[must_use]
    pub fn bounds(mut self, bounds: BoundingBox) -> Self {
        self.group.bounds = Some(bounds);
        self
    }

    /// Add a layer with its default style. Inside a workspace scope bare
    /// names are qualified with that workspace.
    #[must_use]
    pub fn layer(self, name: &str) -> Self {
        self.push(PublishedType::Layer, name, StyleSlot::default_style())
    }

    /// Add a layer that lives in `workspace`, from a root-level group.
    #[must_use]
    pub fn layer_in(self, workspace: &str, name: &str) -> Self {
        let qualified = format!("{workspace}:{name}");
        self.push(PublishedType::Layer, &qualified, StyleSlot::default_style())
    }

    #[must_use]
    pub fn styled_layer(self, name: &str, style: &str) -> Self {
        self.push(PublishedType::Layer, name, StyleSlot::named(style))
    }

    /// Nest another group.
    #[must_use]
    pub fn group(self, name: &str) -> Self {
        self.push(PublishedType::LayerGroup, name, StyleSlot::default_style())
    }

    /// The payload as it would be sent, after validation.
    pub fn build(self) -> Result<LayerGroup, Error> {
        self.group.validate()?;
        Ok(self.group)
    }

    pub async fn create(self) -> Result<(), Error> {
        self.groups.create(&self.group).await
    }

    fn push(mut self, kind: PublishedType, name: &str, style: StyleSlot) -> Self {
        let name = match self.groups.workspace() {
            Some(ws) if !name.contains(':') => format!("{ws}:{name}"),
            _ => name.to_owned(),
        };
        self.group.publishables.published.push(Published {
            kind,
            name,
            href: None,
        });
        self.group.styles.style.push(style);
        self
    }
}
