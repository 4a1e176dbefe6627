use std::collections::BTreeMap;

/// Builder for one element of an in-memory document.
///
/// Elements are described as an owned tree and flattened into a
/// [`Document`](super::Document) arena when the document is built.
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    /// Height of the element's own content (text lines, padding) excluding
    /// children.
    pub content_height: f32,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self::new("button").attr("aria-label", label)
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Add a class to the element's `class` attribute.
    pub fn class(mut self, class: impl AsRef<str>) -> Self {
        let class = class.as_ref();
        match self.attributes.get_mut("class") {
            Some(list) if !list.split_whitespace().any(|c| c == class) => {
                list.push(' ');
                list.push_str(class);
            }
            Some(_) => {}
            None => {
                self.attributes.insert("class".into(), class.into());
            }
        }
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn content_height(mut self, height: f32) -> Self {
        self.content_height = height;
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }
}
