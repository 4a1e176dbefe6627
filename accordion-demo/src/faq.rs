use accordion::{Config, Document, Dom, Element, NodeId};

const QUESTIONS: &[(&str, f32)] = &[
    ("What is an accordion?", 72.0),
    ("Can several panels be open?", 48.0),
    ("Does it animate?", 96.0),
    ("Is the state remembered?", 24.0),
    ("Which markup is required?", 120.0),
];

pub fn build(groups: usize, items: usize) -> Document {
    Document::from_elements((0..groups).map(|g| {
        Element::div()
            .class("accordion__group")
            .id(format!("faq-{g}"))
            .children((0..items).map(move |i| {
                let (question, height) = QUESTIONS[i % QUESTIONS.len()];
                Element::div()
                    .class("accordion")
                    .child(
                        Element::button(question)
                            .class("accordion__button")
                            .content_height(32.0),
                    )
                    .child(
                        Element::div()
                            .class("accordion__panel")
                            .child(Element::new("p").content_height(height)),
                    )
            }))
    }))
}

pub fn group_ids(doc: &Document, config: &Config) -> Vec<NodeId> {
    doc.query_all(None, &config.group)
}

pub fn item_ids(doc: &Document, config: &Config, group: NodeId) -> Vec<NodeId> {
    doc.query_all(Some(group), &config.item)
}

pub fn panel(doc: &Document, config: &Config, item: NodeId) -> Option<NodeId> {
    doc.query(Some(item), &config.panel)
}

pub fn question(doc: &Document, config: &Config, item: NodeId) -> String {
    doc.query(Some(item), &config.button)
        .and_then(|button| doc.attribute(button, "aria-label"))
        .unwrap_or_default()
}

pub fn button_at(doc: &Document, config: &Config, group: usize, item: usize) -> Option<NodeId> {
    let group = *group_ids(doc, config).get(group)?;
    let item = *item_ids(doc, config, group).get(item)?;
    doc.query(Some(item), &config.button)
}
