use crate::discovery::Item;
use crate::dom::Dom;

pub const ITEMPROP: &str = "itemprop";
pub const CONTAINER_PROP: &str = "mainEntity";
pub const BUTTON_PROP: &str = "name";
pub const PANEL_PROP: &str = "acceptedAnswer";

/// Mark the item as a question (`mainEntity`) with its button as the
/// question `name` and its panel as the `acceptedAnswer`.
///
/// Only fixed values are written, so repeated calls leave the same
/// attributes. Missing parts are skipped.
pub fn annotate<D: Dom + ?Sized>(dom: &mut D, item: &Item<D::Node>) {
    dom.set_attribute(item.container, ITEMPROP, CONTAINER_PROP);
    if let Some(button) = item.button {
        dom.set_attribute(button, ITEMPROP, BUTTON_PROP);
    }
    if let Some(panel) = item.panel {
        dom.set_attribute(panel, ITEMPROP, PANEL_PROP);
    }
}
