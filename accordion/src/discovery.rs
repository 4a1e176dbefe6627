use log::debug;

use crate::config::Config;
use crate::dom::Dom;

/// One toggleable container/panel/button triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item<N> {
    pub container: N,
    pub panel: Option<N>,
    pub button: Option<N>,
}

impl<N: Copy> Item<N> {
    /// Resolve the panel and button inside `container`.
    pub fn resolve<D: Dom<Node = N> + ?Sized>(dom: &D, config: &Config, container: N) -> Self {
        Self {
            container,
            panel: dom.query(Some(container), &config.panel),
            button: dom.query(Some(container), &config.button),
        }
    }

    /// Active state, read from the container's `data-active` marker.
    pub fn is_active<D: Dom<Node = N> + ?Sized>(&self, dom: &D) -> bool {
        dom.attribute(self.container, "data-active").as_deref() == Some("true")
    }
}

/// One accordion group and the items found in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<N> {
    pub container: N,
    pub items: Vec<Item<N>>,
}

impl<N: Copy> Group<N> {
    /// Collect the items currently inside `container`, in document order.
    /// Items that belong to a group nested inside this one are left to it.
    pub fn collect<D: Dom<Node = N> + ?Sized>(dom: &D, config: &Config, container: N) -> Self
    where
        N: PartialEq,
    {
        let items = dom
            .query_all(Some(container), &config.item)
            .into_iter()
            .filter(|node| {
                dom.parent(*node)
                    .and_then(|parent| dom.closest(parent, &config.group))
                    == Some(container)
            })
            .map(|node| Item::resolve(dom, config, node))
            .collect();
        Self { container, items }
    }
}

/// Every group found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry<N> {
    pub groups: Vec<Group<N>>,
}

impl<N> Default for Registry<N> {
    fn default() -> Self {
        Self { groups: Vec::new() }
    }
}

impl<N> Registry<N> {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn items(&self) -> impl Iterator<Item = &Item<N>> {
        self.groups.iter().flat_map(|g| g.items.iter())
    }
}

/// Find every group and its items. Groups without items are skipped.
pub fn discover<D: Dom + ?Sized>(dom: &D, config: &Config) -> Registry<D::Node> {
    let groups: Vec<_> = dom
        .query_all(None, &config.group)
        .into_iter()
        .map(|container| Group::collect(dom, config, container))
        .filter(|group| !group.items.is_empty())
        .collect();

    debug!(
        "discovered {} accordion group(s) with {} item(s) for '{}'",
        groups.len(),
        groups.iter().map(|g| g.items.len()).sum::<usize>(),
        config.group
    );

    Registry { groups }
}
