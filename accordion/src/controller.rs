//! Panel state transitions.
//!
//! [`decide`] is a pure function of the clicked item, its siblings and the
//! configuration. [`apply`] turns each decision into marker writes plus a
//! height animation.

use std::time::Instant;

use log::debug;

use crate::animation::Animator;
use crate::config::Config;
use crate::discovery::Item;
use crate::dom::Dom;
use crate::transitions::Direction;

/// A state change for one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition<N> {
    pub item: Item<N>,
    pub direction: Direction,
}

/// Compute every activation and deactivation caused by clicking `target`.
///
/// Each item in `items` is evaluated, so a single click in singular mode can
/// both open the target and close a previously open sibling. A `None` target
/// (a button outside any item) only closes open items in singular mode.
pub fn decide<D: Dom + ?Sized>(
    dom: &D,
    config: &Config,
    target: Option<D::Node>,
    items: &[Item<D::Node>],
) -> Vec<Transition<D::Node>> {
    items
        .iter()
        .filter_map(|item| {
            let active = item.is_active(dom);
            let direction = if Some(item.container) == target {
                match (active, config.singular_allow_hide) {
                    (false, _) => Some(Direction::Expand),
                    (true, true) => Some(Direction::Collapse),
                    (true, false) => None,
                }
            } else if config.singular_mode && active {
                Some(Direction::Collapse)
            } else {
                None
            };
            direction.map(|direction| Transition {
                item: *item,
                direction,
            })
        })
        .collect()
}

/// Write both state markers for `item`.
///
/// `data-active` on the container and `aria-expanded` on the panel are only
/// ever written here, together.
pub fn set_state<D: Dom + ?Sized>(dom: &mut D, item: &Item<D::Node>, active: bool) {
    let value = if active { "true" } else { "false" };
    dom.set_attribute(item.container, "data-active", value);
    if let Some(panel) = item.panel {
        dom.set_attribute(panel, "aria-expanded", value);
    }
}

/// Write the markers for `transition` and start its animation.
pub fn apply<D>(
    dom: &mut D,
    animator: &mut Animator<D::Node>,
    transition: &Transition<D::Node>,
    now: Instant,
) where
    D: Dom + ?Sized,
{
    debug!(
        "{:?} item {:?}",
        transition.direction, transition.item.container
    );
    set_state(dom, &transition.item, transition.direction.is_expand());
    animator.start(dom, transition.item.panel, transition.direction, now);
}

/// Drive the item at `index` in its group to its load-time state.
///
/// Items that start expanded only get their markers; their panels are
/// already at natural height. Items that start collapsed animate closed.
pub fn initialize<D>(
    dom: &mut D,
    animator: &mut Animator<D::Node>,
    config: &Config,
    item: &Item<D::Node>,
    index: usize,
    now: Instant,
) where
    D: Dom + ?Sized,
{
    if config.starts_expanded(index) {
        set_state(dom, item, true);
    } else {
        apply(
            dom,
            animator,
            &Transition {
                item: *item,
                direction: Direction::Collapse,
            },
            now,
        );
    }
}
