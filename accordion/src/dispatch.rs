use std::collections::HashMap;
use std::time::Instant;

use log::{debug, trace};

use crate::animation::Animator;
use crate::config::Config;
use crate::controller::{self, decide};
use crate::discovery::{Group, Registry};
use crate::dom::Dom;
use crate::event::{Event, EventOutcome};
use crate::schema;

/// Listener state for one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GroupListeners {
    /// Position of the group in the registry.
    index: usize,
    /// The load listener fires once.
    loaded: bool,
}

/// One click and one load listener per group, keyed by the group container.
///
/// Click listeners are delegated: the button and item are resolved at event
/// time and the group's items are re-collected, so items added or removed
/// after discovery are handled.
#[derive(Debug)]
pub struct Dispatcher<N> {
    table: HashMap<N, GroupListeners>,
}

impl<N> Default for Dispatcher<N> {
    fn default() -> Self {
        Self {
            table: HashMap::new(),
        }
    }
}

impl<N: Copy + Eq + std::hash::Hash + std::fmt::Debug> Dispatcher<N> {
    /// Register one click and one load listener for every group.
    pub fn register(registry: &Registry<N>) -> Self {
        let table = registry
            .groups
            .iter()
            .enumerate()
            .map(|(index, group)| {
                (
                    group.container,
                    GroupListeners {
                        index,
                        loaded: false,
                    },
                )
            })
            .collect();
        Self { table }
    }

    /// Number of groups with listeners attached.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn is_loaded(&self, group: N) -> bool {
        self.table.get(&group).is_some_and(|l| l.loaded)
    }

    pub fn dispatch<D: Dom<Node = N> + ?Sized>(
        &mut self,
        dom: &mut D,
        config: &Config,
        registry: &Registry<N>,
        animator: &mut Animator<N>,
        event: Event<N>,
        now: Instant,
    ) -> EventOutcome {
        match event {
            Event::Load => self.handle_load(dom, config, registry, animator, now),
            Event::Click { target } => self.handle_click(dom, config, animator, target, now),
        }
    }

    fn handle_load<D: Dom<Node = N> + ?Sized>(
        &mut self,
        dom: &mut D,
        config: &Config,
        registry: &Registry<N>,
        animator: &mut Animator<N>,
        now: Instant,
    ) -> EventOutcome {
        let mut outcome = EventOutcome::ignored();
        for group in &registry.groups {
            let Some(listeners) = self.table.get_mut(&group.container) else {
                continue;
            };
            if listeners.loaded {
                continue;
            }
            listeners.loaded = true;
            debug!("loading group {} ({:?})", listeners.index, group.container);

            for (index, item) in group.items.iter().enumerate() {
                if config.use_schema {
                    schema::annotate(dom, item);
                }
                controller::initialize(dom, animator, config, item, index, now);
                outcome.transitions += 1;
            }
        }
        outcome
    }

    fn handle_click<D: Dom<Node = N> + ?Sized>(
        &mut self,
        dom: &mut D,
        config: &Config,
        animator: &mut Animator<N>,
        target: N,
        now: Instant,
    ) -> EventOutcome {
        let Some(button) = dom.closest(target, &config.button) else {
            trace!("click on {:?} outside any button", target);
            return EventOutcome::ignored();
        };

        // The innermost group around the button owns the click.
        let Some(group) = dom
            .closest(button, &config.group)
            .filter(|group| self.table.contains_key(group))
        else {
            trace!("button {:?} is not inside a registered group", button);
            return EventOutcome::ignored();
        };

        // A button outside any item of this group still runs the table with
        // no target, so singular groups close whatever is open.
        let item = dom
            .closest(button, &config.item)
            .filter(|item| dom.contains(group, *item));

        let items = Group::collect(&*dom, config, group).items;
        let transitions = decide(&*dom, config, item, &items);
        for transition in &transitions {
            controller::apply(dom, animator, transition, now);
        }
        EventOutcome {
            default_prevented: true,
            transitions: transitions.len(),
        }
    }
}
