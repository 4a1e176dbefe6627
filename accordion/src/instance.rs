use std::time::Instant;

use log::info;
use thiserror::Error;

use crate::animation::Animator;
use crate::config::{Config, Options};
use crate::discovery::{discover, Registry};
use crate::dispatch::Dispatcher;
use crate::dom::Dom;
use crate::event::{Event, EventOutcome};
use crate::schema;
use crate::selector::SelectorError;
use crate::transitions::TransitionConfig;

#[derive(Debug, Error)]
pub enum AccordionError {
    #[error("invalid selector: {0}")]
    Selector(#[from] SelectorError),
}

/// A set of accordion groups bound to one document.
///
/// The host forwards its events through [`Accordion::dispatch`] and calls
/// [`Accordion::tick`] once per frame while [`Accordion::is_animating`].
#[derive(Debug)]
pub struct Accordion<N> {
    config: Config,
    registry: Registry<N>,
    dispatcher: Dispatcher<N>,
    animator: Animator<N>,
}

impl<N: Copy + Eq + std::hash::Hash + std::fmt::Debug> Accordion<N> {
    /// Discover groups in `dom` and attach listeners.
    ///
    /// Finding no groups is not an error; the accordion is simply inert.
    pub fn new<D: Dom<Node = N> + ?Sized>(
        dom: &D,
        options: &Options,
    ) -> Result<Self, AccordionError> {
        let config = Config::from_options(options)?;
        Ok(Self::with_config(dom, config))
    }

    pub fn with_config<D: Dom<Node = N> + ?Sized>(dom: &D, config: Config) -> Self {
        let registry = discover(dom, &config);
        let dispatcher = Dispatcher::register(&registry);
        let mut animator = Animator::new(TransitionConfig::default());
        animator.set_reduced_motion(config.reduced_motion);

        if registry.is_empty() {
            info!("no accordion groups match '{}'", config.group);
        }

        Self {
            config,
            registry,
            dispatcher,
            animator,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &Registry<N> {
        &self.registry
    }

    /// Returns true if no groups were found.
    pub fn is_inert(&self) -> bool {
        self.dispatcher.is_empty()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.has_active_animations()
    }

    pub fn animator(&self) -> &Animator<N> {
        &self.animator
    }

    pub fn dispatcher(&self) -> &Dispatcher<N> {
        &self.dispatcher
    }

    pub fn dispatch<D: Dom<Node = N> + ?Sized>(
        &mut self,
        dom: &mut D,
        event: Event<N>,
    ) -> EventOutcome {
        self.dispatch_at(dom, event, Instant::now())
    }

    /// Handle `event` as if it arrived at `now`.
    pub fn dispatch_at<D: Dom<Node = N> + ?Sized>(
        &mut self,
        dom: &mut D,
        event: Event<N>,
        now: Instant,
    ) -> EventOutcome {
        self.dispatcher.dispatch(
            dom,
            &self.config,
            &self.registry,
            &mut self.animator,
            event,
            now,
        )
    }

    pub fn load<D: Dom<Node = N> + ?Sized>(&mut self, dom: &mut D) -> EventOutcome {
        self.dispatch(dom, Event::Load)
    }

    pub fn click<D: Dom<Node = N> + ?Sized>(&mut self, dom: &mut D, target: N) -> EventOutcome {
        self.dispatch(dom, Event::click(target))
    }

    pub fn tick<D: Dom<Node = N> + ?Sized>(&mut self, dom: &mut D) -> usize {
        self.tick_at(dom, Instant::now())
    }

    pub fn tick_at<D: Dom<Node = N> + ?Sized>(&mut self, dom: &mut D, now: Instant) -> usize {
        self.animator.tick(dom, now)
    }

    /// Settle every running animation at once.
    pub fn finish_animations<D: Dom<Node = N> + ?Sized>(&mut self, dom: &mut D) {
        self.animator.finish_all(dom);
    }

    /// Apply the FAQ annotation to every registered item.
    pub fn annotate_schema<D: Dom<Node = N> + ?Sized>(&self, dom: &mut D) {
        for item in self.registry.items() {
            schema::annotate(dom, item);
        }
    }
}
