pub mod animation;
pub mod config;
pub mod controller;
pub mod discovery;
pub mod dispatch;
pub mod document;
pub mod dom;
pub mod event;
pub mod instance;
pub mod schema;
pub mod selector;
pub mod transitions;

pub use animation::Animator;
pub use config::{Config, ConfigError, Options};
pub use controller::{decide, Transition};
pub use discovery::{discover, Group, Item, Registry};
pub use dispatch::Dispatcher;
pub use document::{Document, Element, NodeId};
pub use dom::{Dom, MaxHeight};
pub use event::{Event, EventOutcome};
pub use instance::{Accordion, AccordionError};
pub use selector::{Selector, SelectorError};
pub use transitions::{Direction, Easing, Keyframes, TransitionConfig, PANEL_DURATION};
