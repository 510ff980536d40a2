//! A keyed multi-section expand/collapse container.

mod events;
mod state;

pub use state::{Accordion, AccordionId, ExpandMode, Section};
