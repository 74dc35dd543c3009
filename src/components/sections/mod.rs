//! Section cycler: a five-state ring advanced by clicking "about", revealing
//! the about/projects/contact blocks cumulatively and the art at the end.

mod component;
mod cycle;

pub use component::{ContentSection, SectionToggle};
pub use cycle::{Block, SECTIONS, Section};
