#![forbid(unsafe_code)]

pub mod components;
pub mod dom_props;
pub mod dom_ref;
pub mod error;
pub mod props;
pub mod slots;
pub mod style;

pub use components::{Content, Footer, Header};
pub use dom_ref::{DomHandle, DomRef};
pub use error::ViewError;
pub use props::{PropBag, ViewProps};
pub use slots::{ClearSlots, SlotProvider, SlotRegistry};
pub use style::{Dimension, Direction, StyleProps};
