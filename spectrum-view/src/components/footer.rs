use crate::slotted_component;

slotted_component!(
    /// Footer represents a footer within a layout container.
    Footer,
    footer,
    "footer",
    "footer"
);
