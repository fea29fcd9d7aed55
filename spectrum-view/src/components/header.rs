use crate::slotted_component;

slotted_component!(
    /// Header represents a header within a layout container.
    Header,
    header,
    "header",
    "header"
);
