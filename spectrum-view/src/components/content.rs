use crate::slotted_component;

slotted_component!(
    /// Content represents the primary content within a layout container.
    Content,
    content,
    "section",
    "content"
);
