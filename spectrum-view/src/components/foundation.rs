pub use yew::function_component;

use yew::prelude::*;
use yew::virtual_dom::VTag;

use crate::dom_props::{DomPropFilter, filter_dom_props};
use crate::props::ViewProps;
use crate::slots::{ClearSlots, SlotRegistry, resolve_slot_props};
use crate::style::{Direction, StyleOutput, convert_style_props};

/// Build the container element for already slot-resolved props.
///
/// Filtered passthrough attributes are applied first and style attributes
/// after them, so `class`, `style` and `hidden` always come from `style`.
/// Children are wrapped in [`ClearSlots`].
#[must_use]
pub fn container(
    tag: &'static str,
    props: &ViewProps,
    style: &StyleOutput,
    node_ref: NodeRef,
    filter: &DomPropFilter,
) -> Html {
    let mut attributes = filter_dom_props(props, filter).into_attributes();
    for (name, value) in style.attributes() {
        attributes.insert(AttrValue::Static(name), value);
    }
    let mut element = VTag::new(tag);
    element.set_attributes(attributes);
    element.node_ref = node_ref;
    element.add_child(html! {
        <ClearSlots>
            { for props.children.iter() }
        </ClearSlots>
    });
    element.into()
}

/// The whole container pipeline with the slot registry and direction passed
/// in explicitly instead of read from context.
#[must_use]
pub fn render_slotted(
    tag: &'static str,
    default_slot: &str,
    props: &ViewProps,
    registry: &SlotRegistry,
    node_ref: NodeRef,
    direction: Direction,
    filter: &DomPropFilter,
) -> Html {
    let resolved = resolve_slot_props(registry, props, default_slot);
    let style = convert_style_props(&resolved, direction);
    container(tag, &resolved, &style, node_ref, filter)
}

/// Declare a slot-aware container component rendering `$tag` and reading
/// defaults from `$slot`. Passthrough attributes go through `$filter`, or
/// the default [`DomPropFilter`] when none is given.
#[macro_export]
macro_rules! slotted_component {
    ($(#[$meta:meta])* $component:ident, $func:ident, $tag:literal, $slot:literal) => {
        $crate::slotted_component!(
            $(#[$meta])*
            $component,
            $func,
            $tag,
            $slot,
            $crate::dom_props::DomPropFilter::default()
        );
    };
    ($(#[$meta:meta])* $component:ident, $func:ident, $tag:literal, $slot:literal, $filter:expr) => {
        $(#[$meta])*
        #[$crate::components::foundation::function_component($component)]
        pub fn $func(props: &$crate::props::ViewProps) -> yew::Html {
            let props = $crate::slots::use_slot_props(props, $slot);
            let style = $crate::style::use_style_props(&props);
            let node_ref = $crate::dom_ref::use_dom_ref(&props.dom_ref);
            $crate::components::foundation::container($tag, &props, &style, node_ref, &$filter)
        }
    };
}
