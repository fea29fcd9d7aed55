use web_sys::Element;
use yew::prelude::*;

/// Reference handle a caller passes to a container.
///
/// The container attaches it to the element it renders and never keeps it
/// beyond the render that received it.
#[derive(Clone, Default, PartialEq)]
pub enum DomRef {
    /// The caller does not need the element.
    #[default]
    Unset,
    /// Mutable cell populated when the element is attached.
    Cell(NodeRef),
    /// Called with the element once attached and with `None` on teardown.
    Callback(Callback<Option<Element>>),
}

impl From<NodeRef> for DomRef {
    fn from(node: NodeRef) -> Self {
        Self::Cell(node)
    }
}

impl From<Callback<Option<Element>>> for DomRef {
    fn from(callback: Callback<Option<Element>>) -> Self {
        Self::Callback(callback)
    }
}

/// Caller-side view of an attached container element.
#[derive(Clone, Default, PartialEq)]
pub struct DomHandle(NodeRef);

impl DomHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The reference to hand to a container's `dom_ref` property.
    #[must_use]
    pub fn dom_ref(&self) -> DomRef {
        DomRef::Cell(self.0.clone())
    }

    /// The rendered element, once the container has been attached.
    #[must_use]
    pub fn dom_node(&self) -> Option<Element> {
        self.0.cast::<Element>()
    }
}

impl From<NodeRef> for DomHandle {
    fn from(node: NodeRef) -> Self {
        Self(node)
    }
}

/// Turn the caller's handle into a `NodeRef` the rendered element can carry.
#[hook]
pub fn use_dom_ref(dom_ref: &DomRef) -> NodeRef {
    let local = use_node_ref();
    let node = match dom_ref {
        DomRef::Cell(node) => node.clone(),
        DomRef::Unset | DomRef::Callback(_) => local,
    };
    let callback = match dom_ref {
        DomRef::Callback(callback) => Some(callback.clone()),
        DomRef::Unset | DomRef::Cell(_) => None,
    };
    {
        let node = node.clone();
        use_effect_with(callback, move |callback| {
            let attached = callback.clone();
            if let Some(callback) = callback {
                callback.emit(node.cast::<Element>());
            }
            move || {
                if let Some(callback) = attached {
                    callback.emit(None);
                }
            }
        });
    }
    node
}

#[cfg(test)]
mod tests {
    use super::{DomHandle, DomRef};
    use web_sys::Element;
    use yew::{Callback, NodeRef};

    #[test]
    fn conversions_pick_matching_variant() {
        let node = NodeRef::default();
        assert!(matches!(DomRef::from(node.clone()), DomRef::Cell(n) if n == node));
        let callback: Callback<Option<Element>> = Callback::noop();
        assert!(matches!(DomRef::from(callback), DomRef::Callback(_)));
        assert!(matches!(DomRef::default(), DomRef::Unset));
    }

    #[test]
    fn handle_is_empty_until_attached() {
        let handle = DomHandle::new();
        assert!(handle.dom_node().is_none());
        assert!(matches!(handle.dom_ref(), DomRef::Cell(_)));
    }

    #[test]
    fn callback_refs_compare_by_identity() {
        let callback: Callback<Option<Element>> = Callback::from(|_| ());
        let a = DomRef::from(callback.clone());
        let b = DomRef::from(callback);
        assert!(a == b);
        assert!(a != DomRef::from(Callback::from(|_: Option<Element>| ())));
    }
}
