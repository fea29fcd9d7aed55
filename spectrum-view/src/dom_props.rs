use crate::props::{PropBag, ViewProps};

const DOM_PROP_NAMES: &[&str] = &["id"];
const LABELABLE_PROP_NAMES: &[&str] = &[
    "aria-label",
    "aria-labelledby",
    "aria-describedby",
    "aria-details",
];
/// Handled by style extraction; seeing them in the raw bag is a caller mistake.
const STYLE_ATTRIBUTE_NAMES: &[&str] = &["class", "style", "hidden"];

/// Which passthrough attributes may reach the rendered element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DomPropFilter {
    /// Also forward the ARIA labelling attributes.
    pub labelable: bool,
    /// Additional attribute names to forward verbatim.
    pub extra: Vec<&'static str>,
}

impl DomPropFilter {
    #[must_use]
    pub fn labelable() -> Self {
        Self {
            labelable: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn allows(&self, name: &str) -> bool {
        DOM_PROP_NAMES.contains(&name)
            || name.starts_with("data-")
            || (self.labelable && LABELABLE_PROP_NAMES.contains(&name))
            || self.extra.contains(&name)
    }
}

/// Keep only the attributes that are safe to put on a plain container.
///
/// The typed `id` takes precedence over an `id` entry in the raw bag. Every
/// other property, style-related or unknown, is left out.
#[must_use]
pub fn filter_dom_props(props: &ViewProps, filter: &DomPropFilter) -> PropBag {
    let mut out = PropBag::new();
    if let Some(id) = &props.id {
        out.put("id", id.clone());
    }
    for (name, value) in props.attrs.iter() {
        if name == "id" && props.id.is_some() {
            continue;
        }
        if filter.allows(name) {
            out.put(name, value.clone());
        } else if STYLE_ATTRIBUTE_NAMES.contains(&name) {
            log::warn!("raw `{name}` attribute is ignored; set the typed `{name}` property instead");
        } else {
            log::debug!("dropping non-DOM property `{name}`");
        }
    }
    out
}
