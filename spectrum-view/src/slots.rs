use std::rc::Rc;

use indexmap::IndexMap;
use serde::Deserialize;
use yew::prelude::*;

use crate::error::ViewError;
use crate::props::{PropBag, ViewProps};
use crate::style::StyleProps;

/// Slot name → default properties for containers filling that slot.
///
/// Provided to descendants through a `ContextProvider<SlotRegistry>`; an
/// empty registry means "no slot defaults".
#[derive(Clone, Default, PartialEq)]
pub struct SlotRegistry(Rc<IndexMap<String, ViewProps>>);

impl SlotRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the defaults for `name`.
    ///
    /// # Errors
    /// Returns [`ViewError::InvalidSlotName`] for an empty or padded name.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        defaults: ViewProps,
    ) -> Result<(), ViewError> {
        let name = name.into();
        if name.is_empty() || name.trim() != name {
            return Err(ViewError::InvalidSlotName(name));
        }
        Rc::make_mut(&mut self.0).insert(name, defaults);
        Ok(())
    }

    /// Builder form of [`SlotRegistry::insert`].
    ///
    /// # Errors
    /// Returns [`ViewError::InvalidSlotName`] for an empty or padded name.
    pub fn with_slot(
        mut self,
        name: impl Into<String>,
        defaults: ViewProps,
    ) -> Result<Self, ViewError> {
        self.insert(name, defaults)?;
        Ok(self)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ViewProps> {
        self.0.get(name)
    }

    pub fn slot_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Registry seen below a nested provider: `child` defaults overlay ours.
    #[must_use]
    pub fn merged_with(&self, child: &Self) -> Self {
        if child.is_empty() {
            return self.clone();
        }
        let mut slots = (*self.0).clone();
        for (name, defaults) in child.0.iter() {
            let merged = match slots.get(name) {
                Some(parent) => parent.overlay(defaults),
                None => defaults.clone(),
            };
            slots.insert(name.clone(), merged);
        }
        Self(Rc::new(slots))
    }

    /// Load slot defaults from a JSON object keyed by slot name.
    ///
    /// # Errors
    /// Returns [`ViewError::Config`] for malformed JSON, unknown fields or bad
    /// dimensions, and the matching validation error for bad slot names,
    /// attribute names or free-text layout values.
    pub fn from_json(json: &str) -> Result<Self, ViewError> {
        let config: IndexMap<String, SlotDefaultsConfig> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for (name, defaults) in config {
            registry.insert(name, defaults.into_props()?)?;
        }
        Ok(registry)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SlotDefaultsConfig {
    id: Option<String>,
    class: Option<String>,
    style: Option<String>,
    hidden: Option<bool>,
    layout: StyleProps,
    attrs: IndexMap<String, String>,
}

impl SlotDefaultsConfig {
    fn into_props(self) -> Result<ViewProps, ViewError> {
        self.layout.validate()?;
        let mut class = Classes::new();
        for name in self.class.iter().flat_map(|class| class.split_whitespace()) {
            class.push(name.to_string());
        }
        Ok(ViewProps {
            id: self.id.map(AttrValue::from),
            class,
            style: self.style.map(AttrValue::from),
            layout: self.layout,
            hidden: self.hidden,
            attrs: PropBag::try_from_pairs(
                self.attrs
                    .into_iter()
                    .map(|(name, value)| (name, AttrValue::from(value))),
            )?,
            ..ViewProps::default()
        })
    }
}

/// Merge `props` with the defaults registered for its slot.
///
/// The slot is `props.slot` when set, `default_slot` otherwise. Without a
/// registered entry the props come back unchanged.
#[must_use]
pub fn resolve_slot_props(
    registry: &SlotRegistry,
    props: &ViewProps,
    default_slot: &str,
) -> ViewProps {
    let slot = props.slot.as_deref().unwrap_or(default_slot);
    match registry.get(slot) {
        Some(defaults) => {
            log::trace!("applying `{slot}` slot defaults");
            defaults.overlay(props)
        }
        None => props.clone(),
    }
}

/// [`resolve_slot_props`] against the nearest provided [`SlotRegistry`].
#[hook]
pub fn use_slot_props(props: &ViewProps, default_slot: &'static str) -> ViewProps {
    let registry = use_context::<SlotRegistry>().unwrap_or_default();
    resolve_slot_props(&registry, props, default_slot)
}

#[derive(Properties, PartialEq, Clone)]
pub struct SlotProviderProps {
    pub slots: SlotRegistry,
    #[prop_or_default]
    pub children: Children,
}

/// Registers slot defaults for every descendant, layered over any parent provider.
#[function_component(SlotProvider)]
pub fn slot_provider(props: &SlotProviderProps) -> Html {
    let parent = use_context::<SlotRegistry>().unwrap_or_default();
    let context = parent.merged_with(&props.slots);
    html! {
        <ContextProvider<SlotRegistry> context={context}>
            { for props.children.iter() }
        </ContextProvider<SlotRegistry>>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ClearSlotsProps {
    #[prop_or_default]
    pub children: Children,
}

/// Hides every registered slot default from its descendants.
#[function_component(ClearSlots)]
pub fn clear_slots(props: &ClearSlotsProps) -> Html {
    html! {
        <ContextProvider<SlotRegistry> context={SlotRegistry::default()}>
            { for props.children.iter() }
        </ContextProvider<SlotRegistry>>
    }
}
