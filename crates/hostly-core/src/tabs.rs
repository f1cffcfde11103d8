// ── Tab model ──
//
// The visible tab set of an open property is a pure function of its
// kinds. A property carrying several kinds gets the union, in canonical
// order.

use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::model::PropertyKind;

/// A detail tab of the open property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TabId {
    Overview,
    Rooms,
    Amenities,
    Menu,
    Tables,
    Gallery,
    Events,
    Pricing,
    Policies,
}

impl TabId {
    /// Tab set for a single property kind. An unrecognized kind
    /// contributes nothing beyond the overview.
    fn for_kind(kind: &PropertyKind) -> &'static [TabId] {
        match kind {
            PropertyKind::Hotel => &[
                TabId::Overview,
                TabId::Rooms,
                TabId::Amenities,
                TabId::Gallery,
                TabId::Events,
                TabId::Pricing,
                TabId::Policies,
            ],
            PropertyKind::Cafe => &[TabId::Overview, TabId::Menu, TabId::Tables, TabId::Gallery],
            PropertyKind::Restaurant => {
                &[TabId::Overview, TabId::Menu, TabId::Gallery, TabId::Events]
            }
            PropertyKind::Other(_) => &[TabId::Overview],
        }
    }

    /// The union of tab sets for the given kinds, in canonical order.
    ///
    /// A property with no recognized kind still gets the overview tab.
    pub fn tabs_for(kinds: &[PropertyKind]) -> Vec<TabId> {
        TabId::iter()
            .filter(|tab| {
                *tab == TabId::Overview
                    || kinds
                        .iter()
                        .any(|kind| TabId::for_kind(kind).contains(tab))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hotel_gets_full_set() {
        let tabs = TabId::tabs_for(&[PropertyKind::Hotel]);
        assert_eq!(
            tabs,
            vec![
                TabId::Overview,
                TabId::Rooms,
                TabId::Amenities,
                TabId::Gallery,
                TabId::Events,
                TabId::Pricing,
                TabId::Policies,
            ]
        );
    }

    #[test]
    fn cafe_gets_exactly_four_tabs() {
        let tabs = TabId::tabs_for(&[PropertyKind::Cafe]);
        assert_eq!(
            tabs,
            vec![TabId::Overview, TabId::Menu, TabId::Tables, TabId::Gallery]
        );
        assert!(!tabs.contains(&TabId::Pricing));
        assert!(!tabs.contains(&TabId::Rooms));
    }

    #[test]
    fn restaurant_tabs() {
        let tabs = TabId::tabs_for(&[PropertyKind::Restaurant]);
        assert_eq!(
            tabs,
            vec![TabId::Overview, TabId::Menu, TabId::Gallery, TabId::Events]
        );
    }

    #[test]
    fn mixed_kinds_take_the_union() {
        let tabs = TabId::tabs_for(&[PropertyKind::Hotel, PropertyKind::Cafe]);
        assert!(tabs.contains(&TabId::Rooms));
        assert!(tabs.contains(&TabId::Menu));
        assert!(tabs.contains(&TabId::Tables));
        assert!(tabs.contains(&TabId::Policies));
    }

    #[test]
    fn no_kinds_still_has_overview() {
        assert_eq!(TabId::tabs_for(&[]), vec![TabId::Overview]);
    }

    #[test]
    fn unknown_kind_gets_only_overview() {
        let tabs = TabId::tabs_for(&[PropertyKind::Other("Spa".into())]);
        assert_eq!(tabs, vec![TabId::Overview]);
    }
}
