//! Initial slide resolution
//!
//! The starting slide comes from the configured policy, optionally
//! overridden for `portrait-one` carousels by visitor affinity (a slide
//! card matching the visitor's country or most visited demand space).

use slidekit_model::{InitialSlidePolicy, LayoutMode};

/// Starting index for `total` slides under `policy`.
///
/// `Center` picks the middle slide; even counts bias one slide earlier.
pub fn initial_index(policy: InitialSlidePolicy, total: usize) -> usize {
    match policy {
        InitialSlidePolicy::First => 0,
        InitialSlidePolicy::Center => {
            let middle = total / 2;
            if total % 2 == 0 {
                middle.saturating_sub(1)
            } else {
                middle
            }
        }
    }
}

/// Targeting metadata attached to a slide's card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideCard {
    /// Raw, comma-separated country tags, e.g. `site:country/qa,site:country/fr`.
    pub primary_countries: Option<String>,
    pub secondary_countries: Option<String>,
    pub demand_space: Option<String>,
}

impl SlideCard {
    fn lists_country(tags: Option<&str>, country: &str) -> bool {
        tags.map(country_codes)
            .is_some_and(|codes| codes.iter().any(|code| code == country))
    }
}

/// What is known about the current visitor.
#[derive(Debug, Clone, Default)]
pub struct VisitorProfile {
    /// Upper-case country code, when known.
    pub country: Option<String>,
    /// Seen in an earlier session.
    pub returning: bool,
    /// Visit counts per demand space name, in the order each space was
    /// first visited.
    pub demand_space_visits: Vec<(String, u32)>,
}

impl VisitorProfile {
    /// Demand space with the highest visit count. Ties go to the later
    /// entry.
    pub fn preferred_demand_space(&self) -> Option<&str> {
        self.demand_space_visits
            .iter()
            .reduce(|best, entry| {
                if best.1 > entry.1 { best } else { entry }
            })
            .map(|(name, _)| name.as_str())
    }
}

/// Normalise comma-separated country tags into upper-case codes, stripping
/// any `<namespace>:country/` prefix.
pub fn country_codes(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(|tag| {
            let code = tag
                .split_once(":country/")
                .map_or(tag, |(_, code)| code);
            code.to_ascii_uppercase()
        })
        .collect()
}

/// Slide matching the visitor, if any. Returning visitors prefer their
/// demand space, then secondary-country cards; every visitor then falls
/// back to primary-country cards.
pub fn affinity_index(
    cards: &[SlideCard],
    visitor: &VisitorProfile,
) -> Option<usize> {
    let country = visitor.country.as_deref().filter(|c| !c.is_empty())?;

    if visitor.returning {
        if let Some(space) = visitor.preferred_demand_space()
            && let Some(index) = cards
                .iter()
                .position(|card| card.demand_space.as_deref() == Some(space))
        {
            return Some(index);
        }

        if let Some(index) = cards.iter().position(|card| {
            SlideCard::lists_country(card.secondary_countries.as_deref(), country)
        }) {
            return Some(index);
        }
    }

    cards.iter().position(|card| {
        SlideCard::lists_country(card.primary_countries.as_deref(), country)
    })
}

/// Resolve the starting slide. Visitor affinity only applies to
/// `portrait-one` carousels. A centered `portrait` carousel on a wide
/// viewport starts one slide earlier than the plain policy.
pub fn resolve_initial_index(
    layout: LayoutMode,
    policy: InitialSlidePolicy,
    total: usize,
    cards: &[SlideCard],
    visitor: Option<&VisitorProfile>,
    wide_viewport: bool,
) -> usize {
    let affinity = match (layout, visitor) {
        (LayoutMode::PortraitOne, Some(visitor)) => {
            affinity_index(cards, visitor)
        }
        _ => None,
    };
    affinity.filter(|&index| index < total).unwrap_or_else(|| {
        let index = initial_index(policy, total);
        if layout == LayoutMode::Portrait
            && policy == InitialSlidePolicy::Center
            && wide_viewport
        {
            index.saturating_sub(1)
        } else {
            index
        }
    })
}
