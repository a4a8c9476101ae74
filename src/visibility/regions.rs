use std::collections::HashSet;
use std::rc::Rc;

use yew::Reducible;

/// Page sections that fade in the first time they scroll into view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    Hero,
    Autoridad,
    Beneficios,
    Testimonio,
    Formulario,
    Cierre,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Hero,
        Region::Autoridad,
        Region::Beneficios,
        Region::Testimonio,
        Region::Formulario,
        Region::Cierre,
    ];

    /// Element id, also used as the in-page anchor.
    pub fn id(self) -> &'static str {
        match self {
            Region::Hero => "hero",
            Region::Autoridad => "autoridad",
            Region::Beneficios => "beneficios",
            Region::Testimonio => "testimonio",
            Region::Formulario => "formulario",
            Region::Cierre => "cierre",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|region| region.id() == id)
    }
}

/// What to do with one intersection entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryDecision {
    /// Not intersecting yet; keep observing.
    Wait,
    /// First hit on a known region: reveal it and stop observing.
    Reveal(Region),
    /// Hit on an element that is not a region: stop observing it.
    Unknown,
}

impl EntryDecision {
    pub fn for_entry(is_intersecting: bool, id: &str) -> Self {
        if !is_intersecting {
            return EntryDecision::Wait;
        }
        match Region::from_id(id) {
            Some(region) => EntryDecision::Reveal(region),
            None => EntryDecision::Unknown,
        }
    }

    pub fn unobserves(self) -> bool {
        self != EntryDecision::Wait
    }
}

/// Regions that have been on screen at least once. Only grows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeenRegions {
    seen: HashSet<Region>,
}

impl SeenRegions {
    /// Returns `true` only the first time a region is marked.
    pub fn mark_seen(&mut self, region: Region) -> bool {
        self.seen.insert(region)
    }

    pub fn reveal_all(&mut self) {
        self.seen.extend(Region::ALL);
    }

    pub fn is_seen(&self, region: Region) -> bool {
        self.seen.contains(&region)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Class list for a region: its base classes plus `visible` once seen.
    pub fn fade_classes(&self, region: Region, base: &str) -> String {
        if self.is_seen(region) {
            format!("{} fade-in visible", base)
        } else {
            format!("{} fade-in", base)
        }
    }
}

pub enum VisibilityAction {
    Seen(Region),
    RevealAll,
}

impl Reducible for SeenRegions {
    type Action = VisibilityAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let already = match &action {
            VisibilityAction::Seen(region) => self.is_seen(*region),
            VisibilityAction::RevealAll => self.len() == Region::ALL.len(),
        };
        if already {
            // Same Rc, so yew skips the re-render.
            return self;
        }

        let mut next = (*self).clone();
        match action {
            VisibilityAction::Seen(region) => {
                next.mark_seen(region);
            }
            VisibilityAction::RevealAll => next.reveal_all(),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_are_marked_once() {
        let mut seen = SeenRegions::default();
        assert!(!seen.is_seen(Region::Hero));

        assert!(seen.mark_seen(Region::Hero));
        assert!(!seen.mark_seen(Region::Hero));
        assert!(seen.is_seen(Region::Hero));
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn seen_set_never_shrinks() {
        let mut seen = SeenRegions::default();
        let mut previous = 0;
        for region in Region::ALL.into_iter().chain(Region::ALL) {
            seen.mark_seen(region);
            assert!(seen.len() >= previous);
            previous = seen.len();
        }
        assert_eq!(seen.len(), Region::ALL.len());
    }

    #[test]
    fn reducer_returns_same_state_when_nothing_changes() {
        let state = Rc::new(SeenRegions::default());
        let once = state.reduce(VisibilityAction::Seen(Region::Beneficios));
        assert!(once.is_seen(Region::Beneficios));

        let twice = once.clone().reduce(VisibilityAction::Seen(Region::Beneficios));
        assert!(Rc::ptr_eq(&once, &twice));
    }

    #[test]
    fn reveal_all_marks_every_region() {
        let state = Rc::new(SeenRegions::default()).reduce(VisibilityAction::RevealAll);
        for region in Region::ALL {
            assert!(state.is_seen(region));
        }

        let again = state.clone().reduce(VisibilityAction::RevealAll);
        assert!(Rc::ptr_eq(&state, &again));
    }

    #[test]
    fn ids_round_trip() {
        for region in Region::ALL {
            assert_eq!(Region::from_id(region.id()), Some(region));
        }
        assert_eq!(Region::from_id("footer"), None);
        assert_eq!(Region::from_id(""), None);
    }

    #[test]
    fn fade_classes_follow_seen_state() {
        let mut seen = SeenRegions::default();
        assert_eq!(seen.fade_classes(Region::Cierre, "closing"), "closing fade-in");
        seen.mark_seen(Region::Cierre);
        assert_eq!(seen.fade_classes(Region::Cierre, "closing"), "closing fade-in visible");
    }

    #[test]
    fn entries_outside_the_viewport_are_skipped() {
        let decision = EntryDecision::for_entry(false, "hero");
        assert_eq!(decision, EntryDecision::Wait);
        assert!(!decision.unobserves());
    }

    #[test]
    fn first_hit_reveals_and_unobserves() {
        let decision = EntryDecision::for_entry(true, "testimonio");
        assert_eq!(decision, EntryDecision::Reveal(Region::Testimonio));
        assert!(decision.unobserves());
    }

    #[test]
    fn unknown_ids_are_dropped_without_revealing() {
        for id in ["footer", "", "Hero"] {
            let decision = EntryDecision::for_entry(true, id);
            assert_eq!(decision, EntryDecision::Unknown);
            assert!(decision.unobserves());
        }
    }
}
