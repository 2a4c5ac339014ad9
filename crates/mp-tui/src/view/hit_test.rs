// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use ratatui::layout::Rect;

/// Clickable zone recorded while rendering
#[derive(Debug, Clone)]
pub struct HitZone<A> {
    pub rect: Rect,
    pub action: A,
}

/// Zones collected during the last frame, resolved against mouse clicks
#[derive(Debug)]
pub struct HitTestRegistry<A> {
    zones: Vec<HitZone<A>>,
}

impl<A> Default for HitTestRegistry<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> HitTestRegistry<A> {
    pub fn new() -> Self {
        Self { zones: Vec::new() }
    }

    /// Forget the previous frame's zones
    pub fn clear(&mut self) {
        self.zones.clear();
    }

    pub fn register(&mut self, rect: Rect, action: A) {
        self.zones.push(HitZone { rect, action });
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

impl<A: Clone> HitTestRegistry<A> {
    /// Action of the most recently registered zone containing the point
    pub fn hit_test(&self, column: u16, row: u16) -> Option<HitZone<A>> {
        self.zones
            .iter()
            .rev()
            .find(|zone| rect_contains(zone.rect, column, row))
            .cloned()
    }
}

fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && row >= rect.y
        && column < rect.x.saturating_add(rect.width)
        && row < rect.y.saturating_add(rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Action {
        Card,
        Button,
    }

    #[test]
    fn later_zone_wins_on_overlap() {
        let mut registry = HitTestRegistry::new();
        registry.register(Rect::new(0, 0, 10, 5), Action::Card);
        registry.register(Rect::new(2, 1, 4, 1), Action::Button);

        assert_eq!(registry.hit_test(3, 1).map(|z| z.action), Some(Action::Button));
        assert_eq!(registry.hit_test(8, 4).map(|z| z.action), Some(Action::Card));
    }

    #[test]
    fn edges_are_exclusive() {
        let mut registry = HitTestRegistry::new();
        registry.register(Rect::new(0, 0, 2, 2), Action::Card);

        assert!(registry.hit_test(1, 1).is_some());
        assert!(registry.hit_test(2, 0).is_none());
        assert!(registry.hit_test(0, 2).is_none());
    }

    #[test]
    fn clear_drops_all_zones() {
        let mut registry = HitTestRegistry::new();
        registry.register(Rect::new(0, 0, 2, 2), Action::Card);
        registry.clear();
        assert!(registry.is_empty());
    }
}
