use glam::Vec2;
use log::debug;

use crate::properties::Bubble;

/// Cursor the host should show after a pointer move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorHint {
    Default,
    Pointer,
}

/// Indices of all bubbles whose clickable circle contains `point`.
pub fn hit_test(bubbles: &[Bubble], point: Vec2) -> Vec<usize> {
    bubbles
        .iter()
        .enumerate()
        .filter(|(_, b)| b.contains(point))
        .map(|(i, _)| i)
        .collect()
}

/// Routes pointer input to bubbles and reports the selection.
///
/// Points are expected in simulation space already.
pub struct Selection {
    on_select: Option<Box<dyn FnMut(&[String])>>,
}

impl Selection {
    pub fn new() -> Self {
        Self { on_select: None }
    }

    /// Called with the labels of every active bubble after a click changed
    /// the selection.
    pub fn set_on_select<F>(&mut self, on_select: F)
    where
        F: FnMut(&[String]) + 'static,
    {
        self.on_select = Some(Box::new(on_select));
    }

    /// Toggles every bubble under `point`, overlapping ones included.
    pub fn click(&mut self, bubbles: &mut [Bubble], point: Vec2) -> Vec<String> {
        let hits = hit_test(bubbles, point);
        for &i in hits.iter() {
            bubbles[i].toggle_active();
        }

        let active = Self::active_labels(bubbles);
        if !hits.is_empty() {
            debug!("selection changed: {:?}", active);
            if let Some(on_select) = self.on_select.as_mut() {
                on_select(&active);
            }
        }
        active
    }

    pub fn pointer_move(&mut self, bubbles: &mut [Bubble], point: Vec2) -> CursorHint {
        let mut hint = CursorHint::Default;
        for bubble in bubbles.iter_mut() {
            let hovered = bubble.contains(point);
            bubble.set_hover(hovered);
            if hovered {
                hint = CursorHint::Pointer;
            }
        }
        hint
    }

    pub fn pointer_left(&mut self, bubbles: &mut [Bubble]) {
        for bubble in bubbles.iter_mut() {
            bubble.set_hover(false);
        }
    }

    pub fn active_labels(bubbles: &[Bubble]) -> Vec<String> {
        bubbles
            .iter()
            .filter(|b| b.is_active())
            .map(|b| b.label().to_string())
            .collect()
    }
}

#[cfg(test)]
mod test {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::properties::BubbleStyle;

    fn bubbles() -> Vec<Bubble> {
        vec![
            Bubble::new("a", Vec2::new(100.0, 100.0), 50.0, 60.0, 500.0).unwrap(),
            Bubble::new("b", Vec2::new(150.0, 100.0), 50.0, 60.0, 500.0).unwrap(),
            Bubble::new("c", Vec2::new(400.0, 400.0), 50.0, 60.0, 500.0).unwrap(),
        ]
    }

    #[test]
    fn test_hit_test_uses_inset_radius() {
        let bubbles = bubbles();
        assert_eq!(hit_test(&bubbles, Vec2::new(400.0, 430.0)), vec![2]);
        assert!(hit_test(&bubbles, Vec2::new(400.0, 445.0)).is_empty());
        assert_eq!(hit_test(&bubbles, Vec2::new(125.0, 100.0)), vec![0, 1]);
    }

    #[test]
    fn test_click_toggles_all_overlapping() {
        let mut bubbles = bubbles();
        let reported = Rc::new(RefCell::new(vec![]));
        let sink = Rc::clone(&reported);

        let mut selection = Selection::new();
        selection.set_on_select(move |labels| sink.borrow_mut().push(labels.to_vec()));

        assert_eq!(selection.click(&mut bubbles, Vec2::new(400.0, 400.0)), vec!["c"]);
        assert_eq!(
            selection.click(&mut bubbles, Vec2::new(125.0, 100.0)),
            vec!["a", "b", "c"]
        );
        assert_eq!(selection.click(&mut bubbles, Vec2::new(400.0, 400.0)), vec!["a", "b"]);

        assert_eq!(reported.borrow().len(), 3);
        assert_eq!(reported.borrow()[2], vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_click_on_empty_space_reports_nothing() {
        let mut bubbles = bubbles();
        let calls = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&calls);

        let mut selection = Selection::new();
        selection.set_on_select(move |_| *sink.borrow_mut() += 1);

        assert!(selection.click(&mut bubbles, Vec2::new(300.0, 10.0)).is_empty());
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_pointer_move_sets_hover() {
        let mut bubbles = bubbles();
        let mut selection = Selection::new();

        let hint = selection.pointer_move(&mut bubbles, Vec2::new(400.0, 400.0));
        assert_eq!(hint, CursorHint::Pointer);
        assert!(!bubbles[0].is_hovered());
        assert!(bubbles[2].is_hovered());

        let hint = selection.pointer_move(&mut bubbles, Vec2::new(10.0, 490.0));
        assert_eq!(hint, CursorHint::Default);
        assert!(bubbles.iter().all(|b| !b.is_hovered()));
        assert!(bubbles.iter().all(|b| b.style() == BubbleStyle::DEFAULT));
    }

    #[test]
    fn test_pointer_left_clears_hover() {
        let mut bubbles = bubbles();
        let mut selection = Selection::new();
        selection.pointer_move(&mut bubbles, Vec2::new(125.0, 100.0));
        assert!(bubbles[0].is_hovered() && bubbles[1].is_hovered());

        selection.pointer_left(&mut bubbles);
        assert!(bubbles.iter().all(|b| !b.is_hovered()));
    }
}
