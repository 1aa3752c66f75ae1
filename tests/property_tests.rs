use gesture_grid::{Grid, GridError, Hitbox, KeyRecord, LayoutDescription, RawHitbox};
use proptest::prelude::*;

// --- STRATEGIES ---

prop_compose! {
    fn arb_rect()(
        x in -1000i32..1000,
        y in -1000i32..1000,
        w in 1i32..500,
        h in 1i32..500
    ) -> (i32, i32, i32, i32) {
        (x, y, w, h)
    }
}

prop_compose! {
    fn arb_key()(
        label in "[a-z]{0,2}",
        rect in arb_rect()
    ) -> KeyRecord {
        let (x, y, w, h) = rect;
        KeyRecord {
            label: Some(label),
            action: None,
            hitbox: Some(RawHitbox::new(x, y, w, h)),
        }
    }
}

prop_compose! {
    fn arb_layout()(
        keys in proptest::collection::vec(arb_key(), 0..40)
    ) -> LayoutDescription {
        LayoutDescription { keys }
    }
}

prop_compose! {
    fn arb_wide_key()(
        label in "[a-z]",
        x in any::<i32>(),
        y in any::<i32>(),
        w in any::<i32>(),
        h in any::<i32>()
    ) -> KeyRecord {
        KeyRecord {
            label: Some(label),
            action: None,
            hitbox: Some(RawHitbox::new(x, y, w, h)),
        }
    }
}

fn between(v: f32, a: i32, b: i32) -> bool {
    let (lo, hi) = (a.min(b) as f32, a.max(b) as f32);
    lo <= v && v <= hi
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_center_is_midpoint(rect in arb_rect()) {
        let (x, y, w, h) = rect;
        let hb = Hitbox::from_rect(x, y, w, h).unwrap();
        prop_assert_eq!(hb.cx(), (hb.left() + hb.right()) as f32 / 2.0);
        prop_assert_eq!(hb.cy(), (hb.top() + hb.bottom()) as f32 / 2.0);
    }

    #[test]
    fn test_interior_points_are_in(rect in arb_rect(), fx in 0.0f32..1.0, fy in 0.0f32..1.0) {
        let (x, y, w, h) = rect;
        let hb = Hitbox::from_rect(x, y, w, h).unwrap();
        // stay on integer offsets so f32 rounding cannot reach the far edge
        let px = (x + ((w - 1) as f32 * fx) as i32) as f32;
        let py = (y + ((h - 1) as f32 * fy) as i32) as f32;
        prop_assert!(hb.is_in(px, py));
        prop_assert!(!hb.is_in(hb.right() as f32, py));
        prop_assert!(!hb.is_in(px, hb.bottom() as f32));
    }

    #[test]
    fn test_lookup_returns_containing_or_fallback(layout in arb_layout(), px in -1200i32..1600, py in -1200i32..1600) {
        let grid = Grid::from_layout(&layout).unwrap();
        let (x, y) = (px as f32, py as f32);
        let label = grid.get_nearest_hitbox(x, y);

        let first_hit = grid.iter().find(|(_, hb)| hb.is_in(x, y)).map(|(l, _)| l);
        match first_hit {
            Some(expected) => {
                prop_assert_eq!(label, expected);
            }
            None => {
                prop_assert_eq!(label, 'a');
            }
        }
    }

    #[test]
    fn test_grid_only_holds_single_char_labels(layout in arb_layout()) {
        let grid = Grid::from_layout(&layout).unwrap();
        let expected: std::collections::HashSet<char> = layout
            .keys
            .iter()
            .filter_map(|k| k.name())
            .collect();
        prop_assert_eq!(grid.len(), expected.len());
        for label in grid.labels() {
            prop_assert!(expected.contains(&label));
        }
    }

    #[test]
    fn test_curve_never_longer_than_word(layout in arb_layout(), word in "[a-z ]{0,20}") {
        let grid = Grid::from_layout(&layout).unwrap();
        let curve = grid.get_centered_curve(&word);
        let known = word.chars().filter(|c| grid.contains(*c)).count();
        prop_assert_eq!(curve.len(), known);
        prop_assert!(curve.len() <= word.chars().count());
    }

    #[test]
    fn test_full_range_coordinates_never_panic(
        keys in proptest::collection::vec(arb_wide_key(), 1..10),
        px in any::<f32>(),
        py in any::<f32>()
    ) {
        match Grid::from_layout(&LayoutDescription { keys: keys.clone() }) {
            Ok(grid) => {
                for (_, hb) in grid.iter() {
                    prop_assert!(between(hb.cx(), hb.left(), hb.right()));
                    prop_assert!(between(hb.cy(), hb.top(), hb.bottom()));
                }
                let _ = grid.get_nearest_hitbox(px, py);
            }
            Err(GridError::CoordinateOverflow { label }) => {
                let overflowed = keys.iter().any(|k| {
                    let hb = k.hitbox.unwrap();
                    k.name() == Some(label)
                        && (hb.x.unwrap().checked_add(hb.w.unwrap()).is_none()
                            || hb.y.unwrap().checked_add(hb.h.unwrap()).is_none())
                });
                prop_assert!(overflowed);
            }
            Err(e) => {
                prop_assert!(false, "unexpected error: {}", e);
            }
        }
    }
}
