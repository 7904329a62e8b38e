//! Pure angular layout for the wheel carousel.
//!
//! Items sit on a fixed-radius arc, 30° apart, anchored so the active
//! item is on the horizontal axis. Opacity and scale fall off with
//! distance from the active item; anything beyond ±90° of arc is
//! culled.

/// Angular spacing between neighbouring items, in degrees.
pub const ARC_STEP_DEGREES: f32 = 30.0;

/// Arc radius in pixels. Presentation constant, not a contract.
pub const ARC_RADIUS: f32 = 300.0;

/// Items whose arc angle exceeds this are not rendered.
pub const VISIBLE_ARC_DEGREES: f32 = 90.0;

/// Stacking order of the active item.
pub const ACTIVE_Z: i32 = 10;

/// Computed placement of one carousel item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemPlacement {
    pub x: f32,
    pub y: f32,
    /// Counter-rotation keeping the card upright, in degrees.
    pub rotation: f32,
    pub opacity: f32,
    pub scale: f32,
    pub z_index: i32,
    pub visible: bool,
}

/// Shortest-path relative index in `(-count/2, count/2]`.
pub fn normalize_relative(item_index: usize, current_index: usize, item_count: usize) -> isize {
    let count = item_count as isize;
    let half = item_count as f32 / 2.0;
    let mut relative = item_index as isize - current_index as isize;
    if relative as f32 > half {
        relative -= count;
    } else if relative as f32 <= -half {
        // Exactly -count/2 wraps to the in-range +count/2, which is
        // the same point on the ring.
        relative += count;
    }
    relative
}

/// Place one item relative to the active index. Deterministic and
/// side-effect-free; callers recompute the full layout per render.
pub fn place(item_index: usize, current_index: usize, item_count: usize) -> ItemPlacement {
    let relative = normalize_relative(item_index, current_index, item_count);
    let distance = relative.unsigned_abs() as f32;
    let is_active = item_index == current_index;

    let arc_angle = relative as f32 * ARC_STEP_DEGREES;
    let angle = -arc_angle;
    let radian = angle.to_radians();

    let opacity = if is_active {
        1.0
    } else {
        (1.0 - distance * 0.3).max(0.1)
    };
    let scale = if is_active {
        1.0
    } else {
        (1.0 - distance * 0.2).max(0.4)
    };
    let z_index = if is_active {
        ACTIVE_Z
    } else {
        (5 - distance as i32).max(0)
    };

    ItemPlacement {
        x: radian.cos() * ARC_RADIUS,
        y: radian.sin() * ARC_RADIUS,
        rotation: -arc_angle,
        opacity,
        scale,
        z_index,
        visible: arc_angle.abs() <= VISIBLE_ARC_DEGREES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_item_is_the_only_full_one() {
        for count in 1..=12usize {
            for current in 0..count {
                for item in 0..count {
                    let placement = place(item, current, count);
                    if item == current {
                        assert_eq!(placement.opacity, 1.0);
                        assert_eq!(placement.scale, 1.0);
                        assert_eq!(placement.z_index, ACTIVE_Z);
                    } else {
                        assert!(placement.opacity < 1.0, "item {item} of {count}");
                        assert!(placement.scale < 1.0, "item {item} of {count}");
                    }
                }
            }
        }
    }

    #[test]
    fn normalization_stays_in_half_open_range() {
        for count in 1..=11usize {
            let half = count as f32 / 2.0;
            for current in 0..count {
                for item in 0..count {
                    let relative = normalize_relative(item, current, count);
                    assert!(relative as f32 > -half, "{item}/{current}/{count}");
                    assert!(relative as f32 <= half, "{item}/{current}/{count}");
                }
            }
        }
    }

    #[test]
    fn normalization_is_idempotent() {
        // Re-normalizing an already normalized offset must not move it.
        for count in 1..=11usize {
            for current in 0..count {
                for item in 0..count {
                    let relative = normalize_relative(item, current, count);
                    let renormalized = {
                        let half = count as f32 / 2.0;
                        let mut r = relative;
                        if r as f32 > half {
                            r -= count as isize;
                        } else if (r as f32) < -half {
                            r += count as isize;
                        }
                        r
                    };
                    assert_eq!(relative, renormalized);
                }
            }
        }
    }

    #[test]
    fn even_count_half_ring_normalizes_to_the_positive_side() {
        // Two items, active at 1: item 0 sits exactly half the ring
        // away and must land on the closed +count/2 end of the range.
        assert_eq!(normalize_relative(0, 1, 2), 1);
        assert_eq!(normalize_relative(1, 0, 2), 1);

        // Six items, active at 0: item 3 is the antipode.
        assert_eq!(normalize_relative(3, 0, 6), 3);
        assert_eq!(normalize_relative(0, 3, 6), 3);
    }

    #[test]
    fn wraparound_takes_the_shortest_path() {
        // 9 items, active at 0: item 8 is one step behind, not eight ahead.
        assert_eq!(normalize_relative(8, 0, 9), -1);
        assert_eq!(normalize_relative(1, 8, 9), 2);
    }

    #[test]
    fn far_items_are_culled() {
        // 9 items, active at 4: item 0 sits 4 steps away (120° of arc).
        let far = place(0, 4, 9);
        assert!(!far.visible);

        // 3 steps away is exactly on the 90° boundary and stays visible.
        let edge = place(7, 4, 9);
        assert!(edge.visible);
    }

    #[test]
    fn z_index_never_goes_negative() {
        for count in [9usize, 15, 24] {
            for item in 0..count {
                assert!(place(item, 0, count).z_index >= 0);
            }
        }
    }

    #[test]
    fn active_item_sits_on_the_horizontal_axis() {
        let placement = place(3, 3, 7);
        assert!((placement.x - ARC_RADIUS).abs() < 1e-3);
        assert!(placement.y.abs() < 1e-3);
        assert_eq!(placement.rotation, 0.0);
    }
}
