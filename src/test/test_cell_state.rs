#[cfg(test)]
mod test {
    use crate::core::*;

    const ALL_VALUES: [CellValue; 7] = [
        CellValue::Ground,
        CellValue::Wall,
        CellValue::Goal,
        CellValue::Box,
        CellValue::Player,
        CellValue::BoxOnGoal,
        CellValue::PlayerOnGoal,
    ];

    const PLACEABLE: [ElementKind; 4] = [
        ElementKind::Wall,
        ElementKind::Goal,
        ElementKind::Box,
        ElementKind::Player,
    ];

    fn apply(value: CellValue, kind: ElementKind) -> CellValue {
        CellState::from_value(value).apply_tool(kind).value()
    }

    #[test]
    fn applying_a_tool_twice_restores_the_cell() {
        for value in ALL_VALUES {
            for kind in PLACEABLE {
                let twice = apply(apply(value, kind), kind);
                let replaced_mobile = matches!(
                    (value, kind),
                    (CellValue::Box | CellValue::BoxOnGoal, ElementKind::Player)
                        | (CellValue::Player | CellValue::PlayerOnGoal, ElementKind::Box)
                );
                let replaced_by_wall =
                    kind == ElementKind::Wall && value != CellValue::Wall && value != CellValue::Ground;

                if replaced_mobile {
                    let expected = if value.has_goal() { CellValue::Goal } else { CellValue::Ground };
                    assert_eq!(expected, twice, "{:?} then {:?} twice", value, kind);
                } else if replaced_by_wall {
                    assert_eq!(CellValue::Ground, twice, "{:?} then {:?} twice", value, kind);
                } else {
                    assert_eq!(value, twice, "{:?} then {:?} twice", value, kind);
                }
            }
        }
    }

    #[test]
    fn toggling_a_mobile_off_a_goal_leaves_the_goal() {
        assert_eq!(CellValue::Goal, apply(CellValue::BoxOnGoal, ElementKind::Box));
        assert_eq!(CellValue::Goal, apply(CellValue::PlayerOnGoal, ElementKind::Player));
        assert_eq!(CellValue::Ground, apply(CellValue::Box, ElementKind::Box));
    }

    #[test]
    fn toggling_a_goal_off_keeps_the_mobile() {
        assert_eq!(CellValue::Box, apply(CellValue::BoxOnGoal, ElementKind::Goal));
        assert_eq!(CellValue::Player, apply(CellValue::PlayerOnGoal, ElementKind::Goal));
    }

    #[test]
    fn wall_discards_every_other_layer() {
        for value in ALL_VALUES {
            let cell = CellState::from_value(value).apply_tool(ElementKind::Wall);
            if value == CellValue::Wall {
                assert_eq!(CellState::GROUND, cell);
            } else {
                assert_eq!(CellState::WALL, cell);
                assert_eq!(None, cell.marker());
                assert_eq!(None, cell.mobile());
            }
        }
    }

    #[test]
    fn nothing_but_a_wall_or_erase_changes_a_wall() {
        for kind in [ElementKind::Goal, ElementKind::Box, ElementKind::Player] {
            assert_eq!(CellValue::Wall, apply(CellValue::Wall, kind));
        }
        assert_eq!(CellValue::Ground, apply(CellValue::Wall, ElementKind::Ground));
    }

    #[test]
    fn goal_keeps_the_mobile_layer() {
        assert_eq!(CellValue::BoxOnGoal, apply(CellValue::Box, ElementKind::Goal));
        assert_eq!(CellValue::PlayerOnGoal, apply(CellValue::Player, ElementKind::Goal));
    }

    #[test]
    fn mobile_replaces_mobile_and_keeps_marker() {
        assert_eq!(CellValue::Player, apply(CellValue::Box, ElementKind::Player));
        assert_eq!(CellValue::BoxOnGoal, apply(CellValue::PlayerOnGoal, ElementKind::Box));
        assert_eq!(CellValue::PlayerOnGoal, apply(CellValue::Goal, ElementKind::Player));
    }

    #[test]
    fn ground_erases_everything() {
        for value in ALL_VALUES {
            assert_eq!(CellValue::Ground, apply(value, ElementKind::Ground));
        }
    }

    #[test]
    fn remove_tool_peels_toward_the_base() {
        let remove = |value| CellState::from_value(value).remove_tool().value();
        assert_eq!(CellValue::Goal, remove(CellValue::BoxOnGoal));
        assert_eq!(CellValue::Goal, remove(CellValue::PlayerOnGoal));
        assert_eq!(CellValue::Ground, remove(CellValue::Box));
        assert_eq!(CellValue::Ground, remove(CellValue::Player));
        assert_eq!(CellValue::Ground, remove(CellValue::Goal));
        assert_eq!(CellValue::Ground, remove(CellValue::Wall));
        assert_eq!(CellValue::Ground, remove(CellValue::Ground));
    }

    #[test]
    fn goal_is_drawn_above_a_mobile() {
        let layers = CellState::from_value(CellValue::BoxOnGoal).layers();
        assert_eq!(
            vec![
                (DrawSlot::Bottom, ElementKind::Ground),
                (DrawSlot::Middle, ElementKind::Box),
                (DrawSlot::Top, ElementKind::Goal),
            ],
            layers
        );

        let layers = CellState::from_value(CellValue::PlayerOnGoal).layers();
        assert_eq!(Some(&(DrawSlot::Top, ElementKind::Goal)), layers.last());
    }

    #[test]
    fn single_layers_sit_above_the_base() {
        assert_eq!(
            vec![(DrawSlot::Bottom, ElementKind::Wall)],
            CellState::WALL.layers()
        );
        assert_eq!(
            vec![(DrawSlot::Bottom, ElementKind::Ground), (DrawSlot::Middle, ElementKind::Goal)],
            CellState::from_value(CellValue::Goal).layers()
        );
        assert_eq!(
            vec![(DrawSlot::Bottom, ElementKind::Ground), (DrawSlot::Middle, ElementKind::Player)],
            CellState::from_value(CellValue::Player).layers()
        );
    }

    #[test]
    fn only_plain_ground_is_empty() {
        for value in ALL_VALUES {
            assert_eq!(value == CellValue::Ground, CellState::from_value(value).is_empty());
        }
    }
}
