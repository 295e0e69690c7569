#[cfg(test)]
mod test {
    use std::cell::RefCell;
    use std::rc::Rc;

    use Direction::*;
    use crate::core::*;
    use crate::test::test_util::BoardTestState;

    fn playing(level: &str) -> BoardTestState {
        let mut game = BoardTestState::new(level);
        game.board.start_play().expect("test level should be valid");
        game
    }

    #[test]
    fn when_move_right_observes_move_right() {
        let mut game = playing(r#"
#@-$.#
"#);
        assert_eq!(MoveOutcome::PlayerMove, game.board.move_player(Right).unwrap());
        game.assert_matches(r#"
#-@$.#
"#);
        assert!(!game.board.is_won());
    }

    #[test]
    fn when_push_onto_goal_level_is_won() {
        let mut game = playing(r#"
#@$.-#
"#);
        assert_eq!(MoveOutcome::PlayerAndBoxMove, game.board.move_player(Right).unwrap());
        game.assert_matches(r#"
#-@*-#
"#);
        assert!(game.board.is_won());
    }

    #[test]
    fn when_block_pushed_into_block_remains_two_blocks() {
        let mut game = playing(r#"
#@$$..#
"#);
        assert_eq!(
            MoveOutcome::Blocked(BlockReason::BoxBlocked),
            game.board.move_player(Right).unwrap()
        );
        game.assert_matches(r#"
#@$$..#
"#);
    }

    #[test]
    fn when_walking_into_wall_player_stays() {
        let mut game = playing(r#"
#@$.#
"#);
        assert_eq!(
            MoveOutcome::Blocked(BlockReason::Wall),
            game.board.move_player(Left).unwrap()
        );
        game.assert_matches(r#"
#@$.#
"#);
    }

    #[test]
    fn when_moving_off_the_grid_player_stays() {
        let mut game = playing("@$.");
        assert_eq!(
            MoveOutcome::Blocked(BlockReason::OutOfBounds),
            game.board.move_player(Up).unwrap()
        );
        assert_eq!(
            MoveOutcome::Blocked(BlockReason::OutOfBounds),
            game.board.move_player(Left).unwrap()
        );
        game.assert_matches("@$.");
    }

    #[test]
    fn when_player_leaves_goal_the_goal_remains() {
        let mut game = playing(r#"
#.@$*#
"#);
        game.board.move_player(Left).unwrap();
        game.assert_matches(r#"
#+-$*#
"#);
        game.board.move_player(Right).unwrap();
        game.assert_matches(r#"
#.@$*#
"#);
    }

    #[test]
    fn when_box_leaves_goal_the_goal_remains() {
        let mut game = playing(r#"
#####
#@*-#
#-.$#
#####
"#);
        assert!(!game.board.is_won());
        game.board.move_player(Right).unwrap();
        game.assert_matches(r#"
#####
#-+$#
#-.$#
#####
"#);
        assert_eq!(0, game.board.grid().boxes_on_goals_count());
    }

    #[test]
    fn stopping_play_restores_the_design() {
        let level = r#"
#######
#@-$-.#
#######
"#;
        let mut game = playing(level);
        game.board.move_player(Right).unwrap();
        game.board.move_player(Right).unwrap();
        game.board.move_player(Right).unwrap();
        assert!(game.board.is_won());

        game.board.stop_play().unwrap();
        assert_eq!(BoardMode::Design, game.board.mode());
        game.assert_matches(level);
        assert!(!game.board.is_won());
    }

    #[test]
    fn play_needs_a_valid_level() {
        let mut game = BoardTestState::new("#@$$.#");
        assert!(matches!(game.board.start_play(), Err(BoardError::LevelInvalid(_))));
        assert_eq!(BoardMode::Design, game.board.mode());
    }

    #[test]
    fn moves_need_play_mode() {
        let mut game = BoardTestState::new("#@$.#");
        assert!(matches!(game.board.move_player(Right), Err(BoardError::NotPlaying)));
        assert!(matches!(game.board.stop_play(), Err(BoardError::NotPlaying)));

        game.board.start_play().unwrap();
        assert!(matches!(game.board.start_play(), Err(BoardError::Playing)));
    }

    #[test]
    fn opening_a_level_ends_play() {
        let mut game = playing("#@$.#");
        game.board.open_str("#.$@#").unwrap();
        assert_eq!(BoardMode::Design, game.board.mode());
    }

    fn record_events(game: &mut BoardTestState) -> Rc<RefCell<Vec<GridEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        game.board.subscribe(move |event| sink.borrow_mut().push(event.clone()));
        events
    }

    #[test]
    fn moves_keep_a_valid_level_valid_for_observers() {
        let mut game = playing("#@-$.#");
        let events = record_events(&mut game);

        game.board.move_player(Right).unwrap();
        game.board.move_player(Right).unwrap();
        game.board.stop_play().unwrap();

        let validity_changes: Vec<_> = events
            .borrow()
            .iter()
            .filter(|event| matches!(event, GridEvent::ValidityChanged(_)))
            .cloned()
            .collect();
        assert!(validity_changes.is_empty(), "unexpected {:?}", validity_changes);
        assert_eq!(Validity::Valid, game.board.grid().validity());
    }

    #[test]
    fn a_push_reports_each_cell_then_the_counts_once() {
        let mut game = playing("#@$-.#");
        let events = record_events(&mut game);

        assert_eq!(MoveOutcome::PlayerAndBoxMove, game.board.move_player(Right).unwrap());

        let events = events.borrow();
        assert_eq!(4, events.len(), "{:?}", events);
        let mut changed: Vec<Vec2> = events[..3]
            .iter()
            .map(|event| match event {
                GridEvent::CellChanged { pos, .. } => *pos,
                other => panic!("expected CellChanged, got {:?}", other),
            })
            .collect();
        changed.sort_by_key(|pos| pos.j);
        assert_eq!(vec![Vec2::new(0, 1), Vec2::new(0, 2), Vec2::new(0, 3)], changed);
        match events[3] {
            GridEvent::CountsChanged(counts) => assert_eq!(1, counts.players),
            ref other => panic!("expected CountsChanged, got {:?}", other),
        }
    }
}
