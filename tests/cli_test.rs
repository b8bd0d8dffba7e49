#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;

    use minefield::{
        CliPlayer, GameEngine, GameStatus, Minefield, Session, FAIL_MESSAGE, USER_INPUT_MESSAGE,
        WIN_MESSAGE,
    };
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn play(input: &str) -> (GameStatus, String) {
        let field =
            Minefield::from_mines(9, 9, &[(0, 0), (8, 8)], SmallRng::seed_from_u64(1)).unwrap();
        let player = CliPlayer::new(Cursor::new(input.to_owned()), Vec::new());
        let mut session = Session::new(player, GameEngine::new(field));
        let mut rng = SmallRng::seed_from_u64(2);
        let status = session.run(&mut rng);
        let (player, _) = session.into_parts();
        (status, String::from_utf8(player.into_output()).unwrap())
    }

    #[test]
    fn test_cli_win_by_marks() {
        let (status, out) = play("2 2 free\n2 2 mine\nx\n1 1 mine\n9 9 mine\n");
        assert_eq!(status, GameStatus::Won);
        assert!(out.contains("There is a number here!"));
        assert!(out.contains("2│.1.......│"));
        // the grid is not redrawn after a rejected or malformed input
        assert_eq!(out.matches(" │123456789│").count(), 3);
        assert!(out.matches(USER_INPUT_MESSAGE).count() >= 5);
        assert!(out.ends_with(&format!("{}\n", WIN_MESSAGE)));
    }

    #[test]
    fn test_cli_loss_prints_field_then_message() {
        let (status, out) = play("2 2 free\n1 1 free\n");
        assert_eq!(status, GameStatus::Lost);
        let tail = format!("—│—————————│\n{}\n", FAIL_MESSAGE);
        assert!(out.ends_with(&tail));
    }

    #[test]
    fn test_cli_marks_are_drawn() {
        let (status, out) = play("3 1 mine\n");
        assert_eq!(status, GameStatus::InProgress);
        assert!(out.contains("1│..*......│"));
    }

    #[test]
    fn test_cli_eof_leaves_game_in_progress() {
        let (status, out) = play("");
        assert_eq!(status, GameStatus::InProgress);
        assert!(out.starts_with("\n │123456789│\n—│—————————│\n1│.........│"));
    }
}
