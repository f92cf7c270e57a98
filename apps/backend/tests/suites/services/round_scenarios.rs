use std::sync::Arc;
use std::thread;

use wordgame::{DomainError, RoundStatus};

use crate::support::test_game;

#[test]
fn test_reference_timeline() {
    let game = test_game(&["python"]);
    let rounds = &game.state.rounds;
    game.start_round();

    game.at(10);
    rounds
        .submit_score(rounds.now(), "alice".into(), 10, "python")
        .unwrap();

    game.at(93);
    assert_eq!(
        rounds.submit_score(rounds.now(), "bob".into(), 4, "python"),
        Err(DomainError::SubmissionClosed)
    );

    game.at(94);
    assert_eq!(rounds.get_scores(rounds.now()), Err(DomainError::ScoresNotReady));

    game.at(95);
    let scores = rounds.get_scores(rounds.now()).unwrap();
    assert_eq!(scores.len(), 1);
    assert_eq!(scores[0].player_name, "alice");

    game.at(119);
    assert!(matches!(rounds.query_state(rounds.now()), RoundStatus::Active(_)));

    game.at(120);
    assert_eq!(
        rounds.query_state(rounds.now()),
        RoundStatus::Inactive {
            seconds_until_next_round: 0.0
        }
    );
}

#[test]
fn test_rotation_discards_previous_scores() {
    let game = test_game(&["python"]);
    let rounds = &game.state.rounds;
    game.start_round();
    rounds
        .submit_score(rounds.now(), "alice".into(), 10, "python")
        .unwrap();

    game.at(120);
    game.start_round();
    game.at(215);

    assert_eq!(rounds.get_scores(rounds.now()), Ok(Vec::new()));
    assert_eq!(rounds.rounds_started(), 2);
}

#[test]
fn test_concurrent_submissions_are_all_recorded() {
    let game = test_game(&["python"]);
    game.start_round();
    let rounds = Arc::clone(&game.state.rounds);

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let rounds = Arc::clone(&rounds);
            thread::spawn(move || {
                for i in 0..25 {
                    rounds
                        .submit_score(rounds.now(), format!("p{t}-{i}"), i, "python")
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    game.at(95);
    let scores = rounds.get_scores(rounds.now()).unwrap();
    assert_eq!(scores.len(), 200);
    assert!(scores.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_previous_round_word_is_rejected_after_rotation() {
    let game = test_game(&["alpha", "beta"]);
    let rounds = &game.state.rounds;
    game.start_round();
    let old_word = rounds.fetch_word(rounds.now()).unwrap().word;

    game.at(120);
    let mut rotations = 0;
    while rounds.fetch_word(rounds.now()).unwrap().word == old_word {
        assert!(rotations < 64, "seeded draws never changed the word");
        game.start_round();
        rotations += 1;
    }
    let new_word = rounds.fetch_word(rounds.now()).unwrap().word;
    assert_ne!(new_word, old_word);

    game.at(130);
    assert_eq!(
        rounds.submit_score(rounds.now(), "alice".into(), 10, &old_word),
        Err(DomainError::WordMismatch)
    );

    game.at(215);
    assert_eq!(rounds.get_scores(rounds.now()), Ok(Vec::new()));
}

#[test]
fn test_racing_rotation_keeps_only_current_word_scores() {
    let game = test_game(&["alpha", "beta"]);
    game.start_round();
    let rounds = Arc::clone(&game.state.rounds);

    let submitter = {
        let rounds = Arc::clone(&rounds);
        thread::spawn(move || {
            for i in 0..200 {
                let word = if i % 2 == 0 { "alpha" } else { "beta" };
                let _ = rounds.submit_score(rounds.now(), format!("{word}-{i}"), i, word);
            }
        })
    };
    let rotator = {
        let rounds = Arc::clone(&rounds);
        thread::spawn(move || {
            for _ in 0..20 {
                rounds.start_new_round(rounds.now());
            }
        })
    };
    submitter.join().unwrap();
    rotator.join().unwrap();

    assert_eq!(rounds.rounds_started(), 21);
    let current = rounds.fetch_word(rounds.now()).unwrap().word;
    game.at(95);
    let scores = rounds.get_scores(rounds.now()).unwrap();
    // Player names carry the word they submitted with.
    assert!(scores
        .iter()
        .all(|entry| entry.player_name.starts_with(&format!("{current}-"))));
}
