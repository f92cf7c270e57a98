use std::time::Duration;

use wordgame::RoundScheduler;

use crate::support::test_game;

#[tokio::test(start_paused = true)]
async fn test_scheduler_keeps_a_round_live() {
    let game = test_game(&["python", "rust"]);
    let rounds = game.state.rounds.clone();
    let period = game.state.config.settings.round_period();
    let scheduler = RoundScheduler::start(rounds.clone(), period);

    tokio::time::sleep(Duration::from_millis(1)).await;
    let first = rounds.fetch_word(rounds.now()).unwrap();
    assert!(first.word == "python" || first.word == "rust");

    // The manual clock follows the paused tokio clock by hand.
    game.at(121);
    tokio::time::sleep(Duration::from_secs(121)).await;
    assert_eq!(rounds.rounds_started(), 2);
    let second = rounds.fetch_word(rounds.now()).unwrap();
    assert_eq!(second.end_time, game.clock_time() + time::Duration::seconds(120));

    scheduler.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_scheduler_rotation_clears_scores() {
    let game = test_game(&["python"]);
    let rounds = game.state.rounds.clone();
    let scheduler = RoundScheduler::start(rounds.clone(), Duration::from_secs(120));

    tokio::time::sleep(Duration::from_millis(1)).await;
    rounds
        .submit_score(rounds.now(), "alice".into(), 3, "python")
        .unwrap();

    game.at(120);
    tokio::time::sleep(Duration::from_secs(120)).await;
    assert_eq!(rounds.rounds_started(), 2);

    game.at(215);
    assert_eq!(rounds.get_scores(rounds.now()), Ok(Vec::new()));

    scheduler.shutdown().await;
}
