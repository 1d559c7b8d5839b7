use std::time::Duration;

use quiz_core::{
    AnswerOutcome, ArcTable, Atlas, Control, Coordinate, CountryRegion, Feedback, GuessOutcome,
    Phase, QuizMode, SessionError, ShapeKind, SubmitOutcome,
};
use runtime::{Event, QuizEvent, RetargetCause, Runtime, RuntimeError, Topic};

/// Five single-point countries; each centroid is its only point.
fn atlas() -> Atlas {
    let countries = [
        ("Chile", [-71.0, -35.0]),
        ("Japan", [138.0, 36.0]),
        ("Kenya", [38.0, 0.0]),
        ("Norway", [9.0, 61.0]),
        ("Peru", [-76.0, -10.0]),
    ];
    let regions = countries
        .iter()
        .enumerate()
        .map(|(i, (name, _))| CountryRegion::new(*name, ShapeKind::Polygon, vec![vec![i as i64]]))
        .collect();
    let arcs = countries.iter().map(|(_, point)| vec![*point]).collect();
    Atlas::new(regions, ArcTable::new(arcs))
}

async fn next_quiz_event(rx: &mut tokio::sync::broadcast::Receiver<Event>) -> QuizEvent {
    match rx.recv().await.expect("quiz event") {
        Event::Quiz(event) => event,
        other => panic!("expected quiz event, got {other:?}"),
    }
}

/// Exhaustive session from first guess to completion.
#[tokio::test]
async fn exhaustive_session_runs_to_completion() {
    let runtime = Runtime::builder()
        .atlas(atlas())
        .mode(QuizMode::Exhaustive)
        .build()
        .await
        .expect("runtime should start");
    let handle = runtime.handle();
    let mut quiz_rx = handle.subscribe(Topic::Quiz);

    // ================================================================
    // Session starts active with nothing named
    // ================================================================
    let snapshot = handle.query_snapshot().await.unwrap();
    assert_eq!(snapshot.phase, Phase::Active);
    assert_eq!((snapshot.score, snapshot.total), (0, 5));
    assert!(snapshot.target.is_none());
    assert_eq!(handle.requested_view().orientation, Coordinate::ORIGIN);

    // ================================================================
    // Correct guess retargets the view
    // ================================================================
    let outcome = handle.submit_guess("  japan ").await.unwrap();
    assert!(outcome.is_correct());
    match next_quiz_event(&mut quiz_rx).await {
        QuizEvent::GuessAccepted { name, snapshot } => {
            assert_eq!(name, "Japan");
            assert_eq!(snapshot.score, 1);
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert_eq!(
        handle.requested_view().orientation,
        Coordinate::new(36.0, 138.0)
    );

    // ================================================================
    // Rejections keep score and view untouched
    // ================================================================
    let outcome = handle.submit_guess("JAPAN").await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Guess(GuessOutcome::AlreadyGuessed));
    match next_quiz_event(&mut quiz_rx).await {
        QuizEvent::GuessRejected { feedback, .. } => {
            assert_eq!(feedback, Feedback::AlreadyGuessed)
        }
        other => panic!("unexpected event {other:?}"),
    }

    let outcome = handle.submit_guess("Atlantis").await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Guess(GuessOutcome::Unknown));
    match next_quiz_event(&mut quiz_rx).await {
        QuizEvent::GuessRejected { snapshot, .. } => assert_eq!(snapshot.input, "Atlantis"),
        other => panic!("unexpected event {other:?}"),
    }
    assert_eq!(handle.query_snapshot().await.unwrap().input, "Atlantis");

    let err = handle.submit_guess("   ").await.unwrap_err();
    assert!(matches!(
        err.as_session(),
        Some(SessionError::InvalidGuess)
    ));

    let snapshot = handle.query_snapshot().await.unwrap();
    assert_eq!(snapshot.score, 1);
    assert_eq!(snapshot.history, vec!["Japan".to_string()]);

    // ================================================================
    // Naming the rest finishes the session
    // ================================================================
    for name in ["chile", "kenya", "norway", "peru"] {
        assert!(handle.submit_guess(name).await.unwrap().is_correct());
    }

    let finished = loop {
        if let QuizEvent::SessionFinished { phase, score, .. } =
            next_quiz_event(&mut quiz_rx).await
        {
            break (phase, score);
        }
    };
    assert_eq!(finished, (Phase::Complete, 5));

    let err = handle.submit_guess("Chile").await.unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Session(SessionError::SessionComplete)
    ));

    drop(quiz_rx);
    drop(handle);
    runtime.shutdown().await.expect("clean shutdown");
}

/// Random session: wrong answers are free, right answers deal the next round,
/// skipping rounds eventually exhausts the pool.
#[tokio::test]
async fn random_session_deals_until_exhausted() {
    let runtime = Runtime::builder()
        .atlas(atlas())
        .mode(QuizMode::Random)
        .seed(7)
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();
    let mut quiz_rx = handle.subscribe(Topic::Quiz);

    let snapshot = handle.query_snapshot().await.unwrap();
    let round = snapshot.round.clone().expect("first round dealt on start");
    assert_eq!(round.options.len(), 4);
    assert!(round.options.contains(&round.correct));
    assert_eq!(snapshot.available, 4);

    let target = snapshot.target.expect("round target");
    assert_eq!(target.name, round.correct);
    assert_eq!(handle.requested_view().orientation, target.coordinate);

    // Wrong option: no score, same round.
    let wrong = round
        .options
        .iter()
        .find(|option| **option != round.correct)
        .unwrap()
        .clone();
    assert_eq!(
        handle.choose_option(wrong).await.unwrap(),
        AnswerOutcome::Incorrect
    );
    match next_quiz_event(&mut quiz_rx).await {
        QuizEvent::GuessRejected { feedback, snapshot } => {
            assert_eq!(feedback, Feedback::TryAgain);
            assert_eq!(snapshot.round.as_ref(), Some(&round));
        }
        other => panic!("unexpected event {other:?}"),
    }

    // Right option: scored, next round dealt, view follows.
    let outcome = handle.choose_option(round.correct.clone()).await.unwrap();
    assert!(matches!(
        outcome,
        AnswerOutcome::Correct {
            exhausted: false,
            ..
        }
    ));
    assert!(matches!(
        next_quiz_event(&mut quiz_rx).await,
        QuizEvent::GuessAccepted { .. }
    ));
    let dealt = match next_quiz_event(&mut quiz_rx).await {
        QuizEvent::RoundDealt { round, snapshot } => {
            assert_eq!(snapshot.score, 1);
            round
        }
        other => panic!("unexpected event {other:?}"),
    };
    assert_eq!(dealt.number, round.number + 1);
    let snapshot = handle.query_snapshot().await.unwrap();
    assert_eq!(
        handle.requested_view().orientation,
        snapshot.target.unwrap().coordinate
    );

    // Three regions left in the pool: three skips, then exhaustion.
    for _ in 0..3 {
        handle.next_round().await.unwrap();
    }
    let err = handle.next_round().await.unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Session(SessionError::ExhaustedPool)
    ));

    let finished = loop {
        if let QuizEvent::SessionFinished { phase, score, .. } =
            next_quiz_event(&mut quiz_rx).await
        {
            break (phase, score);
        }
    };
    assert_eq!(finished, (Phase::Exhausted, 1));

    let snapshot = handle.query_snapshot().await.unwrap();
    assert!(snapshot.is_finished());
    assert!(snapshot.round.is_none());
}

#[tokio::test]
async fn equal_seeds_deal_equal_rounds() {
    let mut dealt = Vec::new();
    for _ in 0..2 {
        let runtime = Runtime::builder()
            .atlas(atlas())
            .mode(QuizMode::Random)
            .seed(42)
            .build()
            .await
            .unwrap();
        let snapshot = runtime.handle().query_snapshot().await.unwrap();
        dealt.push(snapshot.round);
    }
    assert_eq!(dealt[0], dealt[1]);
}

#[tokio::test]
async fn mode_specific_commands_are_rejected() {
    let runtime = Runtime::builder().atlas(atlas()).build().await.unwrap();
    let handle = runtime.handle();

    let err = handle.next_round().await.unwrap_err();
    assert!(matches!(
        err.as_session(),
        Some(SessionError::NoActiveRound)
    ));
    assert!(handle.choose_option("Chile").await.is_err());
}

#[tokio::test]
async fn builder_requires_a_valid_atlas() {
    let err = Runtime::builder().build().await.err().expect("no atlas");
    assert!(matches!(err, RuntimeError::MissingAtlas));

    let dangling = Atlas::new(
        vec![CountryRegion::new(
            "Ghost",
            ShapeKind::Polygon,
            vec![vec![3]],
        )],
        ArcTable::new(vec![vec![[0.0, 0.0]]]),
    );
    let err = Runtime::builder()
        .atlas(dangling)
        .build()
        .await
        .err()
        .expect("dangling arc");
    assert!(matches!(err, RuntimeError::InvalidAtlas(_)));
    assert!(!err.severity().is_recoverable());
}

/// Holding a control repeats it every period until released.
#[tokio::test(start_paused = true)]
async fn held_control_repeats_until_released() {
    let runtime = Runtime::builder().atlas(atlas()).build().await.unwrap();
    let handle = runtime.handle();
    let mut view_rx = handle.subscribe(Topic::View);

    let view = handle.press_control(Control::RotateEast).await.unwrap();
    assert_eq!(view.orientation.longitude, 10.0);
    match view_rx.recv().await.unwrap() {
        Event::View(event) => {
            assert_eq!(event.cause, RetargetCause::Control(Control::RotateEast));
            assert_eq!(event.view, view);
        }
        other => panic!("unexpected event {other:?}"),
    }

    tokio::time::sleep(Duration::from_millis(350)).await;
    assert_eq!(handle.requested_view().orientation.longitude, 40.0);

    handle.release_control().await.unwrap();
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(handle.requested_view().orientation.longitude, 40.0);

    // Latitude clamps at the pole.
    handle.press_control(Control::TiltNorth).await.unwrap();
    tokio::time::sleep(Duration::from_millis(1_050)).await;
    handle.release_control().await.unwrap();
    assert_eq!(handle.requested_view().orientation.latitude, 90.0);
}

/// The mounted view animates onto the random-mode target.
#[tokio::test(start_paused = true)]
async fn mounted_view_settles_on_target() {
    let runtime = Runtime::builder()
        .atlas(atlas())
        .mode(QuizMode::Random)
        .seed(3)
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();
    let target = handle
        .query_snapshot()
        .await
        .unwrap()
        .target
        .expect("round target");

    let mut view = handle.mount_view();
    let frame = loop {
        let frame = view.changed().await.expect("animation running");
        if frame.settled {
            break frame;
        }
    };
    assert_eq!(frame.orientation, target.coordinate);
    assert_eq!(view.current(), frame);
}
