//! Performance benchmarks for the per-frame game systems

use pong::{
    Ball, Draw, GameConfig, GameState, InputState, Key, Paddle, PlayerId, RecordingCanvas,
    Session, Vector2, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use std::time::Instant;

fn playing_session() -> Session {
    let mut session = Session::new(&GameConfig {
        seed: Some(2024),
        ..GameConfig::default()
    });
    session.update(&InputState::default().with_pointer(600.0, 300.0, true), 0.0);
    session.update(&InputState::default(), 1.0);
    assert_eq!(session.state(), GameState::Playing);
    session
}

/// Benchmarks ball collision resolution against both paddles
#[test]
fn benchmark_ball_update() {
    let screen = Vector2::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    let paddles = [
        Paddle::new(PlayerId::One, screen),
        Paddle::new(PlayerId::Two, screen),
    ];
    let mut ball = Ball::with_velocity(Vector2::new(640.0, 320.0), Vector2::new(500.0, 200.0));

    let iterations = 100_000;
    let start = Instant::now();

    for _ in 0..iterations {
        let _ = ball.update(1.0 / 60.0, screen, &paddles);
        if ball.position.x < 0.0 || ball.position.x > SCREEN_WIDTH {
            ball.position = Vector2::new(640.0, 320.0);
        }
    }

    let duration = start.elapsed();
    println!(
        "Ball update: {} iterations in {:?} ({:.2} ns/iter)",
        iterations,
        duration,
        duration.as_nanos() as f64 / iterations as f64
    );

    // Should complete in under 500ms for 100k iterations, even unoptimized
    assert!(duration.as_millis() < 500);
}

/// Benchmarks full session frames while playing
#[test]
fn benchmark_session_update() {
    let mut session = playing_session();
    let input = InputState::default().with_key(Key::W).with_key(Key::Down);

    let iterations = 100_000;
    let start = Instant::now();

    for _ in 0..iterations {
        session.update(&input, 1.0 / 60.0);
    }

    let duration = start.elapsed();
    println!(
        "Session update: {} frames in {:?} ({:.2} ns/frame)",
        iterations,
        duration,
        duration.as_nanos() as f64 / iterations as f64
    );

    // Should complete in under 2 seconds
    assert!(duration.as_millis() < 2000);
}

/// Benchmarks recording one frame of draw calls
#[test]
fn benchmark_session_draw() {
    let session = playing_session();
    let mut canvas = RecordingCanvas::new();

    let iterations = 10_000;
    let start = Instant::now();

    for _ in 0..iterations {
        canvas.reset();
        session.draw(&mut canvas);
    }

    let duration = start.elapsed();
    println!(
        "Session draw: {} frames in {:?} ({:.2} μs/frame)",
        iterations,
        duration,
        duration.as_micros() as f64 / iterations as f64
    );

    assert!(!canvas.commands.is_empty());
    // Should complete in under 1 second
    assert!(duration.as_millis() < 1000);
}
