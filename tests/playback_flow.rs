//! Drives the playback controller the way the UI does.

use sortviz::config::{MAX_ARRAY_SIZE, MIN_ARRAY_SIZE};
use sortviz::playback::speed::{MAX_SPEED, MIN_SPEED};
use sortviz::view::{compose_screen, frame_line};
use sortviz::{Algorithm, Command, PlaybackController, PlaybackState, VizConfig};

fn seeded(algorithm: Algorithm, size: usize) -> PlaybackController {
    let config = VizConfig {
        algorithm,
        array_size: size,
        seed: Some(2024),
        ..Default::default()
    };
    PlaybackController::new(&config).unwrap()
}

#[test]
fn test_full_playback_for_every_algorithm() {
    for algorithm in Algorithm::ALL {
        let mut ctl = seeded(algorithm, 20);
        let mut expected = ctl.array().to_vec();
        expected.sort_unstable();

        ctl.apply(Command::TogglePlay).unwrap();
        let mut ticks = 0;
        while ctl.tick() {
            ticks += 1;
        }

        assert_eq!(ctl.state(), PlaybackState::Done, "{:?}", algorithm);
        assert_eq!(ctl.current_frame().array(), expected.as_slice());
        assert_eq!(ticks, ctl.trace().unwrap().last_index());
    }
}

#[test]
fn test_seeded_controllers_agree() {
    let a = seeded(Algorithm::Merge, 30);
    let b = seeded(Algorithm::Merge, 30);
    assert_eq!(a.array(), b.array());
}

#[test]
fn test_step_counter_saturates() {
    let mut ctl = PlaybackController::with_array(Algorithm::Insertion, vec![4, 3, 2, 1]);
    for _ in 0..1000 {
        ctl.step_forward();
    }
    let last = ctl.trace().unwrap().last_index();
    assert_eq!(ctl.current_step(), last);
    assert_eq!(ctl.progress_label(), format!("Step: {} / {}", last, last));
    assert!(ctl.is_done());
}

#[test]
fn test_pause_resume_keeps_position() {
    let mut ctl = seeded(Algorithm::Quick, 10);
    ctl.start().unwrap();
    ctl.tick();
    ctl.tick();
    ctl.apply(Command::TogglePlay).unwrap();
    assert_eq!(ctl.state(), PlaybackState::Stopped);
    assert_eq!(ctl.current_step(), 2);

    ctl.apply(Command::TogglePlay).unwrap();
    ctl.tick();
    assert_eq!(ctl.current_step(), 3);
}

#[test]
fn test_algorithm_switch_restarts_from_input() {
    let mut ctl = seeded(Algorithm::Bubble, 10);
    let input = ctl.array().to_vec();
    ctl.step_forward();
    ctl.step_forward();

    ctl.apply(Command::NextAlgorithm).unwrap();
    assert_eq!(ctl.algorithm(), Algorithm::Insertion);
    assert_eq!(ctl.current_step(), 0);
    assert!(!ctl.has_trace());
    assert_eq!(ctl.array(), input.as_slice());

    ctl.apply(Command::PreviousAlgorithm).unwrap();
    ctl.apply(Command::PreviousAlgorithm).unwrap();
    assert_eq!(ctl.algorithm(), Algorithm::Quick);
}

#[test]
fn test_start_after_done_draws_new_array() {
    let mut ctl = seeded(Algorithm::Selection, 8);
    while ctl.step_forward() {}
    assert!(ctl.is_done());

    // The UI keeps Start disabled here, the direct call regenerates.
    assert!(!ctl.apply(Command::TogglePlay).unwrap());
    ctl.start().unwrap();
    assert!(ctl.is_playing());
    assert_eq!(ctl.current_step(), 0);
    assert_eq!(ctl.array().len(), 8);
}

#[test]
fn test_size_controls_clamp() {
    let mut ctl = seeded(Algorithm::Bubble, MIN_ARRAY_SIZE);
    assert!(!ctl.apply(Command::ShrinkArray).unwrap());
    assert_eq!(ctl.array_size(), MIN_ARRAY_SIZE);

    ctl.set_array_size(MAX_ARRAY_SIZE).unwrap();
    ctl.step_forward();
    let input = ctl.array().to_vec();
    assert!(!ctl.apply(Command::GrowArray).unwrap());
    assert_eq!(ctl.array(), input.as_slice());
    assert_eq!(ctl.current_step(), 1);
}

#[test]
fn test_speed_controls_clamp() {
    let mut ctl = seeded(Algorithm::Bubble, 5);
    for _ in 0..100 {
        ctl.apply(Command::Faster).unwrap();
    }
    assert_eq!(ctl.speed().position(), MAX_SPEED);
    for _ in 0..100 {
        ctl.apply(Command::Slower).unwrap();
    }
    assert_eq!(ctl.speed().position(), MIN_SPEED);
}

#[test]
fn test_screen_tracks_playback() {
    let palette = sortviz::theme::Palette::default();
    let mut ctl = seeded(Algorithm::Merge, 12);

    let before = compose_screen(&ctl, &palette, 100, 30);
    ctl.step_forward();
    let after = compose_screen(&ctl, &palette, 100, 30);

    assert_ne!(before, after);
    assert!(after.row_text(27).contains("Step: 1 /"));
}

#[test]
fn test_frame_lines_cover_trace() {
    let mut ctl = PlaybackController::with_array(Algorithm::Quick, vec![3, 1, 2]);
    let trace = ctl.ensure_trace();
    let lines: Vec<String> = (0..trace.len())
        .map(|i| frame_line(i, &trace.frame_at(i, ctl.array())))
        .collect();

    assert_eq!(lines[0], "#0 [3, 1, 2] comparing=[] swapping=[] sorted=[] pivot=-");
    assert!(lines.last().unwrap().contains("[1, 2, 3]"));
}
