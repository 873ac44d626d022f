//! Headless judgment-engine throughput bench.
//!
//! Scripts a full match on two tracks at a fixed tick rate, with a
//! near-perfect synthetic player pressing and releasing every note, and
//! reports wall time per simulated tick.

use std::time::Instant;

use wirebeat::config::{Config, GameSettings, TrackConfig, TrackSettings};
use wirebeat::game::schedule::ScheduleSet;
use wirebeat::{InputEdge, KeyId, MatchState, Note, NullPresenter};

const TICK_RATE: f32 = 240.0;
const NOTES_PER_TRACK: usize = 2_000;
const NOTE_DURATION: f32 = 0.4;
const NOTE_GAP: f32 = 0.2;

fn make_notes() -> Vec<Note> {
    (0..NOTES_PER_TRACK)
        .map(|i| Note {
            start_time: 0.5 + i as f32 * (NOTE_DURATION + NOTE_GAP),
            duration: NOTE_DURATION,
        })
        .collect()
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let mut schedules = ScheduleSet::new();
    schedules.insert("left", make_notes());
    schedules.insert("right", make_notes());

    let track = |track_key: &str, key: KeyId| TrackConfig {
        track_key: track_key.to_string(),
        settings: TrackSettings { key, threshold: 0.1, offset: 0.0, ..TrackSettings::default() },
    };
    let config = Config {
        game: GameSettings::default(),
        tracks: vec![track("left", KeyId::Letter('f')), track("right", KeyId::Letter('j'))],
    };

    let mut state = MatchState::new(&schedules, config).expect("schedules registered above");
    let mut presenter = NullPresenter;

    // Precomputed (time, edge) script: press just after each start,
    // release just before each end, on both tracks.
    let mut script: Vec<(f32, InputEdge)> = Vec::with_capacity(NOTES_PER_TRACK * 4);
    for (key, notes) in [(KeyId::Letter('f'), make_notes()), (KeyId::Letter('j'), make_notes())] {
        for note in notes {
            script.push((note.start_time + 0.005, InputEdge { key, pressed: true }));
            script.push((note.end_time() - 0.005, InputEdge { key, pressed: false }));
        }
    }
    script.sort_by(|a, b| a.0.total_cmp(&b.0));

    let dt = 1.0 / TICK_RATE;
    let mut clock = 0.0_f32;
    let mut ticks = 0_u64;
    let mut next_edge = 0;

    let start = Instant::now();
    while state.outcome().is_none() {
        clock += dt;
        while next_edge < script.len() && script[next_edge].0 <= clock {
            state.queue_input(script[next_edge].1);
            next_edge += 1;
        }
        state.update(dt, &mut presenter);
        ticks += 1;
    }
    let wall = start.elapsed();

    let outcome = state.outcome().expect("loop exits on an outcome");
    let samples = state.aggregator().len();
    let average = state.aggregator().average();
    println!("outcome:   {outcome:?}");
    println!("samples:   {samples} (avg accuracy {average:.4})");
    println!("sim time:  {:.1}s in {ticks} ticks", ticks as f32 * dt);
    println!("wall time: {:.3}s", wall.as_secs_f64());
    println!("per tick:  {:.0}ns", wall.as_nanos() as f64 / ticks as f64);
}
