//! Headless demo alternator'а
//!
//! Спавнит несколько индикаторов, гоняет App с фиксированным delta кадра
//! и печатает каждый flip shared phase.

use std::time::Duration;

use alternator_core::systems::drive_shared_clock;
use alternator_core::{
    activate_alternator, create_headless_app, logger, Alternator, AlternatorFlipped,
    AlternatorRegistry, FrameRates, IndicatorVisual,
};
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

const INDICATOR_COUNT: usize = 3;
const FRAMES: u32 = 240;

fn print_flips(mut events: EventReader<AlternatorFlipped>, time: Res<Time>) {
    for event in events.read() {
        println!(
            "t={:.3}s flip → {:?} ({} indicator(s))",
            time.elapsed_secs(),
            event.phase,
            event.members
        );
    }
}

fn main() {
    let frame_rates = FrameRates::with_target(60.0);
    println!(
        "Starting alternator demo ({} indicators, {:.1} fps target)",
        INDICATOR_COUNT,
        frame_rates.effective_rate()
    );

    let mut app = create_headless_app(frame_rates);
    logger::set_log_level(logger::LogLevel::Info);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(
        1.0 / frame_rates.effective_rate(),
    )))
    .add_systems(Update, print_flips.after(drive_shared_clock));

    for _ in 0..INDICATOR_COUNT {
        let world = app.world_mut();
        let primary = world.spawn(IndicatorVisual::default()).id();
        let shifted = world.spawn(IndicatorVisual::default()).id();
        let alternator = world.spawn(Alternator::new(primary, shifted)).id();
        if let Err(error) = activate_alternator(world, alternator) {
            logger::log_error(&error.to_string());
        }
    }

    for frame in 0..FRAMES {
        app.update();

        if frame == FRAMES / 2 {
            // Половина прогона: ускоряем мигание через leader'а
            let leader = app.world().resource::<AlternatorRegistry>().leader();
            if let Some(leader) = leader {
                if let Err(error) = alternator_core::set_switch_interval(app.world_mut(), leader, 0.25) {
                    logger::log_error(&error.to_string());
                }
            }
        }
    }

    let snapshot = app.world().resource::<AlternatorRegistry>().snapshot();
    println!(
        "Demo complete! phase={:?} elapsed={:.3}s",
        snapshot.phase, snapshot.elapsed
    );
}
