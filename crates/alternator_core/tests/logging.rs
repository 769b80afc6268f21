//! Log lines which host tools rely on: error on a broken indicator,
//! info on interval change. Global logger → один test на binary.

use alternator_core::logger::{self, LogLevel, MemoryLogger};
use alternator_core::*;
use bevy::prelude::*;

fn messages(memory: &MemoryLogger, level: LogLevel) -> Vec<String> {
    memory
        .lines()
        .into_iter()
        .filter(|(l, _)| *l == level)
        .map(|(_, message)| message)
        .collect()
}

#[test]
fn test_error_and_interval_lines_reach_printer() {
    let memory = MemoryLogger::new();
    logger::set_logger(Box::new(memory.clone()));
    logger::set_log_level(LogLevel::Info);

    let mut app = App::new();
    app.add_plugins(AlternatorPlugin::with_frame_rates(FrameRates::with_target(60.0)));
    let world = app.world_mut();

    // Нет arrow-shifted → одна error строка, instance выключен
    let lonely = world.spawn(IndicatorVisual::default()).id();
    let broken = world.spawn(Alternator::from_references(Some(lonely), None)).id();
    assert!(activate_alternator(world, broken).is_err());

    let errors = messages(&memory, LogLevel::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("arrow-shifted"));
    assert!(errors[0].contains(&format!("{:?}", broken)));

    // Debug строки (activate) отфильтрованы уровнем Info
    let primary = world.spawn(IndicatorVisual::default()).id();
    let shifted = world.spawn(IndicatorVisual::default()).id();
    let good = world.spawn(Alternator::new(primary, shifted)).id();
    activate_alternator(world, good).unwrap();
    assert_eq!(memory.count(LogLevel::Debug), 0);
    assert_eq!(memory.count(LogLevel::Info), 0);

    assert_eq!(set_switch_interval(world, good, 0.3), Ok(0.3));

    let infos = messages(&memory, LogLevel::Info);
    assert_eq!(infos.len(), 1);
    assert!(infos[0].contains("Switch interval set to: 0.3s"));
    assert!(infos[0].starts_with('['), "timestamp prefix expected: {}", infos[0]);

    // Disabled instance → Err, info строки не добавляется
    assert_eq!(set_switch_interval(world, broken, 2.0), Err(AlternatorError::Disabled(broken)));
    assert_eq!(memory.count(LogLevel::Info), 1);
}
