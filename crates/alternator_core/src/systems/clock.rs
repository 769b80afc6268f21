//! Shared clock systems
//!
//! Порядок в кадре (Update):
//! 1. leader = первый живой member registry → его switch_interval
//! 2. SharedClock::advance(delta) — ровно один раз за кадр
//! 3. при flip: reverse pass по members → apply_phase, невалидные → prune
//!
//! Все follower'ы видят новую phase в том же кадре.

use bevy::ecs::system::SystemState;
use bevy::prelude::*;

use crate::components::{Alternator, IndicatorVisual};
use crate::logger;
use crate::registry::{AlternatorPhase, AlternatorRegistry};
use crate::systems::events::AlternatorFlipped;

/// Показать phase на visuals одного alternator'а.
///
/// Ровно один visual active, второй inactive. Если ссылка отсутствует/stale
/// (или обе ссылки на один entity) — ничего не меняем, возвращаем false.
pub fn apply_phase(
    alternator: &Alternator,
    phase: AlternatorPhase,
    visuals: &mut Query<&mut IndicatorVisual>,
) -> bool {
    if alternator.is_disabled() {
        return false;
    }
    let Some((primary, shifted)) = alternator.visuals() else {
        return false;
    };
    let Ok([mut primary_visual, mut shifted_visual]) = visuals.get_many_mut([primary, shifted]) else {
        return false;
    };

    // set_if_neq: не дёргаем Changed<IndicatorVisual> без нужды
    primary_visual.set_if_neq(IndicatorVisual::new(phase.shows_primary()));
    shifted_visual.set_if_neq(IndicatorVisual::new(!phase.shows_primary()));
    true
}

/// Один шаг shared clock'а (общий код для system и world entry point)
fn step_shared_clock(
    delta: f32,
    registry: &mut AlternatorRegistry,
    alternators: &Query<&Alternator>,
    visuals: &mut Query<&mut IndicatorVisual>,
    flipped_events: &mut EventWriter<AlternatorFlipped>,
) -> Option<AlternatorPhase> {
    // Leader — первый member у которого ещё есть Alternator
    let interval = registry
        .members()
        .iter()
        .find_map(|member| alternators.get(*member).ok())
        .map(Alternator::switch_interval)?;

    let phase = registry.advance(delta, interval)?;

    // Reverse pass: невалидные не прерывают обновление остальных
    let mut stale = Vec::new();
    for &member in registry.members().iter().rev() {
        let applied = alternators
            .get(member)
            .is_ok_and(|alternator| apply_phase(alternator, phase, visuals));
        if !applied {
            stale.push(member);
        }
    }

    if !stale.is_empty() {
        logger::log(&format!("Alternator registry: pruned {} stale instance(s)", stale.len()));
    }
    registry.prune(&stale);

    flipped_events.write(AlternatorFlipped {
        phase,
        members: registry.len(),
    });
    logger::log(&format!(
        "Alternator flip → {:?} ({} instance(s))",
        phase,
        registry.len()
    ));

    Some(phase)
}

/// System: продвинуть shared clock на delta кадра (Update)
///
/// Registry сам владеет clock'ом — instance'ы его не тикают, поэтому
/// N активных instance'ов не ускоряют таймер в N раз.
pub fn drive_shared_clock(
    time: Res<Time>,
    mut registry: ResMut<AlternatorRegistry>,
    alternators: Query<&Alternator>,
    mut visuals: Query<&mut IndicatorVisual>,
    mut flipped_events: EventWriter<AlternatorFlipped>,
) {
    if registry.is_empty() {
        return;
    }

    step_shared_clock(
        time.delta_secs(),
        &mut registry,
        &alternators,
        &mut visuals,
        &mut flipped_events,
    );
}

/// Exclusive entry point: продвинуть clock на явный delta.
///
/// Для хостов со своим frame clock'ом и для тестов. Возвращает новую phase при flip.
/// Без AlternatorPlugin (нет registry или event'а) — no-op, None.
pub fn advance_alternators(world: &mut World, delta: f32) -> Option<AlternatorPhase> {
    if !world.contains_resource::<AlternatorRegistry>()
        || !world.contains_resource::<Events<AlternatorFlipped>>()
    {
        return None;
    }

    let mut state: SystemState<(
        ResMut<AlternatorRegistry>,
        Query<&Alternator>,
        Query<&mut IndicatorVisual>,
        EventWriter<AlternatorFlipped>,
    )> = SystemState::new(world);
    let (mut registry, alternators, mut visuals, mut flipped_events) = state.get_mut(world);

    let flipped = step_shared_clock(
        delta,
        &mut registry,
        &alternators,
        &mut visuals,
        &mut flipped_events,
    );

    state.apply(world);
    flipped
}

/// Exclusive: показать phase на одном alternator'е (используется при activate)
pub(crate) fn apply_phase_in_world(world: &mut World, entity: Entity, phase: AlternatorPhase) -> bool {
    let mut state: SystemState<(Query<&Alternator>, Query<&mut IndicatorVisual>)> = SystemState::new(world);
    let (alternators, mut visuals) = state.get_mut(world);

    alternators
        .get(entity)
        .is_ok_and(|alternator| apply_phase(alternator, phase, &mut visuals))
}
