//! Alternator Registry — shared таймер + phase state machine
//!
//! Один registry на World (Resource), никаких process-wide static'ов:
//! отдельный App = отдельный registry.
//!
//! Clock принадлежит самому registry и двигается ровно один раз за кадр
//! (`systems::clock::drive_shared_clock`), сколько бы instance'ов ни было активно.
//! Instance'ы только наблюдают phase.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Shared phase всех активных alternator'ов
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum AlternatorPhase {
    /// Показан "arrow"
    #[default]
    ShowingPrimary,
    /// Показан "arrow-shifted"
    ShowingShifted,
}

impl AlternatorPhase {
    pub fn flipped(self) -> Self {
        match self {
            AlternatorPhase::ShowingPrimary => AlternatorPhase::ShowingShifted,
            AlternatorPhase::ShowingShifted => AlternatorPhase::ShowingPrimary,
        }
    }

    pub fn shows_primary(self) -> bool {
        matches!(self, AlternatorPhase::ShowingPrimary)
    }
}

/// Снимок clock state (инспекция/сохранение на стороне хоста)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ClockSnapshot {
    pub phase: AlternatorPhase,
    pub elapsed: f32,
}

/// Shared таймер. Единственный владелец — AlternatorRegistry.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SharedClock {
    elapsed: f32,
    phase: AlternatorPhase,
}

impl SharedClock {
    /// Продвинуть таймер на `delta` секунд.
    ///
    /// Если накопленное время >= `interval` — phase flip'ается ровно один раз,
    /// elapsed сохраняет остаток (по модулю interval). Возвращает новую phase при flip.
    pub fn advance(&mut self, delta: f32, interval: f32) -> Option<AlternatorPhase> {
        // Отрицательный/NaN delta от хоста не должен откатывать таймер
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        let interval = interval.max(f32::EPSILON);

        self.elapsed += delta;
        if self.elapsed < interval {
            return None;
        }

        self.elapsed = (self.elapsed - interval) % interval;
        self.phase = self.phase.flipped();
        Some(self.phase)
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn phase(&self) -> AlternatorPhase {
        self.phase
    }
}

/// Registry активных alternator'ов
///
/// `members` упорядочены по времени активации; первый — leader,
/// его switch_interval задаёт период shared clock'а.
#[derive(Resource, Debug, Default)]
pub struct AlternatorRegistry {
    members: Vec<Entity>,
    clock: SharedClock,
}

impl AlternatorRegistry {
    /// Добавить в конец (повторная регистрация — no-op). true если добавлен.
    pub fn register(&mut self, entity: Entity) -> bool {
        if self.members.contains(&entity) {
            return false;
        }
        self.members.push(entity);
        true
    }

    /// Убрать из registry (безопасно если не зарегистрирован). true если был.
    pub fn unregister(&mut self, entity: Entity) -> bool {
        let before = self.members.len();
        self.members.retain(|member| *member != entity);
        self.members.len() != before
    }

    /// Lazy cleanup после flip pass'а
    pub(crate) fn prune(&mut self, invalid: &[Entity]) {
        if invalid.is_empty() {
            return;
        }
        self.members.retain(|member| !invalid.contains(member));
    }

    pub(crate) fn advance(&mut self, delta: f32, interval: f32) -> Option<AlternatorPhase> {
        self.clock.advance(delta, interval)
    }

    pub fn is_active(&self, entity: Entity) -> bool {
        self.members.contains(&entity)
    }

    pub fn members(&self) -> &[Entity] {
        &self.members
    }

    pub fn leader(&self) -> Option<Entity> {
        self.members.first().copied()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn phase(&self) -> AlternatorPhase {
        self.clock.phase()
    }

    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    pub fn snapshot(&self) -> ClockSnapshot {
        ClockSnapshot {
            phase: self.clock.phase(),
            elapsed: self.clock.elapsed(),
        }
    }
}

#[cfg(test)]
mod registry_tests;
