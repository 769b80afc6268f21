//! Alternator events

use bevy::prelude::*;

use crate::registry::AlternatorPhase;

/// Событие: shared phase переключилась
///
/// Пишется один раз на flip (не на каждый instance).
/// Хост может повесить звук/анимацию без polling'а registry.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct AlternatorFlipped {
    /// Новая phase
    pub phase: AlternatorPhase,
    /// Сколько instance'ов осталось в registry после pruning
    pub members: usize,
}
