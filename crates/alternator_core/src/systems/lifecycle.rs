//! Alternator lifecycle: initialize / activate / deactivate / dispose
//!
//! Хост решает КОГДА (spawn, enable, disable, despawn), здесь только ЧТО.
//! - world-level функции (`&mut World`) возвращают `Result`
//! - `AlternatorCommandsExt` — то же самое через Commands из обычных систем
//!   (ошибки логируются, не паникуем)
//! - dispose = despawn или remove::<Alternator>() → observer убирает из registry

use bevy::prelude::*;

use crate::components::{Alternator, IndicatorVisual};
use crate::config::FrameRates;
use crate::error::AlternatorError;
use crate::logger;
use crate::registry::AlternatorRegistry;
use crate::systems::clock::apply_phase_in_world;

/// Initialize alternator'а на entity (idempotent).
///
/// Frame rates берутся из ресурса `FrameRates` (default если не вставлен).
/// При отсутствующей ссылке instance выключается навсегда.
pub fn initialize_alternator(world: &mut World, entity: Entity) -> Result<(), AlternatorError> {
    let rates = world.get_resource::<FrameRates>().copied().unwrap_or_default();

    let mut alternator = world
        .get::<Alternator>(entity)
        .cloned()
        .ok_or(AlternatorError::NotAnAlternator(entity))?;

    if alternator.is_initialized() {
        return Ok(());
    }

    let result = alternator.initialize(entity, &rates, |visual| {
        world.get::<IndicatorVisual>(visual).is_some()
    });

    // Пишем обратно и при ошибке: disabled флаг должен сохраниться
    if let Some(mut slot) = world.get_mut::<Alternator>(entity) {
        *slot = alternator;
    }

    result
}

/// Activate: initialize → register → сразу показать текущую shared phase.
///
/// Disabled instance в registry не попадает. Без AlternatorPlugin → RegistryMissing.
pub fn activate_alternator(world: &mut World, entity: Entity) -> Result<(), AlternatorError> {
    if !world.contains_resource::<AlternatorRegistry>() {
        return Err(AlternatorError::RegistryMissing);
    }
    initialize_alternator(world, entity)?;

    let phase = {
        let mut registry = world.resource_mut::<AlternatorRegistry>();
        if registry.register(entity) {
            logger::log(&format!(
                "Alternator {:?} activated ({} active)",
                entity,
                registry.len()
            ));
        }
        registry.phase()
    };

    // Stale visual здесь не ошибка — instance уйдёт на ближайшем flip pass'е
    apply_phase_in_world(world, entity, phase);
    Ok(())
}

/// Deactivate: убрать из registry. Безопасно если не был активен.
///
/// Возвращает true если instance был в registry.
pub fn deactivate_alternator(world: &mut World, entity: Entity) -> bool {
    let Some(mut registry) = world.get_resource_mut::<AlternatorRegistry>() else {
        return false;
    };

    let removed = registry.unregister(entity);
    if removed {
        logger::log(&format!(
            "Alternator {:?} deactivated ({} active)",
            entity,
            registry.len()
        ));
    }
    removed
}

/// Сменить интервал instance'а. Disabled instance игнорирует вызов.
pub fn set_switch_interval(world: &mut World, entity: Entity, value: f32) -> Result<f32, AlternatorError> {
    let mut alternator = world
        .get_mut::<Alternator>(entity)
        .ok_or(AlternatorError::NotAnAlternator(entity))?;

    if alternator.is_disabled() {
        return Err(AlternatorError::Disabled(entity));
    }

    Ok(alternator.set_switch_interval(value))
}

/// Observer: Alternator удалён (despawn / remove) → dispose
pub fn unregister_on_remove(
    trigger: Trigger<OnRemove, Alternator>,
    registry: Option<ResMut<AlternatorRegistry>>,
) {
    if let Some(mut registry) = registry {
        registry.unregister(trigger.target());
    }
}

fn report(result: Result<(), AlternatorError>) {
    match result {
        Ok(()) => {}
        // MissingReference / SharedVisual уже залогированы в initialize
        Err(AlternatorError::MissingReference { .. } | AlternatorError::SharedVisual { .. }) => {}
        Err(error @ AlternatorError::Disabled(_)) => logger::log(&error.to_string()),
        Err(error) => logger::log_warning(&error.to_string()),
    }
}

/// Lifecycle через Commands (для обычных систем хоста)
pub trait AlternatorCommandsExt {
    fn activate_alternator(&mut self) -> &mut Self;
    fn deactivate_alternator(&mut self) -> &mut Self;
    fn set_switch_interval(&mut self, value: f32) -> &mut Self;
}

impl AlternatorCommandsExt for EntityCommands<'_> {
    fn activate_alternator(&mut self) -> &mut Self {
        let entity = self.id();
        self.commands()
            .queue(move |world: &mut World| report(activate_alternator(world, entity)));
        self
    }

    fn deactivate_alternator(&mut self) -> &mut Self {
        let entity = self.id();
        self.commands().queue(move |world: &mut World| {
            deactivate_alternator(world, entity);
        });
        self
    }

    fn set_switch_interval(&mut self, value: f32) -> &mut Self {
        let entity = self.id();
        self.commands().queue(move |world: &mut World| {
            report(set_switch_interval(world, entity, value).map(|_| ()));
        });
        self
    }
}
