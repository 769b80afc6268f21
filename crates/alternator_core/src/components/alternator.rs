//! Alternator — один on-screen indicator (пара arrow / arrow-shifted)
//!
//! Компонент хранит только per-instance конфиг. Shared phase и таймер живут
//! в `AlternatorRegistry`, instance их никогда не двигает.

use bevy::prelude::*;

use crate::config::{FrameRates, DEFAULT_SWITCH_INTERVAL};
use crate::error::{AlternatorError, MissingVisual};
use crate::logger;

/// Instance alternator'а
///
/// Инвариант: `switch_interval >= minimum_interval` всегда
/// (до initialize minimum = 0, после — длительность кадра).
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
pub struct Alternator {
    /// Visual показываемый в фазе ShowingPrimary ("arrow")
    primary: Option<Entity>,

    /// Visual показываемый в фазе ShowingShifted ("arrow-shifted")
    shifted: Option<Entity>,

    /// Интервал переключения (секунды). Используется только когда instance — leader.
    switch_interval: f32,

    /// 1 / effective frame rate (секунды), вычисляется в initialize
    minimum_interval: f32,

    initialized: bool,

    /// Выставляется после MissingReference, навсегда
    disabled: bool,
}

impl Alternator {
    pub fn new(primary: Entity, shifted: Entity) -> Self {
        Self::from_references(Some(primary), Some(shifted))
    }

    /// Ссылки могут отсутствовать (хост не проставил) — initialize это поймает
    pub fn from_references(primary: Option<Entity>, shifted: Option<Entity>) -> Self {
        Self {
            primary,
            shifted,
            switch_interval: DEFAULT_SWITCH_INTERVAL,
            minimum_interval: 0.0,
            initialized: false,
            disabled: false,
        }
    }

    /// Builder: начальный интервал (clamp произойдёт в initialize)
    pub fn with_switch_interval(mut self, switch_interval: f32) -> Self {
        self.switch_interval = switch_interval.max(self.minimum_interval);
        self
    }

    /// Вычисляет minimum interval, clamp'ит интервал, валидирует ссылки.
    ///
    /// `is_visual` — резолвер ссылок (существует ли entity с IndicatorVisual).
    /// Повторный вызов после успеха — no-op. После провала instance disabled.
    pub fn initialize(
        &mut self,
        owner: Entity,
        rates: &FrameRates,
        is_visual: impl Fn(Entity) -> bool,
    ) -> Result<(), AlternatorError> {
        if self.initialized {
            return Ok(());
        }
        if self.disabled {
            return Err(AlternatorError::Disabled(owner));
        }

        self.minimum_interval = rates.minimum_interval();
        self.switch_interval = self.switch_interval.max(self.minimum_interval);

        let primary_ok = self.primary.is_some_and(&is_visual);
        let shifted_ok = self.shifted.is_some_and(&is_visual);

        if let Some(missing) = MissingVisual::detect(primary_ok, shifted_ok) {
            self.disabled = true;
            let error = AlternatorError::MissingReference { entity: owner, missing };
            logger::log_error(&format!("{} (instance disabled)", error));
            return Err(error);
        }

        // Один объект не может быть complementary парой сам себе
        if let Some((visual, _)) = self.visuals().filter(|(primary, shifted)| primary == shifted) {
            self.disabled = true;
            let error = AlternatorError::SharedVisual { entity: owner, visual };
            logger::log_error(&format!("{} (instance disabled)", error));
            return Err(error);
        }

        self.initialized = true;
        Ok(())
    }

    /// `max(value, minimum_interval)`. Disabled instance игнорирует вызов.
    ///
    /// Возвращает итоговый интервал.
    pub fn set_switch_interval(&mut self, value: f32) -> f32 {
        if self.disabled {
            logger::log_warning("set_switch_interval ignored: alternator is disabled");
            return self.switch_interval;
        }

        self.switch_interval = value.max(self.minimum_interval);
        logger::log_info(&format!(
            "Switch interval set to: {}s (minimum allowed: {}s)",
            self.switch_interval, self.minimum_interval
        ));
        self.switch_interval
    }

    pub fn minimum_interval(&self) -> f32 {
        self.minimum_interval
    }

    pub fn switch_interval(&self) -> f32 {
        self.switch_interval
    }

    pub fn primary(&self) -> Option<Entity> {
        self.primary
    }

    pub fn shifted(&self) -> Option<Entity> {
        self.shifted
    }

    /// Обе ссылки, если заданы
    pub fn visuals(&self) -> Option<(Entity, Entity)> {
        self.primary.zip(self.shifted)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}
