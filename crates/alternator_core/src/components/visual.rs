//! IndicatorVisual — active/inactive флаг visual объекта (arrow / arrow-shifted)
//!
//! Хост зеркалит `active` в свой scene graph (SetActive, visible, etc.).
//! Core только переключает флаг, создание/удаление visual'ов — забота хоста.

use bevy::prelude::*;

#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct IndicatorVisual {
    pub active: bool,
}

impl IndicatorVisual {
    pub fn new(active: bool) -> Self {
        Self { active }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
