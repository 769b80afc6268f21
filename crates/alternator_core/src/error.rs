//! Ошибки alternator'а
//!
//! Все ошибки локальные: world-level операции возвращают их как `Result`,
//! command wrappers логируют и глотают. Через границу хоста ничего не паникует.

use bevy::prelude::Entity;
use thiserror::Error;

/// Какая из двух visual ссылок отсутствует
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingVisual {
    Primary,
    Shifted,
    Both,
}

impl MissingVisual {
    /// `None` если обе ссылки на месте
    pub fn detect(primary_ok: bool, shifted_ok: bool) -> Option<Self> {
        match (primary_ok, shifted_ok) {
            (true, true) => None,
            (false, true) => Some(MissingVisual::Primary),
            (true, false) => Some(MissingVisual::Shifted),
            (false, false) => Some(MissingVisual::Both),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MissingVisual::Primary => "arrow",
            MissingVisual::Shifted => "arrow-shifted",
            MissingVisual::Both => "arrow + arrow-shifted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlternatorError {
    /// Visual ссылка не задана (или не указывает на IndicatorVisual) на момент initialize
    #[error("Missing {} reference on alternator {entity:?}", .missing.as_str())]
    MissingReference { entity: Entity, missing: MissingVisual },

    /// arrow и arrow-shifted указывают на один entity — complementary пара невозможна
    #[error("Alternator {entity:?} uses {visual:?} as both arrow and arrow-shifted")]
    SharedVisual { entity: Entity, visual: Entity },

    /// AlternatorPlugin не добавлен (нет AlternatorRegistry в World)
    #[error("AlternatorRegistry is missing, add AlternatorPlugin first")]
    RegistryMissing,

    /// Instance выключен после MissingReference/SharedVisual и больше не реагирует
    #[error("Alternator {0:?} is disabled")]
    Disabled(Entity),

    /// На entity нет компонента Alternator (despawned или никогда не было)
    #[error("Entity {0:?} has no Alternator component")]
    NotAnAlternator(Entity),
}
