//! Alternator Core
//!
//! Synchronized indicator alternation на Bevy 0.16 ECS:
//! каждый alternator показывает один из двух visual'ов ("arrow" / "arrow-shifted"),
//! все активные instance'ы переключаются одновременно по одному shared таймеру.
//!
//! - Registry (Resource) владеет clock'ом и списком активных instance'ов
//! - Хост владеет visual'ами и lifecycle (spawn/enable/disable/despawn)
//! - Рендер, input, assets — не здесь

use bevy::prelude::*;

pub mod components;
pub mod config;
pub mod error;
pub mod logger;
pub mod registry;
pub mod systems;

// Re-export базовых типов для удобства
pub use components::{Alternator, IndicatorVisual};
pub use config::{FrameRates, DEFAULT_SWITCH_INTERVAL, FALLBACK_REFRESH_RATE};
pub use error::{AlternatorError, MissingVisual};
pub use registry::{AlternatorPhase, AlternatorRegistry, ClockSnapshot, SharedClock};
pub use systems::{
    activate_alternator, advance_alternators, deactivate_alternator, initialize_alternator,
    set_switch_interval, AlternatorCommandsExt, AlternatorFlipped,
};

/// Alternator plugin
///
/// Регистрирует registry, FrameRates, event и dispose observer.
/// `drive_shared_clock` работает в Update — по одному тику на кадр хоста.
#[derive(Default)]
pub struct AlternatorPlugin {
    /// None → FrameRates::default() (если хост не вставил свой ресурс раньше)
    pub frame_rates: Option<FrameRates>,
}

impl AlternatorPlugin {
    pub fn with_frame_rates(frame_rates: FrameRates) -> Self {
        Self {
            frame_rates: Some(frame_rates),
        }
    }
}

impl Plugin for AlternatorPlugin {
    fn build(&self, app: &mut App) {
        match self.frame_rates {
            Some(frame_rates) => {
                app.insert_resource(frame_rates);
            }
            None => {
                app.init_resource::<FrameRates>();
            }
        }

        app.init_resource::<AlternatorRegistry>()
            .add_event::<AlternatorFlipped>()
            .add_observer(systems::unregister_on_remove)
            .add_systems(Update, systems::drive_shared_clock);
    }
}

/// Создаёт minimal Bevy App для headless прогона (demo, тесты)
pub fn create_headless_app(frame_rates: FrameRates) -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins((MinimalPlugins, AlternatorPlugin::with_frame_rates(frame_rates)));

    app
}
