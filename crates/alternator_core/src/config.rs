//! Конфигурация alternator'ов (frame rate injection)
//!
//! Target frame rate и display refresh rate приходят от хоста как ресурс,
//! а не читаются из глобалов движка — так minimum interval тестируется
//! в изоляции.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Интервал переключения по умолчанию (секунды)
pub const DEFAULT_SWITCH_INTERVAL: f32 = 0.5;

/// Последний fallback когда и target, и refresh не заданы (Hz)
pub const FALLBACK_REFRESH_RATE: f32 = 60.0;

/// Frame clock параметры хоста
///
/// `target_frame_rate <= 0` означает "не задан" → используется refresh rate дисплея.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameRates {
    pub target_frame_rate: f32,
    pub display_refresh_rate: f32,
}

impl Default for FrameRates {
    fn default() -> Self {
        Self {
            target_frame_rate: -1.0,
            display_refresh_rate: FALLBACK_REFRESH_RATE,
        }
    }
}

impl FrameRates {
    /// Явный target frame rate (refresh по умолчанию)
    pub fn with_target(target_frame_rate: f32) -> Self {
        Self {
            target_frame_rate,
            ..Default::default()
        }
    }

    /// Частота, от которой считается minimum interval (Hz, всегда > 0)
    pub fn effective_rate(&self) -> f32 {
        [self.target_frame_rate, self.display_refresh_rate]
            .into_iter()
            .find(|rate| rate.is_finite() && *rate > 0.0)
            .unwrap_or(FALLBACK_REFRESH_RATE)
    }

    /// Длительность одного кадра — переключаться чаще бессмысленно
    pub fn minimum_interval(&self) -> f32 {
        1.0 / self.effective_rate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_frame_rate_wins() {
        let rates = FrameRates {
            target_frame_rate: 30.0,
            display_refresh_rate: 144.0,
        };
        assert_eq!(rates.effective_rate(), 30.0);
        assert!((rates.minimum_interval() - 1.0 / 30.0).abs() < 1e-6);
    }

    #[test]
    fn test_unset_target_falls_back_to_refresh() {
        let rates = FrameRates {
            target_frame_rate: 0.0,
            display_refresh_rate: 120.0,
        };
        assert_eq!(rates.effective_rate(), 120.0);

        let rates = FrameRates {
            target_frame_rate: -1.0,
            display_refresh_rate: 75.0,
        };
        assert_eq!(rates.effective_rate(), 75.0);
    }

    #[test]
    fn test_both_unset_uses_fallback() {
        let rates = FrameRates {
            target_frame_rate: -1.0,
            display_refresh_rate: 0.0,
        };
        assert_eq!(rates.effective_rate(), FALLBACK_REFRESH_RATE);

        let rates = FrameRates {
            target_frame_rate: f32::NAN,
            display_refresh_rate: f32::INFINITY,
        };
        assert_eq!(rates.effective_rate(), FALLBACK_REFRESH_RATE);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let rates: FrameRates = serde_json::from_str(r#"{ "target_frame_rate": 60.0 }"#).unwrap();
        assert_eq!(rates.target_frame_rate, 60.0);
        assert_eq!(rates.display_refresh_rate, FALLBACK_REFRESH_RATE);

        let rates: FrameRates = serde_json::from_str("{}").unwrap();
        assert_eq!(rates, FrameRates::default());
    }
}
