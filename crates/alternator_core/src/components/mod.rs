//! ECS Components alternator'а
//!
//! - alternator: per-instance конфиг (ссылки на visuals, интервалы, флаги)
//! - visual: active/inactive флаг visual объекта

pub mod alternator;
pub mod visual;


pub use alternator::Alternator;
pub use visual::IndicatorVisual;
