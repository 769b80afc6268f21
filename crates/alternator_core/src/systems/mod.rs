//! Alternator systems (lifecycle + shared clock)

pub mod clock;
pub mod events;
pub mod lifecycle;


pub use clock::{advance_alternators, apply_phase, drive_shared_clock};
pub use events::AlternatorFlipped;
pub use lifecycle::{
    activate_alternator, deactivate_alternator, initialize_alternator, set_switch_interval,
    unregister_on_remove, AlternatorCommandsExt,
};
