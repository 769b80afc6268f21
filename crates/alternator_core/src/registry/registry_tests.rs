//! Tests for registry + shared clock.

#[cfg(test)]
mod tests {
    use bevy::prelude::Entity;

    use crate::registry::*;

    #[test]
    fn test_initial_state() {
        let registry = AlternatorRegistry::default();

        assert!(registry.is_empty());
        assert_eq!(registry.leader(), None);
        assert_eq!(registry.phase(), AlternatorPhase::ShowingPrimary);
        assert_eq!(registry.elapsed(), 0.0);
    }

    #[test]
    fn test_register_keeps_activation_order() {
        let mut registry = AlternatorRegistry::default();
        let a = Entity::from_raw(1);
        let b = Entity::from_raw(2);
        let c = Entity::from_raw(3);

        assert!(registry.register(b));
        assert!(registry.register(a));
        assert!(registry.register(c));
        assert!(!registry.register(a)); // дубликат

        assert_eq!(registry.members(), &[b, a, c]);
        assert_eq!(registry.leader(), Some(b));
    }

    #[test]
    fn test_unregister_is_safe() {
        let mut registry = AlternatorRegistry::default();
        let a = Entity::from_raw(1);
        let b = Entity::from_raw(2);

        assert!(!registry.unregister(a)); // не зарегистрирован

        registry.register(a);
        registry.register(b);
        assert!(registry.unregister(a));
        assert!(!registry.unregister(a));

        assert_eq!(registry.leader(), Some(b)); // следующий стал leader
    }

    #[test]
    fn test_prune_removes_only_invalid() {
        let mut registry = AlternatorRegistry::default();
        let members: Vec<_> = (0..4).map(Entity::from_raw).collect();
        for member in &members {
            registry.register(*member);
        }

        registry.prune(&[members[1], members[3]]);

        assert_eq!(registry.members(), &[members[0], members[2]]);
    }

    #[test]
    fn test_clock_flips_once_and_keeps_remainder() {
        let mut clock = SharedClock::default();

        assert_eq!(clock.advance(0.3, 0.5), None);
        assert_eq!(clock.phase(), AlternatorPhase::ShowingPrimary);

        assert_eq!(clock.advance(0.3, 0.5), Some(AlternatorPhase::ShowingShifted));
        assert!((clock.elapsed() - 0.1).abs() < 1e-5);
    }

    #[test]
    fn test_clock_at_sixty_fps() {
        let mut clock = SharedClock::default();
        let delta = 1.0 / 60.0;
        let mut flips = 0;

        // 31 кадр ≈ 0.5167s ≥ 0.5s
        for _ in 0..31 {
            if clock.advance(delta, 0.5).is_some() {
                flips += 1;
            }
        }

        assert_eq!(flips, 1);
        assert_eq!(clock.phase(), AlternatorPhase::ShowingShifted);
        assert!(clock.elapsed() < 0.5);
    }

    #[test]
    fn test_clock_huge_delta_flips_exactly_once() {
        let mut clock = SharedClock::default();

        assert_eq!(clock.advance(2.2, 0.5), Some(AlternatorPhase::ShowingShifted));
        assert!(clock.elapsed() < 0.5);
        assert!((clock.elapsed() - 0.2).abs() < 1e-5);
    }

    #[test]
    fn test_clock_ignores_bad_delta() {
        let mut clock = SharedClock::default();

        assert_eq!(clock.advance(-1.0, 0.5), None);
        assert_eq!(clock.advance(f32::NAN, 0.5), None);
        assert_eq!(clock.elapsed(), 0.0);
    }

    #[test]
    fn test_phase_flip_roundtrip() {
        let phase = AlternatorPhase::default();
        assert!(phase.shows_primary());
        assert!(!phase.flipped().shows_primary());
        assert_eq!(phase.flipped().flipped(), phase);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut registry = AlternatorRegistry::default();
        registry.advance(0.7, 0.5);

        let json = serde_json::to_string(&registry.snapshot()).unwrap();
        let restored: ClockSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.phase, AlternatorPhase::ShowingShifted);
        assert!((restored.elapsed - 0.2).abs() < 1e-5);
    }
}
