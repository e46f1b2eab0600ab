//! Combat domain: tests for hit registration, health and shortcuts.

use bevy::prelude::*;

use super::contacts::{register_overlap_begin, register_overlap_end};
use super::shortcut::TRANSITION_DURATION;
use super::{ContactSet, DamageOutcome, Damageable, Health, Shortcut};

/// Records every damage call it receives.
#[derive(Default)]
struct DamageLog {
    calls: Vec<(u32, Entity)>,
}

impl Damageable for DamageLog {
    fn apply_damage(&mut self, amount: u32, source: Entity) -> DamageOutcome {
        self.calls.push((amount, source));
        DamageOutcome::Hurt { remaining: 1 }
    }
}

fn spawn_entities<const N: usize>() -> [Entity; N] {
    let mut world = World::new();
    std::array::from_fn(|_| world.spawn_empty().id())
}

// -----------------------------------------------------------------------------
// Contact tracking tests
// -----------------------------------------------------------------------------

#[test]
fn test_continuous_overlap_damages_once() {
    let [attacker, target] = spawn_entities();
    let mut contacts = ContactSet::default();
    let mut log = DamageLog::default();

    // Repeated begin reports for the same continuous overlap
    for _ in 0..5 {
        register_overlap_begin(&mut contacts, true, target, Some(&mut log), 3, attacker);
    }

    assert_eq!(log.calls, vec![(3, attacker)]);
    assert!(contacts.contains(target));
}

#[test]
fn test_reentry_during_same_attack_hits_again() {
    let [attacker, target] = spawn_entities();
    let mut contacts = ContactSet::default();
    let mut log = DamageLog::default();

    register_overlap_begin(&mut contacts, true, target, Some(&mut log), 3, attacker);
    assert!(register_overlap_end(&mut contacts, target));
    register_overlap_begin(&mut contacts, true, target, Some(&mut log), 3, attacker);

    assert_eq!(log.calls.len(), 2);
}

#[test]
fn test_no_damage_while_attack_inactive() {
    let [attacker, target] = spawn_entities();
    let mut contacts = ContactSet::default();
    let mut log = DamageLog::default();

    let outcome = register_overlap_begin(&mut contacts, false, target, Some(&mut log), 3, attacker);

    assert!(outcome.is_none());
    assert!(log.calls.is_empty());
    assert_eq!(contacts, ContactSet::default());
}

#[test]
fn test_non_damageable_candidate_is_not_tracked() {
    let [attacker, wall] = spawn_entities();
    let mut contacts = ContactSet::default();

    let outcome = register_overlap_begin(&mut contacts, true, wall, None, 3, attacker);

    assert!(outcome.is_none());
    assert!(!contacts.contains(wall));
}

#[test]
fn test_each_entity_hit_independently() {
    let [attacker, first, second] = spawn_entities();
    let mut contacts = ContactSet::default();
    let mut first_log = DamageLog::default();
    let mut second_log = DamageLog::default();

    register_overlap_begin(&mut contacts, true, first, Some(&mut first_log), 3, attacker);
    register_overlap_begin(&mut contacts, true, second, Some(&mut second_log), 3, attacker);
    register_overlap_begin(&mut contacts, true, first, Some(&mut first_log), 3, attacker);

    assert_eq!(first_log.calls.len(), 1);
    assert_eq!(second_log.calls.len(), 1);
    assert!(contacts.contains(first));
    assert!(contacts.contains(second));
}

#[test]
fn test_leftover_contact_blocks_until_overlap_ends() {
    let [attacker, target] = spawn_entities();
    let mut contacts = ContactSet::default();
    let mut log = DamageLog::default();

    // Hit during the first attack, still overlapping when the next one starts
    register_overlap_begin(&mut contacts, true, target, Some(&mut log), 3, attacker);
    register_overlap_begin(&mut contacts, true, target, Some(&mut log), 3, attacker);
    assert_eq!(log.calls.len(), 1);

    register_overlap_end(&mut contacts, target);
    register_overlap_begin(&mut contacts, true, target, Some(&mut log), 3, attacker);
    assert_eq!(log.calls.len(), 2);
}

#[test]
fn test_overlap_end_for_unknown_entity_is_noop() {
    let [tracked, gone] = spawn_entities();
    let mut contacts = ContactSet::default();
    contacts.insert(tracked);

    assert!(!register_overlap_end(&mut contacts, gone));
    assert!(contacts.contains(tracked));
}

#[test]
fn test_contact_set_holds_each_entity_once() {
    let [entity] = spawn_entities();
    let mut contacts = ContactSet::default();

    assert!(contacts.insert(entity));
    assert!(!contacts.insert(entity));
    assert!(contacts.remove(entity));
    assert!(!contacts.contains(entity));

    contacts.insert(entity);
    contacts.clear();
    assert_eq!(contacts, ContactSet::default());
}

// -----------------------------------------------------------------------------
// Health tests
// -----------------------------------------------------------------------------

#[test]
fn test_health_reports_kill_once() {
    let [attacker] = spawn_entities();
    let mut health = Health::new(5);

    assert_eq!(
        health.apply_damage(3, attacker),
        DamageOutcome::Hurt { remaining: 2 }
    );
    assert_eq!(health.apply_damage(3, attacker), DamageOutcome::Killed);
    assert_eq!(health.current, 0);
    assert_eq!(health.apply_damage(3, attacker), DamageOutcome::Ignored);
}

#[test]
fn test_health_restore() {
    let [attacker] = spawn_entities();
    let mut health = Health::new(10);
    health.apply_damage(4, attacker);
    assert_eq!(health.current, 6);

    health.restore();
    assert_eq!(health.current, 10);
    assert!(!health.is_dead());
}

// -----------------------------------------------------------------------------
// Shortcut tests
// -----------------------------------------------------------------------------

#[test]
fn test_shortcut_toggles_on_every_hit() {
    let [window, attacker] = spawn_entities();
    let mut shortcut = Shortcut::new(window, Vec2::new(0.0, 40.0), true);
    assert!(!shortcut.is_open());

    assert_eq!(
        shortcut.apply_damage(3, attacker),
        DamageOutcome::Toggled { open: true }
    );
    assert_eq!(
        shortcut.apply_damage(3, attacker),
        DamageOutcome::Toggled { open: false }
    );
}

#[test]
fn test_shortcut_open_window_only_when_closed() {
    let [window] = spawn_entities();
    let mut shortcut = Shortcut::new(window, Vec2::ZERO, true);

    assert!(shortcut.open_window());
    assert!(shortcut.is_open());
    assert!(!shortcut.open_window());
}

#[test]
fn test_shortcut_animation_completes_in_transition_duration() {
    let [window, attacker] = spawn_entities();
    let mut shortcut = Shortcut::new(window, Vec2::ZERO, true);
    assert_eq!(shortcut.openness(), 0.0);

    shortcut.apply_damage(1, attacker);
    assert!(shortcut.is_animating());

    let half = shortcut.tick(TRANSITION_DURATION / 2.0);
    assert!((half - 0.5).abs() < 1e-5);

    let done = shortcut.tick(TRANSITION_DURATION);
    assert_eq!(done, 1.0);
    assert!(!shortcut.is_animating());
}

// -----------------------------------------------------------------------------
// Overlap system tests
// -----------------------------------------------------------------------------

mod overlap_system {
    use avian2d::prelude::{CollisionEnd, CollisionStart};
    use bevy::ecs::message::Messages;
    use bevy::prelude::*;

    use crate::combat::systems::track_attack_overlaps;
    use crate::combat::{
        AttackTrigger, ContactSet, DamageEvent, DamageOutcome, DeathEvent, Health, Shortcut,
    };
    use crate::content::ControllerConfig;
    use crate::movement::ControllerState;

    struct Arena {
        app: App,
        attacker: Entity,
        trigger: Entity,
    }

    /// An attacker mid-tackle with its trigger volume. Damage per hit is 3.
    fn arena() -> Arena {
        let mut app = App::new();
        app.add_message::<CollisionStart>()
            .add_message::<CollisionEnd>()
            .add_message::<DamageEvent>()
            .add_message::<DeathEvent>()
            .insert_resource(ControllerConfig {
                damage_tackle: 3,
                ..ControllerConfig::default()
            })
            .add_systems(Update, track_attack_overlaps);

        let mut state = ControllerState::default();
        state.activate_attack(0.0, 100.0);
        let attacker = app
            .world_mut()
            .spawn((state, ContactSet::default(), Health::new(10)))
            .id();
        let trigger = app
            .world_mut()
            .spawn(AttackTrigger { owner: attacker })
            .id();

        Arena {
            app,
            attacker,
            trigger,
        }
    }

    impl Arena {
        fn begin(&mut self, candidate: Entity) {
            self.app.world_mut().write_message(CollisionStart {
                collider1: self.trigger,
                collider2: candidate,
                body1: Some(self.attacker),
                body2: Some(candidate),
            });
        }

        fn end(&mut self, candidate: Entity) {
            self.app.world_mut().write_message(CollisionEnd {
                collider1: candidate,
                collider2: self.trigger,
                body1: Some(candidate),
                body2: Some(self.attacker),
            });
        }

        fn hp(&self, entity: Entity) -> u32 {
            self.app.world().get::<Health>(entity).unwrap().current
        }

        fn tracked(&self, entity: Entity) -> bool {
            self.app
                .world()
                .get::<ContactSet>(self.attacker)
                .unwrap()
                .contains(entity)
        }
    }

    #[test]
    fn test_exit_and_reentry_in_one_frame_hits_again() {
        let mut arena = arena();
        let victim = arena.app.world_mut().spawn(Health::new(10)).id();

        arena.begin(victim);
        arena.app.update();
        assert_eq!(arena.hp(victim), 7);

        // Two physics steps in one frame: the victim leaves, then comes back
        arena.end(victim);
        arena.begin(victim);
        arena.app.update();

        assert_eq!(arena.hp(victim), 4);
        assert!(arena.tracked(victim));
    }

    #[test]
    fn test_touch_and_leave_in_one_frame_still_hits() {
        let mut arena = arena();
        let victim = arena.app.world_mut().spawn(Health::new(10)).id();

        arena.begin(victim);
        arena.end(victim);
        arena.app.update();

        assert_eq!(arena.hp(victim), 7);
        assert!(!arena.tracked(victim));
    }

    #[test]
    fn test_continuous_overlap_across_frames_hits_once() {
        let mut arena = arena();
        let victim = arena.app.world_mut().spawn(Health::new(10)).id();

        arena.begin(victim);
        arena.app.update();
        arena.app.update();
        arena.app.update();

        assert_eq!(arena.hp(victim), 7);
    }

    #[test]
    fn test_owner_is_never_hit_by_its_own_trigger() {
        let mut arena = arena();
        let attacker = arena.attacker;

        arena.begin(attacker);
        arena.app.update();

        assert_eq!(arena.hp(attacker), 10);
        assert!(!arena.tracked(attacker));
    }

    #[test]
    fn test_shortcut_toggles_instead_of_losing_health() {
        let mut arena = arena();
        let window = arena.app.world_mut().spawn_empty().id();
        let shortcut = arena
            .app
            .world_mut()
            .spawn(Shortcut::new(window, Vec2::ZERO, true))
            .id();

        arena.begin(shortcut);
        arena.app.update();

        let world = arena.app.world();
        assert!(world.get::<Shortcut>(shortcut).unwrap().is_open());
        let outcomes: Vec<_> = world
            .resource::<Messages<DamageEvent>>()
            .iter_current_update_messages()
            .map(|event| event.outcome)
            .collect();
        assert_eq!(outcomes, vec![DamageOutcome::Toggled { open: true }]);
    }

    #[test]
    fn test_killing_hit_writes_death() {
        let mut arena = arena();
        let victim = arena.app.world_mut().spawn(Health::new(3)).id();

        arena.begin(victim);
        arena.app.update();

        let world = arena.app.world();
        let deaths: Vec<_> = world
            .resource::<Messages<DeathEvent>>()
            .iter_current_update_messages()
            .map(|death| (death.entity, death.killer))
            .collect();
        assert_eq!(deaths, vec![(victim, arena.attacker)]);
    }
}
