use bevy::prelude::*;

use crate::common::layers::{drone_layers, inert_layers, projectile_layers};
use crate::common::test_utils::{run_system_once, write_collision_start};
use crate::plugins::cleanup::{self, PendingDespawn};

use super::{Category, Outcome, resolve_contacts, rule_for};

#[test]
fn categories_come_from_layer_memberships() {
    assert_eq!(Category::of(&drone_layers()), Category::Drone);
    assert_eq!(Category::of(&projectile_layers()), Category::Projectile);
    assert_eq!(Category::of(&inert_layers()), Category::None);
}

#[test]
fn rule_lookup_ignores_pair_orientation() {
    assert_eq!(
        rule_for(Category::Drone, Category::Projectile),
        Some(Outcome::RemoveBoth)
    );
    assert_eq!(
        rule_for(Category::Projectile, Category::Drone),
        Some(Outcome::RemoveBoth)
    );
}

#[test]
fn unmatched_pairs_have_no_rule() {
    assert_eq!(rule_for(Category::Drone, Category::Drone), None);
    assert_eq!(rule_for(Category::None, Category::Projectile), None);
    assert_eq!(rule_for(Category::None, Category::None), None);
}

#[test]
fn a_drone_projectile_contact_marks_both_for_despawn() {
    let mut world = World::new();
    let drone = world.spawn(drone_layers()).id();
    let shell = world.spawn(projectile_layers()).id();

    write_collision_start(&mut world, drone, shell);
    run_system_once(&mut world, resolve_contacts);

    assert!(world.get::<PendingDespawn>(drone).is_some());
    assert!(world.get::<PendingDespawn>(shell).is_some());
}

#[test]
fn contact_orientation_does_not_matter() {
    let mut world = World::new();
    let drone = world.spawn(drone_layers()).id();
    let shell = world.spawn(projectile_layers()).id();

    // Reported shell-first this time.
    write_collision_start(&mut world, shell, drone);
    run_system_once(&mut world, resolve_contacts);

    assert!(world.get::<PendingDespawn>(drone).is_some());
    assert!(world.get::<PendingDespawn>(shell).is_some());
}

#[test]
fn contacts_without_a_rule_are_ignored() {
    let mut world = World::new();
    let a = world.spawn(drone_layers()).id();
    let b = world.spawn(drone_layers()).id();
    let inert = world.spawn(inert_layers()).id();

    write_collision_start(&mut world, a, b);
    write_collision_start(&mut world, a, inert);
    run_system_once(&mut world, resolve_contacts);

    assert_eq!(world.query::<&PendingDespawn>().iter(&world).count(), 0);
}

#[test]
fn stale_reports_for_despawned_entities_are_skipped() {
    let mut world = World::new();
    let drone = world.spawn(drone_layers()).id();
    let gone = world.spawn(projectile_layers()).id();
    world.despawn(gone);

    write_collision_start(&mut world, drone, gone);
    run_system_once(&mut world, resolve_contacts);

    assert!(world.get::<PendingDespawn>(drone).is_none());
}

#[test]
fn a_doubly_reported_contact_resolves_once() {
    let mut world = World::new();
    let drone = world.spawn(drone_layers()).id();
    let shell = world.spawn(projectile_layers()).id();

    write_collision_start(&mut world, drone, shell);
    write_collision_start(&mut world, shell, drone);
    run_system_once(&mut world, resolve_contacts);
    run_system_once(&mut world, cleanup::despawn_marked);

    assert!(world.get_entity(drone).is_err());
    assert!(world.get_entity(shell).is_err());

    // A second sweep has nothing left to despawn.
    run_system_once(&mut world, cleanup::despawn_marked);
}
