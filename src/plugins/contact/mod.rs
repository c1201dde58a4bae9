//! Contact plugin: turns physics overlaps into game outcomes.
//!
//! Avian reports `CollisionStart` between sensor colliders. Each report is
//! mapped to a pair of gameplay categories, canonically ordered, and looked
//! up in a rule table. The table currently holds one rule: a drone and a
//! projectile remove each other.
//!
//! Resolution only *marks* entities ([`PendingDespawn`]); the cleanup plugin
//! does the despawning later in the frame. Marking is idempotent, so a pair
//! reported twice in one step resolves once.

use avian2d::collision::narrow_phase::CollisionEventSystems;
use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::layers::Layer;
use crate::common::state::GameState;
use crate::plugins::cleanup::PendingDespawn;

/// Gameplay category of a collider, recovered from its layer memberships.
///
/// Ordered so a contact pair can be sorted into one canonical orientation
/// before the rule lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    None,
    Drone,
    Projectile,
}

impl Category {
    pub fn of(layers: &CollisionLayers) -> Self {
        if layers.memberships.has_all(Layer::Drone) {
            Category::Drone
        } else if layers.memberships.has_all(Layer::Projectile) {
            Category::Projectile
        } else {
            Category::None
        }
    }
}

/// What a matched contact does to the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    RemoveBoth,
}

/// Rule table keyed by canonically ordered category pairs.
const RULES: &[((Category, Category), Outcome)] =
    &[((Category::Drone, Category::Projectile), Outcome::RemoveBoth)];

pub fn rule_for(a: Category, b: Category) -> Option<Outcome> {
    let pair = if a <= b { (a, b) } else { (b, a) };
    RULES
        .iter()
        .find(|(key, _)| *key == pair)
        .map(|(_, outcome)| *outcome)
}

pub fn plugin(app: &mut App) {
    app.add_systems(
        FixedPostUpdate,
        resolve_contacts
            .after(CollisionEventSystems)
            .run_if(in_state(GameState::InGame)),
    );
}

/// Map each contact report through the rule table.
///
/// A report can outlive a participant by a step; pairs that no longer
/// resolve to two colliders are skipped.
pub fn resolve_contacts(
    mut commands: Commands,
    mut reader: MessageReader<CollisionStart>,
    q_layers: Query<&CollisionLayers>,
) {
    for contact in reader.read() {
        let Ok([layers1, layers2]) = q_layers.get_many([contact.collider1, contact.collider2])
        else {
            continue;
        };

        let (mut a, mut b) = (contact.collider1, contact.collider2);
        let (mut cat_a, mut cat_b) = (Category::of(layers1), Category::of(layers2));
        if cat_a > cat_b {
            std::mem::swap(&mut a, &mut b);
            std::mem::swap(&mut cat_a, &mut cat_b);
        }

        match rule_for(cat_a, cat_b) {
            Some(Outcome::RemoveBoth) => {
                info!("drone hit");
                commands.entity(a).insert(PendingDespawn);
                commands.entity(b).insert(PendingDespawn);
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests;
