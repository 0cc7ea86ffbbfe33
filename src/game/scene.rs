//! Demo Scene Layout
//!
//! A fixed grove for the demo binaries: flat ground, a square world edge,
//! and a hand-placed set of trees. This module owns the environment data the
//! controller queries each frame; it deliberately does no procedural
//! generation - layouts are plain data and can be loaded from JSON.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::world::CircleCollider;

/// One tree in the grove.
///
/// `height` only matters to a renderer; the controller collides with the
/// trunk circle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeInstance {
    /// Trunk center on the XZ plane.
    pub position: Vec2,
    /// Trunk collision radius in meters.
    pub trunk_radius: f32,
    /// Visual height in meters.
    pub height: f32,
}

/// The demo world: ground height, bounds, and tree placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneLayout {
    /// Height of the flat ground plane.
    pub ground_y: f32,
    /// Walkable half-extent; the world spans `[-half, +half]` on X and Z.
    pub bounds_half_size: f32,
    /// Trees in the grove.
    pub trees: Vec<TreeInstance>,
}

impl Default for SceneLayout {
    /// A 160m x 160m clearing with a loose ring of trees around the spawn
    /// and a few strays to weave between.
    fn default() -> Self {
        let ring = [
            (12.0, 3.0),
            (9.0, -10.0),
            (1.5, -14.0),
            (-8.0, -11.0),
            (-13.0, -1.0),
            (-10.0, 9.0),
            (-2.0, 14.0),
            (8.0, 11.0),
        ];
        let strays = [(4.0, -5.5), (-5.0, 4.5), (20.0, -18.0), (-22.0, 16.0)];

        let mut trees = Vec::new();
        for (i, &(x, z)) in ring.iter().enumerate() {
            trees.push(TreeInstance {
                position: Vec2::new(x, z),
                trunk_radius: 0.45,
                height: 7.0 + (i % 3) as f32,
            });
        }
        for &(x, z) in &strays {
            trees.push(TreeInstance {
                position: Vec2::new(x, z),
                trunk_radius: 0.35,
                height: 6.0,
            });
        }

        Self {
            ground_y: 0.0,
            bounds_half_size: 80.0,
            trees,
        }
    }
}

impl SceneLayout {
    /// Build this frame's collider list from the tree placement.
    ///
    /// Rebuilt per frame by the binaries; the controller never caches it.
    pub fn tree_colliders(&self) -> Vec<CircleCollider> {
        self.trees
            .iter()
            .map(|tree| CircleCollider {
                center: tree.position,
                radius: tree.trunk_radius,
            })
            .collect()
    }

    /// Load a layout from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the layout to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_sanity() {
        let scene = SceneLayout::default();
        assert_eq!(scene.ground_y, 0.0);
        assert!(scene.bounds_half_size > 0.0);
        assert!(!scene.trees.is_empty());

        // Every tree stands inside the bounds
        for tree in &scene.trees {
            assert!(tree.position.x.abs() < scene.bounds_half_size);
            assert!(tree.position.y.abs() < scene.bounds_half_size);
            assert!(tree.trunk_radius > 0.0);
        }
    }

    #[test]
    fn test_colliders_match_trees() {
        let scene = SceneLayout::default();
        let colliders = scene.tree_colliders();
        assert_eq!(colliders.len(), scene.trees.len());
        assert_eq!(colliders[0].center, scene.trees[0].position);
        assert_eq!(colliders[0].radius, scene.trees[0].trunk_radius);
    }

    #[test]
    fn test_layout_loads_from_json() {
        let json = r#"{
            "ground_y": 0.5,
            "bounds_half_size": 40.0,
            "trees": [
                { "position": [3.0, -4.0], "trunk_radius": 0.5, "height": 8.0 }
            ]
        }"#;
        let scene = SceneLayout::from_json(json).unwrap();
        assert_eq!(scene.ground_y, 0.5);
        assert_eq!(scene.trees.len(), 1);
        assert_eq!(scene.trees[0].position, Vec2::new(3.0, -4.0));
    }
}
