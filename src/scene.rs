use std::path::Path;

use anyhow::Context;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::geometry::Shape;
use crate::math::{Ray, AABB};
use crate::scenes::{SpawnPoint, EYE_HEIGHT};
use crate::traits::{Collidable, CollidableProvider};

/// Node in the scene graph. Translations accumulate from parent to child.
/// A node takes part in collision only when it carries a `collider`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneNode {
    pub name: String,
    pub translation: Vec3,
    pub collider: Option<Shape>,
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn solid(name: impl Into<String>, shape: Shape) -> Self {
        Self {
            name: name.into(),
            collider: Some(shape),
            ..Default::default()
        }
    }

    pub fn with_translation(mut self, translation: Vec3) -> Self {
        self.translation = translation;
        self
    }

    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn is_collidable(&self) -> bool {
        self.collider.is_some()
    }

    fn collect<'a>(&'a self, parent_offset: Vec3, out: &mut Vec<Collider<'a>>) {
        let offset = parent_offset + self.translation;
        if let Some(shape) = &self.collider {
            out.push(Collider {
                name: &self.name,
                shape,
                offset,
            });
        }
        for child in &self.children {
            child.collect(offset, out);
        }
    }

    fn count(&self) -> usize {
        1 + self.children.iter().map(SceneNode::count).sum::<usize>()
    }
}

/// A collidable shape placed in world space
#[derive(Clone, Copy, Debug)]
pub struct Collider<'a> {
    pub name: &'a str,
    pub shape: &'a Shape,
    pub offset: Vec3,
}

impl Collidable for Collider<'_> {
    fn raycast(&self, ray: &Ray) -> Option<f32> {
        if ray.is_degenerate() {
            return None;
        }
        self.shape.intersect_local(ray.origin - self.offset, ray.direction)
    }

    fn bounds(&self) -> AABB {
        self.shape.local_bounds().translated(self.offset)
    }

    fn label(&self) -> &str {
        self.name
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub name: String,
    /// Start pose; derived from the geometry when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spawn: Option<SpawnPoint>,
    pub nodes: Vec<SceneNode>,
}

/// Distance kept between a derived spawn point and the scene bounds
const SPAWN_CLEARANCE: f32 = 2.0;

impl Scene {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            spawn: None,
            nodes: Vec::new(),
        }
    }

    pub fn add(&mut self, node: SceneNode) {
        self.nodes.push(node);
    }

    /// Every collidable node, descendants included, in depth-first order
    pub fn collidables(&self) -> Vec<Collider<'_>> {
        let mut out = Vec::new();
        for node in &self.nodes {
            node.collect(Vec3::ZERO, &mut out);
        }
        out
    }

    /// The scene's own spawn if it has one. Otherwise a point just past the
    /// +Z side of the collidable bounds, at eye height, facing their center.
    pub fn spawn_point(&self) -> SpawnPoint {
        if let Some(spawn) = self.spawn {
            return spawn;
        }
        let bounds = self
            .collidables()
            .iter()
            .map(|collider| collider.bounds())
            .reduce(|acc, b| acc.union(&b));
        let Some(bounds) = bounds else {
            let position = Vec3::new(0.0, EYE_HEIGHT, 0.0);
            return SpawnPoint {
                position,
                look_at: position + Vec3::NEG_Z,
            };
        };
        let center = bounds.center();
        let position = Vec3::new(
            center.x,
            bounds.min.y.max(0.0) + EYE_HEIGHT,
            bounds.max.z + SPAWN_CLEARANCE,
        );
        SpawnPoint {
            position,
            look_at: Vec3::new(center.x, position.y, center.z),
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.iter().map(SceneNode::count).sum()
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let scene: Scene = serde_json::from_str(json).context("invalid scene description")?;
        Ok(scene)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scene file {}", path.display()))?;
        let scene = Self::from_json(&json).with_context(|| format!("failed to parse {}", path.display()))?;
        log::info!(
            "Loaded scene '{}' from {}: {} nodes, {} collidable",
            scene.name,
            path.display(),
            scene.node_count(),
            scene.collidables().len()
        );
        Ok(scene)
    }
}

impl CollidableProvider for Scene {
    type Item<'a> = Collider<'a>;

    fn collidables(&self) -> Vec<Collider<'_>> {
        Scene::collidables(self)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Bare shapes already in world space
impl CollidableProvider for [Shape] {
    type Item<'a> = &'a Shape;

    fn collidables(&self) -> Vec<&Shape> {
        self.iter().collect()
    }
}
