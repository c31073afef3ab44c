// SPDX-License-Identifier: MPL-2.0
//! 3D scene representation and rendering.
//!
//! - [`loader`] - resolves an [`AssetRef`](crate::content::AssetRef) into a [`SceneAsset`]
//! - [`primitives`] - procedural `builtin:<shape>` meshes
//! - [`camera`] - orbit camera and projection
//! - [`view`] - [`SceneView`], the per-viewer render state and canvas program
//!
//! A [`SceneAsset`] is immutable once built and shared between viewers
//! through `Arc`. Everything a single viewer mutates lives in its own
//! [`SceneView`].

pub mod camera;
pub mod loader;
pub mod primitives;
pub mod view;

pub use camera::Camera;
pub use loader::{AssetCache, AssetLoader, GltfLoader};
pub use view::SceneView;

use glam::{Mat4, Quat, Vec3};
use iced::Vector;
use std::sync::Arc;

/// Imperative controls a viewer exercises on its renderer.
///
/// The viewer state only talks to rendering through this trait, so tests can
/// substitute a recording implementation.
pub trait RenderControls {
    /// Returns the camera to its initial pose.
    fn reset(&mut self);

    /// Starts or freezes the first animation clip.
    fn set_animation_playing(&mut self, playing: bool);

    /// Enables or disables continuous yaw rotation.
    fn set_auto_rotate(&mut self, enabled: bool);

    /// Advances time-driven state by `delta` seconds.
    fn advance(&mut self, delta: f32);

    /// Rotates the camera by a pointer drag of `delta` logical pixels.
    fn orbit(&mut self, delta: Vector);

    /// Displays a loaded asset, restarting its clip from zero.
    fn set_asset(&mut self, asset: Arc<SceneAsset>);

    /// Whether successive frames differ.
    fn is_animating(&self) -> bool;

    /// Drops cached output after an external change such as zoom.
    fn invalidate(&self) {}
}

/// A node of the flattened scene hierarchy.
///
/// Nodes are stored parents-first, so a single forward pass resolves world
/// transforms.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub parent: Option<usize>,
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl SceneNode {
    #[must_use]
    pub fn root() -> Self {
        Self {
            parent: None,
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }

    fn local_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

/// Edge list of one mesh primitive, attached to a node.
#[derive(Debug, Clone, PartialEq)]
pub struct WireMesh {
    pub node: usize,
    pub positions: Vec<Vec3>,
    pub edges: Vec<[u32; 2]>,
}

/// Keyframes animating one property of one node.
#[derive(Debug, Clone, PartialEq)]
pub enum Keyframes {
    Translation(Vec<Vec3>),
    Rotation(Vec<Quat>),
    Scale(Vec<Vec3>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    pub node: usize,
    pub times: Vec<f32>,
    pub keyframes: Keyframes,
}

impl Channel {
    /// Finds the keyframe pair around `time` and the blend factor between them.
    fn segment(&self, time: f32) -> Option<(usize, usize, f32)> {
        let last = self.times.len().checked_sub(1)?;
        let next = self.times.partition_point(|t| *t <= time);
        if next == 0 {
            return Some((0, 0, 0.0));
        }
        if next > last {
            return Some((last, last, 0.0));
        }
        let previous = next - 1;
        let span = self.times[next] - self.times[previous];
        let factor = if span > 0.0 {
            (time - self.times[previous]) / span
        } else {
            0.0
        };
        Some((previous, next, factor))
    }

    fn apply(&self, node: &mut SceneNode, time: f32) {
        let Some((a, b, factor)) = self.segment(time) else {
            return;
        };
        match &self.keyframes {
            Keyframes::Translation(values) => {
                if let (Some(from), Some(to)) = (values.get(a), values.get(b)) {
                    node.translation = from.lerp(*to, factor);
                }
            }
            Keyframes::Rotation(values) => {
                if let (Some(from), Some(to)) = (values.get(a), values.get(b)) {
                    node.rotation = from.slerp(*to, factor);
                }
            }
            Keyframes::Scale(values) => {
                if let (Some(from), Some(to)) = (values.get(a), values.get(b)) {
                    node.scale = from.lerp(*to, factor);
                }
            }
        }
    }
}

/// The first animation of an asset.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    pub name: Option<String>,
    pub duration: f32,
    pub channels: Vec<Channel>,
}

/// Renderer-ready wireframe representation of a 3D asset.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneAsset {
    pub nodes: Vec<SceneNode>,
    pub meshes: Vec<WireMesh>,
    pub clip: Option<AnimationClip>,
    /// Maps the rest pose into a unit sphere around the origin.
    pub normalization: Mat4,
}

impl SceneAsset {
    /// Builds an asset and computes its normalization from the rest pose.
    #[must_use]
    pub fn new(nodes: Vec<SceneNode>, meshes: Vec<WireMesh>, clip: Option<AnimationClip>) -> Self {
        let mut asset = Self {
            nodes,
            meshes,
            clip,
            normalization: Mat4::IDENTITY,
        };
        asset.normalization = asset.compute_normalization();
        asset
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.meshes.iter().map(|mesh| mesh.edges.len()).sum()
    }

    #[must_use]
    pub fn clip_duration(&self) -> Option<f32> {
        self.clip.as_ref().map(|clip| clip.duration)
    }

    /// World matrix of every node, with the clip sampled at `clip_time`.
    #[must_use]
    pub fn world_transforms(&self, clip_time: Option<f32>) -> Vec<Mat4> {
        let mut nodes = self.nodes.clone();
        if let (Some(clip), Some(time)) = (&self.clip, clip_time) {
            for channel in &clip.channels {
                if let Some(node) = nodes.get_mut(channel.node) {
                    channel.apply(node, time);
                }
            }
        }

        let mut world: Vec<Mat4> = Vec::with_capacity(nodes.len());
        for node in &nodes {
            let local = node.local_matrix();
            let matrix = match node.parent.and_then(|parent| world.get(parent)) {
                Some(parent) => *parent * local,
                None => local,
            };
            world.push(matrix);
        }
        world
    }

    fn compute_normalization(&self) -> Mat4 {
        let world = self.world_transforms(None);
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);

        for mesh in &self.meshes {
            let matrix = world.get(mesh.node).copied().unwrap_or(Mat4::IDENTITY);
            for position in &mesh.positions {
                let point = matrix.transform_point3(*position);
                min = min.min(point);
                max = max.max(point);
            }
        }

        if !min.is_finite() || !max.is_finite() {
            return Mat4::IDENTITY;
        }

        let center = (min + max) * 0.5;
        let radius = (max - center).length();
        if radius <= f32::EPSILON {
            return Mat4::from_translation(-center);
        }
        Mat4::from_scale(Vec3::splat(1.0 / radius)) * Mat4::from_translation(-center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    fn two_node_asset() -> SceneAsset {
        let root = SceneNode {
            translation: Vec3::new(1.0, 0.0, 0.0),
            ..SceneNode::root()
        };
        let child = SceneNode {
            parent: Some(0),
            translation: Vec3::new(0.0, 2.0, 0.0),
            ..SceneNode::root()
        };
        let clip = AnimationClip {
            name: Some("slide".to_string()),
            duration: 2.0,
            channels: vec![Channel {
                node: 1,
                times: vec![0.0, 2.0],
                keyframes: Keyframes::Translation(vec![Vec3::ZERO, Vec3::new(0.0, 4.0, 0.0)]),
            }],
        };
        let mesh = WireMesh {
            node: 1,
            positions: vec![Vec3::new(-1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0)],
            edges: vec![[0, 1]],
        };
        SceneAsset::new(vec![root, child], vec![mesh], Some(clip))
    }

    #[test]
    fn child_transform_composes_with_parent() {
        let asset = two_node_asset();
        let world = asset.world_transforms(None);
        let origin = world[1].transform_point3(Vec3::ZERO);
        assert_abs_diff_eq!(origin.x, 1.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(origin.y, 2.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn clip_is_interpolated_between_keyframes() {
        let asset = two_node_asset();
        let world = asset.world_transforms(Some(0.5));
        let origin = world[1].transform_point3(Vec3::ZERO);
        assert_abs_diff_eq!(origin.y, 1.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn sampling_past_the_end_holds_last_keyframe() {
        let asset = two_node_asset();
        let world = asset.world_transforms(Some(10.0));
        let origin = world[1].transform_point3(Vec3::ZERO);
        assert_abs_diff_eq!(origin.y, 4.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn normalization_centers_rest_pose_in_unit_sphere() {
        let asset = two_node_asset();
        let world = asset.world_transforms(None);
        let a = asset
            .normalization
            .transform_point3(world[1].transform_point3(Vec3::new(-1.0, 0.0, 0.0)));
        let b = asset
            .normalization
            .transform_point3(world[1].transform_point3(Vec3::new(1.0, 0.0, 0.0)));
        assert_abs_diff_eq!(a.length(), 1.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!((a + b).length(), 0.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn edge_count_sums_meshes() {
        assert_eq!(two_node_asset().edge_count(), 1);
        assert_eq!(two_node_asset().clip_duration(), Some(2.0));
    }
}
