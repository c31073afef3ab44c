// SPDX-License-Identifier: MPL-2.0
//! Procedural wireframe shapes addressed as `builtin:<shape>`.
//!
//! Each shape is a single node with a short "hover" clip, so play/pause has a
//! visible effect even without a glTF file.

use super::{AnimationClip, Channel, Keyframes, SceneAsset, SceneNode, WireMesh};
use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Names accepted after the `builtin:` prefix.
pub const SHAPES: [&str; 5] = ["cube", "octahedron", "icosahedron", "torus", "helmet"];

const HOVER_DURATION: f32 = 2.0;
const HOVER_HEIGHT: f32 = 0.15;

/// Builds the named shape, or `None` for an unknown name.
#[must_use]
pub fn build(shape: &str) -> Option<SceneAsset> {
    let (positions, edges) = match shape {
        "cube" => cube(),
        "octahedron" => octahedron(),
        "icosahedron" => icosahedron(),
        "torus" => torus(1.0, 0.35, 24, 10),
        "helmet" => helmet(),
        _ => return None,
    };

    let mesh = WireMesh {
        node: 0,
        positions,
        edges,
    };
    Some(SceneAsset::new(
        vec![SceneNode::root()],
        vec![mesh],
        Some(hover_clip()),
    ))
}

fn hover_clip() -> AnimationClip {
    AnimationClip {
        name: Some("hover".to_string()),
        duration: HOVER_DURATION,
        channels: vec![Channel {
            node: 0,
            times: vec![0.0, HOVER_DURATION / 2.0, HOVER_DURATION],
            keyframes: Keyframes::Translation(vec![
                Vec3::ZERO,
                Vec3::new(0.0, HOVER_HEIGHT, 0.0),
                Vec3::ZERO,
            ]),
        }],
    }
}

fn cube() -> (Vec<Vec3>, Vec<[u32; 2]>) {
    let mut positions = Vec::with_capacity(8);
    for i in 0..8u32 {
        let coord = |bit: u32| if i & bit == 0 { -1.0 } else { 1.0 };
        positions.push(Vec3::new(coord(1), coord(2), coord(4)));
    }

    // Connect corners that differ in exactly one axis.
    let mut edges = Vec::with_capacity(12);
    for a in 0..8u32 {
        for bit in [1, 2, 4] {
            let b = a ^ bit;
            if a < b {
                edges.push([a, b]);
            }
        }
    }
    (positions, edges)
}

fn octahedron() -> (Vec<Vec3>, Vec<[u32; 2]>) {
    let positions = vec![
        Vec3::X,
        Vec3::NEG_X,
        Vec3::Y,
        Vec3::NEG_Y,
        Vec3::Z,
        Vec3::NEG_Z,
    ];
    let mut edges = Vec::with_capacity(12);
    for a in 0..6u32 {
        for b in (a + 1)..6 {
            // Opposite vertices are the only non-adjacent pairs.
            if b != a + 1 || a % 2 == 1 {
                edges.push([a, b]);
            }
        }
    }
    (positions, edges)
}

fn icosahedron() -> (Vec<Vec3>, Vec<[u32; 2]>) {
    let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let mut positions = Vec::with_capacity(12);
    for (a, b) in [(-1.0, phi), (1.0, phi), (-1.0, -phi), (1.0, -phi)] {
        positions.push(Vec3::new(a, b, 0.0));
        positions.push(Vec3::new(0.0, a, b));
        positions.push(Vec3::new(b, 0.0, a));
    }

    // Adjacent vertices sit exactly two units apart.
    let mut edges = Vec::with_capacity(30);
    for a in 0..positions.len() {
        for b in (a + 1)..positions.len() {
            if (positions[a].distance(positions[b]) - 2.0).abs() < 1e-3 {
                edges.push([index(a), index(b)]);
            }
        }
    }
    (positions, edges)
}

fn torus(major: f32, minor: f32, rings: u32, sides: u32) -> (Vec<Vec3>, Vec<[u32; 2]>) {
    let mut positions = Vec::with_capacity((rings * sides) as usize);
    let mut edges = Vec::with_capacity((rings * sides * 2) as usize);

    for ring in 0..rings {
        let u = TAU * ring as f32 / rings as f32;
        for side in 0..sides {
            let v = TAU * side as f32 / sides as f32;
            let radius = major + minor * v.cos();
            positions.push(Vec3::new(radius * u.cos(), minor * v.sin(), radius * u.sin()));

            let current = ring * sides + side;
            let next_side = ring * sides + (side + 1) % sides;
            let next_ring = ((ring + 1) % rings) * sides + side;
            edges.push([current, next_side]);
            edges.push([current, next_ring]);
        }
    }
    (positions, edges)
}

/// Dome with a visor band, reminiscent of a sci-fi helmet.
fn helmet() -> (Vec<Vec3>, Vec<[u32; 2]>) {
    const MERIDIANS: u32 = 16;
    const PARALLELS: u32 = 6;

    let mut positions = vec![Vec3::Y];
    let mut edges = Vec::new();

    // Parallels from just below the crown down to slightly under the equator.
    for parallel in 1..=PARALLELS {
        let polar = (PI * 0.55) * parallel as f32 / PARALLELS as f32;
        for meridian in 0..MERIDIANS {
            let azimuth = TAU * meridian as f32 / MERIDIANS as f32;
            positions.push(Vec3::new(
                polar.sin() * azimuth.cos(),
                polar.cos(),
                polar.sin() * azimuth.sin(),
            ));

            let current = 1 + (parallel - 1) * MERIDIANS + meridian;
            let next = 1 + (parallel - 1) * MERIDIANS + (meridian + 1) % MERIDIANS;
            edges.push([current, next]);
            if parallel == 1 {
                edges.push([0, current]);
            } else {
                edges.push([current - MERIDIANS, current]);
            }
        }
    }

    // Visor: a flattened front arc joined to the dome.
    let visor_start = index(positions.len());
    let arc = MERIDIANS / 2 + 1;
    for step in 0..arc {
        let azimuth = PI * 0.25 + (PI * 0.5) * step as f32 / (arc - 1) as f32;
        positions.push(Vec3::new(
            1.1 * azimuth.cos(),
            0.05,
            1.1 * azimuth.sin(),
        ));
        if step > 0 {
            edges.push([visor_start + step - 1, visor_start + step]);
        }
    }
    let equator_row = 1 + 3 * MERIDIANS;
    edges.push([visor_start, equator_row + MERIDIANS / 8]);
    edges.push([visor_start + arc - 1, equator_row + 3 * MERIDIANS / 8]);

    (positions, edges)
}

fn index(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge_count(shape: &str) -> usize {
        build(shape).map(|asset| asset.edge_count()).unwrap_or_default()
    }

    #[test]
    fn platonic_solids_have_expected_edges() {
        assert_eq!(edge_count("cube"), 12);
        assert_eq!(edge_count("octahedron"), 12);
        assert_eq!(edge_count("icosahedron"), 30);
    }

    #[test]
    fn every_shape_builds_with_a_clip() {
        for shape in SHAPES {
            let asset = build(shape).expect("builtin shape should build");
            assert!(asset.edge_count() > 0, "{shape} has no edges");
            assert_eq!(asset.clip_duration(), Some(HOVER_DURATION));
        }
    }

    #[test]
    fn edges_reference_existing_vertices() {
        for shape in SHAPES {
            let asset = build(shape).expect("builtin shape should build");
            for mesh in &asset.meshes {
                let count = mesh.positions.len() as u32;
                assert!(mesh.edges.iter().all(|[a, b]| *a < count && *b < count));
            }
        }
    }

    #[test]
    fn unknown_shape_is_none() {
        assert!(build("teapot").is_none());
    }
}
