// SPDX-License-Identifier: MPL-2.0
//! Per-viewer render state and the wireframe canvas program.

use super::camera::{self, Camera};
use super::{RenderControls, SceneAsset};
use crate::ui::state::{OrbitDrag, PlaybackState};
use iced::widget::canvas::{self, Cache, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Point, Rectangle, Renderer, Size, Theme, Vector};
use std::fmt;
use std::sync::Arc;

/// Render state owned by exactly one viewer: camera, clip position and the
/// geometry cache. The asset itself is shared.
pub struct SceneView {
    camera: Camera,
    playback: PlaybackState,
    asset: Option<Arc<SceneAsset>>,
    cache: Cache,
}

impl fmt::Debug for SceneView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneView")
            .field("camera", &self.camera)
            .field("playback", &self.playback)
            .field("has_asset", &self.asset.is_some())
            .finish_non_exhaustive()
    }
}

impl SceneView {
    #[must_use]
    pub fn new(auto_rotate: bool, rotate_speed: f32) -> Self {
        Self {
            camera: Camera::new(auto_rotate, rotate_speed),
            playback: PlaybackState::default(),
            asset: None,
            cache: Cache::default(),
        }
    }

    #[must_use]
    pub fn asset(&self) -> Option<&Arc<SceneAsset>> {
        self.asset.as_ref()
    }

    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[must_use]
    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    /// Canvas program drawing this view at `zoom`.
    #[must_use]
    pub fn program(&self, zoom: f32, color: Color) -> Wireframe<'_> {
        Wireframe {
            scene: self,
            zoom,
            color,
        }
    }
}

impl RenderControls for SceneView {
    fn reset(&mut self) {
        self.camera.reset();
        self.cache.clear();
    }

    fn set_animation_playing(&mut self, playing: bool) {
        self.playback.set_playing(playing);
    }

    fn set_auto_rotate(&mut self, enabled: bool) {
        self.camera.set_auto_rotate(enabled);
    }

    fn advance(&mut self, delta: f32) {
        if !self.is_animating() {
            return;
        }
        self.camera.advance(delta);
        let duration = self.asset.as_ref().and_then(|asset| asset.clip_duration());
        self.playback.advance(delta, duration);
        self.cache.clear();
    }

    fn orbit(&mut self, delta: Vector) {
        self.camera.orbit(delta);
        self.cache.clear();
    }

    fn set_asset(&mut self, asset: Arc<SceneAsset>) {
        self.asset = Some(asset);
        self.playback.rewind();
        self.cache.clear();
    }

    fn is_animating(&self) -> bool {
        self.asset.is_some() && (self.camera.auto_rotate() || self.playback.is_playing())
    }

    fn invalidate(&self) {
        self.cache.clear();
    }
}

/// Projects every edge of `asset` to canvas coordinates.
///
/// Edges with an endpoint behind the eye are dropped.
#[must_use]
pub fn project_edges(
    asset: &SceneAsset,
    camera: &Camera,
    zoom: f32,
    clip_time: Option<f32>,
    size: Size,
) -> Vec<(Point, Point)> {
    let aspect_ratio = size.width / size.height;
    let view_model =
        Camera::view_projection(aspect_ratio) * camera.model_matrix(zoom) * asset.normalization;
    let world = asset.world_transforms(clip_time);

    let mut segments = Vec::with_capacity(asset.edge_count());
    for mesh in &asset.meshes {
        let Some(node_matrix) = world.get(mesh.node) else {
            continue;
        };
        let mvp = view_model * *node_matrix;
        let projected: Vec<Option<Point>> = mesh
            .positions
            .iter()
            .map(|position| camera::project(&mvp, *position, size))
            .collect();

        for [a, b] in &mesh.edges {
            let endpoints = (
                projected.get(*a as usize).copied().flatten(),
                projected.get(*b as usize).copied().flatten(),
            );
            if let (Some(from), Some(to)) = endpoints {
                segments.push((from, to));
            }
        }
    }
    segments
}

/// Messages published by the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interaction {
    /// The cursor was dragged by this many logical pixels.
    Orbit(Vector),
}

pub struct Wireframe<'a> {
    scene: &'a SceneView,
    zoom: f32,
    color: Color,
}

impl canvas::Program<Interaction> for Wireframe<'_> {
    type State = OrbitDrag;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Interaction>> {
        use iced::widget::Action;

        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_over(bounds)?;
                state.start(position);
                Some(Action::capture())
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                let delta = state.move_to(*position)?;
                Some(Action::publish(Interaction::Orbit(delta)).and_capture())
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | iced::Event::Mouse(mouse::Event::CursorLeft) => {
                if state.is_dragging() {
                    state.stop();
                    Some(Action::capture())
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let Some(asset) = self.scene.asset() else {
            return Vec::new();
        };
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return Vec::new();
        }

        let geometry = self
            .scene
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let clip_time = asset.clip.as_ref().map(|_| self.scene.playback.clip_time());
                let segments =
                    project_edges(asset, &self.scene.camera, self.zoom, clip_time, frame.size());

                let path = Path::new(|builder| {
                    for (from, to) in &segments {
                        builder.move_to(*from);
                        builder.line_to(*to);
                    }
                });
                frame.stroke(
                    &path,
                    Stroke::default().with_width(1.2).with_color(self.color),
                );
            });

        vec![geometry]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.is_dragging() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}
