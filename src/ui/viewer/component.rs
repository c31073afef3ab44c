// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating zoom, playback, orbit and asset loading.

use super::{controls, error_state, loading, ViewContext};
use crate::config::{ViewerConfig, MAX_FRAME_DELTA_SECS};
use crate::content::AssetRef;
use crate::error::AssetError;
use crate::scene::view::Interaction;
use crate::scene::{AssetCache, AssetLoader, RenderControls, SceneAsset, SceneView};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::{ZoomFactor, ZoomState};
use crate::ui::styles;
use iced::widget::{column, container, stack, text, Canvas};
use iced::{alignment, Element, Length, Task};
use std::sync::Arc;

/// Construction-time options of one viewer instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerOptions {
    /// Continuously rotate the model around its vertical axis.
    pub auto_rotate: bool,
    /// Show the zoom/play/reset buttons over the viewport.
    pub show_controls: bool,
    /// Caption rendered above the viewport.
    pub title: Option<String>,
    /// Viewport height in logical pixels.
    pub height: f32,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            auto_rotate: false,
            show_controls: true,
            title: None,
            height: sizing::CARD_VIEWER_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loading(loading::State),
    Ready,
    Failed(error_state::State),
}

/// State of one viewer. `R` is the renderer it drives; only the
/// [`RenderControls`] capability is used.
#[derive(Debug)]
pub struct State<R: RenderControls = SceneView> {
    asset_ref: AssetRef,
    options: ViewerOptions,
    zoom: ZoomState,
    playing: bool,
    status: LoadStatus,
    render: R,
}

#[derive(Debug, Clone)]
pub enum Message {
    ZoomIn,
    ZoomOut,
    Reset,
    TogglePlay,
    Canvas(Interaction),
    AssetLoaded {
        asset: AssetRef,
        result: Result<Arc<SceneAsset>, AssetError>,
    },
    ErrorState(error_state::Message),
    Retry,
}

/// Work the parent performs on behalf of a viewer.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    LoadAsset(AssetRef),
}

impl State<SceneView> {
    /// Creates a viewer in the `Loading` state. The parent starts the load
    /// with [`load`].
    #[must_use]
    pub fn new(asset_ref: AssetRef, options: ViewerOptions, config: &ViewerConfig) -> Self {
        let render = SceneView::new(options.auto_rotate, config.auto_rotate_speed());
        Self::with_renderer(asset_ref, options, render)
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let viewport: Element<'a, Message> = match &self.status {
            LoadStatus::Loading(spinner) => spinner.view(ctx.i18n, ctx.colors),
            LoadStatus::Failed(error) => error.view(
                ctx.i18n,
                Message::ErrorState(error_state::Message::ToggleDetails),
                Message::Retry,
            ),
            LoadStatus::Ready => {
                let program = self.render.program(self.zoom.value(), ctx.colors.wireframe);
                let canvas = Canvas::new(program)
                    .width(Length::Fill)
                    .height(Length::Fill);
                Element::from(canvas).map(Message::Canvas)
            }
        };

        let mut layers = stack![container(viewport)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::viewport)];

        if self.options.show_controls && self.status == LoadStatus::Ready {
            let has_clip = self
                .render
                .asset()
                .is_some_and(|asset| asset.clip.is_some());
            let bar = controls::view(ctx.i18n, self.zoom.factor, self.playing, has_clip);
            layers = layers.push(
                container(bar)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .padding(spacing::XS)
                    .align_x(alignment::Horizontal::Center)
                    .align_y(alignment::Vertical::Bottom),
            );
        }

        let viewport = container(layers)
            .width(Length::Fill)
            .height(Length::Fixed(self.options.height));

        match &self.options.title {
            Some(title) => column![text(title.as_str()).size(typography::BODY), viewport]
                .spacing(spacing::XS)
                .into(),
            None => viewport.into(),
        }
    }
}

impl<R: RenderControls> State<R> {
    /// Creates a viewer around an explicit renderer.
    pub fn with_renderer(asset_ref: AssetRef, options: ViewerOptions, mut render: R) -> Self {
        render.set_auto_rotate(options.auto_rotate);
        Self {
            asset_ref,
            options,
            zoom: ZoomState::default(),
            playing: false,
            status: LoadStatus::Loading(loading::State::default()),
            render,
        }
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::ZoomIn => {
                self.zoom.zoom_in();
                self.render.invalidate();
            }
            Message::ZoomOut => {
                self.zoom.zoom_out();
                self.render.invalidate();
            }
            Message::Reset => {
                self.zoom.reset();
                self.render.reset();
            }
            Message::TogglePlay => {
                self.playing = !self.playing;
                self.render.set_animation_playing(self.playing);
            }
            Message::Canvas(Interaction::Orbit(delta)) => self.render.orbit(delta),
            Message::AssetLoaded { asset, result } => self.on_asset_loaded(asset, result),
            Message::ErrorState(message) => {
                if let LoadStatus::Failed(error) = &mut self.status {
                    error.handle(message);
                }
            }
            Message::Retry => {
                if matches!(self.status, LoadStatus::Failed(_)) {
                    log::debug!("retrying {}", self.asset_ref);
                    self.status = LoadStatus::Loading(loading::State::default());
                    return Effect::LoadAsset(self.asset_ref.clone());
                }
            }
        }
        Effect::None
    }

    fn on_asset_loaded(&mut self, asset: AssetRef, result: Result<Arc<SceneAsset>, AssetError>) {
        if asset != self.asset_ref || !matches!(self.status, LoadStatus::Loading(_)) {
            log::debug!("ignoring stale load result for {}", asset);
            return;
        }
        match result {
            Ok(scene) => {
                self.render.set_asset(scene);
                self.status = LoadStatus::Ready;
            }
            Err(err) => {
                log::warn!("viewer could not display {}: {}", asset, err);
                self.status = LoadStatus::Failed(error_state::State::new(&err));
            }
        }
    }

    /// Advances time-driven state by one frame of `delta` seconds.
    ///
    /// Long pauses between frames (window hidden, debugger) are clamped so
    /// the model does not jump.
    pub fn tick(&mut self, delta: f32) {
        let delta = delta.clamp(0.0, MAX_FRAME_DELTA_SECS);
        if let LoadStatus::Loading(spinner) = &mut self.status {
            spinner.tick(delta);
        }
        self.render.advance(delta);
    }

    /// Whether this viewer wants a redraw every frame.
    #[must_use]
    pub fn needs_frames(&self) -> bool {
        matches!(self.status, LoadStatus::Loading(_)) || self.render.is_animating()
    }

    #[must_use]
    pub fn zoom(&self) -> ZoomFactor {
        self.zoom.factor
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub fn auto_rotate(&self) -> bool {
        self.options.auto_rotate
    }

    #[must_use]
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    #[must_use]
    pub fn asset_ref(&self) -> &AssetRef {
        &self.asset_ref
    }

    #[must_use]
    pub fn options(&self) -> &ViewerOptions {
        &self.options
    }

    #[must_use]
    pub fn render(&self) -> &R {
        &self.render
    }
}

/// Resolves `asset` through the shared cache off the UI thread.
pub fn load<L: AssetLoader>(cache: Arc<AssetCache<L>>, asset: AssetRef) -> Task<Message> {
    let key = asset.clone();
    Task::perform(cache.load(asset), move |result| Message::AssetLoaded {
        asset: key,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_ZOOM_FACTOR, MIN_ZOOM_FACTOR};
    use crate::scene::primitives;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};
    use iced::Vector;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Reset,
        Playing(bool),
        AutoRotate(bool),
        Advance(f32),
        Orbit(Vector),
        SetAsset,
    }

    #[derive(Debug, Default)]
    struct Recorder {
        calls: Vec<Call>,
        has_asset: bool,
    }

    impl RenderControls for Recorder {
        fn reset(&mut self) {
            self.calls.push(Call::Reset);
        }

        fn set_animation_playing(&mut self, playing: bool) {
            self.calls.push(Call::Playing(playing));
        }

        fn set_auto_rotate(&mut self, enabled: bool) {
            self.calls.push(Call::AutoRotate(enabled));
        }

        fn advance(&mut self, delta: f32) {
            self.calls.push(Call::Advance(delta));
        }

        fn orbit(&mut self, delta: Vector) {
            self.calls.push(Call::Orbit(delta));
        }

        fn set_asset(&mut self, _asset: Arc<SceneAsset>) {
            self.has_asset = true;
            self.calls.push(Call::SetAsset);
        }

        fn is_animating(&self) -> bool {
            self.has_asset
        }
    }

    fn asset() -> AssetRef {
        AssetRef::new("builtin:cube")
    }

    fn recorded(options: ViewerOptions) -> State<Recorder> {
        State::with_renderer(asset(), options, Recorder::default())
    }

    fn loaded_cube() -> Message {
        Message::AssetLoaded {
            asset: asset(),
            result: Ok(Arc::new(primitives::build("cube").expect("cube builds"))),
        }
    }

    #[test]
    fn new_viewer_starts_paused_at_default_zoom() {
        let state = recorded(ViewerOptions::default());
        assert_abs_diff_eq!(state.zoom().value(), 1.0, epsilon = F32_EPSILON);
        assert!(!state.is_playing());
        assert!(matches!(state.status(), LoadStatus::Loading(_)));
        assert_eq!(state.render().calls, vec![Call::AutoRotate(false)]);
    }

    #[test]
    fn auto_rotate_option_reaches_renderer() {
        let state = recorded(ViewerOptions {
            auto_rotate: true,
            ..ViewerOptions::default()
        });
        assert!(state.auto_rotate());
        assert_eq!(state.render().calls, vec![Call::AutoRotate(true)]);
    }

    #[test]
    fn zoom_out_three_times_clamps_at_minimum() {
        let mut state = recorded(ViewerOptions::default());
        for _ in 0..3 {
            state.handle(Message::ZoomOut);
        }
        assert_abs_diff_eq!(state.zoom().value(), MIN_ZOOM_FACTOR, epsilon = F32_EPSILON);
    }

    #[test]
    fn zoom_in_clamps_at_maximum() {
        let mut state = recorded(ViewerOptions::default());
        for _ in 0..20 {
            state.handle(Message::ZoomIn);
        }
        assert_abs_diff_eq!(state.zoom().value(), MAX_ZOOM_FACTOR, epsilon = F32_EPSILON);
    }

    #[test]
    fn single_zoom_in_adds_one_step() {
        let mut state = recorded(ViewerOptions::default());
        state.handle(Message::ZoomIn);
        assert_abs_diff_eq!(state.zoom().value(), 1.2, epsilon = F32_EPSILON);
    }

    #[test]
    fn reset_restores_zoom_and_pose() {
        let mut state = recorded(ViewerOptions::default());
        state.handle(Message::ZoomIn);
        state.handle(Message::ZoomIn);
        state.handle(Message::Reset);

        assert_abs_diff_eq!(state.zoom().value(), 1.0, epsilon = F32_EPSILON);
        assert_eq!(state.render().calls.last(), Some(&Call::Reset));
    }

    #[test]
    fn toggle_play_flips_only_playing() {
        let mut state = recorded(ViewerOptions::default());
        state.handle(Message::ZoomIn);
        let zoom = state.zoom();

        state.handle(Message::TogglePlay);
        assert!(state.is_playing());
        state.handle(Message::TogglePlay);
        assert!(!state.is_playing());

        assert_eq!(state.zoom(), zoom);
        assert!(!state.auto_rotate());
        assert_eq!(
            state.render().calls[1..],
            [Call::Playing(true), Call::Playing(false)]
        );
    }

    #[test]
    fn tick_clamps_long_frames() {
        let mut state = recorded(ViewerOptions::default());
        state.tick(5.0);
        state.tick(-1.0);
        assert_eq!(
            state.render().calls[1..],
            [Call::Advance(MAX_FRAME_DELTA_SECS), Call::Advance(0.0)]
        );
    }

    #[test]
    fn canvas_drag_orbits_renderer() {
        let mut state = recorded(ViewerOptions::default());
        state.handle(Message::Canvas(Interaction::Orbit(Vector::new(3.0, -2.0))));
        assert_eq!(
            state.render().calls.last(),
            Some(&Call::Orbit(Vector::new(3.0, -2.0)))
        );
    }

    #[test]
    fn loaded_asset_makes_viewer_ready() {
        let mut state = recorded(ViewerOptions::default());
        assert!(state.needs_frames());

        state.handle(loaded_cube());

        assert_eq!(state.status(), &LoadStatus::Ready);
        assert!(state.render().calls.contains(&Call::SetAsset));
    }

    #[test]
    fn result_for_another_asset_is_ignored() {
        let mut state = recorded(ViewerOptions::default());
        state.handle(Message::AssetLoaded {
            asset: AssetRef::new("builtin:torus"),
            result: Err(AssetError::NoGeometry),
        });
        assert!(matches!(state.status(), LoadStatus::Loading(_)));
    }

    #[test]
    fn failure_shows_placeholder_and_retry_reloads() {
        let mut state = recorded(ViewerOptions::default());
        state.handle(Message::AssetLoaded {
            asset: asset(),
            result: Err(AssetError::Download("offline".into())),
        });

        let LoadStatus::Failed(error) = state.status() else {
            panic!("expected failed status");
        };
        assert_eq!(error.friendly_key(), "viewer-error-download");
        assert!(!state.needs_frames());

        state.handle(Message::ErrorState(error_state::Message::ToggleDetails));
        let LoadStatus::Failed(error) = state.status() else {
            panic!("expected failed status");
        };
        assert!(error.show_details());

        assert_eq!(state.handle(Message::Retry), Effect::LoadAsset(asset()));
        assert!(matches!(state.status(), LoadStatus::Loading(_)));
    }

    #[test]
    fn retry_is_ignored_unless_failed() {
        let mut state = recorded(ViewerOptions::default());
        assert_eq!(state.handle(Message::Retry), Effect::None);
    }

    #[test]
    fn auto_rotation_advances_yaw_monotonically() {
        let options = ViewerOptions {
            auto_rotate: true,
            ..ViewerOptions::default()
        };
        let mut state = State::new(asset(), options, &ViewerConfig::default());
        state.handle(loaded_cube());

        let mut last = state.render().camera().pose().yaw();
        for _ in 0..10 {
            state.tick(0.05);
            let yaw = state.render().camera().pose().yaw();
            assert!(yaw > last);
            last = yaw;
        }
        assert_abs_diff_eq!(last, 0.25, epsilon = 1e-4);
        assert!(!state.is_playing());
    }

    #[test]
    fn paused_clip_freezes_without_rewinding() {
        let mut state = State::new(asset(), ViewerOptions::default(), &ViewerConfig::default());
        state.handle(loaded_cube());

        state.handle(Message::TogglePlay);
        state.tick(0.05);
        state.tick(0.05);
        let frozen = state.render().playback().clip_time();
        assert!(frozen > 0.0);

        state.handle(Message::TogglePlay);
        state.tick(0.05);
        assert_abs_diff_eq!(
            state.render().playback().clip_time(),
            frozen,
            epsilon = F32_EPSILON
        );
    }
}
