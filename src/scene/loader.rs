// SPDX-License-Identifier: MPL-2.0
//! Resolution of asset references into wireframe scenes.
//!
//! Supported references:
//!
//! - `builtin:<shape>` - procedural meshes from [`primitives`](super::primitives)
//! - `file://<path>` or a plain path - local `.gltf`/`.glb` files
//! - `http://` / `https://` - downloaded once into the asset cache directory,
//!   together with the relative buffer files a `.gltf` document references
//!
//! Parsing runs on the blocking thread pool; downloads are async. Loaded
//! assets are kept in a shared LRU cache so many viewers showing the same
//! reference resolve it once. Concurrent loads of one reference share a
//! single in-flight resolution.

use super::{
    primitives, AnimationClip, Channel, Keyframes, SceneAsset, SceneNode, WireMesh,
};
use crate::app::paths;
use crate::config::{ASSET_CACHE_CAPACITY, ASSET_DOWNLOAD_TIMEOUT_SECS};
use crate::content::AssetRef;
use crate::error::AssetError;
use glam::{Quat, Vec3};
use gltf::animation::util::ReadOutputs;
use gltf::animation::Interpolation;
use gltf::mesh::Mode;
use lru::LruCache;
use std::collections::{BTreeSet, HashMap};
use std::future::Future;
use std::num::NonZeroUsize;
use std::path::{Component, Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::OnceCell;

const BUILTIN_PREFIX: &str = "builtin:";
const FILE_PREFIX: &str = "file://";

/// Where an asset reference points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    Builtin(String),
    Local(PathBuf),
    Remote(String),
}

impl AssetSource {
    pub fn parse(asset: &AssetRef) -> Result<Self, AssetError> {
        let uri = asset.as_str().trim();
        if let Some(shape) = uri.strip_prefix(BUILTIN_PREFIX) {
            return Ok(Self::Builtin(shape.to_ascii_lowercase()));
        }
        if let Some(path) = uri.strip_prefix(FILE_PREFIX) {
            return Ok(Self::Local(PathBuf::from(path)));
        }
        match uri.split_once("://") {
            Some(("http" | "https", _)) => Ok(Self::Remote(uri.to_string())),
            Some((scheme, _)) => Err(AssetError::UnsupportedScheme(scheme.to_string())),
            None if uri.is_empty() => Err(AssetError::NotFound("empty asset reference".into())),
            None => Ok(Self::Local(PathBuf::from(uri))),
        }
    }
}

/// Resolves an asset reference into a scene.
pub trait AssetLoader: Send + Sync + 'static {
    fn load(
        &self,
        asset: &AssetRef,
    ) -> impl Future<Output = Result<SceneAsset, AssetError>> + Send;
}

/// Default loader: builtin shapes, glTF files and HTTP downloads.
#[derive(Debug, Clone, Default)]
pub struct GltfLoader {
    cache_dir: Option<PathBuf>,
}

impl GltfLoader {
    /// Loader downloading into the configured asset cache directory.
    #[must_use]
    pub fn new() -> Self {
        Self::with_cache_dir(paths::get_asset_cache_dir())
    }

    #[must_use]
    pub fn with_cache_dir(cache_dir: Option<PathBuf>) -> Self {
        Self { cache_dir }
    }

    /// Downloads `url` (and its relative buffers) unless already cached.
    async fn fetch(&self, url: &str) -> Result<PathBuf, AssetError> {
        let cache_dir = self
            .cache_dir
            .as_ref()
            .ok_or_else(|| AssetError::Io("no asset cache directory available".into()))?;

        let base = reqwest::Url::parse(url).map_err(|e| AssetError::Download(e.to_string()))?;
        let file_name = base
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .filter(|name| !name.is_empty())
            .unwrap_or("asset.gltf")
            .to_string();

        let asset_dir = cache_dir.join(blake3::hash(url.as_bytes()).to_hex().as_str());
        let main_path = asset_dir.join(&file_name);
        if main_path.exists() {
            log::debug!("asset cache hit for {}", url);
            return Ok(main_path);
        }

        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .timeout(Duration::from_secs(ASSET_DOWNLOAD_TIMEOUT_SECS))
            .user_agent(concat!("M3danStudio/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AssetError::Download(e.to_string()))?;

        let bytes = download(&client, base.as_str()).await?;

        // Buffers must sit next to the document before parsing.
        if !bytes.starts_with(b"glTF") {
            let document = gltf::Gltf::from_slice(&bytes)?;
            for buffer in document.buffers() {
                let gltf::buffer::Source::Uri(uri) = buffer.source() else {
                    continue;
                };
                if uri.starts_with("data:") {
                    continue;
                }
                let relative = safe_relative_path(uri)?;
                let buffer_url = base
                    .join(uri)
                    .map_err(|e| AssetError::Download(e.to_string()))?;
                let data = download(&client, buffer_url.as_str()).await?;
                write_atomic(&asset_dir.join(relative), &data)?;
            }
        }

        write_atomic(&main_path, &bytes)?;
        log::info!("downloaded {} ({} bytes)", url, bytes.len());
        Ok(main_path)
    }
}

impl AssetLoader for GltfLoader {
    async fn load(&self, asset: &AssetRef) -> Result<SceneAsset, AssetError> {
        let path = match AssetSource::parse(asset)? {
            AssetSource::Builtin(shape) => {
                return primitives::build(&shape)
                    .ok_or_else(|| AssetError::NotFound(format!("builtin shape '{shape}'")));
            }
            AssetSource::Local(path) => path,
            AssetSource::Remote(url) => self.fetch(&url).await?,
        };

        tokio::task::spawn_blocking(move || parse_gltf_file(&path))
            .await
            .map_err(|e| AssetError::Io(e.to_string()))?
    }
}

async fn download(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, AssetError> {
    use futures_util::StreamExt;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| AssetError::Download(e.to_string()))?;

    if response.status() == reqwest::StatusCode::NOT_FOUND {
        return Err(AssetError::NotFound(url.to_string()));
    }
    if !response.status().is_success() {
        return Err(AssetError::Download(format!(
            "HTTP status: {}",
            response.status()
        )));
    }

    let mut data = Vec::with_capacity(
        usize::try_from(response.content_length().unwrap_or(0)).unwrap_or_default(),
    );
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| AssetError::Download(e.to_string()))?;
        data.extend_from_slice(&chunk);
    }
    Ok(data)
}

/// Rejects buffer URIs that would escape the asset directory.
fn safe_relative_path(uri: &str) -> Result<PathBuf, AssetError> {
    let path = PathBuf::from(uri);
    let escapes = path
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes || uri.contains("://") {
        return Err(AssetError::Parse(format!("unsupported buffer uri: {uri}")));
    }
    Ok(path)
}

/// Writes through a partial file unique to this writer, then renames it
/// into place.
fn write_atomic(path: &Path, data: &[u8]) -> Result<(), AssetError> {
    static NEXT_PARTIAL: AtomicU64 = AtomicU64::new(0);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file_name = path
        .file_name()
        .map_or_else(|| "asset".into(), |name| name.to_string_lossy());
    let partial = path.with_file_name(format!(
        "{}.{}-{}.part",
        file_name,
        std::process::id(),
        NEXT_PARTIAL.fetch_add(1, Ordering::Relaxed)
    ));
    std::fs::write(&partial, data)?;
    if let Err(err) = std::fs::rename(&partial, path) {
        let _ = std::fs::remove_file(&partial);
        return Err(err.into());
    }
    Ok(())
}

/// Parses a `.gltf` or `.glb` file into a wireframe scene.
pub fn parse_gltf_file(path: &Path) -> Result<SceneAsset, AssetError> {
    let gltf::Gltf { document, blob } = gltf::Gltf::open(path)?;
    let buffers = gltf::import_buffers(&document, path.parent(), blob)?;
    build_scene(&document, &buffers)
}

fn build_scene(
    document: &gltf::Document,
    buffers: &[gltf::buffer::Data],
) -> Result<SceneAsset, AssetError> {
    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .ok_or(AssetError::NoGeometry)?;

    let mut nodes = Vec::new();
    let mut meshes = Vec::new();
    let mut node_index = HashMap::new();
    for root in scene.nodes() {
        visit_node(&root, None, buffers, &mut nodes, &mut meshes, &mut node_index);
    }

    if meshes.iter().all(|mesh: &WireMesh| mesh.edges.is_empty()) {
        return Err(AssetError::NoGeometry);
    }

    let clip = document
        .animations()
        .next()
        .and_then(|animation| read_clip(&animation, buffers, &node_index));

    Ok(SceneAsset::new(nodes, meshes, clip))
}

fn visit_node(
    node: &gltf::Node,
    parent: Option<usize>,
    buffers: &[gltf::buffer::Data],
    nodes: &mut Vec<SceneNode>,
    meshes: &mut Vec<WireMesh>,
    node_index: &mut HashMap<usize, usize>,
) {
    let (translation, rotation, scale) = node.transform().decomposed();
    let index = nodes.len();
    nodes.push(SceneNode {
        parent,
        translation: Vec3::from(translation),
        rotation: Quat::from_array(rotation),
        scale: Vec3::from(scale),
    });
    node_index.insert(node.index(), index);

    if let Some(mesh) = node.mesh() {
        for primitive in mesh.primitives() {
            let reader =
                primitive.reader(|buffer| buffers.get(buffer.index()).map(|data| data.0.as_slice()));
            let Some(positions) = reader.read_positions() else {
                continue;
            };
            let positions: Vec<Vec3> = positions.map(Vec3::from).collect();
            let indices: Vec<u32> = match reader.read_indices() {
                Some(indices) => indices.into_u32().collect(),
                None => (0..u32::try_from(positions.len()).unwrap_or(u32::MAX)).collect(),
            };

            let edges = edges_for_mode(primitive.mode(), &indices);
            if edges.is_empty() {
                log::debug!("skipping primitive without edges ({:?})", primitive.mode());
                continue;
            }
            meshes.push(WireMesh {
                node: index,
                positions,
                edges,
            });
        }
    }

    for child in node.children() {
        visit_node(&child, Some(index), buffers, nodes, meshes, node_index);
    }
}

/// Unique undirected edges of a primitive.
fn edges_for_mode(mode: Mode, indices: &[u32]) -> Vec<[u32; 2]> {
    let mut edges = BTreeSet::new();
    let mut add = |a: u32, b: u32| {
        if a != b {
            edges.insert([a.min(b), a.max(b)]);
        }
    };

    match mode {
        Mode::Triangles => {
            for tri in indices.chunks_exact(3) {
                add(tri[0], tri[1]);
                add(tri[1], tri[2]);
                add(tri[2], tri[0]);
            }
        }
        Mode::TriangleStrip => {
            for tri in indices.windows(3) {
                add(tri[0], tri[1]);
                add(tri[1], tri[2]);
                add(tri[2], tri[0]);
            }
        }
        Mode::TriangleFan => {
            if let Some((&hub, rest)) = indices.split_first() {
                for pair in rest.windows(2) {
                    add(hub, pair[0]);
                    add(pair[0], pair[1]);
                    add(pair[1], hub);
                }
            }
        }
        Mode::Lines => {
            for line in indices.chunks_exact(2) {
                add(line[0], line[1]);
            }
        }
        Mode::LineStrip | Mode::LineLoop => {
            for line in indices.windows(2) {
                add(line[0], line[1]);
            }
            if mode == Mode::LineLoop {
                if let (Some(&first), Some(&last)) = (indices.first(), indices.last()) {
                    add(last, first);
                }
            }
        }
        Mode::Points => {}
    }

    edges.into_iter().collect()
}

fn read_clip(
    animation: &gltf::Animation,
    buffers: &[gltf::buffer::Data],
    node_index: &HashMap<usize, usize>,
) -> Option<AnimationClip> {
    let mut channels = Vec::new();
    let mut duration: f32 = 0.0;

    for channel in animation.channels() {
        let Some(&node) = node_index.get(&channel.target().node().index()) else {
            continue;
        };
        let reader =
            channel.reader(|buffer| buffers.get(buffer.index()).map(|data| data.0.as_slice()));
        let Some(inputs) = reader.read_inputs() else {
            continue;
        };
        let times: Vec<f32> = inputs.collect();
        let cubic = channel.sampler().interpolation() == Interpolation::CubicSpline;

        let keyframes = match reader.read_outputs() {
            Some(ReadOutputs::Translations(values)) => {
                Keyframes::Translation(spline_values(values.map(Vec3::from).collect(), cubic))
            }
            Some(ReadOutputs::Rotations(values)) => Keyframes::Rotation(spline_values(
                values.into_f32().map(Quat::from_array).collect(),
                cubic,
            )),
            Some(ReadOutputs::Scales(values)) => {
                Keyframes::Scale(spline_values(values.map(Vec3::from).collect(), cubic))
            }
            Some(ReadOutputs::MorphTargetWeights(_)) | None => continue,
        };

        if let Some(last) = times.last() {
            duration = duration.max(*last);
        }
        channels.push(Channel {
            node,
            times,
            keyframes,
        });
    }

    if channels.is_empty() {
        return None;
    }
    Some(AnimationClip {
        name: animation.name().map(String::from),
        duration,
        channels,
    })
}

/// Cubic spline outputs store (in-tangent, value, out-tangent) triples.
fn spline_values<T: Copy>(values: Vec<T>, cubic: bool) -> Vec<T> {
    if cubic {
        values.chunks_exact(3).map(|triple| triple[1]).collect()
    } else {
        values
    }
}

/// Shared cache of loaded assets in front of a loader.
pub struct AssetCache<L = GltfLoader> {
    loader: L,
    entries: Mutex<LruCache<AssetRef, Arc<SceneAsset>>>,
    in_flight: Mutex<HashMap<AssetRef, Arc<OnceCell<Arc<SceneAsset>>>>>,
}

impl<L> std::fmt::Debug for AssetCache<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetCache")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl Default for AssetCache<GltfLoader> {
    fn default() -> Self {
        Self::new(GltfLoader::new(), ASSET_CACHE_CAPACITY)
    }
}

impl<L> AssetCache<L> {
    #[must_use]
    pub fn new(loader: L, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            loader,
            entries: Mutex::new(LruCache::new(capacity)),
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    /// Returns a cached asset without loading.
    pub fn get(&self, asset: &AssetRef) -> Option<Arc<SceneAsset>> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(asset)
            .cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<L: AssetLoader> AssetCache<L> {
    /// Resolves `asset`, consulting the cache first.
    ///
    /// Callers racing on the same reference wait for one load instead of
    /// starting their own.
    pub async fn load(self: Arc<Self>, asset: AssetRef) -> Result<Arc<SceneAsset>, AssetError> {
        if let Some(hit) = self.get(&asset) {
            return Ok(hit);
        }

        let cell = {
            let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(in_flight.entry(asset.clone()).or_default())
        };

        let result = cell
            .get_or_try_init(|| self.resolve(&asset))
            .await
            .cloned();

        let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        if in_flight
            .get(&asset)
            .is_some_and(|current| Arc::ptr_eq(current, &cell))
        {
            in_flight.remove(&asset);
        }
        result
    }

    async fn resolve(&self, asset: &AssetRef) -> Result<Arc<SceneAsset>, AssetError> {
        // A load that finished between the cache check and joining.
        if let Some(hit) = self.get(asset) {
            return Ok(hit);
        }

        let scene = match self.loader.load(asset).await {
            Ok(scene) => Arc::new(scene),
            Err(err) => {
                log::warn!("failed to load {}: {}", asset, err);
                return Err(err);
            }
        };
        log::debug!("loaded {} ({} edges)", asset, scene.edge_count());

        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .put(asset.clone(), Arc::clone(&scene));
        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::tempdir;

    fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name)
    }

    #[test]
    fn parse_recognizes_every_scheme() {
        assert_eq!(
            AssetSource::parse(&AssetRef::new("builtin:Cube")),
            Ok(AssetSource::Builtin("cube".into()))
        );
        assert_eq!(
            AssetSource::parse(&AssetRef::new("file:///tmp/a.glb")),
            Ok(AssetSource::Local(PathBuf::from("/tmp/a.glb")))
        );
        assert_eq!(
            AssetSource::parse(&AssetRef::new("models/a.gltf")),
            Ok(AssetSource::Local(PathBuf::from("models/a.gltf")))
        );
        assert_eq!(
            AssetSource::parse(&AssetRef::new("https://example.com/a.gltf")),
            Ok(AssetSource::Remote("https://example.com/a.gltf".into()))
        );
        assert_eq!(
            AssetSource::parse(&AssetRef::new("ftp://example.com/a.gltf")),
            Err(AssetError::UnsupportedScheme("ftp".into()))
        );
    }

    #[test]
    fn buffer_uris_cannot_escape_asset_dir() {
        assert!(safe_relative_path("scene.bin").is_ok());
        assert!(safe_relative_path("buffers/scene.bin").is_ok());
        assert!(safe_relative_path("../secret.bin").is_err());
        assert!(safe_relative_path("/etc/passwd").is_err());
    }

    #[test]
    fn triangle_edges_are_deduplicated() {
        let edges = edges_for_mode(Mode::Triangles, &[0, 1, 2, 2, 1, 3]);
        assert_eq!(edges, vec![[0, 1], [0, 2], [1, 2], [1, 3], [2, 3]]);
    }

    #[test]
    fn line_loop_closes() {
        let edges = edges_for_mode(Mode::LineLoop, &[0, 1, 2]);
        assert_eq!(edges, vec![[0, 1], [0, 2], [1, 2]]);
    }

    #[test]
    fn cubic_outputs_keep_middle_value() {
        assert_eq!(spline_values(vec![9, 1, 9, 8, 2, 8], true), vec![1, 2]);
        assert_eq!(spline_values(vec![1, 2], false), vec![1, 2]);
    }

    #[test]
    fn parses_fixture_with_hierarchy_and_clip() {
        let asset = parse_gltf_file(&fixture("pyramid.gltf")).expect("fixture should parse");
        assert_eq!(asset.nodes.len(), 2);
        assert_eq!(asset.nodes[1].parent, Some(0));
        assert_eq!(asset.edge_count(), 6);
        let clip = asset.clip.as_ref().expect("fixture has an animation");
        assert_eq!(clip.name.as_deref(), Some("spin"));
        assert_eq!(clip.duration, 2.0);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempdir().expect("failed to create temp dir");
        let result = parse_gltf_file(&dir.path().join("absent.gltf"));
        assert!(matches!(result, Err(AssetError::NotFound(_))));
    }

    #[test]
    fn garbage_file_is_parse_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("broken.gltf");
        std::fs::write(&path, "{ not json").expect("failed to write file");
        assert!(matches!(parse_gltf_file(&path), Err(AssetError::Parse(_))));
    }

    #[tokio::test]
    async fn builtin_and_local_assets_load() {
        let loader = GltfLoader::with_cache_dir(None);
        let cube = loader
            .load(&AssetRef::new("builtin:cube"))
            .await
            .expect("cube should load");
        assert_eq!(cube.edge_count(), 12);

        let uri = format!("file://{}", fixture("pyramid.gltf").display());
        let pyramid = loader
            .load(&AssetRef::new(uri))
            .await
            .expect("fixture should load");
        assert_eq!(pyramid.edge_count(), 6);

        let unknown = loader.load(&AssetRef::new("builtin:teapot")).await;
        assert!(matches!(unknown, Err(AssetError::NotFound(_))));
    }

    #[tokio::test]
    async fn remote_asset_without_cache_dir_fails_before_network() {
        let loader = GltfLoader::with_cache_dir(None);
        let result = loader
            .load(&AssetRef::new("https://example.invalid/a.gltf"))
            .await;
        assert!(matches!(result, Err(AssetError::Io(_))));
    }

    struct CountingLoader(AtomicUsize);

    impl AssetLoader for CountingLoader {
        async fn load(&self, asset: &AssetRef) -> Result<SceneAsset, AssetError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            GltfLoader::with_cache_dir(None).load(asset).await
        }
    }

    #[tokio::test]
    async fn cache_resolves_each_reference_once() {
        let cache = Arc::new(AssetCache::new(CountingLoader(AtomicUsize::new(0)), 4));
        let asset = AssetRef::new("builtin:octahedron");

        let first = Arc::clone(&cache).load(asset.clone()).await.expect("loads");
        let second = Arc::clone(&cache).load(asset.clone()).await.expect("loads");

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.loader.0.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len(), 1);
    }

    struct SlowLoader(AtomicUsize);

    impl AssetLoader for SlowLoader {
        async fn load(&self, asset: &AssetRef) -> Result<SceneAsset, AssetError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;
            GltfLoader::with_cache_dir(None).load(asset).await
        }
    }

    #[tokio::test]
    async fn concurrent_loads_share_one_resolution() {
        let cache = Arc::new(AssetCache::new(SlowLoader(AtomicUsize::new(0)), 4));
        let asset = AssetRef::new("builtin:helmet");

        let loads = (0..6).map(|_| Arc::clone(&cache).load(asset.clone()));
        let results = futures_util::future::join_all(loads).await;

        let scenes: Vec<_> = results
            .into_iter()
            .map(|result| result.expect("loads"))
            .collect();
        assert!(scenes.iter().all(|scene| Arc::ptr_eq(scene, &scenes[0])));
        assert_eq!(cache.loader.0.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len(), 1);
        assert!(cache.in_flight.lock().expect("lock").is_empty());
    }

    #[test]
    fn atomic_write_leaves_no_partial_files() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("nested").join("scene.gltf");

        write_atomic(&path, b"first").expect("first write");
        write_atomic(&path, b"second").expect("second write");

        assert_eq!(std::fs::read(&path).expect("read back"), b"second");
        let entries = std::fs::read_dir(path.parent().expect("parent"))
            .expect("list dir")
            .count();
        assert_eq!(entries, 1);
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let cache = Arc::new(AssetCache::new(CountingLoader(AtomicUsize::new(0)), 4));
        let asset = AssetRef::new("builtin:teapot");

        assert!(Arc::clone(&cache).load(asset.clone()).await.is_err());
        assert!(Arc::clone(&cache).load(asset).await.is_err());
        assert_eq!(cache.loader.0.load(Ordering::SeqCst), 2);
        assert!(cache.is_empty());
    }
}
