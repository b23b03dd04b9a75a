//! Engine-independent parallax core: continuous layer offset plus the
//! circular tile recycler used for infinite horizontal scrolling.
//!
//! Tiles live in fixed slots. Only the `left_index`/`right_index` cursors
//! move when a tile wraps, so a recycle is O(1) and never re-sorts.

use std::cmp::Ordering;

use bevy::math::Vec2;
use thiserror::Error;

/// Tile spacing below which recycling is skipped.
pub const DEFAULT_MIN_TILE_SPACING: f32 = 0.05;

/// Minimum tile count for seamless wraparound.
pub const MIN_SEAMLESS_TILES: usize = 3;

/// Recoverable setup conditions. Logged, never fatal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScrollWarning {
    #[error("incorrect number of scrolling tiles: expected >= 3, got {0}")]
    TooFewTiles(usize),
    #[error("tile spacing {spacing} is below {min}, infinite scrolling disabled")]
    SpacingTooSmall { spacing: f32, min: f32 },
}

/// Camera position and horizontal visible half-width for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSample {
    pub position: Vec2,
    pub half_width: f32,
}

impl CameraSample {
    pub fn new(position: Vec2, half_width: f32) -> Self {
        Self {
            position,
            half_width,
        }
    }

    pub fn left_edge(&self) -> f32 {
        self.position.x - self.half_width
    }

    pub fn right_edge(&self) -> f32 {
        self.position.x + self.half_width
    }
}

/// Per-layer movement parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxParams {
    /// 0 keeps the layer fixed in world space, 1 moves it with the camera.
    pub speed_x: f32,
    pub speed_y: f32,
    /// Move against the camera (foreground elements).
    pub invert: bool,
    pub infinite_scroll: bool,
    pub min_tile_spacing: f32,
}

impl Default for ParallaxParams {
    fn default() -> Self {
        Self {
            speed_x: 0.0,
            speed_y: 0.0,
            invert: false,
            infinite_scroll: false,
            min_tile_spacing: DEFAULT_MIN_TILE_SPACING,
        }
    }
}

impl ParallaxParams {
    pub fn direction(&self) -> f32 {
        if self.invert { -1.0 } else { 1.0 }
    }

    /// Continuous parallax offset for a camera displacement.
    pub fn layer_delta(&self, distance: Vec2) -> Vec2 {
        distance * Vec2::new(self.speed_x, self.speed_y) * self.direction()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile<K> {
    pub key: K,
    /// Position relative to the owning layer.
    pub position: Vec2,
}

/// Tiles sorted by x at setup. Slot order never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct TileSet<K> {
    slots: Vec<Tile<K>>,
    spacing: f32,
}

impl<K> Default for TileSet<K> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            spacing: 0.0,
        }
    }
}

impl<K> TileSet<K> {
    /// Sort `tiles` by x ascending and derive spacing from the first pair.
    pub fn from_unsorted(tiles: impl IntoIterator<Item = (K, Vec2)>) -> Self {
        let mut slots: Vec<Tile<K>> = tiles
            .into_iter()
            .map(|(key, position)| Tile { key, position })
            .collect();
        slots.sort_by(|a, b| a.position.x.total_cmp(&b.position.x));

        let spacing = match slots.as_slice() {
            [first, second, ..] => (second.position.x - first.position.x).abs(),
            _ => 0.0,
        };

        Self { slots, spacing }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Distance a recycled tile jumps: one full strip width.
    pub fn jump(&self) -> f32 {
        self.slots.len() as f32 * self.spacing
    }

    pub fn get(&self, slot: usize) -> Option<&Tile<K>> {
        self.slots.get(slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile<K>> {
        self.slots.iter()
    }

    /// Overwrite slot positions from live data. Keys without a position keep theirs.
    pub fn refresh(&mut self, mut lookup: impl FnMut(&K) -> Option<Vec2>) {
        for tile in &mut self.slots {
            if let Some(position) = lookup(&tile.key) {
                tile.position = position;
            }
        }
    }

    pub fn diagnose(&self, min_tile_spacing: f32) -> Vec<ScrollWarning> {
        let mut warnings = Vec::new();
        if self.len() < MIN_SEAMLESS_TILES {
            warnings.push(ScrollWarning::TooFewTiles(self.len()));
        }
        if self.spacing < min_tile_spacing {
            warnings.push(ScrollWarning::SpacingTooSmall {
                spacing: self.spacing,
                min: min_tile_spacing,
            });
        }
        warnings
    }

    fn shift_x(&mut self, slot: usize, dx: f32) {
        if let Some(tile) = self.slots.get_mut(slot) {
            tile.position.x += dx;
        }
    }
}

/// Cursor pair over a `TileSet`: which slots are logically leftmost and rightmost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub left_index: usize,
    pub right_index: usize,
}

impl ScrollState {
    pub fn new(tile_count: usize) -> Self {
        Self {
            left_index: 0,
            right_index: tile_count.saturating_sub(1),
        }
    }

    /// Rightmost tile became leftmost.
    fn wrap_left(&mut self, tile_count: usize) {
        self.left_index = self.right_index;
        self.right_index = match self.right_index {
            0 => tile_count - 1,
            i => i - 1,
        };
    }

    /// Leftmost tile became rightmost.
    fn wrap_right(&mut self, tile_count: usize) {
        self.right_index = self.left_index;
        self.left_index = (self.left_index + 1) % tile_count;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

/// Instruction to move one tile by `shift_x` along x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecycleCommand<K> {
    pub tile: K,
    pub slot: usize,
    pub direction: ScrollDirection,
    pub shift_x: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome<K> {
    pub layer_delta: Vec2,
    pub recycle: Option<RecycleCommand<K>>,
}

impl<K> TickOutcome<K> {
    pub fn idle() -> Self {
        Self {
            layer_delta: Vec2::ZERO,
            recycle: None,
        }
    }
}

/// Build a fresh tile set and cursor pair.
pub fn setup<K>(tiles: impl IntoIterator<Item = (K, Vec2)>) -> (TileSet<K>, ScrollState) {
    let tile_set = TileSet::from_unsorted(tiles);
    let state = ScrollState::new(tile_set.len());
    (tile_set, state)
}

/// Advance one frame.
///
/// `layer_origin` is the layer's world position before this tick's delta is
/// applied; tile positions are relative to it. The recycled tile is already
/// moved inside `tiles` when a command is returned.
pub fn tick<K: Copy>(
    current: &CameraSample,
    previous: &CameraSample,
    params: &ParallaxParams,
    tiles: &mut TileSet<K>,
    state: &mut ScrollState,
    layer_origin: Vec2,
) -> TickOutcome<K> {
    let distance = current.position - previous.position;
    let layer_delta = params.layer_delta(distance);

    let recycle = if params.infinite_scroll && tiles.spacing() >= params.min_tile_spacing {
        let origin_x = layer_origin.x + layer_delta.x;
        recycle(current, distance.x, origin_x, tiles, state)
    } else {
        None
    };

    TickOutcome {
        layer_delta,
        recycle,
    }
}

fn recycle<K: Copy>(
    camera: &CameraSample,
    distance_x: f32,
    origin_x: f32,
    tiles: &mut TileSet<K>,
    state: &mut ScrollState,
) -> Option<RecycleCommand<K>> {
    let count = tiles.len();
    let left = tiles.get(state.left_index)?;
    let right = tiles.get(state.right_index)?;
    let left_x = origin_x + left.position.x;
    let right_x = origin_x + right.position.x;

    let direction = match distance_x.partial_cmp(&0.0) {
        Some(Ordering::Less) if camera.left_edge() < left_x => ScrollDirection::Left,
        Some(Ordering::Greater) if camera.right_edge() > right_x => ScrollDirection::Right,
        _ => return None,
    };

    let (slot, tile, shift_x) = match direction {
        ScrollDirection::Left => (state.right_index, right.key, -tiles.jump()),
        ScrollDirection::Right => (state.left_index, left.key, tiles.jump()),
    };
    tiles.shift_x(slot, shift_x);
    match direction {
        ScrollDirection::Left => state.wrap_left(count),
        ScrollDirection::Right => state.wrap_right(count),
    }

    Some(RecycleCommand {
        tile,
        slot,
        direction,
        shift_x,
    })
}

/// Stateful wrapper owning params, tiles, cursors and the previous camera sample.
#[derive(Debug, Clone)]
pub struct ScrollingParallaxEngine<K> {
    params: ParallaxParams,
    tiles: TileSet<K>,
    state: ScrollState,
    previous: Option<Vec2>,
    initialized: bool,
    source_enabled: bool,
}

impl<K: Copy> ScrollingParallaxEngine<K> {
    pub fn new(params: ParallaxParams) -> Self {
        Self {
            params,
            tiles: TileSet::default(),
            state: ScrollState::default(),
            previous: None,
            initialized: false,
            source_enabled: true,
        }
    }

    pub fn params(&self) -> &ParallaxParams {
        &self.params
    }

    pub fn tiles(&self) -> &TileSet<K> {
        &self.tiles
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Replace params; setup runs again on the next frame and the camera
    /// position is re-sampled from scratch.
    pub fn set_params(&mut self, params: ParallaxParams) {
        self.params = params;
        self.initialized = false;
        self.previous = None;
    }

    /// True when setup has never run or the tile count changed under infinite scroll.
    pub fn needs_setup(&self, tile_count: usize) -> bool {
        !self.initialized || (self.params.infinite_scroll && self.tiles.len() != tile_count)
    }

    /// (Re)build scrolling state. Without infinite scroll the tile set is cleared.
    ///
    /// `previous_camera` overrides the last sampled camera position. Pass
    /// `None` on a rebuild so this frame's camera movement is not lost.
    pub fn setup(
        &mut self,
        tiles: impl IntoIterator<Item = (K, Vec2)>,
        previous_camera: Option<Vec2>,
    ) -> Vec<ScrollWarning> {
        self.initialized = true;
        if previous_camera.is_some() {
            self.previous = previous_camera;
        }

        if !self.params.infinite_scroll {
            self.tiles = TileSet::default();
            self.state = ScrollState::default();
            return Vec::new();
        }

        let (tiles, state) = setup(tiles);
        self.tiles = tiles;
        self.state = state;
        self.tiles.diagnose(self.params.min_tile_spacing)
    }

    pub fn refresh_tiles(&mut self, lookup: impl FnMut(&K) -> Option<Vec2>) {
        self.tiles.refresh(lookup);
    }

    /// Track the source's enabled flag. On a rising edge the previous camera
    /// position is reset so the first active frame does not jump.
    pub fn sync_source(&mut self, enabled: bool, camera_position: Vec2) -> bool {
        if enabled && !self.source_enabled {
            self.previous = Some(camera_position);
        }
        self.source_enabled = enabled;
        enabled
    }

    /// Advance one frame. No camera means no movement.
    pub fn advance(&mut self, camera: Option<&CameraSample>, layer_origin: Vec2) -> TickOutcome<K> {
        let Some(camera) = camera else {
            return TickOutcome::idle();
        };

        let previous = self.previous.replace(camera.position).unwrap_or(camera.position);
        let previous = CameraSample::new(previous, camera.half_width);
        tick(
            camera,
            &previous,
            &self.params,
            &mut self.tiles,
            &mut self.state,
            layer_origin,
        )
    }
}
