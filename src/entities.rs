//! All game entity types: pure data, no logic.

use std::collections::VecDeque;

use crate::config::GameConfig;

/// Animation/combat state tag shared by both actor kinds.  The player uses
/// all five; enemies only ever take `Normal`, `Attack` and `Dead`.
#[derive(Clone, Debug, PartialEq)]
pub enum ActorState {
    Normal,
    Run,
    Jump,
    Attack,
    Dead,
}

#[derive(Clone, Debug, PartialEq)]
pub enum EnemyKind {
    Imp,
    Ogre,
    Warlock,
}

/// Where the session currently is.  The endgame variants carry the number of
/// ticks the result screen has left before the process should exit.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionPhase {
    Menu,
    Playing,
    Won { ticks_left: u32 },
    Lost { ticks_left: u32 },
}

/// Fire-and-forget audio triggers emitted by a tick.  The frontend decides
/// what playback means; the simulation never waits on it.
#[derive(Clone, Debug, PartialEq)]
pub enum SoundCue {
    /// The player launched a fireball.
    Fireball,
    /// The player took a non-lethal hit.
    PlayerHit,
    /// The roster is exhausted.
    Victory,
    /// The player's hp reached zero.
    Defeat,
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// One tick's worth of input: held directions plus edge-triggered actions.
#[derive(Clone, Debug, Default)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    /// Attack key went down this tick.
    pub attack: bool,
    /// Start key went down this tick (only meaningful on the menu).
    pub start: bool,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// A fireball in flight.  Speed is per tick; its sign encodes direction.
#[derive(Clone, Debug)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
}

// ── Actors ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    /// Vertical velocity; positive is downward.
    pub vy: f32,
    pub on_ground: bool,
    /// May go negative on the killing hit; the dead transition reads <= 0.
    pub hp: i32,
    pub state: ActorState,
    pub attacking: bool,
    /// Ticks left in the current attack pose.
    pub attack_timer: u32,
    /// Fireballs this actor has launched, oldest first.
    pub projectiles: Vec<Projectile>,
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    /// Patrol heading: 1.0 walks right, -1.0 walks left.
    pub direction: f32,
    pub hp: i32,
    pub state: ActorState,
    pub attack_timer: u32,
    pub projectiles: Vec<Projectile>,
}

// ── Session state ─────────────────────────────────────────────────────────────

/// The whole session in one value.  `compute::tick` takes a reference and
/// returns the successor state; there are no session globals.
#[derive(Clone, Debug)]
pub struct SessionState {
    pub config: GameConfig,
    pub phase: SessionPhase,
    pub player: Player,
    /// The one current opponent.  Stays populated after its defeat so the
    /// death pose can render through the win screen.
    pub enemy: Enemy,
    /// Enemy kinds not yet fielded, in spawn order.
    pub roster: VecDeque<EnemyKind>,
    /// Sound cues emitted by the most recent tick.
    pub events: Vec<SoundCue>,
    pub frame: u64,
}
