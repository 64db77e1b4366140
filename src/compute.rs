//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `SessionState` (and, where needed, an RNG handle) and returns a brand-new
//! `SessionState`.  Side effects are limited to the injected RNG and a few
//! log records on phase transitions.

use std::collections::VecDeque;

use rand::Rng;
use thiserror::Error;

use crate::config::GameConfig;
use crate::entities::{
    ActorState, Enemy, EnemyKind, InputSnapshot, Player, Projectile, SessionPhase, SessionState,
    SoundCue,
};

// ── Session setup ─────────────────────────────────────────────────────────────

/// Startup precondition violations.  The tick itself is total; only session
/// construction can fail.
#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("enemy roster is empty, nobody to fight")]
    EmptyRoster,
    #[error("patrol bounds are inverted: min {min} >= max {max}")]
    InvalidPatrolBounds { min: f32, max: f32 },
    #[error("enemy attack percent {percent} exceeds 100")]
    InvalidAttackPercent { percent: u32 },
}

/// The stock campaign: three opponents, fielded in this order.
pub fn default_roster() -> Vec<EnemyKind> {
    vec![EnemyKind::Imp, EnemyKind::Ogre, EnemyKind::Warlock]
}

/// Build the initial session state, fielding the first enemy on the roster.
/// Fails fast on a config that could not run a session; everything after
/// this point is infallible.
pub fn init_session(
    config: GameConfig,
    roster: Vec<EnemyKind>,
) -> Result<SessionState, SessionError> {
    if config.patrol_min_x >= config.patrol_max_x {
        return Err(SessionError::InvalidPatrolBounds {
            min: config.patrol_min_x,
            max: config.patrol_max_x,
        });
    }
    // The attack trial is a chance in 100; gen_ratio rejects anything over that.
    if config.enemy_attack_percent > 100 {
        return Err(SessionError::InvalidAttackPercent {
            percent: config.enemy_attack_percent,
        });
    }

    let mut roster: VecDeque<EnemyKind> = roster.into();
    let first = roster.pop_front().ok_or(SessionError::EmptyRoster)?;

    let phase = if config.start_in_menu {
        SessionPhase::Menu
    } else {
        SessionPhase::Playing
    };

    Ok(SessionState {
        player: Player {
            x: config.player_spawn_x,
            y: config.player_spawn_y,
            vy: 0.0,
            on_ground: false,
            hp: config.player_hp,
            state: ActorState::Normal,
            attacking: false,
            attack_timer: 0,
            projectiles: Vec::new(),
        },
        enemy: spawn_enemy(first, &config),
        roster,
        events: Vec::new(),
        frame: 0,
        phase,
        config,
    })
}

/// Field a fresh opponent of the given kind at the fixed spawn point.
pub fn spawn_enemy(kind: EnemyKind, config: &GameConfig) -> Enemy {
    Enemy {
        kind,
        x: config.enemy_spawn_x,
        y: config.enemy_spawn_y,
        speed: config.enemy_speed,
        direction: 1.0,
        hp: config.enemy_hp,
        state: ActorState::Normal,
        attack_timer: 0,
        projectiles: Vec::new(),
    }
}

// ── Sprite selection ──────────────────────────────────────────────────────────

/// Sprite identifier for the player's current state.  The match is total:
/// adding a state without a sprite is a compile error.
pub fn player_sprite(player: &Player) -> &'static str {
    match player.state {
        ActorState::Normal => "player",
        ActorState::Run => "player_run",
        ActorState::Jump => "player_jump",
        ActorState::Attack => "player_attack",
        ActorState::Dead => "player_dead",
    }
}

/// Sprite identifier for an enemy.  Enemies never run or jump; those states
/// share the patrol sprite so the mapping stays total.
pub fn enemy_sprite(enemy: &Enemy) -> &'static str {
    use ActorState::{Attack, Dead, Jump, Normal, Run};
    match (&enemy.kind, &enemy.state) {
        (EnemyKind::Imp, Normal | Run | Jump) => "imp",
        (EnemyKind::Imp, Attack) => "imp_attack",
        (EnemyKind::Imp, Dead) => "imp_dead",
        (EnemyKind::Ogre, Normal | Run | Jump) => "ogre",
        (EnemyKind::Ogre, Attack) => "ogre_attack",
        (EnemyKind::Ogre, Dead) => "ogre_dead",
        (EnemyKind::Warlock, Normal | Run | Jump) => "warlock",
        (EnemyKind::Warlock, Attack) => "warlock_attack",
        (EnemyKind::Warlock, Dead) => "warlock_dead",
    }
}

/// True once an endgame display countdown has run out; the frontend should
/// tear down and exit.
pub fn exit_requested(state: &SessionState) -> bool {
    matches!(
        state.phase,
        SessionPhase::Won { ticks_left: 0 } | SessionPhase::Lost { ticks_left: 0 }
    )
}

// ── Per-tick update ───────────────────────────────────────────────────────────

/// Advance the session by one tick.  All randomness comes through `rng` so
/// callers control determinism (tests use a seeded RNG, usually with the
/// enemy attack percentage pinned to 0 or 100).
pub fn tick(state: &SessionState, input: &InputSnapshot, rng: &mut impl Rng) -> SessionState {
    let mut next = state.clone();
    next.frame += 1;
    next.events.clear();

    match next.phase {
        SessionPhase::Menu => {
            if input.start {
                log::info!("session started");
                next.phase = SessionPhase::Playing;
            }
        }
        SessionPhase::Playing => step_playing(&mut next, input, rng),
        // Endgame screens: everything is frozen, only the display countdown
        // runs.  The frontend exits once it reaches zero.
        SessionPhase::Won { ticks_left } => {
            next.phase = SessionPhase::Won {
                ticks_left: ticks_left.saturating_sub(1),
            };
        }
        SessionPhase::Lost { ticks_left } => {
            next.phase = SessionPhase::Lost {
                ticks_left: ticks_left.saturating_sub(1),
            };
        }
    }

    next
}

/// One tick of live combat, in fixed order: player, enemy, player shots vs
/// enemy, enemy shots vs player.  A win or loss transition ends the tick on
/// the spot; later steps do not run that tick.
fn step_playing(state: &mut SessionState, input: &InputSnapshot, rng: &mut impl Rng) {
    let cfg = state.config.clone();

    // ── 1. Player: attack trigger, then movement/physics ──────────────────
    let mut player = state.player.clone();
    if input.attack {
        player = apply_player_attack(player, &cfg, &mut state.events);
    }
    player = step_player(player, input, &cfg);

    // ── 2. Enemy: patrol, attack trial, countdown, shots ──────────────────
    let mut enemy = step_enemy(state.enemy.clone(), &cfg, rng);

    // ── 3. Player shots vs enemy ──────────────────────────────────────────
    // Walk the live list in fire order, consuming shots as they land.  The
    // current enemy can be replaced mid-scan; later shots in the same volley
    // are then tested against the replacement at its spawn point.
    let mut i = 0;
    while i < player.projectiles.len() {
        let shot = player.projectiles[i].clone();
        if !shot_hits(&shot, &cfg, enemy.x, enemy.y, cfg.enemy_width, cfg.enemy_height) {
            i += 1;
            continue;
        }
        player.projectiles.remove(i);
        enemy.hp -= cfg.shot_damage_to_enemy;
        if enemy.hp <= 0 {
            enemy.state = ActorState::Dead;
            log::info!("{:?} defeated, {} left on the roster", enemy.kind, state.roster.len());
            match state.roster.pop_front() {
                // In-flight shots of the defeated enemy are discarded with it.
                Some(kind) => enemy = spawn_enemy(kind, &cfg),
                None => {
                    log::info!("roster exhausted, session won");
                    state.events.push(SoundCue::Victory);
                    state.phase = SessionPhase::Won {
                        ticks_left: cfg.endgame_ticks,
                    };
                    break;
                }
            }
        }
    }

    // ── 4. Enemy shots vs player ──────────────────────────────────────────
    // Skipped outright if step 3 already ended the session.  A lethal hit
    // stops the scan mid-list; shots behind it stay in flight on the frozen
    // end screen.
    if state.phase == SessionPhase::Playing {
        let mut i = 0;
        while i < enemy.projectiles.len() {
            let shot = enemy.projectiles[i].clone();
            if !shot_hits(&shot, &cfg, player.x, player.y, cfg.player_width, cfg.player_height) {
                i += 1;
                continue;
            }
            enemy.projectiles.remove(i);
            player.hp -= cfg.shot_damage_to_player;
            if player.hp <= 0 {
                log::info!("player down, session lost");
                state.events.push(SoundCue::Defeat);
                state.phase = SessionPhase::Lost {
                    ticks_left: cfg.endgame_ticks,
                };
                break;
            }
            state.events.push(SoundCue::PlayerHit);
        }
    }

    state.player = player;
    state.enemy = enemy;
}

// ── Actor steps ───────────────────────────────────────────────────────────────

/// Fire a fireball: enter the attack pose, start its countdown and spawn a
/// rightward shot just above the player.  A no-op while a previous attack is
/// still running or once the player is dead.
fn apply_player_attack(player: Player, cfg: &GameConfig, events: &mut Vec<SoundCue>) -> Player {
    if player.attacking || player.state == ActorState::Dead {
        return player;
    }
    let mut p = player;
    p.state = ActorState::Attack;
    p.attacking = true;
    p.attack_timer = cfg.player_attack_ticks;
    p.projectiles.push(Projectile {
        x: p.x,
        y: p.y + cfg.player_shot_offset_y,
        speed: cfg.player_shot_speed,
    });
    events.push(SoundCue::Fireball);
    p
}

/// Player movement, physics, attack countdown and animation for one tick.
/// Order matters: movement, then gravity and the ground clamp, then the
/// countdown, then animation, with the dead override last.
fn step_player(player: Player, input: &InputSnapshot, cfg: &GameConfig) -> Player {
    let mut p = player;

    // Held directions; both at once cancel out.
    if input.left {
        p.x -= cfg.player_speed;
    }
    if input.right {
        p.x += cfg.player_speed;
    }
    p.x = p.x.clamp(0.0, cfg.arena_width);

    // Jump is only legal from the ground.
    if input.up && p.on_ground {
        p.vy = cfg.jump_impulse;
        p.on_ground = false;
    }

    p.vy += cfg.gravity;
    p.y += p.vy;
    if p.y > cfg.ground_y {
        p.y = cfg.ground_y;
        p.vy = 0.0;
        p.on_ground = true;
    }

    // Attack pose countdown; while it runs the pose wins over movement
    // animation.
    if p.attacking {
        p.attack_timer = p.attack_timer.saturating_sub(1);
        if p.attack_timer == 0 {
            p.attacking = false;
            p.state = ActorState::Normal;
        }
    }
    if !p.attacking {
        p.state = if !p.on_ground {
            ActorState::Jump
        } else if input.left || input.right {
            ActorState::Run
        } else {
            ActorState::Normal
        };
    }

    // Death overrides everything and never reverts.
    if p.hp <= 0 {
        p.state = ActorState::Dead;
    }

    p.projectiles = advance_shots(p.projectiles, cfg);
    p
}

/// Enemy patrol, random attack trial and countdown for one tick.  A dead
/// enemy freezes in place, but its shots already in flight keep moving.
fn step_enemy(enemy: Enemy, cfg: &GameConfig, rng: &mut impl Rng) -> Enemy {
    let mut e = enemy;

    if e.hp > 0 {
        e.x += e.speed * e.direction;
        if e.x > cfg.patrol_max_x || e.x < cfg.patrol_min_x {
            e.direction = -e.direction;
        }

        // Independent per-tick trial, so the gaps between attacks come out
        // geometric.  There is no attacking guard on this side: a hot streak
        // fires on consecutive ticks.
        if rng.gen_ratio(cfg.enemy_attack_percent, 100) {
            e.state = ActorState::Attack;
            e.attack_timer = cfg.enemy_attack_ticks;
            e.projectiles.push(Projectile {
                x: e.x,
                y: e.y,
                speed: cfg.enemy_shot_speed,
            });
        } else {
            e.state = ActorState::Normal;
        }
    }

    if e.attack_timer > 0 {
        e.attack_timer -= 1;
        if e.attack_timer == 0 {
            e.state = ActorState::Normal;
        }
    }

    if e.hp <= 0 {
        e.state = ActorState::Dead;
    }

    e.projectiles = advance_shots(e.projectiles, cfg);
    e
}

/// Move every shot by its per-tick speed and drop the ones that have left
/// the arena by more than the cull margin, so a miss cannot linger forever.
fn advance_shots(shots: Vec<Projectile>, cfg: &GameConfig) -> Vec<Projectile> {
    let lo = -cfg.shot_cull_margin;
    let hi = cfg.arena_width + cfg.shot_cull_margin;
    shots
        .into_iter()
        .filter_map(|shot| {
            let x = shot.x + shot.speed;
            if x < lo || x > hi {
                None
            } else {
                Some(Projectile { x, ..shot })
            }
        })
        .collect()
}

/// Axis-aligned overlap between a shot and an actor box, both centered on
/// their positions.  Edge contact does not count as a hit.
fn shot_hits(shot: &Projectile, cfg: &GameConfig, x: f32, y: f32, w: f32, h: f32) -> bool {
    (shot.x - x).abs() * 2.0 < cfg.shot_width + w && (shot.y - y).abs() * 2.0 < cfg.shot_height + h
}
