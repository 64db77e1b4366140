/// Tunable parameters for a session.
///
/// Everything that would otherwise be a magic number in the simulation lives
/// here; `Default` carries the stock arena.  Tests override individual fields
/// (most usefully `enemy_attack_percent`, which makes the enemy's random
/// attack trial deterministic at 0 or 100).

#[derive(Clone, Debug)]
pub struct GameConfig {
    // ── Arena ─────────────────────────────────────────────────────────────
    pub arena_width: f32,
    pub arena_height: f32,
    /// Ground line: actors standing on the ground sit at this y.
    pub ground_y: f32,
    /// Projectiles are culled once they are this far outside the arena.
    pub shot_cull_margin: f32,

    // ── Player ────────────────────────────────────────────────────────────
    pub player_spawn_x: f32,
    pub player_spawn_y: f32,
    pub player_hp: i32,
    /// Horizontal distance covered per tick while a direction is held.
    pub player_speed: f32,
    /// Upward (negative) vertical velocity applied on jump.
    pub jump_impulse: f32,
    /// Added to vertical velocity every tick.
    pub gravity: f32,
    /// Ticks the attack state/sprite lasts; also the re-fire lockout.
    pub player_attack_ticks: u32,
    pub player_shot_speed: f32,
    /// Vertical offset of a fireball's spawn point from the player's center.
    pub player_shot_offset_y: f32,

    // ── Enemy ─────────────────────────────────────────────────────────────
    pub enemy_spawn_x: f32,
    pub enemy_spawn_y: f32,
    pub enemy_hp: i32,
    pub enemy_speed: f32,
    /// Patrol turnaround bounds; direction reverses outside [min, max].
    pub patrol_min_x: f32,
    pub patrol_max_x: f32,
    /// Chance in 100 that the enemy opens fire on any given alive tick.
    pub enemy_attack_percent: u32,
    pub enemy_attack_ticks: u32,
    pub enemy_shot_speed: f32,

    // ── Combat ────────────────────────────────────────────────────────────
    pub shot_damage_to_enemy: i32,
    pub shot_damage_to_player: i32,

    // ── Collision boxes (AABB, centered on the entity position) ───────────
    pub player_width: f32,
    pub player_height: f32,
    pub enemy_width: f32,
    pub enemy_height: f32,
    pub shot_width: f32,
    pub shot_height: f32,

    // ── Session ───────────────────────────────────────────────────────────
    /// Ticks the win/loss screen stays up before the session asks to exit.
    pub endgame_ticks: u32,
    /// Gate the session behind a start screen, or drop straight into combat.
    pub start_in_menu: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: 800.0,
            arena_height: 600.0,
            ground_y: 550.0,
            shot_cull_margin: 50.0,

            player_spawn_x: 200.0,
            player_spawn_y: 550.0,
            player_hp: 200,
            player_speed: 5.0,
            jump_impulse: -10.0,
            gravity: 0.5,
            player_attack_ticks: 20,
            player_shot_speed: 5.0,
            player_shot_offset_y: -20.0,

            enemy_spawn_x: 600.0,
            enemy_spawn_y: 550.0,
            enemy_hp: 150,
            enemy_speed: 1.0,
            patrol_min_x: 500.0,
            patrol_max_x: 700.0,
            enemy_attack_percent: 2,
            enemy_attack_ticks: 15,
            enemy_shot_speed: -5.0,

            shot_damage_to_enemy: 25,
            shot_damage_to_player: 10,

            player_width: 60.0,
            player_height: 80.0,
            enemy_width: 60.0,
            enemy_height: 80.0,
            shot_width: 24.0,
            shot_height: 16.0,

            endgame_ticks: 60,
            start_in_menu: true,
        }
    }
}
