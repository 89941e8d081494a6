// Grid and world units
pub const TILE_SIZE: f64 = 48.0;

// Movement speeds (world units per second)
pub const PLAYER_SPEED: f64 = 250.0;
pub const ENEMY_SPEED: f64 = 50.0;
pub const KNIFE_SPEED: f64 = 400.0;
pub const KNOCKBACK_SPEED: f64 = 200.0;

// Timers (seconds)
pub const ENEMY_REDIRECT_INTERVAL: f64 = 2.0;
pub const DAMAGE_COOLDOWN_SECONDS: f64 = 0.5;
pub const CHEST_REVEAL_SECONDS: f64 = 1.5;
pub const LEVEL_FADE_SECONDS: f64 = 0.25;

// Combat and interaction
pub const STARTING_LIVES: u32 = 2;
pub const CHEST_TARGET_RADIUS: f64 = 60.0;
pub const KNIFE_POOL_CAPACITY: usize = 5;
pub const KNIFE_SPAWN_OFFSET: f64 = 14.0;

// Content distribution
pub const CONTENT_ROOM_SHARE: f64 = 0.9;
pub const DENSE_ROOM_THRESHOLD: f64 = 0.25;
pub const SPARSE_ROOM_THRESHOLD: f64 = 0.5;
pub const TALL_ROOM_MIN_HEIGHT: u32 = 9;

// Fog of war opacity over concealed rooms
pub const FOG_ALPHA: f32 = 0.8;
