// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod app_dirs;
pub mod console;
pub mod difficulty;
pub mod leaderboard;
pub mod round;
pub mod score;
pub mod session;
