pub mod classifier;
pub mod classify;
pub mod final_score;
