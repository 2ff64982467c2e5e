pub mod parallel_perfects;
pub mod hidden_perfects;
pub mod dissonance_resolution;
pub mod crossing;
pub mod leaps;
pub mod species_rhythm;
