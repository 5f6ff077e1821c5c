// ============================================================
// INFRASTRUCTURE LAYER
// ============================================================
// Input decoding and file access

pub mod decode;
pub mod fs;
