pub mod export;
pub mod migration;
pub mod preview;
pub mod seo_check;
