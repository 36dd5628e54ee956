pub mod patch_services;

pub use self::patch_services::PatchHelper;
