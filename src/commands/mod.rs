//! Command implementations for the sitecfg CLI

pub(crate) mod bind;
pub(crate) mod completion;
pub(crate) mod doctor;
pub(crate) mod env;
pub(crate) mod render;
pub(crate) mod show;
