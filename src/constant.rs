mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const APP_NAME: &str = built_info::PKG_NAME;
pub const APP_VERSION: &str = built_info::PKG_VERSION;
pub const ENV_PREFIX: &str = const_format::concatcp!(APP_NAME, "_");
