#![allow(dead_code)]

use std::path::PathBuf;

pub(crate) use girgen_util::init_log;

pub fn testdata(base: &str) -> PathBuf {
    PathBuf::from(std::env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("girgen-extract")
        .join("testdata")
        .join(base)
}
