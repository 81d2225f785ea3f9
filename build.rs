//! Embeds Windows resources (product metadata, optional icon) into the
//! executable. Other targets skip this step.

use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=icon.ico");

    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() != Ok("windows") {
        return;
    }

    let mut res = winres::WindowsResource::new();
    res.set("ProductName", "Number Converter");
    res.set("FileDescription", "Number Converter");

    if Path::new("icon.ico").exists() {
        res.set_icon("icon.ico");
    }

    if let Err(e) = res.compile() {
        // missing rc toolchain should not break the build
        println!("cargo:warning=failed to embed Windows resources: {e}");
    }
}
