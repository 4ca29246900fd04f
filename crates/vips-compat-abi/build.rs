fn main() {
    // VIPS_DIR points at an extracted libvips dev bundle (the build-win64-mxe
    // layout: lib/ next to bin/ and include/). Optional; without it the
    // staticlib still builds and the final link supplies libvips itself.
    println!("cargo:rerun-if-env-changed=VIPS_DIR");
    if let Ok(vips_dir) = std::env::var("VIPS_DIR") {
        let lib_dir = std::path::Path::new(&vips_dir).join("lib");
        if lib_dir.exists() {
            println!("cargo:rustc-link-search=native={}", lib_dir.display());
        } else {
            println!("cargo:warning=VIPS_DIR set but '{}' does not exist", lib_dir.display());
        }
    }

    // Link order matters: this crate's objects precede the libraries below,
    // so old-name references resolve against the shim first.
    if std::env::var_os("CARGO_FEATURE_LINK_VIPS").is_some() {
        println!("cargo:rustc-link-lib=dylib=vips");
    }
}
