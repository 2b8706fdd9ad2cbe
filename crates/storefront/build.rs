//! Build script for storefront crate.
//!
//! Fingerprints `static/css/main.css` so templates can link a
//! content-addressed copy that is safe to cache forever.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap_or_default());
    let hash = fingerprint_css(&manifest_dir).unwrap_or_else(|e| {
        println!("cargo:warning=CSS fingerprint skipped: {e}");
        String::new()
    });

    // Empty when skipped; templates fall back to the unhashed file.
    println!("cargo:rustc-env=CSS_HASH={hash}");
}

/// Hash main.css (first 8 hex chars of SHA-256) and copy it to
/// `static/css/derived/main.{hash}.css`.
fn fingerprint_css(manifest_dir: &Path) -> std::io::Result<String> {
    let css_path = manifest_dir.join("static/css/main.css");
    println!("cargo:rerun-if-changed={}", css_path.display());

    let content = fs::read(&css_path)?;
    let digest = format!("{:x}", Sha256::digest(&content));
    let short_hash = digest.get(..8).unwrap_or(&digest).to_string();

    let derived_dir = manifest_dir.join("static/css/derived");
    fs::create_dir_all(&derived_dir)?;
    fs::copy(&css_path, derived_dir.join(format!("main.{short_hash}.css")))?;

    Ok(short_hash)
}
