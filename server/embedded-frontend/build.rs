use static_files::resource_dir;
use std::env;
use std::path::Path;
use std::process::Command;

fn main() -> std::io::Result<()> {
    println!("cargo:rerun-if-changed=build.rs");

    // site assets

    println!("cargo:rerun-if-changed=../../frontend/Cargo.toml");
    println!("cargo:rerun-if-changed=../../frontend/Cargo.lock");
    println!("cargo:rerun-if-changed=../../frontend/Trunk.toml");
    println!("cargo:rerun-if-changed=../../frontend/index.html");
    println!("cargo:rerun-if-changed=../../frontend/site.yaml");
    println!("cargo:rerun-if-changed=../../frontend/src");
    println!("cargo:rerun-if-changed=../../site/src");

    let output = Command::new("trunk")
        .args([
            "build",
            "--release",
            "-d",
            "../server/embedded-frontend/dist",
            "--public-url",
            "/",
        ])
        .current_dir("../../frontend")
        .output()?;

    if !output.status.success() {
        panic!(
            "Failed to run 'trunk':\n{}\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }

    let out_dir = env::var("OUT_DIR").map_err(|err| {
        std::io::Error::new(std::io::ErrorKind::Other, format!("OUT_DIR not set: {err}"))
    })?;

    let mut assets = resource_dir("dist");
    assets
        .with_generated_filename(Path::new(&out_dir).join("generated-site.rs"))
        .with_generated_fn("generate_site_assets");

    assets.build()?;

    // done

    Ok(())
}
