// Build script for medicctl - embeds version at compile time

fn main() {
    // Get version from environment (set by release builds) or Cargo.toml
    let version =
        std::env::var("MEDIC_VERSION").unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env=MEDIC_VERSION={}", version);

    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-env-changed=MEDIC_VERSION");
}
