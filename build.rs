fn main() {
    // Stamped into the footer's copyright line
    println!(
        "cargo:rustc-env=BUILD_TIME={}",
        chrono::Utc::now().to_rfc3339()
    );
    println!("cargo:rerun-if-changed=build.rs");
}
