fn main() {
    // Capture the build timestamp for the footer's deploy line
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={build_time}");

    println!("cargo:rerun-if-changed=build.rs");
}
