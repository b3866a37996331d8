// build.rs - gem5 m5ops linkage
//
// Only active with `--features m5`. Point M5_LIB_DIR at the directory holding
// libm5.a (usually gem5/util/m5/build/<isa>/out).

use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-env-changed=M5_LIB_DIR");
    if env::var_os("CARGO_FEATURE_M5").is_none() {
        return;
    }

    let dir = match env::var("M5_LIB_DIR") {
        Ok(d) if !d.is_empty() => PathBuf::from(d),
        _ => {
            println!("cargo:warning=feature m5 enabled but M5_LIB_DIR not set, relying on the default search path");
            println!("cargo:rustc-link-lib=static=m5");
            return;
        }
    };

    if !dir.join("libm5.a").exists() {
        println!("cargo:warning=libm5.a not found in {}", dir.display());
    }
    println!("cargo:rustc-link-search=native={}", dir.display());
    println!("cargo:rustc-link-lib=static=m5");
}
