fn main() {
    #[cfg(feature = "native")]
    native::build();
}

#[cfg(feature = "native")]
mod native {
    use std::path::PathBuf;

    /// Locations used by distribution packages that do not ship a pkg-config file.
    const FALLBACK_INCLUDE_DIRS: [&str; 2] =
        ["/usr/include/clustalo", "/usr/local/include/clustalo"];

    pub fn build() {
        println!("cargo:rerun-if-changed=csrc/clustalo_shim.c");
        println!("cargo:rerun-if-changed=csrc/clustalo_shim.h");

        let mut include_dirs: Vec<PathBuf> =
            FALLBACK_INCLUDE_DIRS.iter().map(PathBuf::from).collect();
        let mut link_dirs = Vec::new();
        let mut libs = Vec::new();

        // Link lines are emitted after the shim, since the shim references libclustalo.
        match pkg_config::Config::new()
            .cargo_metadata(false)
            .probe("clustalo")
        {
            Ok(library) => {
                include_dirs.extend(library.include_paths);
                link_dirs.extend(library.link_paths);
                libs.extend(library.libs);
            }
            Err(error) => {
                println!("cargo:warning=pkg-config did not find clustalo, using default paths: {error}");
                libs.push("clustalo".to_string());
            }
        }

        cc::Build::new()
            .file("csrc/clustalo_shim.c")
            .include("csrc")
            .includes(&include_dirs)
            .flag_if_supported("-fopenmp")
            .warnings(false)
            .compile("clustalo_shim");

        for link_dir in link_dirs {
            println!("cargo:rustc-link-search=native={}", link_dir.display());
        }
        for lib in libs {
            println!("cargo:rustc-link-lib={lib}");
        }
        println!("cargo:rustc-link-lib=stdc++");
        println!("cargo:rustc-link-lib=gomp");
    }
}
