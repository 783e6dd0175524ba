#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Write `contents` to `root/rel`, creating parent directories as needed.
pub fn write_file(root: &Path, rel: &str, contents: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, contents).unwrap();
    path
}

/// Copy a fixture from `tests/fixtures` into `root/rel`.
pub fn copy_fixture(name: &str, root: &Path, rel: &str) -> PathBuf {
    let src = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    write_file(root, rel, &fs::read_to_string(src).unwrap())
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}
