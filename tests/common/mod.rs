use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub fn tagmigrate_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tagmigrate").unwrap();
    cmd.env_remove("TAGMIGRATE_POSTS_DIR");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Create `_posts` under `root` with the given files and return its path.
pub fn write_posts(root: &Path, posts: &[(&str, &str)]) -> PathBuf {
    let dir = root.join("_posts");
    fs::create_dir_all(&dir).unwrap();
    for (name, content) in posts {
        fs::write(dir.join(name), content).unwrap();
    }
    dir
}
