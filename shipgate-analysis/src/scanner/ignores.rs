//! Ignore rules for the project walk.
//!
//! Hidden directories and dependency/build directories are never descended
//! into; a project `.gitignore` is honored when present.

use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

use shipgate_core::constants::SKIPPED_DIRS;

/// Ignore rules applied during the walk.
pub struct IgnorePatterns {
    gitignore: Gitignore,
}

impl IgnorePatterns {
    /// Build ignore rules from the defaults plus config-supplied extras.
    pub fn new(root: &Path, extra_dirs: &[String]) -> Self {
        let mut builder = GitignoreBuilder::new(root);

        // Hidden directories.
        let _ = builder.add_line(None, ".*/");

        for dir in SKIPPED_DIRS {
            let _ = builder.add_line(None, &format!("{dir}/"));
        }
        for dir in extra_dirs {
            let _ = builder.add_line(None, &format!("{dir}/"));
        }

        let gitignore_file = root.join(".gitignore");
        if gitignore_file.exists() {
            let _ = builder.add(&gitignore_file);
        }

        Self {
            gitignore: builder
                .build()
                .unwrap_or_else(|_| GitignoreBuilder::new(root).build().unwrap()),
        }
    }

    /// Check if a path should be ignored.
    pub fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        self.gitignore.matched(path, is_dir).is_ignore()
    }
}
