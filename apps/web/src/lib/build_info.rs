//! Version and commit of the running build, shown on the health page.

use super::built_info;

pub fn version() -> &'static str {
    built_info::PKG_VERSION
}

pub fn git_commit_hash() -> &'static str {
    match built_info::GIT_COMMIT_HASH_SHORT {
        Some(hash) if !hash.is_empty() => hash,
        _ => "unknown",
    }
}

pub fn target() -> &'static str {
    built_info::TARGET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_matches_the_package() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
        assert!(!git_commit_hash().is_empty());
    }
}
