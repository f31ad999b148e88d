//! # Discovery Module Unit Tests / Discovery 模块单元测试
//!
//! Tests for `discover`, the `Per` selection mode and the file naming helpers
//! it relies on.
//!
//! 测试 `discover`、`Per` 选择模式及其依赖的文件命名辅助函数。

mod common;

use common::{candidate_paths, create_sample_repo, create_tree};
use job_matrix::core::MatrixError;
use job_matrix::discovery::{Candidate, CandidateKind, Per, discover};
use job_matrix::infra::fs::{has_direct_test_file, is_excluded_path, is_test_file_name};
use std::path::Path;

#[cfg(test)]
mod per_tests {
    use super::*;

    #[test]
    fn test_parse_known_modes() {
        assert_eq!("directory".parse::<Per>().unwrap(), Per::Directory);
        assert_eq!("file".parse::<Per>().unwrap(), Per::File);
    }

    #[test]
    fn test_parse_unknown_mode_is_invalid() {
        let err = "module".parse::<Per>().unwrap_err();
        assert!(matches!(err, MatrixError::InvalidMode(ref value) if value == "module"));
        assert!(err.to_string().contains("module"));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("File".parse::<Per>().is_err());
        assert!("".parse::<Per>().is_err());
    }

    #[test]
    fn test_display_round_trips_names() {
        for name in Per::NAMES {
            assert_eq!(name.parse::<Per>().unwrap().to_string(), name);
        }
    }
}

#[cfg(test)]
mod naming_tests {
    use super::*;

    #[test]
    fn test_test_file_convention() {
        assert!(is_test_file_name("test_x.py"));
        assert!(is_test_file_name("test_.py"));
        assert!(!is_test_file_name("test.py"));
        assert!(!is_test_file_name("x_test.py"));
        assert!(!is_test_file_name("test_x.pyi"));
        assert!(!is_test_file_name("conftest.py"));
    }

    #[test]
    fn test_excluded_path_checks_every_segment() {
        assert!(is_excluded_path(Path::new("_hidden")));
        assert!(is_excluded_path(Path::new("a/.git/b")));
        assert!(is_excluded_path(Path::new("a/b/_c.py")));
        assert!(!is_excluded_path(Path::new("a/b_c/test_d.py")));
        assert!(!is_excluded_path(Path::new("")));
    }

    #[test]
    fn test_has_direct_test_file_is_not_recursive() {
        let temp_dir = create_tree(&["a/b/test_x.py", "a/helper.py"]);
        let root = temp_dir.path();
        assert!(!has_direct_test_file(&root.join("a")).unwrap());
        assert!(has_direct_test_file(&root.join("a/b")).unwrap());
    }
}

#[cfg(test)]
mod discover_tests {
    use super::*;

    #[test]
    fn test_file_mode_skips_hidden_directories() {
        let temp_dir = create_tree(&["a/test_x.py", "a/_hidden/test_y.py"]);
        let candidates = discover(Per::File, temp_dir.path()).unwrap();

        assert_eq!(candidates, vec![Candidate::file("a/test_x.py")]);
    }

    #[test]
    fn test_directory_mode_skips_hidden_directories() {
        let temp_dir = create_tree(&["a/test_x.py", "a/_hidden/test_y.py"]);
        let candidates = discover(Per::Directory, temp_dir.path()).unwrap();

        assert_eq!(candidates, vec![Candidate::directory("a")]);
    }

    #[test]
    fn test_file_mode_on_sample_repo() {
        let temp_dir = create_sample_repo();
        let candidates = discover(Per::File, temp_dir.path()).unwrap();

        assert_eq!(
            candidate_paths(&candidates),
            vec![
                "blockchain/test_blocks.py",
                "blockchain/test_mempool.py",
                "core/util/test_bits.py",
                "test_root.py",
            ]
        );
        assert!(candidates.iter().all(|c| c.kind == CandidateKind::File));
    }

    #[test]
    fn test_directory_mode_on_sample_repo() {
        let temp_dir = create_sample_repo();
        let candidates = discover(Per::Directory, temp_dir.path()).unwrap();

        // The root holds test_root.py; `core` only has tests below it.
        assert_eq!(
            candidate_paths(&candidates),
            vec!["", "blockchain", "core/util"]
        );
        assert!(candidates.iter().all(Candidate::is_dir));
    }

    #[test]
    fn test_hidden_files_are_skipped() {
        let temp_dir = create_tree(&["a/test_x.py", "a/.test_y.py", "a/_test_z.py"]);
        let candidates = discover(Per::File, temp_dir.path()).unwrap();

        assert_eq!(candidate_paths(&candidates), vec!["a/test_x.py"]);
    }

    #[test]
    fn test_directory_without_tests_is_dropped() {
        let temp_dir = create_tree(&["docs/readme.md", "src/helper.py"]);

        assert!(discover(Per::Directory, temp_dir.path()).unwrap().is_empty());
        assert!(discover(Per::File, temp_dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_directory_named_like_a_test_file_is_not_a_file_candidate() {
        let temp_dir = create_tree(&["test_dir.py/test_inner.py"]);
        let candidates = discover(Per::File, temp_dir.path()).unwrap();

        assert_eq!(candidate_paths(&candidates), vec!["test_dir.py/test_inner.py"]);
    }

    #[test]
    fn test_order_follows_path_components() {
        // Component order puts `a/b` before `a-b`, although '-' < '/' as bytes.
        let temp_dir = create_tree(&["a-b/test_2.py", "a/b/test_1.py", "a/test_0.py"]);
        let candidates = discover(Per::File, temp_dir.path()).unwrap();

        assert_eq!(
            candidate_paths(&candidates),
            vec!["a/b/test_1.py", "a/test_0.py", "a-b/test_2.py"]
        );
    }

    #[test]
    fn test_output_is_sorted_and_clean_on_a_larger_tree() {
        let mut files = Vec::new();
        for top in ["zeta", "alpha", "_skip", "mid", ".hidden"] {
            for sub in ["z", "a", "_p", "m"] {
                files.push(format!("{top}/{sub}/test_{sub}.py"));
                files.push(format!("{top}/{sub}/notes.txt"));
            }
            files.push(format!("{top}/test_top.py"));
        }
        let refs: Vec<&str> = files.iter().map(String::as_str).collect();
        let temp_dir = create_tree(&refs);
        let root = temp_dir.path();

        for per in [Per::Directory, Per::File] {
            let candidates = discover(per, root).unwrap();
            assert!(!candidates.is_empty());

            let mut sorted = candidates.clone();
            sorted.sort_by(|a, b| a.path.cmp(&b.path));
            assert_eq!(candidates, sorted, "{per} output is not sorted");

            for candidate in &candidates {
                assert!(
                    !is_excluded_path(&candidate.path),
                    "hidden path reported: {}",
                    candidate.path.display()
                );
                if per == Per::Directory {
                    assert!(has_direct_test_file(&root.join(&candidate.path)).unwrap());
                }
            }
        }

        // 3 visible tops × (1 + 3 visible subdirectories)
        assert_eq!(discover(Per::Directory, root).unwrap().len(), 12);
        assert_eq!(discover(Per::File, root).unwrap().len(), 12);
    }

    #[test]
    fn test_discovery_is_repeatable() {
        let temp_dir = create_sample_repo();
        let first = discover(Per::Directory, temp_dir.path()).unwrap();
        let second = discover(Per::Directory, temp_dir.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_root_is_an_io_error() {
        let temp_dir = create_tree(&[]);
        let missing = temp_dir.path().join("does-not-exist");

        let err = discover(Per::File, &missing).unwrap_err();
        assert!(matches!(err, MatrixError::Io { .. }));
    }

    #[test]
    fn test_owning_dir() {
        assert_eq!(Candidate::directory("a/b").owning_dir(), Path::new("a/b"));
        assert_eq!(Candidate::file("a/b/test_c.py").owning_dir(), Path::new("a/b"));
        assert_eq!(Candidate::file("test_c.py").owning_dir(), Path::new(""));
    }
}
