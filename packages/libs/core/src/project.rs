//! 프로젝트 자산 접근
//!
//! 논리적인 프로젝트/파일 이름을 신뢰 루트 아래의 실제 경로로 해석하고
//! 내용을 읽어 반환합니다. 모든 연산은 읽기 전용입니다.
//!
//! # 불변 조건
//!
//! 해석된 경로는 항상 신뢰 루트의 하위여야 합니다. 상위 디렉터리 세그먼트나
//! 절대 경로가 들어오면 파일시스템을 건드리기 전에 거부합니다.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// 프로젝트 자산 저장소
///
/// 신뢰 루트 하나를 갖고, 루트 아래의 프로젝트 디렉터리와 파일만 노출합니다.
#[derive(Debug, Clone)]
pub struct ProjectStore {
    /// 신뢰 루트
    root: PathBuf,
}

impl ProjectStore {
    /// 새 저장소 생성
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 신뢰 루트 경로
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 프로젝트 디렉터리 열기
    ///
    /// 프로젝트 바로 아래의 엔트리 이름 집합을 반환합니다 (1단계, 재귀 없음).
    /// 순서는 의미가 없습니다.
    pub fn open_project(&self, name: &str) -> Result<BTreeSet<String>> {
        if name.trim().is_empty() {
            return Err(Error::MissingArgument {
                message: "name is required".to_string(),
            });
        }

        let dir = self.resolve(name).ok_or_else(project_not_found)?;
        match fs::metadata(&dir) {
            Ok(meta) if meta.is_dir() => {}
            _ => return Err(project_not_found()),
        }

        let mut entries = BTreeSet::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            entries.insert(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(entries)
    }

    /// 파일 내용 읽기
    ///
    /// `path`는 신뢰 루트 기준 상대 경로입니다 (예: `"<project>/<file>"`).
    /// 내용은 UTF-8 텍스트로 디코딩되어 반환됩니다.
    pub fn read_file(&self, path: &str) -> Result<String> {
        if path.trim().is_empty() {
            // 메시지 문자열은 호출자와의 계약이므로 바꾸지 않음
            return Err(Error::MissingArgument {
                message: "dir is required".to_string(),
            });
        }

        let file = self.resolve(path).ok_or_else(file_not_found)?;
        match fs::metadata(&file) {
            Ok(meta) if meta.is_file() => {}
            _ => return Err(file_not_found()),
        }

        Ok(fs::read_to_string(&file)?)
    }

    /// 상대 경로를 신뢰 루트 아래로 해석
    ///
    /// 일반 세그먼트만 허용합니다. `..`, `.`, 루트/프리픽스 세그먼트가 있으면
    /// `None`을 반환하여 호출자가 NotFound로 처리하게 합니다.
    fn resolve(&self, relative: &str) -> Option<PathBuf> {
        let path = Path::new(relative);
        if path.is_absolute() {
            return None;
        }
        for component in path.components() {
            match component {
                Component::Normal(_) => {}
                _ => return None,
            }
        }
        Some(self.root.join(path))
    }
}

fn project_not_found() -> Error {
    Error::NotFound {
        message: "project is not existed".to_string(),
    }
}

fn file_not_found() -> Error {
    Error::NotFound {
        message: "file is not existed".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write as _;

    /// 픽스처: root/test-open/{index.html,scripts.js,styles.css},
    /// root/test-read-file/c.txt ("asdf")
    fn fixture_store() -> (tempfile::TempDir, ProjectStore) {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("projects");

        fs::create_dir_all(root.join("test-open")).unwrap();
        for name in ["index.html", "scripts.js", "styles.css"] {
            File::create(root.join("test-open").join(name)).unwrap();
        }

        fs::create_dir_all(root.join("test-read-file")).unwrap();
        let mut c = File::create(root.join("test-read-file/c.txt")).unwrap();
        c.write_all(b"asdf").unwrap();

        // 루트 밖의 파일: 탈출 시도 감지용
        let mut outside = File::create(tmp.path().join("outside.txt")).unwrap();
        outside.write_all(b"secret").unwrap();

        let store = ProjectStore::new(&root);
        (tmp, store)
    }

    #[test]
    fn test_open_project_lists_entries() {
        let (_tmp, store) = fixture_store();
        let entries = store.open_project("test-open").unwrap();
        let expected: BTreeSet<String> = ["index.html", "scripts.js", "styles.css"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(entries, expected);
    }

    #[test]
    fn test_open_project_requires_name() {
        let (_tmp, store) = fixture_store();
        let err = store.open_project("").unwrap_err();
        assert_eq!(err.to_string(), "name is required");

        let err = store.open_project("   ").unwrap_err();
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn test_open_project_missing_dir() {
        let (_tmp, store) = fixture_store();
        let err = store.open_project("not exist").unwrap_err();
        assert_eq!(err.to_string(), "project is not existed");
    }

    #[test]
    fn test_open_project_rejects_file_target() {
        let (_tmp, store) = fixture_store();
        // 디렉터리가 아닌 대상은 NotFound
        let err = store.open_project("test-read-file/c.txt").unwrap_err();
        assert_eq!(err.to_string(), "project is not existed");
    }

    #[test]
    fn test_read_file_returns_content() {
        let (_tmp, store) = fixture_store();
        let content = store.read_file("test-read-file/c.txt").unwrap();
        assert_eq!(content, "asdf");
    }

    #[test]
    fn test_read_file_requires_path() {
        let (_tmp, store) = fixture_store();
        let err = store.read_file("").unwrap_err();
        assert_eq!(err.to_string(), "dir is required");
    }

    #[test]
    fn test_read_file_missing_target() {
        let (_tmp, store) = fixture_store();
        let err = store.read_file("not exist").unwrap_err();
        assert_eq!(err.to_string(), "file is not existed");

        // 디렉터리를 파일로 읽으려는 시도도 NotFound
        let err = store.read_file("test-open").unwrap_err();
        assert_eq!(err.to_string(), "file is not existed");
    }

    #[test]
    fn test_traversal_never_escapes_root() {
        let (_tmp, store) = fixture_store();

        // outside.txt는 루트 밖에 실제로 존재하지만 접근할 수 없어야 함
        let err = store.read_file("../outside.txt").unwrap_err();
        assert_eq!(err.to_string(), "file is not existed");

        let err = store.read_file("test-open/../../outside.txt").unwrap_err();
        assert_eq!(err.to_string(), "file is not existed");

        let err = store.open_project("../projects").unwrap_err();
        assert_eq!(err.to_string(), "project is not existed");

        // 절대 경로도 거부
        let err = store.read_file("/etc/hostname").unwrap_err();
        assert_eq!(err.to_string(), "file is not existed");
    }
}
