//! Workspace loading: package discovery, transitive import resolution and
//! binding-table construction. This layer owns all file I/O; the query
//! engine itself never touches the disk.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::config::LoaderSettings;
use crate::error::QueryError;
use crate::resolve::scope::{self, PackageBindings};
use crate::syntax::ast::{AstNode, SourceFile};
use crate::syntax::{DocumentTrees, SyntaxTree, helpers};
use crate::vfs::{FileId, Overlay, read_file};

/// Import names visible in one file: local name and written path, both
/// mapped to the physical package key.
#[derive(Debug, Default, Clone)]
pub struct FileImports {
    pub by_name: BTreeMap<String, String>,
    pub by_path: BTreeMap<String, String>,
}

#[derive(Debug)]
pub struct Package {
    /// Physical import path derived from the directory layout. Vendored
    /// packages keep their vendor segments here; display stripping is the
    /// renderer's concern.
    pub path: String,
    pub name: String,
    pub dir: PathBuf,
    pub files: Vec<FileId>,
    pub bindings: PackageBindings,
    pub imports: BTreeMap<FileId, FileImports>,
    pub doc: String,
}

#[derive(Debug)]
pub struct Workspace {
    trees: DocumentTrees,
    packages: BTreeMap<String, Package>,
    file_to_pkg: BTreeMap<FileId, String>,
}

impl Workspace {
    /// Load the package containing `path` plus every transitively imported
    /// package resolvable under the workspace root.
    pub fn load(
        path: &Path,
        overlay: &Overlay,
        settings: &LoaderSettings,
    ) -> Result<Workspace, QueryError> {
        let file = FileId::from_path(path);
        read_file(overlay, &file)?;

        let dir = file
            .as_path()
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| QueryError::FileNotFound(file.as_str().to_string()))?;

        let (root, module_path) = find_source_root(&dir, settings);
        let include_tests = settings.include_tests
            || file
                .as_path()
                .file_name()
                .is_some_and(|name| name.to_string_lossy().ends_with("_test.go"));

        debug!(root = %root.display(), module = ?module_path, "loading workspace");

        let mut workspace = Workspace {
            trees: DocumentTrees::new(),
            packages: BTreeMap::new(),
            file_to_pkg: BTreeMap::new(),
        };

        let loader = Loader {
            root,
            module_path,
            include_tests,
        };

        let mut queue = VecDeque::new();
        let mut seen = BTreeSet::new();
        queue.push_back(dir.clone());
        seen.insert(dir);

        while let Some(pkg_dir) = queue.pop_front() {
            let Some(package) = loader.load_dir(&pkg_dir, overlay, &mut workspace.trees) else {
                continue;
            };
            for imports in package.imports.values() {
                for key in imports.by_path.values() {
                    if let Some(target) = loader.dir_for_key(key)
                        && seen.insert(target.clone())
                    {
                        queue.push_back(target);
                    }
                }
            }
            for file in &package.files {
                workspace.file_to_pkg.insert(file.clone(), package.path.clone());
            }
            workspace.packages.insert(package.path.clone(), package);
        }

        if workspace.file_to_pkg.get(&file).is_none() {
            return Err(QueryError::LoadFailed {
                file: file.as_str().to_string(),
                reason: "no Go package in directory".into(),
            });
        }

        Ok(workspace)
    }

    pub fn tree(
        &self,
        file: &FileId,
    ) -> Option<SyntaxTree> {
        self.trees.get(file)
    }

    pub fn package(
        &self,
        key: &str,
    ) -> Option<&Package> {
        self.packages.get(key)
    }

    pub fn package_of(
        &self,
        file: &FileId,
    ) -> Option<&Package> {
        self.packages.get(self.file_to_pkg.get(file)?)
    }

    pub fn packages(&self) -> impl Iterator<Item = &Package> {
        self.packages.values()
    }
}

struct Loader {
    root: PathBuf,
    module_path: Option<String>,
    include_tests: bool,
}

impl Loader {
    fn load_dir(
        &self,
        dir: &Path,
        overlay: &Overlay,
        trees: &mut DocumentTrees,
    ) -> Option<Package> {
        let mut files: Vec<FileId> = WalkDir::new(dir)
            .max_depth(1)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| FileId::from_path(entry.path()))
            .filter(|file| self.is_package_file(file))
            .collect();
        files.sort();
        files.dedup();
        if files.is_empty() {
            return None;
        }

        let key = self.key_for_dir(dir);
        let mut bindings = PackageBindings::default();
        let mut imports = BTreeMap::new();
        let mut name = String::new();
        let mut doc = String::new();
        let mut parsed = Vec::new();

        for file in &files {
            let Ok(source) = read_file(overlay, file) else {
                continue;
            };
            let tree = trees.parse_and_store(file, &source);
            scope::bind_file(&mut bindings, file, &tree);
            imports.insert(file.clone(), self.file_imports(dir, &tree));

            if let Some(source_file) = SourceFile::cast(tree.root()) {
                if name.is_empty()
                    && let Some(pkg_name) = source_file.package_name()
                {
                    name = pkg_name;
                }
                if doc.is_empty()
                    && let Some(clause) = source_file.package_clause()
                {
                    doc = helpers::doc_text(clause.syntax());
                }
            }
            parsed.push(file.clone());
        }

        if parsed.is_empty() {
            return None;
        }

        debug!(package = %key, files = parsed.len(), "loaded package");

        Some(Package {
            path: key,
            name,
            dir: dir.to_path_buf(),
            files: parsed,
            bindings,
            imports,
            doc,
        })
    }

    fn is_package_file(
        &self,
        file: &FileId,
    ) -> bool {
        let Some(name) = file.as_path().file_name().map(|name| name.to_string_lossy()) else {
            return false;
        };
        if !name.ends_with(".go") || name.starts_with('.') || name.starts_with('_') {
            return false;
        }
        self.include_tests || !name.ends_with("_test.go")
    }

    /// Resolve the imports of one file to physical package keys: vendor
    /// directories on the ancestor chain first, then module-relative and
    /// root-relative paths. Unresolvable imports are dropped.
    fn file_imports(
        &self,
        dir: &Path,
        tree: &SyntaxTree,
    ) -> FileImports {
        let mut result = FileImports::default();
        let Some(source_file) = SourceFile::cast(tree.root()) else {
            return result;
        };

        for spec in source_file.import_specs() {
            let Some(path) = spec.import_path() else {
                continue;
            };
            let Some(target) = self.resolve_import(dir, &path) else {
                debug!(import = %path, "import not found in workspace");
                continue;
            };
            let key = self.key_for_dir(&target);
            let local = spec
                .alias_token()
                .filter(|token| token.text() != ".")
                .map(|token| token.text().to_string())
                .unwrap_or_else(|| {
                    path.rsplit('/').next().unwrap_or(path.as_str()).to_string()
                });
            result.by_name.insert(local, key.clone());
            result.by_path.insert(path, key);
        }
        result
    }

    fn resolve_import(
        &self,
        from_dir: &Path,
        import_path: &str,
    ) -> Option<PathBuf> {
        let mut candidates = Vec::new();

        let mut current = Some(from_dir);
        while let Some(dir) = current {
            candidates.push(dir.join("vendor").join(import_path));
            if dir == self.root {
                break;
            }
            current = dir.parent();
        }

        if let Some(module) = &self.module_path {
            if import_path == module {
                candidates.push(self.root.clone());
            } else if let Some(rest) = import_path.strip_prefix(&format!("{module}/")) {
                candidates.push(self.root.join(rest));
            }
        }
        candidates.push(self.root.join("src").join(import_path));
        candidates.push(self.root.join(import_path));

        candidates.into_iter().find(|candidate| has_go_files(candidate))
    }

    /// Physical import path for a directory under the root.
    fn key_for_dir(
        &self,
        dir: &Path,
    ) -> String {
        let rel = dir
            .strip_prefix(&self.root)
            .ok()
            .map(|rel| rel.to_string_lossy().replace(std::path::MAIN_SEPARATOR, "/"))
            .unwrap_or_default();

        match (&self.module_path, rel.as_str()) {
            (Some(module), "") => module.clone(),
            (Some(module), rel) => {
                let rel = rel.strip_prefix("src/").unwrap_or(rel);
                format!("{module}/{rel}")
            },
            (None, "") => dir
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| ".".to_string()),
            (None, rel) => rel.strip_prefix("src/").unwrap_or(rel).to_string(),
        }
    }

    /// Inverse of `key_for_dir`, for queueing resolved imports.
    fn dir_for_key(
        &self,
        key: &str,
    ) -> Option<PathBuf> {
        if let Some(module) = &self.module_path {
            if key == module {
                return Some(self.root.clone());
            }
            if let Some(rest) = key.strip_prefix(&format!("{module}/")) {
                let direct = self.root.join(rest);
                if has_go_files(&direct) {
                    return Some(direct);
                }
            }
        }
        let src = self.root.join("src").join(key);
        if has_go_files(&src) {
            return Some(src);
        }
        let direct = self.root.join(key);
        if has_go_files(&direct) {
            return Some(direct);
        }
        None
    }
}

fn has_go_files(dir: &Path) -> bool {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return false;
    };
    for entry in entries.flatten() {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.ends_with(".go") && !name.starts_with('.') && !name.starts_with('_') {
            return true;
        }
    }
    false
}

/// Walk up from the package directory looking for a module marker, then
/// fall back to configured source roots, then to the directory itself.
fn find_source_root(
    dir: &Path,
    settings: &LoaderSettings,
) -> (PathBuf, Option<String>) {
    let mut current = Some(dir);
    while let Some(candidate) = current {
        let go_mod = candidate.join("go.mod");
        if go_mod.is_file() {
            let module = std::fs::read_to_string(&go_mod)
                .ok()
                .and_then(|contents| parse_module_path(&contents));
            return (candidate.to_path_buf(), module);
        }
        current = candidate.parent();
    }

    for root in &settings.source_roots {
        if dir.starts_with(root) {
            return (root.clone(), None);
        }
    }
    (dir.to_path_buf(), None)
}

fn parse_module_path(go_mod: &str) -> Option<String> {
    go_mod.lines().find_map(|line| {
        let line = line.trim();
        line.strip_prefix("module")
            .map(|rest| rest.trim().trim_matches('"').to_string())
            .filter(|module| !module.is_empty())
    })
}

#[cfg(test)]
#[path = "../../tests/src/loader_tests.rs"]
mod tests;
