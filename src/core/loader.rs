// ============================================================================
// LingoX - 目录加载器
// ============================================================================
//
// 文件: src/core/loader.rs
// 职责: 扫描工作区中的 TS 文件并并发加载
// 边界:
//   - ✅ walkdir 目录扫描与忽略模式
//   - ✅ 区分 Qt 翻译文件与 TypeScript 源文件
//   - ✅ 受并发上限约束的异步加载
//   - ✅ 从文件名推断语言
//   - ❌ 不应包含 XML 解析细节
//   - ❌ 不应包含输出格式化
//   - ❌ 不应包含CLI参数处理
//
// ============================================================================

use anyhow::{Context as _, Result};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use walkdir::WalkDir;

use crate::core::error::TsError;
use crate::core::reader::read_catalog;
use crate::models::catalog::Catalog;
use crate::models::config::{Config, ConfigDefaults};
use crate::utils::constants::{SNIFF_BYTES, TS_EXTENSION};

/// 进度回调函数类型 (已完成, 总数)
pub type ProgressCallback = Arc<dyn Fn(usize, usize) + Send + Sync>;

/// 已加载的目录
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub path: PathBuf,
    pub catalog: Catalog,
}

impl LoadedCatalog {
    /// 目录语言: language 属性优先，其次是文件名后缀
    pub fn language(&self) -> Option<String> {
        self.catalog
            .language
            .clone()
            .filter(|l| !l.is_empty())
            .or_else(|| language_from_path(&self.path))
    }
}

/// 加载失败的文件
#[derive(Debug)]
pub struct LoadFailure {
    pub path: PathBuf,
    pub error: TsError,
}

/// 加载结果，按输入顺序排列
#[derive(Debug, Default)]
pub struct LoadReport {
    pub catalogs: Vec<LoadedCatalog>,
    pub failures: Vec<LoadFailure>,
}

/// 目录加载器
pub struct CatalogLoader {
    root: PathBuf,
    ignore: Vec<String>,
    max_concurrency: usize,
    verbose: bool,
}

impl CatalogLoader {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            ignore: Config::default_ignore_patterns(),
            max_concurrency: Config::default_max_concurrency(),
            verbose: false,
        }
    }

    /// 使用全局配置创建
    pub fn from_config() -> Self {
        Self::new(Config::get_workspace_root())
            .with_ignore(Config::get_ignore_patterns())
            .with_max_concurrency(Config::get_max_concurrency())
            .with_verbose(Config::get_verbose())
    }

    pub fn with_ignore(mut self, ignore: Vec<String>) -> Self {
        self.ignore = ignore;
        self
    }

    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 扫描根目录
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        self.discover_in(&self.root)
    }

    /// 扫描指定目录下的翻译文件，结果已排序
    pub fn discover_in(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut found = Vec::new();

        for entry in WalkDir::new(dir)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                let relative_path = e.path().strip_prefix(dir).unwrap_or(e.path()).to_string_lossy();
                relative_path.is_empty() || !Config::should_ignore_path(&relative_path, &self.ignore)
            })
        {
            let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some(TS_EXTENSION)
            {
                continue;
            }
            if is_translation_file(path) {
                found.push(path.to_path_buf());
            } else if self.verbose {
                tracing::debug!("Skipping non-Linguist .ts file {:?}", path);
            }
        }

        tracing::debug!("Discovered {} catalogs under {:?}", found.len(), dir);
        Ok(found)
    }

    /// 解析命令行给出的路径: 空则扫描根目录，目录则递归扫描，文件直接使用
    pub fn resolve(&self, paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
        if paths.is_empty() {
            return self.discover();
        }

        let mut resolved = Vec::new();
        for path in paths {
            if path.is_dir() {
                resolved.extend(self.discover_in(path)?);
            } else if path.is_file() {
                resolved.push(path.clone());
            } else {
                anyhow::bail!("Path does not exist: {}", path.display());
            }
        }
        Ok(resolved)
    }

    /// 并发加载，单个文件失败不影响其他文件
    pub async fn load_all(&self, paths: Vec<PathBuf>, progress: Option<ProgressCallback>) -> LoadReport {
        let total = paths.len();
        let semaphore = Arc::new(Semaphore::new(self.max_concurrency));
        let mut tasks = JoinSet::new();

        for (index, path) in paths.iter().cloned().enumerate() {
            let semaphore = Arc::clone(&semaphore);
            tasks.spawn(async move {
                let _permit = semaphore.acquire_owned().await;
                (index, load_one(&path).await)
            });
        }

        let mut results: Vec<Option<Result<Catalog, TsError>>> = (0..total).map(|_| None).collect();
        let mut completed = 0;
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, result)) => results[index] = Some(result),
                Err(e) => tracing::error!("Catalog load task failed: {}", e),
            }
            completed += 1;
            if let Some(callback) = &progress {
                callback(completed, total);
            }
        }

        build_report(paths, results)
    }
}

/// 按输入顺序组装结果，没有结果的任务记为失败
fn build_report(paths: Vec<PathBuf>, results: Vec<Option<Result<Catalog, TsError>>>) -> LoadReport {
    let mut report = LoadReport::default();
    for (path, result) in paths.into_iter().zip(results) {
        match result.unwrap_or(Err(TsError::TaskAborted)) {
            Ok(catalog) => report.catalogs.push(LoadedCatalog { path, catalog }),
            Err(error) => {
                tracing::debug!("Failed to load {:?}: {}", path, error);
                report.failures.push(LoadFailure { path, error });
            }
        }
    }
    report
}

async fn load_one(path: &Path) -> Result<Catalog, TsError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| TsError::io(path, e))?;
    read_catalog(&content)
}

/// 读取文件开头，判断是否为 Qt Linguist 文件
fn is_translation_file(path: &Path) -> bool {
    let mut head = Vec::with_capacity(SNIFF_BYTES);
    let read = std::fs::File::open(path)
        .and_then(|file| file.take(SNIFF_BYTES as u64).read_to_end(&mut head));
    match read {
        Ok(_) => String::from_utf8_lossy(&head).contains("<TS"),
        Err(e) => {
            tracing::warn!("Cannot read {:?}: {}", path, e);
            false
        }
    }
}

fn is_language_code(s: &str) -> bool {
    (2..=3).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_lowercase())
}

fn is_region_code(s: &str) -> bool {
    s.len() == 2 && s.bytes().all(|b| b.is_ascii_uppercase())
}

/// 从 `name_ru.ts` / `name_pt_BR.ts` / `ru.ts` 推断语言
pub fn language_from_path(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    let parts: Vec<&str> = stem.split('_').collect();
    match parts.as_slice() {
        [_, .., language, region] if is_language_code(language) && is_region_code(region) => {
            Some(format!("{language}_{region}"))
        }
        [_, .., language] if is_language_code(language) => Some(language.to_string()),
        [language] if is_language_code(language) => Some(language.to_string()),
        _ => None,
    }
}
