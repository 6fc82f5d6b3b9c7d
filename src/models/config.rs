// ============================================================================
// LingoX - 配置数据模型
// ============================================================================
//
// 文件: src/models/config.rs
// 职责: 配置文件数据结构定义和操作
// 边界:
//   - ✅ 配置文件数据结构定义
//   - ✅ 配置序列化/反序列化
//   - ✅ 配置默认值
//   - ✅ 配置文件读写操作
//   - ✅ 运行时参数覆盖
//   - ❌ 不应包含检查逻辑
//   - ❌ 不应包含 CLI 参数解析
//   - ❌ 不应包含目录扫描
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::core::checker::CheckOptions;
use crate::core::translator::DEFAULT_SOURCE_LANGUAGE;
use crate::utils::constants::CONFIG_FILE;

/// 全局配置管理器
static GLOBAL_CONFIG: std::sync::OnceLock<Arc<RwLock<Config>>> = std::sync::OnceLock::new();

/// LingoX 配置文件结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// 工作空间配置
    #[serde(default)]
    pub workspace: WorkspaceConfig,
    /// 查找配置
    #[serde(default)]
    pub lookup: LookupConfig,
    /// 检查开关
    #[serde(default)]
    pub check: CheckOptions,
    /// 执行配置
    #[serde(default)]
    pub execution: ExecutionConfig,
    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,
    /// 国际化配置
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// 工作空间配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// 扫描根目录
    #[serde(default = "Config::default_root")]
    pub root: String,
    /// 排除扫描的目录或文件模式
    #[serde(default = "Config::default_ignore_patterns")]
    pub ignore: Vec<String>,
}

/// 查找配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupConfig {
    /// 源语言，请求的语言不受支持时回退到它
    #[serde(default = "Config::default_source_language")]
    pub source_language: String,
}

/// 执行配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// 同时读取的文件数
    #[serde(default = "Config::default_max_concurrency")]
    pub max_concurrency: usize,
}

/// 输出配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// 是否显示进度条
    #[serde(default = "Config::default_show_progress")]
    pub show_progress: bool,
    /// 是否详细输出
    #[serde(default)]
    pub verbose: bool,
    /// 是否彩色输出
    #[serde(default = "Config::default_colored")]
    pub colored: bool,
}

/// 国际化配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct I18nConfig {
    /// 界面语言
    #[serde(default = "Config::default_language")]
    pub language: String,
}

/// CLI 运行时参数（用于覆盖配置文件）
#[derive(Debug, Clone, Default)]
pub struct RuntimeArgs {
    pub verbose: Option<bool>,
    pub colored: Option<bool>,
    pub show_progress: Option<bool>,
    pub max_concurrency: Option<usize>,
    pub workspace_root: Option<String>,
    pub language: Option<String>,
}

/// 配置默认值 trait - 不依赖全局配置初始化
pub trait ConfigDefaults {
    fn default_root() -> String {
        ".".to_string()
    }

    fn default_ignore_patterns() -> Vec<String> {
        vec![
            ".git".to_string(),
            "target".to_string(),
            "node_modules".to_string(),
        ]
    }

    fn default_source_language() -> String {
        DEFAULT_SOURCE_LANGUAGE.to_string()
    }

    fn default_max_concurrency() -> usize {
        num_cpus::get()
    }

    fn default_show_progress() -> bool {
        true
    }

    fn default_colored() -> bool {
        true
    }

    fn default_language() -> String {
        "en_us".to_string()
    }
}

impl ConfigDefaults for Config {}

impl Config {
    /// 初始化全局配置（程序启动时调用）
    pub fn initialize() -> anyhow::Result<()> {
        let config = Self::load_from(Path::new(CONFIG_FILE))?;
        GLOBAL_CONFIG
            .set(Arc::new(RwLock::new(config)))
            .map_err(|_| anyhow::anyhow!("Global config already initialized"))?;
        Ok(())
    }

    /// 加载配置文件，不存在时使用默认配置
    pub fn load_from(config_path: &Path) -> anyhow::Result<Self> {
        if !config_path.exists() {
            tracing::debug!("No config file at {:?}, using defaults", config_path);
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(config_path)?;
        let config = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("{}: {}", config_path.display(), e))?;
        tracing::debug!("Loaded config from {:?}", config_path);
        Ok(config)
    }

    /// 合并运行时参数
    pub fn merge_runtime_args(args: RuntimeArgs) -> anyhow::Result<()> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let mut config = global_config
            .write()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config write lock"))?;

        config.apply(args);
        Ok(())
    }

    /// 将运行时参数写入配置
    pub fn apply(&mut self, args: RuntimeArgs) {
        if let Some(verbose) = args.verbose {
            self.output.verbose = verbose;
        }
        if let Some(colored) = args.colored {
            self.output.colored = colored;
        }
        if let Some(show_progress) = args.show_progress {
            self.output.show_progress = show_progress;
        }
        if let Some(max_concurrency) = args.max_concurrency {
            self.execution.max_concurrency = max_concurrency.max(1);
        }
        if let Some(workspace_root) = args.workspace_root {
            self.workspace.root = workspace_root;
        }
        if let Some(language) = args.language {
            self.i18n.language = language;
        }
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, config_path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// 生成默认配置模板并保存到文件
    pub fn create_default_config_file(config_path: &Path) -> anyhow::Result<()> {
        Self::default().save_to_file(config_path)
    }

    /// 读取全局配置；未初始化时使用默认值
    fn read<T>(f: impl FnOnce(&Config) -> T) -> T {
        match GLOBAL_CONFIG.get().and_then(|c| c.read().ok()) {
            Some(config) => f(&*config),
            None => f(&Config::default()),
        }
    }

    /// 当前配置快照
    pub fn snapshot() -> Config {
        Self::read(Config::clone)
    }

    /// 获取工作区根目录
    pub fn get_workspace_root() -> PathBuf {
        let root = Self::read(|c| c.workspace.root.clone());
        if root == "." {
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
        } else {
            PathBuf::from(root)
        }
    }

    /// 获取忽略模式列表
    pub fn get_ignore_patterns() -> Vec<String> {
        Self::read(|c| c.workspace.ignore.clone())
    }

    /// 检查相对路径是否应该被忽略
    pub fn should_ignore_path(path: &str, patterns: &[String]) -> bool {
        patterns.iter().any(|pattern| {
            let matched = glob::Pattern::new(pattern)
                .map(|p| p.matches(path))
                .unwrap_or(false);
            matched
                || path.split(['/', '\\']).any(|component| component == pattern)
        })
    }

    pub fn get_source_language() -> String {
        Self::read(|c| c.lookup.source_language.clone())
    }

    pub fn get_check_options() -> CheckOptions {
        Self::read(|c| c.check.clone())
    }

    pub fn get_max_concurrency() -> usize {
        Self::read(|c| c.execution.max_concurrency).max(1)
    }

    pub fn get_show_progress() -> bool {
        Self::read(|c| c.output.show_progress)
    }

    pub fn get_verbose() -> bool {
        Self::read(|c| c.output.verbose)
    }

    pub fn get_colored() -> bool {
        Self::read(|c| c.output.colored)
    }

    /// 获取界面语言
    pub fn get_language() -> String {
        Self::read(|c| c.i18n.language.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workspace: WorkspaceConfig::default(),
            lookup: LookupConfig::default(),
            check: CheckOptions::default(),
            execution: ExecutionConfig::default(),
            output: OutputConfig::default(),
            i18n: I18nConfig::default(),
        }
    }
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            root: Config::default_root(),
            ignore: Config::default_ignore_patterns(),
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            source_language: Config::default_source_language(),
        }
    }
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            max_concurrency: Config::default_max_concurrency(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            show_progress: Config::default_show_progress(),
            verbose: false,
            colored: Config::default_colored(),
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            language: Config::default_language(),
        }
    }
}
