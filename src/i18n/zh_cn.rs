// ============================================================================
// LingoX - 中文翻译表
// ============================================================================
//
// 文件: src/i18n/zh_cn.rs
// 职责: 中文翻译内容定义
// 边界:
//   - ✅ 中文翻译字符串定义
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含其他语言翻译
//
// ============================================================================

/// 中文翻译表
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // 加载
    ("load.found", "找到 {} 个翻译目录"),
    ("load.none_found", "{} 下没有找到翻译目录"),
    ("load.progress", "加载翻译目录"),
    ("load.failed", "加载 {} 失败: {}"),
    // 检查命令
    ("check.start", "开始检查翻译目录..."),
    ("check.context_header", "  上下文 {}"),
    ("check.all_good", "所有目录检查通过"),
    (
        "check.summary",
        "已检查 {} 个目录: {} 个错误, {} 个警告, {} 个无法读取",
    ),
    ("check.strict_failed", "严格模式下警告也视为失败"),
    // 统计命令
    ("stats.header.file", "文件"),
    ("stats.header.language", "语言"),
    ("stats.header.messages", "消息"),
    ("stats.header.finished", "已完成"),
    ("stats.header.unfinished", "未完成"),
    ("stats.header.empty", "空"),
    ("stats.header.obsolete", "过时"),
    ("stats.header.done", "完成度"),
    ("stats.total", "{} 个目录, {} 条消息, {} 条已完成 (完成度 {}%)"),
    // 查找命令
    ("lookup.load_failed", "无法加载目录 {}"),
    ("lookup.fallback", "没有已完成的译文，显示源文本"),
    // 格式化命令
    ("fmt.unchanged", "格式已规范: {}"),
    ("fmt.would_change", "需要重新格式化: {}"),
    ("fmt.rewritten", "已重新格式化: {}"),
    ("fmt.lossy", "拒绝重写 {}: 重写后的文件会丢失内容"),
    ("fmt.unsupported", "  无法保留: {}"),
    ("fmt.all_formatted", "全部 {} 个目录格式规范"),
    ("fmt.summary", "已重新格式化 {} 个目录"),
    ("fmt.check_summary", "{} 个目录需要格式化"),
    ("fmt.run_hint", "运行 'lingox fmt' 进行重写"),
    // 语言命令
    ("langs.supported", "支持的语言"),
    ("langs.source_marker", "(源语言)"),
    ("langs.message_count", "{} 条已翻译消息"),
    ("langs.applied", "请求 {} {} 使用 {}"),
    ("langs.unknown_language", "无法确定 {} 的语言，已跳过"),
    // 初始化命令
    ("init.start", "正在初始化 LingoX 配置..."),
    ("init.config_exists", "配置文件已存在: {}"),
    ("init.use_force_hint", "使用 --force 覆盖"),
    ("init.config_created", "已创建配置文件: {}"),
    ("init.next_steps", "编辑 [workspace] 部分后运行 'lingox check'"),
    ("init.create_failed", "创建配置文件失败: {}"),
];
