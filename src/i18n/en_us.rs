// ============================================================================
// LingoX - English Translation Table
// ============================================================================
//
// 文件: src/i18n/en_us.rs
// 职责: English translation content definition
// 边界:
//   - ✅ English translation strings definition
//   - ❌ Should not contain translation logic
//   - ❌ Should not contain other language translations
//
// ============================================================================

/// English translation table
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // Loading
    ("load.found", "Found {} catalogs"),
    ("load.none_found", "No translation catalogs found under {}"),
    ("load.progress", "Loading catalogs"),
    ("load.failed", "Failed to load {}: {}"),
    // Check command
    ("check.start", "Checking translation catalogs..."),
    ("check.context_header", "  Context {}"),
    ("check.all_good", "All catalogs passed the checks"),
    (
        "check.summary",
        "Checked {} catalogs: {} errors, {} warnings, {} unreadable",
    ),
    (
        "check.strict_failed",
        "Warnings are treated as failures in strict mode",
    ),
    // Stats command
    ("stats.header.file", "File"),
    ("stats.header.language", "Lang"),
    ("stats.header.messages", "Messages"),
    ("stats.header.finished", "Finished"),
    ("stats.header.unfinished", "Unfinished"),
    ("stats.header.empty", "Empty"),
    ("stats.header.obsolete", "Obsolete"),
    ("stats.header.done", "Done"),
    (
        "stats.total",
        "{} catalogs, {} messages, {} finished ({}% complete)",
    ),
    // Lookup command
    ("lookup.load_failed", "Cannot load catalog {}"),
    (
        "lookup.fallback",
        "No finished translation found, showing the source text",
    ),
    // Fmt command
    ("fmt.unchanged", "Already formatted: {}"),
    ("fmt.would_change", "Would reformat: {}"),
    ("fmt.rewritten", "Reformatted: {}"),
    (
        "fmt.lossy",
        "Refusing to rewrite {}: the rewritten file would lose content",
    ),
    ("fmt.unsupported", "  not preserved: {}"),
    ("fmt.all_formatted", "All {} catalogs are formatted"),
    ("fmt.summary", "Reformatted {} catalogs"),
    ("fmt.check_summary", "{} catalogs need formatting"),
    ("fmt.run_hint", "Run 'lingox fmt' to rewrite them"),
    // Langs command
    ("langs.supported", "Supported languages"),
    ("langs.source_marker", "(source)"),
    ("langs.message_count", "{} translated messages"),
    ("langs.applied", "Requested {} {} using {}"),
    (
        "langs.unknown_language",
        "Cannot determine the language of {}, skipping",
    ),
    // Init command
    ("init.start", "Initializing LingoX configuration..."),
    ("init.config_exists", "Configuration file already exists: {}"),
    ("init.use_force_hint", "Use --force to overwrite it"),
    ("init.config_created", "Configuration file created: {}"),
    (
        "init.next_steps",
        "Edit the [workspace] section, then run 'lingox check'",
    ),
    ("init.create_failed", "Failed to create configuration file: {}"),
];
