//! Domain pattern detection over task text.
//!
//! Each [`PatternCategory`] is bound to a fixed bilingual alternation of
//! domain words (English and Japanese). Detection is a case-insensitive
//! substring match — a category is present iff any alternative occurs
//! anywhere in the task text.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// A fixed domain bucket detectable in task text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternCategory {
    Api,
    Frontend,
    Backend,
    Test,
    Security,
    Performance,
    Docs,
    Infra,
    Data,
    Mobile,
}

impl PatternCategory {
    /// All ten categories, in table order.
    pub const ALL: [PatternCategory; 10] = [
        PatternCategory::Api,
        PatternCategory::Frontend,
        PatternCategory::Backend,
        PatternCategory::Test,
        PatternCategory::Security,
        PatternCategory::Performance,
        PatternCategory::Docs,
        PatternCategory::Infra,
        PatternCategory::Data,
        PatternCategory::Mobile,
    ];

    /// Category name as it appears in agent names (scoring contract).
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternCategory::Api => "api",
            PatternCategory::Frontend => "frontend",
            PatternCategory::Backend => "backend",
            PatternCategory::Test => "test",
            PatternCategory::Security => "security",
            PatternCategory::Performance => "performance",
            PatternCategory::Docs => "docs",
            PatternCategory::Infra => "infra",
            PatternCategory::Data => "data",
            PatternCategory::Mobile => "mobile",
        }
    }

    /// Fixed matching rule: an alternation of domain words, tested against
    /// the lower-cased task text. Additions and removals are data changes
    /// here, not control-flow edits.
    fn rule(&self) -> &'static str {
        match self {
            PatternCategory::Api => "api|endpoint|rest|graphql|swagger|openapi",
            PatternCategory::Frontend => "ui|ux|画面|コンポーネント|component|react|vue|angular",
            PatternCategory::Backend => "バックエンド|backend|サーバー|server|database|db",
            PatternCategory::Test => "テスト|test|spec|単体|結合|e2e",
            PatternCategory::Security => {
                "セキュリティ|security|脆弱性|vulnerability|認証|authorization"
            }
            PatternCategory::Performance => {
                "パフォーマンス|performance|最適化|optimization|速度|speed"
            }
            PatternCategory::Docs => "ドキュメント|document|docs|readme|仕様書",
            PatternCategory::Infra => "インフラ|infrastructure|docker|kubernetes|aws|gcp|azure",
            PatternCategory::Data => "データ|data|分析|analysis|集計|aggregate",
            PatternCategory::Mobile => "モバイル|mobile|ios|android|react native",
        }
    }
}

impl std::fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compiled category → rule table, built once per process.
static PATTERN_RULES: LazyLock<Vec<(PatternCategory, Regex)>> = LazyLock::new(|| {
    PatternCategory::ALL
        .iter()
        .map(|category| {
            let regex = Regex::new(category.rule()).expect("fixed pattern rule compiles");
            (*category, regex)
        })
        .collect()
});

/// Detect which domain categories the task text belongs to.
///
/// Pure function over the fixed rule table. Returns zero, some, or all ten
/// categories; an empty set is a valid and common result.
pub fn detect_patterns(task_text: &str) -> BTreeSet<PatternCategory> {
    let task_lower = task_text.to_lowercase();

    PATTERN_RULES
        .iter()
        .filter(|(_, regex)| regex.is_match(&task_lower))
        .map(|(category, _)| *category)
        .collect()
}
