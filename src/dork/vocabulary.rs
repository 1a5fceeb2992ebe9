//! Fixed selector vocabularies / 固定选择器词表
//!
//! Each category maps a selector value to the query fragment it contributes.
//! The same tables back the builder and `GET /api/categories`.

use serde::Serialize;

/// Selector category / 选择器分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    FileType,
    Vulnerability,
    Cms,
    Auth,
    Error,
}

/// Categories in the order their fragments are appended / 拼接顺序
pub const CATEGORY_ORDER: [Category; 5] = [
    Category::FileType,
    Category::Vulnerability,
    Category::Cms,
    Category::Auth,
    Category::Error,
];

const FILE_TYPES: &[(&str, &str)] = &[
    ("pdf", "filetype:pdf"),
    ("doc", "filetype:doc OR filetype:docx"),
    ("xls", "filetype:xls OR filetype:xlsx"),
    ("zip", "filetype:zip OR filetype:rar OR filetype:tar.gz"),
    ("sql", "filetype:sql"),
    ("php", "filetype:php"),
    ("asp", "filetype:asp OR filetype:aspx"),
];

const VULNERABILITIES: &[(&str, &str)] = &[
    ("directory_listing", r#"intitle:"index of""#),
    ("exposed_config", r#"intext:"config" OR intext:"configuration""#),
    ("database_exposure", r#"intext:"mysql" OR intext:"database""#),
    ("log_files", r#"filetype:log OR intext:"error log""#),
    ("backup_files", r#"filetype:bak OR filetype:backup OR intext:"backup""#),
];

const CMS_PATTERNS: &[(&str, &str)] = &[
    ("wordpress", r#"intext:"powered by wordpress" OR intext:"wp-content""#),
    ("joomla", r#"intext:"powered by joomla" OR intext:"joomla""#),
    ("drupal", r#"intext:"powered by drupal" OR intext:"drupal""#),
    ("phpinfo", r#"intext:"phpinfo()" OR intext:"php version""#),
];

const AUTH_PATTERNS: &[(&str, &str)] = &[
    ("login", r#"intext:"login" OR intext:"sign in""#),
    ("admin", r#"intext:"admin" OR intext:"administrator""#),
    ("password", r#"intext:"password" OR intext:"passwd""#),
    ("user_list", r#"intext:"user" OR intext:"username""#),
];

const ERROR_PATTERNS: &[(&str, &str)] = &[
    ("sql_error", r#"intext:"sql error" OR intext:"mysql error""#),
    ("server_error", r#"intext:"server error" OR intext:"500 error""#),
    ("stack_trace", r#"intext:"stack trace" OR intext:"exception""#),
    ("debug_info", r#"intext:"debug" OR intext:"development""#),
];

impl Category {
    /// Field name used in request bodies and the categories listing / JSON字段名
    pub fn json_key(self) -> &'static str {
        match self {
            Category::FileType => "fileTypes",
            Category::Vulnerability => "vulnerability",
            Category::Cms => "cms",
            Category::Auth => "auth",
            Category::Error => "errors",
        }
    }

    /// (value, fragment) pairs in listing order
    pub fn entries(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Category::FileType => FILE_TYPES,
            Category::Vulnerability => VULNERABILITIES,
            Category::Cms => CMS_PATTERNS,
            Category::Auth => AUTH_PATTERNS,
            Category::Error => ERROR_PATTERNS,
        }
    }

    /// Look up the fragment for a selector value, `None` if unrecognized / 查找片段
    pub fn fragment(self, value: &str) -> Option<&'static str> {
        self.entries()
            .iter()
            .find(|(key, _)| *key == value)
            .map(|(_, fragment)| *fragment)
    }

    pub fn values(self) -> Vec<&'static str> {
        self.entries().iter().map(|(key, _)| *key).collect()
    }
}

/// Recognized values per category / 各分类可识别的取值
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Categories {
    pub file_types: Vec<&'static str>,
    pub vulnerability: Vec<&'static str>,
    pub cms: Vec<&'static str>,
    pub auth: Vec<&'static str>,
    pub errors: Vec<&'static str>,
}

impl Categories {
    pub fn all() -> Self {
        Self {
            file_types: Category::FileType.values(),
            vulnerability: Category::Vulnerability.values(),
            cms: Category::Cms.values(),
            auth: Category::Auth.values(),
            errors: Category::Error.values(),
        }
    }
}
