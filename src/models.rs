use serde::{Deserialize, Deserializer, Serialize};

use crate::dork::Category;

/// Dork generation request / Dork生成请求
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DorkCriteria {
    pub domain: String,
    #[serde(default, deserialize_with = "nullable_list")]
    pub keywords: Vec<String>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub file_types: Vec<String>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub vulnerability: Vec<String>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub cms: Vec<String>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub auth: Vec<String>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub errors: Vec<String>,
}

impl DorkCriteria {
    /// Selector values for one category / 获取某分类的选择值
    pub fn selectors(&self, category: Category) -> &[String] {
        match category {
            Category::FileType => &self.file_types,
            Category::Vulnerability => &self.vulnerability,
            Category::Cms => &self.cms,
            Category::Auth => &self.auth,
            Category::Error => &self.errors,
        }
    }
}

/// `null` is accepted wherever a list is expected
fn nullable_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DorkResponse {
    pub query: String,
    pub url: String,
}

/// Saved query owned by the store / 已保存的查询
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedDork {
    pub id: u64,
    pub name: String,
    pub query: String,
    pub description: String,
}

/// Request body for saving a query; any `id` sent by the client is ignored
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSavedDork {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub description: String,
}
