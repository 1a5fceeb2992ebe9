//! Query string assembly / 查询语句拼接

use super::vocabulary::CATEGORY_ORDER;
use crate::models::DorkCriteria;

/// Build the dork query for the given criteria / 根据条件构建Dork查询
///
/// Output order is fixed: `site:` term, keywords, then file types,
/// vulnerability, CMS, auth and error fragments. Within a category the input
/// order is kept. Unrecognized selector values contribute nothing.
pub fn build_query(criteria: &DorkCriteria) -> String {
    let mut query = format!("site:{}", criteria.domain);

    for keyword in &criteria.keywords {
        query.push(' ');
        query.push_str(keyword);
    }

    for category in CATEGORY_ORDER {
        for value in criteria.selectors(category) {
            match category.fragment(value) {
                Some(fragment) => {
                    query.push(' ');
                    query.push_str(fragment);
                }
                None => tracing::debug!("Ignoring unknown {} value: {}", category.json_key(), value),
            }
        }
    }

    query
}

/// Append the query to the search engine prefix / 生成搜索链接
///
/// With `encode` the query is percent-encoded; otherwise it is appended as-is.
pub fn build_search_url(engine_url: &str, query: &str, encode: bool) -> String {
    if encode {
        format!("{}{}", engine_url, urlencoding::encode(query))
    } else {
        format!("{}{}", engine_url, query)
    }
}
