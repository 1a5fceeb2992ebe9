use axum::Json;

use crate::dork::Categories;

/// GET /api/categories - 可用的分类取值
pub async fn get_categories() -> Json<Categories> {
    Json(Categories::all())
}
