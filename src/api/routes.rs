use std::sync::Arc;

use axum::extract::{FromRequest, Path, Query, Request, State};
use axum::http::{header, Method};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};

use crate::error::{ApiError, ApiResult};
use crate::models::{
    CategoriesPayload, CreatePayload, DeletePayload, QuestionDraft, QuestionListPayload,
    QuizDraft, QuizPayload, SearchDraft,
};
use crate::orchestrator::Orchestrator;

/// 分页查询参数，缺省为第 1 页
#[derive(Debug, Deserialize)]
struct PageQuery {
    #[serde(default = "default_page")]
    page: usize,
}

fn default_page() -> usize {
    1
}

/// JSON 请求体提取器
///
/// axum 自带的 Json 拒绝响应是纯文本，这里把解析失败统一映射为
/// BadRequest，保证所有错误都是 {success, error, message} 三字段形状
struct ApiJson<T>(T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(ApiError::bad_request(rejection.body_text())),
        }
    }
}

/// 构建应用路由
///
/// CORS 策略沿用原版：允许 Content-Type / Authorization 头
/// 和 GET / POST / DELETE 方法。
pub fn router(orchestrator: Arc<Orchestrator>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_methods([Method::GET, Method::POST, Method::DELETE]);

    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(get_questions_by_category))
        .route("/questions", get(get_questions).post(create_question))
        .route("/questions/{id}", delete(delete_question))
        .route("/questions/search", post(search_questions))
        .route("/quizzes", post(play_quiz))
        .layer(cors)
        .with_state(orchestrator)
}

async fn get_categories(
    State(orchestrator): State<Arc<Orchestrator>>,
) -> ApiResult<Json<CategoriesPayload>> {
    Ok(Json(orchestrator.list_categories()?))
}

async fn get_questions(
    State(orchestrator): State<Arc<Orchestrator>>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<QuestionListPayload>> {
    Ok(Json(orchestrator.list_questions(query.page)?))
}

async fn get_questions_by_category(
    State(orchestrator): State<Arc<Orchestrator>>,
    Path(category_id): Path<u64>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<QuestionListPayload>> {
    Ok(Json(
        orchestrator.questions_by_category(category_id, query.page)?,
    ))
}

async fn create_question(
    State(orchestrator): State<Arc<Orchestrator>>,
    ApiJson(draft): ApiJson<QuestionDraft>,
) -> ApiResult<Json<CreatePayload>> {
    Ok(Json(orchestrator.create_question(draft)?))
}

async fn delete_question(
    State(orchestrator): State<Arc<Orchestrator>>,
    Path(id): Path<u64>,
) -> ApiResult<Json<DeletePayload>> {
    Ok(Json(orchestrator.delete_question(id)?))
}

async fn search_questions(
    State(orchestrator): State<Arc<Orchestrator>>,
    Query(query): Query<PageQuery>,
    ApiJson(draft): ApiJson<SearchDraft>,
) -> ApiResult<Json<QuestionListPayload>> {
    Ok(Json(
        orchestrator.search_questions(draft.search_term.as_deref(), query.page)?,
    ))
}

async fn play_quiz(
    State(orchestrator): State<Arc<Orchestrator>>,
    ApiJson(draft): ApiJson<QuizDraft>,
) -> ApiResult<Json<QuizPayload>> {
    Ok(Json(orchestrator.play_quiz(draft)?))
}
