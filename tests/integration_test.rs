use std::sync::Arc;

use trivia_api::error::ApiError;
use trivia_api::models::{Category, NewQuestion, QuestionDraft, QuizDraft};
use trivia_api::store::{StoreError, StoreResult};
use trivia_api::{MemoryStore, Orchestrator, Question, TriviaStore};

/// 构建测试题库：2 个分类，12 道题（8 道分类 1，4 道分类 2），
/// 其中 2 道题干含 "title"（大小写各一）
fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new(vec![
        Category {
            id: 1,
            kind: "Science".to_string(),
        },
        Category {
            id: 2,
            kind: "History".to_string(),
        },
    ]);

    let questions = [
        ("Whose autobiography is entitled 'Caged Bird'?", 1),
        ("Who discovered penicillin?", 1),
        ("What is the heaviest organ in the human body?", 1),
        ("What is the chemical symbol for gold?", 1),
        ("What planet is closest to the sun?", 1),
        ("How many bones are in the human body?", 1),
        ("What gas do plants absorb?", 1),
        ("What is the speed of light?", 1),
        ("What was the Title of Napoleon before 1804?", 2),
        ("Who invented Peanut Butter?", 2),
        ("Which country won the first soccer World Cup?", 2),
        ("When did the Roman Empire fall?", 2),
    ];
    for (text, category) in questions {
        store
            .insert_question(NewQuestion {
                question: text.to_string(),
                answer: "answer".to_string(),
                difficulty: 1,
                category,
            })
            .expect("写入测试数据失败");
    }
    store
}

fn orchestrator() -> Orchestrator {
    Orchestrator::new(Arc::new(seeded_store()))
}

#[test]
fn first_page_is_full_and_total_reflects_all() {
    let payload = orchestrator().list_questions(1).unwrap();

    assert!(payload.success);
    assert_eq!(payload.questions.len(), 10);
    assert_eq!(payload.total_questions, 12);
    assert_eq!(payload.current_category, None);
    assert_eq!(payload.categories.len(), 2);
}

#[test]
fn partial_last_page_length_matches_remainder() {
    let payload = orchestrator().list_questions(2).unwrap();

    // 12 道题的第 2 页应得 12 - 10 = 2 条
    assert_eq!(payload.questions.len(), 2);
    assert_eq!(payload.total_questions, 12);
}

#[test]
fn page_beyond_last_yields_not_found() {
    let result = orchestrator().list_questions(10);
    assert!(matches!(result, Err(ApiError::NotFound)));
}

#[test]
fn categories_listing_and_empty_store_rule() {
    let payload = orchestrator().list_categories().unwrap();
    assert_eq!(payload.categories[&1], "Science");

    let empty = Orchestrator::new(Arc::new(MemoryStore::new(Vec::new())));
    assert!(matches!(empty.list_categories(), Err(ApiError::NotFound)));
}

#[test]
fn search_matches_question_text_case_insensitively() {
    let payload = orchestrator().search_questions(Some("title"), 1).unwrap();

    assert_eq!(payload.total_questions, 2);
    for q in &payload.questions {
        assert!(q.question.to_lowercase().contains("title"));
    }
}

#[test]
fn missing_or_blank_search_term_is_bad_request() {
    let orch = orchestrator();
    assert!(matches!(
        orch.search_questions(None, 1),
        Err(ApiError::BadRequest { .. })
    ));
    assert!(matches!(
        orch.search_questions(Some("   "), 1),
        Err(ApiError::BadRequest { .. })
    ));
}

#[test]
fn search_with_no_hits_is_not_found() {
    let result = orchestrator().search_questions(Some("zzz-no-such"), 1);
    assert!(matches!(result, Err(ApiError::NotFound)));
}

#[test]
fn delete_is_permanent_and_second_attempt_fails() {
    let orch = orchestrator();

    let payload = orch.delete_question(5).unwrap();
    assert_eq!(payload.deleted, 5);

    // 删除后任何列表都不应再出现该标识
    let listing = orch.list_questions(1).unwrap();
    assert!(listing.questions.iter().all(|q| q.id != 5));
    assert_eq!(listing.total_questions, 11);

    assert!(matches!(orch.delete_question(5), Err(ApiError::NotFound)));
}

#[test]
fn create_assigns_fresh_id_and_empty_draft_is_rejected() {
    let orch = orchestrator();

    let draft: QuestionDraft = serde_json::from_str(
        r#"{"question":"What is the symbol for Silver?","answer":"Ag","difficulty":"1","category":"1"}"#,
    )
    .unwrap();
    let payload = orch.create_question(draft).unwrap();
    assert!(payload.success);
    assert_eq!(payload.item.id, 13);

    let listing = orch.list_questions(2).unwrap();
    assert_eq!(listing.total_questions, 13);

    let empty: QuestionDraft = serde_json::from_str("{}").unwrap();
    assert!(matches!(
        orch.create_question(empty),
        Err(ApiError::BadRequest { .. })
    ));
}

#[test]
fn quiz_walks_category_in_store_order_until_exhaustion() {
    let orch = orchestrator();
    let mut previous: Vec<u64> = Vec::new();

    // 分类 2 共 4 道题（id 9-12），应按存储顺序依次出现
    for expected_id in 9..=12u64 {
        let draft = quiz_draft(&previous, 2);
        let payload = orch.play_quiz(draft).unwrap();
        let question = payload.question.expect("候选未耗尽时应有题目");
        assert_eq!(question.id, expected_id);
        previous.push(question.id);
    }

    // 耗尽后仍然 success，question 为空
    let payload = orch.play_quiz(quiz_draft(&previous, 2)).unwrap();
    assert!(payload.success);
    assert!(payload.question.is_none());
}

#[test]
fn quiz_category_zero_means_all_questions() {
    let orch = orchestrator();
    let payload = orch.play_quiz(quiz_draft(&[], 0)).unwrap();
    assert_eq!(payload.question.unwrap().id, 1);

    let payload = orch.play_quiz(quiz_draft(&[1, 2], 0)).unwrap();
    assert_eq!(payload.question.unwrap().id, 3);
}

#[test]
fn quiz_with_missing_fields_is_bad_request() {
    let draft: QuizDraft = serde_json::from_str("{}").unwrap();
    assert!(matches!(
        orchestrator().play_quiz(draft),
        Err(ApiError::BadRequest { .. })
    ));
}

#[test]
fn unknown_category_listing_is_not_found() {
    let result = orchestrator().questions_by_category(42, 1);
    assert!(matches!(result, Err(ApiError::NotFound)));
}

#[test]
fn category_listing_sets_current_category() {
    let payload = orchestrator().questions_by_category(2, 1).unwrap();
    assert_eq!(payload.current_category, Some(2));
    assert_eq!(payload.total_questions, 4);
    assert!(payload.questions.iter().all(|q| q.category == 2));
}

/// 删除路径上的存储故障应映射为 Unprocessable 而非 NotFound
#[test]
fn store_fault_during_delete_maps_to_unprocessable() {
    struct FaultyStore;

    impl TriviaStore for FaultyStore {
        fn scan_questions(&self) -> StoreResult<Vec<Question>> {
            Ok(Vec::new())
        }
        fn questions_by_category(&self, _category_id: u64) -> StoreResult<Vec<Question>> {
            Ok(Vec::new())
        }
        fn search_questions(&self, _term: &str) -> StoreResult<Vec<Question>> {
            Ok(Vec::new())
        }
        fn insert_question(&self, _new: NewQuestion) -> StoreResult<Question> {
            Err(StoreError::Backend("插入失败".to_string()))
        }
        fn delete_question(&self, _id: u64) -> StoreResult<bool> {
            Err(StoreError::Backend("磁盘故障".to_string()))
        }
        fn scan_categories(&self) -> StoreResult<Vec<Category>> {
            Ok(Vec::new())
        }
    }

    let orch = Orchestrator::new(Arc::new(FaultyStore));
    assert!(matches!(
        orch.delete_question(1),
        Err(ApiError::Unprocessable { .. })
    ));
}

fn quiz_draft(previous: &[u64], category_id: u64) -> QuizDraft {
    serde_json::from_value(serde_json::json!({
        "previous_questions": previous,
        "quiz_category": { "id": category_id },
    }))
    .unwrap()
}
