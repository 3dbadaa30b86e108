pub mod question;
pub mod responses;

pub use question::{
    Category, NewQuestion, Question, QuestionDraft, QuizCategoryDraft, QuizDraft, SearchDraft,
};
pub use responses::{
    CategoriesPayload, CreatePayload, DeletePayload, QuestionListPayload, QuizPayload,
};
