use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// 题目实体
///
/// 序列化形状即对外投影：{id, question, answer, difficulty, category}，
/// 因此实体本身就是传输记录，无需单独的 DTO。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// 存储层分配的唯一标识，创建后不可变
    pub id: u64,
    /// 题干文本
    pub question: String,
    /// 答案文本
    pub answer: String,
    /// 难度（约定 1-5，不强制）
    pub difficulty: u32,
    /// 所属分类的标识（仅作参考，不校验外键）
    pub category: u64,
}

/// 分类实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    /// 分类名称（`type` 是 Rust 关键字，改名存储）
    #[serde(rename = "type")]
    pub kind: String,
}

/// 校验通过的题目创建数据
#[derive(Debug, Clone, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: u32,
    pub category: u64,
}

/// 题目创建请求的原始载荷
///
/// 所有字段均为可选，由 `validate` 做显式的存在性检查，
/// 缺失或空白字段返回 BadRequest，而不是依赖反序列化失败。
/// 原版前端会把 difficulty / category 以字符串形式提交，
/// 这里沿用字符串或整数皆可的宽松解析。
#[derive(Debug, Default, Deserialize)]
pub struct QuestionDraft {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "flexible_u64")]
    pub difficulty: Option<u64>,
    #[serde(default, deserialize_with = "flexible_u64")]
    pub category: Option<u64>,
}

impl QuestionDraft {
    /// 校验创建请求
    ///
    /// # 返回
    /// 四个字段齐全且题干/答案非空白时返回 NewQuestion，否则返回 BadRequest
    pub fn validate(self) -> Result<NewQuestion, ApiError> {
        let question = match self.question {
            Some(q) if !q.trim().is_empty() => q,
            _ => return Err(ApiError::bad_request("缺少 question 字段")),
        };
        let answer = match self.answer {
            Some(a) if !a.trim().is_empty() => a,
            _ => return Err(ApiError::bad_request("缺少 answer 字段")),
        };
        let difficulty = self
            .difficulty
            .ok_or_else(|| ApiError::bad_request("缺少 difficulty 字段"))?;
        let difficulty = u32::try_from(difficulty)
            .map_err(|_| ApiError::bad_request(format!("difficulty 超出范围: {}", difficulty)))?;
        let category = self
            .category
            .ok_or_else(|| ApiError::bad_request("缺少 category 字段"))?;

        Ok(NewQuestion {
            question,
            answer,
            difficulty,
            category,
        })
    }
}

/// 搜索请求载荷
#[derive(Debug, Default, Deserialize)]
pub struct SearchDraft {
    #[serde(default)]
    pub search_term: Option<String>,
}

/// 答题请求载荷
#[derive(Debug, Default, Deserialize)]
pub struct QuizDraft {
    #[serde(default)]
    pub previous_questions: Option<Vec<u64>>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategoryDraft>,
}

/// 答题请求中的分类选择，id 为 0 表示全部分类
#[derive(Debug, Default, Deserialize)]
pub struct QuizCategoryDraft {
    #[serde(default, deserialize_with = "flexible_u64")]
    pub id: Option<u64>,
}

impl QuizDraft {
    /// 校验答题请求
    ///
    /// # 返回
    /// 返回 (排除集, 分类id)，任一字段缺失返回 BadRequest
    pub fn validate(self) -> Result<(Vec<u64>, u64), ApiError> {
        let previous = self
            .previous_questions
            .ok_or_else(|| ApiError::bad_request("缺少 previous_questions 字段"))?;
        let category_id = self
            .quiz_category
            .and_then(|c| c.id)
            .ok_or_else(|| ApiError::bad_request("缺少 quiz_category.id 字段"))?;
        Ok((previous, category_id))
    }
}

// Helper to deserialize an id-like field as either integer or numeric string
fn flexible_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;
    use std::fmt;

    struct FlexibleU64Visitor;

    impl<'de> Visitor<'de> for FlexibleU64Visitor {
        type Value = Option<u64>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a non-negative integer or numeric string")
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            u64::try_from(value)
                .map(Some)
                .map_err(|_| E::custom(format!("标识必须为非负整数: {}", value)))
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            value
                .trim()
                .parse::<u64>()
                .map(Some)
                .map_err(|_| E::custom(format!("无法解析为整数: {}", value)))
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(FlexibleU64Visitor)
}
