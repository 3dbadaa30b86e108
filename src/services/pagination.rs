/// 每页题目数，所有分页接口共用，不由调用方配置
pub const QUESTIONS_PER_PAGE: usize = 10;

/// 按页号取出半开区间 [start, end) 对应的切片
///
/// start = (page - 1) * 每页数量，end = start + 每页数量。
/// 超出序列长度的页得到空切片，这本身是合法结果而非错误；
/// 把空页映射为 NotFound 是编排层的策略，不在这里做。
///
/// # 参数
/// - `items`: 已按存储顺序排列的序列
/// - `page`: 页号，从 1 开始（小于 1 按 1 处理）
pub fn paginate<T>(items: &[T], page: usize) -> &[T] {
    // 页号直接来自查询参数，饱和运算保证极端值不会溢出
    let start = page
        .max(1)
        .saturating_sub(1)
        .saturating_mul(QUESTIONS_PER_PAGE);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}
