use crate::models::reviews::entities::Review;
use crate::models::submissions::entities::Submission;
use crate::models::users::entities::User;

/// 统计用的一致性快照
///
/// 三个集合在存储层的同一次读锁内克隆，聚合期间的并发写入不可见。
#[derive(Debug, Clone, Default)]
pub struct CorpusSnapshot {
    pub students: Vec<User>,
    pub submissions: Vec<Submission>,
    pub reviews: Vec<Review>,
}
