//! 班级名册

use super::ClassService;
use crate::errors::{Result, SumWriteError};
use crate::models::classes::responses::ClassRosterResponse;
use crate::storage::Storage;

/// 获取班级与学生名册
pub(crate) async fn get_roster(
    service: &ClassService,
    class_id: i64,
) -> Result<ClassRosterResponse> {
    let class = service
        .storage()
        .get_class_by_id(class_id)
        .await?
        .ok_or_else(|| SumWriteError::not_found(format!("班级不存在: {class_id}")))?;

    let students = service.storage().list_class_students(class_id).await?;

    Ok(ClassRosterResponse { class, students })
}
