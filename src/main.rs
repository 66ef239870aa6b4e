use dotenv::dotenv;
use human_panic::setup_panic;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use rust_sumwrite_next::config::AppConfig;
use rust_sumwrite_next::errors::Result;
use rust_sumwrite_next::models::assignments::requests::AssignmentListQuery;
use rust_sumwrite_next::models::reviews::requests::RecordReviewRequest;
use rust_sumwrite_next::models::users::entities::UserRole;
use rust_sumwrite_next::models::users::requests::UserListQuery;
use rust_sumwrite_next::runtime::lifetime;
use rust_sumwrite_next::services::{
    AssignmentService, ReviewService, StatsService, SubmissionService, UserService,
};
use rust_sumwrite_next::storage::Storage;

#[tokio::main]
async fn main() {
    dotenv().ok();

    // 记录程序启动时间
    let app_start_time = chrono::Utc::now();

    // 启动前预处理 //

    // 初始化配置
    setup_panic!();
    AppConfig::init().expect("Failed to initialize configuration");
    let config = AppConfig::get();

    // 初始化日志
    let stdout_log = std::io::stdout();
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    // 打印信息
    warn!(
        "Starting pre-startup processing...
        Project: {}
        Version: {}
        Authors: {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS")
    );

    let startup = lifetime::startup::prepare_startup().await;
    let storage = startup.storage.clone();

    // 输出预处理时间
    debug!(
        "Pre-startup processing completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(app_start_time)
            .num_milliseconds()
    );

    // 预处理完成 //

    // 无接入层时演示一遍完整工作流：建稿 → 改稿 → 交稿 → 批阅 → 统计
    if let Err(e) = run_workflow_demo(storage).await {
        error!("Workflow demo failed: {}", e.format_simple());
        std::process::exit(1);
    }
}

/// 用示例数据走一遍提交与批阅工作流
async fn run_workflow_demo(storage: Arc<dyn Storage>) -> Result<()> {
    let users = UserService::new(storage.clone());
    let assignments = AssignmentService::new(storage.clone());
    let submissions = SubmissionService::new(storage.clone());
    let reviews = ReviewService::new(storage.clone());
    let stats = StatsService::new(storage.clone());

    let teacher = users
        .list_users(UserListQuery {
            role: Some(UserRole::Teacher),
            ..Default::default()
        })
        .await?
        .items
        .into_iter()
        .next()
        .expect("demo dataset has a teacher");
    let student = users
        .list_users(UserListQuery {
            role: Some(UserRole::Student),
            ..Default::default()
        })
        .await?
        .items
        .into_iter()
        .next()
        .expect("demo dataset has a student");

    // 取一条有句数限制的任务
    let assignment = assignments
        .list_assignments(AssignmentListQuery::default())
        .await?
        .items
        .into_iter()
        .find(|a| a.sentence_limit == Some(3))
        .expect("demo dataset has a sentence-limited assignment");

    info!(
        "Demo: student \"{}\" works on assignment \"{}\"",
        student.name, assignment.title
    );

    let draft = submissions.start_draft(assignment.id, student.id).await?;

    // 四句摘要超出三句上限，交稿会被拒
    submissions
        .edit_draft(
            draft.id,
            "太阳系共有八颗行星. 地球是唯一已知存在生命的行星. 木星是体积最大的行星. 它们都围绕太阳运转.",
        )
        .await?;
    match submissions.submit(draft.id).await {
        Err(e) if e.is_validation() => {
            info!("Demo: first submit rejected as expected ({})", e.message());
        }
        Ok(_) => unreachable!("over-limit summary should be rejected"),
        Err(e) => return Err(e),
    }

    // 压缩到三句后交稿
    submissions
        .edit_draft(
            draft.id,
            "太阳系共有八颗行星. 地球是唯一已知存在生命的行星. 木星是体积最大的行星.",
        )
        .await?;
    let submitted = submissions.submit(draft.id).await?;
    info!(
        "Demo: submission {} submitted at {:?}",
        submitted.id, submitted.submitted_at
    );

    // 教师从队列里取出并批阅
    let queue = reviews.pending_queue().await?;
    info!("Demo: {} submission(s) in review queue", queue.items.len());

    reviews
        .record_review(
            submitted.id,
            teacher.id,
            &teacher.name,
            RecordReviewRequest {
                score: 90.0,
                comments: "要点齐全，句子通顺。注意行星名称的书写。".to_string(),
            },
        )
        .await?;

    // 双方看板
    let student_stats = stats.student_stats(student.id).await?;
    info!(
        "Demo: student \"{}\" average {:?}, {} submission(s)",
        student_stats.name, student_stats.average_score, student_stats.submission_count
    );

    if let Some(class_id) = student.class_id {
        let class_stats = stats.class_stats(class_id).await?;
        info!(
            "Demo: class \"{}\" average {:?}, {} submission(s), {} pending review(s)",
            class_stats.name,
            class_stats.average_score,
            class_stats.total_submissions,
            class_stats.pending_reviews
        );
    }

    Ok(())
}
