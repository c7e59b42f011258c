use std::net::SocketAddr;
use std::time::Duration;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;

use dx_checkup::config::ChartConfig;
use dx_checkup::workflows::checksheet::report::{
    build_report_document, chart_outcome, render_html, Block, ChartOutcome, ChartRenderer,
    QuickChartRenderer,
};
use dx_checkup::workflows::checksheet::{default_comment, Comment, CommentSource, ScoreReport};

const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

async fn spawn_chart_service(status: StatusCode) -> SocketAddr {
    let app = Router::new().route(
        "/chart",
        post(move || async move {
            if status == StatusCode::OK {
                (status, [(header::CONTENT_TYPE, "image/png")], PNG_BYTES).into_response()
            } else {
                (status, "chart failure").into_response()
            }
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind chart listener");
    let addr = listener.local_addr().expect("chart address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("chart server runs");
    });
    addr
}

fn renderer(addr: SocketAddr) -> QuickChartRenderer {
    let config = ChartConfig {
        endpoint: Some(format!("http://{addr}/chart")),
        timeout: Duration::from_secs(5),
    };
    QuickChartRenderer::from_config(&config)
        .expect("chart client builds")
        .expect("endpoint configured")
}

fn report() -> ScoreReport {
    ScoreReport::from_scores([2, 4, 5, 1]).expect("valid scores")
}

fn fallback_comment(report: &ScoreReport) -> Comment {
    Comment {
        text: default_comment(report),
        source: CommentSource::Fallback,
    }
}

#[tokio::test]
async fn rendered_chart_is_embedded_as_data_uri() {
    let addr = spawn_chart_service(StatusCode::OK).await;
    let renderer = renderer(addr);
    let report = report();

    let outcome = chart_outcome(Some(&renderer as &dyn ChartRenderer), &report).await;
    let ChartOutcome::Rendered(image) = &outcome else {
        panic!("expected a rendered chart, got {outcome:?}");
    };
    assert_eq!(image.png, PNG_BYTES);

    let html = render_html(&build_report_document(
        &report,
        &fallback_comment(&report),
        outcome.clone(),
    ));
    assert!(html.contains("<img src=\"data:image/png;base64,iVBORw0KGgo=\""));
}

#[tokio::test]
async fn chart_service_failure_degrades_to_listing() {
    let addr = spawn_chart_service(StatusCode::INTERNAL_SERVER_ERROR).await;
    let renderer = renderer(addr);
    let report = report();

    let outcome = chart_outcome(Some(&renderer as &dyn ChartRenderer), &report).await;
    assert_eq!(outcome, ChartOutcome::Unavailable);

    let document = build_report_document(&report, &fallback_comment(&report), outcome);
    let html = render_html(&document);
    assert!(!html.contains("<img"));
    assert!(html.contains("<li>業務プロセス・効率化: 4 / 5</li>"));
}

#[test]
fn report_sections_appear_in_order() {
    let report = report();
    let html = render_html(&build_report_document(
        &report,
        &fallback_comment(&report),
        ChartOutcome::Disabled,
    ));

    let markers = [
        "パーソナル診断レポート",
        "<hr>",
        "総合診断結果",
        "貴社の総合スコアは 12 / 20 点です。",
        "診断タイプ： 【黄信号】課題が山積！アナログ業務見直しタイプ",
        "カテゴリ別スコア",
        "総合評価",
        "総合スコア 12/20点: 改善が必要",
        "ITコンサルタントによるAI分析コメント",
        "<h2>総合診断結果について</h2>",
        "<h2>最優先で取り組むべき課題</h2>",
        "<h2>次のステップについて</h2>",
        "次のステップのご案内",
        "info@example.com",
    ];
    let mut cursor = 0;
    for marker in markers {
        let offset = html[cursor..]
            .find(marker)
            .unwrap_or_else(|| panic!("missing or out of order: {marker}"));
        cursor += offset + marker.len();
    }
}

#[test]
fn fallback_comment_headings_each_start_a_page_except_the_first() {
    let report = report();
    let document = build_report_document(
        &report,
        &fallback_comment(&report),
        ChartOutcome::Disabled,
    );
    let blocks = document.blocks();

    let section_positions: Vec<usize> = blocks
        .iter()
        .enumerate()
        .filter(|(_, block)| matches!(block, Block::Heading { level: 2, .. }))
        .map(|(index, _)| index)
        .collect();
    // overview, top issue, four categories, next steps
    assert_eq!(section_positions.len(), 7);
    assert!(!matches!(blocks[section_positions[0] - 1], Block::PageBreak));
    for position in &section_positions[1..] {
        assert_eq!(blocks[position - 1], Block::PageBreak);
    }
}
