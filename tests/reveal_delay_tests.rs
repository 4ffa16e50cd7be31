use std::time::{Duration, Instant};

use lhp_chart::core::Viewport;
use lhp_chart::ingest::{UploadSource, REVEAL_DELAY};
use lhp_chart::{ChartSession, ChartSessionConfig};

const HEADER: &str =
    "ID,Habit Index1,Trust NPS 1,Created At1,Habit Index2,Trust NPS 2,Created At2";

fn one_row_source() -> UploadSource {
    UploadSource::new(
        "report.csv",
        format!("{HEADER}\n1,30,50,2023-01-01,45,60,2023-06-01\n"),
    )
}

#[test]
fn default_reveal_delay_is_two_seconds() {
    assert_eq!(REVEAL_DELAY, Duration::from_secs(2));
    assert_eq!(ChartSessionConfig::default().reveal_delay, REVEAL_DELAY);
}

#[tokio::test]
async fn commit_waits_for_the_configured_reveal_delay() {
    let config = ChartSessionConfig::new(Viewport::default())
        .with_reveal_delay(Duration::from_millis(50));
    let mut session = ChartSession::new(config).expect("session");

    let started = Instant::now();
    session.upload(vec![one_row_source()]).await.expect("upload");
    assert!(started.elapsed() >= Duration::from_millis(50));
    assert_eq!(session.pairs().len(), 1);
}

#[tokio::test]
async fn zero_delay_commits_immediately() {
    let config = ChartSessionConfig::default().with_reveal_delay(Duration::ZERO);
    let mut session = ChartSession::new(config).expect("session");
    session.upload(vec![one_row_source()]).await.expect("upload");
    assert_eq!(session.summary().entries, 1);
}
