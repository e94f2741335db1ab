use lumines_tui::core::GameSession;
use lumines_tui::types::Command;

#[test]
fn snapshot_json_reports_top_out() {
    let mut session = GameSession::new(17);
    while !session.is_over() && session.frame() < 20_000 {
        session.apply_command(Command::SlamReleased);
        session.apply_command(Command::SlamPressed);
        session.update();
    }
    assert!(session.is_over());

    let json = serde_json::to_string(&session.snapshot()).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["outcome"]["kind"], "topOut");
    assert_eq!(v["outcome"]["finalScore"], session.score());
    assert_eq!(v["score"], session.score());
    assert_eq!(v["marked"][0].as_array().map(|row| row.len()), Some(16));
}

#[test]
fn snapshot_cells_use_kind_names() {
    let mut session = GameSession::new(2);
    session.update();
    session.apply_command(Command::SlamPressed);
    for _ in 0..10 {
        session.update();
    }
    let v = serde_json::to_value(session.snapshot()).unwrap();
    let names: Vec<&str> = v["board"][9]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|c| c.as_str())
        .collect();
    assert_eq!(names.len(), 16);
    assert!(names[7] == "colorA" || names[7] == "colorB");
    assert_eq!(names[0], "empty");
}
