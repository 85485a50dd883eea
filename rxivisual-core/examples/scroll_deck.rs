use rxivisual::{DeckConfig, DeckSession, PaperOutline, SpringParams, Viewport};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let outline = PaperOutline::from_json_str(
        r#"{
  "title": "Attention Is All You Need",
  "sections": [
    { "id": "intro", "title": "Introduction" },
    { "id": "background", "title": "Background" },
    { "id": "model", "title": "Model Architecture" },
    { "id": "training", "title": "Training" },
    { "id": "results", "title": "Results" }
  ]
}"#,
    )?;

    let viewport = Viewport::new(1280.0, 800.0);
    let mut session = outline
        .session(DeckConfig::default(), viewport)?
        .with_spring(SpringParams::default());
    session.add_listener(move |c: &rxivisual::ActiveChange| {
        tracing::info!(card = c.current, normalized = c.normalized, "now reading");
    });

    // Scroll the whole track in 60 fps ticks, pausing on each card.
    let track = session.track_height_px();
    let scrollable = track - viewport.height;
    for card in 0..=outline.card_count() {
        let target = scrollable * card as f64 / outline.card_count() as f64;
        session.scroll_to_offset(target);
        for _ in 0..90 {
            session.tick(1.0 / 60.0);
        }
        let frame = session.frame();
        let title = outline
            .section(frame.active_index)
            .map(|s| s.title.as_str())
            .unwrap_or("");
        println!(
            "offset={target:>7.1} progress={:.3} active={} ({title}) exit={:.2}",
            frame.progress, frame.active_index, frame.exit_progress
        );
    }
    Ok(())
}
