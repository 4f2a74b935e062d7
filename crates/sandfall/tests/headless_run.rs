//! End-to-end runs of the headless driver

use sandfall::{App, PaintScript, SandfallConfig, Stroke};
use sandfall_core::ParticleKind;

fn config_in(dir: &std::path::Path, rows: usize, cols: usize) -> SandfallConfig {
    let mut config = SandfallConfig::default();
    config.grid.rows = rows;
    config.grid.cols = cols;
    config.grid.seed = Some(2024);
    config.run.speed_control = 0;
    config.output.directory = dir.join("frames");
    config.output.cell_size = 2;
    config
}

fn stroke(frame: u64, row: i64, col: i64, tool: &str, radius: u32, hold: u64) -> Stroke {
    Stroke {
        frame,
        row,
        col,
        tool: tool.to_string(),
        radius,
        hold,
    }
}

#[test]
fn test_snapshots_are_written() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_in(dir.path(), 20, 10);
    config.run.frames = 7;
    config.output.snapshot_every = 3;

    let mut app = App::new(config, PaintScript::default()).unwrap();
    let summary = app.run().unwrap();

    // Frames 3 and 6, plus the final frame 7
    let names: Vec<_> = summary
        .snapshots
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec!["frame_00003.png", "frame_00006.png", "frame_00007.png"]
    );
    for path in &summary.snapshots {
        let image = image::open(path).unwrap();
        assert_eq!((image.width(), image.height()), (20, 40));
    }
}

#[test]
fn test_sand_pours_onto_the_floor() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_in(dir.path(), 20, 10);
    config.run.frames = 20;
    config.output.snapshot_every = 0;

    let script = PaintScript {
        strokes: vec![stroke(0, 18, 5, "Sand", 1, 1)],
    };
    let mut app = App::new(config, script).unwrap();
    let summary = app.run().unwrap();

    // Sand only swaps, so the population is conserved
    assert_eq!(summary.histogram[ParticleKind::Sand.index()], 5);
    let floor = app.simulation().grid().row(0).unwrap();
    assert!(floor.contains(&ParticleKind::Sand));
}

#[test]
fn test_fire_on_sand_makes_glass() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_in(dir.path(), 6, 6);
    config.run.frames = 30;
    config.output.snapshot_every = 0;

    // A sand floor with fire fed onto it every frame
    let script = PaintScript {
        strokes: vec![
            stroke(0, 0, 0, "Sand", 0, 1),
            stroke(0, 0, 1, "Sand", 0, 1),
            stroke(0, 0, 2, "Sand", 0, 1),
            stroke(0, 0, 3, "Sand", 0, 1),
            stroke(0, 0, 4, "Sand", 0, 1),
            stroke(0, 0, 5, "Sand", 0, 1),
            stroke(0, 1, 2, "Fire", 0, 30),
        ],
    };
    let mut app = App::new(config, script).unwrap();
    let summary = app.run().unwrap();

    assert!(summary.histogram[ParticleKind::Glass.index()] > 0);
    assert!(summary.counters.state_changes > 0);
}

#[test]
fn test_demo_script_parses() {
    let script = PaintScript::parse(include_str!("../scripts/demo.ron")).unwrap();
    assert!(!script.strokes.is_empty());
    assert!(
        script
            .strokes
            .iter()
            .all(|s| ParticleKind::from_tool_name(&s.tool).name() == s.tool)
    );
}
