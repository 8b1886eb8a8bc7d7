use chrono::NaiveDate;

use dotgrid_wallpaper::config::load_spec;
use dotgrid_wallpaper::*;

#[test]
fn spec_file_renders_to_sink() {
    let dir = tempfile::tempdir().unwrap();
    let spec_path = dir.path().join("spec.json");
    std::fs::write(
        &spec_path,
        r##"{
            "mode": "goals",
            "shape": "heart",
            "vertical_bias": -1,
            "goals": [
                {"title": "Launch", "start": "2024-01-01", "deadline": "2024-01-10"}
            ],
            "special_dates": [
                {"start": "2024-01-03", "end": "2024-01-04", "color": "#22AA66", "goal": "Launch"}
            ]
        }"##,
    )
    .unwrap();

    let spec = load_spec(&spec_path).unwrap();
    assert_eq!(spec.mode_name(), "goals");
    assert_eq!(spec.layout().shape, ShapeKind::Heart);

    let today = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
    let bitmap = render_wallpaper(540, 1200, &spec, today).unwrap();

    let out = dir.path().join("out");
    PngDirectorySink::new(&out)
        .apply(&bitmap, WallpaperTarget::Both)
        .unwrap();

    for name in ["home.png", "lock.png"].iter() {
        let bytes = std::fs::read(out.join(name)).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }
}

#[test]
fn missing_spec_file_names_the_path() {
    let err = load_spec("/nonexistent/dotgrid/spec.json").unwrap_err();
    assert!(format!("{:#}", err).contains("spec.json"));
}

#[test]
fn malformed_color_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let spec_path = dir.path().join("spec.json");
    std::fs::write(&spec_path, r##"{"mode":"year","theme":{"background":"nope","filled":"#FFFFFF","empty":"#000000","today":"#FF0000"}}"##)
        .unwrap();

    assert!(load_spec(&spec_path).is_err());
}
