//! Error classes of the dynamic entry point, and the guarantee that a
//! rejected call never touches the surface.

mod common;

use common::*;
use rasterdraw::{call, Args, DrawError, ErrorKind, Rect, Value};

fn red() -> Value {
    (255, 0, 0).into()
}

fn ints(v: &[i64]) -> Value {
    Value::Seq(v.iter().map(|&n| n.into()).collect())
}

fn square() -> Vec<Value> {
    vec![(2, 2).into(), (12, 2).into(), (12, 12).into(), (2, 12).into()]
}

/// Run `op` on every target, expect an error of `kind`, and check nothing
/// was drawn or locked.
fn assert_rejected(op: &str, args: &Args, kind: ErrorKind) {
    init_logging();
    for target in TARGETS {
        let mut s = target.make(16, 16);
        let before = snapshot(s.as_ref());
        let err = call(s.as_mut(), op, args).unwrap_err();
        assert_eq!(err.kind(), kind, "{} {}: {}", target.name, op, err);
        assert_eq!(snapshot(s.as_ref()), before, "{} {}", target.name, op);
    }
}

#[test]
fn missing_required_arguments() {
    let cases = [
        ("line", Args::new().arg(red()).arg((1, 1))),
        ("aaline", Args::new().kwarg("start_pos", (1, 1)).kwarg("end_pos", (5, 5))),
        ("lines", Args::new().arg(red()).arg(false)),
        ("polygon", Args::new().arg(red())),
        ("rect", Args::new()),
        ("circle", Args::new().arg(red()).arg((5, 5))),
        ("ellipse", Args::new().kwarg("rect", (1, 1, 5, 5))),
        ("arc", Args::new().arg(red()).arg((1, 1, 5, 5)).arg(0.0)),
    ];
    for (op, args) in &cases {
        assert_rejected(op, args, ErrorKind::Type);
    }
}

#[test]
fn missing_argument_names_the_parameter() {
    let mut s = rasterdraw::PixmapRgba32::new(4, 4);
    let err = call(&mut s, "arc", &Args::new().arg(red()).arg((0, 0, 4, 4)).arg(1.0)).unwrap_err();
    assert_eq!(
        err,
        DrawError::MissingArgument {
            op: "arc",
            param: "stop_angle"
        }
    );
    assert_eq!(err.to_string(), "arc() missing required argument 'stop_angle'");
}

#[test]
fn unknown_and_duplicate_keywords() {
    let base = || Args::new().arg(red()).arg((1, 1)).arg((5, 5));
    assert_rejected("line", &base().kwarg("thickness", 2), ErrorKind::Type);
    assert_rejected("line", &base().kwarg("blend", true), ErrorKind::Type);
    assert_rejected("line", &base().kwarg("start_pos", (0, 0)), ErrorKind::Type);
    assert_rejected("aaline", &base().kwarg("width", 1), ErrorKind::Type);
    assert_rejected("line", &base().arg(1).arg(1), ErrorKind::Type);
    assert_rejected("fill", &base(), ErrorKind::Type);
}

#[test]
fn malformed_geometry_is_type_error() {
    let bad_points: Vec<Value> = vec![
        (1, 2, 3).into(),
        Value::Seq(vec![1.into()]),
        Value::Seq(vec![]),
        ("1", "2").into(),
        (true, false).into(),
        Value::Int(7),
        Value::None,
    ];
    for p in bad_points {
        assert_rejected("line", &Args::new().arg(red()).arg(p.clone()).arg((5, 5)), ErrorKind::Type);
        assert_rejected("aaline", &Args::new().arg(red()).arg((5, 5)).arg(p.clone()), ErrorKind::Type);
        assert_rejected("circle", &Args::new().arg(red()).arg(p).arg(4), ErrorKind::Type);
    }

    let bad_rects: Vec<Value> = vec![
        (1, 2, 3).into(),
        ints(&[1, 2, 3, 4, 5]),
        ((1, 2), 3).into(),
        "0 0 4 4".into(),
        Value::Float(4.0),
    ];
    for r in bad_rects {
        assert_rejected("rect", &Args::new().arg(red()).arg(r.clone()), ErrorKind::Type);
        assert_rejected("ellipse", &Args::new().arg(red()).arg(r.clone()), ErrorKind::Type);
        assert_rejected("arc", &Args::new().arg(red()).arg(r).arg(0).arg(1), ErrorKind::Type);
    }
}

#[test]
fn wrong_scalar_types_are_type_errors() {
    let line = || Args::new().arg(red()).arg((1, 1)).arg((5, 5));
    assert_rejected("line", &line().kwarg("width", 1.5), ErrorKind::Type);
    assert_rejected("line", &line().kwarg("width", "2"), ErrorKind::Type);
    assert_rejected("aaline", &line().kwarg("blend", "yes"), ErrorKind::Type);
    assert_rejected("lines", &Args::new().arg(red()).arg(0.5).arg(Value::Seq(square())), ErrorKind::Type);
    assert_rejected("circle", &Args::new().arg(red()).arg((5, 5)).arg("3"), ErrorKind::Type);
    assert_rejected(
        "arc",
        &Args::new().arg(red()).arg((1, 1, 9, 9)).arg("0").arg(1.0),
        ErrorKind::Type,
    );
    assert_rejected("polygon", &Args::new().arg(red()).arg(3), ErrorKind::Type);
}

#[test]
fn colors_are_checked_before_drawing() {
    let bad: Vec<Value> = vec![
        "red".into(),
        "#00ff00".into(),
        Value::Bytes(b"\xff\x00\x00".to_vec()),
        Value::Float(3.0),
        (300, 0, 0).into(),
        (-1, 0, 0).into(),
        (1, 2).into(),
        ints(&[1, 2, 3, 4, 5]),
        (0.5, 0.5, 0.5).into(),
        Value::Int(-5),
        Value::Int(u32::MAX as i64 + 1),
        Value::None,
    ];
    for c in bad {
        for target in TARGETS {
            let mut s = target.make(8, 8);
            let args = Args::new().arg(c.clone()).arg(Rect::new(0, 0, 8, 8));
            let err = call(s.as_mut(), "rect", &args).unwrap_err();
            assert!(matches!(err, DrawError::InvalidColor(_)), "{:?}: {}", c, err);
            assert!(err.is_type_error());
            assert!(painted(s.as_ref()).is_empty());
        }
    }
}

#[test]
fn too_few_points_is_value_error() {
    let two: Value = vec![(1, 1), (5, 5)].into();
    let one: Value = vec![(1, 1)].into();
    let none = Value::Seq(vec![]);
    assert_rejected("polygon", &Args::new().arg(red()).arg(two.clone()), ErrorKind::Value);
    assert_rejected("polygon", &Args::new().arg(red()).arg(none.clone()), ErrorKind::Value);
    assert_rejected("lines", &Args::new().arg(red()).arg(false).arg(one.clone()), ErrorKind::Value);
    assert_rejected("aalines", &Args::new().arg(red()).arg(true).arg(none), ErrorKind::Value);

    // The count is checked before the points themselves.
    let short_and_bad = Value::Seq(vec![(1, 2, 3).into()]);
    assert_rejected("lines", &Args::new().arg(red()).arg(true).arg(short_and_bad), ErrorKind::Value);
}

#[test]
fn bad_point_anywhere_rejects_the_whole_path() {
    for index in 0..4 {
        let mut pts = square();
        pts[index] = (1, 2, 3).into();
        let pts = Value::Seq(pts);
        let calls = [
            ("polygon", Args::new().arg(red()).arg(pts.clone())),
            ("polygon", Args::new().arg(red()).arg(pts.clone()).arg(2)),
            ("lines", Args::new().arg(red()).arg(true).arg(pts.clone())),
            ("aalines", Args::new().arg(red()).arg(false).arg(pts.clone())),
        ];
        for (op, args) in &calls {
            assert_rejected(op, args, ErrorKind::Type);
            let mut s = rasterdraw::PixmapRgba32::new(16, 16);
            let err = call(&mut s, op, args).unwrap_err();
            assert_eq!(err, DrawError::InvalidPoint { index });
            assert_eq!(s.lock_count(), 0);
        }
    }
}

#[test]
fn out_of_range_numbers_are_not_errors() {
    init_logging();
    for target in TARGETS {
        let mut s = target.make(16, 16);
        let noops = [
            ("line", Args::new().arg(red()).arg((1, 1)).arg((5, 5)).arg(-3)),
            ("circle", Args::new().arg(red()).arg((5, 5)).arg(-4)),
            ("ellipse", Args::new().arg(red()).arg((9, 9, -4, -4))),
            ("arc", Args::new().arg(red()).arg((1, 1, 9, 9)).arg(10.0).arg(-7.0).arg(0)),
        ];
        for (op, args) in &noops {
            let r = call(s.as_mut(), op, args).unwrap();
            assert!(r.is_empty(), "{} {}", target.name, op);
        }
        assert!(painted(s.as_ref()).is_empty());

        let r = call(
            s.as_mut(),
            "arc",
            &Args::new().arg(red()).arg((1, 1, 12, 12)).arg(10.0).arg(-7.0),
        )
        .unwrap();
        assert!(!r.is_empty(), "{}", target.name);
    }
}
