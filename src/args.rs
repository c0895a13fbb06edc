//! Loosely-typed entry point.
//!
//! [`call`] takes an operation name and a bag of positional and keyword
//! [`Value`]s, binds them against the operation's parameter list, converts
//! and checks every argument, and only then runs the typed operation from
//! [`crate::draw`]. A call that fails leaves the surface untouched.
//!
//! Parameter lists (the surface is always passed separately):
//!
//! | op | parameters |
//! |---|---|
//! | `line` | `color, start_pos, end_pos, width=1` |
//! | `aaline` | `color, start_pos, end_pos, blend=true` |
//! | `lines` | `color, closed, points, width=1` |
//! | `aalines` | `color, closed, points, blend=true` |
//! | `polygon` | `color, points, width=0` |
//! | `rect` | `color, rect, width=0` |
//! | `circle` | `color, center, radius, width=0` |
//! | `ellipse` | `color, rect, width=0` |
//! | `arc` | `color, rect, start_angle, stop_angle, width=1` |

use log::debug;

use crate::basics::{itrunc, Point, Rect};
use crate::color::{ColorSpec, Rgba8};
use crate::draw;
use crate::error::{DrawError, DrawResult};
use crate::pixfmt_rgba::Surface;

// ============================================================================
// Value
// ============================================================================

/// A dynamically typed argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    Seq(Vec<Value>),
    Color(Rgba8),
    Rect(Rect),
}

impl Value {
    fn type_name(&self) -> &'static str {
        match self {
            Value::None => "none",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Bytes(_) => "bytes",
            Value::Seq(_) => "sequence",
            Value::Color(_) => "color",
            Value::Rect(_) => "rect",
        }
    }

    fn as_number(&self) -> Option<f64> {
        match *self {
            Value::Int(v) => Some(v as f64),
            Value::Float(v) => Some(v),
            _ => None,
        }
    }

    /// A point: a sequence of exactly two numbers.
    fn as_point(&self) -> Option<Point> {
        match self {
            Value::Seq(items) if items.len() == 2 => {
                Some(Point::new(items[0].as_number()?, items[1].as_number()?))
            }
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Rgba8> for Value {
    fn from(v: Rgba8) -> Self {
        Value::Color(v)
    }
}

impl From<Rect> for Value {
    fn from(v: Rect) -> Self {
        Value::Rect(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Seq(v.into_iter().map(Into::into).collect())
    }
}

impl<A: Into<Value>, B: Into<Value>> From<(A, B)> for Value {
    fn from((a, b): (A, B)) -> Self {
        Value::Seq(vec![a.into(), b.into()])
    }
}

impl<A: Into<Value>, B: Into<Value>, C: Into<Value>> From<(A, B, C)> for Value {
    fn from((a, b, c): (A, B, C)) -> Self {
        Value::Seq(vec![a.into(), b.into(), c.into()])
    }
}

impl<A, B, C, D> From<(A, B, C, D)> for Value
where
    A: Into<Value>,
    B: Into<Value>,
    C: Into<Value>,
    D: Into<Value>,
{
    fn from((a, b, c, d): (A, B, C, D)) -> Self {
        Value::Seq(vec![a.into(), b.into(), c.into(), d.into()])
    }
}

// ============================================================================
// Args
// ============================================================================

/// Positional and keyword arguments of one call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    positional: Vec<Value>,
    keywords: Vec<(String, Value)>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument.
    pub fn arg(mut self, v: impl Into<Value>) -> Self {
        self.positional.push(v.into());
        self
    }

    /// Add a keyword argument.
    pub fn kwarg(mut self, name: &str, v: impl Into<Value>) -> Self {
        self.keywords.push((name.to_owned(), v.into()));
        self
    }
}

// ============================================================================
// Signatures and binding
// ============================================================================

struct Param {
    name: &'static str,
    default: Option<fn() -> Value>,
}

const fn req(name: &'static str) -> Param {
    Param {
        name,
        default: None,
    }
}

const fn opt(name: &'static str, default: fn() -> Value) -> Param {
    Param {
        name,
        default: Some(default),
    }
}

fn line_width() -> Value {
    Value::Int(draw::DEFAULT_LINE_WIDTH as i64)
}

fn fill_width() -> Value {
    Value::Int(draw::DEFAULT_FILL_WIDTH as i64)
}

fn arc_width() -> Value {
    Value::Int(draw::DEFAULT_ARC_WIDTH as i64)
}

fn blend_default() -> Value {
    Value::Bool(draw::DEFAULT_BLEND)
}

const LINE: &[Param] = &[req("color"), req("start_pos"), req("end_pos"), opt("width", line_width)];
const AALINE: &[Param] = &[req("color"), req("start_pos"), req("end_pos"), opt("blend", blend_default)];
const LINES: &[Param] = &[req("color"), req("closed"), req("points"), opt("width", line_width)];
const AALINES: &[Param] = &[req("color"), req("closed"), req("points"), opt("blend", blend_default)];
const POLYGON: &[Param] = &[req("color"), req("points"), opt("width", fill_width)];
const RECT: &[Param] = &[req("color"), req("rect"), opt("width", fill_width)];
const CIRCLE: &[Param] = &[req("color"), req("center"), req("radius"), opt("width", fill_width)];
const ELLIPSE: &[Param] = &[req("color"), req("rect"), opt("width", fill_width)];
const ARC: &[Param] = &[
    req("color"),
    req("rect"),
    req("start_angle"),
    req("stop_angle"),
    opt("width", arc_width),
];

fn signature(op: &str) -> Option<(&'static str, &'static [Param])> {
    let sig = match op {
        "line" => ("line", LINE),
        "aaline" => ("aaline", AALINE),
        "lines" => ("lines", LINES),
        "aalines" => ("aalines", AALINES),
        "polygon" => ("polygon", POLYGON),
        "rect" => ("rect", RECT),
        "circle" => ("circle", CIRCLE),
        "ellipse" => ("ellipse", ELLIPSE),
        "arc" => ("arc", ARC),
        _ => return None,
    };
    Some(sig)
}

/// Arguments matched to parameters, in declaration order.
struct Bound {
    op: &'static str,
    values: Vec<Value>,
}

impl Bound {
    fn get(&self, i: usize) -> &Value {
        &self.values[i]
    }
}

fn bind(op: &'static str, params: &[Param], args: &Args) -> DrawResult<Bound> {
    if args.positional.len() > params.len() {
        return Err(DrawError::TooManyArguments {
            op,
            max: params.len(),
            given: args.positional.len(),
        });
    }
    let mut slots: Vec<Option<Value>> = args.positional.iter().cloned().map(Some).collect();
    slots.resize(params.len(), None);

    for (name, v) in &args.keywords {
        let Some(i) = params.iter().position(|p| p.name == name.as_str()) else {
            return Err(DrawError::UnexpectedKeyword {
                op,
                name: name.clone(),
            });
        };
        if slots[i].is_some() {
            return Err(DrawError::DuplicateArgument {
                op,
                param: params[i].name,
            });
        }
        slots[i] = Some(v.clone());
    }

    let mut values = Vec::with_capacity(params.len());
    for (slot, p) in slots.into_iter().zip(params) {
        match (slot, p.default) {
            (Some(v), _) => values.push(v),
            (None, Some(default)) => values.push(default()),
            (None, None) => {
                return Err(DrawError::MissingArgument {
                    op,
                    param: p.name,
                })
            }
        }
    }
    Ok(Bound { op, values })
}

// ============================================================================
// Conversions
// ============================================================================

fn to_color(v: &Value) -> DrawResult<ColorSpec> {
    let channel = |c: &Value| match *c {
        Value::Int(n) if (0..=255).contains(&n) => Some(n as u8),
        _ => None,
    };
    match v {
        Value::Color(c) => Ok(ColorSpec::Color(*c)),
        Value::Int(n) => u32::try_from(*n)
            .map(ColorSpec::Mapped)
            .map_err(|_| DrawError::InvalidColor(format!("packed value {} out of range", n))),
        Value::Seq(items) if items.len() == 3 || items.len() == 4 => {
            let ch: Option<Vec<u8>> = items.iter().map(channel).collect();
            match ch.as_deref() {
                Some(&[r, g, b]) => Ok(ColorSpec::Rgb(r, g, b)),
                Some(&[r, g, b, a]) => Ok(ColorSpec::Rgba(r, g, b, a)),
                _ => Err(DrawError::InvalidColor(
                    "channels must be integers in 0..=255".to_owned(),
                )),
            }
        }
        Value::Str(s) => Err(DrawError::InvalidColor(format!(
            "color strings are not supported ({:?})",
            s
        ))),
        other => Err(DrawError::InvalidColor(format!(
            "expected a 3- or 4-sequence or packed int, got {}",
            other.type_name()
        ))),
    }
}

fn to_point(param: &'static str, v: &Value) -> DrawResult<Point> {
    v.as_point().ok_or(DrawError::InvalidArgument {
        param,
        expected: "a sequence of two numbers",
    })
}

fn to_points(op: &'static str, v: &Value, required: usize) -> DrawResult<Vec<Point>> {
    let Value::Seq(items) = v else {
        return Err(DrawError::InvalidArgument {
            param: "points",
            expected: "a sequence of points",
        });
    };
    if items.len() < required {
        return Err(DrawError::TooFewPoints {
            op,
            required,
            given: items.len(),
        });
    }
    items
        .iter()
        .enumerate()
        .map(|(index, p)| p.as_point().ok_or(DrawError::InvalidPoint { index }))
        .collect()
}

fn to_rect(v: &Value) -> DrawResult<Rect> {
    let err = DrawError::InvalidArgument {
        param: "rect",
        expected: "a rect, (x, y, w, h) or ((x, y), (w, h))",
    };
    match v {
        Value::Rect(r) => Ok(*r),
        Value::Seq(items) if items.len() == 4 => {
            let n: Option<Vec<f64>> = items.iter().map(Value::as_number).collect();
            match n.as_deref() {
                Some(&[x, y, w, h]) => Ok(Rect::from_f64(x, y, w, h)),
                _ => Err(err),
            }
        }
        Value::Seq(items) if items.len() == 2 => match (items[0].as_point(), items[1].as_point()) {
            (Some(p), Some(s)) => Ok(Rect::from_f64(p.x, p.y, s.x, s.y)),
            _ => Err(err),
        },
        _ => Err(err),
    }
}

fn to_width(v: &Value) -> DrawResult<i32> {
    match *v {
        Value::Int(n) => Ok(n.clamp(i32::MIN as i64, i32::MAX as i64) as i32),
        _ => Err(DrawError::InvalidArgument {
            param: "width",
            expected: "an int",
        }),
    }
}

fn to_flag(param: &'static str, v: &Value) -> DrawResult<bool> {
    match *v {
        Value::Bool(b) => Ok(b),
        Value::Int(n) => Ok(n != 0),
        _ => Err(DrawError::InvalidArgument {
            param,
            expected: "a bool or int",
        }),
    }
}

fn to_number(param: &'static str, v: &Value) -> DrawResult<f64> {
    v.as_number().ok_or(DrawError::InvalidArgument {
        param,
        expected: "a number",
    })
}

// ============================================================================
// Dispatch
// ============================================================================

/// Run draw operation `op` on `surface` with loosely-typed `args`.
///
/// Every argument is validated before the surface is touched.
pub fn call<S: Surface + ?Sized>(surface: &mut S, op: &str, args: &Args) -> DrawResult<Rect> {
    let result = dispatch(surface, op, args);
    if let Err(e) = &result {
        debug!("{}: rejected arguments: {}", op, e);
    }
    result
}

fn dispatch<S: Surface + ?Sized>(surface: &mut S, op: &str, args: &Args) -> DrawResult<Rect> {
    let (name, params) =
        signature(op).ok_or_else(|| DrawError::UnknownOperation(op.to_owned()))?;
    let b = bind(name, params, args)?;
    let color = to_color(b.get(0))?;

    match b.op {
        "line" => {
            let start = to_point("start_pos", b.get(1))?;
            let end = to_point("end_pos", b.get(2))?;
            let width = to_width(b.get(3))?;
            Ok(draw::line(surface, color, start, end, width))
        }
        "aaline" => {
            let start = to_point("start_pos", b.get(1))?;
            let end = to_point("end_pos", b.get(2))?;
            let blend = to_flag("blend", b.get(3))?;
            Ok(draw::aaline(surface, color, start, end, blend))
        }
        "lines" => {
            let closed = to_flag("closed", b.get(1))?;
            let points = to_points(b.op, b.get(2), 2)?;
            let width = to_width(b.get(3))?;
            draw::lines(surface, color, closed, &points, width)
        }
        "aalines" => {
            let closed = to_flag("closed", b.get(1))?;
            let points = to_points(b.op, b.get(2), 2)?;
            let blend = to_flag("blend", b.get(3))?;
            draw::aalines(surface, color, closed, &points, blend)
        }
        "polygon" => {
            let points = to_points(b.op, b.get(1), 3)?;
            let width = to_width(b.get(2))?;
            draw::polygon(surface, color, &points, width)
        }
        "rect" => {
            let r = to_rect(b.get(1))?;
            let width = to_width(b.get(2))?;
            Ok(draw::rect(surface, color, r, width))
        }
        "circle" => {
            let center = to_point("center", b.get(1))?;
            let radius = itrunc(to_number("radius", b.get(2))?);
            let width = to_width(b.get(3))?;
            Ok(draw::circle(surface, color, center, radius, width))
        }
        "ellipse" => {
            let r = to_rect(b.get(1))?;
            let width = to_width(b.get(2))?;
            Ok(draw::ellipse(surface, color, r, width))
        }
        "arc" => {
            let r = to_rect(b.get(1))?;
            let start = to_number("start_angle", b.get(2))?;
            let stop = to_number("stop_angle", b.get(3))?;
            let width = to_width(b.get(4))?;
            Ok(draw::arc(surface, color, r, start, stop, width))
        }
        _ => Err(DrawError::UnknownOperation(op.to_owned())),
    }
}
