use std::collections::BTreeMap;

/// A style property the animation system knows how to interpolate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Prop {
    X,
    Y,
    XPercent,
    Opacity,
    Scale,
    ScaleX,
    Rotation,
    RotationX,
    Blur,
    WidthPercent,
    MaxHeight,
    BackgroundPositionY,
    BackgroundColor,
    BoxShadow,
}

impl Prop {
    /// Value a property has when nothing drives it.
    pub fn default_value(self) -> Value {
        match self {
            Prop::Opacity | Prop::Scale | Prop::ScaleX => Value::Number(1.0),
            Prop::WidthPercent => Value::Number(100.0),
            Prop::BackgroundColor => Value::Color(Rgba::TRANSPARENT),
            Prop::BoxShadow => Value::Shadow(Shadow::NONE),
            _ => Value::Number(0.0),
        }
    }

    fn is_transform(self) -> bool {
        matches!(
            self,
            Prop::X
                | Prop::Y
                | Prop::XPercent
                | Prop::Scale
                | Prop::ScaleX
                | Prop::Rotation
                | Prop::RotationX
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::rgba(0.0, 0.0, 0.0, 0.0);
    pub const WHITE: Rgba = Rgba::rgba(255.0, 255.0, 255.0, 1.0);

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb` or `#rrggbb`.
    pub fn hex(code: &str) -> Option<Self> {
        let digits = code.strip_prefix('#').filter(|d| d.is_ascii())?;
        let channel = |s: &str| u8::from_str_radix(s, 16).ok().map(f64::from);
        match digits.len() {
            6 => Some(Self::rgba(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
                1.0,
            )),
            3 => {
                let short = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17.0);
                Some(Self::rgba(short(0)?, short(1)?, short(2)?, 1.0))
            }
            _ => None,
        }
    }

    fn lerp(self, to: Rgba, t: f64) -> Rgba {
        Rgba {
            r: lerp(self.r, to.r, t),
            g: lerp(self.g, to.g, t),
            b: lerp(self.b, to.b, t),
            a: lerp(self.a, to.a, t),
        }
    }

    fn css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r.round(),
            self.g.round(),
            self.b.round(),
            num(self.a)
        )
    }
}

/// An outer `box-shadow` centred on the element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub blur: f64,
    pub spread: f64,
    pub color: Rgba,
}

impl Shadow {
    pub const NONE: Shadow = Shadow {
        blur: 0.0,
        spread: 0.0,
        color: Rgba::TRANSPARENT,
    };

    fn lerp(self, to: Shadow, t: f64) -> Shadow {
        Shadow {
            blur: lerp(self.blur, to.blur, t),
            spread: lerp(self.spread, to.spread, t),
            color: self.color.lerp(to.color, t),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Color(Rgba),
    Shadow(Shadow),
}

impl Value {
    /// Linear interpolation. Values of different kinds switch at the end.
    pub fn lerp(self, to: Value, t: f64) -> Value {
        match (self, to) {
            (Value::Number(a), Value::Number(b)) => Value::Number(lerp(a, b, t)),
            (Value::Color(a), Value::Color(b)) => Value::Color(a.lerp(b, t)),
            (Value::Shadow(a), Value::Shadow(b)) => Value::Shadow(a.lerp(b, t)),
            (from, to) => {
                if t >= 1.0 {
                    to
                } else {
                    from
                }
            }
        }
    }

    pub fn number(self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(v),
            _ => None,
        }
    }
}

/// A sparse set of property values for one element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleProps {
    values: BTreeMap<Prop, Value>,
}

impl StyleProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, prop: Prop, value: Value) -> Self {
        self.values.insert(prop, value);
        self
    }

    pub fn x(self, px: f64) -> Self {
        self.with(Prop::X, Value::Number(px))
    }

    pub fn y(self, px: f64) -> Self {
        self.with(Prop::Y, Value::Number(px))
    }

    pub fn x_percent(self, percent: f64) -> Self {
        self.with(Prop::XPercent, Value::Number(percent))
    }

    pub fn opacity(self, opacity: f64) -> Self {
        self.with(Prop::Opacity, Value::Number(opacity))
    }

    pub fn scale(self, scale: f64) -> Self {
        self.with(Prop::Scale, Value::Number(scale))
    }

    pub fn scale_x(self, scale: f64) -> Self {
        self.with(Prop::ScaleX, Value::Number(scale))
    }

    pub fn rotation(self, deg: f64) -> Self {
        self.with(Prop::Rotation, Value::Number(deg))
    }

    pub fn rotation_x(self, deg: f64) -> Self {
        self.with(Prop::RotationX, Value::Number(deg))
    }

    pub fn blur(self, px: f64) -> Self {
        self.with(Prop::Blur, Value::Number(px))
    }

    pub fn width_percent(self, percent: f64) -> Self {
        self.with(Prop::WidthPercent, Value::Number(percent))
    }

    pub fn max_height(self, px: f64) -> Self {
        self.with(Prop::MaxHeight, Value::Number(px))
    }

    pub fn background_position_y(self, percent: f64) -> Self {
        self.with(Prop::BackgroundPositionY, Value::Number(percent))
    }

    pub fn background_color(self, color: Rgba) -> Self {
        self.with(Prop::BackgroundColor, Value::Color(color))
    }

    pub fn box_shadow(self, shadow: Shadow) -> Self {
        self.with(Prop::BoxShadow, Value::Shadow(shadow))
    }

    pub fn get(&self, prop: Prop) -> Option<Value> {
        self.values.get(&prop).copied()
    }

    pub fn set(&mut self, prop: Prop, value: Value) {
        self.values.insert(prop, value);
    }

    pub fn contains(&self, prop: Prop) -> bool {
        self.values.contains_key(&prop)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn props(&self) -> impl Iterator<Item = Prop> + '_ {
        self.values.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Prop, Value)> + '_ {
        self.values.iter().map(|(p, v)| (*p, *v))
    }

    /// Copy every value of `other` over this set.
    pub fn overlay(&mut self, other: &StyleProps) {
        for (prop, value) in other.iter() {
            self.values.insert(prop, value);
        }
    }

    /// Interpolate every property of `to`, starting from `from` or, when
    /// `from` lacks it, the property default.
    pub fn interpolate(from: &StyleProps, to: &StyleProps, t: f64) -> StyleProps {
        let values = to
            .iter()
            .map(|(prop, end)| {
                let start = from.get(prop).unwrap_or_else(|| prop.default_value());
                (prop, start.lerp(end, t))
            })
            .collect();
        StyleProps { values }
    }

    /// CSS declarations for this set. `pin_offset` is an extra vertical
    /// translation folded into the transform.
    pub fn css(&self, pin_offset: f64) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        let number = |prop: Prop| {
            self.get(prop)
                .and_then(Value::number)
                .unwrap_or_else(|| prop.default_value().number().unwrap_or(0.0))
        };

        if pin_offset != 0.0 || self.props().any(Prop::is_transform) {
            let mut parts = vec![format!(
                "translate3d({}px, {}px, 0)",
                num(number(Prop::X)),
                num(number(Prop::Y) + pin_offset)
            )];
            if self.contains(Prop::XPercent) {
                parts.push(format!("translateX({}%)", num(number(Prop::XPercent))));
            }
            if self.contains(Prop::RotationX) {
                parts.push(format!("rotateX({}deg)", num(number(Prop::RotationX))));
            }
            if self.contains(Prop::Rotation) {
                parts.push(format!("rotate({}deg)", num(number(Prop::Rotation))));
            }
            if self.contains(Prop::Scale) {
                parts.push(format!("scale({})", num(number(Prop::Scale))));
            }
            if self.contains(Prop::ScaleX) {
                parts.push(format!("scaleX({})", num(number(Prop::ScaleX))));
            }
            out.push(("transform", parts.join(" ")));
        }

        for (prop, value) in self.iter() {
            let declaration = match (prop, value) {
                (Prop::Opacity, Value::Number(v)) => ("opacity", num(v)),
                (Prop::Blur, Value::Number(v)) => ("filter", format!("blur({}px)", num(v))),
                (Prop::WidthPercent, Value::Number(v)) => ("width", format!("{}%", num(v))),
                (Prop::MaxHeight, Value::Number(v)) => ("max-height", format!("{}px", num(v))),
                (Prop::BackgroundPositionY, Value::Number(v)) => {
                    ("background-position", format!("50% {}%", num(v)))
                }
                (Prop::BackgroundColor, Value::Color(c)) => ("background-color", c.css()),
                (Prop::BoxShadow, Value::Shadow(s)) => (
                    "box-shadow",
                    format!("0 0 {}px {}px {}", num(s.blur), num(s.spread), s.color.css()),
                ),
                _ => continue,
            };
            out.push(declaration);
        }
        out
    }

    /// Inline `style` attribute text.
    pub fn inline(&self) -> String {
        self.css(0.0)
            .into_iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn num(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}
