//! Filename templates: `{name}` / `{name:spec}` placeholders.
//!
//! The syntax follows the familiar replacement-field format: `{{` and `}}`
//! are literal braces, and an optional spec after `:` controls fill,
//! alignment, sign, zero padding, width, precision and presentation type,
//! e.g. `{index:04d}_{basename:.20}.{ext}`.
//!
//! Templates are compiled and type-checked up front, so a template that
//! parses always renders.

use std::fmt;
use thiserror::Error;

/// Largest width or precision a spec may ask for.
pub const MAX_SPEC_WIDTH: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unknown placeholder '{0}'")]
    UnknownPlaceholder(String),
    #[error("empty placeholder '{{}}'; use one of: {}", Placeholder::NAMES.join(", "))]
    EmptyPlaceholder,
    #[error("single '}}' encountered in format string")]
    UnmatchedClose,
    #[error("expected '}}' before end of string")]
    Unclosed,
    #[error("conversion flags are not supported in placeholder '{0}'")]
    Conversion(String),
    #[error("invalid format spec '{spec}' for '{name}': {reason}")]
    InvalidSpec {
        name: String,
        spec: String,
        reason: String,
    },
}

/// Values a template can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Timestamp,
    Host,
    Dirname,
    Filename,
    Basename,
    Ext,
    Index,
}

impl Placeholder {
    pub const NAMES: [&'static str; 7] = [
        "timestamp",
        "host",
        "dirname",
        "filename",
        "basename",
        "ext",
        "index",
    ];

    fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "timestamp" => Placeholder::Timestamp,
            "host" => Placeholder::Host,
            "dirname" => Placeholder::Dirname,
            "filename" => Placeholder::Filename,
            "basename" => Placeholder::Basename,
            "ext" => Placeholder::Ext,
            "index" => Placeholder::Index,
            _ => return None,
        })
    }

    fn is_numeric(self) -> bool {
        matches!(self, Placeholder::Index)
    }
}

/// Substitution values for one URL at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateContext {
    pub timestamp: String,
    pub host: String,
    pub dirname: String,
    pub filename: String,
    pub basename: String,
    pub ext: String,
    pub index: u64,
}

impl TemplateContext {
    fn text(&self, p: Placeholder) -> &str {
        match p {
            Placeholder::Timestamp => &self.timestamp,
            Placeholder::Host => &self.host,
            Placeholder::Dirname => &self.dirname,
            Placeholder::Filename => &self.filename,
            Placeholder::Basename => &self.basename,
            Placeholder::Ext => &self.ext,
            Placeholder::Index => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
    Center,
    /// Padding goes between the sign and the digits.
    AfterSign,
}

impl Align {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(Align::Left),
            '>' => Some(Align::Right),
            '^' => Some(Align::Center),
            '=' => Some(Align::AfterSign),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Sign {
    #[default]
    Negative,
    Always,
    Space,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FormatSpec {
    fill: char,
    align: Option<Align>,
    sign: Sign,
    width: usize,
    precision: Option<usize>,
    kind: Option<char>,
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self {
            fill: ' ',
            align: None,
            sign: Sign::Negative,
            width: 0,
            precision: None,
            kind: None,
        }
    }
}

impl FormatSpec {
    /// Parses `[[fill]align][sign][0][width][.precision][type]`.
    fn parse(spec: &str) -> Result<Self, String> {
        let chars: Vec<char> = spec.chars().collect();
        let mut out = FormatSpec::default();
        let mut i = 0;
        let mut explicit_fill = false;

        if let Some(align) = chars.get(1).and_then(|c| Align::from_char(*c)) {
            out.fill = chars[0];
            out.align = Some(align);
            explicit_fill = true;
            i = 2;
        } else if let Some(align) = chars.first().and_then(|c| Align::from_char(*c)) {
            out.align = Some(align);
            i = 1;
        }

        match chars.get(i) {
            Some('+') => {
                out.sign = Sign::Always;
                i += 1;
            }
            Some('-') => i += 1,
            Some(' ') => {
                out.sign = Sign::Space;
                i += 1;
            }
            _ => {}
        }

        let zero = chars.get(i) == Some(&'0');
        if zero {
            i += 1;
        }

        let width_start = i;
        while chars.get(i).is_some_and(char::is_ascii_digit) {
            i += 1;
        }
        if i > width_start {
            let digits: String = chars[width_start..i].iter().collect();
            out.width = parse_bounded(&digits).ok_or_else(|| "width too large".to_string())?;
        }

        if chars.get(i) == Some(&'.') {
            i += 1;
            let prec_start = i;
            while chars.get(i).is_some_and(char::is_ascii_digit) {
                i += 1;
            }
            if i == prec_start {
                return Err("format specifier missing precision".to_string());
            }
            let digits: String = chars[prec_start..i].iter().collect();
            out.precision =
                Some(parse_bounded(&digits).ok_or_else(|| "precision too large".to_string())?);
        }

        match &chars[i..] {
            [] => {}
            [kind] => out.kind = Some(*kind),
            _ => return Err("invalid format specifier".to_string()),
        }

        if zero {
            if !explicit_fill {
                out.fill = '0';
            }
            if out.align.is_none() {
                out.align = Some(Align::AfterSign);
            }
        }
        Ok(out)
    }

    /// Rejects spec/value-type combinations that could never render.
    fn check(&mut self, numeric: bool) -> Result<(), String> {
        if numeric {
            if let Some(k) = self.kind {
                if !matches!(k, 'd' | 'x' | 'X' | 'o' | 'b') {
                    return Err(format!("unknown format code '{}' for an integer", k));
                }
            }
            if self.precision.is_some() {
                return Err("precision not allowed in integer format specifier".to_string());
            }
            return Ok(());
        }

        if let Some(k) = self.kind {
            if k != 's' {
                return Err(format!("unknown format code '{}' for a string", k));
            }
        }
        if self.sign != Sign::Negative {
            return Err("sign not allowed in string format specifier".to_string());
        }
        match self.align {
            Some(Align::AfterSign) if self.fill == '0' && self.width > 0 => {
                // Bare zero-padding on a string pads on the right.
                self.align = Some(Align::Left);
                Ok(())
            }
            Some(Align::AfterSign) => {
                Err("'=' alignment not allowed in string format specifier".to_string())
            }
            _ => Ok(()),
        }
    }

    fn render_int(&self, value: u64) -> String {
        let digits = match self.kind {
            Some('x') => format!("{:x}", value),
            Some('X') => format!("{:X}", value),
            Some('o') => format!("{:o}", value),
            Some('b') => format!("{:b}", value),
            _ => value.to_string(),
        };
        let sign = match self.sign {
            Sign::Always => "+",
            Sign::Space => " ",
            Sign::Negative => "",
        };
        self.pad(sign, &digits, Align::Right)
    }

    fn render_str(&self, value: &str) -> String {
        let text: String = match self.precision {
            Some(p) => value.chars().take(p).collect(),
            None => value.to_string(),
        };
        self.pad("", &text, Align::Left)
    }

    fn pad(&self, sign: &str, body: &str, default_align: Align) -> String {
        let len = sign.chars().count() + body.chars().count();
        if self.width <= len {
            return format!("{}{}", sign, body);
        }
        let fill_n = self.width - len;
        let fill = |n: usize| std::iter::repeat(self.fill).take(n).collect::<String>();
        match self.align.unwrap_or(default_align) {
            Align::Left => format!("{}{}{}", sign, body, fill(fill_n)),
            Align::Right => format!("{}{}{}", fill(fill_n), sign, body),
            Align::Center => {
                let left = fill_n / 2;
                format!("{}{}{}{}", fill(left), sign, body, fill(fill_n - left))
            }
            Align::AfterSign => format!("{}{}{}", sign, fill(fill_n), body),
        }
    }
}

fn parse_bounded(digits: &str) -> Option<usize> {
    digits.parse().ok().filter(|n| *n <= MAX_SPEC_WIDTH)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field {
        placeholder: Placeholder,
        spec: FormatSpec,
    },
}

/// A compiled filename template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl FilenameTemplate {
    /// Compiles `source`, failing on syntax errors, unknown placeholders and
    /// specs that do not fit the placeholder's type.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '}' => return Err(TemplateError::UnmatchedClose),
                '{' => {
                    let mut field = String::new();
                    let mut closed = false;
                    for f in chars.by_ref() {
                        if f == '}' {
                            closed = true;
                            break;
                        }
                        field.push(f);
                    }
                    if !closed {
                        return Err(TemplateError::Unclosed);
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(parse_field(&field)?);
                }
                other => literal.push(other),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Substitutes `ctx` into the template. No sanitization is applied here.
    pub fn render(&self, ctx: &TemplateContext) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field { placeholder, spec } => {
                    if placeholder.is_numeric() {
                        out.push_str(&spec.render_int(ctx.index));
                    } else {
                        out.push_str(&spec.render_str(ctx.text(*placeholder)));
                    }
                }
            }
        }
        out
    }
}

impl fmt::Display for FilenameTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn parse_field(field: &str) -> Result<Segment, TemplateError> {
    let (name, spec) = match field.split_once(':') {
        Some((name, spec)) => (name, spec),
        None => (field, ""),
    };
    if name.contains('!') {
        return Err(TemplateError::Conversion(name.to_string()));
    }
    if name.is_empty() {
        return Err(TemplateError::EmptyPlaceholder);
    }
    let placeholder = Placeholder::from_name(name)
        .ok_or_else(|| TemplateError::UnknownPlaceholder(name.to_string()))?;
    let invalid = |reason: String| TemplateError::InvalidSpec {
        name: name.to_string(),
        spec: spec.to_string(),
        reason,
    };
    let mut parsed = FormatSpec::parse(spec).map_err(invalid)?;
    parsed.check(placeholder.is_numeric()).map_err(invalid)?;
    Ok(Segment::Field {
        placeholder,
        spec: parsed,
    })
}
