use std::rc::Rc;

/// ## Runtime values
///
/// Variables ending in `$` hold strings, everything else holds numbers.

#[derive(Debug, PartialEq, Clone)]
pub enum Val {
    String(Rc<str>),
    Number(f64),
}

impl Val {
    pub fn is_numeric(&self) -> bool {
        matches!(self, Val::Number(_))
    }

    /// Value of a line typed at an INPUT prompt.
    /// Numeric variables take the leading number of the reply,
    /// so `12 APPLES` is 12. No leading number reads as 0.
    pub fn from_input(text: &str, string: bool) -> Val {
        if string {
            return Val::String(text.into());
        }
        let text = text.trim_start();
        match text[..numeric_prefix_len(text)].parse::<f64>() {
            Ok(n) if n.is_finite() => Val::Number(n),
            _ => Val::Number(0.0),
        }
    }
}

/// Length of the `[+-]digits[.digits]` run at the start of `s`.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut len = 0;
    if let Some(b'+') | Some(b'-') = bytes.first() {
        len += 1;
    }
    let int_start = len;
    while bytes.get(len).map_or(false, u8::is_ascii_digit) {
        len += 1;
    }
    let mut digits = len - int_start;
    if bytes.get(len) == Some(&b'.') {
        let frac_start = len + 1;
        let mut end = frac_start;
        while bytes.get(end).map_or(false, u8::is_ascii_digit) {
            end += 1;
        }
        if digits > 0 || end > frac_start {
            digits += end - frac_start;
            len = end;
        }
    }
    if digits == 0 {
        return 0;
    }
    len
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Val::*;
        match self {
            String(s) => write!(f, "{}", s),
            Number(n) if n.is_nan() => write!(f, "NAN"),
            Number(n) if n.is_infinite() => {
                if n.is_sign_negative() {
                    write!(f, "-INF")
                } else {
                    write!(f, "INF")
                }
            }
            Number(n) if *n == 0.0 => write!(f, "0"),
            Number(n) => write!(f, "{}", n),
        }
    }
}
