//! Tokenizer for hand-entered race times
//!
//! Splits input into digit runs and separators, classifying each separator
//! so the parsers can decide which layout the input follows without chains
//! of string replacements.

/// Separator classes recognised in time input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparatorClass {
    /// `:` or full-width `：`
    Colon,
    /// `.` or full-width `。`
    Decimal,
    /// `-` or the long vowel mark `ー` typed on Japanese keyboards
    Dash,
    /// Any other non-digit character
    Other,
}

impl SeparatorClass {
    fn classify(ch: char) -> Self {
        match ch {
            ':' | '：' => SeparatorClass::Colon,
            '.' | '。' => SeparatorClass::Decimal,
            '-' | 'ー' => SeparatorClass::Dash,
            _ => SeparatorClass::Other,
        }
    }
}

/// A single lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Run of ASCII digits
    Digits(&'a str),
    /// Run of separator characters sharing one class and width
    Separator { class: SeparatorClass, ascii: bool },
}

/// Overall shape of a tokenized input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Only ASCII digits, `:` and `.` (`1:23.45`, `23.45`, `30`)
    Clock,
    /// Anything else; digit runs are positional segments (`1-05-3`, `31ー2`)
    Quick,
}

/// Tokenized time input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream<'a> {
    tokens: Vec<Token<'a>>,
}

impl<'a> TokenStream<'a> {
    /// Tokenize input. The caller is responsible for trimming.
    pub fn new(input: &'a str) -> Self {
        let mut tokens = Vec::new();
        let mut rest = input;

        while let Some(first) = rest.chars().next() {
            if first.is_ascii_digit() {
                let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
                tokens.push(Token::Digits(&rest[..end]));
                rest = &rest[end..];
            } else {
                let class = SeparatorClass::classify(first);
                let ascii = first.is_ascii();
                let end = rest
                    .find(|c: char| {
                        c.is_ascii_digit() || SeparatorClass::classify(c) != class || c.is_ascii() != ascii
                    })
                    .unwrap_or(rest.len());
                tokens.push(Token::Separator { class, ascii });
                rest = &rest[end..];
            }
        }

        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    /// Digit runs in input order.
    pub fn segments(&self) -> Vec<&'a str> {
        self.tokens()
            .iter()
            .filter_map(|token| match token {
                Token::Digits(digits) => Some(*digits),
                Token::Separator { .. } => None,
            })
            .collect()
    }

    /// Number of digit runs.
    pub fn segment_count(&self) -> usize {
        self.tokens().iter().filter(|token| matches!(token, Token::Digits(_))).count()
    }

    /// Classes of the separator runs in input order.
    pub fn separator_classes(&self) -> Vec<SeparatorClass> {
        self.tokens()
            .iter()
            .filter_map(|token| match token {
                Token::Separator { class, .. } => Some(*class),
                Token::Digits(_) => None,
            })
            .collect()
    }

    /// Layout decided by the separator classes: clock input only uses ASCII
    /// colons and decimal points.
    pub fn layout(&self) -> Layout {
        let clock = self.tokens().iter().all(|token| match token {
            Token::Digits(_) => true,
            Token::Separator { class: SeparatorClass::Colon | SeparatorClass::Decimal, ascii } => *ascii,
            Token::Separator { .. } => false,
        });
        if clock { Layout::Clock } else { Layout::Quick }
    }
}

/// Parse the longest leading decimal number (`digits[.digits]` or `.digits`),
/// tolerating trailing junk such as a second decimal point.
///
/// Returns `None` when the input does not start with a number.
pub fn leading_decimal(input: &str) -> Option<f64> {
    let int_end = input.find(|c: char| !c.is_ascii_digit()).unwrap_or(input.len());
    let int_part = &input[..int_end];

    let frac_part = match input[int_end..].strip_prefix('.') {
        Some(rest) => {
            let frac_end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
            &rest[..frac_end]
        }
        None => "",
    };

    decimal_from_parts(int_part, frac_part)
}

/// Parse a complete decimal number; any character outside `digits[.digits]`
/// rejects the input.
pub fn exact_decimal(input: &str) -> Option<f64> {
    let (int_part, frac_part) = input.split_once('.').unwrap_or((input, ""));
    let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) {
        return None;
    }
    decimal_from_parts(int_part, frac_part)
}

fn decimal_from_parts(int_part: &str, frac_part: &str) -> Option<f64> {
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let frac_part = if frac_part.is_empty() { "0" } else { frac_part };
    format!("{int_part}.{frac_part}").parse::<f64>().ok()
}

/// Parse the longest leading integer.
pub fn leading_integer(input: &str) -> Option<f64> {
    let end = input.find(|c: char| !c.is_ascii_digit()).unwrap_or(input.len());
    if end == 0 {
        return None;
    }
    input[..end].parse::<f64>().ok()
}
