//! Exact constant values for const declarations.
//!
//! Mirrors the behavior of a compiler's arbitrary-precision constant
//! machinery closely enough for display: integers evaluate exactly,
//! non-integer numbers are kept as reduced rationals so 1.5 prints as 3/2
//! rather than a float approximation.

use std::collections::BTreeMap;

use crate::resolve::scope::{PackageBindings, def_site};
use crate::syntax::ast::GenDecl;
use crate::syntax::cst::{SyntaxElement, SyntaxNode};
use crate::syntax::kind::SyntaxKind;
use crate::vfs::FileId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Value {
    Int(i128),
    Rat {
        num: i128,
        den: i128,
    },
    Str(String),
    Bool(bool),
}

impl Value {
    /// Exact textual representation, matching the constant machinery's
    /// formatting: integers in decimal, rationals as num/den, strings
    /// quoted, booleans bare.
    pub(crate) fn exact_string(&self) -> String {
        match self {
            Value::Int(value) => value.to_string(),
            Value::Rat {
                num,
                den,
            } => {
                if *den == 1 {
                    num.to_string()
                } else {
                    format!("{num}/{den}")
                }
            },
            Value::Str(value) => format!("{value:?}"),
            Value::Bool(value) => value.to_string(),
        }
    }

    fn rat(
        num: i128,
        den: i128,
    ) -> Value {
        let (mut num, mut den) = if den < 0 { (-num, -den) } else { (num, den) };
        let divisor = gcd(num.unsigned_abs(), den.unsigned_abs());
        if divisor > 1 {
            num /= divisor as i128;
            den /= divisor as i128;
        }
        if den == 1 {
            Value::Int(num)
        } else {
            Value::Rat {
                num,
                den,
            }
        }
    }
}

fn gcd(
    mut a: u128,
    mut b: u128,
) -> u128 {
    while b != 0 {
        let rem = a % b;
        a = b;
        b = rem;
    }
    a.max(1)
}

/// Bind the specs of one const declaration, threading iota and the
/// implicit repetition of the previous expression list.
pub(crate) fn bind_const_decl(
    bindings: &mut PackageBindings,
    file: &FileId,
    decl: &GenDecl,
) {
    let mut carried: Vec<SyntaxElement> = Vec::new();
    for (spec_index, spec) in decl.value_specs().enumerate() {
        let own = spec.init_exprs();
        let exprs = if own.is_empty() {
            carried.clone()
        } else {
            carried = own.clone();
            own
        };

        for (index, name) in spec.names().iter().enumerate() {
            let value = exprs
                .get(index)
                .and_then(|expr| eval(expr, spec_index as i128, &bindings.const_values));
            let display = match &value {
                Some(value) => Some(value.exact_string()),
                // Fall back to the expression's source text when the
                // evaluator cannot reduce it.
                None => exprs.get(index).map(|expr| expr.to_string().trim().to_string()),
            };
            if let Some(value) = value {
                bindings.const_values.insert(name.text().to_string(), value);
            }
            bindings
                .consts
                .entry(name.text().to_string())
                .or_insert(crate::resolve::scope::ConstBinding {
                    def: def_site(file, name),
                    value: display,
                });
        }
    }
}

fn eval(
    element: &SyntaxElement,
    iota: i128,
    env: &BTreeMap<String, Value>,
) -> Option<Value> {
    match element {
        SyntaxElement::Token(token) => match token.kind() {
            SyntaxKind::Int => parse_int(token.text()).map(Value::Int),
            SyntaxKind::Float => parse_float(token.text()),
            SyntaxKind::String => Some(Value::Str(unquote(token.text()))),
            SyntaxKind::RawString => {
                Some(Value::Str(token.text().trim_matches('`').to_string()))
            },
            SyntaxKind::Ident => match token.text() {
                "iota" => Some(Value::Int(iota)),
                "true" => Some(Value::Bool(true)),
                "false" => Some(Value::Bool(false)),
                name => env.get(name).cloned(),
            },
            _ => None,
        },
        SyntaxElement::Node(node) => eval_node(node, iota, env),
    }
}

fn eval_node(
    node: &SyntaxNode,
    iota: i128,
    env: &BTreeMap<String, Value>,
) -> Option<Value> {
    match node.kind() {
        SyntaxKind::ParenExpr => {
            let inner = operands(node).into_iter().next()?;
            eval(&inner, iota, env)
        },
        SyntaxKind::UnaryExpr => {
            let op = operator(node)?;
            let inner = operands(node).into_iter().next()?;
            let value = eval(&inner, iota, env)?;
            match (op, value) {
                (SyntaxKind::Minus, Value::Int(v)) => Some(Value::Int(-v)),
                (
                    SyntaxKind::Minus,
                    Value::Rat {
                        num,
                        den,
                    },
                ) => Some(Value::rat(-num, den)),
                (SyntaxKind::Plus, value) => Some(value),
                _ => None,
            }
        },
        SyntaxKind::BinaryExpr => {
            let op = operator(node)?;
            let mut parts = operands(node).into_iter();
            let lhs = eval(&parts.next()?, iota, env)?;
            let rhs = eval(&parts.next()?, iota, env)?;
            apply_binary(op, lhs, rhs)
        },
        _ => None,
    }
}

fn apply_binary(
    op: SyntaxKind,
    lhs: Value,
    rhs: Value,
) -> Option<Value> {
    if let (Value::Str(a), Value::Str(b)) = (&lhs, &rhs) {
        return match op {
            SyntaxKind::Plus => Some(Value::Str(format!("{a}{b}"))),
            _ => None,
        };
    }

    if let (Value::Int(a), Value::Int(b)) = (&lhs, &rhs) {
        let (a, b) = (*a, *b);
        return match op {
            SyntaxKind::Plus => a.checked_add(b).map(Value::Int),
            SyntaxKind::Minus => a.checked_sub(b).map(Value::Int),
            SyntaxKind::Star => a.checked_mul(b).map(Value::Int),
            SyntaxKind::Slash => {
                if b == 0 {
                    None
                } else {
                    Some(Value::Int(a / b))
                }
            },
            SyntaxKind::Percent => {
                if b == 0 {
                    None
                } else {
                    Some(Value::Int(a % b))
                }
            },
            SyntaxKind::Shl => u32::try_from(b).ok().and_then(|s| a.checked_shl(s)).map(Value::Int),
            SyntaxKind::Shr => u32::try_from(b).ok().and_then(|s| a.checked_shr(s)).map(Value::Int),
            SyntaxKind::Amp => Some(Value::Int(a & b)),
            SyntaxKind::Pipe => Some(Value::Int(a | b)),
            SyntaxKind::Caret => Some(Value::Int(a ^ b)),
            SyntaxKind::AndNot => Some(Value::Int(a & !b)),
            _ => None,
        };
    }

    // Mixed integer/rational arithmetic promotes to rationals.
    let (an, ad) = as_rat(&lhs)?;
    let (bn, bd) = as_rat(&rhs)?;
    match op {
        SyntaxKind::Plus => Some(Value::rat(an * bd + bn * ad, ad * bd)),
        SyntaxKind::Minus => Some(Value::rat(an * bd - bn * ad, ad * bd)),
        SyntaxKind::Star => Some(Value::rat(an * bn, ad * bd)),
        SyntaxKind::Slash => {
            if bn == 0 {
                None
            } else {
                Some(Value::rat(an * bd, ad * bn))
            }
        },
        _ => None,
    }
}

fn as_rat(value: &Value) -> Option<(i128, i128)> {
    match value {
        Value::Int(v) => Some((*v, 1)),
        Value::Rat {
            num,
            den,
        } => Some((*num, *den)),
        _ => None,
    }
}

/// The operator token of a unary or binary expression node.
fn operator(node: &SyntaxNode) -> Option<SyntaxKind> {
    node.children_with_tokens()
        .filter_map(|element| element.into_token())
        .map(|token| token.kind())
        .find(|kind| {
            matches!(
                kind,
                SyntaxKind::Plus
                    | SyntaxKind::Minus
                    | SyntaxKind::Star
                    | SyntaxKind::Slash
                    | SyntaxKind::Percent
                    | SyntaxKind::Shl
                    | SyntaxKind::Shr
                    | SyntaxKind::Amp
                    | SyntaxKind::Pipe
                    | SyntaxKind::Caret
                    | SyntaxKind::AndNot
                    | SyntaxKind::Exclaim
            )
        })
}

/// Non-trivia operand elements of an expression node, skipping the
/// operator tokens themselves.
fn operands(node: &SyntaxNode) -> Vec<SyntaxElement> {
    node.children_with_tokens()
        .filter(|element| match element {
            SyntaxElement::Token(token) => matches!(
                token.kind(),
                SyntaxKind::Int
                    | SyntaxKind::Float
                    | SyntaxKind::Imag
                    | SyntaxKind::Rune
                    | SyntaxKind::String
                    | SyntaxKind::RawString
                    | SyntaxKind::Ident
            ),
            SyntaxElement::Node(_) => true,
        })
        .collect()
}

fn parse_int(text: &str) -> Option<i128> {
    let cleaned: String = text.chars().filter(|ch| *ch != '_').collect();
    if let Some(hex) = cleaned.strip_prefix("0x").or_else(|| cleaned.strip_prefix("0X")) {
        return i128::from_str_radix(hex, 16).ok();
    }
    if let Some(bin) = cleaned.strip_prefix("0b").or_else(|| cleaned.strip_prefix("0B")) {
        return i128::from_str_radix(bin, 2).ok();
    }
    if let Some(oct) = cleaned.strip_prefix("0o").or_else(|| cleaned.strip_prefix("0O")) {
        return i128::from_str_radix(oct, 8).ok();
    }
    if cleaned.len() > 1 && cleaned.starts_with('0') {
        return i128::from_str_radix(&cleaned[1..], 8).ok();
    }
    cleaned.parse().ok()
}

/// Decimal float literal to an exact rational.
fn parse_float(text: &str) -> Option<Value> {
    let cleaned: String = text.chars().filter(|ch| *ch != '_').collect();
    let (mantissa, exponent) = match cleaned.find(['e', 'E']) {
        Some(idx) => {
            let exp: i32 = cleaned[idx + 1..].parse().ok()?;
            (&cleaned[..idx], exp)
        },
        None => (cleaned.as_str(), 0),
    };

    let (int_part, frac_part) = match mantissa.find('.') {
        Some(idx) => (&mantissa[..idx], &mantissa[idx + 1..]),
        None => (mantissa, ""),
    };

    let digits = format!(
        "{}{}",
        if int_part.is_empty() { "0" } else { int_part },
        frac_part
    );
    let num: i128 = digits.parse().ok()?;
    let scale = frac_part.len() as i32 - exponent;

    if scale > 0 {
        Some(Value::rat(num, 10i128.checked_pow(scale as u32)?))
    } else {
        Some(Value::Int(num.checked_mul(10i128.checked_pow((-scale) as u32)?)?))
    }
}

fn unquote(text: &str) -> String {
    let inner = text.strip_prefix('"').and_then(|t| t.strip_suffix('"')).unwrap_or(text);
    let mut result = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('"') => result.push('"'),
            Some('\\') => result.push('\\'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            },
            None => result.push('\\'),
        }
    }
    result
}

#[cfg(test)]
#[path = "../../tests/src/resolve/const_eval_tests.rs"]
mod tests;
