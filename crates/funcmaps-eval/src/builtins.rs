//! Builtin helpers exposed through [`crate::FuncMap::builtin`].
//!
//! Every helper takes its arguments as a slice, checks arity and argument
//! kinds, and delegates to the typed API.

use crate::compare::equals_with;
use crate::config::CompareOptions;
use crate::error::{HelperError, HelperResult};
use crate::helpers::{deep_equal, join_values, map_of, repeat};
use crate::membership::{has, has_any};
use crate::printable::printable_value;
use crate::registry::Helper;
use crate::resolve::resolve;
use crate::truth::{coalesce, is_default, is_empty, is_true, yes_no};
use funcmaps_types::RuntimeValue;

/// Name/helper pairs of the builtin table.
pub(crate) const BUILTINS: &[(&str, Helper)] = &[
    ("is_true", is_true_helper),
    ("is_empty", is_empty_helper),
    ("is_default", is_default_helper),
    ("yesno", yes_no_helper),
    ("ternary", yes_no_helper),
    ("coalesce", coalesce_helper),
    ("has", has_helper),
    ("has_any", has_any_helper),
    ("eq", eq_helper),
    ("eq_any", eq_helper),
    ("deep_eq", deep_eq_helper),
    ("repeat", repeat_helper),
    ("join2", join_helper),
    ("map", map_helper),
    ("string", string_helper),
];

// ── Argument checks ──────────────────────────────────────────────────────────

fn exact(helper: &'static str, args: &[RuntimeValue], expected: usize) -> HelperResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(HelperError::Arity {
            helper,
            expected: expected.to_string(),
            got: args.len(),
        })
    }
}

fn at_least(helper: &'static str, args: &[RuntimeValue], min: usize) -> HelperResult<()> {
    if args.len() >= min {
        Ok(())
    } else {
        Err(HelperError::Arity {
            helper,
            expected: format!("at least {min}"),
            got: args.len(),
        })
    }
}

fn int_arg(helper: &'static str, index: usize, value: &RuntimeValue) -> HelperResult<i64> {
    let resolved = resolve(value).concrete();
    let got = resolved.map_or("nil", RuntimeValue::type_name);
    let bad = || HelperError::ArgumentType {
        helper,
        index,
        expected: "an integer",
        got,
    };
    match resolved {
        Some(RuntimeValue::Int(n)) => Ok(*n),
        Some(RuntimeValue::Uint(n)) => i64::try_from(*n).map_err(|_| bad()),
        _ => Err(bad()),
    }
}

fn str_arg<'a>(
    helper: &'static str,
    index: usize,
    value: &'a RuntimeValue,
) -> HelperResult<&'a str> {
    let resolved = resolve(value).concrete();
    match resolved {
        Some(RuntimeValue::String(s)) => Ok(s.as_str()),
        _ => Err(HelperError::ArgumentType {
            helper,
            index,
            expected: "a string",
            got: resolved.map_or("nil", RuntimeValue::type_name),
        }),
    }
}

// ── Truthiness ───────────────────────────────────────────────────────────────

fn is_true_helper(_: &CompareOptions, args: &[RuntimeValue]) -> HelperResult<RuntimeValue> {
    exact("is_true", args, 1)?;
    Ok(RuntimeValue::Bool(is_true(&args[0])))
}

fn is_empty_helper(_: &CompareOptions, args: &[RuntimeValue]) -> HelperResult<RuntimeValue> {
    exact("is_empty", args, 1)?;
    Ok(RuntimeValue::Bool(is_empty(&args[0])))
}

fn is_default_helper(_: &CompareOptions, args: &[RuntimeValue]) -> HelperResult<RuntimeValue> {
    exact("is_default", args, 2)?;
    Ok(is_default(&args[0], &args[1]).clone())
}

fn yes_no_helper(_: &CompareOptions, args: &[RuntimeValue]) -> HelperResult<RuntimeValue> {
    exact("yesno", args, 3)?;
    Ok(yes_no(&args[0], &args[1], &args[2]).clone())
}

fn coalesce_helper(_: &CompareOptions, args: &[RuntimeValue]) -> HelperResult<RuntimeValue> {
    Ok(coalesce(args).cloned().unwrap_or_else(RuntimeValue::absent))
}

// ── Comparison & membership ──────────────────────────────────────────────────

fn has_helper(_: &CompareOptions, args: &[RuntimeValue]) -> HelperResult<RuntimeValue> {
    at_least("has", args, 1)?;
    Ok(RuntimeValue::Bool(has(&args[0], &args[1..])))
}

fn has_any_helper(_: &CompareOptions, args: &[RuntimeValue]) -> HelperResult<RuntimeValue> {
    at_least("has_any", args, 1)?;
    Ok(RuntimeValue::Bool(has_any(&args[0], &args[1..])))
}

fn eq_helper(options: &CompareOptions, args: &[RuntimeValue]) -> HelperResult<RuntimeValue> {
    at_least("eq", args, 1)?;
    Ok(RuntimeValue::Bool(equals_with(options, &args[0], &args[1..])?))
}

fn deep_eq_helper(_: &CompareOptions, args: &[RuntimeValue]) -> HelperResult<RuntimeValue> {
    exact("deep_eq", args, 2)?;
    Ok(RuntimeValue::Bool(deep_equal(&args[0], &args[1])))
}

// ── Formatting ───────────────────────────────────────────────────────────────

fn repeat_helper(_: &CompareOptions, args: &[RuntimeValue]) -> HelperResult<RuntimeValue> {
    exact("repeat", args, 2)?;
    let n = int_arg("repeat", 0, &args[0])?;
    Ok(RuntimeValue::String(repeat(n, &args[1])?))
}

fn join_helper(_: &CompareOptions, args: &[RuntimeValue]) -> HelperResult<RuntimeValue> {
    at_least("join2", args, 1)?;
    let sep = str_arg("join2", 0, &args[0])?;
    Ok(RuntimeValue::String(join_values(sep, &args[1..])))
}

fn map_helper(_: &CompareOptions, args: &[RuntimeValue]) -> HelperResult<RuntimeValue> {
    Ok(map_of(args))
}

fn string_helper(_: &CompareOptions, args: &[RuntimeValue]) -> HelperResult<RuntimeValue> {
    exact("string", args, 1)?;
    Ok(RuntimeValue::String(printable_value(&args[0]).to_string()))
}
