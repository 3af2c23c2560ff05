use once_cell::sync::Lazy;

use super::functions;
use super::types::{BuiltinFunc, BuiltinPackage, BuiltinValue};

static BUILTIN_PACKAGE: Lazy<BuiltinPackage> = Lazy::new(|| BuiltinPackage {
    funcs: functions::FUNCS,
    consts: functions::CONSTS,
    vars: functions::VARS,
    types: functions::TYPES,
});

/// The synthesized predeclared-scope pseudo-package. Built once per
/// process and never mutated afterwards.
pub fn package() -> &'static BuiltinPackage {
    &BUILTIN_PACKAGE
}

/// Search the predeclared scope for an identifier and return its
/// documentation and declaration.
///
/// The search order is significant and fixed: functions first, then
/// constants and variables, then types. Before searching, the members the
/// documentation tree organizes under a type (append under Type, nil under
/// Type's variables, and so on) are folded into the outer buckets. The
/// ordering is inherited from how the predeclared scope happens to be laid
/// out; do not reorder it.
pub fn lookup(name: &str) -> Option<(String, String)> {
    let pkg = package();

    let mut funcs: Vec<&BuiltinFunc> = Vec::with_capacity(2 * pkg.funcs.len());
    let mut consts: Vec<&BuiltinValue> = Vec::with_capacity(2 * pkg.consts.len());
    let mut vars: Vec<&BuiltinValue> = Vec::with_capacity(2 * pkg.vars.len());

    funcs.extend(pkg.funcs);
    consts.extend(pkg.consts);
    vars.extend(pkg.vars);

    for typ in pkg.types {
        funcs.extend(typ.funcs);
        consts.extend(typ.consts);
        vars.extend(typ.vars);
    }

    // funcs
    for func in &funcs {
        if func.name == name {
            return Some((func.doc.to_string(), func.decl.to_string()));
        }
    }

    // consts/vars
    for value in &consts {
        if value.names.contains(&name) {
            return Some((value.doc.to_string(), value.decl.to_string()));
        }
    }

    for value in &vars {
        if value.names.contains(&name) {
            return Some((value.doc.to_string(), value.decl.to_string()));
        }
    }

    // types
    for typ in pkg.types {
        if typ.name == name {
            return Some((typ.doc.to_string(), typ.decl.to_string()));
        }
    }

    None
}

/// Whether a name exists anywhere in the predeclared scope.
pub fn is_predeclared(name: &str) -> bool {
    lookup(name).is_some()
}
