/// A function in the predeclared scope.
#[derive(Debug, Clone)]
pub struct BuiltinFunc {
    pub name: &'static str,
    pub doc: &'static str,
    pub decl: &'static str,
}

/// A constant or variable group in the predeclared scope. One entry can
/// declare several names, the way `true` and `false` share a spec.
#[derive(Debug, Clone)]
pub struct BuiltinValue {
    pub names: &'static [&'static str],
    pub doc: &'static str,
    pub decl: &'static str,
}

/// A type in the predeclared scope, together with the functions, constants
/// and variables the documentation tree organizes under it.
#[derive(Debug, Clone)]
pub struct BuiltinType {
    pub name: &'static str,
    pub doc: &'static str,
    pub decl: &'static str,
    pub funcs: &'static [BuiltinFunc],
    pub consts: &'static [BuiltinValue],
    pub vars: &'static [BuiltinValue],
}

/// The synthesized pseudo-package holding the predeclared scope.
#[derive(Debug, Clone)]
pub struct BuiltinPackage {
    pub funcs: &'static [BuiltinFunc],
    pub consts: &'static [BuiltinValue],
    pub vars: &'static [BuiltinValue],
    pub types: &'static [BuiltinType],
}
