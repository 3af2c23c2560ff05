use super::types::{BuiltinFunc, BuiltinType, BuiltinValue};

/// Functions documented at the top level of the predeclared scope.
pub(crate) const FUNCS: &[BuiltinFunc] = &[
    BuiltinFunc {
        name: "cap",
        doc: "The cap built-in function returns the capacity of v, according to its type:\n\n\tArray: the number of elements in v (same as len(v)).\n\tPointer to array: the number of elements in *v (same as len(v)).\n\tSlice: the maximum length the slice can reach when resliced;\n\tif v is nil, cap(v) is zero.\n\tChannel: the channel buffer capacity, in units of elements;\n\tif v is nil, cap(v) is zero.\n\nFor some arguments, such as a simple array expression, the result can be a\nconstant.",
        decl: "func cap(v Type) int",
    },
    BuiltinFunc {
        name: "clear",
        doc: "The clear built-in function clears maps and slices.\nFor maps, clear deletes all entries, resulting in an empty map.\nFor slices, clear sets all elements up to the length of the slice\nto the zero value of the respective element type.",
        decl: "func clear[T ~[]Type | ~map[Type]Type1](t T)",
    },
    BuiltinFunc {
        name: "close",
        doc: "The close built-in function closes a channel, which must be either\nbidirectional or send-only. It should be executed only by the sender,\nnever the receiver, and has the effect of shutting down the channel after\nthe last sent value is received.",
        decl: "func close(c chan<- Type)",
    },
    BuiltinFunc {
        name: "copy",
        doc: "The copy built-in function copies elements from a source slice into a\ndestination slice. (As a special case, it also will copy bytes from a\nstring to a slice of bytes.) The source and destination may overlap. Copy\nreturns the number of elements copied, which will be the minimum of\nlen(src) and len(dst).",
        decl: "func copy(dst, src []Type) int",
    },
    BuiltinFunc {
        name: "delete",
        doc: "The delete built-in function deletes the element with the specified key\n(m[key]) from the map. If m is nil or there is no such element, delete\nis a no-op.",
        decl: "func delete(m map[Type]Type1, key Type)",
    },
    BuiltinFunc {
        name: "len",
        doc: "The len built-in function returns the length of v, according to its type:\n\n\tArray: the number of elements in v.\n\tPointer to array: the number of elements in *v (even if v is nil).\n\tSlice, or map: the number of elements in v; if v is nil, len(v) is zero.\n\tString: the number of bytes in v.\n\tChannel: the number of elements queued (unread) in the channel buffer;\n\tif v is nil, len(v) is zero.\n\nFor some arguments, such as a string literal or a simple array expression,\nthe result can be a constant.",
        decl: "func len(v Type) int",
    },
    BuiltinFunc {
        name: "max",
        doc: "The max built-in function returns the largest value of a fixed number of\narguments of cmp.Ordered types. There must be at least one argument.",
        decl: "func max[T cmp.Ordered](x T, y ...T) T",
    },
    BuiltinFunc {
        name: "min",
        doc: "The min built-in function returns the smallest value of a fixed number of\narguments of cmp.Ordered types. There must be at least one argument.",
        decl: "func min[T cmp.Ordered](x T, y ...T) T",
    },
    BuiltinFunc {
        name: "panic",
        doc: "The panic built-in function stops normal execution of the current\ngoroutine. When a function F calls panic, normal execution of F stops\nimmediately. Any functions whose execution was deferred by F are run in\nthe usual way, and then F returns to its caller.",
        decl: "func panic(v any)",
    },
    BuiltinFunc {
        name: "print",
        doc: "The print built-in function formats its arguments in an\nimplementation-specific way and writes the result to standard error.\nPrint is useful for bootstrapping and debugging; it is not guaranteed\nto stay in the language.",
        decl: "func print(args ...Type)",
    },
    BuiltinFunc {
        name: "println",
        doc: "The println built-in function formats its arguments in an\nimplementation-specific way and writes the result to standard error.\nSpaces are always added between arguments and a newline is appended.\nPrintln is useful for bootstrapping and debugging; it is not guaranteed\nto stay in the language.",
        decl: "func println(args ...Type)",
    },
    BuiltinFunc {
        name: "recover",
        doc: "The recover built-in function allows a program to manage behavior of a\npanicking goroutine. Executing a call to recover inside a deferred\nfunction (but not any function called by it) stops the panicking sequence\nby restoring normal execution and retrieves the error value passed to the\ncall of panic.",
        decl: "func recover() any",
    },
];

/// Constants documented at the top level of the predeclared scope.
pub(crate) const CONSTS: &[BuiltinValue] = &[
    BuiltinValue {
        names: &["true", "false"],
        doc: "true and false are the two untyped boolean values.",
        decl: "const true = 0 == 0",
    },
    BuiltinValue {
        names: &["iota"],
        doc: "iota is a predeclared identifier representing the untyped integer ordinal\nnumber of the current const specification in a (usually parenthesized)\nconst declaration. It is zero-indexed.",
        decl: "const iota = 0",
    },
];

/// Variables documented at the top level of the predeclared scope. The
/// only predeclared variable, nil, is organized under the doc type Type
/// and found through the catalog's member folding instead.
pub(crate) const VARS: &[BuiltinValue] = &[];

const TYPE_FUNCS: &[BuiltinFunc] = &[
    BuiltinFunc {
        name: "append",
        doc: "The append built-in function appends elements to the end of a slice. If\nit has sufficient capacity, the destination is resliced to accommodate\nthe new elements. If it does not, a new underlying array will be\nallocated. Append returns the updated slice. It is therefore necessary to\nstore the result of append, often in the variable holding the slice\nitself:\n\n\tslice = append(slice, elem1, elem2)\n\tslice = append(slice, anotherSlice...)\n\nAs a special case, it is legal to append a string to a byte slice, like\nthis:\n\n\tslice = append([]byte(\"hello \"), \"world\"...)",
        decl: "func append(slice []Type, elems ...Type) []Type",
    },
    BuiltinFunc {
        name: "make",
        doc: "The make built-in function allocates and initializes an object of type\nslice, map, or chan (only). Like new, the first argument is a type, not a\nvalue. Unlike new, make's return type is the same as the type of its\nargument, not a pointer to it.",
        decl: "func make(t Type, size ...IntegerType) Type",
    },
    BuiltinFunc {
        name: "new",
        doc: "The new built-in function allocates memory. The first argument is a type,\nnot a value, and the value returned is a pointer to a newly allocated\nzero value of that type.",
        decl: "func new(Type) *Type",
    },
];

const TYPE_VARS: &[BuiltinValue] = &[BuiltinValue {
    names: &["nil"],
    doc: "nil is a predeclared identifier representing the zero value for a\npointer, channel, func, interface, map, or slice type.",
    decl: "var nil Type",
}];

const COMPLEX_TYPE_FUNCS: &[BuiltinFunc] = &[BuiltinFunc {
    name: "complex",
    doc: "The complex built-in function constructs a complex value from two\nfloating-point values. The real and imaginary parts must be of the same\nsize, either float32 or float64 (or assignable to them), and the return\nvalue will be the corresponding complex type (complex64 for float32,\ncomplex128 for float64).",
    decl: "func complex(r, i FloatType) ComplexType",
}];

const FLOAT_TYPE_FUNCS: &[BuiltinFunc] = &[
    BuiltinFunc {
        name: "real",
        doc: "The real built-in function returns the real part of the complex number c.\nThe return value will be floating point type corresponding to the type of c.",
        decl: "func real(c ComplexType) FloatType",
    },
    BuiltinFunc {
        name: "imag",
        doc: "The imag built-in function returns the imaginary part of the complex\nnumber c. The return value will be floating point type corresponding to\nthe type of c.",
        decl: "func imag(c ComplexType) FloatType",
    },
];

const EMPTY_FUNCS: &[BuiltinFunc] = &[];
const EMPTY_VALUES: &[BuiltinValue] = &[];

macro_rules! plain_type {
    ($name:literal, $doc:literal, $decl:literal) => {
        BuiltinType {
            name: $name,
            doc: $doc,
            decl: $decl,
            funcs: EMPTY_FUNCS,
            consts: EMPTY_VALUES,
            vars: EMPTY_VALUES,
        }
    };
}

/// Types of the predeclared scope, including the documentation-only
/// placeholder types that carry the folded members.
pub(crate) const TYPES: &[BuiltinType] = &[
    plain_type!(
        "any",
        "any is an alias for interface{} and is equivalent to interface{} in all ways.",
        "type any = interface{}"
    ),
    plain_type!(
        "bool",
        "bool is the set of boolean values, true and false.",
        "type bool bool"
    ),
    plain_type!(
        "byte",
        "byte is an alias for uint8 and is equivalent to uint8 in all ways. It is\nused, by convention, to distinguish byte values from 8-bit unsigned\ninteger values.",
        "type byte = uint8"
    ),
    plain_type!(
        "comparable",
        "comparable is an interface that is implemented by all comparable types\n(booleans, numbers, strings, pointers, channels, arrays of comparable\ntypes, structs whose fields are all comparable types). The comparable\ninterface may only be used as a type parameter constraint, not as the\ntype of a variable.",
        "type comparable interface{ comparable }"
    ),
    plain_type!(
        "complex64",
        "complex64 is the set of all complex numbers with float32 real and\nimaginary parts.",
        "type complex64 complex64"
    ),
    plain_type!(
        "complex128",
        "complex128 is the set of all complex numbers with float64 real and\nimaginary parts.",
        "type complex128 complex128"
    ),
    plain_type!(
        "error",
        "The error built-in interface type is the conventional interface for\nrepresenting an error condition, with the nil value representing no\nerror.",
        "type error interface {\n\tError() string\n}"
    ),
    plain_type!(
        "float32",
        "float32 is the set of all IEEE-754 32-bit floating-point numbers.",
        "type float32 float32"
    ),
    plain_type!(
        "float64",
        "float64 is the set of all IEEE-754 64-bit floating-point numbers.",
        "type float64 float64"
    ),
    plain_type!(
        "int",
        "int is a signed integer type that is at least 32 bits in size. It is a\ndistinct type, however, and not an alias for, say, int32.",
        "type int int"
    ),
    plain_type!(
        "int8",
        "int8 is the set of all signed 8-bit integers.\nRange: -128 through 127.",
        "type int8 int8"
    ),
    plain_type!(
        "int16",
        "int16 is the set of all signed 16-bit integers.\nRange: -32768 through 32767.",
        "type int16 int16"
    ),
    plain_type!(
        "int32",
        "int32 is the set of all signed 32-bit integers.\nRange: -2147483648 through 2147483647.",
        "type int32 int32"
    ),
    plain_type!(
        "int64",
        "int64 is the set of all signed 64-bit integers.\nRange: -9223372036854775808 through 9223372036854775807.",
        "type int64 int64"
    ),
    plain_type!(
        "rune",
        "rune is an alias for int32 and is equivalent to int32 in all ways. It is\nused, by convention, to distinguish character values from integer values.",
        "type rune = int32"
    ),
    plain_type!(
        "string",
        "string is the set of all strings of 8-bit bytes, conventionally but not\nnecessarily representing UTF-8-encoded text. A string may be empty, but\nnot nil. Values of string type are immutable.",
        "type string string"
    ),
    plain_type!(
        "uint",
        "uint is an unsigned integer type that is at least 32 bits in size. It is\na distinct type, however, and not an alias for, say, uint32.",
        "type uint uint"
    ),
    plain_type!(
        "uint8",
        "uint8 is the set of all unsigned 8-bit integers.\nRange: 0 through 255.",
        "type uint8 uint8"
    ),
    plain_type!(
        "uint16",
        "uint16 is the set of all unsigned 16-bit integers.\nRange: 0 through 65535.",
        "type uint16 uint16"
    ),
    plain_type!(
        "uint32",
        "uint32 is the set of all unsigned 32-bit integers.\nRange: 0 through 4294967295.",
        "type uint32 uint32"
    ),
    plain_type!(
        "uint64",
        "uint64 is the set of all unsigned 64-bit integers.\nRange: 0 through 18446744073709551615.",
        "type uint64 uint64"
    ),
    plain_type!(
        "uintptr",
        "uintptr is an integer type that is large enough to hold the bit pattern\nof any pointer.",
        "type uintptr uintptr"
    ),
    BuiltinType {
        name: "Type",
        doc: "Type is here for the purposes of documentation only. It is a stand-in\nfor any Go type, but represents the same type for any given function\ninvocation.",
        decl: "type Type int",
        funcs: TYPE_FUNCS,
        consts: EMPTY_VALUES,
        vars: TYPE_VARS,
    },
    plain_type!(
        "Type1",
        "Type1 is here for the purposes of documentation only. It is a stand-in\nfor any Go type, but represents the same type for any given function\ninvocation.",
        "type Type1 int"
    ),
    plain_type!(
        "IntegerType",
        "IntegerType is here for the purposes of documentation only. It is a\nstand-in for any integer type: int, uint, int8 etc.",
        "type IntegerType int"
    ),
    BuiltinType {
        name: "FloatType",
        doc: "FloatType is here for the purposes of documentation only. It is a\nstand-in for either float type: float32 or float64.",
        decl: "type FloatType float32",
        funcs: FLOAT_TYPE_FUNCS,
        consts: EMPTY_VALUES,
        vars: EMPTY_VALUES,
    },
    BuiltinType {
        name: "ComplexType",
        doc: "ComplexType is here for the purpose of documentation only. It is a\nstand-in for either complex type: complex64 or complex128.",
        decl: "type ComplexType complex64",
        funcs: COMPLEX_TYPE_FUNCS,
        consts: EMPTY_VALUES,
        vars: EMPTY_VALUES,
    },
];
