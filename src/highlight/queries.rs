// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Tree-sitter highlight queries for each language.
//!
//! Capture names are dotted (`function.method`); only the first segment
//! decides the [`HighlightKind`](super::HighlightKind).

pub const RUST: &str = r#"
; Keywords
[
  "as" "async" "await" "break" "const" "continue" "dyn" "else" "enum" "extern"
  "fn" "for" "if" "impl" "in" "let" "loop" "match" "mod" "move" "pub" "return"
  "static" "struct" "trait" "type" "unsafe" "use" "where" "while"
] @keyword
(mutable_specifier) @keyword
(self) @keyword
(crate) @keyword
(super) @keyword

; Types
(type_identifier) @type
(primitive_type) @type.builtin

; Functions
(function_item name: (identifier) @function)
(call_expression function: (identifier) @function.call)
(call_expression function: (field_expression field: (field_identifier) @function.method))
(call_expression function: (scoped_identifier name: (identifier) @function.call))
(macro_invocation macro: (identifier) @function.macro)

; Variables
(parameter pattern: (identifier) @variable.parameter)
(identifier) @variable

; Strings
(string_literal) @string
(raw_string_literal) @string
(char_literal) @string

; Numbers
(integer_literal) @number
(float_literal) @number
(boolean_literal) @constant

; Comments
(line_comment) @comment
(block_comment) @comment

; Attributes
(attribute_item) @attribute

; Operators
[
  "+" "-" "*" "/" "%" "=" "==" "!=" "<" ">" "<=" ">=" "&&" "||" "!" "+=" "-="
  "=>" "->" "::"
] @operator
"#;

pub const PYTHON: &str = r#"
; Keywords
[
  "and" "as" "assert" "async" "await" "break" "class" "continue" "def" "del"
  "elif" "else" "except" "finally" "for" "from" "global" "if" "import" "in"
  "is" "lambda" "nonlocal" "not" "or" "pass" "raise" "return" "try" "while"
  "with" "yield"
] @keyword

; Types
(class_definition name: (identifier) @type)

; Functions
(function_definition name: (identifier) @function)
(call function: (identifier) @function.call)
(call function: (attribute attribute: (identifier) @function.method))

; Variables
(parameters (identifier) @variable.parameter)
(identifier) @variable

; Strings
(string) @string
(escape_sequence) @string

; Numbers
(integer) @number
(float) @number
(true) @constant
(false) @constant
(none) @constant

; Comments
(comment) @comment

; Decorators
(decorator) @attribute

; Operators
["+" "-" "*" "/" "%" "=" "==" "!=" "<" ">" "<=" ">=" "->"] @operator
"#;

pub const JAVASCRIPT: &str = r#"
; Keywords
[
  "async" "await" "break" "case" "catch" "class" "const" "continue" "default"
  "delete" "do" "else" "export" "extends" "finally" "for" "from" "function"
  "if" "import" "in" "instanceof" "let" "new" "of" "return" "static" "switch"
  "throw" "try" "typeof" "var" "void" "while" "yield"
] @keyword
(this) @keyword
(super) @keyword

; Functions
(function_declaration name: (identifier) @function)
(method_definition name: (property_identifier) @function.method)
(call_expression function: (identifier) @function.call)
(call_expression function: (member_expression property: (property_identifier) @function.method))

; Variables
(formal_parameters (identifier) @variable.parameter)
(identifier) @variable

; Strings
(string) @string
(template_string) @string
(regex) @string

; Numbers
(number) @number
(true) @constant
(false) @constant
(null) @constant
(undefined) @constant

; Comments
(comment) @comment

; Operators
["+" "-" "*" "/" "%" "=" "==" "===" "!=" "!==" "<" ">" "<=" ">=" "&&" "||" "!" "=>"] @operator
"#;

pub const TYPESCRIPT: &str = r#"
; Keywords
[
  "abstract" "async" "await" "break" "case" "catch" "class" "const" "continue"
  "declare" "default" "delete" "do" "else" "enum" "export" "extends" "finally"
  "for" "from" "function" "if" "implements" "import" "in" "instanceof"
  "interface" "let" "namespace" "new" "of" "private" "protected" "public"
  "readonly" "return" "static" "switch" "throw" "try" "type" "typeof" "var"
  "void" "while" "yield"
] @keyword
(this) @keyword
(super) @keyword

; Types
(type_identifier) @type
(predefined_type) @type.builtin

; Functions
(function_declaration name: (identifier) @function)
(method_definition name: (property_identifier) @function.method)
(call_expression function: (identifier) @function.call)
(call_expression function: (member_expression property: (property_identifier) @function.method))

; Variables
(required_parameter pattern: (identifier) @variable.parameter)
(identifier) @variable

; Strings
(string) @string
(template_string) @string
(regex) @string

; Numbers
(number) @number
(true) @constant
(false) @constant
(null) @constant
(undefined) @constant

; Comments
(comment) @comment

; Decorators
(decorator) @attribute

; Operators
["+" "-" "*" "/" "%" "=" "==" "===" "!=" "!==" "<" ">" "<=" ">=" "&&" "||" "!" "=>"] @operator
"#;

pub const GO: &str = r#"
; Keywords
[
  "break" "case" "chan" "const" "continue" "default" "defer" "else"
  "fallthrough" "for" "func" "go" "goto" "if" "import" "interface" "map"
  "package" "range" "return" "select" "struct" "switch" "type" "var"
] @keyword

; Types
(type_identifier) @type

; Functions
(function_declaration name: (identifier) @function)
(method_declaration name: (field_identifier) @function.method)
(call_expression function: (identifier) @function.call)
(call_expression function: (selector_expression field: (field_identifier) @function.method))

; Variables
(parameter_declaration name: (identifier) @variable.parameter)
(identifier) @variable

; Strings
(interpreted_string_literal) @string
(raw_string_literal) @string
(rune_literal) @string

; Numbers
(int_literal) @number
(float_literal) @number
(true) @constant
(false) @constant
(nil) @constant
(iota) @constant

; Comments
(comment) @comment

; Operators
["+" "-" "*" "/" "%" "=" ":=" "==" "!=" "<" ">" "<=" ">=" "&&" "||" "!" "<-"] @operator
"#;

pub const JSON: &str = r#"
(string) @string
(number) @number
(true) @constant
(false) @constant
(null) @constant
"#;

pub const BASH: &str = r#"
; Keywords
[
  "if" "then" "else" "elif" "fi" "case" "esac" "for" "select" "in" "while"
  "until" "do" "done" "function" "local" "export" "readonly" "declare" "unset"
] @keyword

; Commands
(command name: (command_name) @function)
(function_definition name: (word) @function)

; Strings
(string) @string
(raw_string) @string
(heredoc_body) @string

; Variables
(variable_name) @variable

; Comments
(comment) @comment
"#;
