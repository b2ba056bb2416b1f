//! Parser tests driven from source text through `lisp_lexer`.
