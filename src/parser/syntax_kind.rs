//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all possible node and token kinds in the syntax tree
//! of the Java subset route and bean classes are written in.

/// All syntax kinds (tokens and nodes).
///
/// Tokens are leaf nodes (identifiers, keywords, punctuation).
/// Nodes are composite (classes, methods, expressions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,
    INT_NUMBER,   // 42, 0x2A, 42L
    FLOAT_NUMBER, // 3.14, 1e3, 2f
    STRING,       // "hello" (may be unterminated while editing)
    CHAR,         // 'c'

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_PAREN,     // (
    R_PAREN,     // )
    L_BRACE,     // {
    R_BRACE,     // }
    L_BRACKET,   // [
    R_BRACKET,   // ]
    SEMICOLON,   // ;
    COMMA,       // ,
    DOT,         // .
    ELLIPSIS,    // ...
    AT,          // @
    COLON_COLON, // ::
    ARROW,       // ->
    QUESTION,    // ?
    COLON,       // :
    EQ,          // =
    EQ_EQ,       // ==
    BANG,        // !
    BANG_EQ,     // !=
    TILDE,       // ~
    LT,          // <
    GT,          // > (`>>` and `>>>` are adjacent GT tokens)
    LT_EQ,       // <=
    GT_EQ,       // >=
    SHL,         // <<
    AMP,         // &
    AMP_AMP,     // &&
    PIPE,        // |
    PIPE_PIPE,   // ||
    CARET,       // ^
    PLUS,        // +
    MINUS,       // -
    STAR,        // *
    SLASH,       // /
    PERCENT,     // %
    PLUS_PLUS,   // ++
    MINUS_MINUS, // --
    PLUS_EQ,     // +=
    MINUS_EQ,    // -=
    STAR_EQ,     // *=
    SLASH_EQ,    // /=
    PERCENT_EQ,  // %=
    AMP_EQ,      // &=
    PIPE_EQ,     // |=
    CARET_EQ,    // ^=
    SHL_EQ,      // <<=
    SHR_EQ,      // >>=
    USHR_EQ,     // >>>=

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    ABSTRACT_KW,
    ASSERT_KW,
    BOOLEAN_KW,
    BREAK_KW,
    BYTE_KW,
    CASE_KW,
    CATCH_KW,
    CHAR_KW,
    CLASS_KW,
    CONTINUE_KW,
    DEFAULT_KW,
    DO_KW,
    DOUBLE_KW,
    ELSE_KW,
    ENUM_KW,
    EXTENDS_KW,
    FINAL_KW,
    FINALLY_KW,
    FLOAT_KW,
    FOR_KW,
    IF_KW,
    IMPLEMENTS_KW,
    IMPORT_KW,
    INSTANCEOF_KW,
    INT_KW,
    INTERFACE_KW,
    LONG_KW,
    NATIVE_KW,
    NEW_KW,
    PACKAGE_KW,
    PRIVATE_KW,
    PROTECTED_KW,
    PUBLIC_KW,
    RETURN_KW,
    SHORT_KW,
    STATIC_KW,
    STRICTFP_KW,
    SUPER_KW,
    SWITCH_KW,
    SYNCHRONIZED_KW,
    THIS_KW,
    THROW_KW,
    THROWS_KW,
    TRANSIENT_KW,
    TRY_KW,
    VOID_KW,
    VOLATILE_KW,
    WHILE_KW,
    TRUE_KW,
    FALSE_KW,
    NULL_KW,
    // Contextual: lexed as IDENT, remapped by the parser.
    RECORD_KW,

    // =========================================================================
    // NODES - DECLARATIONS
    // =========================================================================
    SOURCE_FILE,
    PACKAGE_DECL,
    IMPORT_DECL,
    QUALIFIED_NAME,
    NAME,
    CLASS_DECL,
    MODIFIERS,
    ANNOTATION,
    ANNOTATION_ARG_LIST,
    ANNOTATION_ARG,
    ANNOTATION_ARRAY,
    EXTENDS_CLAUSE,
    IMPLEMENTS_CLAUSE,
    TYPE_PARAMS,
    CLASS_BODY,
    ENUM_CONSTANT,
    FIELD_DECL,
    VAR_DECLARATOR,
    METHOD_DECL,
    PARAM_LIST,
    PARAM,
    THROWS_CLAUSE,
    INITIALIZER,
    TYPE_REF,
    TYPE_ARGS,

    // =========================================================================
    // NODES - STATEMENTS
    // =========================================================================
    BLOCK,
    LOCAL_VAR_DECL,
    EXPR_STMT,
    RETURN_STMT,
    THROW_STMT,
    IF_STMT,
    WHILE_STMT,
    DO_STMT,
    FOR_STMT,
    FOR_HEADER,
    TRY_STMT,
    CATCH_CLAUSE,
    FINALLY_CLAUSE,
    SYNCHRONIZED_STMT,
    SWITCH_STMT,
    SWITCH_BODY,
    JUMP_STMT,
    EMPTY_STMT,

    // =========================================================================
    // NODES - EXPRESSIONS
    // =========================================================================
    LITERAL,
    NAME_REF,
    THIS_EXPR,
    SUPER_EXPR,
    FIELD_ACCESS_EXPR,
    METHOD_CALL_EXPR,
    ARG_LIST,
    CLASS_LITERAL,
    NEW_EXPR,
    ARRAY_INIT,
    CAST_EXPR,
    LAMBDA_EXPR,
    LAMBDA_PARAMS,
    METHOD_REF_EXPR,
    PAREN_EXPR,
    PREFIX_EXPR,
    POSTFIX_EXPR,
    BIN_EXPR,
    INSTANCEOF_EXPR,
    CONDITIONAL_EXPR,
    ASSIGN_EXPR,
    INDEX_EXPR,

    // Error node for recovery
    ERROR,

    // End of input; returned by lookahead, never stored in a tree
    EOF,

    // Marker for the end of the enum
    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::ABSTRACT_KW as u16) && (self as u16) <= (Self::RECORD_KW as u16)
    }

    /// Primitive type keywords (plus `void`, which only appears as a return type).
    pub fn is_primitive_type(self) -> bool {
        matches!(
            self,
            Self::BOOLEAN_KW
                | Self::BYTE_KW
                | Self::CHAR_KW
                | Self::SHORT_KW
                | Self::INT_KW
                | Self::LONG_KW
                | Self::FLOAT_KW
                | Self::DOUBLE_KW
                | Self::VOID_KW
        )
    }

    /// Declaration modifiers (annotations are handled separately).
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            Self::PUBLIC_KW
                | Self::PROTECTED_KW
                | Self::PRIVATE_KW
                | Self::STATIC_KW
                | Self::FINAL_KW
                | Self::ABSTRACT_KW
                | Self::NATIVE_KW
                | Self::SYNCHRONIZED_KW
                | Self::TRANSIENT_KW
                | Self::VOLATILE_KW
                | Self::STRICTFP_KW
                | Self::DEFAULT_KW
        )
    }

    /// Token kinds that form a LITERAL node.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::INT_NUMBER
                | Self::FLOAT_NUMBER
                | Self::STRING
                | Self::CHAR
                | Self::TRUE_KW
                | Self::FALSE_KW
                | Self::NULL_KW
        )
    }

    /// Assignment operators, lowest precedence and right associative.
    pub fn is_assign_op(self) -> bool {
        matches!(
            self,
            Self::EQ
                | Self::PLUS_EQ
                | Self::MINUS_EQ
                | Self::STAR_EQ
                | Self::SLASH_EQ
                | Self::PERCENT_EQ
                | Self::AMP_EQ
                | Self::PIPE_EQ
                | Self::CARET_EQ
                | Self::SHL_EQ
                | Self::SHR_EQ
                | Self::USHR_EQ
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JavaLanguage {}

impl rowan::Language for JavaLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Syntax node type for our language
pub type SyntaxNode = rowan::SyntaxNode<JavaLanguage>;
/// Syntax token type for our language
pub type SyntaxToken = rowan::SyntaxToken<JavaLanguage>;
/// Syntax element (node or token)
pub type SyntaxElement = rowan::SyntaxElement<JavaLanguage>;
