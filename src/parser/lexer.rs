//! Logos-based lexer for the Java subset.
//!
//! Every byte of the input ends up in exactly one token; characters the
//! lexer does not understand become ERROR tokens.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use rowan::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*")]
    Ident,

    #[regex(r"[0-9][0-9_]*[lL]?")]
    #[regex(r"0[xX][0-9a-fA-F_]+[lL]?")]
    IntNumber,

    #[regex(r"[0-9][0-9_]*\.[0-9_]*([eE][+-]?[0-9]+)?[fFdD]?")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9]+)?[fFdD]?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9]+[fFdD]?")]
    #[regex(r"[0-9][0-9_]*[fFdD]")]
    FloatNumber,

    // The closing quote is optional so a literal being typed stays one token.
    #[regex(r#""([^"\\\n]|\\.)*"?"#)]
    String,

    #[regex(r"'([^'\\\n]|\\.)*'?")]
    Char,

    // =========================================================================
    // MULTI-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("...")]
    Ellipsis,
    #[token("::")]
    ColonColon,
    #[token("->")]
    Arrow,
    #[token("==")]
    EqEq,
    #[token("!=")]
    BangEq,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("<<")]
    Shl,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
    #[token("*=")]
    StarEq,
    #[token("/=")]
    SlashEq,
    #[token("%=")]
    PercentEq,
    #[token("&=")]
    AmpEq,
    #[token("|=")]
    PipeEq,
    #[token("^=")]
    CaretEq,
    #[token("<<=")]
    ShlEq,
    #[token(">>=")]
    ShrEq,
    #[token(">>>=")]
    UshrEq,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("@")]
    At,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,
    #[token("=")]
    Eq,
    #[token("!")]
    Bang,
    #[token("~")]
    Tilde,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    #[token("abstract")]
    AbstractKw,
    #[token("assert")]
    AssertKw,
    #[token("boolean")]
    BooleanKw,
    #[token("break")]
    BreakKw,
    #[token("byte")]
    ByteKw,
    #[token("case")]
    CaseKw,
    #[token("catch")]
    CatchKw,
    #[token("char")]
    CharKw,
    #[token("class")]
    ClassKw,
    #[token("continue")]
    ContinueKw,
    #[token("default")]
    DefaultKw,
    #[token("do")]
    DoKw,
    #[token("double")]
    DoubleKw,
    #[token("else")]
    ElseKw,
    #[token("enum")]
    EnumKw,
    #[token("extends")]
    ExtendsKw,
    #[token("final")]
    FinalKw,
    #[token("finally")]
    FinallyKw,
    #[token("float")]
    FloatKw,
    #[token("for")]
    ForKw,
    #[token("if")]
    IfKw,
    #[token("implements")]
    ImplementsKw,
    #[token("import")]
    ImportKw,
    #[token("instanceof")]
    InstanceofKw,
    #[token("int")]
    IntKw,
    #[token("interface")]
    InterfaceKw,
    #[token("long")]
    LongKw,
    #[token("native")]
    NativeKw,
    #[token("new")]
    NewKw,
    #[token("package")]
    PackageKw,
    #[token("private")]
    PrivateKw,
    #[token("protected")]
    ProtectedKw,
    #[token("public")]
    PublicKw,
    #[token("return")]
    ReturnKw,
    #[token("short")]
    ShortKw,
    #[token("static")]
    StaticKw,
    #[token("strictfp")]
    StrictfpKw,
    #[token("super")]
    SuperKw,
    #[token("switch")]
    SwitchKw,
    #[token("synchronized")]
    SynchronizedKw,
    #[token("this")]
    ThisKw,
    #[token("throw")]
    ThrowKw,
    #[token("throws")]
    ThrowsKw,
    #[token("transient")]
    TransientKw,
    #[token("try")]
    TryKw,
    #[token("void")]
    VoidKw,
    #[token("volatile")]
    VolatileKw,
    #[token("while")]
    WhileKw,
    #[token("true")]
    TrueKw,
    #[token("false")]
    FalseKw,
    #[token("null")]
    NullKw,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Whitespace => SyntaxKind::WHITESPACE,
            LogosToken::LineComment => SyntaxKind::LINE_COMMENT,
            LogosToken::BlockComment => SyntaxKind::BLOCK_COMMENT,

            LogosToken::Ident => SyntaxKind::IDENT,
            LogosToken::IntNumber => SyntaxKind::INT_NUMBER,
            LogosToken::FloatNumber => SyntaxKind::FLOAT_NUMBER,
            LogosToken::String => SyntaxKind::STRING,
            LogosToken::Char => SyntaxKind::CHAR,

            LogosToken::Ellipsis => SyntaxKind::ELLIPSIS,
            LogosToken::ColonColon => SyntaxKind::COLON_COLON,
            LogosToken::Arrow => SyntaxKind::ARROW,
            LogosToken::EqEq => SyntaxKind::EQ_EQ,
            LogosToken::BangEq => SyntaxKind::BANG_EQ,
            LogosToken::LtEq => SyntaxKind::LT_EQ,
            LogosToken::GtEq => SyntaxKind::GT_EQ,
            LogosToken::Shl => SyntaxKind::SHL,
            LogosToken::AmpAmp => SyntaxKind::AMP_AMP,
            LogosToken::PipePipe => SyntaxKind::PIPE_PIPE,
            LogosToken::PlusPlus => SyntaxKind::PLUS_PLUS,
            LogosToken::MinusMinus => SyntaxKind::MINUS_MINUS,
            LogosToken::PlusEq => SyntaxKind::PLUS_EQ,
            LogosToken::MinusEq => SyntaxKind::MINUS_EQ,
            LogosToken::StarEq => SyntaxKind::STAR_EQ,
            LogosToken::SlashEq => SyntaxKind::SLASH_EQ,
            LogosToken::PercentEq => SyntaxKind::PERCENT_EQ,
            LogosToken::AmpEq => SyntaxKind::AMP_EQ,
            LogosToken::PipeEq => SyntaxKind::PIPE_EQ,
            LogosToken::CaretEq => SyntaxKind::CARET_EQ,
            LogosToken::ShlEq => SyntaxKind::SHL_EQ,
            LogosToken::ShrEq => SyntaxKind::SHR_EQ,
            LogosToken::UshrEq => SyntaxKind::USHR_EQ,

            LogosToken::LParen => SyntaxKind::L_PAREN,
            LogosToken::RParen => SyntaxKind::R_PAREN,
            LogosToken::LBrace => SyntaxKind::L_BRACE,
            LogosToken::RBrace => SyntaxKind::R_BRACE,
            LogosToken::LBracket => SyntaxKind::L_BRACKET,
            LogosToken::RBracket => SyntaxKind::R_BRACKET,
            LogosToken::Semicolon => SyntaxKind::SEMICOLON,
            LogosToken::Comma => SyntaxKind::COMMA,
            LogosToken::Dot => SyntaxKind::DOT,
            LogosToken::At => SyntaxKind::AT,
            LogosToken::Question => SyntaxKind::QUESTION,
            LogosToken::Colon => SyntaxKind::COLON,
            LogosToken::Eq => SyntaxKind::EQ,
            LogosToken::Bang => SyntaxKind::BANG,
            LogosToken::Tilde => SyntaxKind::TILDE,
            LogosToken::Lt => SyntaxKind::LT,
            LogosToken::Gt => SyntaxKind::GT,
            LogosToken::Amp => SyntaxKind::AMP,
            LogosToken::Pipe => SyntaxKind::PIPE,
            LogosToken::Caret => SyntaxKind::CARET,
            LogosToken::Plus => SyntaxKind::PLUS,
            LogosToken::Minus => SyntaxKind::MINUS,
            LogosToken::Star => SyntaxKind::STAR,
            LogosToken::Slash => SyntaxKind::SLASH,
            LogosToken::Percent => SyntaxKind::PERCENT,

            LogosToken::AbstractKw => SyntaxKind::ABSTRACT_KW,
            LogosToken::AssertKw => SyntaxKind::ASSERT_KW,
            LogosToken::BooleanKw => SyntaxKind::BOOLEAN_KW,
            LogosToken::BreakKw => SyntaxKind::BREAK_KW,
            LogosToken::ByteKw => SyntaxKind::BYTE_KW,
            LogosToken::CaseKw => SyntaxKind::CASE_KW,
            LogosToken::CatchKw => SyntaxKind::CATCH_KW,
            LogosToken::CharKw => SyntaxKind::CHAR_KW,
            LogosToken::ClassKw => SyntaxKind::CLASS_KW,
            LogosToken::ContinueKw => SyntaxKind::CONTINUE_KW,
            LogosToken::DefaultKw => SyntaxKind::DEFAULT_KW,
            LogosToken::DoKw => SyntaxKind::DO_KW,
            LogosToken::DoubleKw => SyntaxKind::DOUBLE_KW,
            LogosToken::ElseKw => SyntaxKind::ELSE_KW,
            LogosToken::EnumKw => SyntaxKind::ENUM_KW,
            LogosToken::ExtendsKw => SyntaxKind::EXTENDS_KW,
            LogosToken::FinalKw => SyntaxKind::FINAL_KW,
            LogosToken::FinallyKw => SyntaxKind::FINALLY_KW,
            LogosToken::FloatKw => SyntaxKind::FLOAT_KW,
            LogosToken::ForKw => SyntaxKind::FOR_KW,
            LogosToken::IfKw => SyntaxKind::IF_KW,
            LogosToken::ImplementsKw => SyntaxKind::IMPLEMENTS_KW,
            LogosToken::ImportKw => SyntaxKind::IMPORT_KW,
            LogosToken::InstanceofKw => SyntaxKind::INSTANCEOF_KW,
            LogosToken::IntKw => SyntaxKind::INT_KW,
            LogosToken::InterfaceKw => SyntaxKind::INTERFACE_KW,
            LogosToken::LongKw => SyntaxKind::LONG_KW,
            LogosToken::NativeKw => SyntaxKind::NATIVE_KW,
            LogosToken::NewKw => SyntaxKind::NEW_KW,
            LogosToken::PackageKw => SyntaxKind::PACKAGE_KW,
            LogosToken::PrivateKw => SyntaxKind::PRIVATE_KW,
            LogosToken::ProtectedKw => SyntaxKind::PROTECTED_KW,
            LogosToken::PublicKw => SyntaxKind::PUBLIC_KW,
            LogosToken::ReturnKw => SyntaxKind::RETURN_KW,
            LogosToken::ShortKw => SyntaxKind::SHORT_KW,
            LogosToken::StaticKw => SyntaxKind::STATIC_KW,
            LogosToken::StrictfpKw => SyntaxKind::STRICTFP_KW,
            LogosToken::SuperKw => SyntaxKind::SUPER_KW,
            LogosToken::SwitchKw => SyntaxKind::SWITCH_KW,
            LogosToken::SynchronizedKw => SyntaxKind::SYNCHRONIZED_KW,
            LogosToken::ThisKw => SyntaxKind::THIS_KW,
            LogosToken::ThrowKw => SyntaxKind::THROW_KW,
            LogosToken::ThrowsKw => SyntaxKind::THROWS_KW,
            LogosToken::TransientKw => SyntaxKind::TRANSIENT_KW,
            LogosToken::TryKw => SyntaxKind::TRY_KW,
            LogosToken::VoidKw => SyntaxKind::VOID_KW,
            LogosToken::VolatileKw => SyntaxKind::VOLATILE_KW,
            LogosToken::WhileKw => SyntaxKind::WHILE_KW,
            LogosToken::TrueKw => SyntaxKind::TRUE_KW,
            LogosToken::FalseKw => SyntaxKind::FALSE_KW,
            LogosToken::NullKw => SyntaxKind::NULL_KW,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<SyntaxKind> {
        tokenize(input)
            .into_iter()
            .map(|t| t.kind)
            .filter(|k| !k.is_trivia())
            .collect()
    }

    #[test]
    fn test_lex_bean_call() {
        assert_eq!(
            kinds(r#".bean("svc", "save(${body})")"#),
            vec![
                SyntaxKind::DOT,
                SyntaxKind::IDENT,
                SyntaxKind::L_PAREN,
                SyntaxKind::STRING,
                SyntaxKind::COMMA,
                SyntaxKind::STRING,
                SyntaxKind::R_PAREN,
            ]
        );
    }

    #[test]
    fn test_keywords_win_over_identifiers() {
        assert_eq!(
            kinds("class classic"),
            vec![SyntaxKind::CLASS_KW, SyntaxKind::IDENT]
        );
    }

    #[test]
    fn test_escaped_quote_stays_inside_string() {
        let tokens = tokenize(r#""a\"b" x"#);
        assert_eq!(tokens[0].kind, SyntaxKind::STRING);
        assert_eq!(tokens[0].text, r#""a\"b""#);
    }

    #[test]
    fn test_unterminated_string_is_one_token() {
        let tokens = tokenize("\"save\n;");
        assert_eq!(tokens[0].kind, SyntaxKind::STRING);
        assert_eq!(tokens[0].text, "\"save");
    }

    #[test]
    fn test_shift_right_is_two_gt_tokens() {
        assert_eq!(
            kinds("a >> b"),
            vec![
                SyntaxKind::IDENT,
                SyntaxKind::GT,
                SyntaxKind::GT,
                SyntaxKind::IDENT
            ]
        );
    }

    #[test]
    fn test_offsets_cover_input() {
        let input = "int x = 42; // done";
        let tokens = tokenize(input);
        let total: usize = tokens.iter().map(|t| t.text.len()).sum();
        assert_eq!(total, input.len());
        assert_eq!(tokens.last().map(|t| t.kind), Some(SyntaxKind::LINE_COMMENT));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            kinds("42 42L 0x2A 3.14 1e3 2f .5"),
            vec![
                SyntaxKind::INT_NUMBER,
                SyntaxKind::INT_NUMBER,
                SyntaxKind::INT_NUMBER,
                SyntaxKind::FLOAT_NUMBER,
                SyntaxKind::FLOAT_NUMBER,
                SyntaxKind::FLOAT_NUMBER,
                SyntaxKind::FLOAT_NUMBER,
            ]
        );
    }
}
