//! Recursive descent parser for the Java subset.
//!
//! Builds a rowan GreenNode tree from tokens.
//! Supports error recovery and produces a lossless CST: every input byte
//! ends up in exactly one token of the tree.

use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;
use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A syntax error with location and message
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at {range:?}")]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// Parse Java source code into a CST
pub fn parse_java(input: &str) -> Parse {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let mut parser = Parser::new(&tokens);
    parser.parse_source_file();
    parser.finish()
}

/// Binary operator precedences, lowest first.
const ASSIGN_BP: u8 = 1;
const TERNARY_BP: u8 = 2;

/// The parser state
struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>]) -> Self {
        Self {
            tokens,
            pos: 0,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
        }
    }

    fn finish(mut self) -> Parse {
        // Trailing trivia belongs to the root.
        self.skip_trivia();
        while self.pos < self.tokens.len() {
            self.bump_raw();
        }
        self.builder.finish_node();
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    /// Index of the `n`th significant (non-trivia) token from `pos`.
    fn nth_index(&self, n: usize) -> Option<usize> {
        let mut count = 0;
        let mut idx = self.pos;
        while idx < self.tokens.len() {
            if !self.tokens[idx].kind.is_trivia() {
                if count == n {
                    return Some(idx);
                }
                count += 1;
            }
            idx += 1;
        }
        None
    }

    fn nth(&self, n: usize) -> SyntaxKind {
        self.nth_index(n)
            .map(|idx| self.tokens[idx].kind)
            .unwrap_or(SyntaxKind::EOF)
    }

    fn nth_text(&self, n: usize) -> &str {
        self.nth_index(n).map(|idx| self.tokens[idx].text).unwrap_or("")
    }

    fn current(&self) -> SyntaxKind {
        self.nth(0)
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        kinds.contains(&self.current())
    }

    fn at_eof(&self) -> bool {
        self.current() == SyntaxKind::EOF
    }

    /// `>` tokens directly adjacent to the current one (for `>>` / `>>>`).
    fn adjacent_gt_run(&self) -> usize {
        let Some(start) = self.nth_index(0) else {
            return 0;
        };
        self.tokens[start..]
            .iter()
            .take(3)
            .take_while(|t| t.kind == SyntaxKind::GT)
            .count()
    }

    fn at_record_decl(&self) -> bool {
        self.at(SyntaxKind::IDENT)
            && self.nth_text(0) == "record"
            && self.nth(1) == SyntaxKind::IDENT
            && matches!(self.nth(2), SyntaxKind::L_PAREN | SyntaxKind::LT)
    }

    fn at_type_decl_keyword(&self) -> bool {
        match self.current() {
            SyntaxKind::CLASS_KW | SyntaxKind::INTERFACE_KW | SyntaxKind::ENUM_KW => true,
            SyntaxKind::AT => self.nth(1) == SyntaxKind::INTERFACE_KW,
            _ => self.at_record_decl(),
        }
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump_raw(&mut self) {
        let token = &self.tokens[self.pos];
        self.builder.token(token.kind.into(), token.text);
        self.pos += 1;
    }

    fn skip_trivia(&mut self) {
        while self.pos < self.tokens.len() && self.tokens[self.pos].kind.is_trivia() {
            self.bump_raw();
        }
    }

    fn bump(&mut self) {
        self.skip_trivia();
        if self.pos < self.tokens.len() {
            self.bump_raw();
        }
    }

    /// Bump the current token, storing it under a different kind.
    fn bump_remap(&mut self, kind: SyntaxKind) {
        self.skip_trivia();
        if let Some(token) = self.tokens.get(self.pos) {
            self.builder.token(kind.into(), token.text);
            self.pos += 1;
        }
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.eat(kind) {
            true
        } else {
            self.error(format!("expected {:?}", kind));
            false
        }
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn error(&mut self, message: impl Into<String>) {
        let range = match self.nth_index(0) {
            Some(idx) => {
                let token = &self.tokens[idx];
                TextRange::at(token.offset, TextSize::of(token.text))
            }
            None => {
                let end = self
                    .tokens
                    .last()
                    .map(|t| t.offset + TextSize::of(t.text))
                    .unwrap_or_default();
                TextRange::empty(end)
            }
        };
        self.errors.push(SyntaxError::new(message, range));
    }

    fn error_recover(&mut self, message: impl Into<String>, recovery: &[SyntaxKind]) {
        self.error(message);
        self.start_node(SyntaxKind::ERROR);
        // Always consume at least one token to make progress
        let mut consumed = false;
        while !self.at_eof() && !self.at_any(recovery) {
            self.bump();
            consumed = true;
        }
        if !consumed && !self.at_eof() {
            self.bump();
        }
        self.finish_node();
    }

    // =========================================================================
    // Node building helpers
    // =========================================================================

    fn start_node(&mut self, kind: SyntaxKind) {
        self.skip_trivia();
        self.builder.start_node(kind.into());
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    fn checkpoint(&mut self) -> Checkpoint {
        self.skip_trivia();
        self.builder.checkpoint()
    }

    fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    // =========================================================================
    // Lookahead scanning (no tree building)
    // =========================================================================

    /// If a type starts at significant offset `k`, return the offset after it.
    fn scan_type(&self, mut k: usize) -> Option<usize> {
        if self.nth(k).is_primitive_type() {
            k += 1;
        } else if self.nth(k) == SyntaxKind::IDENT {
            k += 1;
            loop {
                if self.nth(k) == SyntaxKind::LT {
                    k = self.scan_type_args(k)?;
                }
                if self.nth(k) == SyntaxKind::DOT && self.nth(k + 1) == SyntaxKind::IDENT {
                    k += 2;
                } else {
                    break;
                }
            }
        } else {
            return None;
        }
        while self.nth(k) == SyntaxKind::L_BRACKET && self.nth(k + 1) == SyntaxKind::R_BRACKET {
            k += 2;
        }
        Some(k)
    }

    fn scan_type_args(&self, mut k: usize) -> Option<usize> {
        debug_assert_eq!(self.nth(k), SyntaxKind::LT);
        k += 1;
        if self.nth(k) == SyntaxKind::GT {
            return Some(k + 1);
        }
        loop {
            if self.nth(k) == SyntaxKind::QUESTION {
                k += 1;
                if matches!(self.nth(k), SyntaxKind::EXTENDS_KW | SyntaxKind::SUPER_KW) {
                    k = self.scan_type(k + 1)?;
                }
            } else {
                k = self.scan_type(k)?;
            }
            match self.nth(k) {
                SyntaxKind::COMMA => k += 1,
                SyntaxKind::GT => return Some(k + 1),
                _ => return None,
            }
        }
    }

    /// Offset just past the parenthesis matching the `(` at offset `k`.
    fn scan_matching_paren(&self, mut k: usize) -> Option<usize> {
        let mut depth = 0usize;
        loop {
            match self.nth(k) {
                SyntaxKind::L_PAREN => depth += 1,
                SyntaxKind::R_PAREN => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(k + 1);
                    }
                }
                SyntaxKind::EOF => return None,
                _ => {}
            }
            k += 1;
        }
    }

    fn at_local_var_decl(&self) -> bool {
        if matches!(self.current(), SyntaxKind::FINAL_KW | SyntaxKind::AT) {
            return true;
        }
        match self.scan_type(0) {
            Some(k) => {
                self.nth(k) == SyntaxKind::IDENT
                    && matches!(
                        self.nth(k + 1),
                        SyntaxKind::EQ
                            | SyntaxKind::SEMICOLON
                            | SyntaxKind::COMMA
                            | SyntaxKind::COLON
                            | SyntaxKind::L_BRACKET
                    )
            }
            None => false,
        }
    }

    fn at_lambda(&self) -> bool {
        match self.current() {
            SyntaxKind::IDENT => self.nth(1) == SyntaxKind::ARROW,
            SyntaxKind::L_PAREN => self
                .scan_matching_paren(0)
                .is_some_and(|k| self.nth(k) == SyntaxKind::ARROW),
            _ => false,
        }
    }

    fn at_cast(&self) -> bool {
        if !self.at(SyntaxKind::L_PAREN) {
            return false;
        }
        if self.nth(1).is_primitive_type() {
            return self.scan_type(1).is_some_and(|k| self.nth(k) == SyntaxKind::R_PAREN);
        }
        let Some(mut k) = self.scan_type(1) else {
            return false;
        };
        while self.nth(k) == SyntaxKind::AMP {
            match self.scan_type(k + 1) {
                Some(next) => k = next,
                None => return false,
            }
        }
        if self.nth(k) != SyntaxKind::R_PAREN {
            return false;
        }
        let next = self.nth(k + 1);
        next.is_literal()
            || matches!(
                next,
                SyntaxKind::IDENT
                    | SyntaxKind::L_PAREN
                    | SyntaxKind::THIS_KW
                    | SyntaxKind::SUPER_KW
                    | SyntaxKind::NEW_KW
                    | SyntaxKind::BANG
                    | SyntaxKind::TILDE
            )
    }

    // =========================================================================
    // Grammar rules: compilation unit
    // =========================================================================

    /// SourceFile = PackageDecl? ImportDecl* TypeDecl*
    fn parse_source_file(&mut self) {
        self.builder.start_node(SyntaxKind::SOURCE_FILE.into());

        while !self.at_eof() {
            let pos_before = self.pos;
            match self.current() {
                SyntaxKind::PACKAGE_KW => self.parse_package(),
                SyntaxKind::IMPORT_KW => self.parse_import(),
                SyntaxKind::SEMICOLON => self.bump(),
                _ => self.parse_top_level_type(),
            }
            // Safety: if we didn't make progress, force-skip a token
            if self.pos == pos_before && !self.at_eof() {
                self.error(format!("stuck on token: {:?}", self.current()));
                self.bump();
            }
        }
        // SOURCE_FILE is closed in `finish` after trailing trivia.
    }

    /// PackageDecl = 'package' QualifiedName ';'
    fn parse_package(&mut self) {
        self.start_node(SyntaxKind::PACKAGE_DECL);
        self.expect(SyntaxKind::PACKAGE_KW);
        self.parse_qualified_name();
        self.expect(SyntaxKind::SEMICOLON);
        self.finish_node();
    }

    /// ImportDecl = 'import' 'static'? QualifiedName ('.' '*')? ';'
    fn parse_import(&mut self) {
        self.start_node(SyntaxKind::IMPORT_DECL);
        self.expect(SyntaxKind::IMPORT_KW);
        self.eat(SyntaxKind::STATIC_KW);
        self.parse_qualified_name();
        if self.at(SyntaxKind::DOT) && self.nth(1) == SyntaxKind::STAR {
            self.bump();
            self.bump();
        }
        self.expect(SyntaxKind::SEMICOLON);
        self.finish_node();
    }

    /// QualifiedName = IDENT ('.' IDENT)*
    fn parse_qualified_name(&mut self) {
        self.start_node(SyntaxKind::QUALIFIED_NAME);
        self.expect(SyntaxKind::IDENT);
        while self.at(SyntaxKind::DOT) && self.nth(1) == SyntaxKind::IDENT {
            self.bump();
            self.bump();
        }
        self.finish_node();
    }

    fn parse_name(&mut self) {
        if self.at(SyntaxKind::IDENT) {
            self.start_node(SyntaxKind::NAME);
            self.bump();
            self.finish_node();
        } else {
            self.error("expected a name");
        }
    }

    fn parse_top_level_type(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_modifiers();
        if self.at_type_decl_keyword() {
            self.parse_class_decl_rest(checkpoint);
        } else {
            self.start_node_at(checkpoint, SyntaxKind::ERROR);
            self.error(format!("expected a type declaration, found {:?}", self.current()));
            while !self.at_eof()
                && !self.at_type_decl_keyword()
                && !self.at_any(&[SyntaxKind::PUBLIC_KW, SyntaxKind::IMPORT_KW, SyntaxKind::AT])
            {
                self.bump();
            }
            self.finish_node();
        }
    }

    // =========================================================================
    // Grammar rules: modifiers and annotations
    // =========================================================================

    /// Modifiers = (Annotation | modifier keyword)*
    fn parse_modifiers(&mut self) {
        self.start_node(SyntaxKind::MODIFIERS);
        loop {
            if self.at(SyntaxKind::AT) && self.nth(1) != SyntaxKind::INTERFACE_KW {
                self.parse_annotation();
            } else if self.current().is_modifier()
                && !(self.at(SyntaxKind::DEFAULT_KW) && self.nth(1) == SyntaxKind::COLON)
            {
                self.bump();
            } else if self.at(SyntaxKind::IDENT)
                && matches!(self.nth_text(0), "sealed" | "non")
                && self.nth(1) != SyntaxKind::IDENT
                && self.nth(1) != SyntaxKind::DOT
            {
                // `sealed` / `non-sealed`
                self.bump();
                if self.at(SyntaxKind::MINUS) {
                    self.bump();
                    self.bump();
                }
            } else {
                break;
            }
        }
        self.finish_node();
    }

    /// Annotation = '@' QualifiedName AnnotationArgList?
    fn parse_annotation(&mut self) {
        self.start_node(SyntaxKind::ANNOTATION);
        self.expect(SyntaxKind::AT);
        self.parse_qualified_name();
        if self.at(SyntaxKind::L_PAREN) {
            self.parse_annotation_arg_list();
        }
        self.finish_node();
    }

    fn parse_annotation_arg_list(&mut self) {
        self.start_node(SyntaxKind::ANNOTATION_ARG_LIST);
        self.expect(SyntaxKind::L_PAREN);
        while !self.at(SyntaxKind::R_PAREN) && !self.at_eof() {
            let pos_before = self.pos;
            self.start_node(SyntaxKind::ANNOTATION_ARG);
            if self.at(SyntaxKind::IDENT) && self.nth(1) == SyntaxKind::EQ {
                self.parse_name();
                self.bump();
            }
            self.parse_element_value();
            self.finish_node();
            if !self.eat(SyntaxKind::COMMA) {
                break;
            }
            if self.pos == pos_before {
                break;
            }
        }
        if !self.expect(SyntaxKind::R_PAREN) {
            self.error_recover("malformed annotation arguments", &[SyntaxKind::R_PAREN]);
            self.eat(SyntaxKind::R_PAREN);
        }
        self.finish_node();
    }

    /// ElementValue = Annotation | '{' ElementValue,* '}' | Expr
    fn parse_element_value(&mut self) {
        match self.current() {
            SyntaxKind::AT => self.parse_annotation(),
            SyntaxKind::L_BRACE => {
                self.start_node(SyntaxKind::ANNOTATION_ARRAY);
                self.bump();
                while !self.at(SyntaxKind::R_BRACE) && !self.at_eof() {
                    let pos_before = self.pos;
                    self.parse_element_value();
                    if !self.eat(SyntaxKind::COMMA) || self.pos == pos_before {
                        break;
                    }
                }
                self.expect(SyntaxKind::R_BRACE);
                self.finish_node();
            }
            _ => {
                self.parse_expr();
            }
        }
    }

    // =========================================================================
    // Grammar rules: type declarations
    // =========================================================================

    /// ClassDecl = Modifiers kind Name TypeParams? RecordHeader? Extends? Implements? ClassBody
    ///
    /// Modifiers have already been parsed after `checkpoint`.
    fn parse_class_decl_rest(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::CLASS_DECL);
        let is_enum = self.at(SyntaxKind::ENUM_KW);
        let is_record = self.at_record_decl();
        if self.at(SyntaxKind::AT) {
            self.bump();
            self.bump();
        } else if is_record {
            self.bump_remap(SyntaxKind::RECORD_KW);
        } else {
            self.bump();
        }
        self.parse_name();
        if self.at(SyntaxKind::LT) {
            self.parse_type_params();
        }
        if is_record && self.at(SyntaxKind::L_PAREN) {
            self.parse_param_list();
        }
        if self.at(SyntaxKind::EXTENDS_KW) {
            self.start_node(SyntaxKind::EXTENDS_CLAUSE);
            self.bump();
            self.parse_type_list();
            self.finish_node();
        }
        if self.at(SyntaxKind::IMPLEMENTS_KW) {
            self.start_node(SyntaxKind::IMPLEMENTS_CLAUSE);
            self.bump();
            self.parse_type_list();
            self.finish_node();
        }
        if self.at(SyntaxKind::IDENT) && self.nth_text(0) == "permits" {
            self.bump();
            self.parse_type_list();
        }
        if self.at(SyntaxKind::L_BRACE) {
            self.parse_class_body(is_enum);
        } else {
            self.error("expected class body");
        }
        self.finish_node();
    }

    fn parse_type_list(&mut self) {
        self.parse_type();
        while self.eat(SyntaxKind::COMMA) {
            self.parse_type();
        }
    }

    /// TypeParams = '<' ... '>' (bounds are kept as raw tokens)
    fn parse_type_params(&mut self) {
        self.start_node(SyntaxKind::TYPE_PARAMS);
        self.expect(SyntaxKind::LT);
        let mut depth = 1usize;
        while !self.at_eof() {
            match self.current() {
                SyntaxKind::LT => depth += 1,
                SyntaxKind::GT => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                SyntaxKind::L_BRACE | SyntaxKind::L_PAREN | SyntaxKind::SEMICOLON => break,
                _ => {}
            }
            self.bump();
        }
        self.expect(SyntaxKind::GT);
        self.finish_node();
    }

    /// ClassBody = '{' EnumConstants? Member* '}'
    fn parse_class_body(&mut self, is_enum: bool) {
        self.start_node(SyntaxKind::CLASS_BODY);
        self.expect(SyntaxKind::L_BRACE);

        if is_enum {
            self.parse_enum_constants();
        }

        while !self.at(SyntaxKind::R_BRACE) && !self.at_eof() {
            let pos_before = self.pos;
            self.parse_member();
            if self.pos == pos_before {
                self.error_recover(
                    format!("unexpected token in class body: {:?}", self.current()),
                    &[SyntaxKind::R_BRACE, SyntaxKind::SEMICOLON],
                );
            }
        }

        self.expect(SyntaxKind::R_BRACE);
        self.finish_node();
    }

    fn parse_enum_constants(&mut self) {
        while self.at(SyntaxKind::IDENT) || self.at(SyntaxKind::AT) {
            let pos_before = self.pos;
            self.start_node(SyntaxKind::ENUM_CONSTANT);
            self.parse_modifiers();
            self.parse_name();
            if self.at(SyntaxKind::L_PAREN) {
                self.parse_arg_list();
            }
            if self.at(SyntaxKind::L_BRACE) {
                self.parse_class_body(false);
            }
            self.finish_node();
            if !self.eat(SyntaxKind::COMMA) || self.pos == pos_before {
                break;
            }
        }
        self.eat(SyntaxKind::SEMICOLON);
    }

    /// Member = ';' | Initializer | Modifiers (ClassDecl | MethodDecl | FieldDecl)
    fn parse_member(&mut self) {
        match self.current() {
            SyntaxKind::SEMICOLON => {
                self.bump();
                return;
            }
            SyntaxKind::L_BRACE => {
                self.start_node(SyntaxKind::INITIALIZER);
                self.parse_block();
                self.finish_node();
                return;
            }
            SyntaxKind::STATIC_KW if self.nth(1) == SyntaxKind::L_BRACE => {
                self.start_node(SyntaxKind::INITIALIZER);
                self.bump();
                self.parse_block();
                self.finish_node();
                return;
            }
            _ => {}
        }

        let checkpoint = self.checkpoint();
        self.parse_modifiers();

        if self.at_type_decl_keyword() {
            self.parse_class_decl_rest(checkpoint);
            return;
        }

        if self.at(SyntaxKind::LT) {
            self.parse_type_params();
        }

        // Constructor: Name '(' ...
        if self.at(SyntaxKind::IDENT) && self.nth(1) == SyntaxKind::L_PAREN {
            self.start_node_at(checkpoint, SyntaxKind::METHOD_DECL);
            self.parse_name();
            self.parse_method_rest();
            self.finish_node();
            return;
        }

        // Compact record constructor: Name '{'
        if self.at(SyntaxKind::IDENT) && self.nth(1) == SyntaxKind::L_BRACE {
            self.start_node_at(checkpoint, SyntaxKind::METHOD_DECL);
            self.parse_name();
            self.parse_block();
            self.finish_node();
            return;
        }

        if self.scan_type(0).is_none() {
            self.start_node_at(checkpoint, SyntaxKind::ERROR);
            self.error(format!("expected a member declaration, found {:?}", self.current()));
            if !self.at(SyntaxKind::R_BRACE) && !self.at_eof() {
                self.bump();
            }
            self.finish_node();
            return;
        }

        self.parse_type();

        if self.at(SyntaxKind::IDENT) && self.nth(1) == SyntaxKind::L_PAREN {
            self.start_node_at(checkpoint, SyntaxKind::METHOD_DECL);
            self.parse_name();
            self.parse_method_rest();
            self.finish_node();
        } else {
            self.start_node_at(checkpoint, SyntaxKind::FIELD_DECL);
            self.parse_var_declarators();
            self.expect(SyntaxKind::SEMICOLON);
            self.finish_node();
        }
    }

    /// MethodRest = ParamList Dims? Throws? ('default' ElementValue)? (Block | ';')
    fn parse_method_rest(&mut self) {
        self.parse_param_list();
        while self.at(SyntaxKind::L_BRACKET) && self.nth(1) == SyntaxKind::R_BRACKET {
            self.bump();
            self.bump();
        }
        if self.at(SyntaxKind::THROWS_KW) {
            self.start_node(SyntaxKind::THROWS_CLAUSE);
            self.bump();
            self.parse_type_list();
            self.finish_node();
        }
        if self.eat(SyntaxKind::DEFAULT_KW) {
            self.parse_element_value();
        }
        if self.at(SyntaxKind::L_BRACE) {
            self.parse_block();
        } else {
            self.expect(SyntaxKind::SEMICOLON);
        }
    }

    /// ParamList = '(' (Param (',' Param)*)? ')'
    fn parse_param_list(&mut self) {
        self.start_node(SyntaxKind::PARAM_LIST);
        self.expect(SyntaxKind::L_PAREN);
        while !self.at(SyntaxKind::R_PAREN) && !self.at_eof() {
            let pos_before = self.pos;
            self.parse_param();
            if !self.eat(SyntaxKind::COMMA) || self.pos == pos_before {
                break;
            }
        }
        if !self.eat(SyntaxKind::R_PAREN) {
            self.error_recover(
                "expected ')' after parameters",
                &[SyntaxKind::R_PAREN, SyntaxKind::L_BRACE, SyntaxKind::SEMICOLON],
            );
            self.eat(SyntaxKind::R_PAREN);
        }
        self.finish_node();
    }

    /// Param = Modifiers Type '...'? Name Dims?
    fn parse_param(&mut self) {
        self.start_node(SyntaxKind::PARAM);
        self.parse_modifiers();
        self.parse_type();
        self.eat(SyntaxKind::ELLIPSIS);
        if self.at(SyntaxKind::THIS_KW) {
            // receiver parameter
            self.bump();
        } else {
            self.parse_name();
        }
        while self.at(SyntaxKind::L_BRACKET) && self.nth(1) == SyntaxKind::R_BRACKET {
            self.bump();
            self.bump();
        }
        self.finish_node();
    }

    fn parse_var_declarators(&mut self) {
        self.parse_var_declarator();
        while self.eat(SyntaxKind::COMMA) {
            self.parse_var_declarator();
        }
    }

    /// VarDeclarator = Name Dims? ('=' (ArrayInit | Expr))?
    fn parse_var_declarator(&mut self) {
        self.start_node(SyntaxKind::VAR_DECLARATOR);
        self.parse_name();
        while self.at(SyntaxKind::L_BRACKET) && self.nth(1) == SyntaxKind::R_BRACKET {
            self.bump();
            self.bump();
        }
        if self.eat(SyntaxKind::EQ) {
            self.parse_var_init();
        }
        self.finish_node();
    }

    fn parse_var_init(&mut self) {
        if self.at(SyntaxKind::L_BRACE) {
            self.parse_array_init();
        } else if !self.parse_expr() {
            self.error("expected initializer");
        }
    }

    // =========================================================================
    // Grammar rules: types
    // =========================================================================

    /// Type = (primitive | IDENT TypeArgs? ('.' IDENT TypeArgs?)*) ('[' ']')*
    fn parse_type(&mut self) {
        self.start_node(SyntaxKind::TYPE_REF);
        self.parse_type_inner();
        while self.at(SyntaxKind::L_BRACKET) && self.nth(1) == SyntaxKind::R_BRACKET {
            self.bump();
            self.bump();
        }
        self.finish_node();
    }

    fn parse_type_inner(&mut self) {
        while self.at(SyntaxKind::AT) {
            self.parse_annotation();
        }
        if self.current().is_primitive_type() {
            self.bump();
            return;
        }
        if !self.at(SyntaxKind::IDENT) {
            self.error("expected a type");
            return;
        }
        self.bump();
        loop {
            if self.at(SyntaxKind::LT) {
                self.parse_type_args();
            }
            if self.at(SyntaxKind::DOT) && self.nth(1) == SyntaxKind::IDENT {
                self.bump();
                self.bump();
            } else {
                break;
            }
        }
    }

    /// TypeArgs = '<' (TypeArg (',' TypeArg)*)? '>'
    fn parse_type_args(&mut self) {
        self.start_node(SyntaxKind::TYPE_ARGS);
        self.expect(SyntaxKind::LT);
        while !self.at(SyntaxKind::GT) && !self.at_eof() {
            let pos_before = self.pos;
            if self.eat(SyntaxKind::QUESTION) {
                if self.at_any(&[SyntaxKind::EXTENDS_KW, SyntaxKind::SUPER_KW]) {
                    self.bump();
                    self.parse_type();
                }
            } else {
                self.parse_type();
            }
            if !self.eat(SyntaxKind::COMMA) || self.pos == pos_before {
                break;
            }
        }
        self.expect(SyntaxKind::GT);
        self.finish_node();
    }

    // =========================================================================
    // Grammar rules: statements
    // =========================================================================

    /// Block = '{' Statement* '}'
    fn parse_block(&mut self) {
        self.start_node(SyntaxKind::BLOCK);
        self.expect(SyntaxKind::L_BRACE);
        while !self.at(SyntaxKind::R_BRACE) && !self.at_eof() {
            let pos_before = self.pos;
            self.parse_statement();
            if self.pos == pos_before {
                self.error_recover(
                    format!("unexpected token in block: {:?}", self.current()),
                    &[SyntaxKind::R_BRACE, SyntaxKind::SEMICOLON],
                );
            }
        }
        self.expect(SyntaxKind::R_BRACE);
        self.finish_node();
    }

    fn parse_statement(&mut self) {
        match self.current() {
            SyntaxKind::L_BRACE => self.parse_block(),
            SyntaxKind::SEMICOLON => {
                self.start_node(SyntaxKind::EMPTY_STMT);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::IF_KW => self.parse_if(),
            SyntaxKind::WHILE_KW => {
                self.start_node(SyntaxKind::WHILE_STMT);
                self.bump();
                self.parse_paren_condition();
                self.parse_statement();
                self.finish_node();
            }
            SyntaxKind::DO_KW => {
                self.start_node(SyntaxKind::DO_STMT);
                self.bump();
                self.parse_statement();
                self.expect(SyntaxKind::WHILE_KW);
                self.parse_paren_condition();
                self.expect(SyntaxKind::SEMICOLON);
                self.finish_node();
            }
            SyntaxKind::FOR_KW => {
                self.start_node(SyntaxKind::FOR_STMT);
                self.bump();
                self.parse_for_header();
                self.parse_statement();
                self.finish_node();
            }
            SyntaxKind::TRY_KW => self.parse_try(),
            SyntaxKind::SWITCH_KW => self.parse_switch(),
            SyntaxKind::SYNCHRONIZED_KW if self.nth(1) == SyntaxKind::L_PAREN => {
                self.start_node(SyntaxKind::SYNCHRONIZED_STMT);
                self.bump();
                self.parse_paren_condition();
                self.parse_block();
                self.finish_node();
            }
            SyntaxKind::RETURN_KW => {
                self.start_node(SyntaxKind::RETURN_STMT);
                self.bump();
                if !self.at(SyntaxKind::SEMICOLON) {
                    self.parse_expr();
                }
                self.expect(SyntaxKind::SEMICOLON);
                self.finish_node();
            }
            SyntaxKind::THROW_KW => {
                self.start_node(SyntaxKind::THROW_STMT);
                self.bump();
                self.parse_expr();
                self.expect(SyntaxKind::SEMICOLON);
                self.finish_node();
            }
            SyntaxKind::BREAK_KW | SyntaxKind::CONTINUE_KW => {
                self.start_node(SyntaxKind::JUMP_STMT);
                self.bump();
                self.eat(SyntaxKind::IDENT);
                self.expect(SyntaxKind::SEMICOLON);
                self.finish_node();
            }
            SyntaxKind::ASSERT_KW => {
                self.start_node(SyntaxKind::EXPR_STMT);
                self.bump();
                self.parse_expr();
                if self.eat(SyntaxKind::COLON) {
                    self.parse_expr();
                }
                self.expect(SyntaxKind::SEMICOLON);
                self.finish_node();
            }
            SyntaxKind::IDENT if self.nth(1) == SyntaxKind::COLON => {
                // labeled statement
                self.bump();
                self.bump();
                self.parse_statement();
            }
            SyntaxKind::IDENT if self.nth_text(0) == "yield" && self.nth(1) != SyntaxKind::EQ => {
                self.start_node(SyntaxKind::RETURN_STMT);
                self.bump();
                self.parse_expr();
                self.expect(SyntaxKind::SEMICOLON);
                self.finish_node();
            }
            _ if self.at_type_decl_keyword()
                || (self.current().is_modifier() && !self.at(SyntaxKind::FINAL_KW)) =>
            {
                let checkpoint = self.checkpoint();
                self.parse_modifiers();
                if self.at_type_decl_keyword() {
                    self.parse_class_decl_rest(checkpoint);
                } else {
                    self.start_node_at(checkpoint, SyntaxKind::ERROR);
                    self.error("expected a local class declaration");
                    self.finish_node();
                }
            }
            _ if self.at_local_var_decl() => {
                let checkpoint = self.checkpoint();
                self.parse_modifiers();
                if self.at_type_decl_keyword() {
                    self.parse_class_decl_rest(checkpoint);
                } else {
                    self.start_node_at(checkpoint, SyntaxKind::LOCAL_VAR_DECL);
                    self.parse_type();
                    self.parse_var_declarators();
                    self.expect(SyntaxKind::SEMICOLON);
                    self.finish_node();
                }
            }
            _ => {
                self.start_node(SyntaxKind::EXPR_STMT);
                if self.parse_expr() {
                    self.expect(SyntaxKind::SEMICOLON);
                }
                self.finish_node();
            }
        }
    }

    fn parse_paren_condition(&mut self) {
        self.expect(SyntaxKind::L_PAREN);
        self.parse_expr();
        self.expect(SyntaxKind::R_PAREN);
    }

    fn parse_if(&mut self) {
        self.start_node(SyntaxKind::IF_STMT);
        self.bump();
        self.parse_paren_condition();
        self.parse_statement();
        if self.eat(SyntaxKind::ELSE_KW) {
            self.parse_statement();
        }
        self.finish_node();
    }

    /// ForHeader = '(' (LocalVar | Expr | ';' | ':' | ',')* ')'
    fn parse_for_header(&mut self) {
        self.start_node(SyntaxKind::FOR_HEADER);
        self.expect(SyntaxKind::L_PAREN);
        while !self.at(SyntaxKind::R_PAREN) && !self.at_eof() {
            let pos_before = self.pos;
            if self.at_any(&[SyntaxKind::SEMICOLON, SyntaxKind::COLON, SyntaxKind::COMMA]) {
                self.bump();
            } else if self.at_local_var_decl() {
                self.start_node(SyntaxKind::LOCAL_VAR_DECL);
                self.parse_modifiers();
                self.parse_type();
                self.parse_var_declarators();
                self.finish_node();
            } else {
                self.parse_expr();
            }
            if self.pos == pos_before {
                self.error_recover("unexpected token in for header", &[SyntaxKind::R_PAREN]);
            }
        }
        self.expect(SyntaxKind::R_PAREN);
        self.finish_node();
    }

    fn parse_try(&mut self) {
        self.start_node(SyntaxKind::TRY_STMT);
        self.bump();
        if self.at(SyntaxKind::L_PAREN) {
            // try-with-resources
            self.parse_for_header();
        }
        self.parse_block();
        while self.at(SyntaxKind::CATCH_KW) {
            self.start_node(SyntaxKind::CATCH_CLAUSE);
            self.bump();
            self.expect(SyntaxKind::L_PAREN);
            self.start_node(SyntaxKind::PARAM);
            self.parse_modifiers();
            self.parse_type();
            while self.eat(SyntaxKind::PIPE) {
                self.parse_type();
            }
            self.parse_name();
            self.finish_node();
            self.expect(SyntaxKind::R_PAREN);
            self.parse_block();
            self.finish_node();
        }
        if self.at(SyntaxKind::FINALLY_KW) {
            self.start_node(SyntaxKind::FINALLY_CLAUSE);
            self.bump();
            self.parse_block();
            self.finish_node();
        }
        self.finish_node();
    }

    /// Switch = 'switch' '(' Expr ')' SwitchBody (also used in expression position)
    fn parse_switch(&mut self) {
        self.start_node(SyntaxKind::SWITCH_STMT);
        self.bump();
        self.parse_paren_condition();
        self.start_node(SyntaxKind::SWITCH_BODY);
        self.expect(SyntaxKind::L_BRACE);
        while !self.at(SyntaxKind::R_BRACE) && !self.at_eof() {
            let pos_before = self.pos;
            if self.at(SyntaxKind::CASE_KW) || self.at(SyntaxKind::DEFAULT_KW) {
                let is_case = self.at(SyntaxKind::CASE_KW);
                self.bump();
                if is_case {
                    self.parse_expr_no_lambda();
                    while self.eat(SyntaxKind::COMMA) {
                        self.parse_expr_no_lambda();
                    }
                }
                if self.eat(SyntaxKind::ARROW) {
                    if self.at(SyntaxKind::L_BRACE) || self.at(SyntaxKind::THROW_KW) {
                        self.parse_statement();
                    } else {
                        self.start_node(SyntaxKind::EXPR_STMT);
                        self.parse_expr();
                        self.expect(SyntaxKind::SEMICOLON);
                        self.finish_node();
                    }
                } else {
                    self.expect(SyntaxKind::COLON);
                }
            } else {
                self.parse_statement();
            }
            if self.pos == pos_before {
                self.error_recover("unexpected token in switch", &[SyntaxKind::R_BRACE]);
            }
        }
        self.expect(SyntaxKind::R_BRACE);
        self.finish_node();
        self.finish_node();
    }

    // =========================================================================
    // Grammar rules: expressions
    // =========================================================================

    /// Parse an expression. Returns false (consuming nothing) if none starts here.
    fn parse_expr(&mut self) -> bool {
        self.parse_expr_bp(0)
    }

    /// Case labels: a lambda arrow there belongs to the switch rule.
    fn parse_expr_no_lambda(&mut self) -> bool {
        if self.at(SyntaxKind::IDENT) && self.nth(1) == SyntaxKind::ARROW {
            self.start_node(SyntaxKind::NAME_REF);
            self.bump();
            self.finish_node();
            return true;
        }
        self.parse_expr_bp(TERNARY_BP + 1)
    }

    /// Binary operator at the current position: (binding power, token count).
    fn current_binary_op(&self) -> Option<(u8, usize)> {
        let kind = self.current();
        if kind.is_assign_op() {
            return Some((ASSIGN_BP, 1));
        }
        let bp = match kind {
            SyntaxKind::QUESTION => TERNARY_BP,
            SyntaxKind::PIPE_PIPE => 3,
            SyntaxKind::AMP_AMP => 4,
            SyntaxKind::PIPE => 5,
            SyntaxKind::CARET => 6,
            SyntaxKind::AMP => 7,
            SyntaxKind::EQ_EQ | SyntaxKind::BANG_EQ => 8,
            SyntaxKind::LT | SyntaxKind::LT_EQ | SyntaxKind::GT_EQ | SyntaxKind::INSTANCEOF_KW => 9,
            SyntaxKind::GT => {
                let run = self.adjacent_gt_run();
                return if run >= 2 {
                    Some((10, run))
                } else {
                    Some((9, 1))
                };
            }
            SyntaxKind::SHL => 10,
            SyntaxKind::PLUS | SyntaxKind::MINUS => 11,
            SyntaxKind::STAR | SyntaxKind::SLASH | SyntaxKind::PERCENT => 12,
            _ => return None,
        };
        Some((bp, 1))
    }

    fn parse_expr_bp(&mut self, min_bp: u8) -> bool {
        let checkpoint = self.checkpoint();
        if !self.parse_unary_expr() {
            return false;
        }

        while let Some((bp, token_count)) = self.current_binary_op() {
            if bp < min_bp {
                break;
            }
            match self.current() {
                kind if kind.is_assign_op() => {
                    self.start_node_at(checkpoint, SyntaxKind::ASSIGN_EXPR);
                    self.bump();
                    if !self.parse_expr_bp(ASSIGN_BP) {
                        self.error("expected expression after assignment");
                    }
                    self.finish_node();
                }
                SyntaxKind::QUESTION => {
                    self.start_node_at(checkpoint, SyntaxKind::CONDITIONAL_EXPR);
                    self.bump();
                    self.parse_expr();
                    self.expect(SyntaxKind::COLON);
                    if !self.parse_expr_bp(TERNARY_BP) {
                        self.error("expected expression after ':'");
                    }
                    self.finish_node();
                }
                SyntaxKind::INSTANCEOF_KW => {
                    self.start_node_at(checkpoint, SyntaxKind::INSTANCEOF_EXPR);
                    self.bump();
                    self.eat(SyntaxKind::FINAL_KW);
                    self.parse_type();
                    if self.at(SyntaxKind::IDENT) {
                        self.parse_name();
                    }
                    self.finish_node();
                }
                _ => {
                    self.start_node_at(checkpoint, SyntaxKind::BIN_EXPR);
                    for _ in 0..token_count {
                        self.bump();
                    }
                    if !self.parse_expr_bp(bp + 1) {
                        self.error("expected expression after operator");
                    }
                    self.finish_node();
                }
            }
        }
        true
    }

    fn parse_unary_expr(&mut self) -> bool {
        match self.current() {
            SyntaxKind::PLUS
            | SyntaxKind::MINUS
            | SyntaxKind::BANG
            | SyntaxKind::TILDE
            | SyntaxKind::PLUS_PLUS
            | SyntaxKind::MINUS_MINUS => {
                self.start_node(SyntaxKind::PREFIX_EXPR);
                self.bump();
                if !self.parse_unary_expr() {
                    self.error("expected operand");
                }
                self.finish_node();
                true
            }
            _ if self.at_lambda() => {
                self.parse_lambda();
                true
            }
            _ if self.at_cast() => {
                self.start_node(SyntaxKind::CAST_EXPR);
                self.bump();
                self.parse_type();
                while self.eat(SyntaxKind::AMP) {
                    self.parse_type();
                }
                self.expect(SyntaxKind::R_PAREN);
                if !self.parse_unary_expr() {
                    self.error("expected operand of cast");
                }
                self.finish_node();
                true
            }
            _ => self.parse_postfix_expr(),
        }
    }

    /// Lambda = (Name | '(' params ')') '->' (Block | Expr)
    fn parse_lambda(&mut self) {
        self.start_node(SyntaxKind::LAMBDA_EXPR);
        if self.at(SyntaxKind::IDENT) {
            self.parse_name();
        } else {
            self.start_node(SyntaxKind::LAMBDA_PARAMS);
            self.bump();
            while !self.at(SyntaxKind::R_PAREN) && !self.at_eof() {
                let pos_before = self.pos;
                if self.at(SyntaxKind::IDENT)
                    && matches!(self.nth(1), SyntaxKind::COMMA | SyntaxKind::R_PAREN)
                {
                    self.parse_name();
                } else {
                    self.parse_param();
                }
                if !self.eat(SyntaxKind::COMMA) || self.pos == pos_before {
                    break;
                }
            }
            self.expect(SyntaxKind::R_PAREN);
            self.finish_node();
        }
        self.expect(SyntaxKind::ARROW);
        if self.at(SyntaxKind::L_BRACE) {
            self.parse_block();
        } else if !self.parse_expr() {
            self.error("expected lambda body");
        }
        self.finish_node();
    }

    fn parse_postfix_expr(&mut self) -> bool {
        let checkpoint = self.checkpoint();
        if !self.parse_primary_expr() {
            return false;
        }

        loop {
            match self.current() {
                SyntaxKind::DOT => match self.nth(1) {
                    SyntaxKind::IDENT if self.nth(2) == SyntaxKind::L_PAREN => {
                        self.start_node_at(checkpoint, SyntaxKind::METHOD_CALL_EXPR);
                        self.bump();
                        self.parse_name_ref();
                        self.parse_arg_list();
                        self.finish_node();
                    }
                    SyntaxKind::IDENT => {
                        self.start_node_at(checkpoint, SyntaxKind::FIELD_ACCESS_EXPR);
                        self.bump();
                        self.parse_name_ref();
                        self.finish_node();
                    }
                    SyntaxKind::LT => {
                        // explicit generic method call: `recv.<T>name(args)`
                        self.start_node_at(checkpoint, SyntaxKind::METHOD_CALL_EXPR);
                        self.bump();
                        self.parse_type_args();
                        if self.at(SyntaxKind::IDENT) {
                            self.parse_name_ref();
                        } else {
                            self.error("expected method name");
                        }
                        self.parse_arg_list();
                        self.finish_node();
                    }
                    SyntaxKind::CLASS_KW => {
                        self.start_node_at(checkpoint, SyntaxKind::CLASS_LITERAL);
                        self.bump();
                        self.bump();
                        self.finish_node();
                    }
                    SyntaxKind::THIS_KW | SyntaxKind::SUPER_KW => {
                        self.start_node_at(checkpoint, SyntaxKind::FIELD_ACCESS_EXPR);
                        self.bump();
                        self.bump();
                        self.finish_node();
                    }
                    SyntaxKind::NEW_KW => {
                        self.start_node_at(checkpoint, SyntaxKind::NEW_EXPR);
                        self.bump();
                        self.bump();
                        self.parse_new_rest();
                        self.finish_node();
                    }
                    _ => {
                        self.start_node_at(checkpoint, SyntaxKind::FIELD_ACCESS_EXPR);
                        self.bump();
                        self.error("expected member name after '.'");
                        self.finish_node();
                        break;
                    }
                },
                SyntaxKind::L_BRACKET if self.nth(1) == SyntaxKind::R_BRACKET => {
                    // `Type[]` before `.class` or `::new`
                    self.start_node_at(checkpoint, SyntaxKind::TYPE_REF);
                    self.bump();
                    self.bump();
                    self.finish_node();
                }
                SyntaxKind::L_BRACKET => {
                    self.start_node_at(checkpoint, SyntaxKind::INDEX_EXPR);
                    self.bump();
                    self.parse_expr();
                    self.expect(SyntaxKind::R_BRACKET);
                    self.finish_node();
                }
                SyntaxKind::PLUS_PLUS | SyntaxKind::MINUS_MINUS => {
                    self.start_node_at(checkpoint, SyntaxKind::POSTFIX_EXPR);
                    self.bump();
                    self.finish_node();
                }
                SyntaxKind::COLON_COLON => {
                    self.start_node_at(checkpoint, SyntaxKind::METHOD_REF_EXPR);
                    self.bump();
                    if self.at(SyntaxKind::IDENT) {
                        self.parse_name_ref();
                    } else {
                        self.expect(SyntaxKind::NEW_KW);
                    }
                    self.finish_node();
                }
                _ => break,
            }
        }
        true
    }

    fn parse_name_ref(&mut self) {
        self.start_node(SyntaxKind::NAME_REF);
        self.expect(SyntaxKind::IDENT);
        self.finish_node();
    }

    fn parse_primary_expr(&mut self) -> bool {
        match self.current() {
            kind if kind.is_literal() => {
                self.start_node(SyntaxKind::LITERAL);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::IDENT => {
                if self.nth(1) == SyntaxKind::L_PAREN {
                    self.start_node(SyntaxKind::METHOD_CALL_EXPR);
                    self.parse_name_ref();
                    self.parse_arg_list();
                    self.finish_node();
                } else {
                    self.parse_name_ref();
                }
            }
            SyntaxKind::THIS_KW | SyntaxKind::SUPER_KW => {
                let kind = if self.at(SyntaxKind::THIS_KW) {
                    SyntaxKind::THIS_EXPR
                } else {
                    SyntaxKind::SUPER_EXPR
                };
                if self.nth(1) == SyntaxKind::L_PAREN {
                    // explicit constructor invocation
                    self.start_node(SyntaxKind::METHOD_CALL_EXPR);
                    self.start_node(kind);
                    self.bump();
                    self.finish_node();
                    self.parse_arg_list();
                    self.finish_node();
                } else {
                    self.start_node(kind);
                    self.bump();
                    self.finish_node();
                }
            }
            SyntaxKind::L_PAREN => {
                self.start_node(SyntaxKind::PAREN_EXPR);
                self.bump();
                if !self.parse_expr() {
                    self.error("expected expression");
                }
                self.expect(SyntaxKind::R_PAREN);
                self.finish_node();
            }
            SyntaxKind::NEW_KW => {
                self.start_node(SyntaxKind::NEW_EXPR);
                self.bump();
                self.parse_new_rest();
                self.finish_node();
            }
            SyntaxKind::SWITCH_KW => self.parse_switch(),
            kind if kind.is_primitive_type() => {
                self.start_node(SyntaxKind::TYPE_REF);
                self.bump();
                self.finish_node();
            }
            _ => {
                self.error(format!("expected expression, found {:?}", self.current()));
                return false;
            }
        }
        true
    }

    /// NewRest = TypeArgs? Type (ArgList ClassBody? | ('[' Expr? ']')+ ArrayInit?)
    fn parse_new_rest(&mut self) {
        if self.at(SyntaxKind::LT) {
            self.parse_type_args();
        }
        self.start_node(SyntaxKind::TYPE_REF);
        self.parse_type_inner();
        self.finish_node();

        if self.at(SyntaxKind::L_PAREN) {
            self.parse_arg_list();
            if self.at(SyntaxKind::L_BRACE) {
                self.parse_class_body(false);
            }
        } else if self.at(SyntaxKind::L_BRACKET) {
            while self.eat(SyntaxKind::L_BRACKET) {
                if !self.at(SyntaxKind::R_BRACKET) {
                    self.parse_expr();
                }
                self.expect(SyntaxKind::R_BRACKET);
            }
            if self.at(SyntaxKind::L_BRACE) {
                self.parse_array_init();
            }
        } else {
            self.error("expected '(' or '[' after type in new expression");
        }
    }

    /// ArrayInit = '{' (VarInit (',' VarInit)*)? ','? '}'
    fn parse_array_init(&mut self) {
        self.start_node(SyntaxKind::ARRAY_INIT);
        self.expect(SyntaxKind::L_BRACE);
        while !self.at(SyntaxKind::R_BRACE) && !self.at_eof() {
            let pos_before = self.pos;
            self.parse_var_init();
            if !self.eat(SyntaxKind::COMMA) || self.pos == pos_before {
                break;
            }
        }
        self.expect(SyntaxKind::R_BRACE);
        self.finish_node();
    }

    /// ArgList = '(' (Expr (',' Expr)*)? ')'
    fn parse_arg_list(&mut self) {
        self.start_node(SyntaxKind::ARG_LIST);
        self.expect(SyntaxKind::L_PAREN);
        while !self.at(SyntaxKind::R_PAREN) && !self.at_eof() {
            let pos_before = self.pos;
            if !self.parse_expr() {
                break;
            }
            if !self.eat(SyntaxKind::COMMA) || self.pos == pos_before {
                break;
            }
        }
        if !self.eat(SyntaxKind::R_PAREN) {
            self.error("expected ')' to close argument list");
        }
        self.finish_node();
    }
}
