//! Token stream to syntax tree
//!
//! A minimal hand-written parser for a few statement forms, exercising the
//! boundary a real parser uses: `TokenStream` in, role-checked nodes out.

use lumen::ast::{
    AstNode, Binary, Expression, FoldedLiteral, Node, NodeKind, Statement, StringPart,
    VariableDefinition, Visitor, walk_node,
};
use lumen::frontend::core::lexer::{InterpolationPart, StreamError};
use lumen::{tokenize, Position, Token, TokenKind, TokenStream, Value};

fn primary(stream: &mut TokenStream) -> Result<Expression, StreamError> {
    let token = match stream.advance() {
        Some(token) => token.clone(),
        None => {
            return Err(StreamError::UnexpectedEnd {
                expected: TokenKind::Identifier,
            })
        }
    };
    let position = token.position();
    let kind = match &token {
        Token::Simple(simple) => match simple.kind {
            TokenKind::Int => NodeKind::Int(simple.raw.parse().unwrap()),
            TokenKind::Float => NodeKind::Float(simple.raw.parse().unwrap()),
            TokenKind::String => NodeKind::String(simple.raw.clone()),
            TokenKind::Null => NodeKind::Null,
            TokenKind::True => NodeKind::Bool(true),
            TokenKind::False => NodeKind::Bool(false),
            _ => NodeKind::Variable(simple.raw.clone()),
        },
        Token::Interpolated(interpolated) => {
            let mut parts = Vec::new();
            for part in interpolated.parts() {
                match part {
                    InterpolationPart::Text(text) => parts.push(StringPart::Text(text.to_string())),
                    InterpolationPart::Embedded(tokens) => {
                        let mut inner = TokenStream::new(tokens.to_vec());
                        parts.push(StringPart::Expression(expression(&mut inner)?));
                    }
                }
            }
            NodeKind::InterpolatedString(parts)
        }
    };
    Ok(Node::new(kind, position).into_expression().unwrap())
}

fn expression(stream: &mut TokenStream) -> Result<Expression, StreamError> {
    let left = primary(stream)?;
    if stream.check(TokenKind::Operator) {
        let operator = stream.advance().and_then(Token::raw).unwrap().to_string();
        let right = expression(stream)?;
        let position = left.position;
        let node = Node::new(NodeKind::Binary(Binary { left, right, operator }), position);
        return Ok(node.into_expression().unwrap());
    }
    Ok(left)
}

/// `let name = expression;`
fn let_statement(stream: &mut TokenStream) -> Result<Statement, StreamError> {
    let position = stream.expect(TokenKind::Keyword)?.position();
    let name = stream.expect(TokenKind::Identifier)?.raw().unwrap().to_string();
    stream.expect(TokenKind::Equals)?;
    let value = expression(stream)?;
    stream.expect(TokenKind::Semicolon)?;
    let node = Node::new(
        NodeKind::VariableDefinition(VariableDefinition::simple(name, Some(value))),
        position,
    );
    Ok(node.into_statement().unwrap())
}

fn parse(lines: &[&str]) -> Result<Vec<Statement>, StreamError> {
    let mut stream = TokenStream::new(tokenize(lines).unwrap());
    let mut statements = Vec::new();
    while !stream.is_at_end() {
        statements.push(let_statement(&mut stream)?);
    }
    Ok(statements)
}

#[derive(Default)]
struct Names(Vec<String>);

impl Visitor for Names {
    fn visit_node(
        &mut self,
        node: &Node,
    ) {
        self.0.push(node.to_string());
        walk_node(self, node);
    }
}

#[test]
fn test_let_statement_tree() {
    let statements = parse(&["let x = 1 + 2;"]).unwrap();
    assert_eq!(statements.len(), 1);

    let NodeKind::VariableDefinition(definition) = &statements[0].kind else {
        panic!("Expected VariableDefinition");
    };
    assert_eq!(definition.names.head(), "x");
    let value = definition.value.as_ref().unwrap();
    let NodeKind::Binary(binary) = &value.kind else {
        panic!("Expected Binary");
    };
    assert_eq!(binary.operator, "+");
    assert_eq!(binary.right.kind, NodeKind::Int(2));
    assert_eq!(binary.right.position, Position::new(1, 13));
}

#[test]
fn test_interpolated_string_tree_positions() {
    let statements = parse(&["let a = 1;", r#"let msg = $"a={a * 2}!";"#]).unwrap();

    let mut names = Names::default();
    statements[1].accept(&mut names);
    assert_eq!(
        names.0,
        vec![
            "VariableDefinition@2:1",
            "InterpolatedString@2:11",
            "Binary@2:16",
            "Variable@2:16",
            "Int@2:20",
        ]
    );
}

#[test]
fn test_stream_error_from_parser() {
    let err = parse(&["let = 3;"]).unwrap_err();
    assert_eq!(
        err,
        StreamError::UnexpectedToken {
            expected: TokenKind::Identifier,
            found: "EQUALS '='".to_string(),
            position: Position::new(1, 5),
        }
    );

    let err = parse(&["let y = 3"]).unwrap_err();
    assert_eq!(
        err,
        StreamError::UnexpectedEnd {
            expected: TokenKind::Semicolon
        }
    );
}

#[test]
fn test_folded_default_survives_repeated_evaluation() {
    // A folded list literal used as a default value, read once per call
    let default = Node::folded(
        FoldedLiteral::new(Value::list(vec![Value::Int(1)])),
        Position::new(1, 20),
    );
    let NodeKind::Literal(literal) = &default.kind else {
        panic!("Expected Literal");
    };

    for _ in 0..3 {
        let argument = literal.read();
        if let Value::List(items) = &argument {
            items.write().push(Value::Int(99));
        }
        assert_eq!(argument.element_count(), Some(2));
    }
    assert_eq!(literal.peek().element_count(), Some(1));
    assert_eq!(default.display_name(), "Literal");
}
