// src/graphql/parser.rs

//! Lexer and recursive-descent parser for the supported query subset.
//!
//! Grammar:
//!
//! ```text
//! document      := '{' field+ '}'
//! field         := NAME arguments? selection_set?
//! arguments     := '(' (NAME ':' value)+ ')'
//! value         := INT | STRING | NAME
//! selection_set := '{' field+ '}'
//! ```
//!
//! Commas are treated as whitespace, as in GraphQL proper.

use std::fmt;

use thiserror::Error;

/// Parse failure. The message ends up verbatim in the result's error list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Syntax error: unexpected end of query")]
    UnexpectedEof,

    #[error("Syntax error: unexpected character '{0}'")]
    UnexpectedChar(char),

    #[error("Syntax error: unexpected token '{found}', expected {expected}")]
    UnexpectedToken { found: String, expected: &'static str },

    #[error("Syntax error: unterminated string literal")]
    UnterminatedString,

    #[error("Syntax error: invalid integer literal '{0}'")]
    InvalidInt(String),
}

/// An argument or literal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Str(String),
    Name(String),
}

/// One requested field with its arguments and nested selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub arguments: Vec<(String, Value)>,
    pub selections: Vec<Field>,
}

/// A parsed query document: the root selection set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub fields: Vec<Field>,
}

/// Parse a raw query string into a document.
pub fn parse(input: &str) -> Result<Document, ParseError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser { tokens, pos: 0 };
    let fields = parser.selection_set()?;
    parser.expect_end()?;
    Ok(Document { fields })
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    LeftBrace,
    RightBrace,
    LeftParen,
    RightParen,
    Colon,
    Name(String),
    Int(i64),
    Str(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LeftBrace => write!(f, "{{"),
            Token::RightBrace => write!(f, "}}"),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
            Token::Colon => write!(f, ":"),
            Token::Name(name) => write!(f, "{name}"),
            Token::Int(n) => write!(f, "{n}"),
            Token::Str(s) => write!(f, "\"{s}\""),
        }
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            // Commas count as whitespace
            c if c.is_whitespace() || c == ',' => {
                chars.next();
            }
            '{' => {
                chars.next();
                tokens.push(Token::LeftBrace);
            }
            '}' => {
                chars.next();
                tokens.push(Token::RightBrace);
            }
            '(' => {
                chars.next();
                tokens.push(Token::LeftParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RightParen);
            }
            ':' => {
                chars.next();
                tokens.push(Token::Colon);
            }
            '"' => {
                chars.next();
                let mut value = String::new();
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(escaped) => value.push(escaped),
                            None => return Err(ParseError::UnterminatedString),
                        },
                        Some(other) => value.push(other),
                        None => return Err(ParseError::UnterminatedString),
                    }
                }
                tokens.push(Token::Str(value));
            }
            c if c.is_ascii_digit() || c == '-' => {
                let mut literal = String::new();
                literal.push(c);
                chars.next();
                while let Some(&d) = chars.peek() {
                    if d.is_ascii_digit() {
                        literal.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let n = literal
                    .parse::<i64>()
                    .map_err(|_| ParseError::InvalidInt(literal.clone()))?;
                tokens.push(Token::Int(n));
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut name = String::new();
                while let Some(&d) = chars.peek() {
                    if d.is_ascii_alphanumeric() || d == '_' {
                        name.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token::Name(name));
            }
            other => return Err(ParseError::UnexpectedChar(other)),
        }
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Result<Token, ParseError> {
        let token = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        token.ok_or(ParseError::UnexpectedEof)
    }

    fn expect(&mut self, expected: Token, label: &'static str) -> Result<(), ParseError> {
        let token = self.next()?;
        if token == expected {
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken {
                found: token.to_string(),
                expected: label,
            })
        }
    }

    fn expect_end(&self) -> Result<(), ParseError> {
        match self.peek() {
            None => Ok(()),
            Some(token) => Err(ParseError::UnexpectedToken {
                found: token.to_string(),
                expected: "end of query",
            }),
        }
    }

    /// `'{' field+ '}'`
    fn selection_set(&mut self) -> Result<Vec<Field>, ParseError> {
        self.expect(Token::LeftBrace, "{")?;

        let mut fields = Vec::new();
        loop {
            match self.peek() {
                Some(Token::RightBrace) => {
                    self.pos += 1;
                    break;
                }
                Some(Token::Name(_)) => fields.push(self.field()?),
                Some(token) => {
                    return Err(ParseError::UnexpectedToken {
                        found: token.to_string(),
                        expected: "a field name",
                    });
                }
                None => return Err(ParseError::UnexpectedEof),
            }
        }

        if fields.is_empty() {
            return Err(ParseError::UnexpectedToken {
                found: "}".to_string(),
                expected: "a field name",
            });
        }
        Ok(fields)
    }

    /// `NAME arguments? selection_set?`
    fn field(&mut self) -> Result<Field, ParseError> {
        let name = match self.next()? {
            Token::Name(name) => name,
            token => {
                return Err(ParseError::UnexpectedToken {
                    found: token.to_string(),
                    expected: "a field name",
                });
            }
        };

        let arguments = if self.peek() == Some(&Token::LeftParen) {
            self.arguments()?
        } else {
            Vec::new()
        };

        let selections = if self.peek() == Some(&Token::LeftBrace) {
            self.selection_set()?
        } else {
            Vec::new()
        };

        Ok(Field {
            name,
            arguments,
            selections,
        })
    }

    /// `'(' (NAME ':' value)+ ')'`
    fn arguments(&mut self) -> Result<Vec<(String, Value)>, ParseError> {
        self.expect(Token::LeftParen, "(")?;

        let mut arguments = Vec::new();
        loop {
            match self.next()? {
                Token::RightParen => break,
                Token::Name(name) => {
                    self.expect(Token::Colon, ":")?;
                    arguments.push((name, self.value()?));
                }
                token => {
                    return Err(ParseError::UnexpectedToken {
                        found: token.to_string(),
                        expected: "an argument name",
                    });
                }
            }
        }
        Ok(arguments)
    }

    fn value(&mut self) -> Result<Value, ParseError> {
        match self.next()? {
            Token::Int(n) => Ok(Value::Int(n)),
            Token::Str(s) => Ok(Value::Str(s)),
            Token::Name(name) => Ok(Value::Name(name)),
            token => Err(ParseError::UnexpectedToken {
                found: token.to_string(),
                expected: "a value",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_bare_list_query() {
        let doc = parse("{ sneakerList { id title } }").unwrap();
        assert_eq!(doc.fields.len(), 1);
        let field = &doc.fields[0];
        assert_eq!(field.name, "sneakerList");
        assert!(field.arguments.is_empty());
        let names: Vec<_> = field.selections.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id", "title"]);
    }

    #[test]
    fn parses_an_integer_argument() {
        let doc = parse("{ sneaker(id: 3) { id } }").unwrap();
        let field = &doc.fields[0];
        assert_eq!(
            field.arguments,
            vec![("id".to_string(), Value::Int(3))]
        );
    }

    #[test]
    fn parses_a_string_argument() {
        let doc = parse(r#"{ sneaker(id: "b") { id } }"#).unwrap();
        assert_eq!(
            doc.fields[0].arguments,
            vec![("id".to_string(), Value::Str("b".to_string()))]
        );
    }

    #[test]
    fn commas_are_whitespace() {
        let doc = parse("{sneakerList{id,title,price}}").unwrap();
        assert_eq!(doc.fields[0].selections.len(), 3);
    }

    #[test]
    fn parses_multiple_root_fields() {
        let doc = parse("{ sneaker(id: 1) { id } sneakerList { id } }").unwrap();
        assert_eq!(doc.fields.len(), 2);
    }

    #[test]
    fn rejects_unbalanced_braces() {
        assert_eq!(parse("{ sneakerList { id }"), Err(ParseError::UnexpectedEof));
    }

    #[test]
    fn rejects_an_empty_query() {
        assert!(parse("").is_err());
        assert!(parse("{}").is_err());
    }

    #[test]
    fn rejects_trailing_garbage() {
        assert!(matches!(
            parse("{ sneakerList { id } } extra"),
            Err(ParseError::UnexpectedToken { .. })
        ));
    }

    #[test]
    fn rejects_stray_characters() {
        assert_eq!(
            parse("{ sneaker(id: 3) { id } } @"),
            Err(ParseError::UnexpectedChar('@'))
        );
    }

    #[test]
    fn rejects_unterminated_strings() {
        assert_eq!(
            parse(r#"{ sneaker(id: "b) { id } }"#),
            Err(ParseError::UnterminatedString)
        );
    }

    #[test]
    fn negative_integers_lex_as_one_token() {
        let doc = parse("{ sneaker(id: -7) { id } }").unwrap();
        assert_eq!(
            doc.fields[0].arguments,
            vec![("id".to_string(), Value::Int(-7))]
        );
    }
}
