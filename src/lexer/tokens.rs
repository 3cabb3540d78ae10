use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{errors::errors::LexErrorKind, Position};

lazy_static! {
    /// Keywords, matched exactly (and case-sensitively) against identifier runs.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        for kind in KEYWORDS {
            map.insert(kind.as_str(), *kind);
        }
        map
    };

    /// Single characters that never start a longer token.
    pub static ref SIMPLE_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        for kind in SIMPLE_TOKENS {
            if let Some(c) = kind.as_str().chars().next() {
                map.insert(c, *kind);
            }
        }
        map
    };
}

/// Surface text of the two boolean literals.
pub const BOOLEAN_LITERALS: [&str; 2] = ["TRUE", "FALSE"];

const SIMPLE_TOKENS: &[TokenKind] = &[
    TokenKind::EOL,
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::Star,
    TokenKind::Caret,
    TokenKind::Colon,
    TokenKind::Equals,
    TokenKind::Ampersand,
    TokenKind::OpenParen,
    TokenKind::CloseParen,
    TokenKind::OpenBracket,
    TokenKind::CloseBracket,
    TokenKind::Comma,
];

const KEYWORDS: &[TokenKind] = &[
    TokenKind::Integer,
    TokenKind::Real,
    TokenKind::Char,
    TokenKind::String,
    TokenKind::Boolean,
    TokenKind::Date,
    TokenKind::While,
    TokenKind::EndWhile,
    TokenKind::Repeat,
    TokenKind::Until,
    TokenKind::For,
    TokenKind::To,
    TokenKind::Step,
    TokenKind::Next,
    TokenKind::Declare,
    TokenKind::Constant,
    TokenKind::Array,
    TokenKind::Of,
    TokenKind::Type,
    TokenKind::EndType,
    TokenKind::Input,
    TokenKind::Output,
    TokenKind::And,
    TokenKind::Or,
    TokenKind::Not,
    TokenKind::Procedure,
    TokenKind::EndProcedure,
    TokenKind::Call,
    TokenKind::ByRef,
    TokenKind::ByVal,
    TokenKind::Function,
    TokenKind::Returns,
    TokenKind::Return,
    TokenKind::EndFunction,
    TokenKind::If,
    TokenKind::Then,
    TokenKind::Else,
    TokenKind::ElseIf,
    TokenKind::EndIf,
    TokenKind::Case,
    TokenKind::Otherwise,
    TokenKind::EndCase,
    TokenKind::Mod,
    TokenKind::Div,
    TokenKind::OpenFile,
    TokenKind::ReadFile,
    TokenKind::WriteFile,
    TokenKind::CloseFile,
    TokenKind::Read,
    TokenKind::Write,
    TokenKind::Append,
    TokenKind::Public,
    TokenKind::Private,
    TokenKind::Class,
    TokenKind::EndClass,
    TokenKind::Inherits,
    TokenKind::New,
];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Illegal,
    EOF,
    EOL,

    Identifier,

    // Native datatypes, shared with their literals
    Integer,
    Real,
    Char,
    String,
    Boolean,
    Date,

    // Reserved
    While,
    EndWhile,
    Repeat,
    Until,
    For,
    To,
    Step,
    Next,
    Declare,
    Constant,
    Array,
    Of,
    Type,
    EndType,
    Input,
    Output,
    And,
    Or,
    Not,
    Procedure,
    EndProcedure,
    Call,
    ByRef,
    ByVal,
    Function,
    Returns,
    Return,
    EndFunction,
    If,
    Then,
    Else,
    ElseIf,
    EndIf,
    Case,
    Otherwise,
    EndCase,
    OpenFile,
    ReadFile,
    WriteFile,
    CloseFile,
    Read,
    Write,
    Append,
    Public,
    Private,
    Class,
    EndClass,
    Inherits,
    New,

    Mod,
    Div,
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    Dot,
    Ampersand,

    Assignment, // <-
    Colon,

    Equals,    // =
    NotEquals, // <>
    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    Comma,
    DoubleQuote,
    SingleQuote,
}

impl TokenKind {
    /// Canonical text of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::EOF => "",
            TokenKind::EOL => "\n",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Integer => "INTEGER",
            TokenKind::Real => "REAL",
            TokenKind::Char => "CHAR",
            TokenKind::String => "STRING",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::Date => "DATE",
            TokenKind::While => "WHILE",
            TokenKind::EndWhile => "ENDWHILE",
            TokenKind::Repeat => "REPEAT",
            TokenKind::Until => "UNTIL",
            TokenKind::For => "FOR",
            TokenKind::To => "TO",
            TokenKind::Step => "STEP",
            TokenKind::Next => "NEXT",
            TokenKind::Declare => "DECLARE",
            TokenKind::Constant => "CONSTANT",
            TokenKind::Array => "ARRAY",
            TokenKind::Of => "OF",
            TokenKind::Type => "TYPE",
            TokenKind::EndType => "ENDTYPE",
            TokenKind::Input => "INPUT",
            TokenKind::Output => "OUTPUT",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::Procedure => "PROCEDURE",
            TokenKind::EndProcedure => "ENDPROCEDURE",
            TokenKind::Call => "CALL",
            TokenKind::ByRef => "BYREF",
            TokenKind::ByVal => "BYVAL",
            TokenKind::Function => "FUNCTION",
            TokenKind::Returns => "RETURNS",
            TokenKind::Return => "RETURN",
            TokenKind::EndFunction => "ENDFUNCTION",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Else => "ELSE",
            TokenKind::ElseIf => "ELSEIF",
            TokenKind::EndIf => "ENDIF",
            TokenKind::Case => "CASE",
            TokenKind::Otherwise => "OTHERWISE",
            TokenKind::EndCase => "ENDCASE",
            TokenKind::OpenFile => "OPENFILE",
            TokenKind::ReadFile => "READFILE",
            TokenKind::WriteFile => "WRITEFILE",
            TokenKind::CloseFile => "CLOSEFILE",
            TokenKind::Read => "READ",
            TokenKind::Write => "WRITE",
            TokenKind::Append => "APPEND",
            TokenKind::Public => "PUBLIC",
            TokenKind::Private => "PRIVATE",
            TokenKind::Class => "CLASS",
            TokenKind::EndClass => "ENDCLASS",
            TokenKind::Inherits => "INHERITS",
            TokenKind::New => "NEW",
            TokenKind::Mod => "MOD",
            TokenKind::Div => "DIV",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Caret => "^",
            TokenKind::Dot => ".",
            TokenKind::Ampersand => "&",
            TokenKind::Assignment => "<-",
            TokenKind::Colon => ":",
            TokenKind::Equals => "=",
            TokenKind::NotEquals => "<>",
            TokenKind::Less => "<",
            TokenKind::LessEquals => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEquals => ">=",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::Comma => ",",
            TokenKind::DoubleQuote => "\"",
            TokenKind::SingleQuote => "'",
        }
    }

    /// Whether the kind names one of the built-in datatypes.
    pub fn is_native_type(&self) -> bool {
        matches!(
            self,
            TokenKind::Integer
                | TokenKind::Real
                | TokenKind::Char
                | TokenKind::String
                | TokenKind::Boolean
                | TokenKind::Date
        )
    }

    /// How the kind is named when the parser expects it.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::EOF => String::from("end of file"),
            TokenKind::EOL => String::from("end of line"),
            TokenKind::Identifier => String::from("an identifier"),
            kind => format!("`{}`", kind.as_str()),
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
    pub is_literal: bool,
    pub error: Option<LexErrorKind>,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token({}, {:?}, line={}, column={})",
            self.kind, self.value, self.position.line, self.position.column
        )
    }
}

impl Token {
    fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// Whether the token is an identifier or a value literal, i.e. can form an atom.
    pub fn is_atom(&self) -> bool {
        self.kind == TokenKind::Identifier || self.is_literal
    }

    /// Whether the token marks the end of a statement.
    pub fn is_end_of_statement(&self) -> bool {
        self.is_one_of_many(&[TokenKind::EOL, TokenKind::EOF])
    }

    /// Text used when the token is reported in a diagnostic.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::EOL | TokenKind::EOF => self.kind.describe(),
            _ => self.value.clone(),
        }
    }

    /// The value of a string or char literal without its quotes; other
    /// tokens return their text unchanged.
    pub fn unquoted(&self) -> &str {
        if self.is_literal && self.is_one_of_many(&[TokenKind::String, TokenKind::Char]) {
            return &self.value[1..self.value.len() - 1];
        }

        &self.value
    }
}
